use thiserror::Error;

#[derive(Error, Debug)]
pub enum FluentApiError {
    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrlError(#[from] url::ParseError),

    #[error("HTTP {status} from {url}: {body}")]
    HttpError {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Missing id field '{field}' for {url}")]
    MissingIdError { field: String, url: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FluentApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RequestError(_) => ErrorSeverity::Medium,
            Self::HttpError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            Self::HttpError { .. } => ErrorSeverity::High,
            Self::MissingIdError { .. } | Self::ValidationError { .. } => ErrorSeverity::High,
            Self::SerializationError(_) => ErrorSeverity::High,
            Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ConfigParseError { .. }
            | Self::InvalidUrlError(_) => ErrorSeverity::Critical,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 暫時性錯誤 (連線失敗、逾時、5xx、429) 可重試
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RequestError(e) => e.is_timeout() || e.is_connect(),
            Self::HttpError { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::RequestError(_) => "Check that the console API endpoint is reachable",
            Self::HttpError { status: 401, .. } | Self::HttpError { status: 403, .. } => {
                "Check that the API token is valid and has access to this resource"
            }
            Self::HttpError { .. } => "Inspect the response body for details from the backend",
            Self::MissingIdError { .. } => "Call set_id before dispatching this action",
            Self::ValidationError { .. } => "Fix the call parameters and retry",
            Self::SerializationError(_) => "Check that the response matches the expected model",
            Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ConfigParseError { .. }
            | Self::InvalidUrlError(_) => "Review the client configuration file and flags",
            Self::IoError(_) => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, FluentApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_severity_and_retry() {
        let server_side = FluentApiError::HttpError {
            status: 503,
            url: "/inventory/server/list".to_string(),
            body: String::new(),
        };
        assert_eq!(server_side.severity(), ErrorSeverity::Medium);
        assert!(server_side.is_retryable());

        let not_found = FluentApiError::HttpError {
            status: 404,
            url: "/inventory/server/get".to_string(),
            body: "not found".to_string(),
        };
        assert_eq!(not_found.severity(), ErrorSeverity::High);
        assert!(!not_found.is_retryable());
    }

    #[test]
    fn test_missing_id_message() {
        let err = FluentApiError::MissingIdError {
            field: "collector_id".to_string(),
            url: "/inventory/collector/get".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing id field 'collector_id' for /inventory/collector/get"
        );
        assert!(!err.is_retryable());
    }
}
