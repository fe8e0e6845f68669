use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A fully parameterized REST call, ready to hand to a [`Transport`](super::ports::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method: Method,
    pub url: String,
    pub body: Value,
}

impl ApiCall {
    pub fn new(method: Method, url: impl Into<String>, body: Value) -> Self {
        Self {
            method,
            url: url.into(),
            body,
        }
    }

    /// dry-run 輸出用
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "method": self.method.as_str(),
            "url": self.url,
            "body": self.body,
        })
    }
}

/// Standard envelope of every `list` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            total_count: None,
        }
    }
}

pub type Tags = HashMap<String, String>;
