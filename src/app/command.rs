use crate::config::cli::CliArgs;
use crate::config::ClientConfig;
use crate::core::resource::DynamicAction;
use crate::core::ActionKind;
use crate::utils::error::{FluentApiError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use crate::FluentApi;
use serde_json::Value;

/// Parses `key=value`; the value is taken as JSON when it parses, otherwise as a string.
pub fn parse_param(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        FluentApiError::validation(format!("parameter '{}' is not in key=value form", raw))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(FluentApiError::validation(format!(
            "parameter '{}' has an empty key",
            raw
        )));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// 合併設定檔、環境變數與命令列參數，命令列優先
pub fn resolve_config(args: &CliArgs) -> Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => {
            let endpoint = args
                .endpoint
                .clone()
                .or_else(|| std::env::var(crate::config::ENDPOINT_ENV).ok());
            ClientConfig::new(validate_required_field("endpoint", &endpoint)?.clone())
        }
    }
    .apply_env_overrides();

    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(token) = &args.token {
        config.token = Some(token.clone());
    }
    if let Some(timeout) = args.timeout_seconds {
        config.timeout_seconds = Some(timeout);
    }

    config.validate()?;
    Ok(config)
}

fn apply_common<K: ActionKind>(
    mut action: DynamicAction<K>,
    id: Option<&str>,
    params: &[(String, Value)],
) -> DynamicAction<K> {
    if let Some(id) = id {
        action = action.set_id(id);
    }
    for (key, value) in params {
        action = action.set(key.clone(), value.clone());
    }
    action
}

async fn finish<K: ActionKind>(action: DynamicAction<K>, dry_run: bool) -> Result<Value> {
    if dry_run {
        Ok(action.to_call()?.to_json())
    } else {
        action.execute().await
    }
}

pub async fn run(api: &FluentApi, args: &CliArgs) -> Result<Value> {
    let id_field = args.id_field();
    let resource = api.resource(&args.service, &args.resource, Some(&id_field))?;
    let params = args
        .params
        .iter()
        .map(|raw| parse_param(raw))
        .collect::<Result<Vec<_>>>()?;
    let id = args.id.as_deref();

    tracing::debug!(
        "Running {} on {} with {} parameter(s)",
        args.action,
        resource.base_url(),
        params.len()
    );

    match args.action.as_str() {
        "create" => finish(apply_common(resource.create(), id, &params), args.dry_run).await,
        "update" => finish(apply_common(resource.update(), id, &params), args.dry_run).await,
        "delete" => finish(apply_common(resource.delete(), id, &params), args.dry_run).await,
        "get" => finish(apply_common(resource.get(), id, &params), args.dry_run).await,
        "collect" => finish(apply_common(resource.collect(), id, &params), args.dry_run).await,
        "list" => {
            if id.is_some() {
                return Err(FluentApiError::validation(
                    "--id is not accepted by list; use --param to filter",
                ));
            }
            let mut list = apply_common(resource.list(), None, &params);
            if let Some(keyword) = &args.keyword {
                list = list.set_keyword(keyword.clone());
            }
            if let Some(limit) = args.limit {
                list = list.set_page_limit(limit);
            }
            finish(list, args.dry_run).await
        }
        other => Err(FluentApiError::validation(format!(
            "unknown action '{}'; expected create, update, delete, get, list or collect",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ApiCall, Transport};
    use async_trait::async_trait;
    use clap::Parser;
    use serde_json::json;
    use std::sync::Arc;

    struct EchoTransport;

    #[async_trait]
    impl Transport for EchoTransport {
        async fn dispatch(&self, call: &ApiCall) -> Result<Value> {
            Ok(call.to_json())
        }
    }

    fn args(argv: &[&str]) -> CliArgs {
        let mut full = vec!["fluent-api"];
        full.extend_from_slice(argv);
        CliArgs::parse_from(full)
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(parse_param("name=web").unwrap(), ("name".to_string(), json!("web")));
        assert_eq!(parse_param("priority=5").unwrap(), ("priority".to_string(), json!(5)));
        assert_eq!(
            parse_param(r#"tags={"env":"prod"}"#).unwrap(),
            ("tags".to_string(), json!({"env": "prod"}))
        );
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[tokio::test]
    async fn test_dry_run_get() {
        let api = FluentApi::new(Arc::new(EchoTransport));
        let args = args(&[
            "--dry-run", "inventory", "collector", "get", "--id", "collector-1",
        ]);
        let out = run(&api, &args).await.unwrap();
        assert_eq!(
            out,
            json!({
                "method": "POST",
                "url": "/inventory/collector/get",
                "body": {"collector_id": "collector-1"}
            })
        );
    }

    #[tokio::test]
    async fn test_list_with_keyword_and_limit() {
        let api = FluentApi::new(Arc::new(EchoTransport));
        let args = args(&[
            "identity", "service-account", "list", "--keyword", "prod", "--limit", "5",
        ]);
        let out = run(&api, &args).await.unwrap();
        assert_eq!(out["url"], "/identity/service-account/list");
        assert_eq!(
            out["body"],
            json!({"query": {"keyword": "prod", "page": {"start": 1, "limit": 5}}})
        );
    }

    #[tokio::test]
    async fn test_custom_id_field_and_missing_id() {
        let api = FluentApi::new(Arc::new(EchoTransport));
        let ok = args(&[
            "repository", "schema", "get", "--id-field", "name", "--id", "aws_access_key",
        ]);
        let out = run(&api, &ok).await.unwrap();
        assert_eq!(out["body"], json!({"name": "aws_access_key"}));

        let missing = args(&["secret", "secret", "delete"]);
        assert!(matches!(
            run(&api, &missing).await,
            Err(FluentApiError::MissingIdError { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_rejects_id() {
        let api = FluentApi::new(Arc::new(EchoTransport));
        let with_id = args(&["--dry-run", "inventory", "server", "list", "--id", "server-1"]);
        assert!(matches!(
            run(&api, &with_id).await,
            Err(FluentApiError::ValidationError { .. })
        ));

        let plain = args(&["--dry-run", "inventory", "server", "list"]);
        let out = run(&api, &plain).await.unwrap();
        assert_eq!(out["body"], json!({}));
    }

    #[tokio::test]
    async fn test_unknown_action() {
        let api = FluentApi::new(Arc::new(EchoTransport));
        assert!(run(&api, &args(&["inventory", "server", "purge"])).await.is_err());
    }

    #[test]
    fn test_resolve_config_flags_override_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[client]\nendpoint = \"https://a.example.com\"\ntoken = \"file-token\"\n")
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = args(&[
            "--config", &path, "--token", "flag-token", "inventory", "server", "list",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.token.as_deref(), Some("flag-token"));
    }
}
