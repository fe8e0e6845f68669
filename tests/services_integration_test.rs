use anyhow::Result;
use fluent_api::services::identity::project::ProjectUpdateParameter;
use fluent_api::services::secret::secret::SecretCreateParameter;
use fluent_api::{ClientConfig, FluentApi};
use httpmock::prelude::*;
use serde_json::{json, Map};

fn api_for(server: &MockServer) -> Result<FluentApi> {
    Ok(FluentApi::from_config(&ClientConfig::new(server.base_url()))?)
}

#[tokio::test]
async fn test_project_update_keeps_id_after_parameter_replace() -> Result<()> {
    let server = MockServer::start();
    let update_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/identity/project/update")
            .json_body(json!({"project_id": "project-1", "name": "renamed"}));
        then.status(200)
            .json_body(json!({"project_id": "project-1", "name": "renamed"}));
    });

    let api = api_for(&server)?;
    let project = api
        .identity()
        .project()
        .update()
        .set_id("project-1")
        .set_parameter(ProjectUpdateParameter {
            name: Some("renamed".to_string()),
            ..Default::default()
        })
        .execute()
        .await?;

    update_mock.assert();
    assert_eq!(project.name, "renamed");
    Ok(())
}

#[tokio::test]
async fn test_secret_create_and_group_list() -> Result<()> {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/secret/secret/create")
            .json_body(json!({
                "name": "aws-key",
                "data": {"aws_access_key_id": "AKIA"},
                "secret_type": "CREDENTIALS"
            }));
        then.status(200)
            .json_body(json!({"secret_id": "secret-1", "name": "aws-key"}));
    });
    let list_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/secret/secret-group/list")
            .json_body(json!({"query": {"count_only": true}}));
        then.status(200).json_body(json!({"total_count": 3}));
    });

    let api = api_for(&server)?;

    let mut data = Map::new();
    data.insert("aws_access_key_id".to_string(), json!("AKIA"));
    let secret = api
        .secret()
        .secret()
        .create()
        .set_parameter(SecretCreateParameter {
            name: "aws-key".to_string(),
            data,
            secret_type: Some("CREDENTIALS".to_string()),
            ..Default::default()
        })
        .execute()
        .await?;
    assert_eq!(secret.secret_id, "secret-1");

    let groups = api
        .secret()
        .secret_group()
        .list()
        .set_count_only(true)
        .execute()
        .await?;
    assert!(groups.results.is_empty());
    assert_eq!(groups.total_count, Some(3));

    create_mock.assert();
    list_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_repository_schema_get_by_name() -> Result<()> {
    let server = MockServer::start();
    let get_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/repository/schema/get")
            .json_body(json!({"name": "aws_access_key", "only": ["schema"]}));
        then.status(200).json_body(json!({
            "name": "aws_access_key",
            "service_type": "secret.credentials",
            "schema": {"type": "object"}
        }));
    });

    let api = api_for(&server)?;
    let schema = api
        .repository()
        .schema()
        .get()
        .set_id("aws_access_key")
        .set_only(["schema"])
        .execute()
        .await?;

    get_mock.assert();
    assert_eq!(schema.schema["type"], "object");
    Ok(())
}

#[test]
fn test_plugin_dispatch_from_sync_context() -> Result<()> {
    let server = MockServer::start();
    let get_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/plugin/plugin/get")
            .json_body(json!({"plugin_id": "plugin-aws-ec2"}));
        then.status(200).json_body(json!({
            "plugin_id": "plugin-aws-ec2",
            "version": "1.0",
            "state": "ACTIVE",
            "endpoint": "grpc://plugin:50051"
        }));
    });

    let api = api_for(&server)?;
    let plugin = tokio_test::block_on(
        api.plugin().plugin().get().set_id("plugin-aws-ec2").execute(),
    )?;

    get_mock.assert();
    assert_eq!(plugin.endpoint.as_deref(), Some("grpc://plugin:50051"));
    Ok(())
}

#[tokio::test]
async fn test_dynamic_resource_against_server() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/monitoring/alert/get")
            .json_body(json!({"alert_id": "alert-1"}));
        then.status(200).json_body(json!({"alert_id": "alert-1", "state": "TRIGGERED"}));
    });

    let api = api_for(&server)?;
    let alert = api
        .resource("monitoring", "alert", Some("alert_id"))?
        .get()
        .set_id("alert-1")
        .execute()
        .await?;

    mock.assert();
    assert_eq!(alert["state"], "TRIGGERED");
    Ok(())
}
