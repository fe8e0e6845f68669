use crate::core::action::{
    Action, ActionKind, Collect, Create, Delete, Get, List, Update,
};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::validation::validate_url_segment;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Parameter for actions that carry nothing but the id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoParameter {}

/// A named endpoint of a backend service, e.g. `/inventory/collector/`.
#[derive(Clone)]
pub struct Resource {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Resource {
    pub fn new(transport: Arc<dyn Transport>, service: &str, name: &str) -> Self {
        Self {
            transport,
            base_url: format!("/{}/{}/", service, name),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Child resource living under this one: `/inventory/collector/` + `schedule`
    /// gives `/inventory/collector/schedule/`.
    pub fn nested(&self, name: &str) -> Self {
        let parent = self.base_url.trim_matches('/');
        Self {
            transport: Arc::clone(&self.transport),
            base_url: format!("/{}/{}/", parent, name),
        }
    }

    pub fn action<K: ActionKind, P: Default, R>(&self, id_field: Option<&str>) -> Action<K, P, R> {
        Action::new(
            Arc::clone(&self.transport),
            &self.base_url,
            id_field.map(str::to_string),
        )
    }
}

pub type DynamicAction<K> = Action<K, Map<String, Value>, Value>;

/// Untyped resource resolved at run time; used by the CLI and for endpoints
/// without a typed wrapper.
#[derive(Debug, Clone)]
pub struct DynamicResource {
    resource: Resource,
    id_field: Option<String>,
}

impl DynamicResource {
    pub fn new(
        transport: Arc<dyn Transport>,
        service: &str,
        name: &str,
        id_field: Option<&str>,
    ) -> Result<Self> {
        validate_url_segment("service", service)?;
        validate_url_segment("resource", name)?;
        if let Some(field) = id_field {
            validate_url_segment("id_field", field)?;
        }
        Ok(Self {
            resource: Resource::new(transport, service, name),
            id_field: id_field.map(str::to_string),
        })
    }

    pub fn base_url(&self) -> &str {
        self.resource.base_url()
    }

    pub fn action<K: ActionKind>(&self) -> DynamicAction<K> {
        self.resource.action(self.id_field.as_deref())
    }

    pub fn create(&self) -> DynamicAction<Create> {
        self.action()
    }

    pub fn update(&self) -> DynamicAction<Update> {
        self.action()
    }

    pub fn delete(&self) -> DynamicAction<Delete> {
        self.action()
    }

    pub fn get(&self) -> DynamicAction<Get> {
        self.action()
    }

    pub fn list(&self) -> DynamicAction<List> {
        self.action()
    }

    pub fn collect(&self) -> DynamicAction<Collect> {
        self.action()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ApiCall;
    use async_trait::async_trait;
    use serde_json::json;

    struct NullTransport;

    #[async_trait]
    impl Transport for NullTransport {
        async fn dispatch(&self, _call: &ApiCall) -> Result<Value> {
            Ok(Value::Null)
        }
    }

    #[test]
    fn test_base_url_and_nesting() {
        let collector = Resource::new(Arc::new(NullTransport), "inventory", "collector");
        assert_eq!(collector.base_url(), "/inventory/collector/");

        let schedule = collector.nested("schedule");
        assert_eq!(schedule.base_url(), "/inventory/collector/schedule/");
    }

    #[test]
    fn test_no_parameter_serializes_to_empty_object() {
        assert_eq!(serde_json::to_value(NoParameter {}).unwrap(), json!({}));
    }

    #[test]
    fn test_dynamic_resource_actions() {
        let resource =
            DynamicResource::new(Arc::new(NullTransport), "identity", "project", Some("project_id"))
                .unwrap();

        let call = resource
            .update()
            .set_id("project-1")
            .set("name", "renamed")
            .to_call()
            .unwrap();
        assert_eq!(call.url, "/identity/project/update");
        assert_eq!(call.body, json!({"project_id": "project-1", "name": "renamed"}));

        let list = resource.list().set_keyword("dev").to_call().unwrap();
        assert_eq!(list.url, "/identity/project/list");
        assert_eq!(list.body, json!({"query": {"keyword": "dev"}}));
    }

    #[test]
    fn test_dynamic_resource_rejects_bad_segments() {
        let transport: Arc<dyn Transport> = Arc::new(NullTransport);
        assert!(DynamicResource::new(transport.clone(), "inventory", "../admin", None).is_err());
        assert!(DynamicResource::new(transport.clone(), "", "server", None).is_err());
        assert!(DynamicResource::new(transport, "inventory", "server", Some("server id")).is_err());
    }
}
