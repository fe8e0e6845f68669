use crate::core::{
    Action, ActionKind, CreateAction, GetAction, ListAction, ListResponse, Resource,
    SingleDeleteAction, UpdateAction,
};
use crate::services::inventory::collector::CollectMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ID_FIELD: &str = "schedule_id";
const PARENT_ID_FIELD: &str = "collector_id";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,
    /// Seconds between runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub minutes: Vec<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hours: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleModel {
    pub schedule_id: String,
    pub collector_id: String,
    pub name: String,
    pub schedule: ScheduleSpec,
    pub collect_mode: Option<CollectMode>,
    pub filter: Map<String, Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_scheduled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleCreateParameter {
    pub name: String,
    pub schedule: ScheduleSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_mode: Option<CollectMode>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub filter: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleUpdateParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleSpec>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScheduleIdParameter {}

/// Parameters of actions addressed through a parent collector. Every such
/// action is rejected before dispatch until `collector_id` is set.
pub trait CollectorScoped {}

impl CollectorScoped for ScheduleCreateParameter {}
impl CollectorScoped for ScheduleUpdateParameter {}
impl CollectorScoped for ScheduleIdParameter {}

impl<K: ActionKind, P: Clone + CollectorScoped, R> Action<K, P, R> {
    pub fn set_collector_id(&self, collector_id: impl Into<String>) -> Self {
        self.set(PARENT_ID_FIELD, Value::String(collector_id.into()))
    }
}

#[derive(Debug, Clone)]
pub struct CollectorSchedule {
    resource: Resource,
}

impl CollectorSchedule {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn create(&self) -> CreateAction<ScheduleCreateParameter, ScheduleModel> {
        self.resource
            .action(Some(ID_FIELD))
            .require_field(PARENT_ID_FIELD)
    }

    pub fn update(&self) -> UpdateAction<ScheduleUpdateParameter, ScheduleModel> {
        self.resource
            .action(Some(ID_FIELD))
            .require_field(PARENT_ID_FIELD)
    }

    pub fn delete(&self) -> SingleDeleteAction<ScheduleIdParameter, Value> {
        self.resource
            .action(Some(ID_FIELD))
            .require_field(PARENT_ID_FIELD)
    }

    pub fn get(&self) -> GetAction<ScheduleIdParameter, ScheduleModel> {
        self.resource
            .action(Some(ID_FIELD))
            .require_field(PARENT_ID_FIELD)
    }

    pub fn list(&self) -> ListAction<ScheduleIdParameter, ListResponse<ScheduleModel>> {
        self.resource.action(None).require_field(PARENT_ID_FIELD)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{ApiCall, Result, Transport};
    use crate::utils::error::FluentApiError;
    use crate::FluentApi;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;

    struct NullTransport;

    #[async_trait]
    impl Transport for NullTransport {
        async fn dispatch(&self, _call: &ApiCall) -> Result<Value> {
            Ok(Value::Null)
        }
    }

    #[test]
    fn test_schedule_urls_nest_under_collector() {
        let api = FluentApi::new(Arc::new(NullTransport));
        let schedule = api.inventory().collector().schedule();

        let call = schedule
            .get()
            .set_collector_id("collector-1")
            .set_id("sched-1")
            .to_call()
            .unwrap();
        assert_eq!(call.url, "/inventory/collector/schedule/get");
        assert_eq!(
            call.body,
            json!({"collector_id": "collector-1", "schedule_id": "sched-1"})
        );
    }

    #[test]
    fn test_schedule_actions_need_collector_id() {
        let api = FluentApi::new(Arc::new(NullTransport));
        let schedule = api.inventory().collector().schedule();

        let missing_parent = |result: Result<ApiCall>| {
            matches!(
                result,
                Err(FluentApiError::MissingIdError { ref field, .. }) if field == "collector_id"
            )
        };
        assert!(missing_parent(schedule.delete().set_id("sched-1").to_call()));
        assert!(missing_parent(schedule.get().set_id("sched-1").to_call()));
        assert!(missing_parent(schedule.update().set_id("sched-1").to_call()));
        assert!(missing_parent(schedule.create().to_call()));
        assert!(missing_parent(schedule.list().to_call()));
        assert!(missing_parent(
            schedule.delete().set_id("sched-1").set_collector_id("").to_call()
        ));

        assert!(schedule
            .delete()
            .set_id("sched-1")
            .set_collector_id("collector-1")
            .to_call()
            .is_ok());
        assert!(schedule.list().set_collector_id("collector-1").to_call().is_ok());
    }

    #[test]
    fn test_schedule_create_with_hours() {
        let api = FluentApi::new(Arc::new(NullTransport));
        let call = api
            .inventory()
            .collector()
            .schedule()
            .create()
            .set_collector_id("collector-1")
            .set_parameter(super::ScheduleCreateParameter {
                name: "nightly".to_string(),
                schedule: super::ScheduleSpec {
                    hours: vec![0, 12],
                    ..Default::default()
                },
                ..Default::default()
            })
            .to_call()
            .unwrap();
        assert_eq!(call.url, "/inventory/collector/schedule/create");
        assert_eq!(
            call.body,
            json!({"collector_id": "collector-1", "name": "nightly", "schedule": {"hours": [0, 12]}})
        );
    }
}
