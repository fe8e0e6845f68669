use crate::core::{
    CollectAction, CreateAction, GetAction, ListAction, ListResponse, NoParameter, Resource,
    SingleDeleteAction, UpdateAction,
};
use crate::domain::model::Tags;
use crate::services::inventory::schedule::CollectorSchedule;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ID_FIELD: &str = "collector_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectMode {
    All,
    Create,
    Update,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub plugin_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorModel {
    pub collector_id: String,
    pub name: String,
    pub state: String,
    pub provider: Option<String>,
    pub capability: Value,
    pub plugin_info: Option<PluginInfo>,
    pub priority: Option<u32>,
    pub tags: Tags,
    pub created_at: Option<DateTime<Utc>>,
    pub last_collected_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectorCreateParameter {
    pub name: String,
    pub plugin_info: PluginInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectorUpdateParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectorCollectParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_mode: Option<CollectMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<Value>>,
}

pub type CollectorUpdate = UpdateAction<CollectorUpdateParameter, CollectorModel>;
pub type CollectorCollect = CollectAction<CollectorCollectParameter, Value>;

impl CollectorUpdate {
    pub fn set_name(&self, name: impl Into<String>) -> Self {
        let mut parameter = self.parameter().clone();
        parameter.name = Some(name.into());
        self.set_parameter(parameter)
    }

    pub fn set_priority(&self, priority: u32) -> Self {
        let mut parameter = self.parameter().clone();
        parameter.priority = Some(priority);
        self.set_parameter(parameter)
    }

    pub fn set_tags(&self, tags: Tags) -> Self {
        let mut parameter = self.parameter().clone();
        parameter.tags = Some(tags);
        self.set_parameter(parameter)
    }
}

impl CollectorCollect {
    pub fn set_collect_mode(&self, mode: CollectMode) -> Self {
        let mut parameter = self.parameter().clone();
        parameter.collect_mode = Some(mode);
        self.set_parameter(parameter)
    }

    pub fn set_credential_id(&self, credential_id: impl Into<String>) -> Self {
        let mut parameter = self.parameter().clone();
        parameter.credential_id = Some(credential_id.into());
        self.set_parameter(parameter)
    }

    pub fn set_credential_group_id(&self, credential_group_id: impl Into<String>) -> Self {
        let mut parameter = self.parameter().clone();
        parameter.credential_group_id = Some(credential_group_id.into());
        self.set_parameter(parameter)
    }

    pub fn set_filters(&self, filters: impl IntoIterator<Item = Value>) -> Self {
        let mut parameter = self.parameter().clone();
        parameter.filter = Some(filters.into_iter().collect());
        self.set_parameter(parameter)
    }
}

#[derive(Debug, Clone)]
pub struct Collector {
    resource: Resource,
}

impl Collector {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn create(&self) -> CreateAction<CollectorCreateParameter, CollectorModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn update(&self) -> CollectorUpdate {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn delete(&self) -> SingleDeleteAction<NoParameter, Value> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn get(&self) -> GetAction<NoParameter, CollectorModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn list(&self) -> ListAction<NoParameter, ListResponse<CollectorModel>> {
        self.resource.action(None)
    }

    pub fn collect(&self) -> CollectorCollect {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn schedule(&self) -> CollectorSchedule {
        CollectorSchedule::new(self.resource.nested("schedule"))
    }
}
