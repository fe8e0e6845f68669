use crate::core::{
    CreateAction, GetAction, ListAction, ListResponse, NoParameter, Resource, SingleDeleteAction,
    UpdateAction,
};
use crate::domain::model::Tags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ID_FIELD: &str = "cloud_service_id";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudServiceModel {
    pub cloud_service_id: String,
    pub name: Option<String>,
    pub state: String,
    pub provider: String,
    pub cloud_service_group: String,
    pub cloud_service_type: String,
    pub region_code: Option<String>,
    pub project_id: Option<String>,
    pub data: Map<String, Value>,
    pub tags: Tags,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CloudServiceCreateParameter {
    pub provider: String,
    pub cloud_service_group: String,
    pub cloud_service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CloudServiceUpdateParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone)]
pub struct CloudService {
    resource: Resource,
}

impl CloudService {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn create(&self) -> CreateAction<CloudServiceCreateParameter, CloudServiceModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn update(&self) -> UpdateAction<CloudServiceUpdateParameter, CloudServiceModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn delete(&self) -> SingleDeleteAction<NoParameter, Value> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn get(&self) -> GetAction<NoParameter, CloudServiceModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn list(&self) -> ListAction<NoParameter, ListResponse<CloudServiceModel>> {
        self.resource.action(None)
    }
}
