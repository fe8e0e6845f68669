use crate::core::{
    CreateAction, GetAction, ListAction, ListResponse, NoParameter, Resource, SingleDeleteAction,
    UpdateAction,
};
use crate::domain::model::Tags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ID_FIELD: &str = "service_account_id";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceAccountModel {
    pub service_account_id: String,
    pub name: String,
    pub provider: String,
    pub data: Map<String, Value>,
    pub project_id: Option<String>,
    pub tags: Tags,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceAccountCreateParameter {
    pub name: String,
    pub provider: String,
    pub data: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceAccountUpdateParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone)]
pub struct ServiceAccount {
    resource: Resource,
}

impl ServiceAccount {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn create(&self) -> CreateAction<ServiceAccountCreateParameter, ServiceAccountModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn update(&self) -> UpdateAction<ServiceAccountUpdateParameter, ServiceAccountModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn delete(&self) -> SingleDeleteAction<NoParameter, Value> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn get(&self) -> GetAction<NoParameter, ServiceAccountModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn list(&self) -> ListAction<NoParameter, ListResponse<ServiceAccountModel>> {
        self.resource.action(None)
    }
}
