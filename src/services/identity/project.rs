use crate::core::{
    CreateAction, GetAction, ListAction, ListResponse, NoParameter, Resource, SingleDeleteAction,
    UpdateAction,
};
use crate::domain::model::Tags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const ID_FIELD: &str = "project_id";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectModel {
    pub project_id: String,
    pub name: String,
    pub project_group_id: Option<String>,
    pub tags: Tags,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectCreateParameter {
    pub name: String,
    pub project_group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdateParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone)]
pub struct Project {
    resource: Resource,
}

impl Project {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn create(&self) -> CreateAction<ProjectCreateParameter, ProjectModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn update(&self) -> UpdateAction<ProjectUpdateParameter, ProjectModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn delete(&self) -> SingleDeleteAction<NoParameter, Value> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn get(&self) -> GetAction<NoParameter, ProjectModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn list(&self) -> ListAction<NoParameter, ListResponse<ProjectModel>> {
        self.resource.action(None)
    }
}
