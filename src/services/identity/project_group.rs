use crate::core::{
    CreateAction, GetAction, ListAction, ListResponse, NoParameter, Resource, SingleDeleteAction,
    UpdateAction,
};
use crate::domain::model::Tags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const ID_FIELD: &str = "project_group_id";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectGroupModel {
    pub project_group_id: String,
    pub name: String,
    pub parent_project_group_id: Option<String>,
    pub tags: Tags,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectGroupCreateParameter {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_project_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectGroupUpdateParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_project_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone)]
pub struct ProjectGroup {
    resource: Resource,
}

impl ProjectGroup {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn create(&self) -> CreateAction<ProjectGroupCreateParameter, ProjectGroupModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn update(&self) -> UpdateAction<ProjectGroupUpdateParameter, ProjectGroupModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn delete(&self) -> SingleDeleteAction<NoParameter, Value> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn get(&self) -> GetAction<NoParameter, ProjectGroupModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn list(&self) -> ListAction<NoParameter, ListResponse<ProjectGroupModel>> {
        self.resource.action(None)
    }
}
