use crate::core::{
    CreateAction, GetAction, ListAction, ListResponse, NoParameter, Resource, SingleDeleteAction,
    UpdateAction,
};
use crate::domain::model::Tags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const ID_FIELD: &str = "user_id";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserModel {
    pub user_id: String,
    pub name: String,
    pub email: Option<String>,
    pub state: String,
    pub user_type: Option<String>,
    pub backend: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub tags: Tags,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// On create the user id is chosen by the caller and travels in the body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserCreateParameter {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdateParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone)]
pub struct User {
    resource: Resource,
}

impl User {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn create(&self) -> CreateAction<UserCreateParameter, UserModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn update(&self) -> UpdateAction<UserUpdateParameter, UserModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn delete(&self) -> SingleDeleteAction<NoParameter, Value> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn get(&self) -> GetAction<NoParameter, UserModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn list(&self) -> ListAction<NoParameter, ListResponse<UserModel>> {
        self.resource.action(None)
    }
}
