use crate::core::{GetAction, ListAction, ListResponse, NoParameter, Resource};
use crate::domain::model::Tags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ID_FIELD: &str = "supervisor_id";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupervisorModel {
    pub supervisor_id: String,
    pub name: String,
    pub hostname: String,
    pub state: String,
    pub is_public: bool,
    pub labels: Map<String, Value>,
    pub tags: Tags,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct Supervisor {
    resource: Resource,
}

impl Supervisor {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn get(&self) -> GetAction<NoParameter, SupervisorModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn list(&self) -> ListAction<NoParameter, ListResponse<SupervisorModel>> {
        self.resource.action(None)
    }
}
