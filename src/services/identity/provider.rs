use crate::core::{GetAction, ListAction, ListResponse, NoParameter, Resource};
use crate::domain::model::Tags;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const ID_FIELD: &str = "provider";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderModel {
    pub provider: String,
    pub name: String,
    pub template: Value,
    pub metadata: Value,
    pub capability: Value,
    pub tags: Tags,
}

#[derive(Debug, Clone)]
pub struct Provider {
    resource: Resource,
}

impl Provider {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn get(&self) -> GetAction<NoParameter, ProviderModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn list(&self) -> ListAction<NoParameter, ListResponse<ProviderModel>> {
        self.resource.action(None)
    }
}
