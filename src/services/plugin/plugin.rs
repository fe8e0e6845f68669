use crate::core::{GetAction, ListAction, ListResponse, NoParameter, Resource};
use serde::{Deserialize, Serialize};

const ID_FIELD: &str = "plugin_id";

/// A plugin instance running under a supervisor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginModel {
    pub plugin_id: String,
    pub version: String,
    pub state: String,
    pub endpoint: Option<String>,
    pub endpoints: Vec<String>,
    pub supervisor_id: Option<String>,
    pub supervisor_name: Option<String>,
    pub managed: bool,
}

#[derive(Debug, Clone)]
pub struct Plugin {
    resource: Resource,
}

impl Plugin {
    pub(crate) fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn get(&self) -> GetAction<NoParameter, PluginModel> {
        self.resource.action(Some(ID_FIELD))
    }

    pub fn list(&self) -> ListAction<NoParameter, ListResponse<PluginModel>> {
        self.resource.action(None)
    }
}
