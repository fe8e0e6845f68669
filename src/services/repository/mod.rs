pub mod plugin;
pub mod policy;
pub mod schema;

use crate::core::{Resource, Transport};
use std::sync::Arc;

pub use plugin::RepositoryPlugin;
pub use policy::Policy;
pub use schema::Schema;

const SERVICE: &str = "repository";

#[derive(Clone)]
pub struct RepositoryService {
    transport: Arc<dyn Transport>,
}

impl RepositoryService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    fn resource(&self, name: &str) -> Resource {
        Resource::new(Arc::clone(&self.transport), SERVICE, name)
    }

    pub fn plugin(&self) -> RepositoryPlugin {
        RepositoryPlugin::new(self.resource("plugin"))
    }

    pub fn schema(&self) -> Schema {
        Schema::new(self.resource("schema"))
    }

    pub fn policy(&self) -> Policy {
        Policy::new(self.resource("policy"))
    }
}
