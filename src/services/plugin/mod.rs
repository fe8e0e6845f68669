#[allow(clippy::module_inception)]
pub mod plugin;
pub mod supervisor;

use crate::core::{Resource, Transport};
use std::sync::Arc;

pub use plugin::Plugin;
pub use supervisor::Supervisor;

const SERVICE: &str = "plugin";

#[derive(Clone)]
pub struct PluginService {
    transport: Arc<dyn Transport>,
}

impl PluginService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    fn resource(&self, name: &str) -> Resource {
        Resource::new(Arc::clone(&self.transport), SERVICE, name)
    }

    pub fn plugin(&self) -> Plugin {
        Plugin::new(self.resource("plugin"))
    }

    pub fn supervisor(&self) -> Supervisor {
        Supervisor::new(self.resource("supervisor"))
    }
}
