pub mod cloud_service;
pub mod collector;
pub mod region;
pub mod schedule;
pub mod server;

use crate::core::{Resource, Transport};
use std::sync::Arc;

pub use cloud_service::CloudService;
pub use collector::{CollectMode, Collector};
pub use region::Region;
pub use schedule::CollectorSchedule;
pub use server::Server;

const SERVICE: &str = "inventory";

#[derive(Clone)]
pub struct InventoryService {
    transport: Arc<dyn Transport>,
}

impl InventoryService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    fn resource(&self, name: &str) -> Resource {
        Resource::new(Arc::clone(&self.transport), SERVICE, name)
    }

    pub fn collector(&self) -> Collector {
        Collector::new(self.resource("collector"))
    }

    pub fn server(&self) -> Server {
        Server::new(self.resource("server"))
    }

    pub fn region(&self) -> Region {
        Region::new(self.resource("region"))
    }

    pub fn cloud_service(&self) -> CloudService {
        CloudService::new(self.resource("cloud-service"))
    }
}
