pub mod project;
pub mod project_group;
pub mod provider;
pub mod service_account;
pub mod user;

use crate::core::{Resource, Transport};
use std::sync::Arc;

pub use project::Project;
pub use project_group::ProjectGroup;
pub use provider::Provider;
pub use service_account::ServiceAccount;
pub use user::User;

const SERVICE: &str = "identity";

#[derive(Clone)]
pub struct IdentityService {
    transport: Arc<dyn Transport>,
}

impl IdentityService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    fn resource(&self, name: &str) -> Resource {
        Resource::new(Arc::clone(&self.transport), SERVICE, name)
    }

    pub fn project(&self) -> Project {
        Project::new(self.resource("project"))
    }

    pub fn project_group(&self) -> ProjectGroup {
        ProjectGroup::new(self.resource("project-group"))
    }

    pub fn user(&self) -> User {
        User::new(self.resource("user"))
    }

    pub fn service_account(&self) -> ServiceAccount {
        ServiceAccount::new(self.resource("service-account"))
    }

    pub fn provider(&self) -> Provider {
        Provider::new(self.resource("provider"))
    }
}
