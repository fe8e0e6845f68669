#[allow(clippy::module_inception)]
pub mod secret;
pub mod secret_group;

use crate::core::{Resource, Transport};
use std::sync::Arc;

pub use secret::Secret;
pub use secret_group::SecretGroup;

const SERVICE: &str = "secret";

#[derive(Clone)]
pub struct SecretService {
    transport: Arc<dyn Transport>,
}

impl SecretService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    fn resource(&self, name: &str) -> Resource {
        Resource::new(Arc::clone(&self.transport), SERVICE, name)
    }

    pub fn secret(&self) -> Secret {
        Secret::new(self.resource("secret"))
    }

    pub fn secret_group(&self) -> SecretGroup {
        SecretGroup::new(self.resource("secret-group"))
    }
}
