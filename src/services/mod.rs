pub mod identity;
pub mod inventory;
pub mod plugin;
pub mod repository;
pub mod secret;

pub use identity::IdentityService;
pub use inventory::InventoryService;
pub use plugin::PluginService;
pub use repository::RepositoryService;
pub use secret::SecretService;
