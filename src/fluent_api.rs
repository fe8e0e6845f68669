use crate::adapters::HttpTransport;
use crate::config::ClientConfig;
use crate::core::{DynamicResource, Transport};
use crate::services::{
    IdentityService, InventoryService, PluginService, RepositoryService, SecretService,
};
use crate::utils::error::Result;
use std::sync::Arc;

/// Entry point. Every builder created from here shares the same transport.
#[derive(Clone)]
pub struct FluentApi {
    transport: Arc<dyn Transport>,
}

impl FluentApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        tracing::info!("Fluent API client ready for {}", transport.endpoint());
        Ok(Self::new(Arc::new(transport)))
    }

    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    pub fn inventory(&self) -> InventoryService {
        InventoryService::new(self.transport())
    }

    pub fn plugin(&self) -> PluginService {
        PluginService::new(self.transport())
    }

    pub fn secret(&self) -> SecretService {
        SecretService::new(self.transport())
    }

    pub fn identity(&self) -> IdentityService {
        IdentityService::new(self.transport())
    }

    pub fn repository(&self) -> RepositoryService {
        RepositoryService::new(self.transport())
    }

    /// Untyped access to any `/<service>/<name>/` endpoint.
    pub fn resource(
        &self,
        service: &str,
        name: &str,
        id_field: Option<&str>,
    ) -> Result<DynamicResource> {
        DynamicResource::new(self.transport(), service, name, id_field)
    }
}
