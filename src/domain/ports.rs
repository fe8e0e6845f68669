use crate::domain::model::ApiCall;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// The injected HTTP client. Builders only ever talk to the backend through this.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn dispatch(&self, call: &ApiCall) -> Result<Value>;
}
