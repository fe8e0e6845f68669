//! Fluent builders for the cloud-management console's backend API.
//!
//! ```no_run
//! use fluent_api::{ClientConfig, Filter, FluentApi};
//!
//! # async fn example() -> fluent_api::Result<()> {
//! let api = FluentApi::from_config(&ClientConfig::new("https://console-api.example.com"))?;
//!
//! let servers = api
//!     .inventory()
//!     .server()
//!     .list()
//!     .add_filter(Filter::eq("provider", "aws"))
//!     .set_page_limit(10)
//!     .execute()
//!     .await?;
//! println!("{} servers", servers.results.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod fluent_api;
pub mod services;
pub mod utils;

pub use adapters::HttpTransport;
pub use config::ClientConfig;
pub use crate::core::{ApiCall, Filter, FilterOperator, ListResponse, Query, Transport};
pub use fluent_api::FluentApi;
pub use utils::error::{FluentApiError, Result};
