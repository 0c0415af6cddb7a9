//! Salesforce adapter.
//!
//! The adapter wraps a [`SalesforceApi`] implementation and provides the
//! discover / add / update / remove cycle over typed elements.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::client::SalesforceApi;
use crate::config::AdapterConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::mapper::TypeMapper;
use crate::types::{error_messages, SaveResult};

mod crud;
mod discover;
mod permissions;

pub use permissions::{attach_field_level_security, FieldAccess, FieldPermissions};

/// Salesforce metadata adapter.
///
/// # Example
///
/// ```rust,ignore
/// use busbar_sf_adapter::{AdapterConfig, SalesforceAdapter};
///
/// let adapter = SalesforceAdapter::with_config(client, AdapterConfig::default());
///
/// // Discover every object and metadata type
/// let elements = adapter.discover().await?;
///
/// // Create a custom object from a local element
/// let created = adapter.add(&lead).await?;
///
/// // Reconcile fields against a newer version
/// let updated = adapter.update(&created, &lead_v2).await?;
///
/// adapter.remove(&updated).await?;
/// ```
#[derive(Debug)]
pub struct SalesforceAdapter<C> {
    client: C,
    config: AdapterConfig,
    mapper: TypeMapper,
}

impl<C: SalesforceApi> SalesforceAdapter<C> {
    /// Create an adapter with the default configuration.
    pub fn new(client: C) -> Self {
        Self::with_config(client, AdapterConfig::default())
    }

    /// Create an adapter with a custom configuration.
    pub fn with_config(client: C, config: AdapterConfig) -> Self {
        let mapper = TypeMapper::new(config.namespace.clone());
        Self {
            client,
            config,
            mapper,
        }
    }

    /// Get the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Get the type mapper, which owns this adapter's type registry.
    pub fn type_mapper(&self) -> &TypeMapper {
        &self.mapper
    }
}

/// Serialize wire payloads for a create/update call.
pub(crate) fn to_payload<T: Serialize>(items: &[T]) -> Result<Vec<Value>> {
    items
        .iter()
        .map(|item| serde_json::to_value(item).map_err(Error::from))
        .collect()
}

/// Fail with every error message carried by `results`, joined by newlines.
pub(crate) fn check_results(results: &[SaveResult]) -> Result<()> {
    let messages = error_messages(results);
    if messages.is_empty() {
        return Ok(());
    }
    warn!(errors = messages.len(), "Salesforce rejected the request");
    Err(Error::new(ErrorKind::Save { messages }))
}
