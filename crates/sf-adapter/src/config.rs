//! Adapter configuration.

use serde::{Deserialize, Serialize};

use crate::types::CUSTOM_OBJECT;

/// Default adapter namespace used in element identifiers.
pub const DEFAULT_NAMESPACE: &str = "salesforce";

/// Default profile granted access on created fields.
pub const DEFAULT_SYSTEM_ADMIN_PROFILE: &str = "Admin";

/// Configuration for [`SalesforceAdapter`](crate::SalesforceAdapter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Namespace of every element identifier produced by the adapter.
    pub namespace: String,
    /// Profile that receives read/edit access on every field the adapter creates.
    pub system_admin_profile: String,
    /// Metadata types skipped by metadata-type discovery.
    pub excluded_metadata_types: Vec<String>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            system_admin_profile: DEFAULT_SYSTEM_ADMIN_PROFILE.to_string(),
            // data objects are discovered separately
            excluded_metadata_types: vec![CUSTOM_OBJECT.to_string()],
        }
    }
}

impl AdapterConfig {
    /// Create a new adapter config builder.
    pub fn builder() -> AdapterConfigBuilder {
        AdapterConfigBuilder::default()
    }

    /// Whether metadata-type discovery should skip `type_name`.
    pub fn is_excluded(&self, type_name: &str) -> bool {
        self.excluded_metadata_types.iter().any(|t| t == type_name)
    }
}

/// Builder for AdapterConfig.
#[derive(Debug, Default)]
pub struct AdapterConfigBuilder {
    config: AdapterConfig,
}

impl AdapterConfigBuilder {
    /// Set the element namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    /// Set the profile granted access on created fields.
    pub fn with_system_admin_profile(mut self, profile: impl Into<String>) -> Self {
        self.config.system_admin_profile = profile.into();
        self
    }

    /// Skip an additional metadata type during discovery.
    pub fn exclude_metadata_type(mut self, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        if !self.config.is_excluded(&type_name) {
            self.config.excluded_metadata_types.push(type_name);
        }
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AdapterConfig {
        self.config
    }
}
