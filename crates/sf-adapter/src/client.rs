//! Vendor client seam.

use async_trait::async_trait;
use serde_json::Value;

use crate::describe::{FieldDescribe, MetadataComponent, SObjectBasicInfo, ValueTypeField};
use crate::error::Result;
use crate::types::{ProfileInfo, SaveResult};

/// The Salesforce calls the adapter depends on.
///
/// Implementations wrap a REST/Metadata API client. They must normalize the
/// vendor's polymorphic responses (a single result or an array of results)
/// into `Vec<SaveResult>`, see [`SaveResult::from_response`], and map their own
/// failures into [`Error::client`](crate::Error::client).
#[async_trait]
pub trait SalesforceApi: Send + Sync {
    /// List every data object (describeGlobal).
    async fn list_sobjects(&self) -> Result<Vec<SObjectBasicInfo>>;

    /// Describe the fields of one data object.
    async fn describe_sobject_fields(&self, object_name: &str) -> Result<Vec<FieldDescribe>>;

    /// List the names of every metadata type (describeMetadata).
    async fn list_metadata_types(&self) -> Result<Vec<String>>;

    /// Describe the fields of one metadata value type.
    async fn describe_metadata_type_fields(&self, type_name: &str) -> Result<Vec<ValueTypeField>>;

    /// List the components of one metadata type.
    async fn list_metadata(&self, metadata_type: &str) -> Result<Vec<MetadataComponent>>;

    /// Read one profile, including its field permissions.
    async fn read_profile(&self, full_name: &str) -> Result<ProfileInfo>;

    /// Create metadata components of one type.
    async fn create_metadata(&self, metadata_type: &str, payload: &[Value])
        -> Result<Vec<SaveResult>>;

    /// Update metadata components of one type.
    async fn update_metadata(&self, metadata_type: &str, payload: &[Value])
        -> Result<Vec<SaveResult>>;

    /// Delete metadata components of one type by full name.
    async fn delete_metadata(
        &self,
        metadata_type: &str,
        full_names: &[&str],
    ) -> Result<Vec<SaveResult>>;
}
