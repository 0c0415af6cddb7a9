//! # busbar-sf-adapter
//!
//! Salesforce metadata adapter built on the busbar typed element model.
//!
//! ## Features
//!
//! - **Discover** - Data objects, metadata types and field-level security as typed elements
//! - **Add** - Create a custom object with its fields and grant access to the admin profile
//! - **Update** - Reconcile added and removed fields between two versions of an object
//! - **Remove** - Delete a custom object
//! - **Naming** - Internal `snake_case` names ⇄ Salesforce `PascalCase__c` names
//!
//! The adapter talks to Salesforce through the [`SalesforceApi`] trait; bring
//! your own REST/Metadata API client implementation.
//!
//! ## Example
//!
//! ```rust,ignore
//! use busbar_sf_adapter::{AdapterConfig, SalesforceAdapter};
//! use busbar_sf_elements::{Element, ObjectType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), busbar_sf_adapter::Error> {
//!     let config = AdapterConfig::builder()
//!         .with_system_admin_profile("Admin")
//!         .build();
//!     let adapter = SalesforceAdapter::with_config(MyMetadataClient::connect().await?, config);
//!
//!     for element in adapter.discover().await? {
//!         println!("{}", element.elem_id);
//!     }
//!
//!     let mut lead = ObjectType::new(adapter.type_mapper().elem_id("lead"));
//!     lead.add_field("score", adapter.type_mapper().get_type("double"));
//!     let created = adapter.add(&lead).await?;
//!     println!("created {:?}", created.annotation_str("api_name"));
//!
//!     Ok(())
//! }
//! ```

mod adapter;
pub mod annotations;
mod client;
mod config;
mod describe;
mod error;
mod mapper;
pub mod naming;
mod types;

pub use adapter::{attach_field_level_security, FieldAccess, FieldPermissions, SalesforceAdapter};
pub use client::SalesforceApi;
pub use config::{
    AdapterConfig, AdapterConfigBuilder, DEFAULT_NAMESPACE, DEFAULT_SYSTEM_ADMIN_PROFILE,
};
pub use describe::{
    FieldDescribe, MetadataComponent, PicklistValue, SObjectBasicInfo, ValueTypeField,
};
pub use error::{Error, ErrorKind, Result};
pub use mapper::{
    custom_field, custom_object, field_api_full_name, object_api_name, wire_field_type, TypeMapper,
};
pub use types::{
    error_messages, one_or_many, CustomField, CustomObject, CustomPicklistValue, FieldPermission,
    MetadataError, NameField, OneOrMany, ProfileInfo, SaveResult, CUSTOM_FIELD, CUSTOM_OBJECT,
    PROFILE,
};
