//! # busbar-sf-adapters
//!
//! Salesforce metadata adapter for typed configuration elements.
//!
//! ## Crates
//!
//! - **busbar-sf-elements** - Typed element model: identifiers, primitive and object types, fields, annotations, type registry
//! - **busbar-sf-adapter** - Salesforce adapter: naming, type mapping, discovery, field-level security, add/update/remove
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use busbar_sf_adapters::{AdapterConfig, Element, ObjectType, SalesforceAdapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Any implementation of `SalesforceApi`
//!     let client = MyMetadataClient::connect("my-org").await?;
//!     let adapter = SalesforceAdapter::with_config(client, AdapterConfig::default());
//!
//!     for element in adapter.discover().await? {
//!         println!("{} ({:?})", element.elem_id, element.annotation_str("api_name"));
//!     }
//!
//!     let mut lead = ObjectType::new(adapter.type_mapper().elem_id("lead"));
//!     lead.add_field("score", adapter.type_mapper().get_type("double"));
//!     adapter.add(&lead).await?;
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
pub use busbar_sf_adapter as adapter;
pub use busbar_sf_elements as elements;

// Re-export commonly used types at the top level
pub use busbar_sf_adapter::{
    AdapterConfig, Error, ErrorKind, Result, SalesforceAdapter, SalesforceApi,
};
pub use busbar_sf_elements::{Element, ElemId, Field, ObjectType, Type};
