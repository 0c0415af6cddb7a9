//! # busbar-sf-elements
//!
//! Typed element model used by the busbar metadata adapters.
//!
//! Adapters describe a remote system's schema as a set of elements:
//!
//! - **[`ObjectType`]** - an object-shaped element with annotations and named fields
//! - **[`Field`]** - a child element of an object, carrying its own type and annotations
//! - **[`PrimitiveType`]** - a leaf type (string, number, boolean flavours)
//! - **[`TypeRegistry`]** - lookup-or-create store of canonical object types
//!
//! Every element is identified by an [`ElemId`] made of the adapter namespace
//! and the element's internal name.
//!
//! ## Example
//!
//! ```rust
//! use busbar_sf_elements::{Element, ElemId, ObjectType};
//!
//! let mut lead = ObjectType::new(ElemId::new("salesforce", "lead"));
//! lead.set_annotation("label", "Lead");
//! assert_eq!(lead.annotation_str("label"), Some("Lead"));
//! ```

mod element;
mod registry;

pub use element::{Element, ElemId, Field, ObjectType, PrimitiveKind, PrimitiveType, Type, Values};
pub use registry::TypeRegistry;
