//! Describe results consumed by discovery.
//!
//! These mirror the subset of the REST describe and Metadata API
//! `describeValueType` / `listMetadata` payloads the adapter reads. Unknown
//! attributes are ignored on deserialization.

use serde::{Deserialize, Serialize};

use crate::types::one_or_many;

// ============================================================================
// Data objects
// ============================================================================

/// Basic information about an SObject from describeGlobal.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SObjectBasicInfo {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub custom: bool,
}

impl SObjectBasicInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            custom: false,
        }
    }
}

/// Field describe result of an SObject.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldDescribe {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default = "default_nillable")]
    pub nillable: bool,
    #[serde(rename = "defaultValue", default)]
    pub default_value: Option<serde_json::Value>,
    #[serde(rename = "picklistValues", default)]
    pub picklist_values: Option<Vec<PicklistValue>>,
    #[serde(rename = "restrictedPicklist", default)]
    pub restricted_picklist: Option<bool>,
}

fn default_nillable() -> bool {
    true
}

impl FieldDescribe {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            field_type: field_type.into(),
            nillable: true,
            default_value: None,
            picklist_values: None,
            restricted_picklist: None,
        }
    }
}

/// Picklist value of a picklist field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PicklistValue {
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(rename = "defaultValue", default)]
    pub default_value: bool,
}

fn default_active() -> bool {
    true
}

impl PicklistValue {
    pub fn new(value: impl Into<String>, default_value: bool) -> Self {
        Self {
            value: value.into(),
            label: None,
            active: true,
            default_value,
        }
    }
}

// ============================================================================
// Metadata types
// ============================================================================

/// A field of a metadata value type (`describeValueType`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueTypeField {
    pub name: String,
    pub soap_type: String,
    #[serde(default)]
    pub value_required: bool,
    #[serde(default, deserialize_with = "one_or_many")]
    pub picklist_values: Vec<PicklistValue>,
}

impl ValueTypeField {
    pub fn new(name: impl Into<String>, soap_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            soap_type: soap_type.into(),
            value_required: false,
            picklist_values: Vec::new(),
        }
    }
}

/// A metadata component from list metadata.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataComponent {
    pub full_name: String,
    #[serde(rename = "type")]
    pub metadata_type: String,
}
