//! Conversion between internal (snake_case) and Salesforce (PascalCase, `__c`)
//! names.
//!
//! `to_internal_name(&to_wire_name(n, true))` recovers the snake-cased form of
//! `n`. Names that contain the literal `__c` somewhere other than the end do
//! not round-trip.

use convert_case::{Case, Casing};

/// Suffix of custom objects and custom fields.
pub const CUSTOM_SUFFIX: &str = "__c";

/// Convert an internal name to its Salesforce form.
pub fn to_wire_name(name: &str, is_custom: bool) -> String {
    let pascal = name.to_case(Case::Pascal);
    if is_custom {
        format!("{pascal}{CUSTOM_SUFFIX}")
    } else {
        pascal
    }
}

/// Convert a Salesforce name to its internal form.
pub fn to_internal_name(name: &str) -> String {
    name.strip_suffix(CUSTOM_SUFFIX)
        .unwrap_or(name)
        .to_case(Case::Snake)
}

/// Fully-qualified `Object.Field` name.
pub fn field_full_name(object_api_name: &str, field_api_name: &str) -> String {
    format!("{object_api_name}.{field_api_name}")
}
