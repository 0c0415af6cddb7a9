//! Metadata API wire types.

use serde::{Deserialize, Deserializer, Serialize};

/// Metadata type of custom objects.
pub const CUSTOM_OBJECT: &str = "CustomObject";
/// Metadata type of custom fields.
pub const CUSTOM_FIELD: &str = "CustomField";
/// Metadata type of security profiles.
pub const PROFILE: &str = "Profile";

/// A value the vendor returns either on its own or wrapped in an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Deserialize a missing, null, single or array value into a `Vec`.
pub fn one_or_many<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<OneOrMany<T>>::deserialize(deserializer)?;
    Ok(value.map(Into::into).unwrap_or_default())
}

/// Error information returned from Metadata API CRUD operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataError {
    /// Status code identifying the error type.
    #[serde(default)]
    pub status_code: String,
    /// Descriptive error message.
    pub message: String,
    /// Field names associated with the error.
    #[serde(default, deserialize_with = "one_or_many")]
    pub fields: Vec<String>,
}

/// Result of a create, update or delete call for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
    /// Full name of the metadata component.
    #[serde(default)]
    pub full_name: String,
    /// Whether the operation succeeded.
    #[serde(default)]
    pub success: bool,
    /// Errors that occurred during the operation.
    #[serde(default, deserialize_with = "one_or_many")]
    pub errors: Vec<MetadataError>,
}

impl SaveResult {
    pub fn success(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            success: true,
            errors: Vec::new(),
        }
    }

    pub fn failure(full_name: impl Into<String>, status_code: &str, message: &str) -> Self {
        Self {
            full_name: full_name.into(),
            success: false,
            errors: vec![MetadataError {
                status_code: status_code.to_string(),
                message: message.to_string(),
                fields: Vec::new(),
            }],
        }
    }

    /// Normalize a raw vendor response holding one result or an array of them.
    pub fn from_response(value: serde_json::Value) -> crate::Result<Vec<SaveResult>> {
        let results: OneOrMany<SaveResult> = serde_json::from_value(value)?;
        Ok(results.into())
    }
}

/// Collect every error message carried by a set of results, in order.
pub fn error_messages(results: &[SaveResult]) -> Vec<String> {
    results
        .iter()
        .flat_map(|result| result.errors.iter().map(|e| e.message.clone()))
        .collect()
}

/// Name field definition required on every custom object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameField {
    #[serde(rename = "type")]
    pub field_type: String,
    pub label: String,
}

impl Default for NameField {
    fn default() -> Self {
        Self {
            field_type: "Text".to_string(),
            label: "Name".to_string(),
        }
    }
}

/// `CustomObject` metadata payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomObject {
    pub full_name: String,
    pub label: String,
    pub plural_label: String,
    pub deployment_status: String,
    pub sharing_model: String,
    pub name_field: NameField,
    #[serde(default, deserialize_with = "one_or_many")]
    pub fields: Vec<CustomField>,
}

impl CustomObject {
    pub fn new(
        full_name: impl Into<String>,
        label: impl Into<String>,
        fields: Vec<CustomField>,
    ) -> Self {
        let label = label.into();
        Self {
            full_name: full_name.into(),
            plural_label: format!("{label}s"),
            label,
            deployment_status: "Deployed".to_string(),
            sharing_model: "ReadWrite".to_string(),
            name_field: NameField::default(),
            fields,
        }
    }
}

/// One value of a picklist field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPicklistValue {
    pub full_name: String,
    #[serde(default)]
    pub default: bool,
}

/// `CustomField` metadata payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub full_name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picklist_values: Option<Vec<CustomPicklistValue>>,
}

impl CustomField {
    /// Create a field definition, filling in attributes the vendor requires
    /// for the given field type.
    pub fn new(
        full_name: impl Into<String>,
        field_type: impl Into<String>,
        label: impl Into<String>,
        required: bool,
    ) -> Self {
        let field_type = field_type.into();
        let (length, precision, scale, default_value) = match field_type.as_str() {
            "Text" => (Some(80), None, None, None),
            "Number" => (None, Some(18), Some(0), None),
            "Checkbox" => (None, None, None, Some("false".to_string())),
            _ => (None, None, None, None),
        };
        Self {
            full_name: full_name.into(),
            field_type,
            label: label.into(),
            required,
            default_value,
            length,
            precision,
            scale,
            picklist_values: None,
        }
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Attach picklist values; values named in `defaults` are flagged default.
    pub fn with_picklist_values(mut self, values: &[String], defaults: &[String]) -> Self {
        self.picklist_values = Some(
            values
                .iter()
                .map(|value| CustomPicklistValue {
                    full_name: value.clone(),
                    default: defaults.contains(value),
                })
                .collect(),
        );
        self
    }
}

/// Read/edit permission of one profile on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPermission {
    /// Fully-qualified field name, `Object.Field`.
    pub field: String,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub readable: bool,
}

/// `Profile` metadata payload, restricted to field permissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub full_name: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub field_permissions: Vec<FieldPermission>,
}

impl ProfileInfo {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            field_permissions: Vec::new(),
        }
    }

    /// Grant read and edit access on every given field.
    pub fn with_full_access<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_permissions
            .extend(fields.into_iter().map(|field| FieldPermission {
                field: field.into(),
                editable: true,
                readable: true,
            }));
        self
    }
}
