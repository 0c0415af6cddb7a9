//! Mapping between Salesforce descriptors and typed elements.

use busbar_sf_elements::{
    Element, ElemId, Field, ObjectType, PrimitiveKind, PrimitiveType, Type, TypeRegistry,
};
use serde_json::Value;

use crate::annotations::{
    API_NAME, DEFAULT, LABEL, PICKLIST_VALUES, REQUIRED, RESTRICTED_PICKLIST,
};
use crate::describe::{FieldDescribe, PicklistValue, ValueTypeField};
use crate::naming::{field_full_name, to_internal_name, to_wire_name};
use crate::types::{CustomField, CustomObject};

/// Resolves Salesforce type names to element types.
///
/// Object-shaped types are kept in the mapper's own [`TypeRegistry`], so two
/// adapters never share canonical instances.
#[derive(Debug)]
pub struct TypeMapper {
    namespace: String,
    registry: TypeRegistry,
}

impl TypeMapper {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            registry: TypeRegistry::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Identifier of an element of this adapter.
    pub fn elem_id(&self, name: &str) -> ElemId {
        ElemId::new(self.namespace.clone(), name)
    }

    /// Map a Salesforce field or soap type name to a fresh element type.
    ///
    /// `string`, `double` and `boolean` map to primitives (`boolean` to the
    /// checkbox flavour); any other name resolves to an object-shaped type
    /// from the registry.
    pub fn get_type(&self, name: &str) -> Type {
        match name {
            "string" => PrimitiveType::new(ElemId::new("", "string"), PrimitiveKind::String).into(),
            "double" => PrimitiveType::new(ElemId::new("", "number"), PrimitiveKind::Number).into(),
            "boolean" => {
                PrimitiveType::new(self.elem_id("checkbox"), PrimitiveKind::Boolean).into()
            }
            other => self
                .registry
                .get_or_create(self.elem_id(&to_internal_name(other)))
                .into(),
        }
    }

    /// Add a data-object field to `object`.
    pub fn add_sobject_field(&self, object: &mut ObjectType, describe: &FieldDescribe) {
        let field = object.add_field(
            to_internal_name(&describe.name),
            self.get_type(&describe.field_type),
        );
        field.set_annotation(API_NAME, describe.name.as_str());
        if let Some(label) = &describe.label {
            field.set_annotation(LABEL, label.as_str());
        }
        field.set_annotation(REQUIRED, !describe.nillable);
        if let Some(default) = describe.default_value.as_ref().filter(|v| !v.is_null()) {
            field.set_annotation(DEFAULT, default.clone());
        }
        if let Some(values) = describe
            .picklist_values
            .as_deref()
            .filter(|values| !values.is_empty())
        {
            apply_picklist(field, values);
            if let Some(restricted) = describe.restricted_picklist {
                field.set_annotation(RESTRICTED_PICKLIST, restricted);
            }
        }
    }

    /// Add a metadata value type field to `object`.
    pub fn add_value_type_field(&self, object: &mut ObjectType, describe: &ValueTypeField) {
        let field = object.add_field(
            to_internal_name(&describe.name),
            self.get_type(&describe.soap_type),
        );
        field.set_annotation(API_NAME, describe.name.as_str());
        field.set_annotation(REQUIRED, describe.value_required);
        apply_picklist(field, &describe.picklist_values);
    }
}

/// Store picklist values and resolve the default: a single default-flagged
/// value is stored as a scalar, several as a list.
fn apply_picklist(field: &mut Field, values: &[PicklistValue]) {
    if values.is_empty() {
        return;
    }
    field.set_annotation(
        PICKLIST_VALUES,
        values
            .iter()
            .map(|v| Value::from(v.value.as_str()))
            .collect::<Vec<_>>(),
    );

    let mut defaults: Vec<Value> = values
        .iter()
        .filter(|v| v.default_value)
        .map(|v| Value::from(v.value.as_str()))
        .collect();
    match defaults.len() {
        0 => {}
        1 => field.set_annotation(DEFAULT, defaults.remove(0)),
        _ => field.set_annotation(DEFAULT, defaults),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// The Salesforce field type of a field element.
pub fn wire_field_type(field: &Field) -> String {
    if !string_list(field.annotation(PICKLIST_VALUES)).is_empty() {
        return "Picklist".to_string();
    }
    match &field.field_type {
        Type::Primitive(p) => match p.primitive {
            PrimitiveKind::String => "Text".to_string(),
            PrimitiveKind::Number => "Number".to_string(),
            PrimitiveKind::Boolean => "Checkbox".to_string(),
        },
        Type::Object(o) => to_wire_name(o.elem_id.name(), false),
    }
}

fn api_name_or_default(element: &impl Element, own_name: &str) -> String {
    element
        .annotation_str(API_NAME)
        .map(str::to_string)
        .unwrap_or_else(|| to_wire_name(own_name, true))
}

/// API name of an object element, synthesized if the annotation is missing.
pub fn object_api_name(object: &ObjectType) -> String {
    api_name_or_default(object, object.elem_id.name())
}

/// Build the `CustomField` payload of a field element under `full_name`.
pub fn custom_field(field: &Field, full_name: String) -> CustomField {
    let label = field
        .annotation_str(LABEL)
        .map(str::to_string)
        .unwrap_or_else(|| to_wire_name(&field.name, false));
    let required = field
        .annotation(REQUIRED)
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let custom = CustomField::new(full_name, wire_field_type(field), label, required);

    let values = string_list(field.annotation(PICKLIST_VALUES));
    if !values.is_empty() {
        let defaults = string_list(field.annotation(DEFAULT));
        return custom.with_picklist_values(&values, &defaults);
    }
    match field.annotation(DEFAULT) {
        Some(Value::String(s)) => custom.with_default_value(s.clone()),
        Some(v @ (Value::Bool(_) | Value::Number(_))) => custom.with_default_value(v.to_string()),
        _ => custom,
    }
}

/// Build the `CustomObject` payload of an object element with its fields
/// inline.
pub fn custom_object(object: &ObjectType) -> CustomObject {
    let fields = object
        .fields
        .values()
        .map(|field| custom_field(field, api_name_or_default(field, &field.name)))
        .collect();
    let label = object
        .annotation_str(LABEL)
        .map(str::to_string)
        .unwrap_or_else(|| to_wire_name(object.elem_id.name(), false));
    CustomObject::new(object_api_name(object), label, fields)
}

/// Full API name of a field: `Object.Field`.
pub fn field_api_full_name(object: &ObjectType, field: &Field) -> String {
    field_full_name(&object_api_name(object), &api_name_or_default(field, &field.name))
}
