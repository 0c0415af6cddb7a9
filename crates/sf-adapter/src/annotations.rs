//! Annotation names and API name / label normalization.

use busbar_sf_elements::{Element, ObjectType};
use serde_json::Value;

use crate::naming::to_wire_name;

pub const API_NAME: &str = "api_name";
pub const LABEL: &str = "label";
pub const REQUIRED: &str = "required";
pub const DEFAULT: &str = "_default";
pub const PICKLIST_VALUES: &str = "values";
pub const RESTRICTED_PICKLIST: &str = "restricted_pick_list";
pub const FIELD_LEVEL_SECURITY: &str = "field_level_security";

pub const FLS_EDITABLE: &str = "editable";
pub const FLS_READABLE: &str = "readable";

fn annotate_api_name_and_label(element: &mut impl Element) {
    let name = element.elem_id().name().to_string();
    // field ids are `object.field`; the last segment is the element's own name
    let own_name = name.rsplit('.').next().unwrap_or(&name).to_string();
    element.set_annotation_if_missing(API_NAME, || Value::from(to_wire_name(&own_name, true)));
    element.set_annotation_if_missing(LABEL, || Value::from(to_wire_name(&own_name, false)));
}

/// Add `api_name` and `label` to the object and each of its fields where
/// missing. Existing annotations are left untouched, so calling this again is
/// a no-op.
pub fn add_api_name_and_label(object: &mut ObjectType) {
    annotate_api_name_and_label(object);
    for field in object.fields.values_mut() {
        annotate_api_name_and_label(field);
    }
}

/// The `api_name` annotation of an element, if set.
pub fn api_name(element: &impl Element) -> Option<&str> {
    element.annotation_str(API_NAME)
}
