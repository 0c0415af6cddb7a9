//! Discover / add / update / remove against the in-memory org.

use busbar_sf_adapters::adapter::annotations::{
    API_NAME, DEFAULT, FIELD_LEVEL_SECURITY, LABEL, PICKLIST_VALUES, REQUIRED,
};
use busbar_sf_adapters::{AdapterConfig, Element, ObjectType, SalesforceAdapter};
use serde_json::json;

use super::common::{init_tracing, FakeOrg};

fn names(elements: &[ObjectType]) -> Vec<&str> {
    elements.iter().map(|e| e.elem_id.name()).collect()
}

fn find<'a>(elements: &'a [ObjectType], name: &str) -> &'a ObjectType {
    elements
        .iter()
        .find(|e| e.elem_id.name() == name)
        .unwrap_or_else(|| panic!("no element named {name}"))
}

fn lead(adapter: &SalesforceAdapter<FakeOrg>) -> ObjectType {
    let mapper = adapter.type_mapper();
    let mut lead = ObjectType::new(mapper.elem_id("lead"));
    lead.add_field("score", mapper.get_type("double"));
    lead.add_field("active", mapper.get_type("boolean"));
    lead.add_field("description", mapper.get_type("string"));
    lead
}

// ============================================================================
// Full cycle
// ============================================================================

#[tokio::test]
async fn test_discover_add_update_remove_cycle() {
    init_tracing();
    let adapter = SalesforceAdapter::new(FakeOrg::with_account());

    // Discover the initial org
    let elements = adapter.discover().await.unwrap();
    assert_eq!(names(&elements), vec!["account", "apex_class"]);

    let account = find(&elements, "account");
    let name = account.field("name").unwrap();
    assert_eq!(name.annotation_str(LABEL), Some("Account Name"));
    assert_eq!(name.annotation(REQUIRED), Some(&json!(true)));
    assert_eq!(
        name.annotation(FIELD_LEVEL_SECURITY),
        Some(&json!({ "admin": { "editable": true, "readable": true } }))
    );
    let industry = account.field("industry").unwrap();
    assert_eq!(
        industry.annotation(PICKLIST_VALUES),
        Some(&json!(["Banking", "Energy"]))
    );
    assert!(industry.annotation(FIELD_LEVEL_SECURITY).is_none());

    let apex_class = find(&elements, "apex_class");
    assert_eq!(
        apex_class.field("api_version").unwrap().annotation(REQUIRED),
        Some(&json!(true))
    );
    assert_eq!(
        apex_class.field("status").unwrap().annotation(DEFAULT),
        Some(&json!("Active"))
    );

    // Add a custom object
    let created = adapter.add(&lead(&adapter)).await.unwrap();
    assert_eq!(created.annotation_str(API_NAME), Some("Lead__c"));

    let org = adapter.client();
    assert!(org.has_object("Lead__c"));
    assert_eq!(
        org.field_names("Lead__c"),
        vec!["Active__c", "Description__c", "Score__c"]
    );
    assert_eq!(org.field("Lead__c", "Score__c").unwrap().precision, Some(18));
    assert_eq!(org.field("Lead__c", "Description__c").unwrap().length, Some(80));
    assert_eq!(
        org.field("Lead__c", "Active__c").unwrap().default_value.as_deref(),
        Some("false")
    );

    let elements = adapter.discover().await.unwrap();
    assert_eq!(names(&elements), vec!["account", "lead", "apex_class"]);
    let discovered = find(&elements, "lead");
    assert_eq!(discovered.annotation_str(API_NAME), Some("Lead__c"));
    assert_eq!(
        discovered.field("score").unwrap().annotation(FIELD_LEVEL_SECURITY),
        Some(&json!({ "admin": { "editable": true, "readable": true } }))
    );

    // Replace `description` with a `rating` picklist
    let mut lead_v2 = created.clone();
    lead_v2.fields.remove("description");
    let rating = lead_v2.add_field("rating", adapter.type_mapper().get_type("picklist"));
    rating.set_annotation(PICKLIST_VALUES, json!(["Hot", "Cold"]));
    rating.set_annotation(DEFAULT, "Hot");

    let updated = adapter.update(&created, &lead_v2).await.unwrap();
    assert_eq!(
        updated.field("rating").unwrap().annotation_str(API_NAME),
        Some("Rating__c")
    );
    assert_eq!(
        org.field_names("Lead__c"),
        vec!["Active__c", "Rating__c", "Score__c"]
    );
    let picklist = org.field("Lead__c", "Rating__c").unwrap();
    assert_eq!(picklist.field_type, "Picklist");
    let defaults: Vec<_> = picklist
        .picklist_values
        .unwrap()
        .into_iter()
        .filter(|v| v.default)
        .map(|v| v.full_name)
        .collect();
    assert_eq!(defaults, vec!["Hot"]);

    let elements = adapter.discover().await.unwrap();
    let rating = find(&elements, "lead").field("rating").unwrap();
    assert_eq!(rating.annotation(DEFAULT), Some(&json!("Hot")));
    assert_eq!(
        rating.annotation(FIELD_LEVEL_SECURITY),
        Some(&json!({ "admin": { "editable": true, "readable": true } }))
    );

    // Remove it again
    adapter.remove(&updated).await.unwrap();
    assert!(!org.has_object("Lead__c"));
    let elements = adapter.discover().await.unwrap();
    assert_eq!(names(&elements), vec!["account", "apex_class"]);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_add_existing_object_fails() {
    init_tracing();
    let adapter = SalesforceAdapter::new(FakeOrg::with_account());
    adapter.add(&lead(&adapter)).await.unwrap();

    let err = adapter.add(&lead(&adapter)).await.unwrap_err();
    assert_eq!(err.to_string(), "There is already an object named Lead__c");
}

#[tokio::test]
async fn test_remove_missing_object_fails() {
    let adapter = SalesforceAdapter::new(FakeOrg::with_account());
    let ghost = ObjectType::new(adapter.type_mapper().elem_id("ghost"));

    let err = adapter.remove(&ghost).await.unwrap_err();
    assert_eq!(err.to_string(), "No CustomObject named Ghost__c");
}

#[tokio::test]
async fn test_update_renamed_object_leaves_org_untouched() {
    let adapter = SalesforceAdapter::new(FakeOrg::with_account());
    let created = adapter.add(&lead(&adapter)).await.unwrap();

    let mut renamed = created.clone();
    renamed.set_annotation(API_NAME, "Prospect__c");
    renamed.fields.clear();

    let err = adapter.update(&created, &renamed).await.unwrap_err();
    assert!(err.to_string().contains("prev=Lead__c"));
    assert_eq!(adapter.client().field_names("Lead__c").len(), 3);
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_custom_namespace_and_admin_profile() {
    let config = AdapterConfig::builder()
        .with_namespace("crm")
        .with_system_admin_profile("System Administrator")
        .exclude_metadata_type("ApexClass")
        .build();
    let adapter = SalesforceAdapter::with_config(FakeOrg::with_account(), config);

    adapter.add(&lead(&adapter)).await.unwrap();

    let elements = adapter.discover().await.unwrap();
    assert_eq!(names(&elements), vec!["account", "lead"]);
    assert!(elements.iter().all(|e| e.elem_id.adapter() == "crm"));

    let score = find(&elements, "lead").field("score").unwrap();
    assert_eq!(
        score.annotation(FIELD_LEVEL_SECURITY),
        Some(&json!({ "system_administrator": { "editable": true, "readable": true } }))
    );
}
