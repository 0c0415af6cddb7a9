//! In-memory org shared by the integration tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use busbar_sf_adapters::adapter::{
    CustomField, FieldDescribe, FieldPermission, MetadataComponent, PicklistValue, ProfileInfo,
    SObjectBasicInfo, SaveResult, ValueTypeField, CUSTOM_FIELD, CUSTOM_OBJECT, PROFILE,
};
use busbar_sf_adapters::{Result, SalesforceApi};
use serde_json::{json, Value};

/// Initialize test logging once; `RUST_LOG` controls the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Default)]
struct OrgState {
    /// Object API name → (label, fields by field API name).
    objects: BTreeMap<String, (String, BTreeMap<String, CustomField>)>,
    profiles: BTreeMap<String, ProfileInfo>,
}

/// A Salesforce org held in memory.
///
/// Save results are rendered the way the vendor does, a bare object for a
/// single component and an array otherwise, and normalized through
/// [`SaveResult::from_response`].
#[derive(Debug, Default)]
pub struct FakeOrg {
    state: Mutex<OrgState>,
}

impl FakeOrg {
    /// An org with a standard `Account` object and an `Admin` profile that
    /// can edit `Account.Name`.
    pub fn with_account() -> Self {
        let org = Self::default();
        {
            let mut state = org.state.lock().unwrap();
            let mut fields = BTreeMap::new();
            fields.insert(
                "Name".to_string(),
                CustomField::new("Name", "Text", "Account Name", true),
            );
            fields.insert(
                "Industry".to_string(),
                CustomField::new("Industry", "Picklist", "Industry", false)
                    .with_picklist_values(&["Banking".to_string(), "Energy".to_string()], &[]),
            );
            state
                .objects
                .insert("Account".to_string(), ("Account".to_string(), fields));

            let mut admin = ProfileInfo::new("Admin");
            admin.field_permissions.push(FieldPermission {
                field: "Account.Name".to_string(),
                editable: true,
                readable: true,
            });
            state.profiles.insert("Admin".to_string(), admin);
        }
        org
    }

    pub fn has_object(&self, api_name: &str) -> bool {
        self.state.lock().unwrap().objects.contains_key(api_name)
    }

    pub fn field_names(&self, object: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .objects
            .get(object)
            .map(|(_, fields)| fields.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn field(&self, object: &str, field: &str) -> Option<CustomField> {
        self.state
            .lock()
            .unwrap()
            .objects
            .get(object)
            .and_then(|(_, fields)| fields.get(field).cloned())
    }
}

fn render(results: Vec<SaveResult>) -> Value {
    match results.as_slice() {
        [single] => json!(single),
        _ => json!(results),
    }
}

fn describe_type(field_type: &str) -> &'static str {
    match field_type {
        "Text" => "string",
        "Number" => "double",
        "Checkbox" => "boolean",
        "Picklist" => "picklist",
        _ => "anyType",
    }
}

fn split_full_name(full_name: &str) -> Option<(&str, &str)> {
    full_name.split_once('.')
}

#[async_trait]
impl SalesforceApi for FakeOrg {
    async fn list_sobjects(&self) -> Result<Vec<SObjectBasicInfo>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .objects
            .iter()
            .map(|(name, (label, _))| {
                let mut info = SObjectBasicInfo::new(name.clone());
                info.label = Some(label.clone());
                info.custom = name.ends_with("__c");
                info
            })
            .collect())
    }

    async fn describe_sobject_fields(&self, object_name: &str) -> Result<Vec<FieldDescribe>> {
        let state = self.state.lock().unwrap();
        let Some((_, fields)) = state.objects.get(object_name) else {
            return Ok(Vec::new());
        };
        Ok(fields
            .values()
            .map(|field| {
                let mut describe =
                    FieldDescribe::new(field.full_name.clone(), describe_type(&field.field_type));
                describe.label = Some(field.label.clone());
                describe.nillable = !field.required;
                if let Some(values) = &field.picklist_values {
                    describe.picklist_values = Some(
                        values
                            .iter()
                            .map(|v| PicklistValue::new(v.full_name.clone(), v.default))
                            .collect(),
                    );
                    describe.restricted_picklist = Some(false);
                } else if let Some(default) = &field.default_value {
                    describe.default_value = Some(json!(default));
                }
                describe
            })
            .collect())
    }

    async fn list_metadata_types(&self) -> Result<Vec<String>> {
        Ok(vec![
            "ApexClass".to_string(),
            CUSTOM_OBJECT.to_string(),
        ])
    }

    async fn describe_metadata_type_fields(&self, type_name: &str) -> Result<Vec<ValueTypeField>> {
        if type_name != "ApexClass" {
            return Ok(Vec::new());
        }
        let mut api_version = ValueTypeField::new("apiVersion", "double");
        api_version.value_required = true;
        let mut status = ValueTypeField::new("status", "string");
        status.picklist_values = vec![
            PicklistValue::new("Active", true),
            PicklistValue::new("Deleted", false),
        ];
        Ok(vec![api_version, status])
    }

    async fn list_metadata(&self, metadata_type: &str) -> Result<Vec<MetadataComponent>> {
        let state = self.state.lock().unwrap();
        if metadata_type != PROFILE {
            return Ok(Vec::new());
        }
        Ok(state
            .profiles
            .keys()
            .map(|name| MetadataComponent {
                full_name: name.clone(),
                metadata_type: PROFILE.to_string(),
            })
            .collect())
    }

    async fn read_profile(&self, full_name: &str) -> Result<ProfileInfo> {
        let state = self.state.lock().unwrap();
        Ok(state
            .profiles
            .get(full_name)
            .cloned()
            .unwrap_or_else(|| ProfileInfo::new(full_name)))
    }

    async fn create_metadata(
        &self,
        metadata_type: &str,
        payload: &[Value],
    ) -> Result<Vec<SaveResult>> {
        let mut state = self.state.lock().unwrap();
        let mut results = Vec::new();
        for item in payload {
            let full_name = item["fullName"].as_str().unwrap_or_default().to_string();
            let result = match metadata_type {
                CUSTOM_OBJECT if state.objects.contains_key(&full_name) => SaveResult::failure(
                    &full_name,
                    "DUPLICATE_DEVELOPER_NAME",
                    &format!("There is already an object named {full_name}"),
                ),
                CUSTOM_OBJECT => {
                    let label = item["label"].as_str().unwrap_or_default().to_string();
                    let fields: Vec<CustomField> =
                        serde_json::from_value(item["fields"].clone()).unwrap_or_default();
                    let fields = fields
                        .into_iter()
                        .map(|f| (f.full_name.clone(), f))
                        .collect();
                    state.objects.insert(full_name.clone(), (label, fields));
                    SaveResult::success(&full_name)
                }
                CUSTOM_FIELD => {
                    let mut field: CustomField = serde_json::from_value(item.clone())?;
                    match split_full_name(&full_name)
                        .and_then(|(object, name)| Some((state.objects.get_mut(object)?, name)))
                    {
                        Some(((_, fields), name)) => {
                            field.full_name = name.to_string();
                            fields.insert(name.to_string(), field);
                            SaveResult::success(&full_name)
                        }
                        None => SaveResult::failure(
                            &full_name,
                            "INVALID_CROSS_REFERENCE_KEY",
                            &format!("No object for field {full_name}"),
                        ),
                    }
                }
                other => SaveResult::failure(
                    &full_name,
                    "INVALID_TYPE",
                    &format!("Cannot create {other}"),
                ),
            };
            results.push(result);
        }
        SaveResult::from_response(render(results))
    }

    async fn update_metadata(
        &self,
        metadata_type: &str,
        payload: &[Value],
    ) -> Result<Vec<SaveResult>> {
        let mut state = self.state.lock().unwrap();
        let mut results = Vec::new();
        for item in payload {
            if metadata_type != PROFILE {
                results.push(SaveResult::failure(
                    "",
                    "INVALID_TYPE",
                    "Only profiles are updatable",
                ));
                continue;
            }
            let update: ProfileInfo = serde_json::from_value(item.clone())?;
            let profile = state
                .profiles
                .entry(update.full_name.clone())
                .or_insert_with(|| ProfileInfo::new(update.full_name.clone()));
            for permission in update.field_permissions {
                profile
                    .field_permissions
                    .retain(|existing| existing.field != permission.field);
                profile.field_permissions.push(permission);
            }
            results.push(SaveResult::success(&update.full_name));
        }
        SaveResult::from_response(render(results))
    }

    async fn delete_metadata(
        &self,
        metadata_type: &str,
        full_names: &[&str],
    ) -> Result<Vec<SaveResult>> {
        let mut state = self.state.lock().unwrap();
        let mut results = Vec::new();
        for full_name in full_names {
            let deleted = match metadata_type {
                CUSTOM_OBJECT => state.objects.remove(*full_name).is_some(),
                CUSTOM_FIELD => split_full_name(full_name)
                    .and_then(|(object, name)| state.objects.get_mut(object)?.1.remove(name))
                    .is_some(),
                _ => false,
            };
            results.push(if deleted {
                SaveResult::success(*full_name)
            } else {
                SaveResult::failure(
                    *full_name,
                    "INVALID_CROSS_REFERENCE_KEY",
                    &format!("No {metadata_type} named {full_name}"),
                )
            });
        }
        SaveResult::from_response(render(results))
    }
}
