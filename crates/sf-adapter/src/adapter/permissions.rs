//! Field-level security.

use std::collections::{BTreeMap, HashMap};

use busbar_sf_elements::{Element, ObjectType};
use futures::future::try_join_all;
use serde_json::{json, Map, Value};
use tracing::{debug, instrument};

use crate::annotations::{FIELD_LEVEL_SECURITY, FLS_EDITABLE, FLS_READABLE};
use crate::client::SalesforceApi;
use crate::error::Result;
use crate::mapper::field_api_full_name;
use crate::naming::to_internal_name;
use crate::types::{ProfileInfo, PROFILE};

use super::{check_results, to_payload};

/// Access one profile has on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAccess {
    pub editable: bool,
    pub readable: bool,
}

/// Index of field permissions: `Object.Field` → profile name → access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPermissions {
    index: HashMap<String, BTreeMap<String, FieldAccess>>,
}

impl FieldPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from profiles read from the org.
    pub fn from_profiles(profiles: &[ProfileInfo]) -> Self {
        let mut permissions = Self::new();
        for profile in profiles {
            for permission in &profile.field_permissions {
                permissions.insert(
                    permission.field.clone(),
                    profile.full_name.clone(),
                    FieldAccess {
                        editable: permission.editable,
                        readable: permission.readable,
                    },
                );
            }
        }
        permissions
    }

    pub fn insert(&mut self, field: String, profile: String, access: FieldAccess) {
        self.index.entry(field).or_default().insert(profile, access);
    }

    /// Access per profile on a fully-qualified field name.
    pub fn get(&self, field: &str) -> Option<&BTreeMap<String, FieldAccess>> {
        self.index.get(field)
    }

    /// Number of fields with at least one recorded permission.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Annotate every field of `object` that has recorded permissions with
/// `field_level_security`: internal profile name → `{editable, readable}`.
/// Fields without recorded permissions are left untouched.
pub fn attach_field_level_security(object: &mut ObjectType, permissions: &FieldPermissions) {
    let full_names: Vec<(String, String)> = object
        .fields
        .values()
        .map(|field| (field.name.clone(), field_api_full_name(object, field)))
        .collect();

    for (name, full_name) in full_names {
        let Some(profiles) = permissions.get(&full_name) else {
            continue;
        };
        let security: Map<String, Value> = profiles
            .iter()
            .map(|(profile, access)| {
                (
                    to_internal_name(profile),
                    json!({ FLS_EDITABLE: access.editable, FLS_READABLE: access.readable }),
                )
            })
            .collect();
        if let Some(field) = object.field_mut(&name) {
            field.set_annotation(FIELD_LEVEL_SECURITY, security);
        }
    }
}

impl<C: SalesforceApi> super::SalesforceAdapter<C> {
    /// Read every profile and index its field permissions.
    #[instrument(skip(self))]
    pub async fn discover_field_permissions(&self) -> Result<FieldPermissions> {
        let components = self.client.list_metadata(PROFILE).await?;
        debug!(profiles = components.len(), "Reading profiles");

        let profiles = try_join_all(
            components
                .iter()
                .map(|component| self.client.read_profile(&component.full_name)),
        )
        .await?;

        let permissions = FieldPermissions::from_profiles(&profiles);
        debug!(fields = permissions.len(), "Indexed field permissions");
        Ok(permissions)
    }

    /// Grant the system administrator profile read and edit access on the
    /// given fully-qualified fields.
    pub(crate) async fn update_permissions(&self, fields: Vec<String>) -> Result<()> {
        let profile =
            ProfileInfo::new(self.config.system_admin_profile.clone()).with_full_access(fields);
        debug!(
            profile = %profile.full_name,
            fields = profile.field_permissions.len(),
            "Granting field permissions"
        );
        let results = self
            .client
            .update_metadata(PROFILE, &to_payload(&[profile])?)
            .await?;
        check_results(&results)
    }
}
