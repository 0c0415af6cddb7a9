use busbar_sf_elements::{Field, ObjectType};
use tracing::{debug, info, instrument};

use crate::annotations::{add_api_name_and_label, api_name};
use crate::client::SalesforceApi;
use crate::error::{Error, ErrorKind, Result};
use crate::mapper::{custom_field, custom_object, field_api_full_name, object_api_name};
use crate::types::{CUSTOM_FIELD, CUSTOM_OBJECT};

use super::{check_results, to_payload};

impl<C: SalesforceApi> super::SalesforceAdapter<C> {
    /// Create a custom object with all of its fields.
    ///
    /// The element is cloned and given `api_name` / `label` annotations where
    /// missing. After the object is created, the system administrator profile
    /// is granted read and edit access on every field. Returns the annotated
    /// clone.
    #[instrument(skip(self, element), fields(elem_id = %element.elem_id))]
    pub async fn add(&self, element: &ObjectType) -> Result<ObjectType> {
        let mut object = element.clone();
        add_api_name_and_label(&mut object);

        let payload = to_payload(&[custom_object(&object)])?;
        let results = self.client.create_metadata(CUSTOM_OBJECT, &payload).await?;
        check_results(&results)?;

        let fields = object
            .fields
            .values()
            .map(|field| field_api_full_name(&object, field))
            .collect();
        self.update_permissions(fields).await?;

        info!(
            api_name = %object_api_name(&object),
            fields = object.fields.len(),
            "Created custom object"
        );
        Ok(object)
    }

    /// Reconcile the fields of an existing custom object.
    ///
    /// Fields only present in `prev` are deleted and fields only present in
    /// `new` are created (and granted to the system administrator profile),
    /// each in a single batched call that is skipped when there is nothing to
    /// do. Fields present in both versions are not compared. Fails before any
    /// remote call unless `prev` carries the API name `new` normalizes to.
    #[instrument(skip(self, prev, new), fields(elem_id = %new.elem_id))]
    pub async fn update(&self, prev: &ObjectType, new: &ObjectType) -> Result<ObjectType> {
        let mut new_object = new.clone();
        add_api_name_and_label(&mut new_object);

        let new_name = object_api_name(&new_object);
        let prev_name = api_name(prev).unwrap_or_default();
        if prev_name != new_name {
            return Err(Error::new(ErrorKind::ApiNameMismatch {
                previous: prev_name.to_string(),
                new: new_name,
            }));
        }
        // unannotated fields of the stored version resolve to synthesized names
        let mut prev_object = prev.clone();
        add_api_name_and_label(&mut prev_object);

        let removed: Vec<String> = prev_object
            .fields
            .values()
            .filter(|field| !new_object.fields.contains_key(&field.name))
            .map(|field| field_api_full_name(&prev_object, field))
            .collect();
        self.delete_fields(&removed).await?;

        let added: Vec<&Field> = new_object
            .fields
            .values()
            .filter(|field| !prev_object.fields.contains_key(&field.name))
            .collect();
        self.create_fields(&new_object, &added).await?;

        // TODO: propagate attribute changes (label, required, picklist values)
        // of fields present in both versions via update_metadata.
        info!(
            api_name = %new_name,
            removed = removed.len(),
            added = added.len(),
            "Updated custom object"
        );
        Ok(new_object)
    }

    /// Delete a custom object.
    #[instrument(skip(self, element), fields(elem_id = %element.elem_id))]
    pub async fn remove(&self, element: &ObjectType) -> Result<()> {
        let mut object = element.clone();
        add_api_name_and_label(&mut object);
        let name = object_api_name(&object);

        let results = self
            .client
            .delete_metadata(CUSTOM_OBJECT, &[name.as_str()])
            .await?;
        check_results(&results)?;

        info!(api_name = %name, "Removed custom object");
        Ok(())
    }

    async fn delete_fields(&self, full_names: &[String]) -> Result<()> {
        if full_names.is_empty() {
            debug!("No fields to delete");
            return Ok(());
        }
        let names: Vec<&str> = full_names.iter().map(String::as_str).collect();
        debug!(fields = ?names, "Deleting fields");
        let results = self.client.delete_metadata(CUSTOM_FIELD, &names).await?;
        check_results(&results)
    }

    async fn create_fields(&self, object: &ObjectType, fields: &[&Field]) -> Result<()> {
        if fields.is_empty() {
            debug!("No fields to create");
            return Ok(());
        }
        let full_names: Vec<String> = fields
            .iter()
            .map(|field| field_api_full_name(object, field))
            .collect();
        debug!(fields = ?full_names, "Creating fields");

        let custom_fields: Vec<_> = fields
            .iter()
            .zip(&full_names)
            .map(|(field, full_name)| custom_field(field, full_name.clone()))
            .collect();
        let results = self
            .client
            .create_metadata(CUSTOM_FIELD, &to_payload(&custom_fields)?)
            .await?;
        check_results(&results)?;

        self.update_permissions(full_names).await
    }
}
