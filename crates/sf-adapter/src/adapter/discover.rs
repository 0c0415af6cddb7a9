use busbar_sf_elements::{Element, ObjectType};
use futures::future::try_join_all;
use tracing::{debug, info, instrument};

use crate::annotations::{API_NAME, LABEL};
use crate::client::SalesforceApi;
use crate::describe::SObjectBasicInfo;
use crate::error::Result;
use crate::naming::to_internal_name;

use super::permissions::attach_field_level_security;

impl<C: SalesforceApi> super::SalesforceAdapter<C> {
    /// Discover every data object and metadata type of the org.
    ///
    /// Object discovery, metadata-type discovery and profile reading run
    /// concurrently. Once all three complete, field-level security is attached
    /// to the data object fields. Data objects come first in the result,
    /// followed by metadata types.
    #[instrument(skip(self))]
    pub async fn discover(&self) -> Result<Vec<ObjectType>> {
        let (mut elements, metadata_types, permissions) = futures::try_join!(
            self.discover_sobjects(),
            self.discover_metadata_types(),
            self.discover_field_permissions(),
        )?;

        for object in &mut elements {
            attach_field_level_security(object, &permissions);
        }
        let objects = elements.len();
        elements.extend(metadata_types);

        info!(
            objects,
            metadata_types = elements.len() - objects,
            "Discovery complete"
        );
        Ok(elements)
    }

    /// Discover every data object with its fields.
    #[instrument(skip(self))]
    pub async fn discover_sobjects(&self) -> Result<Vec<ObjectType>> {
        let sobjects = self.client.list_sobjects().await?;
        debug!(count = sobjects.len(), "Listed data objects");
        try_join_all(sobjects.iter().map(|info| self.discover_sobject(info))).await
    }

    async fn discover_sobject(&self, info: &SObjectBasicInfo) -> Result<ObjectType> {
        let fields = self.client.describe_sobject_fields(&info.name).await?;

        let mut object = ObjectType::new(self.mapper.elem_id(&to_internal_name(&info.name)));
        object.set_annotation(API_NAME, info.name.as_str());
        object.set_annotation(LABEL, info.label.as_deref().unwrap_or(&info.name));
        for field in &fields {
            self.mapper.add_sobject_field(&mut object, field);
        }
        Ok(object)
    }

    /// Discover every metadata type, except the configured exclusions, with
    /// its value fields.
    #[instrument(skip(self))]
    pub async fn discover_metadata_types(&self) -> Result<Vec<ObjectType>> {
        let type_names: Vec<String> = self
            .client
            .list_metadata_types()
            .await?
            .into_iter()
            .filter(|name| !self.config.is_excluded(name))
            .collect();
        debug!(count = type_names.len(), "Listed metadata types");
        try_join_all(type_names.iter().map(|name| self.discover_metadata_type(name))).await
    }

    async fn discover_metadata_type(&self, type_name: &str) -> Result<ObjectType> {
        let fields = self.client.describe_metadata_type_fields(type_name).await?;

        let mut object = ObjectType::new(self.mapper.elem_id(&to_internal_name(type_name)));
        object.set_annotation(API_NAME, type_name);
        for field in &fields {
            self.mapper.add_value_type_field(&mut object, field);
        }
        Ok(object)
    }
}
