//! Canonical type registry.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tracing::trace;

use crate::element::{ElemId, ObjectType};

/// Lookup-or-create store of canonical object types keyed by [`ElemId`].
///
/// A registry is owned by one adapter instance. Entries are created lazily on
/// first lookup and never mutated afterwards; callers always receive clones, so
/// annotating a returned type does not touch the canonical instance.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: Mutex<HashMap<ElemId, ObjectType>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a clone of the canonical type for `elem_id`, creating an empty
    /// object type on first use.
    pub fn get_or_create(&self, elem_id: ElemId) -> ObjectType {
        let mut types = self.types.lock().unwrap_or_else(PoisonError::into_inner);
        types
            .entry(elem_id)
            .or_insert_with_key(|id| {
                trace!(elem_id = %id, "Registering type");
                ObjectType::new(id.clone())
            })
            .clone()
    }

    /// Return a clone of the canonical type for `elem_id`, if registered.
    pub fn get(&self, elem_id: &ElemId) -> Option<ObjectType> {
        let types = self.types.lock().unwrap_or_else(PoisonError::into_inner);
        types.get(elem_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.types
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
