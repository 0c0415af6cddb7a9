//! Element types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

/// Annotation values keyed by annotation name.
pub type Values = serde_json::Map<String, Value>;

/// Identifier of an element: the adapter namespace plus the internal name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElemId {
    adapter: String,
    name: String,
}

impl ElemId {
    pub fn new(adapter: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            adapter: adapter.into(),
            name: name.into(),
        }
    }

    pub fn adapter(&self) -> &str {
        &self.adapter
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of a child element nested under this one.
    pub fn child(&self, name: &str) -> ElemId {
        ElemId::new(self.adapter.clone(), format!("{}.{}", self.name, name))
    }
}

impl std::fmt::Display for ElemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.adapter.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.adapter, self.name)
        }
    }
}

/// Common behaviour of anything that carries annotations.
pub trait Element {
    fn elem_id(&self) -> &ElemId;

    fn annotations(&self) -> &Values;

    fn annotations_mut(&mut self) -> &mut Values;

    /// Get an annotation value by name.
    fn annotation(&self, name: &str) -> Option<&Value> {
        self.annotations().get(name)
    }

    /// Get an annotation value as a string, if it is one.
    fn annotation_str(&self, name: &str) -> Option<&str> {
        self.annotation(name).and_then(Value::as_str)
    }

    /// Set an annotation, replacing any previous value.
    fn set_annotation(&mut self, name: impl Into<String>, value: impl Into<Value>)
    where
        Self: Sized,
    {
        self.annotations_mut().insert(name.into(), value.into());
    }

    /// Set an annotation only when it is absent or null.
    ///
    /// Returns `true` if the value was written.
    fn set_annotation_if_missing(
        &mut self,
        name: &str,
        value: impl FnOnce() -> Value,
    ) -> bool
    where
        Self: Sized,
    {
        match self.annotations().get(name) {
            Some(existing) if !existing.is_null() => false,
            _ => {
                self.annotations_mut().insert(name.to_string(), value());
                true
            }
        }
    }
}

/// Flavour of a primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
}

/// A leaf type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveType {
    pub elem_id: ElemId,
    pub primitive: PrimitiveKind,
    #[serde(default)]
    pub annotations: Values,
}

impl PrimitiveType {
    pub fn new(elem_id: ElemId, primitive: PrimitiveKind) -> Self {
        Self {
            elem_id,
            primitive,
            annotations: Values::new(),
        }
    }
}

impl Element for PrimitiveType {
    fn elem_id(&self) -> &ElemId {
        &self.elem_id
    }

    fn annotations(&self) -> &Values {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Values {
        &mut self.annotations
    }
}

/// An object-shaped element: annotations plus named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectType {
    pub elem_id: ElemId,
    #[serde(default)]
    pub annotations: Values,
    #[serde(default)]
    pub fields: BTreeMap<String, Field>,
}

impl ObjectType {
    pub fn new(elem_id: ElemId) -> Self {
        Self {
            elem_id,
            annotations: Values::new(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field of the given type and return a mutable reference to it.
    pub fn add_field(&mut self, name: impl Into<String>, field_type: Type) -> &mut Field {
        let name = name.into();
        let field = Field::new(self.elem_id.clone(), name.clone(), field_type);
        match self.fields.entry(name) {
            Entry::Occupied(mut entry) => {
                entry.insert(field);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(field),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }

    /// Names of all fields, in sorted order.
    pub fn field_names(&self) -> BTreeSet<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
}

impl Element for ObjectType {
    fn elem_id(&self) -> &ElemId {
        &self.elem_id
    }

    fn annotations(&self) -> &Values {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Values {
        &mut self.annotations
    }
}

/// A field of an [`ObjectType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub elem_id: ElemId,
    pub name: String,
    pub field_type: Type,
    #[serde(default)]
    pub annotations: Values,
}

impl Field {
    pub fn new(parent_id: ElemId, name: impl Into<String>, field_type: Type) -> Self {
        let name = name.into();
        Self {
            elem_id: parent_id.child(&name),
            name,
            field_type,
            annotations: Values::new(),
        }
    }
}

impl Element for Field {
    fn elem_id(&self) -> &ElemId {
        &self.elem_id
    }

    fn annotations(&self) -> &Values {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Values {
        &mut self.annotations
    }
}

/// Any type a field can have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    Primitive(PrimitiveType),
    Object(ObjectType),
}

impl Type {
    pub fn elem_id(&self) -> &ElemId {
        match self {
            Type::Primitive(p) => &p.elem_id,
            Type::Object(o) => &o.elem_id,
        }
    }

    /// The primitive kind, if this is a primitive type.
    pub fn primitive(&self) -> Option<PrimitiveKind> {
        match self {
            Type::Primitive(p) => Some(p.primitive),
            Type::Object(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Type::Object(o) => Some(o),
            Type::Primitive(_) => None,
        }
    }
}

impl From<PrimitiveType> for Type {
    fn from(p: PrimitiveType) -> Self {
        Type::Primitive(p)
    }
}

impl From<ObjectType> for Type {
    fn from(o: ObjectType) -> Self {
        Type::Object(o)
    }
}
