//! Runtime type hierarchy used for superclass walks
//!
//! The hierarchy is an opaque description of the host's compiled types: for
//! each type, its superclass and the fields it declares in declaration order.
//! Both the field scanner (resolving field names) and the modifier catalog
//! (resolving field types) walk it from a starting type up toward
//! [`OBJECT_ROOT`].

use crate::model::FieldDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The universal root every reference type extends
pub const OBJECT_ROOT: &str = "java.lang.Object";

/// A field declared by one type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub runtime_type: String,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, runtime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runtime_type: runtime_type.into(),
            is_static: false,
        }
    }

    pub fn new_static(name: impl Into<String>, runtime_type: impl Into<String>) -> Self {
        Self {
            is_static: true,
            ..Self::new(name, runtime_type)
        }
    }
}

/// Superclass and declared fields of one type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

impl TypeInfo {
    pub fn new(superclass: impl Into<String>) -> Self {
        Self {
            superclass: Some(superclass.into()),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }
}

/// Known runtime types, keyed by fully qualified name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeHierarchy {
    #[serde(default)]
    types: HashMap<String, TypeInfo>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a hierarchy from its JSON form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Add or replace a type, builder style
    pub fn with_type(mut self, name: impl Into<String>, info: TypeInfo) -> Self {
        self.insert(name, info);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, info: TypeInfo) {
        self.types.insert(name.into(), info);
    }

    pub fn get(&self, name: &str) -> Option<&TypeInfo> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Immediate superclass of a type.
    ///
    /// Unregistered array types (`Foo[]`) extend [`OBJECT_ROOT`]; other
    /// unregistered types, primitives included, have no known superclass.
    pub fn superclass(&self, name: &str) -> Option<&str> {
        match self.types.get(name) {
            Some(info) => info.superclass.as_deref(),
            None if name.ends_with("[]") => Some(OBJECT_ROOT),
            None => None,
        }
    }

    /// The type itself followed by each superclass, nearest first.
    ///
    /// Stops at the end of the chain or when a type repeats.
    pub fn ancestors<'a>(&'a self, start: &'a str) -> Ancestors<'a> {
        Ancestors {
            hierarchy: self,
            next: Some(start),
            seen: HashSet::new(),
        }
    }

    /// Find a field by name, walking from `start` through its superclasses.
    ///
    /// Returns the declaring type along with the declaration.
    pub fn find_field<'a>(&'a self, start: &'a str, name: &str) -> Option<(&'a str, &'a FieldDecl)> {
        self.ancestors(start).find_map(|ty| {
            self.types
                .get(ty)
                .and_then(|info| info.fields.iter().find(|f| f.name == name))
                .map(|field| (ty, field))
        })
    }

    /// Instance fields of a type in memory order: the type's own declarations
    /// first, then each superclass's, nearest first.
    pub fn memory_order(&self, start: &str) -> Vec<FieldDescriptor> {
        let mut order = Vec::new();

        for ty in self.ancestors(start) {
            let Some(info) = self.types.get(ty) else {
                continue;
            };

            for field in info.fields.iter().filter(|f| !f.is_static) {
                order.push(FieldDescriptor {
                    declaring_type: ty.to_string(),
                    runtime_type: field.runtime_type.clone(),
                    name: field.name.clone(),
                    ordinal: order.len(),
                });
            }
        }

        order
    }
}

/// Iterator over a type and its superclasses
pub struct Ancestors<'a> {
    hierarchy: &'a TypeHierarchy,
    next: Option<&'a str>,
    seen: HashSet<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        if !self.seen.insert(current) {
            return None;
        }

        self.next = self.hierarchy.superclass(current);
        Some(current)
    }
}
