//! Modifier catalog: runtime field type to host accessor
//!
//! The catalog is a data-driven table. A built-in table covering the
//! wire-representable types ships with the crate (`catalog/modifiers.toml`);
//! callers can load their own with [`ModifierCatalog::from_toml_str`].
//!
//! Lookup by exact type is [`ModifierCatalog::get`]. Hierarchy-aware lookup,
//! which also matches registered ancestors, is the free function
//! [`resolve_modifier`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use wrapgen_core::{CatalogError, OBJECT_ROOT, TypeHierarchy};

const BUILTIN_TABLE: &str = include_str!("catalog/modifiers.toml");

/// Binding of a runtime type to the generic accessor that reads and writes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierDescriptor {
    pub runtime_type: String,
    /// Java type the accessor yields
    pub output_type: String,
    /// Accessor call on the packet handle, e.g. `getIntegers()`
    pub accessor: String,
    /// The accessor always yields `output_type`, whatever the documentation says
    #[serde(default)]
    pub wrapper: bool,
}

impl ModifierDescriptor {
    pub fn new(
        runtime_type: impl Into<String>,
        output_type: impl Into<String>,
        accessor: impl Into<String>,
    ) -> Self {
        Self {
            runtime_type: runtime_type.into(),
            output_type: output_type.into(),
            accessor: accessor.into(),
            wrapper: false,
        }
    }

    pub fn as_wrapper(mut self) -> Self {
        self.wrapper = true;
        self
    }

    /// Whether the accessor yields `int` or `float`, which the host widens
    /// narrower wire values into
    pub fn is_widening_numeric(&self) -> bool {
        self.output_type.eq_ignore_ascii_case("int") || self.output_type.eq_ignore_ascii_case("float")
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    modifier: Vec<ModifierDescriptor>,
}

/// Read-only registry of modifiers keyed by runtime type
#[derive(Debug, Clone, Default)]
pub struct ModifierCatalog {
    entries: HashMap<String, ModifierDescriptor>,
}

impl ModifierCatalog {
    /// The table shipped with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_TABLE)
    }

    /// Parse a table of `[[modifier]]` entries
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| CatalogError::Malformed(e.to_string()))?;

        Self::from_entries(file.modifier)
    }

    /// Load a table from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Malformed(format!("{}: {e}", path.display())))?;

        Self::from_toml_str(&content)
    }

    /// Build a catalog, rejecting duplicate runtime types and blank values
    pub fn from_entries(
        entries: impl IntoIterator<Item = ModifierDescriptor>,
    ) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();

        for entry in entries {
            for (field, value) in [
                ("runtime_type", &entry.runtime_type),
                ("output_type", &entry.output_type),
                ("accessor", &entry.accessor),
            ] {
                if value.trim().is_empty() {
                    return Err(CatalogError::EmptyValue {
                        runtime_type: entry.runtime_type.clone(),
                        field,
                    });
                }
            }

            if map.contains_key(&entry.runtime_type) {
                return Err(CatalogError::DuplicateEntry(entry.runtime_type));
            }
            map.insert(entry.runtime_type.clone(), entry);
        }

        Ok(Self { entries: map })
    }

    /// Exact-match lookup
    pub fn get(&self, runtime_type: &str) -> Option<&ModifierDescriptor> {
        self.entries.get(runtime_type)
    }

    /// Hierarchy-aware lookup; see [`resolve_modifier`]
    pub fn lookup<'a>(
        &'a self,
        hierarchy: &TypeHierarchy,
        runtime_type: &str,
    ) -> Option<&'a ModifierDescriptor> {
        resolve_modifier(self, hierarchy, runtime_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModifierDescriptor> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Find the modifier for a runtime type.
///
/// Tries the type itself, then each superclass in order, and gives up
/// before reaching [`OBJECT_ROOT`] so unrelated types never match a
/// catch-all entry.
pub fn resolve_modifier<'a>(
    catalog: &'a ModifierCatalog,
    hierarchy: &TypeHierarchy,
    runtime_type: &str,
) -> Option<&'a ModifierDescriptor> {
    hierarchy
        .ancestors(runtime_type)
        .take_while(|ty| *ty != OBJECT_ROOT)
        .find_map(|ty| catalog.get(ty))
}

#[cfg(test)]
#[path = "catalog/catalog_tests.rs"]
mod catalog_tests;
