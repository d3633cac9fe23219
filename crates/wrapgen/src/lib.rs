//! # wrapgen
//!
//! Generates Java wrapper classes for network messages by reconciling two
//! descriptions of each message's fields:
//! - the order a compiled serialization method reads them, and
//! - the names, types and notes the protocol documentation gives them.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wrapgen::prelude::*;
//!
//! let _sink = init_logging(LogLevel::Info);
//!
//! let generator = WrapperGenerator::load(None, "hierarchy.json".as_ref(), "registry.toml".as_ref())?;
//! let document = WrapperGenerator::load_document("protocol.json".as_ref())?;
//! let documented = generator.parse_document(&document);
//!
//! for (key, result) in generator.generate_all(&methods, &documented) {
//!     match result {
//!         Ok(wrapper) => std::fs::write(wrapper.file_name(), wrapper.source)?,
//!         Err(err) => tracing::warn!(message_key = %key, error = %err, "skipped"),
//!     }
//! }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`wrapgen_core`] - Data model, registries, configuration and errors
//! - [`wrapgen_logging`] - Tracing setup and diagnostics capture
//! - [`wrapgen_codegen`] - Catalog, scanner, reader, normalizer and emitter

// Re-export core types
pub use wrapgen_core::{
    Category, DocField, Direction, FieldDecl, FieldDescriptor, GeneratorConfig, LogLevel,
    MessageKey, MessageRegistry, MessageType, OBJECT_ROOT, TypeHierarchy, TypeInfo, WrapgenError,
    WrapgenResult,
};

// Re-export error types
pub use wrapgen_core::{CatalogError, ConfigError, FieldError, RegistryError, ScanError};

// Re-export logging
pub use wrapgen_logging::{Diagnostic, DiagnosticSink, DiagnosticsLayer, init_logging};

// Re-export the generation pipeline
pub use wrapgen_codegen::{
    CodeEmitter, CountMismatch, Document, DocumentationFieldReader, DocumentedFields,
    FieldOrderStrategy, FieldScanner, FirstReadPerLine, GeneratedWrapper, GenerationResults,
    Instruction, MethodBody, ModifierCatalog, ModifierDescriptor, ScanResult, TypeNormalizer,
    WrapperGenerator, align_by_index, align_by_index_strict, resolve_modifier,
};

// Re-export common dependencies
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use wrapgen::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        DocField, Document, GeneratorConfig, LogLevel, MessageKey, MessageRegistry, MessageType,
        MethodBody, ModifierCatalog, TypeHierarchy, TypeNormalizer, WrapgenError, WrapgenResult,
        WrapperGenerator, init_logging,
    };
}
