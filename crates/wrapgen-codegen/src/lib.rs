//! wrapgen-codegen - Wrapper class generation
//!
//! The generation pipeline, leaves first:
//! - [`ModifierCatalog`]: runtime type to host accessor, hierarchy-aware
//! - [`FieldScanner`]: wire field order from a serialization method
//! - [`DocumentationFieldReader`]: documented fields per message type
//! - [`TypeNormalizer`]: free-text types to output type tokens
//! - [`CodeEmitter`]: aligned fields to Java source
//! - [`WrapperGenerator`]: all of the above, batched across message types

pub mod align;
pub mod catalog;
pub mod document;
pub mod emitter;
pub mod generator;
pub mod naming;
pub mod normalize;
pub mod reader;
pub mod scanner;
pub mod writer;

pub use align::{AlignedField, Alignment, CountMismatch, align_by_index, align_by_index_strict};
pub use catalog::{ModifierCatalog, ModifierDescriptor, resolve_modifier};
pub use document::{Cell, Document, Row, Section, Table};
pub use emitter::{CodeEmitter, FieldTyping, accessor_index};
pub use generator::{GeneratedWrapper, GenerationResults, WrapperGenerator};
pub use normalize::TypeNormalizer;
pub use reader::{DocumentationFieldReader, DocumentedFields, parse_packet_id};
pub use scanner::{
    FieldOpcode, FieldOrderStrategy, FieldScanner, FirstReadPerLine, Instruction, MethodBody,
    ScanResult,
};
pub use writer::GeneratedSource;
