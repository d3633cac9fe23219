//! wrapgen-core - Data model, registries and configuration
//!
//! This crate provides the foundational types shared by the wrapper generator:
//! - [`MessageKey`] and [`MessageType`] identifying network messages
//! - [`FieldDescriptor`] and [`DocField`], the two sides of a field alignment
//! - [`MessageRegistry`] for validating parsed message keys
//! - [`TypeHierarchy`] for superclass walks over runtime types
//! - [`GeneratorConfig`] for generator configuration
//! - [`WrapgenError`] for error handling

mod config;
mod error;
mod hierarchy;
mod model;
mod registry;

pub use config::{GeneratorConfig, default_type_substitutions};
pub use error::{
    CatalogError, ConfigError, FieldError, RegistryError, ScanError, WrapgenError, WrapgenResult,
};
pub use hierarchy::{Ancestors, FieldDecl, OBJECT_ROOT, TypeHierarchy, TypeInfo};
pub use model::{
    Category, DocField, Direction, FieldDescriptor, MessageKey, MessageType, enum_text,
};
pub use registry::MessageRegistry;

/// Log levels understood by the generator's logging setup
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Category, DocField, Direction, FieldDescriptor, GeneratorConfig, LogLevel, MessageKey,
        MessageRegistry, MessageType, TypeHierarchy, WrapgenError, WrapgenResult,
    };
}
