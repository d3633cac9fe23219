//! Error types for the wrapper generator

use thiserror::Error;

/// Result type alias for generator operations
pub type WrapgenResult<T> = Result<T, WrapgenError>;

/// Fatal failures while recovering field order from an instruction stream
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A field read names a field that no type in the hierarchy declares
    #[error("field '{field}' not found in '{type_name}' or any superclass")]
    UnresolvedFieldName { type_name: String, field: String },

    /// The declaring type of the scanned method is unknown to the hierarchy
    #[error("unknown declaring type: {0}")]
    UnknownType(String),
}

/// Failures while building a modifier catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The modifier table could not be parsed
    #[error("malformed modifier table: {0}")]
    Malformed(String),

    /// Two entries share the same runtime type
    #[error("duplicate modifier for runtime type: {0}")]
    DuplicateEntry(String),

    /// An entry is missing a required value
    #[error("modifier for '{runtime_type}' has an empty {field}")]
    EmptyValue {
        runtime_type: String,
        field: &'static str,
    },
}

/// Failures while loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    /// The configuration text could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration parsed but holds invalid values
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Failures while building a message registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry table could not be parsed
    #[error("malformed registry: {0}")]
    Malformed(String),

    /// Two message types claim the same key
    #[error("duplicate message key: {0}")]
    DuplicateKey(String),
}

/// Failure while formatting a single accessor
#[derive(Error, Debug)]
pub enum FieldError {
    /// The scanned field does not appear in the declaring type's memory order
    #[error("field '{0}' is missing from the memory layout")]
    NotInMemoryOrder(String),

    /// The documented name produced no usable identifier
    #[error("display name '{0}' yields an empty accessor name")]
    EmptyAccessorName(String),

    /// The documented type normalized to nothing
    #[error("field '{0}' has no declared type")]
    EmptyDeclaredType(String),

    /// Writing into the output buffer failed
    #[error("formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum WrapgenError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Field(#[from] FieldError),

    /// A message type had no scan or documentation input
    #[error("missing {kind} input for {message_type}")]
    MissingInput {
        kind: &'static str,
        message_type: String,
    },

    /// Serialization/deserialization error on an input document
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl WrapgenError {
    /// Returns a stable numeric code for the error category
    pub fn error_code(&self) -> u32 {
        match self {
            WrapgenError::Scan(_) => 1,
            WrapgenError::Catalog(_) => 2,
            WrapgenError::Config(_) => 3,
            WrapgenError::Registry(_) => 4,
            WrapgenError::Field(_) => 5,
            WrapgenError::MissingInput { .. } => 6,
            WrapgenError::Serialization(_) => 7,
        }
    }

    /// Whether the error aborts a run rather than degrading a single field or table
    pub fn is_fatal(&self) -> bool {
        !matches!(self, WrapgenError::Field(_) | WrapgenError::MissingInput { .. })
    }
}

impl From<serde_json::Error> for WrapgenError {
    fn from(err: serde_json::Error) -> Self {
        WrapgenError::Serialization(err.to_string())
    }
}


#[cfg(test)]
#[path = "error/error_parameterized_tests.rs"]
mod error_parameterized_tests;
