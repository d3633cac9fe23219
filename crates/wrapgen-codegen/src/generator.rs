//! Batch wrapper generation
//!
//! [`WrapperGenerator`] owns the read-only state every message needs (the
//! modifier catalog, type hierarchy, message registry, normalizer and
//! configuration) and runs scan + emit per message type. Message types are
//! independent, so [`WrapperGenerator::generate_all`] fans out with rayon.

use crate::catalog::ModifierCatalog;
use crate::document::Document;
use crate::emitter::CodeEmitter;
use crate::normalize::TypeNormalizer;
use crate::reader::{DocumentationFieldReader, DocumentedFields};
use crate::scanner::{FieldScanner, MethodBody, ScanResult};
use anyhow::Context;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use wrapgen_core::{
    DocField, GeneratorConfig, MessageKey, MessageRegistry, MessageType, ScanError,
    TypeHierarchy, WrapgenError, WrapgenResult,
};

/// One generated wrapper class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWrapper {
    pub message_type: MessageType,
    pub class_name: String,
    pub source: String,
}

impl GeneratedWrapper {
    /// File name of the class, e.g. `WrapperPlayServerSpawnEntity.java`
    pub fn file_name(&self) -> String {
        format!("{}.java", self.class_name)
    }
}

/// Per-message outcome of a batch run
pub type GenerationResults = BTreeMap<MessageKey, WrapgenResult<GeneratedWrapper>>;

pub struct WrapperGenerator {
    catalog: ModifierCatalog,
    hierarchy: TypeHierarchy,
    registry: MessageRegistry,
    normalizer: TypeNormalizer,
    config: GeneratorConfig,
}

impl WrapperGenerator {
    pub fn new(
        config: GeneratorConfig,
        catalog: ModifierCatalog,
        hierarchy: TypeHierarchy,
        registry: MessageRegistry,
    ) -> Self {
        Self {
            normalizer: TypeNormalizer::from_config(&config),
            catalog,
            hierarchy,
            registry,
            config,
        }
    }

    /// Validate `config` and load the modifier table it names, falling back
    /// to the built-in table
    pub fn from_config(
        config: GeneratorConfig,
        hierarchy: TypeHierarchy,
        registry: MessageRegistry,
    ) -> WrapgenResult<Self> {
        config.validate()?;

        let catalog = match &config.modifier_table {
            Some(path) => ModifierCatalog::from_file(path)?,
            None => ModifierCatalog::builtin()?,
        };

        tracing::debug!(
            modifiers = catalog.len(),
            types = hierarchy.len(),
            messages = registry.len(),
            "generator ready"
        );
        Ok(Self::new(config, catalog, hierarchy, registry))
    }

    /// Load a generator from files: optional TOML configuration, JSON type
    /// hierarchy and TOML message registry
    pub fn load(
        config_path: Option<&Path>,
        hierarchy_path: &Path,
        registry_path: &Path,
    ) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => GeneratorConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        let hierarchy_json = std::fs::read_to_string(hierarchy_path)
            .with_context(|| format!("Failed to read {}", hierarchy_path.display()))?;
        let hierarchy = TypeHierarchy::from_json(&hierarchy_json)
            .with_context(|| format!("Failed to parse type hierarchy: {}", hierarchy_path.display()))?;

        let registry_toml = std::fs::read_to_string(registry_path)
            .with_context(|| format!("Failed to read {}", registry_path.display()))?;
        let registry = MessageRegistry::from_toml_str(&registry_toml)
            .with_context(|| format!("Failed to parse message registry: {}", registry_path.display()))?;

        Self::from_config(config, hierarchy, registry).context("Invalid generator configuration")
    }

    /// Load a parsed documentation tree from JSON
    pub fn load_document(path: &Path) -> anyhow::Result<Document> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Document::from_json(&json)
            .with_context(|| format!("Failed to parse document: {}", path.display()))
    }

    pub fn catalog(&self) -> &ModifierCatalog {
        &self.catalog
    }

    pub fn hierarchy(&self) -> &TypeHierarchy {
        &self.hierarchy
    }

    pub fn registry(&self) -> &MessageRegistry {
        &self.registry
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn emitter(&self) -> CodeEmitter<'_> {
        CodeEmitter::new(&self.catalog, &self.hierarchy, &self.normalizer, &self.config)
    }

    pub fn reader(&self) -> DocumentationFieldReader<'_> {
        DocumentationFieldReader::from_config(&self.config, &self.registry)
    }

    /// Documented fields of every registered message in `document`
    pub fn parse_document(&self, document: &Document) -> DocumentedFields {
        self.reader().parse(document)
    }

    /// Wire and memory order of a serialization method
    pub fn scan(&self, method: &MethodBody) -> Result<ScanResult, ScanError> {
        FieldScanner::new(&self.hierarchy).scan_method(method)
    }

    /// Scan `method` and emit the wrapper for `message_type`
    pub fn generate(
        &self,
        message_type: &MessageType,
        method: &MethodBody,
        docs: &[DocField],
    ) -> WrapgenResult<GeneratedWrapper> {
        let scan = self.scan(method)?;
        let emitter = self.emitter();

        Ok(GeneratedWrapper {
            message_type: message_type.clone(),
            class_name: emitter.class_name(message_type),
            source: emitter.emit(message_type, &scan, docs),
        })
    }

    /// Generate every registered message type in parallel.
    ///
    /// A message type without a serialization method or without
    /// documentation gets a [`WrapgenError::MissingInput`] entry.
    pub fn generate_all(
        &self,
        methods: &BTreeMap<MessageKey, MethodBody>,
        documented: &DocumentedFields,
    ) -> GenerationResults {
        let message_types: Vec<&MessageType> = self.registry.iter().collect();

        let results: GenerationResults = message_types
            .par_iter()
            .map(|message_type| {
                let key = message_type.key;
                let result = match (methods.get(&key), documented.get(&key)) {
                    (Some(method), Some(docs)) => self.generate(message_type, method, docs),
                    (None, _) => Err(missing("serialization method", message_type)),
                    (_, None) => Err(missing("documentation", message_type)),
                };
                (key, result)
            })
            .collect();

        let failed = results.values().filter(|r| r.is_err()).count();
        tracing::info!(
            generated = results.len() - failed,
            failed,
            "generation finished"
        );
        results
    }
}

fn missing(kind: &'static str, message_type: &MessageType) -> WrapgenError {
    WrapgenError::MissingInput {
        kind,
        message_type: message_type.to_string(),
    }
}

#[cfg(test)]
#[path = "generator/generator_tests.rs"]
mod generator_tests;
