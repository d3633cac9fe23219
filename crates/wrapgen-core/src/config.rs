//! Generator configuration

use crate::LogLevel;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration shared by the document reader, normalizer and emitter.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration reproducing the stock PacketWrapper output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Java package of the generated classes
    pub package: String,

    /// Class every generated wrapper extends
    pub base_class: String,

    /// Prefix of generated class names (`Wrapper` + `PlayServerSpawnEntity`)
    pub class_prefix: String,

    /// License block emitted verbatim at the top of every file
    pub license_header: Vec<String>,

    /// Imports emitted after the package declaration
    pub imports: Vec<String>,

    /// Upper-snake header text marking a message table's id column
    pub packet_id_label: String,

    /// Upper-snake header text of the first field column
    pub field_name_label: String,

    /// Upper-snake sub-heading text for client-to-server messages
    pub serverbound_label: String,

    /// Upper-snake sub-heading text for server-to-client messages
    pub clientbound_label: String,

    /// Tokens never chosen as an array element name
    pub array_stopwords: Vec<String>,

    /// Ordered literal replacements applied to accessor names
    pub name_synonyms: Vec<(String, String)>,

    /// Ordered literal replacements applied to lower-cased type text
    pub type_substitutions: Vec<(String, String)>,

    /// Log level name (trace, debug, info, warn, error, off)
    pub log_level: String,

    /// Optional modifier table replacing the built-in catalog
    pub modifier_table: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: "com.comphenix.packetwrapper".to_string(),
            base_class: "AbstractPacket".to_string(),
            class_prefix: "Wrapper".to_string(),
            license_header: default_license_header(),
            imports: vec![
                "com.comphenix.protocol.PacketType".to_string(),
                "com.comphenix.protocol.events.PacketContainer".to_string(),
            ],
            packet_id_label: "PACKET_ID".to_string(),
            field_name_label: "FIELD_NAME".to_string(),
            serverbound_label: "SERVERBOUND".to_string(),
            clientbound_label: "CLIENTBOUND".to_string(),
            array_stopwords: vec!["array".to_string(), "of".to_string()],
            name_synonyms: pairs(&[
                ("Eid", "EntityID"),
                ("EntityId", "EntityID"),
                ("JsonData", "Message"),
            ]),
            type_substitutions: default_type_substitutions(),
            log_level: "info".to_string(),
            modifier_table: None,
        }
    }
}

/// Substitutions turning documentation jargon into output type tokens.
///
/// Order matters: `varint enum` must run before `varint`, and `boolean` is
/// folded to `bool` before `bool` expands so the result is never doubled.
pub fn default_type_substitutions() -> Vec<(String, String)> {
    pairs(&[
        ("string", "String"),
        ("slot", "ItemStack"),
        ("inputitem1", "ItemStack"),
        ("inputitem2", "ItemStack"),
        ("metadata", "WrappedDataWatcher"),
        ("identifier", "MinecraftKey"),
        ("unsigned", ""),
        ("optional", ""),
        ("varint enum", "enum"),
        ("varlong", "long"),
        ("varint", "int"),
        ("boolean", "bool"),
        ("bool", "boolean"),
        ("uuid", "UUID"),
    ])
}

fn default_license_header() -> Vec<String> {
    [
        "/*",
        " * This file is part of PacketWrapper.",
        " * Copyright (C) 2012-2015 Kristian S. Strangeland",
        " * Copyright (C) 2015 dmulloy2",
        " *",
        " * PacketWrapper is free software: you can redistribute it and/or modify",
        " * it under the terms of the GNU Lesser General Public License as published by",
        " * the Free Software Foundation, either version 3 of the License, or",
        " * (at your option) any later version.",
        " *",
        " * PacketWrapper is distributed in the hope that it will be useful,",
        " * but WITHOUT ANY WARRANTY; without even the implied warranty of",
        " * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the",
        " * GNU General Public License for more details.",
        " *",
        " * You should have received a copy of the GNU Lesser General Public License",
        " * along with PacketWrapper.  If not, see <https://www.gnu.org/licenses/>.",
        " */",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.package.is_empty() {
            return Err(ConfigError::Invalid("package cannot be empty".into()));
        }

        if let Some(segment) = self.package.split('.').find(|s| !is_java_identifier(s)) {
            return Err(ConfigError::Invalid(format!(
                "package segment '{segment}' is not a valid identifier"
            )));
        }

        if !is_java_identifier(&self.class_prefix) {
            return Err(ConfigError::Invalid(format!(
                "class prefix '{}' is not a valid identifier",
                self.class_prefix
            )));
        }

        if !is_java_identifier(&self.base_class) {
            return Err(ConfigError::Invalid(format!(
                "base class '{}' is not a valid identifier",
                self.base_class
            )));
        }

        for (name, label) in [
            ("packet_id_label", &self.packet_id_label),
            ("serverbound_label", &self.serverbound_label),
            ("clientbound_label", &self.clientbound_label),
        ] {
            if label.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} cannot be empty")));
            }
        }

        if self.serverbound_label == self.clientbound_label {
            return Err(ConfigError::Invalid(
                "serverbound and clientbound labels must differ".into(),
            ));
        }

        if self.type_substitutions.iter().any(|(from, _)| from.is_empty()) {
            return Err(ConfigError::Invalid(
                "type substitution patterns cannot be empty".into(),
            ));
        }

        if self.name_synonyms.iter().any(|(from, _)| from.is_empty()) {
            return Err(ConfigError::Invalid(
                "name synonym patterns cannot be empty".into(),
            ));
        }

        self.log_level()?;

        Ok(())
    }

    /// Parsed log level
    pub fn log_level(&self) -> Result<LogLevel, ConfigError> {
        LogLevel::parse(&self.log_level)
            .ok_or_else(|| ConfigError::Invalid(format!("unknown log level '{}'", self.log_level)))
    }
}

fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
