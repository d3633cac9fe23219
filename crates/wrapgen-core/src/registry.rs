//! Closed registry of known message types

use crate::error::RegistryError;
use crate::model::{Category, Direction, MessageKey, MessageType};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Maps `(category, direction, id)` to the host framework's message type
#[derive(Debug, Clone, Default)]
pub struct MessageRegistry {
    messages: BTreeMap<MessageKey, MessageType>,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    message: Vec<RegistryEntry>,
}

#[derive(Debug, Deserialize)]
struct RegistryEntry {
    category: Category,
    direction: Direction,
    id: u32,
    name: String,
}

impl MessageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a registry from TOML `[[message]]` entries.
    ///
    /// ```toml
    /// [[message]]
    /// category = "play"
    /// direction = "server"
    /// id = 0x00
    /// name = "SPAWN_ENTITY"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile =
            toml::from_str(content).map_err(|e| RegistryError::Malformed(e.to_string()))?;

        let mut registry = Self::new();
        for entry in file.message {
            let key = MessageKey::new(entry.category, entry.direction, entry.id);
            registry.register(MessageType::new(key, entry.name))?;
        }

        Ok(registry)
    }

    /// Add a message type; a key may only be registered once
    pub fn register(&mut self, message: MessageType) -> Result<(), RegistryError> {
        if let Some(existing) = self.messages.get(&message.key) {
            return Err(RegistryError::DuplicateKey(format!(
                "{} ({} and {})",
                message.key, existing.name, message.name
            )));
        }

        self.messages.insert(message.key, message);
        Ok(())
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_message(mut self, message: MessageType) -> Result<Self, RegistryError> {
        self.register(message)?;
        Ok(self)
    }

    pub fn resolve(&self, key: &MessageKey) -> Option<&MessageType> {
        self.messages.get(key)
    }

    /// All message types, ordered by key
    pub fn iter(&self) -> impl Iterator<Item = &MessageType> {
        self.messages.values()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
