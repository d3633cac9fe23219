//! Message identity and the two field descriptions being reconciled

use serde::{Deserialize, Serialize};
use std::fmt;

/// Protocol phase a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Handshaking,
    Status,
    Login,
    Configuration,
    Play,
}

impl Category {
    /// Match a section heading such as `Play` or `Handshaking`.
    ///
    /// Comparison happens on the upper-snake form of the trimmed heading, so
    /// decorated headings like `Play (v1)` do not match.
    pub fn from_heading(text: &str) -> Option<Self> {
        match enum_text(text).as_str() {
            "HANDSHAKING" => Some(Category::Handshaking),
            "STATUS" => Some(Category::Status),
            "LOGIN" => Some(Category::Login),
            "CONFIGURATION" => Some(Category::Configuration),
            "PLAY" => Some(Category::Play),
            _ => None,
        }
    }

    /// Name used in generated type references and class names
    pub fn java_name(&self) -> &'static str {
        match self {
            Category::Handshaking => "Handshake",
            Category::Status => "Status",
            Category::Login => "Login",
            Category::Configuration => "Configuration",
            Category::Play => "Play",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.java_name())
    }
}

/// Which side sends the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Sent by the client (documented as serverbound)
    Client,
    /// Sent by the server (documented as clientbound)
    Server,
}

impl Direction {
    pub fn java_name(&self) -> &'static str {
        match self {
            Direction::Client => "Client",
            Direction::Server => "Server",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.java_name())
    }
}

/// Identity of one message type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageKey {
    pub category: Category,
    pub direction: Direction,
    pub id: u32,
}

impl MessageKey {
    pub fn new(category: Category, direction: Direction, id: u32) -> Self {
        Self {
            category,
            direction,
            id,
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/0x{:02X}", self.category, self.direction, self.id)
    }
}

/// A registered message type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageType {
    pub key: MessageKey,
    /// Upper-snake registry identifier, e.g. `SPAWN_ENTITY`
    pub name: String,
}

impl MessageType {
    pub fn new(key: MessageKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
        }
    }

    /// Qualified reference to the host framework's type constant.
    pub fn reference(&self) -> String {
        format!(
            "PacketType.{}.{}.{}",
            self.key.category.java_name(),
            self.key.direction.java_name(),
            self.name
        )
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reference())
    }
}

/// A field recovered from the serialization routine, in wire order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Type that declares the field (may be a superclass of the scanned type)
    pub declaring_type: String,
    /// Runtime type of the field, used for modifier lookup
    pub runtime_type: String,
    pub name: String,
    /// Position in the scanned type's memory (declaration) order
    pub ordinal: usize,
}

/// A field as described by the external documentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocField {
    /// `None` when the documentation row has no name cell
    pub display_name: Option<String>,
    pub type_text: String,
    pub notes: String,
}

impl DocField {
    pub fn new(
        display_name: impl Into<String>,
        type_text: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            display_name: Some(display_name.into()),
            type_text: type_text.into(),
            notes: notes.into(),
        }
    }

    /// Best label for diagnostics and stubs
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or("<unnamed>")
    }
}

/// Upper-snake form of heading or header text: `Packet ID` -> `PACKET_ID`
pub fn enum_text(text: &str) -> String {
    text.trim().to_uppercase().replace(' ', "_")
}
