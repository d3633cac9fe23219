//! Documentation field reader
//!
//! Walks a parsed [`Document`] and extracts, per message type, the fields
//! its table documents. Top-level headings name the protocol category;
//! sub-headings carrying the serverbound or clientbound label set the
//! direction, which persists until another such heading appears.

use crate::document::{Document, Row, Section, Table};
use std::collections::BTreeMap;
use wrapgen_core::{
    Category, DocField, Direction, GeneratorConfig, MessageKey, MessageRegistry, enum_text,
};

/// Column of the first field name when a table has no `Field Name` header
pub const DEFAULT_FIELD_NAME_COLUMN: usize = 3;

/// Documented fields per message type
pub type DocumentedFields = BTreeMap<MessageKey, Vec<DocField>>;

#[derive(Debug, Default)]
struct Cursor {
    category: Option<Category>,
    direction: Option<Direction>,
}

/// Extracts documented fields from a [`Document`]
#[derive(Debug, Clone)]
pub struct DocumentationFieldReader<'r> {
    registry: &'r MessageRegistry,
    packet_id_label: String,
    field_name_label: String,
    serverbound_label: String,
    clientbound_label: String,
}

impl<'r> DocumentationFieldReader<'r> {
    /// Reader using the stock labels
    pub fn new(registry: &'r MessageRegistry) -> Self {
        Self::from_config(&GeneratorConfig::default(), registry)
    }

    pub fn from_config(config: &GeneratorConfig, registry: &'r MessageRegistry) -> Self {
        Self {
            registry,
            packet_id_label: enum_text(&config.packet_id_label),
            field_name_label: enum_text(&config.field_name_label),
            serverbound_label: enum_text(&config.serverbound_label),
            clientbound_label: enum_text(&config.clientbound_label),
        }
    }

    /// Documented fields of every registered message found in `document`.
    ///
    /// Tables that cannot be attributed to a registered message are dropped
    /// with a warning; parsing itself never fails.
    pub fn parse(&self, document: &Document) -> DocumentedFields {
        let mut result = DocumentedFields::new();
        let mut cursor = Cursor::default();

        for section in &document.sections {
            cursor.category = Category::from_heading(&section.heading);
            if cursor.category.is_none() {
                tracing::debug!(heading = %section.heading, "not a protocol section");
            }

            self.walk(section, &mut cursor, &mut result);
        }

        tracing::debug!(messages = result.len(), "parsed documentation");
        result
    }

    fn walk(&self, section: &Section, cursor: &mut Cursor, result: &mut DocumentedFields) {
        for table in &section.tables {
            self.read_table(table, cursor, result);
        }

        for subsection in &section.subsections {
            let heading = enum_text(&subsection.heading);
            if heading == self.serverbound_label {
                cursor.direction = Some(Direction::Client);
            } else if heading == self.clientbound_label {
                cursor.direction = Some(Direction::Server);
            }

            self.walk(subsection, cursor, result);
        }
    }

    fn read_table(&self, table: &Table, cursor: &Cursor, result: &mut DocumentedFields) {
        let (Some(category), Some(direction)) = (cursor.category, cursor.direction) else {
            return;
        };

        let Some(id_column) = header_column(table, &self.packet_id_label) else {
            return;
        };

        let mut rows = table.data_rows();
        let Some(first) = rows.next() else {
            tracing::debug!("message table has no data rows");
            return;
        };

        let id_text = first.data_cell(id_column).unwrap_or_default();
        let Some(id) = parse_packet_id(id_text) else {
            tracing::warn!(id = id_text, %category, %direction, "unparsable message id, table discarded");
            return;
        };

        let key = MessageKey::new(category, direction, id);
        let Some(message_type) = self.registry.resolve(&key) else {
            tracing::warn!(message_key = %key, "unknown message type, table discarded");
            return;
        };

        let name_column =
            header_column(table, &self.field_name_label).unwrap_or(DEFAULT_FIELD_NAME_COLUMN);

        let mut fields = vec![doc_field(first, name_column)];
        fields.extend(rows.map(|row| doc_field(row, 0)));

        tracing::debug!(message_type = %message_type, fields = fields.len(), "read message table");
        if result.insert(key, fields).is_some() {
            tracing::warn!(message_type = %message_type, "message documented twice, keeping the last table");
        }
    }
}

/// Index among the table's header cells of the first one matching `label`
fn header_column(table: &Table, label: &str) -> Option<usize> {
    table
        .headers()
        .position(|cell| enum_text(&cell.text) == label)
}

/// Parse an id cell such as `0x2A` or `Play 0x2A` as hexadecimal
pub fn parse_packet_id(text: &str) -> Option<u32> {
    let stripped = text.replace("0x", "");
    let token = stripped.trim().rsplit(' ').next()?;

    u32::from_str_radix(token, 16).ok()
}

fn doc_field(row: &Row, start: usize) -> DocField {
    let cell = |offset: usize| row.data_cell(start + offset);

    DocField {
        display_name: cell(0)
            .map(collapse_whitespace)
            .filter(|name| !name.is_empty()),
        type_text: collapse_whitespace(cell(1).unwrap_or_default()),
        notes: collapse_whitespace(cell(2).unwrap_or_default()),
    }
}

/// Rendered cell text: trimmed, with every whitespace run (line breaks
/// included) reduced to a single space
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
