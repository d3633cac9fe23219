//! Parsed form of the external protocol documentation
//!
//! Fetching and HTML parsing happen elsewhere; this is the tree they hand
//! over. Sections nest, and each section may carry tables of rows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub subsections: Vec<Section>,
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            ..Default::default()
        }
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn with_subsection(mut self, section: Section) -> Self {
        self.subsections.push(section);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Header cells across the whole table, in document order
    pub fn headers(&self) -> impl Iterator<Item = &Cell> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.header)
    }

    /// Rows carrying at least one data cell
    pub fn data_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows
            .iter()
            .filter(|row| row.cells.iter().any(|cell| !cell.header))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Row of header cells
    pub fn header<S: AsRef<str>>(texts: &[S]) -> Self {
        Self::new(texts.iter().map(|t| Cell::header(t.as_ref())).collect())
    }

    /// Row of data cells
    pub fn data<S: AsRef<str>>(texts: &[S]) -> Self {
        Self::new(texts.iter().map(|t| Cell::data(t.as_ref())).collect())
    }

    /// Text of the data cell at `index`, counting data cells only
    pub fn data_cell(&self, index: usize) -> Option<&str> {
        self.cells
            .iter()
            .filter(|cell| !cell.header)
            .nth(index)
            .map(|cell| cell.text.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    #[serde(default)]
    pub header: bool,
}

impl Cell {
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            header: true,
        }
    }

    pub fn data(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            header: false,
        }
    }
}
