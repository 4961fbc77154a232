// table.rs - Header, row and table data structures

use std::collections::HashSet;
use std::fmt;

/// Ordered column names of a CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Same set of column names, ignoring order
    pub fn same_columns(&self, other: &Header) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mine: HashSet<&str> = self.columns.iter().map(String::as_str).collect();
        mine.len() == self.len() && other.columns.iter().all(|c| mine.contains(c.as_str()))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns.join(","))
    }
}

/// A single data row: column name → cell value, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    /// Pair each header column with the value at the same position
    pub fn from_record<'a, I>(header: &Header, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let cells = header
            .columns()
            .iter()
            .cloned()
            .zip(values.into_iter().map(str::to_string))
            .collect();
        Self { cells }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, value)| value.as_str())
    }

    /// Header built from this row's keys
    pub fn header(&self) -> Header {
        Header::new(self.keys())
    }

    /// Values laid out in `header` order; `None` if a column is missing
    pub fn values_in(&self, header: &Header) -> Option<Vec<&str>> {
        header.columns().iter().map(|c| self.get(c)).collect()
    }
}

/// A fully materialised CSV file
#[derive(Debug, Clone)]
pub struct Table {
    pub header: Header,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header governing serialisation: the first row's keys, falling back
    /// to the declared header when there are no rows
    pub fn field_order(&self) -> Header {
        self.rows
            .first()
            .map(Row::header)
            .unwrap_or_else(|| self.header.clone())
    }
}
