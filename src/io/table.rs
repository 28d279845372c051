//! Catalog table loading.
//!
//! The Claret catalogs are whitespace-delimited text files with a fixed
//! layout:
//!
//! - a preamble of `header_offset` non-blank lines (citation, notes, ...)
//! - one line of column names
//! - a units row and a dashes row, both skipped
//! - data rows
//!
//! Fields are kept as strings; key columns are compared as strings and the
//! coefficients are parsed by the extractor.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::catalog::CatalogDescriptor;
use crate::error::LoadError;

/// Rows that follow the column-name line before data begins.
const SECONDARY_HEADER_ROWS: usize = 2;

/// One data row, with the 1-based line number it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub line: usize,
    pub fields: Vec<String>,
}

/// In-memory catalog: declared columns plus data rows in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTable {
    pub columns: Vec<String>,
    pub rows: Vec<CatalogRow>,
}

impl CatalogTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Open and parse a catalog file.
pub fn load_table(path: &Path, desc: &CatalogDescriptor) -> Result<CatalogTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loading {} catalog from {}", desc.kind, path.display());
    let table = parse_table(BufReader::new(file), desc)?;
    debug!("loaded {} rows", table.len());
    Ok(table)
}

/// Parse a catalog from any buffered reader.
pub fn parse_table<R: BufRead>(reader: R, desc: &CatalogDescriptor) -> Result<CatalogTable, LoadError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !matches!(line, Ok(l) if l.trim().is_empty()));

    let mut next_line = |what: &str| -> Result<(usize, String), LoadError> {
        match lines.next() {
            Some((n, Ok(l))) => Ok((n, l)),
            Some((n, Err(e))) => Err(LoadError::Malformed {
                line: n,
                message: format!("read error: {e}"),
            }),
            None => Err(LoadError::Truncated(format!("missing {what}"))),
        }
    };

    for i in 0..desc.header_offset {
        let what = format!("preamble line {} of {}", i + 1, desc.header_offset);
        next_line(what.as_str())?;
    }

    let (_, header) = next_line("column header")?;
    let columns: Vec<String> = header.split_whitespace().map(str::to_string).collect();
    if columns.iter().map(String::as_str).ne(desc.columns.iter().copied()) {
        return Err(LoadError::Schema {
            expected: desc.columns.iter().map(|c| c.to_string()).collect(),
            found: columns,
        });
    }

    for _ in 0..SECONDARY_HEADER_ROWS {
        next_line("units/separator row")?;
    }

    let mut rows = Vec::new();
    for (line, text) in lines {
        let text = text.map_err(|e| LoadError::Malformed {
            line,
            message: format!("read error: {e}"),
        })?;
        let fields: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if fields.len() != columns.len() {
            return Err(LoadError::Malformed {
                line,
                message: format!("expected {} fields, found {}", columns.len(), fields.len()),
            });
        }
        rows.push(CatalogRow { line, fields });
    }

    Ok(CatalogTable { columns, rows })
}
