//! Exact-match coefficient extraction.

use log::warn;

use crate::catalog::CatalogDescriptor;
use crate::domain::{LimbDarkeningCoefficients, Passband, QuantizedParameters};
use crate::error::{LimbDarkeningError, LoadError};
use crate::io::table::{CatalogRow, CatalogTable};

/// What was read from the selected catalog row.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogMatch {
    pub line: usize,
    pub coefficients: LimbDarkeningCoefficients,
    /// The row's tabulated `xi` (km/s), which may differ from the requested value.
    pub turbvel: Option<f64>,
    /// The row's `Filt` code decoded back into a passband.
    pub passband: Option<Passband>,
}

/// Select the row matching every key column and read `a1..a4`.
///
/// When the table holds several matching rows the first one wins.
pub fn extract_coefficients(
    table: &CatalogTable,
    desc: &CatalogDescriptor,
    q: &QuantizedParameters,
) -> Result<CatalogMatch, LimbDarkeningError> {
    let key = desc.format_key(q).ok_or_else(|| {
        LimbDarkeningError::Validation(format!("incomplete lookup key for the {} catalog", desc.kind))
    })?;
    let row = find_row(table, &key)?;

    let turbvel = desc
        .turbvel_column
        .map(|name| read_f64(table, row, name))
        .transpose()?;

    let passband = match desc.passband_column() {
        Some(name) => {
            let code = &row.fields[column(table, name)?];
            let band = Passband::from_catalog_code(code).ok_or_else(|| LoadError::Malformed {
                line: row.line,
                message: format!("unknown passband code '{code}'"),
            })?;
            Some(band)
        }
        None => None,
    };

    Ok(CatalogMatch {
        line: row.line,
        coefficients: read_coefficients(table, row, desc.coefficient_columns)?,
        turbvel,
        passband,
    })
}

/// First row whose key columns all equal the pre-formatted key strings.
pub fn find_row<'t>(table: &'t CatalogTable, key: &[(&str, String)]) -> Result<&'t CatalogRow, LimbDarkeningError> {
    let key_idx = key
        .iter()
        .map(|(name, value)| Ok((column(table, name)?, value.as_str())))
        .collect::<Result<Vec<_>, LimbDarkeningError>>()?;

    let mut matches = table
        .rows
        .iter()
        .filter(|row| key_idx.iter().all(|&(idx, value)| row.fields[idx] == value));

    let Some(row) = matches.next() else {
        return Err(LimbDarkeningError::LookupMiss(describe_key(key)));
    };

    let extra = matches.count();
    if extra > 0 {
        warn!(
            "{} rows match {}; using the first (line {})",
            extra + 1,
            describe_key(key),
            row.line
        );
    }
    Ok(row)
}

/// Parse `a1..a4` from a row.
pub fn read_coefficients(
    table: &CatalogTable,
    row: &CatalogRow,
    coefficient_columns: [&str; 4],
) -> Result<LimbDarkeningCoefficients, LimbDarkeningError> {
    let mut out = [0.0; 4];
    for (slot, name) in out.iter_mut().zip(coefficient_columns) {
        *slot = read_f64(table, row, name)?;
    }
    Ok(out.into())
}

fn read_f64(table: &CatalogTable, row: &CatalogRow, name: &str) -> Result<f64, LimbDarkeningError> {
    let raw = &row.fields[column(table, name)?];
    let v = raw.parse::<f64>().map_err(|_| LoadError::Malformed {
        line: row.line,
        message: format!("column `{name}` is not a number: '{raw}'"),
    })?;
    Ok(v)
}

fn column(table: &CatalogTable, name: &str) -> Result<usize, LimbDarkeningError> {
    table.column_index(name).ok_or_else(|| {
        LimbDarkeningError::Load(LoadError::Schema {
            expected: vec![name.to_string()],
            found: table.columns.clone(),
        })
    })
}

fn describe_key(key: &[(&str, String)]) -> String {
    key.iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}
