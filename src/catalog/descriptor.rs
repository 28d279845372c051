//! Static description of each supported Claret catalog.
//!
//! Everything that differs between the two catalogs lives here, so the loader,
//! quantizer and extractor stay generic.

use crate::domain::{CatalogKind, QuantizationGrid, QuantizedParameters, ValidRange};

/// Where a key column's value comes from, and how it is rendered to match the
/// catalog's string-typed key columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Integer-like temperature (`5000`).
    Teff,
    /// Two decimals (`4.50`).
    Logg,
    /// One decimal (`-0.1`).
    Monh,
    /// Passband catalog code (`b`, `u'`).
    Passband,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyColumn {
    pub name: &'static str,
    pub source: KeySource,
}

/// Fixed configuration for one catalog file.
#[derive(Debug, Clone, Copy)]
pub struct CatalogDescriptor {
    pub kind: CatalogKind,
    pub file_name: &'static str,
    /// Number of non-blank preamble lines before the column-name row.
    pub header_offset: usize,
    /// Declared column names, in file order.
    pub columns: &'static [&'static str],
    pub keys: &'static [KeyColumn],
    pub coefficient_columns: [&'static str; 4],
    /// Tabulated microturbulent velocity, reported but never matched on.
    pub turbvel_column: Option<&'static str>,
    pub grid: QuantizationGrid,
    pub teff_range: ValidRange,
    pub logg_range: ValidRange,
    pub monh_range: Option<ValidRange>,
    pub turbvel_range: Option<ValidRange>,
}

/// Turbulent velocity assumed when the caller does not give one (km/s).
pub const DEFAULT_TURBVEL: f64 = 2.0;

pub const APT: CatalogDescriptor = CatalogDescriptor {
    kind: CatalogKind::Apt,
    file_name: "Claret2013_PHOENIX_Nonlinear.tsv",
    header_offset: 47,
    columns: &["logg", "Teff", "Z", "xi", "a1", "a2", "a3", "a4", "Filt", "Met"],
    keys: &[
        KeyColumn { name: "Teff", source: KeySource::Teff },
        KeyColumn { name: "logg", source: KeySource::Logg },
        KeyColumn { name: "Filt", source: KeySource::Passband },
    ],
    coefficient_columns: ["a1", "a2", "a3", "a4"],
    turbvel_column: Some("xi"),
    grid: QuantizationGrid::CLARET,
    teff_range: ValidRange::new(5000.0, 10000.0),
    logg_range: ValidRange::new(3.0, 5.5),
    monh_range: None,
    turbvel_range: None,
};

pub const MOST: CatalogDescriptor = CatalogDescriptor {
    kind: CatalogKind::Most,
    file_name: "Claret2014MOST_ATLAS.tsv",
    header_offset: 70,
    columns: &["logg", "Teff", "logZ", "xi", "a1", "a2", "a3", "a4", "Mod"],
    keys: &[
        KeyColumn { name: "Teff", source: KeySource::Teff },
        KeyColumn { name: "logg", source: KeySource::Logg },
        KeyColumn { name: "logZ", source: KeySource::Monh },
    ],
    coefficient_columns: ["a1", "a2", "a3", "a4"],
    turbvel_column: Some("xi"),
    grid: QuantizationGrid::CLARET,
    teff_range: ValidRange::new(3000.0, 50000.0),
    logg_range: ValidRange::new(0.0, 5.5),
    monh_range: Some(ValidRange::new(-5.0, 1.0)),
    turbvel_range: Some(ValidRange::new(0.0, 8.0)),
};

impl CatalogDescriptor {
    pub fn for_kind(kind: CatalogKind) -> &'static CatalogDescriptor {
        match kind {
            CatalogKind::Apt => &APT,
            CatalogKind::Most => &MOST,
        }
    }

    /// Whether rows are keyed by passband (`Filt` column).
    pub fn requires_passband(&self) -> bool {
        self.keys.iter().any(|k| k.source == KeySource::Passband)
    }

    /// Name of the key column holding the passband code, if any.
    pub fn passband_column(&self) -> Option<&'static str> {
        self.keys.iter().find(|k| k.source == KeySource::Passband).map(|k| k.name)
    }

    pub fn requires_monh(&self) -> bool {
        self.keys.iter().any(|k| k.source == KeySource::Monh)
    }

    /// Render the exact-match key for a set of quantized parameters.
    ///
    /// Returns `None` when a key column has no corresponding value.
    pub fn format_key(&self, q: &QuantizedParameters) -> Option<Vec<(&'static str, String)>> {
        self.keys
            .iter()
            .map(|k| {
                let value = match k.source {
                    KeySource::Teff => format!("{:.0}", q.teff),
                    KeySource::Logg => format!("{:.2}", q.logg),
                    KeySource::Monh => format!("{:.1}", q.monh?),
                    KeySource::Passband => q.passband?.catalog_code().to_string(),
                };
                Some((k.name, value))
            })
            .collect()
    }
}
