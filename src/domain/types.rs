//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during a lookup
//! - printed as JSON
//! - exported alongside a sampled profile and reloaded later for plotting

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which published catalog to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Claret et al. (2013), PHOENIX nonlinear coefficients per passband.
    Apt,
    /// Claret, Dragomir & Matthews (2014), ATLAS coefficients for the MOST band.
    Most,
}

impl CatalogKind {
    pub fn display_name(self) -> &'static str {
        match self {
            CatalogKind::Apt => "Claret et al. (2013) PHOENIX nonlinear",
            CatalogKind::Most => "Claret, Dragomir & Matthews (2014) MOST/ATLAS",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Apt => write!(f, "apt"),
            CatalogKind::Most => write!(f, "most"),
        }
    }
}

/// Photometric passbands tabulated in the `Filt` column.
///
/// Names are case sensitive: `u` (Strömgren) and `U` (Johnson) are different bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Passband {
    #[value(name = "Kp")]
    #[serde(rename = "Kp")]
    Kp,
    #[value(name = "C")]
    #[serde(rename = "C")]
    CoRoT,
    #[value(name = "S1")]
    #[serde(rename = "S1")]
    S1,
    #[value(name = "S2")]
    #[serde(rename = "S2")]
    S2,
    #[value(name = "S3")]
    #[serde(rename = "S3")]
    S3,
    #[value(name = "S4")]
    #[serde(rename = "S4")]
    S4,
    #[value(name = "u")]
    #[serde(rename = "u")]
    StromgrenU,
    #[value(name = "v")]
    #[serde(rename = "v")]
    StromgrenV,
    #[value(name = "b")]
    #[serde(rename = "b")]
    StromgrenB,
    #[value(name = "y")]
    #[serde(rename = "y")]
    StromgrenY,
    #[value(name = "U")]
    #[serde(rename = "U")]
    JohnsonU,
    #[value(name = "B")]
    #[serde(rename = "B")]
    JohnsonB,
    #[value(name = "V")]
    #[serde(rename = "V")]
    JohnsonV,
    #[value(name = "R")]
    #[serde(rename = "R")]
    JohnsonR,
    #[value(name = "I")]
    #[serde(rename = "I")]
    JohnsonI,
    #[value(name = "J")]
    #[serde(rename = "J")]
    JohnsonJ,
    #[value(name = "H")]
    #[serde(rename = "H")]
    JohnsonH,
    #[value(name = "K")]
    #[serde(rename = "K")]
    JohnsonK,
    #[value(name = "u'")]
    #[serde(rename = "u'")]
    SloanU,
    #[value(name = "g'")]
    #[serde(rename = "g'")]
    SloanG,
    #[value(name = "r'")]
    #[serde(rename = "r'")]
    SloanR,
    #[value(name = "i'")]
    #[serde(rename = "i'")]
    SloanI,
    #[value(name = "z'")]
    #[serde(rename = "z'")]
    SloanZ,
    #[value(name = "J2")]
    #[serde(rename = "J2")]
    TwoMassJ,
    #[value(name = "H2")]
    #[serde(rename = "H2")]
    TwoMassH,
    #[value(name = "Ks")]
    #[serde(rename = "Ks")]
    TwoMassKs,
}

impl Passband {
    pub const ALL: [Passband; 26] = [
        Passband::Kp,
        Passband::CoRoT,
        Passband::S1,
        Passband::S2,
        Passband::S3,
        Passband::S4,
        Passband::StromgrenU,
        Passband::StromgrenV,
        Passband::StromgrenB,
        Passband::StromgrenY,
        Passband::JohnsonU,
        Passband::JohnsonB,
        Passband::JohnsonV,
        Passband::JohnsonR,
        Passband::JohnsonI,
        Passband::JohnsonJ,
        Passband::JohnsonH,
        Passband::JohnsonK,
        Passband::SloanU,
        Passband::SloanG,
        Passband::SloanR,
        Passband::SloanI,
        Passband::SloanZ,
        Passband::TwoMassJ,
        Passband::TwoMassH,
        Passband::TwoMassKs,
    ];

    /// The exact string stored in the catalog's `Filt` column.
    pub fn catalog_code(self) -> &'static str {
        match self {
            Passband::Kp => "Kp",
            Passband::CoRoT => "C",
            Passband::S1 => "S1",
            Passband::S2 => "S2",
            Passband::S3 => "S3",
            Passband::S4 => "S4",
            Passband::StromgrenU => "u",
            Passband::StromgrenV => "v",
            Passband::StromgrenB => "b",
            Passband::StromgrenY => "y",
            Passband::JohnsonU => "U",
            Passband::JohnsonB => "B",
            Passband::JohnsonV => "V",
            Passband::JohnsonR => "R",
            Passband::JohnsonI => "I",
            Passband::JohnsonJ => "J",
            Passband::JohnsonH => "H",
            Passband::JohnsonK => "K",
            Passband::SloanU => "u'",
            Passband::SloanG => "g'",
            Passband::SloanR => "r'",
            Passband::SloanI => "i'",
            Passband::SloanZ => "z'",
            Passband::TwoMassJ => "J2",
            Passband::TwoMassH => "H2",
            Passband::TwoMassKs => "Ks",
        }
    }

    pub fn from_catalog_code(code: &str) -> Option<Passband> {
        Passband::ALL.into_iter().find(|p| p.catalog_code() == code)
    }
}

impl fmt::Display for Passband {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.catalog_code())
    }
}

/// Raw stellar parameters for one lookup request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StellarParameters {
    /// Effective temperature (K).
    pub teff: f64,
    /// Log surface gravity (dex, cgs).
    pub logg: f64,
    /// Metallicity `[M/H]` (dex). Required by the MOST catalog.
    pub monh: Option<f64>,
    /// Microturbulent velocity (km/s).
    pub turbvel: Option<f64>,
    /// Passband for catalogs keyed by filter.
    ///
    /// A lookup uses it when `LookupConfig::passbands` is empty; otherwise the
    /// list must hold exactly this band.
    pub passband: Option<Passband>,
}

impl StellarParameters {
    pub fn new(teff: f64, logg: f64) -> Self {
        Self {
            teff,
            logg,
            monh: None,
            turbvel: None,
            passband: None,
        }
    }

    pub fn with_monh(mut self, monh: f64) -> Self {
        self.monh = Some(monh);
        self
    }

    pub fn with_turbvel(mut self, turbvel: f64) -> Self {
        self.turbvel = Some(turbvel);
        self
    }

    pub fn with_passband(mut self, passband: Passband) -> Self {
        self.passband = Some(passband);
        self
    }
}

/// Parameters after rounding onto the catalog grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantizedParameters {
    pub teff: f64,
    pub logg: f64,
    pub monh: Option<f64>,
    pub turbvel: Option<f64>,
    pub passband: Option<Passband>,
}

/// Fixed grid spacing of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantizationGrid {
    pub teff_step: f64,
    pub logg_step: f64,
    pub monh_step: f64,
}

impl QuantizationGrid {
    pub const CLARET: QuantizationGrid = QuantizationGrid {
        teff_step: 250.0,
        logg_step: 0.5,
        monh_step: 0.1,
    };
}

/// Closed interval used for input validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidRange {
    pub min: f64,
    pub max: f64,
}

impl ValidRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        v.is_finite() && v >= self.min && v <= self.max
    }
}

/// Nonlinear (four-term) limb-darkening coefficients `a1..a4`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimbDarkeningCoefficients {
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub a4: f64,
}

impl LimbDarkeningCoefficients {
    pub fn new(a1: f64, a2: f64, a3: f64, a4: f64) -> Self {
        Self { a1, a2, a3, a4 }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.a1, self.a2, self.a3, self.a4]
    }
}

impl From<[f64; 4]> for LimbDarkeningCoefficients {
    fn from(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

/// Coefficients looked up for one passband (or `None` for single-band catalogs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandCoefficients {
    pub passband: Option<Passband>,
    pub coefficients: LimbDarkeningCoefficients,
    /// Microturbulent velocity tabulated on the matched row (km/s).
    #[serde(default)]
    pub turbvel: Option<f64>,
}

/// Output format for lookup results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved configuration for a lookup run.
///
/// This is derived from CLI flags, the environment and defaults.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub catalog: CatalogKind,
    pub catalog_path: PathBuf,
    pub params: StellarParameters,
    /// Passbands to look up. Empty for catalogs without a `Filt` column.
    pub passbands: Vec<Passband>,
}

/// Sampled model profile, evaluated on an even grid of viewing angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileGrid {
    /// Viewing angle (radians), from disk centre to the limb.
    pub theta: Vec<f64>,
    pub mu: Vec<f64>,
    pub intensity: Vec<f64>,
}

/// How the per-band coefficients were combined into a law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawForm {
    SingleBand,
    BandAverage,
}

/// Portable JSON representation of an evaluated profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileFile {
    pub tool: String,
    pub generated: String,
    pub catalog: CatalogKind,
    pub parameters: StellarParameters,
    pub quantized: QuantizedParameters,
    pub coefficients: Vec<BandCoefficients>,
    pub law: LawForm,
    pub grid: ProfileGrid,
}
