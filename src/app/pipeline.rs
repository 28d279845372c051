//! Shared lookup pipeline used by every subcommand.
//!
//! validate -> quantize -> load -> extract (per band) -> model
//!
//! Nothing here runs at start-up; each call is one independent request.

use log::debug;

use crate::catalog::{self, CatalogDescriptor};
use crate::domain::{BandCoefficients, LookupConfig, Passband, QuantizedParameters, StellarParameters};
use crate::error::LimbDarkeningError;
use crate::io::table::load_table;
use crate::models::LimbDarkeningModel;

/// All computed outputs of a single lookup.
#[derive(Debug, Clone)]
pub struct LookupOutput {
    pub descriptor: &'static CatalogDescriptor,
    pub params: StellarParameters,
    pub quantized: QuantizedParameters,
    pub bands: Vec<BandCoefficients>,
    pub model: LimbDarkeningModel,
}

/// Execute the full pipeline for a resolved configuration.
///
/// Passband catalogs look up each requested band; more than one band yields
/// the band-averaged law.
pub fn run_lookup(config: &LookupConfig) -> Result<LookupOutput, LimbDarkeningError> {
    let desc = CatalogDescriptor::for_kind(config.catalog);
    let passbands = requested_passbands(config)?;

    if desc.requires_passband() && passbands.is_empty() {
        return Err(LimbDarkeningError::Validation(format!(
            "the {} catalog needs at least one passband",
            desc.kind
        )));
    }
    if !desc.requires_passband() && !passbands.is_empty() {
        return Err(LimbDarkeningError::Validation(format!(
            "the {} catalog has a single passband; do not pass one",
            desc.kind
        )));
    }

    // 1) Validate raw input before touching the table.
    catalog::validate_parameters(&config.params, desc)?;

    // 2) Round onto the grid.
    let quantized = catalog::quantize_parameters(&config.params, &desc.grid);
    debug!(
        "quantized teff={} logg={} monh={:?}",
        quantized.teff, quantized.logg, quantized.monh
    );

    // 3) Load the catalog fresh for this request.
    let table = load_table(&config.catalog_path, desc)?;

    // 4) Extract per band.
    let requested: Vec<_> = if passbands.is_empty() {
        vec![None]
    } else {
        passbands.into_iter().map(Some).collect()
    };

    let mut bands = Vec::with_capacity(requested.len());
    for passband in requested {
        let q = QuantizedParameters {
            passband,
            ..quantized.clone()
        };
        let matched = catalog::extract_coefficients(&table, desc, &q)?;
        debug!("{:?} matched catalog line {}", passband, matched.line);
        bands.push(BandCoefficients {
            passband: matched.passband,
            coefficients: matched.coefficients,
            turbvel: matched.turbvel,
        });
    }

    // 5) Build the law.
    let model = if bands.len() == 1 {
        LimbDarkeningModel::single(bands[0].coefficients)
    } else {
        let coeffs: Vec<_> = bands.iter().map(|b| b.coefficients).collect();
        LimbDarkeningModel::band_average(&coeffs)
            .ok_or_else(|| LimbDarkeningError::Validation("no passbands to combine".to_string()))?
    };

    Ok(LookupOutput {
        descriptor: desc,
        params: config.params.clone(),
        quantized,
        bands,
        model,
    })
}

/// Merge the passband carried on the parameters with the requested list.
///
/// A passband on `params` alone is looked up on its own. Alongside a list it
/// must be the only entry.
fn requested_passbands(config: &LookupConfig) -> Result<Vec<Passband>, LimbDarkeningError> {
    match config.params.passband {
        None => Ok(config.passbands.clone()),
        Some(p) if config.passbands.is_empty() || config.passbands == [p] => Ok(vec![p]),
        Some(p) => Err(LimbDarkeningError::Validation(format!(
            "passband {p} on the stellar parameters conflicts with the requested passbands [{}]",
            config
                .passbands
                .iter()
                .map(|b| b.catalog_code())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}
