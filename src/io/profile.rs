//! Read/write profile JSON files.
//!
//! Profile JSON is the "portable" representation of a lookup:
//! - catalog, raw and quantized parameters
//! - per-band coefficients and the law form
//! - a precomputed intensity grid for quick plotting
//!
//! The schema is defined by `domain::ProfileFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;
use log::info;

use crate::app::pipeline::LookupOutput;
use crate::domain::ProfileFile;
use crate::error::AppError;

/// Build the portable profile document for a finished lookup.
pub fn build_profile(output: &LookupOutput, samples: usize) -> ProfileFile {
    ProfileFile {
        tool: "ldc".to_string(),
        generated: Utc::now().to_rfc3339(),
        catalog: output.descriptor.kind,
        parameters: output.params.clone(),
        quantized: output.quantized.clone(),
        coefficients: output.bands.clone(),
        law: output.model.form(),
        grid: output.model.sample_profile(samples),
    }
}

/// Write a profile JSON file.
pub fn write_profile_json(path: &Path, profile: &ProfileFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(5, format!("Failed to create profile JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, profile)
        .map_err(|e| AppError::new(5, format!("Failed to write profile JSON: {e}")))?;

    info!("wrote profile ({} samples) to {}", profile.grid.theta.len(), path.display());
    Ok(())
}

/// Read a profile JSON file.
pub fn read_profile_json(path: &Path) -> Result<ProfileFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(5, format!("Failed to open profile JSON '{}': {e}", path.display())))?;
    let profile: ProfileFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(5, format!("Invalid profile JSON: {e}")))?;
    if profile.grid.theta.len() != profile.grid.intensity.len() || profile.grid.mu.len() != profile.grid.theta.len() {
        return Err(AppError::new(5, "Invalid profile JSON: grid arrays differ in length"));
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MOST;
    use crate::domain::{BandCoefficients, LawForm, LimbDarkeningCoefficients, StellarParameters};
    use crate::catalog::quantize_parameters;
    use crate::models::LimbDarkeningModel;

    fn output() -> LookupOutput {
        let params = StellarParameters::new(5084.0, 4.3).with_monh(-0.13).with_turbvel(2.0);
        let quantized = quantize_parameters(&params, &MOST.grid);
        let coefficients = LimbDarkeningCoefficients::new(0.5, -0.1, 0.6, -0.2);
        LookupOutput {
            descriptor: &MOST,
            params,
            quantized,
            bands: vec![BandCoefficients { passband: None, coefficients, turbvel: Some(2.0) }],
            model: LimbDarkeningModel::single(coefficients),
        }
    }

    #[test]
    fn written_profile_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let profile = build_profile(&output(), 5);
        write_profile_json(&path, &profile).unwrap();

        let back = read_profile_json(&path).unwrap();
        assert_eq!(back.tool, "ldc");
        assert_eq!(back.law, LawForm::SingleBand);
        assert_eq!(back.quantized.teff, 5000.0);
        assert_eq!(back.grid.theta.len(), 5);
        for (a, b) in back.grid.intensity.iter().zip(&profile.grid.intensity) {
            approx::assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn ragged_grid_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        let mut profile = build_profile(&output(), 5);
        profile.grid.intensity.pop();
        write_profile_json(&path, &profile).unwrap();
        let err = read_profile_json(&path).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }
}
