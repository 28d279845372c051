//! Input validation and rounding onto the catalog grid.
//!
//! The catalogs are tabulated on a regular grid, so a lookup only needs the
//! nearest grid point. Ties round to the even multiple (`5125 K -> 5000 K`).

use crate::catalog::descriptor::CatalogDescriptor;
use crate::domain::{QuantizationGrid, QuantizedParameters, StellarParameters, ValidRange};
use crate::error::LimbDarkeningError;

/// Round `value` to the nearest multiple of `step`.
pub fn quantize(value: f64, step: f64) -> f64 {
    let q = (value / step).round_ties_even() * step;
    // -0.0 would format as "-0.0" and never match the catalog's "0.0".
    if q == 0.0 { 0.0 } else { q }
}

/// Quantize every gridded parameter independently.
pub fn quantize_parameters(params: &StellarParameters, grid: &QuantizationGrid) -> QuantizedParameters {
    QuantizedParameters {
        teff: quantize(params.teff, grid.teff_step),
        logg: quantize(params.logg, grid.logg_step),
        monh: params.monh.map(|m| quantize(m, grid.monh_step)),
        turbvel: params.turbvel,
        passband: params.passband,
    }
}

/// Check raw parameters against the catalog's supported ranges.
///
/// Runs before quantization so out-of-range input never reaches the table.
pub fn validate_parameters(params: &StellarParameters, desc: &CatalogDescriptor) -> Result<(), LimbDarkeningError> {
    check_range("teff", "K", params.teff, &desc.teff_range)?;
    check_range("logg", "dex", params.logg, &desc.logg_range)?;

    match (desc.monh_range, params.monh) {
        (Some(range), Some(monh)) => check_range("monh", "dex", monh, &range)?,
        (Some(_), None) if desc.requires_monh() => {
            return Err(LimbDarkeningError::Validation(format!(
                "the {} catalog requires a metallicity (monh)",
                desc.kind
            )));
        }
        (None, Some(_)) => {
            return Err(LimbDarkeningError::Validation(format!(
                "the {} catalog is not tabulated in metallicity",
                desc.kind
            )));
        }
        _ => {}
    }

    match (desc.turbvel_range, params.turbvel) {
        (Some(range), Some(v)) => check_range("turbvel", "km/s", v, &range)?,
        (None, Some(_)) => {
            return Err(LimbDarkeningError::Validation(format!(
                "the {} catalog does not take a turbulent velocity",
                desc.kind
            )));
        }
        _ => {}
    }

    if params.passband.is_some() && !desc.requires_passband() {
        return Err(LimbDarkeningError::Validation(format!(
            "the {} catalog has a single passband; do not pass one",
            desc.kind
        )));
    }

    Ok(())
}

fn check_range(name: &str, unit: &str, value: f64, range: &ValidRange) -> Result<(), LimbDarkeningError> {
    if range.contains(value) {
        return Ok(());
    }
    Err(LimbDarkeningError::Validation(format!(
        "{name} must be within [{}, {}] {unit}, got {value}",
        range.min, range.max
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::descriptor::{APT, MOST};
    use crate::domain::Passband;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    #[test]
    fn teff_rounds_to_nearest_multiple() {
        assert_eq!(quantize(5084.0, 250.0), 5000.0);
        assert_eq!(quantize(5126.0, 250.0), 5250.0);
        assert_eq!(quantize(9874.0, 250.0), 9750.0);
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(quantize(5125.0, 250.0), 5000.0);
        assert_eq!(quantize(5375.0, 250.0), 5500.0);
        assert_eq!(quantize(4.25, 0.5), 4.0);
        assert_eq!(quantize(4.75, 0.5), 5.0);
    }

    #[test]
    fn monh_rounding_and_negative_zero() {
        assert_eq!(format!("{:.1}", quantize(-0.13, 0.1)), "-0.1");
        assert_eq!(format!("{:.1}", quantize(-0.04, 0.1)), "0.0");
        assert_eq!(format!("{:.1}", quantize(0.26, 0.1)), "0.3");
    }

    #[test]
    fn random_teff_lands_on_nearest_grid_point() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let teff: f64 = rng.gen_range(3000.0..50000.0);
            let q = quantize(teff, 250.0);
            assert_eq!(q % 250.0, 0.0, "{q} is not a multiple of 250");
            assert!((q - teff).abs() <= 125.0, "{teff} -> {q}");
        }
    }

    #[test]
    fn quantize_parameters_keeps_passband_and_turbvel() {
        let p = StellarParameters::new(6130.0, 4.3).with_passband(Passband::StromgrenY);
        let q = quantize_parameters(&p, &APT.grid);
        assert_eq!(q.teff, 6250.0);
        assert_eq!(q.logg, 4.5);
        assert_eq!(q.monh, None);
        assert_eq!(q.passband, Some(Passband::StromgrenY));
    }

    #[test]
    fn most_rejects_cold_star_and_high_gravity() {
        let cold = StellarParameters::new(2000.0, 4.5).with_monh(0.0).with_turbvel(2.0);
        let err = validate_parameters(&cold, &MOST).unwrap_err();
        assert!(matches!(err, LimbDarkeningError::Validation(_)));
        assert!(err.to_string().contains("teff"));

        let dense = StellarParameters::new(5000.0, 6.0).with_monh(0.0).with_turbvel(2.0);
        let err = validate_parameters(&dense, &MOST).unwrap_err();
        assert!(err.to_string().contains("logg"));
    }

    #[test]
    fn most_checks_monh_and_turbvel() {
        let ok = StellarParameters::new(5084.0, 4.3).with_monh(-0.13).with_turbvel(2.0);
        assert!(validate_parameters(&ok, &MOST).is_ok());

        let missing = StellarParameters::new(5084.0, 4.3);
        assert!(validate_parameters(&missing, &MOST).is_err());

        let metal_rich = StellarParameters::new(5084.0, 4.3).with_monh(1.5);
        assert!(validate_parameters(&metal_rich, &MOST).is_err());

        let turbulent = StellarParameters::new(5084.0, 4.3).with_monh(0.0).with_turbvel(9.0);
        assert!(validate_parameters(&turbulent, &MOST).is_err());
    }

    #[test]
    fn apt_ranges() {
        let ok = StellarParameters::new(5000.0, 3.0);
        assert!(validate_parameters(&ok, &APT).is_ok());
        assert!(validate_parameters(&StellarParameters::new(4999.0, 4.0), &APT).is_err());
        assert!(validate_parameters(&StellarParameters::new(6000.0, 2.5), &APT).is_err());
        assert!(validate_parameters(&StellarParameters::new(f64::NAN, 4.0), &APT).is_err());
        assert!(validate_parameters(&StellarParameters::new(6000.0, 4.0).with_monh(0.0), &APT).is_err());
    }
}
