//! Claret four-term nonlinear law.
//!
//! `I(mu) / I(1) = 1 - sum_k a_k (1 - mu^(k/2))`, `k = 1..4`, with
//! `mu = cos(theta)`.
//!
//! Callers keep theta in `[0, pi/2]`; past the limb `mu < 0` and `mu^0.5` is
//! NaN. No bounds checking is done here.

use std::f64::consts::FRAC_PI_2;

use crate::domain::{LawForm, LimbDarkeningCoefficients, ProfileGrid};

/// A limb-darkening profile closed over fixed coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbDarkeningModel {
    terms: [f64; 4],
    scale: f64,
    form: LawForm,
}

impl LimbDarkeningModel {
    /// Law for a single passband.
    pub fn single(coeffs: LimbDarkeningCoefficients) -> Self {
        Self {
            terms: coeffs.to_array(),
            scale: 1.0,
            form: LawForm::SingleBand,
        }
    }

    /// Equal-weight mean of the single-band laws of several passbands.
    ///
    /// For two bands this is `1 - 0.5 * sum_k (a_k,1 + a_k,2)(1 - mu^(k/2))`.
    /// Returns `None` for an empty slice.
    pub fn band_average(bands: &[LimbDarkeningCoefficients]) -> Option<Self> {
        if bands.is_empty() {
            return None;
        }
        let mut terms = [0.0; 4];
        for band in bands {
            for (t, a) in terms.iter_mut().zip(band.to_array()) {
                *t += a;
            }
        }
        Some(Self {
            terms,
            scale: 1.0 / bands.len() as f64,
            form: LawForm::BandAverage,
        })
    }

    pub fn form(&self) -> LawForm {
        self.form
    }

    /// Effective single-law coefficients (band sums times the weight).
    pub fn effective_coefficients(&self) -> LimbDarkeningCoefficients {
        self.terms.map(|t| t * self.scale).into()
    }

    /// Relative intensity at viewing angle `theta` (radians).
    pub fn evaluate(&self, theta: f64) -> f64 {
        self.intensity_at_mu(theta.cos())
    }

    /// Relative intensity at `mu = cos(theta)`.
    pub fn intensity_at_mu(&self, mu: f64) -> f64 {
        let [a1, a2, a3, a4] = self.terms;
        let sqrt_mu = mu.sqrt();
        let darkening = a1 * (1.0 - sqrt_mu)
            + a2 * (1.0 - mu)
            + a3 * (1.0 - mu * sqrt_mu)
            + a4 * (1.0 - mu * mu);
        1.0 - self.scale * darkening
    }

    /// The model as a plain closure.
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
        let model = *self;
        move |theta| model.evaluate(theta)
    }

    /// Evaluate on `n` evenly spaced angles from disk centre to the limb.
    pub fn sample_profile(&self, n: usize) -> ProfileGrid {
        let n = n.max(2);
        let mut grid = ProfileGrid {
            theta: Vec::with_capacity(n),
            mu: Vec::with_capacity(n),
            intensity: Vec::with_capacity(n),
        };
        for i in 0..n {
            let theta = FRAC_PI_2 * i as f64 / (n as f64 - 1.0);
            // cos(pi/2) evaluates to ~6e-17; the last sample is the limb itself.
            let mu = if i == n - 1 { 0.0 } else { theta.cos() };
            grid.theta.push(theta);
            grid.mu.push(mu);
            grid.intensity.push(self.intensity_at_mu(mu));
        }
        grid
    }
}
