//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the catalog/model code stays clean and testable
//! - output changes are localized

use serde::Serialize;

use crate::app::pipeline::LookupOutput;
use crate::domain::{BandCoefficients, LawForm, LimbDarkeningCoefficients, QuantizedParameters, StellarParameters};
use crate::error::AppError;

/// Coefficient array in the form `[a1, a2, a3, a4]`.
pub fn format_coefficients(c: &LimbDarkeningCoefficients) -> String {
    fmt_vec(&c.to_array())
}

/// Plain-text lookup summary: one coefficient array per band, then the law.
pub fn format_lookup(output: &LookupOutput) -> String {
    let mut out = String::new();
    let q = &output.quantized;

    out.push_str(&format!("Catalog: {}\n", output.descriptor.kind.display_name()));
    out.push_str(&format!(
        "Grid point: Teff={:.0} K | logg={:.2}",
        q.teff, q.logg
    ));
    if let Some(monh) = q.monh {
        out.push_str(&format!(" | [M/H]={monh:.1}"));
    }
    out.push('\n');
    if let Some(v) = q.turbvel {
        out.push_str(&format!("Requested xi: {v:.1} km/s (not a lookup key)\n"));
    }

    for band in &output.bands {
        let mut line = match band.passband {
            Some(p) => format!("{:<3} {}", p.catalog_code(), format_coefficients(&band.coefficients)),
            None => format_coefficients(&band.coefficients),
        };
        if let Some(xi) = band.turbvel {
            line.push_str(&format!("  xi={xi:.1} km/s"));
        }
        out.push_str(&line);
        out.push('\n');
    }

    if output.model.form() == LawForm::BandAverage {
        out.push_str(&format!(
            "Band-averaged law: {}\n",
            format_coefficients(&output.model.effective_coefficients())
        ));
    }

    out
}

#[derive(Serialize)]
struct LookupJson<'a> {
    catalog: &'a str,
    parameters: &'a StellarParameters,
    quantized: &'a QuantizedParameters,
    coefficients: &'a [BandCoefficients],
    law: LawForm,
    effective: LimbDarkeningCoefficients,
}

/// JSON lookup summary (for scripting).
pub fn format_lookup_json(output: &LookupOutput) -> Result<String, AppError> {
    let catalog = output.descriptor.kind.to_string();
    let doc = LookupJson {
        catalog: &catalog,
        parameters: &output.params,
        quantized: &output.quantized,
        coefficients: &output.bands,
        law: output.model.form(),
        effective: output.model.effective_coefficients(),
    };
    serde_json::to_string_pretty(&doc).map_err(|e| AppError::new(5, format!("Failed to encode JSON: {e}")))
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", parts.join(", "))
}
