use std::io::Write;
use std::path::{Path, PathBuf};

use approx::assert_abs_diff_eq;

use limb_darkening::app::pipeline::run_lookup;
use limb_darkening::catalog::{APT, MOST};
use limb_darkening::domain::{CatalogKind, LawForm, LookupConfig, Passband, StellarParameters};
use limb_darkening::error::{LimbDarkeningError, LoadError};
use limb_darkening::io::load_table;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn most(teff: f64, logg: f64, monh: f64, path: PathBuf) -> LookupConfig {
    LookupConfig {
        catalog: CatalogKind::Most,
        catalog_path: path,
        params: StellarParameters::new(teff, logg).with_monh(monh).with_turbvel(2.0),
        passbands: Vec::new(),
    }
}

fn apt(teff: f64, logg: f64, passbands: &[Passband]) -> LookupConfig {
    LookupConfig {
        catalog: CatalogKind::Apt,
        catalog_path: fixture("claret2013_apt.tsv"),
        params: StellarParameters::new(teff, logg),
        passbands: passbands.to_vec(),
    }
}

#[test]
fn fixture_tables_load_with_declared_schema() {
    let apt = load_table(&fixture("claret2013_apt.tsv"), &APT).unwrap();
    assert_eq!(apt.len(), 8);
    assert_eq!(apt.columns, APT.columns);

    let most = load_table(&fixture("claret2014_most.tsv"), &MOST).unwrap();
    assert_eq!(most.len(), 6);
    assert_eq!(most.columns, MOST.columns);
}

#[test]
fn most_lookup_returns_fixture_coefficients() {
    let out = run_lookup(&most(5084.0, 4.3, -0.13, fixture("claret2014_most.tsv"))).unwrap();
    assert_eq!(out.quantized.teff, 5000.0);
    assert_eq!(out.quantized.logg, 4.5);
    assert_eq!(out.bands.len(), 1);
    assert_eq!(out.bands[0].coefficients.to_array(), [0.5214, -0.1432, 0.7361, -0.2650]);
    assert_eq!(out.model.form(), LawForm::SingleBand);
    assert_eq!(out.model.evaluate(0.0), 1.0);
}

#[test]
fn near_zero_metallicity_matches_positive_zero_row() {
    // -0.04 rounds to -0.0, which must still find the "0.0" row; the
    // catalog has two such rows and the first wins.
    let out = run_lookup(&most(5000.0, 4.5, -0.04, fixture("claret2014_most.tsv"))).unwrap();
    assert_eq!(out.bands[0].coefficients.a1, 0.5280);
}

#[test]
fn most_miss_is_reported() {
    let err = run_lookup(&most(5000.0, 4.5, 0.5, fixture("claret2014_most.tsv"))).unwrap_err();
    match err {
        LimbDarkeningError::LookupMiss(key) => assert_eq!(key, "Teff=5000, logg=4.50, logZ=0.5"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validation_runs_before_loading() {
    let missing = PathBuf::from("/nonexistent/catalog.tsv");
    let err = run_lookup(&most(2000.0, 4.5, 0.0, missing.clone())).unwrap_err();
    assert!(matches!(err, LimbDarkeningError::Validation(_)));

    let err = run_lookup(&most(5000.0, 6.0, 0.0, missing.clone())).unwrap_err();
    assert!(matches!(err, LimbDarkeningError::Validation(_)));

    let err = run_lookup(&most(5000.0, 4.5, 0.0, missing)).unwrap_err();
    assert!(matches!(err, LimbDarkeningError::Load(LoadError::Io { .. })));
}

#[test]
fn apt_default_pair_builds_band_average() {
    let out = run_lookup(&apt(6130.0, 4.1, &[Passband::StromgrenB, Passband::StromgrenY])).unwrap();
    assert_eq!(out.quantized.teff, 6250.0);
    assert_eq!(out.quantized.logg, 4.0);
    assert_eq!(out.bands[0].passband, Some(Passband::StromgrenB));
    assert_eq!(out.bands[0].coefficients.to_array(), [0.5311, -0.1744, 0.7830, -0.2976]);
    assert_eq!(out.bands[1].coefficients.to_array(), [0.4957, -0.0836, 0.5937, -0.2418]);
    assert_eq!(out.model.form(), LawForm::BandAverage);
    assert_eq!(out.model.evaluate(0.0), 1.0);

    let eff = out.model.effective_coefficients();
    assert_abs_diff_eq!(eff.a1, 0.5 * (0.5311 + 0.4957), epsilon = 1e-12);
    assert_abs_diff_eq!(eff.a4, 0.5 * (-0.2976 + -0.2418), epsilon = 1e-12);
}

#[test]
fn apt_single_primed_passband() {
    let out = run_lookup(&apt(6250.0, 4.0, &[Passband::SloanU])).unwrap();
    assert_eq!(out.bands[0].coefficients.a1, 0.6120);
    assert_eq!(out.model.form(), LawForm::SingleBand);
}

#[test]
fn passband_on_parameters_is_looked_up() {
    let mut config = apt(5000.0, 4.5, &[]);
    config.params = config.params.with_passband(Passband::JohnsonV);
    let out = run_lookup(&config).unwrap();
    assert_eq!(out.bands.len(), 1);
    assert_eq!(out.bands[0].passband, Some(Passband::JohnsonV));
    assert_eq!(out.bands[0].coefficients.to_array(), [0.4105, 0.0713, 0.3912, -0.1802]);
    assert_eq!(out.params.passband, Some(Passband::JohnsonV));
}

#[test]
fn passband_on_parameters_may_repeat_the_list() {
    let mut config = apt(5000.0, 4.5, &[Passband::JohnsonV]);
    config.params = config.params.with_passband(Passband::JohnsonV);
    let out = run_lookup(&config).unwrap();
    assert_eq!(out.bands[0].coefficients.a1, 0.4105);
}

#[test]
fn conflicting_passbands_are_rejected() {
    let mut config = apt(5000.0, 4.5, &[Passband::StromgrenB]);
    config.params = config.params.with_passband(Passband::JohnsonV);
    let err = run_lookup(&config).unwrap_err();
    match err {
        LimbDarkeningError::Validation(msg) => assert!(msg.contains("conflicts"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn matched_row_reports_tabulated_turbulent_velocity() {
    let mut config = most(5084.0, 4.3, -0.13, fixture("claret2014_most.tsv"));
    config.params.turbvel = Some(4.0);
    let out = run_lookup(&config).unwrap();
    assert_eq!(out.quantized.turbvel, Some(4.0));
    assert_eq!(out.bands[0].turbvel, Some(2.0));
    assert_eq!(out.bands[0].passband, None);
}

#[test]
fn apt_untabulated_passband_is_a_miss() {
    let err = run_lookup(&apt(5000.0, 4.5, &[Passband::JohnsonK])).unwrap_err();
    assert!(matches!(err, LimbDarkeningError::LookupMiss(_)));
}

#[test]
fn apt_without_passband_is_rejected() {
    let err = run_lookup(&apt(5000.0, 4.5, &[])).unwrap_err();
    assert!(matches!(err, LimbDarkeningError::Validation(_)));
}

#[test]
fn truncated_catalog_is_a_load_error() {
    let text = std::fs::read_to_string(fixture("claret2014_most.tsv")).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in text.lines().take(40) {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();

    let err = run_lookup(&most(5000.0, 4.5, 0.0, file.path().to_path_buf())).unwrap_err();
    assert!(matches!(err, LimbDarkeningError::Load(LoadError::Truncated(_))));
}

#[test]
fn corrupt_row_is_a_load_error() {
    let text = std::fs::read_to_string(fixture("claret2014_most.tsv")).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{text}4.50  6000  0.0  2.0  0.5").unwrap();
    file.flush().unwrap();

    let err = run_lookup(&most(5000.0, 4.5, 0.0, file.path().to_path_buf())).unwrap_err();
    assert!(matches!(err, LimbDarkeningError::Load(LoadError::Malformed { .. })));
}
