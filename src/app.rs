//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the catalog file
//! - runs the lookup pipeline
//! - prints coefficients, plots and optional exports

use clap::Parser;

use crate::catalog::CatalogDescriptor;
use crate::cli::{AptArgs, Command, GlobalArgs, MostArgs, PlotArgs, ProfileArgs, ProfileCommand};
use crate::domain::{CatalogKind, LookupConfig, OutputFormat, Passband, StellarParameters};
use crate::error::AppError;

pub mod pipeline;

/// Passbands used for APT photometry when none are requested.
pub const APT_DEFAULT_PASSBANDS: [Passband; 2] = [Passband::StromgrenB, Passband::StromgrenY];

/// Entry point for the `ldc` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Apt(args) => handle_lookup(apt_config(&args, &cli.global), cli.global.format),
        Command::Most(args) => handle_lookup(most_config(&args, &cli.global), cli.global.format),
        Command::Profile(ProfileCommand::Apt { lookup, output }) => {
            handle_profile(apt_config(&lookup, &cli.global), &output)
        }
        Command::Profile(ProfileCommand::Most { lookup, output }) => {
            handle_profile(most_config(&lookup, &cli.global), &output)
        }
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_lookup(config: LookupConfig, format: OutputFormat) -> Result<(), AppError> {
    let output = pipeline::run_lookup(&config)?;
    match format {
        OutputFormat::Text => print!("{}", crate::report::format_lookup(&output)),
        OutputFormat::Json => println!("{}", crate::report::format_lookup_json(&output)?),
    }
    Ok(())
}

fn handle_profile(config: LookupConfig, args: &ProfileArgs) -> Result<(), AppError> {
    let output = pipeline::run_lookup(&config)?;
    print!("{}", crate::report::format_lookup(&output));

    let profile = crate::io::build_profile(&output, args.samples);
    if !args.no_plot {
        println!();
        print!("{}", crate::plot::render_profile_plot(&profile.grid, args.width, args.height));
    }

    if let Some(path) = &args.export {
        crate::io::write_profile_json(path, &profile)?;
    }
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let profile = crate::io::read_profile_json(&args.profile)?;
    print!("{}", crate::plot::render_profile_plot(&profile.grid, args.width, args.height));
    Ok(())
}

pub fn apt_config(args: &AptArgs, global: &GlobalArgs) -> LookupConfig {
    let passbands = if args.passbands.is_empty() {
        APT_DEFAULT_PASSBANDS.to_vec()
    } else {
        args.passbands.clone()
    };
    LookupConfig {
        catalog: CatalogKind::Apt,
        catalog_path: catalog_path(CatalogKind::Apt, global),
        params: StellarParameters::new(args.teff, args.logg),
        passbands,
    }
}

pub fn most_config(args: &MostArgs, global: &GlobalArgs) -> LookupConfig {
    LookupConfig {
        catalog: CatalogKind::Most,
        catalog_path: catalog_path(CatalogKind::Most, global),
        params: StellarParameters::new(args.teff, args.logg)
            .with_monh(args.monh)
            .with_turbvel(args.turbvel),
        passbands: Vec::new(),
    }
}

fn catalog_path(kind: CatalogKind, global: &GlobalArgs) -> std::path::PathBuf {
    crate::config::resolve_catalog_path(
        CatalogDescriptor::for_kind(kind),
        global.catalog_file.as_deref(),
        global.data_dir.as_deref(),
    )
}
