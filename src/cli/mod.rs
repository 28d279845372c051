//! Command-line parsing for the limb-darkening coefficient lookup.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the catalog/model code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::DEFAULT_TURBVEL;
use crate::domain::{OutputFormat, Passband};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "ldc", version, about = "Theoretical limb-darkening coefficients from the Claret catalogs")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every lookup.
#[derive(Debug, Args, Clone)]
pub struct GlobalArgs {
    /// Directory holding the catalog files (overrides LIMB_DARKENING_DATA_DIR).
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use this catalog file directly.
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Output format for coefficient lookups.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Claret et al. (2013) PHOENIX coefficients for APT photometry.
    Apt(AptArgs),
    /// Claret, Dragomir & Matthews (2014) coefficients for the MOST satellite.
    Most(MostArgs),
    /// Evaluate the limb-darkening profile, plot it, and optionally export JSON.
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Plot a previously exported profile JSON.
    Plot(PlotArgs),
}

/// Lookup options for the passband catalog.
#[derive(Debug, Args, Clone)]
pub struct AptArgs {
    /// Effective temperature (K), 5000-10000.
    pub teff: f64,

    /// Log surface gravity (dex), 3.0-5.5.
    pub logg: f64,

    /// Passband(s) to look up. Defaults to the Strömgren b and y pair.
    #[arg(short, long = "passband", value_enum)]
    pub passbands: Vec<Passband>,
}

/// Lookup options for the metallicity catalog.
#[derive(Debug, Args, Clone)]
pub struct MostArgs {
    /// Effective temperature (K), 3000-50000.
    pub teff: f64,

    /// Log surface gravity (dex), 0.0-5.5.
    pub logg: f64,

    /// Metallicity [M/H] (dex), -5.0-1.0.
    #[arg(allow_negative_numbers = true)]
    pub monh: f64,

    /// Microturbulent velocity (km/s), 0-8.
    #[arg(default_value_t = DEFAULT_TURBVEL)]
    pub turbvel: f64,
}

/// Profile evaluation per catalog.
#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Apt {
        #[command(flatten)]
        lookup: AptArgs,
        #[command(flatten)]
        output: ProfileArgs,
    },
    Most {
        #[command(flatten)]
        lookup: MostArgs,
        #[command(flatten)]
        output: ProfileArgs,
    },
}

/// Sampling, plotting and export options for a profile.
#[derive(Debug, Args, Clone)]
pub struct ProfileArgs {
    /// Number of viewing angles sampled between disk centre and limb.
    #[arg(long, default_value_t = 91)]
    pub samples: usize,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the sampled profile to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for plotting a saved profile.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Profile JSON file produced by `ldc profile ... --export`.
    #[arg(long, value_name = "JSON")]
    pub profile: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
