//! Catalog path resolution.
//!
//! Order: explicit `--catalog-file`, then `--data-dir`, then the
//! `LIMB_DARKENING_DATA_DIR` environment variable (a `.env` file is honoured),
//! then `./data`.

use std::path::{Path, PathBuf};

use log::debug;

use crate::catalog::CatalogDescriptor;

pub const DATA_DIR_ENV: &str = "LIMB_DARKENING_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Resolve the catalog file for `desc`, reading the environment.
pub fn resolve_catalog_path(
    desc: &CatalogDescriptor,
    catalog_file: Option<&Path>,
    data_dir: Option<&Path>,
) -> PathBuf {
    dotenvy::dotenv().ok();
    let env_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
    let path = resolve_with(desc, catalog_file, data_dir, env_dir.as_deref());
    debug!("resolved {} catalog path: {}", desc.kind, path.display());
    path
}

/// Pure form of [`resolve_catalog_path`] with the environment value supplied.
pub fn resolve_with(
    desc: &CatalogDescriptor,
    catalog_file: Option<&Path>,
    data_dir: Option<&Path>,
    env_dir: Option<&Path>,
) -> PathBuf {
    if let Some(file) = catalog_file {
        return file.to_path_buf();
    }
    let dir = data_dir
        .or(env_dir)
        .unwrap_or_else(|| Path::new(DEFAULT_DATA_DIR));
    dir.join(desc.file_name)
}
