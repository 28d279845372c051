//! Error types.
//!
//! Library code returns [`LimbDarkeningError`]; the binary maps it onto an
//! [`AppError`] carrying the process exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a catalog file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog ended early: {0}")]
    Truncated(String),

    #[error("catalog header {found:?} does not match the declared schema {expected:?}")]
    Schema {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("malformed catalog line {line}: {message}")]
    Malformed { line: usize, message: String },
}

/// Errors surfaced by a lookup request.
#[derive(Error, Debug)]
pub enum LimbDarkeningError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("no catalog data for {0}")]
    LookupMiss(String),
}

impl LimbDarkeningError {
    pub fn exit_code(&self) -> u8 {
        match self {
            LimbDarkeningError::Validation(_) => 2,
            LimbDarkeningError::Load(_) => 3,
            LimbDarkeningError::LookupMiss(_) => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<LimbDarkeningError> for AppError {
    fn from(err: LimbDarkeningError) -> Self {
        AppError::new(err.exit_code(), format!("error: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
