//! Error types for folio.
//!
//! The view-state core never fails: degraded inputs degrade features
//! (a missing data feed renders nothing, an unwritable settings file means
//! the theme only lasts the session). The only structured errors live at
//! the storage seam.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No platform config directory could be determined.
    #[error("could not determine a config directory")]
    NoConfigDir,

    /// Writing a file failed.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
