//! Error types for the proceedings-dl CLI.
//!
//! The CLI adds nothing of its own on top of the library's failure modes;
//! this wrapper exists so `main` has a single error type to return and so
//! future CLI-only failures have somewhere to live.

use thiserror::Error;

/// Errors that can occur while running the downloader.
///
/// Uses the `transparent` pattern so the underlying library error's message
/// reaches the user unchanged as the process exits non-zero.
#[derive(Error, Debug)]
pub enum DownloaderError {
  /// Errors from the underlying proceedings library
  #[error(transparent)]
  Proceedings(#[from] proceedings::errors::ProceedingsError),
}
