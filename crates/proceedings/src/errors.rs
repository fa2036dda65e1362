//! Error types for the proceedings library.
//!
//! This module provides a comprehensive error type that encompasses all
//! possible failure modes when harvesting a proceedings site, including:
//! - Network errors on listing pages
//! - Malformed listing markup
//! - Invalid year ranges
//! - Filesystem and serialization failures
//!
//! Only listing-page failures are allowed to cross component boundaries;
//! every per-paper resource failure is converted to an empty sentinel value
//! at the point of detection (see [`crate::clients::resource`]).

use thiserror::Error;

/// Errors that can occur when harvesting a proceedings site.
///
/// This enum provides a comprehensive set of error cases that can occur when:
/// - Fetching and parsing yearly listing pages
/// - Validating a requested year range
/// - Writing archived artifacts to disk
///
/// Most variants wrap an underlying error transparently; the domain-specific
/// variants carry a message with enough context for a one-line diagnostic.
#[derive(Error, Debug)]
pub enum ProceedingsError {
  /// A network request for a listing page failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The server is unreachable or returns a non-success status
  /// - The request times out
  /// - TLS/SSL errors occur
  ///
  /// Listing fetches have no retry and no partial-result recovery, so this
  /// error is fatal for the whole run.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// A listing page did not have the expected markup structure.
  ///
  /// This occurs when:
  /// - The paper container element is missing entirely
  /// - A list item has no anchor, or an anchor has no `href`
  /// - An anchor's `href` does not match the abstract-page pattern
  ///
  /// The string parameter describes the offending element for debugging.
  #[error("Malformed listing page: {0}")]
  MalformedListing(String),

  /// The requested year range failed validation.
  ///
  /// Raised before any network or filesystem work begins, when the start
  /// year predates the first conference or exceeds the end year.
  #[error("Invalid year range: {0}")]
  InvalidYearRange(String),

  /// The output directory does not exist.
  ///
  /// The harvester writes into an existing directory and never creates the
  /// root itself, so a missing directory is rejected up front.
  #[error("Output directory {0:?} does not exist")]
  MissingOutputDir(std::path::PathBuf),

  /// Failed to parse or construct a URL.
  ///
  /// This occurs when joining a listing anchor's `href` against the site
  /// base URL produces an invalid URL.
  #[error(transparent)]
  InvalidUrl(#[from] url::ParseError),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - Creating a paper's archive directory fails
  /// - Writing an artifact to the filesystem fails
  /// - Permission errors occur
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Serializing an archived artifact to JSON failed.
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
