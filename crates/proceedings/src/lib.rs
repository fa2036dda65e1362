//! A library for crawling conference proceedings sites and archiving the
//! per-paper artifacts (abstract, metadata, PDF) into a year/paper directory
//! tree on disk.
//!
//! # Example
//! ```rust,no_run
//! use proceedings::{Harvester, Site};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!   // Harvest every paper from the 2020 proceedings into ./data
//!   let harvester = Harvester::new(Site::papers_nips_cc(), "data")?;
//!   let archived = harvester.run(2020, 2020).await?;
//!   println!("Archived {archived} papers");
//!
//!   Ok(())
//! }
//! ```

#![warn(missing_docs, clippy::missing_docs_in_private_items)]
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

pub mod archive;
pub mod clients;
pub mod errors;
pub mod format;
pub mod harvest;
pub mod paper;
pub mod site;

use archive::Archiver;
use clients::{listing::ListingClient, resource::ResourceClient};
use errors::ProceedingsError;
use paper::{AbstractRecord, Listing, PaperLinks};
pub use harvest::{validate_years, Harvester};
pub use site::{Site, FALLBACK_YEAR, MIN_YEAR};
