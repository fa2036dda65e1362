//! Client implementations for the network-facing side of a harvest.
//!
//! Each submodule owns one kind of request against the proceedings host:
//! - [`listing`] - fetches a yearly listing page and derives per-paper links
//! - [`resource`] - fetches the three per-paper artifacts, one attempt each
//! - [`index`] - resolves the most recent proceedings year from the root page
//!
//! All clients take a [`Site`] at construction time and present its user
//! agent to the server. None of them retries; the listing client is the only
//! one whose failures are fatal to a run.
//!
//! # Examples
//!
//! ```no_run
//! use proceedings::{clients::listing::ListingClient, Site};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ListingClient::new(Site::papers_nips_cc());
//! let listing = client.papers_for_year(2020).await?;
//!
//! println!("{} papers in 2020", listing.papers.len());
//! # Ok(())
//! # }
//! ```

use scraper::{ElementRef, Html, Selector};

pub mod index;
pub mod listing;
pub mod resource;

pub use index::IndexClient;
pub use listing::ListingClient;
pub use resource::ResourceClient;

use super::*;
