//! Client for fetching yearly listing pages and deriving paper links.
//!
//! A listing page enumerates every paper accepted in one proceedings year as
//! `li > a` anchors inside a single container element. This client fetches
//! the page, walks the anchors in document order, and derives each paper's
//! identifier and resource URLs via [`PaperLinks::from_href`].
//!
//! A listing fetch has no retry and no partial-result recovery: a network
//! failure, a non-success status, or markup that does not match the expected
//! structure is fatal for the year being processed, and the error propagates
//! to the caller untouched.
//!
//! # Examples
//!
//! ```no_run
//! use proceedings::{clients::listing::ListingClient, Site};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ListingClient::new(Site::papers_nips_cc());
//!
//! // One year at a time...
//! let listing = client.papers_for_year(2020).await?;
//!
//! // ...or several listing pages scattered and gathered together.
//! let listings = client.listings(&[2019, 2020]).await?;
//! # Ok(())
//! # }
//! ```

use lazy_static::lazy_static;

use super::*;

lazy_static! {
  /// Papers are enumerated inside the page's fluid container element.
  static ref CONTAINER: Selector = Selector::parse("div.container-fluid").unwrap();
  /// One list item per paper, in document order.
  static ref LIST_ITEM: Selector = Selector::parse("li").unwrap();
  /// The anchor holding the abstract-page href.
  static ref ANCHOR: Selector = Selector::parse("a").unwrap();
}

/// Client for fetching yearly listing pages from a proceedings host.
///
/// Holds the site configuration and a reusable HTTP client. The listing
/// client is the discovery half of a harvest: everything downstream (the
/// per-paper fetches and the archive layout) is driven by the [`Listing`]s
/// it returns.
pub struct ListingClient {
  /// Internal web client used to fetch listing pages.
  client: reqwest::Client,
  /// Host configuration anchors are resolved against.
  site:   Site,
}

impl ListingClient {
  /// Creates a new listing client for the given site.
  pub fn new(site: Site) -> Self {
    Self {
      client: reqwest::Client::builder().user_agent(site.user_agent.as_str()).build().unwrap(),
      site,
    }
  }

  /// Fetches the listing page for one year and derives its paper links.
  ///
  /// # Errors
  ///
  /// This function will return an error if:
  /// - The network request fails or returns a non-success status
  /// - The page is missing the paper container element
  /// - Any list-item anchor lacks an `href` matching the abstract pattern
  ///
  /// All of these are fatal: there is no way to recover a partial listing.
  pub async fn papers_for_year(&self, year: u16) -> Result<Listing, ProceedingsError> {
    let url = self.site.listing_url(year);
    debug!("Fetching listing via: {url}");

    let body = self.client.get(url).send().await?.error_for_status()?.text().await?;
    parse_listing(&self.site, year, &body)
  }

  /// Fetches several yearly listing pages as a scatter/gather batch.
  ///
  /// All requests are issued concurrently and every result is collected
  /// before returning; the first failure aborts the batch. Results are in
  /// the same order as the requested years.
  ///
  /// # Errors
  ///
  /// Fails with the first error any individual listing fetch produces, under
  /// the same conditions as [`ListingClient::papers_for_year`].
  pub async fn listings(&self, years: &[u16]) -> Result<Vec<Listing>, ProceedingsError> {
    futures::future::try_join_all(years.iter().map(|&year| self.papers_for_year(year))).await
  }
}

/// Parses a fetched listing page into document-ordered paper links.
///
/// A page with a container but zero list items is a valid, empty listing.
fn parse_listing(site: &Site, year: u16, body: &str) -> Result<Listing, ProceedingsError> {
  let document = Html::parse_document(body);

  let container = document
    .select(&CONTAINER)
    .next()
    .ok_or_else(|| ProceedingsError::MalformedListing("no container-fluid element".to_string()))?;

  let mut papers = Vec::new();
  for item in container.select(&LIST_ITEM) {
    let anchor = item.select(&ANCHOR).next().ok_or_else(|| {
      ProceedingsError::MalformedListing(format!("list item without anchor in year {year}"))
    })?;
    let href = anchor.value().attr("href").ok_or_else(|| {
      ProceedingsError::MalformedListing(format!("anchor without href in year {year}"))
    })?;
    papers.push(PaperLinks::from_href(site, href)?);
  }

  debug!("Derived {} papers for {year}", papers.len());
  Ok(Listing { year, papers })
}
