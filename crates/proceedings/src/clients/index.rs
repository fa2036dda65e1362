//! Client for resolving the most recent proceedings year.
//!
//! The root index page lists one entry per published conference, each ending
//! in a parenthesized year ("Advances in Neural Information Processing
//! Systems 33 (2020)"). The resolver parses each list item's trailing token
//! as an optional integer, keeps the successes, and reduces by maximum.
//!
//! Resolution never fails: items that do not parse are silently skipped, and
//! an unreachable index page or a page with no parseable tokens falls back
//! to [`FALLBACK_YEAR`].

use lazy_static::lazy_static;

use super::*;

lazy_static! {
  /// One list item per conference entry on the index page.
  static ref LIST_ITEM: Selector = Selector::parse("li").unwrap();
}

/// Client for resolving the latest available year from the site index.
pub struct IndexClient {
  /// Internal web client used to fetch the index page.
  client: reqwest::Client,
  /// Host configuration providing the index URL.
  site:   Site,
}

impl IndexClient {
  /// Creates a new index client for the given site.
  pub fn new(site: Site) -> Self {
    Self {
      client: reqwest::Client::builder().user_agent(site.user_agent.as_str()).build().unwrap(),
      site,
    }
  }

  /// Resolves the most recent year with published proceedings.
  ///
  /// Fetches the index page and takes the maximum over every list item
  /// whose trailing token parses as a year. Falls back to
  /// [`FALLBACK_YEAR`] when the page is unreachable or nothing parses, so
  /// the caller always gets a usable upper bound.
  pub async fn latest_year(&self) -> u16 {
    let url = self.site.index_url();
    debug!("Resolving latest year via: {url}");

    let body = match self.client.get(url.clone()).send().await {
      Ok(response) => match response.text().await {
        Ok(body) => body,
        Err(e) => {
          warn!("Error reading index page {url}: {e}");
          return FALLBACK_YEAR;
        },
      },
      Err(e) => {
        warn!("Error fetching index page {url}: {e}");
        return FALLBACK_YEAR;
      },
    };

    parse_latest_year(&body).unwrap_or(FALLBACK_YEAR)
  }
}

/// The maximum year token across all list items, if any parses.
fn parse_latest_year(body: &str) -> Option<u16> {
  let document = Html::parse_document(body);
  document
    .select(&LIST_ITEM)
    .filter_map(|item| year_token(&item.text().collect::<String>()))
    .max()
}

/// Parses a list item's trailing whitespace-delimited token as a year.
///
/// Surrounding parentheses are stripped first; anything that still fails to
/// parse is skipped.
fn year_token(text: &str) -> Option<u16> {
  text.split_whitespace().last()?.trim_matches(|c| c == '(' || c == ')').parse().ok()
}
