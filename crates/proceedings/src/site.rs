//! Site configuration for a proceedings host.
//!
//! The base URL and request headers are an explicit [`Site`] value passed
//! into each client constructor rather than module-level constants, so
//! multiple hosts (or a local test server) can be targeted in isolation.
//!
//! # Examples
//!
//! ```
//! use proceedings::Site;
//!
//! let site = Site::papers_nips_cc();
//! assert_eq!(site.listing_url(2020).as_str(), "https://papers.nips.cc/paper/2020");
//! ```

use super::*;

/// The first year with published proceedings; earlier years are rejected.
pub const MIN_YEAR: u16 = 1987;

/// Year assumed current when the index page yields no parseable year tokens.
pub const FALLBACK_YEAR: u16 = 2023;

/// The browser user agent sent with every request.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
                          Chrome/86.0.4240.183 Safari/537.36";

/// Configuration for a single proceedings host.
///
/// A `Site` owns the base URL that listing hrefs are resolved against and
/// the user agent string presented to the server. Clients take a `Site` at
/// construction time rather than reading global state.
#[derive(Debug, Clone)]
pub struct Site {
  /// Base URL of the host; the index page lives at its root.
  pub base_url:   Url,
  /// User agent header value sent with every request.
  pub user_agent: String,
}

impl Site {
  /// Creates a site rooted at the given base URL with the stock user agent.
  pub fn new(base_url: Url) -> Self { Self { base_url, user_agent: USER_AGENT.to_string() } }

  /// The NeurIPS proceedings host, `https://papers.nips.cc`.
  pub fn papers_nips_cc() -> Self {
    Self::new(Url::parse("https://papers.nips.cc").unwrap())
  }

  /// URL of the yearly listing page enumerating that year's papers.
  pub fn listing_url(&self, year: u16) -> Url {
    self.base_url.join(&format!("/paper/{year}")).unwrap()
  }

  /// URL of the root index page used for latest-year resolution.
  pub fn index_url(&self) -> Url { self.base_url.clone() }

  /// Resolves a listing anchor's `href` against the site base.
  pub fn resolve(&self, href: &str) -> Result<Url, ProceedingsError> {
    Ok(self.base_url.join(href)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_listing_url() {
    let site = Site::papers_nips_cc();
    assert_eq!(site.listing_url(1987).as_str(), "https://papers.nips.cc/paper/1987");
  }

  #[test]
  fn test_resolve_absolute_path_href() {
    let site = Site::papers_nips_cc();
    let url = site.resolve("/paper/2020/hash/1234-Abstract.html").unwrap();
    assert_eq!(url.as_str(), "https://papers.nips.cc/paper/2020/hash/1234-Abstract.html");
  }
}
