//! Paper link derivation and metadata types for the proceedings library.
//!
//! This module provides the types produced by crawling a yearly listing page:
//! the per-paper resource links derived from a listing anchor, the ordered
//! listing itself, and the abstract record extracted from a paper's abstract
//! page.
//!
//! # Examples
//!
//! ```
//! use proceedings::{paper::PaperLinks, Site};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let site = Site::papers_nips_cc();
//! let links = PaperLinks::from_href(&site, "/paper/2020/hash/1234-Abstract.html")?;
//!
//! assert_eq!(links.id, "1234");
//! assert!(links.pdf_url.as_str().ends_with(".pdf"));
//! # Ok(())
//! # }
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use super::*;

lazy_static! {
  /// Listing anchors point at abstract pages shaped like
  /// `<stem>/hash/<digest>-Abstract.html`. The digest before the first `-`
  /// is the paper identifier; the sibling documents live under `file/`.
  static ref ABSTRACT_HREF: Regex =
    Regex::new(r"^(?P<stem>.+)/hash/(?P<id>[^-/]+)(?:-[^/.]*)?-Abstract\.(?P<ext>[A-Za-z0-9]+)$")
      .unwrap();
}

/// The resource links derived for a single paper on a listing page.
///
/// All three URLs are determined from the same anchor `href`, so they always
/// share the identifier-bearing path prefix. Identifier uniqueness per
/// listing page is assumed, not verified.
#[derive(Debug, Clone)]
pub struct PaperLinks {
  /// Short token from the hashed URL segment, used as the directory key.
  pub id:           String,
  /// The paper's abstract page, exactly as linked from the listing.
  pub abstract_url: Url,
  /// The paper's structured metadata document (JSON).
  pub metadata_url: Url,
  /// The paper's full PDF document.
  pub pdf_url:      Url,
}

/// One yearly listing page: the year and its papers in document order.
///
/// Anchor order carries no meaning beyond display, but it is preserved so
/// archive runs are reproducible.
#[derive(Debug, Clone)]
pub struct Listing {
  /// The proceedings year this listing enumerates.
  pub year:   u16,
  /// Derived links for every paper on the page, in document order.
  pub papers: Vec<PaperLinks>,
}

/// The citation fields scraped from a paper's abstract page.
///
/// Serialized as `{"title": ..., "authors": [...], "abstract": ...}`; a
/// failed abstract fetch is archived as an empty JSON object instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbstractRecord {
  /// The paper's title, from the `citation_title` meta tag.
  pub title:         String,
  /// Author names from the `citation_author` meta tags, in document order.
  pub authors:       Vec<String>,
  /// Abstract body with whitespace runs collapsed to single spaces.
  #[serde(rename = "abstract")]
  pub abstract_text: String,
}

impl PaperLinks {
  /// Derives a paper's identifier and resource links from a listing anchor.
  ///
  /// The anchor's `href` must match the abstract-page pattern
  /// `<stem>/hash/<digest>-Abstract.<ext>`. From it this derives:
  /// - the identifier: the digest segment truncated at its first `-`,
  /// - the abstract URL: the `href` resolved against the site base verbatim,
  /// - the metadata URL: `<stem>/file/<id>-Metadata.json`,
  /// - the PDF URL: `<stem>/file/<id>-Paper.pdf`.
  ///
  /// # Errors
  ///
  /// Returns [`ProceedingsError::MalformedListing`] if the `href` does not
  /// match the pattern, or [`ProceedingsError::InvalidUrl`] if resolution
  /// against the site base fails. Either means the listing page is unusable
  /// and the run cannot continue.
  ///
  /// # Examples
  ///
  /// ```
  /// # use proceedings::{paper::PaperLinks, Site};
  /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
  /// let site = Site::papers_nips_cc();
  /// let links = PaperLinks::from_href(&site, "/paper/2020/hash/1234-Abstract.html")?;
  /// assert_eq!(
  ///   links.metadata_url.as_str(),
  ///   "https://papers.nips.cc/paper/2020/file/1234-Metadata.json"
  /// );
  /// # Ok(())
  /// # }
  /// ```
  pub fn from_href(site: &Site, href: &str) -> Result<Self, ProceedingsError> {
    let captures = ABSTRACT_HREF
      .captures(href)
      .ok_or_else(|| ProceedingsError::MalformedListing(format!("unrecognized href {href:?}")))?;
    let stem = &captures["stem"];
    let id = &captures["id"];

    Ok(Self {
      id:           id.to_string(),
      abstract_url: site.resolve(href)?,
      metadata_url: site.resolve(&format!("{stem}/file/{id}-Metadata.json"))?,
      pdf_url:      site.resolve(&format!("{stem}/file/{id}-Paper.pdf"))?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_derives_all_three_urls() {
    let site = Site::papers_nips_cc();
    let links = PaperLinks::from_href(&site, "/paper/2020/hash/1234-Abstract.html").unwrap();

    assert_eq!(links.id, "1234");
    assert_eq!(
      links.abstract_url.as_str(),
      "https://papers.nips.cc/paper/2020/hash/1234-Abstract.html"
    );
    assert_eq!(
      links.metadata_url.as_str(),
      "https://papers.nips.cc/paper/2020/file/1234-Metadata.json"
    );
    assert_eq!(links.pdf_url.as_str(), "https://papers.nips.cc/paper/2020/file/1234-Paper.pdf");
  }

  #[test]
  fn test_metadata_and_pdf_url_shape() {
    let site = Site::papers_nips_cc();
    let links =
      PaperLinks::from_href(&site, "/paper/2019/hash/4c5bcfec8584af0d967f1ab10179ca4b-Abstract.html")
        .unwrap();

    assert_eq!(links.id, "4c5bcfec8584af0d967f1ab10179ca4b");
    assert!(links.metadata_url.as_str().contains("Metadata"));
    assert!(links.metadata_url.as_str().contains("file"));
    assert!(links.metadata_url.as_str().ends_with(".json"));
    assert!(links.pdf_url.as_str().contains("Paper"));
    assert!(links.pdf_url.as_str().contains("file"));
    assert!(links.pdf_url.as_str().ends_with(".pdf"));
  }

  #[test]
  fn test_identifier_truncates_at_first_dash() {
    let site = Site::papers_nips_cc();
    let links =
      PaperLinks::from_href(&site, "/paper/2021/hash/deadbeef-v2-Abstract.html").unwrap();
    assert_eq!(links.id, "deadbeef");
  }

  #[test]
  fn test_rejects_href_without_abstract_segment() {
    let site = Site::papers_nips_cc();
    let result = PaperLinks::from_href(&site, "/paper/2020/hash/1234-Review.html");
    assert!(matches!(result, Err(ProceedingsError::MalformedListing(_))));
  }

  #[test]
  fn test_rejects_href_without_hash_directory() {
    let site = Site::papers_nips_cc();
    let result = PaperLinks::from_href(&site, "/paper/2020/1234-Abstract.html");
    assert!(matches!(result, Err(ProceedingsError::MalformedListing(_))));
  }
}
