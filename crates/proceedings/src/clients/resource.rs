//! Client for fetching the three per-paper artifacts.
//!
//! Every paper derived from a listing page has three resources: its abstract
//! page (HTML), its structured metadata document (JSON), and its PDF. Each
//! is fetched with a single attempt and no retry. Unlike the listing client,
//! nothing here is fatal: every failure is converted to an empty sentinel at
//! the point of detection, so one broken paper never aborts a year.
//!
//! - abstract page unavailable → no record (archived as `{}`)
//! - metadata unavailable or not valid JSON → empty mapping (archived as `{}`)
//! - PDF unavailable → absent payload (the archiver skips the file)
//!
//! # Examples
//!
//! ```no_run
//! use proceedings::{clients::resource::ResourceClient, Site};
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ResourceClient::new(Site::papers_nips_cc());
//! let url = Url::parse("https://papers.nips.cc/paper/2020/hash/1234-Abstract.html")?;
//!
//! if let Some(record) = client.fetch_abstract(&url).await {
//!   println!("{}: {} authors", record.title, record.authors.len());
//! }
//! # Ok(())
//! # }
//! ```

use lazy_static::lazy_static;
use serde_json::Map;

use super::*;

lazy_static! {
  /// Candidate headings; the one whose text is literally `Abstract` wins.
  static ref HEADING: Selector = Selector::parse("h4").unwrap();
  /// The citation title meta tag.
  static ref CITATION_TITLE: Selector = Selector::parse("meta[name=\"citation_title\"]").unwrap();
  /// The citation author meta tags, one per author in document order.
  static ref CITATION_AUTHOR: Selector = Selector::parse("meta[name=\"citation_author\"]").unwrap();
}

/// Client for fetching a paper's abstract page, metadata document, and PDF.
///
/// Holds a reusable HTTP client configured with the site's user agent. The
/// fetch methods never return an error: a run degrades per paper instead of
/// aborting, and each failure leaves a one-line diagnostic in the log.
pub struct ResourceClient {
  /// Internal web client used for all three artifact fetches.
  client: reqwest::Client,
}

impl ResourceClient {
  /// Creates a new resource client presenting the given site's user agent.
  pub fn new(site: Site) -> Self {
    Self {
      client: reqwest::Client::builder().user_agent(site.user_agent.as_str()).build().unwrap(),
    }
  }

  /// Fetches a paper's abstract page and scrapes its citation fields.
  ///
  /// Returns `None` when the fetch fails or the server answers with a
  /// non-success status. On success the page is scraped for the `Abstract`
  /// heading's following paragraph (whitespace-collapsed) and the
  /// `citation_title` / `citation_author` meta tags; any piece missing from
  /// the markup degrades to an empty field rather than a failure.
  pub async fn fetch_abstract(&self, url: &Url) -> Option<AbstractRecord> {
    let response = match self.client.get(url.clone()).send().await {
      Ok(response) => response,
      Err(e) => {
        warn!("Error fetching abstract page {url}: {e}");
        return None;
      },
    };
    if !response.status().is_success() {
      warn!("Abstract page {url} returned {}", response.status());
      return None;
    }

    match response.text().await {
      Ok(body) => Some(parse_abstract_page(&body)),
      Err(e) => {
        warn!("Error reading abstract page {url}: {e}");
        None
      },
    }
  }

  /// Fetches a paper's structured metadata document.
  ///
  /// The document is passed through verbatim with no schema validation. A
  /// failed fetch, a non-success status, or a body that is not valid JSON
  /// all produce an empty mapping.
  pub async fn fetch_metadata(&self, url: &Url) -> Value {
    let empty = || Value::Object(Map::new());

    let response = match self.client.get(url.clone()).send().await {
      Ok(response) => response,
      Err(e) => {
        warn!("Error fetching metadata {url}: {e}");
        return empty();
      },
    };
    if !response.status().is_success() {
      debug!("Metadata {url} returned {}", response.status());
      return empty();
    }

    match response.json::<Value>().await {
      Ok(document) => document,
      Err(e) => {
        warn!("Error parsing metadata {url}: {e}");
        empty()
      },
    }
  }

  /// Fetches a paper's PDF as raw bytes.
  ///
  /// Any failure (network, non-success status, truncated body) yields
  /// `None`; the archiver then skips the file instead of writing an absent
  /// payload.
  pub async fn fetch_pdf(&self, url: &Url) -> Option<Vec<u8>> {
    let response = match self.client.get(url.clone()).send().await {
      Ok(response) => response,
      Err(e) => {
        warn!("Error downloading PDF from {url}: {e}");
        return None;
      },
    };
    let response = match response.error_for_status() {
      Ok(response) => response,
      Err(e) => {
        warn!("Error downloading PDF from {url}: {e}");
        return None;
      },
    };

    match response.bytes().await {
      Ok(bytes) => Some(bytes.to_vec()),
      Err(e) => {
        warn!("Error reading PDF body from {url}: {e}");
        None
      },
    }
  }
}

/// Scrapes the citation fields out of a fetched abstract page.
fn parse_abstract_page(body: &str) -> AbstractRecord {
  let document = Html::parse_document(body);

  let abstract_text = document
    .select(&HEADING)
    .find(|heading| heading.text().collect::<String>().trim() == "Abstract")
    .and_then(following_paragraph)
    .map(|paragraph| format::collapse_whitespace(&paragraph.text().collect::<String>()))
    .unwrap_or_default();

  let title = document
    .select(&CITATION_TITLE)
    .next()
    .and_then(|meta| meta.value().attr("content"))
    .unwrap_or_default()
    .to_string();

  let authors = document
    .select(&CITATION_AUTHOR)
    .filter_map(|meta| meta.value().attr("content"))
    .map(str::to_string)
    .collect();

  AbstractRecord { title, authors, abstract_text }
}

/// The first paragraph element following a heading, skipping text nodes.
fn following_paragraph<'a>(heading: ElementRef<'a>) -> Option<ElementRef<'a>> {
  heading
    .next_siblings()
    .filter_map(ElementRef::wrap)
    .find(|sibling| sibling.value().name() == "p")
}

#[cfg(test)]
mod tests {
  use super::*;

  const ABSTRACT_PAGE: &str = r#"<html><head>
    <meta name="citation_title" content="Learning To Learn">
    <meta name="citation_author" content="Ada Lovelace">
    <meta name="citation_author" content="Charles Babbage">
    </head><body>
    <h4>Authors</h4><p>Ada Lovelace, Charles Babbage</p>
    <h4>Abstract</h4>
    <p>We study
        machine   learning
        across multiple lines.</p>
    </body></html>"#;

  #[test]
  fn test_parse_abstract_page() {
    let record = parse_abstract_page(ABSTRACT_PAGE);
    assert_eq!(record.title, "Learning To Learn");
    assert_eq!(record.authors, ["Ada Lovelace", "Charles Babbage"]);
    assert_eq!(record.abstract_text, "We study machine learning across multiple lines.");
  }

  #[test]
  fn test_parse_abstract_page_without_heading_degrades() {
    let record = parse_abstract_page("<html><body><p>nothing labelled</p></body></html>");
    assert_eq!(record, AbstractRecord::default());
  }

  #[tokio::test]
  async fn test_fetch_abstract_non_success_is_none() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", "/abstract").with_status(404).create_async().await;

    let client = ResourceClient::new(Site::papers_nips_cc());
    let url = Url::parse(&format!("{}/abstract", server.url())).unwrap();
    assert_eq!(client.fetch_abstract(&url).await, None);
    mock.assert_async().await;
  }

  #[tokio::test]
  async fn test_fetch_metadata_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
      .mock("GET", "/metadata.json")
      .with_status(200)
      .with_header("content-type", "application/json")
      .with_body(r#"{"award": [], "sourceid": 5714}"#)
      .create_async()
      .await;

    let client = ResourceClient::new(Site::papers_nips_cc());
    let url = Url::parse(&format!("{}/metadata.json", server.url())).unwrap();
    let document = client.fetch_metadata(&url).await;

    mock.assert_async().await;
    assert_eq!(document["sourceid"], 5714);
  }

  #[tokio::test]
  async fn test_fetch_metadata_404_is_empty_mapping() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", "/metadata.json").with_status(404).create_async().await;

    let client = ResourceClient::new(Site::papers_nips_cc());
    let url = Url::parse(&format!("{}/metadata.json", server.url())).unwrap();
    let document = client.fetch_metadata(&url).await;

    mock.assert_async().await;
    assert_eq!(document, Value::Object(Map::new()));
  }

  #[tokio::test]
  async fn test_fetch_pdf_roundtrip_and_failure() {
    let mut server = mockito::Server::new_async().await;
    let payload = b"%PDF-1.4 fake body";
    let ok = server
      .mock("GET", "/good.pdf")
      .with_status(200)
      .with_body(payload.as_slice())
      .create_async()
      .await;
    let gone = server.mock("GET", "/gone.pdf").with_status(404).create_async().await;

    let client = ResourceClient::new(Site::papers_nips_cc());
    let good = Url::parse(&format!("{}/good.pdf", server.url())).unwrap();
    let missing = Url::parse(&format!("{}/gone.pdf", server.url())).unwrap();

    assert_eq!(client.fetch_pdf(&good).await.as_deref(), Some(payload.as_slice()));
    assert_eq!(client.fetch_pdf(&missing).await, None);
    ok.assert_async().await;
    gone.assert_async().await;
  }
}
