//! The harvest orchestrator: years in, archived papers out.
//!
//! A harvest iterates the requested years in ascending order. Each year is
//! one listing fetch (fatal on failure) followed by, for every discovered
//! paper, the three sequential resource fetches and one archive write. The
//! per-paper fetches degrade to empty artifacts instead of failing, so a
//! year either aborts at discovery or archives its full paper set.
//!
//! Execution is strictly sequential across papers; nothing but the
//! filesystem is shared between iterations.

use tracing::info;

use super::*;

/// Validates a requested year range before any work begins.
///
/// The start year must be at least [`MIN_YEAR`] and, when the end year is
/// already known, must not exceed it. The end year is `None` while it still
/// awaits resolution from the site index.
///
/// # Errors
///
/// Returns [`ProceedingsError::InvalidYearRange`] describing the violated
/// bound.
///
/// # Examples
///
/// ```
/// use proceedings::validate_years;
///
/// assert!(validate_years(1987, Some(1987)).is_ok());
/// assert!(validate_years(1986, Some(1990)).is_err());
/// ```
pub fn validate_years(start_year: u16, end_year: Option<u16>) -> Result<(), ProceedingsError> {
  if start_year < MIN_YEAR {
    return Err(ProceedingsError::InvalidYearRange(format!(
      "start year must be {MIN_YEAR} or later, got {start_year}"
    )));
  }
  if let Some(end_year) = end_year {
    if start_year > end_year {
      return Err(ProceedingsError::InvalidYearRange(format!(
        "start year {start_year} must be less than or equal to end year {end_year}"
      )));
    }
  }
  Ok(())
}

/// Drives a full harvest against one proceedings site.
///
/// Owns the discovery client, the artifact client, and the archiver. Every
/// paper in a year's listing is processed; there is no per-year limit.
///
/// # Examples
///
/// ```no_run
/// use proceedings::{Harvester, Site};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let harvester = Harvester::new(Site::papers_nips_cc(), "data")?;
/// let archived = harvester.run(2019, 2020).await?;
/// println!("Archived {archived} papers");
/// # Ok(())
/// # }
/// ```
pub struct Harvester {
  /// Discovery client for yearly listing pages.
  listing:   ListingClient,
  /// Artifact client for the per-paper fetch triple.
  resources: ResourceClient,
  /// Archive writer rooted at the output directory.
  archiver:  Archiver,
}

impl Harvester {
  /// Creates a harvester writing into an existing output directory.
  ///
  /// # Errors
  ///
  /// Returns [`ProceedingsError::MissingOutputDir`] if the output directory
  /// does not exist. It is never created here: pointing the harvester at a
  /// wrong path should fail loudly, not silently build a new tree.
  pub fn new(site: Site, output_dir: impl Into<PathBuf>) -> Result<Self, ProceedingsError> {
    let output_dir = output_dir.into();
    if !output_dir.is_dir() {
      return Err(ProceedingsError::MissingOutputDir(output_dir));
    }

    Ok(Self {
      listing:   ListingClient::new(site.clone()),
      resources: ResourceClient::new(site),
      archiver:  Archiver::new(output_dir),
    })
  }

  /// Harvests one year: discovery, then fetch-and-archive per paper.
  ///
  /// Returns the identifiers of the archived papers in listing order.
  ///
  /// # Errors
  ///
  /// Returns an error if the listing fetch fails or an archive write fails.
  /// Per-paper resource failures are not errors; they archive as empty
  /// artifacts (see [`crate::clients::resource`]).
  pub async fn harvest_year(&self, year: u16) -> Result<Vec<String>, ProceedingsError> {
    let listing = self.listing.papers_for_year(year).await?;

    let mut archived = Vec::with_capacity(listing.papers.len());
    for paper in &listing.papers {
      info!("Downloading {}", paper.id);

      let abstract_record = self.resources.fetch_abstract(&paper.abstract_url).await;
      let metadata = self.resources.fetch_metadata(&paper.metadata_url).await;
      let pdf = self.resources.fetch_pdf(&paper.pdf_url).await;

      self.archiver.save_paper(
        year,
        &paper.id,
        abstract_record.as_ref(),
        &metadata,
        pdf.as_deref(),
      )?;
      archived.push(paper.id.clone());
    }

    Ok(archived)
  }

  /// Harvests an inclusive year range in ascending order.
  ///
  /// Returns the total number of archived papers.
  ///
  /// # Errors
  ///
  /// Returns an error if the range fails validation or any year fails as
  /// described in [`Harvester::harvest_year`]. Years already harvested stay
  /// on disk; there is no rollback.
  pub async fn run(&self, start_year: u16, end_year: u16) -> Result<usize, ProceedingsError> {
    validate_years(start_year, Some(end_year))?;

    let mut total = 0;
    for year in start_year..=end_year {
      total += self.harvest_year(year).await?.len();
    }
    Ok(total)
  }
}
