//! On-disk archive layout for harvested papers.
//!
//! Every paper is archived under `<root>/<year>/<paper_id>/` as three fixed
//! filenames: `<paper_id>_abstract.json`, `<paper_id>_metadata.json`, and
//! `<paper_id>.pdf`. Artifacts are overwritten on re-run; nothing is ever
//! deleted or deduplicated.

use std::fs;
use std::io::Write;

use serde_json::ser::PrettyFormatter;
use serde_json::Map;

use super::*;

/// Writes harvested artifacts into a per-year, per-paper directory tree.
///
/// The archive root must already exist; paper directories beneath it are
/// created on demand. JSON artifacts are pretty-printed with a 4-space
/// indent to match the archive's established on-disk format.
pub struct Archiver {
  /// Directory the year/paper tree is rooted at.
  root: PathBuf,
}

impl Archiver {
  /// Creates an archiver rooted at the given output directory.
  pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

  /// Archives one paper's artifact triple.
  ///
  /// Ensures `<root>/<year>/<paper_id>` exists (idempotent), then writes the
  /// abstract record and metadata document as pretty-printed JSON. A fetch
  /// that came back empty is written as `{}`. An absent PDF payload skips
  /// the `.pdf` file with a logged warning instead of writing nothing-bytes.
  ///
  /// Returns the paper's archive directory.
  ///
  /// # Errors
  ///
  /// Returns an error if directory creation, serialization, or any file
  /// write fails.
  pub fn save_paper(
    &self,
    year: u16,
    paper_id: &str,
    abstract_record: Option<&AbstractRecord>,
    metadata: &Value,
    pdf: Option<&[u8]>,
  ) -> Result<PathBuf, ProceedingsError> {
    let dir = self.root.join(year.to_string()).join(paper_id);
    fs::create_dir_all(&dir)?;

    match abstract_record {
      Some(record) => write_json(&dir.join(format!("{paper_id}_abstract.json")), record)?,
      None => write_json(&dir.join(format!("{paper_id}_abstract.json")), &empty_object())?,
    }
    write_json(&dir.join(format!("{paper_id}_metadata.json")), metadata)?;

    match pdf {
      Some(bytes) => fs::write(dir.join(format!("{paper_id}.pdf")), bytes)?,
      None => warn!("No PDF payload for {paper_id}, skipping {paper_id}.pdf"),
    }

    debug!("Archived {paper_id} into {}", dir.display());
    Ok(dir)
  }
}

/// An empty JSON object, the sentinel for failed fetches.
fn empty_object() -> Value { Value::Object(Map::new()) }

/// Serializes a value as pretty-printed JSON with a 4-space indent.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ProceedingsError> {
  let file = fs::File::create(path)?;
  let mut writer = std::io::BufWriter::new(file);
  let mut serializer =
    serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
  value.serialize(&mut serializer)?;
  writer.flush()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  fn sample_record() -> AbstractRecord {
    AbstractRecord {
      title:         "Learning To Learn".to_string(),
      authors:       vec!["Ada Lovelace".to_string()],
      abstract_text: "We study machine learning.".to_string(),
    }
  }

  #[test]
  fn test_save_paper_writes_the_triple() {
    let root = tempdir().unwrap();
    let archiver = Archiver::new(root.path());
    let metadata: Value = serde_json::from_str(r#"{"sourceid": 5714}"#).unwrap();

    let dir = archiver
      .save_paper(2020, "1234", Some(&sample_record()), &metadata, Some(b"%PDF-1.4"))
      .unwrap();

    assert_eq!(dir, root.path().join("2020").join("1234"));
    let written: AbstractRecord =
      serde_json::from_str(&fs::read_to_string(dir.join("1234_abstract.json")).unwrap()).unwrap();
    assert_eq!(written, sample_record());
    let metadata_text = fs::read_to_string(dir.join("1234_metadata.json")).unwrap();
    assert!(metadata_text.contains("\"sourceid\": 5714"));
    assert_eq!(fs::read(dir.join("1234.pdf")).unwrap(), b"%PDF-1.4");
  }

  #[test]
  fn test_save_paper_uses_four_space_indent() {
    let root = tempdir().unwrap();
    let archiver = Archiver::new(root.path());

    let dir = archiver
      .save_paper(2020, "1234", Some(&sample_record()), &empty_object(), None)
      .unwrap();

    let text = fs::read_to_string(dir.join("1234_abstract.json")).unwrap();
    assert!(text.contains("\n    \"title\""));
  }

  #[test]
  fn test_empty_fetches_are_archived_as_empty_objects() {
    let root = tempdir().unwrap();
    let archiver = Archiver::new(root.path());

    let dir = archiver.save_paper(2020, "1234", None, &empty_object(), None).unwrap();

    assert_eq!(fs::read_to_string(dir.join("1234_abstract.json")).unwrap(), "{}");
    assert_eq!(fs::read_to_string(dir.join("1234_metadata.json")).unwrap(), "{}");
  }

  #[test]
  fn test_absent_pdf_skips_the_file() {
    let root = tempdir().unwrap();
    let archiver = Archiver::new(root.path());

    let dir =
      archiver.save_paper(2020, "1234", Some(&sample_record()), &empty_object(), None).unwrap();
    assert!(!dir.join("1234.pdf").exists());
  }

  #[test]
  fn test_save_paper_is_idempotent_and_overwrites() {
    let root = tempdir().unwrap();
    let archiver = Archiver::new(root.path());

    archiver.save_paper(2020, "1234", None, &empty_object(), Some(b"old")).unwrap();
    let dir = archiver
      .save_paper(2020, "1234", Some(&sample_record()), &empty_object(), Some(b"new"))
      .unwrap();

    assert_eq!(fs::read(dir.join("1234.pdf")).unwrap(), b"new");
    let written: AbstractRecord =
      serde_json::from_str(&fs::read_to_string(dir.join("1234_abstract.json")).unwrap()).unwrap();
    assert_eq!(written.title, "Learning To Learn");
  }
}
