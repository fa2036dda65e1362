//! Text normalization helpers for scraped page content.

/// Collapses every internal whitespace run to a single space.
///
/// Abstract paragraphs arrive with the source document's line wrapping and
/// indentation intact; archived records store them as a single line. The
/// operation is idempotent and trims leading and trailing whitespace.
///
/// # Examples
///
/// ```
/// use proceedings::format;
///
/// assert_eq!(format::collapse_whitespace("two\n  words"), "two words");
/// assert_eq!(format::collapse_whitespace("  already flat "), "already flat");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
  text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("a  b\tc\nd"), "a b c d");
    assert_eq!(collapse_whitespace("  leading and trailing  "), "leading and trailing");
    assert_eq!(collapse_whitespace(""), "");
    assert_eq!(collapse_whitespace("single"), "single");
  }

  #[test]
  fn test_collapse_whitespace_is_idempotent() {
    let messy = " An  abstract\n\twith \u{a0}broken\n lines ";
    let once = collapse_whitespace(messy);
    assert_eq!(collapse_whitespace(&once), once);
  }
}
