use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::utils::validation::exceeds_list_limit;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid list format: {0}")]
    InvalidFormat(String),

    #[error("Too many entries: {0} exceeds maximum allowed (10000)")]
    TooManyEntries(usize),
}

/// Layout of a list file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// One string per line
    Lines,
    /// A JSON array of strings
    Json,
}

impl ListFormat {
    /// Pick a layout from the file extension; anything but `.json` is read as lines
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("json") => Self::Json,
            _ => Self::Lines,
        }
    }
}

/// Read a list of strings from a file, or from stdin when `path` is `-`
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_list_file(path: &Path) -> Result<Vec<String>, ParseError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return parse_list_text(&buffer, ListFormat::Lines);
    }

    let content = std::fs::read_to_string(path)?;
    parse_list_text(&content, ListFormat::from_path(path))
}

/// Parse a list of strings from text in the given layout
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a JSON list is malformed, or
/// `ParseError::TooManyEntries` if the limit is exceeded.
pub fn parse_list_text(text: &str, format: ListFormat) -> Result<Vec<String>, ParseError> {
    let entries = match format {
        ListFormat::Lines => text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>(),
        ListFormat::Json => serde_json::from_str::<Vec<String>>(text).map_err(|e| {
            ParseError::InvalidFormat(format!("Expected a JSON array of strings: {e}"))
        })?,
    };

    // Check entry limit for DOS protection
    if exceeds_list_limit(entries.len()) {
        return Err(ParseError::TooManyEntries(entries.len()));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::MAX_LIST_ENTRIES;

    #[test]
    fn test_parse_lines() {
        let text = "Revenue 2023\r\nTotal cost\n\n   \nNet margin\n";
        let list = parse_list_text(text, ListFormat::Lines).unwrap();
        assert_eq!(list, ["Revenue 2023", "Total cost", "Net margin"]);
    }

    #[test]
    fn test_parse_lines_keeps_inner_whitespace() {
        let list = parse_list_text("  padded  \n", ListFormat::Lines).unwrap();
        assert_eq!(list, ["  padded  "]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_list_text("", ListFormat::Lines).unwrap().is_empty());
        assert!(parse_list_text("[]", ListFormat::Json).unwrap().is_empty());
    }

    #[test]
    fn test_parse_json() {
        let list = parse_list_text(r#"["a b", "", "c\nd"]"#, ListFormat::Json).unwrap();
        assert_eq!(list, ["a b", "", "c\nd"]);
    }

    #[test]
    fn test_parse_json_rejects_non_strings() {
        let err = parse_list_text("[1, 2]", ListFormat::Json).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
        assert!(parse_list_text(r#"{"a": 1}"#, ListFormat::Json).is_err());
    }

    #[test]
    fn test_entry_limit() {
        let text = "x\n".repeat(MAX_LIST_ENTRIES);
        assert_eq!(parse_list_text(&text, ListFormat::Lines).unwrap().len(), MAX_LIST_ENTRIES);

        let text = "x\n".repeat(MAX_LIST_ENTRIES + 1);
        assert!(matches!(
            parse_list_text(&text, ListFormat::Lines),
            Err(ParseError::TooManyEntries(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ListFormat::from_path(Path::new("labels.JSON")), ListFormat::Json);
        assert_eq!(ListFormat::from_path(Path::new("labels.txt")), ListFormat::Lines);
        assert_eq!(ListFormat::from_path(Path::new("labels")), ListFormat::Lines);
    }
}
