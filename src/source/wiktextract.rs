//! Reader for wiktextract JSON lines dumps.
//!
//! Each line holds one JSON object. English entries contribute their
//! headword:
//!
//! ```jsonl
//! {"word": "cool", "lang": "English", "pos": "adj"}
//! {"word": "cool", "lang": "French", "pos": "adj"}
//! ```
//!
//! A line that is not a JSON object produces a [`RecordParseWarning`] and is
//! skipped; the rest of the dump is still read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, WordmillError};
use crate::source::{RawTokens, RecordParseWarning};

/// Language tag of the entries kept.
pub const ENGLISH: &str = "English";

/// The wiktextract word source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiktextractSource {
    path: PathBuf,
}

impl WiktextractSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        WiktextractSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<RawTokens> {
        let file = File::open(&self.path).map_err(|e| WordmillError::io_at(&self.path, e))?;
        let reader = BufReader::new(file);
        let origin = self.path.display().to_string();

        let mut raw = RawTokens::default();
        for (line_num, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|e| WordmillError::io_at(&self.path, e))?;
            let line = String::from_utf8_lossy(&line);
            match parse_record(&line) {
                Ok(Some(word)) => raw.tokens.push(word),
                Ok(None) => {}
                Err(message) => raw.warnings.push(RecordParseWarning {
                    source: origin.clone(),
                    line: line_num + 1,
                    message,
                }),
            }
        }
        Ok(raw)
    }
}

/// Extract the English headword of one dump line.
///
/// Blank lines, other languages and records without a string headword yield
/// `Ok(None)`; lines that are not JSON objects yield `Err`.
pub fn parse_record(line: &str) -> std::result::Result<Option<String>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let value: Value =
        serde_json::from_str(line).map_err(|e| format!("Failed to parse JSON: {e}"))?;
    let Value::Object(record) = value else {
        return Err("record is not a JSON object".to_string());
    };

    if record.get("lang").and_then(Value::as_str) != Some(ENGLISH) {
        return Ok(None);
    }
    match record.get("word").and_then(Value::as_str) {
        Some(word) if !word.is_empty() => Ok(Some(word.to_string())),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_record() {
        assert_eq!(
            parse_record(r#"{"lang": "English", "word": "cool"}"#),
            Ok(Some("cool".to_string()))
        );
        assert_eq!(parse_record(r#"{"lang": "French", "word": "cool"}"#), Ok(None));
        assert_eq!(parse_record(r#"{"lang": "English", "word": ""}"#), Ok(None));
        assert_eq!(parse_record(r#"{"lang": "English", "word": 5}"#), Ok(None));
        assert_eq!(parse_record(r#"{"word": "cool"}"#), Ok(None));
        assert_eq!(parse_record("   "), Ok(None));
        assert!(parse_record("not json").is_err());
        assert!(parse_record("[1, 2]").is_err());
    }

    #[test]
    fn test_read_dump_filters_language_and_warns() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"lang": "English", "word": "cool"}}"#).unwrap();
        writeln!(file, r#"{{"lang": "French", "word": "froid"}}"#).unwrap();
        writeln!(file, "not json").unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"lang": "English", "word": "Don't"}}"#).unwrap();

        let raw = WiktextractSource::new(file.path()).read().unwrap();

        assert_eq!(raw.tokens, vec!["cool", "Don't"]);
        assert_eq!(raw.warnings.len(), 1);
        assert_eq!(raw.warnings[0].line, 3);
    }

    #[test]
    fn test_missing_dump_is_io_error() {
        let err = WiktextractSource::new("/nonexistent/dump.jsonl").read().unwrap_err();
        assert!(matches!(err, WordmillError::IoAt { .. }));
    }
}
