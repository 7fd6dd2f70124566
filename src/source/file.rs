//! Newline-delimited word list reader.

use std::path::PathBuf;

use log::debug;

use crate::error::Result;
use crate::source::RawTokens;
use crate::storage;

/// User-supplied word lists, read together as one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    paths: Vec<PathBuf>,
}

impl FileSource {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        FileSource {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Read every file; blank lines are ignored and surrounding whitespace trimmed.
    pub fn read(&self) -> Result<RawTokens> {
        let mut raw = RawTokens::default();
        for path in &self.paths {
            let lines = storage::read_lines_lossy(path)?;
            debug!("Read {} lines from {}", lines.len(), path.display());
            raw.tokens.extend(lines);
        }
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordmillError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.txt");
        fs::write(&path, "alpha\n\nbeta\n").unwrap();

        let raw = FileSource::new([&path]).read().unwrap();
        assert_eq!(raw.tokens, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_reads_several_files() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("a.txt");
        let second = temp_dir.path().join("b.txt");
        fs::write(&first, "alpha\n").unwrap();
        fs::write(&second, "  beta  \r\n").unwrap();

        let raw = FileSource::new([&first, &second]).read().unwrap();
        assert_eq!(raw.tokens, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_unreadable_path_fails() {
        let err = FileSource::new(["/nonexistent/list.txt"]).read().unwrap_err();
        assert!(matches!(err, WordmillError::IoAt { .. }));
    }
}
