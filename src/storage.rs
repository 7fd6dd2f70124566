//! Plain-text artifact storage.
//!
//! Word lists and the Handles cache are newline-delimited text files. Writes
//! are staged in a temporary file next to the destination and renamed into
//! place, so an interrupted run leaves the previous file intact.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use tempfile::NamedTempFile;

use crate::error::{Result, WordmillError};

/// Atomically replace `path` with one line per item.
///
/// Every line, including the last, is newline-terminated. Missing parent
/// directories are created.
pub fn write_lines_atomic<P, I, S>(path: P, lines: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| WordmillError::io_at(parent_dir, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| WordmillError::io_at(parent_dir, e))?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        for line in lines {
            writer.write_all(line.as_ref().as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;

    temp_file
        .persist(path)
        .map_err(|e| WordmillError::io_at(path, e.error))?;
    Ok(())
}

/// Read the trimmed, non-blank lines of a text file.
///
/// Invalid UTF-8 sequences are replaced rather than rejected, matching how
/// word lists from arbitrary sources are consumed.
pub fn read_lines_lossy<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| WordmillError::io_at(path, e))?;
    Ok(non_blank_lines(&String::from_utf8_lossy(&bytes)))
}

/// Trimmed, non-blank lines of `text`.
pub fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Last modification time of `path`, or `None` if it does not exist.
pub fn modified_time<P: AsRef<Path>>(path: P) -> Result<Option<DateTime<Local>>> {
    let path = path.as_ref();
    match File::open(path).and_then(|f| f.metadata()) {
        Ok(metadata) => {
            let modified = metadata.modified().map_err(|e| WordmillError::io_at(path, e))?;
            Ok(Some(DateTime::<Local>::from(modified)))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(WordmillError::io_at(path, e)),
    }
}
