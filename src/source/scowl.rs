//! SCOWL dictionary reader.
//!
//! The dictionary lives in a SCOWL source tree. Its queryable database,
//! `scowl.db`, is built once with `make scowl.db` the first time it is
//! needed; word lists are then produced by the tree's `scowl` script:
//!
//! ```text
//! scowl --db scowl.db word-list <size> A 5 [--no-word-filter]
//! ```
//!
//! `scowl.db.built` marks a database whose build ran to completion.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{debug, info, warn};

use crate::error::{Result, WordmillError};
use crate::source::RawTokens;
use crate::source::runner::{CommandRunner, CommandSpec};
use crate::storage;

/// Default SCOWL size.
pub const DEFAULT_SCOWL_SIZE: u8 = 70;
/// Smallest accepted SCOWL size.
pub const MIN_SCOWL_SIZE: u8 = 35;
/// Largest accepted SCOWL size.
pub const MAX_SCOWL_SIZE: u8 = 95;

const SCOWL_CLASS: &str = "A";
const SCOWL_VARIANT: &str = "5";
const DB_FILE: &str = "scowl.db";
const SCRIPT_FILE: &str = "scowl";
const BUILT_MARKER_FILE: &str = "scowl.db.built";

/// Handle to a SCOWL source tree and its derived database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScowlDictionary {
    dir: PathBuf,
}

impl ScowlDictionary {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        ScowlDictionary { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn script_path(&self) -> PathBuf {
        self.dir.join(SCRIPT_FILE)
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.join(DB_FILE)
    }

    /// Marker written once `make scowl.db` has completed.
    pub fn marker_path(&self) -> PathBuf {
        self.dir.join(BUILT_MARKER_FILE)
    }

    /// Whether a completed database is present.
    pub fn is_built(&self) -> bool {
        self.db_path().exists() && self.marker_path().exists()
    }

    /// Build `scowl.db` unless a completed build is already present.
    ///
    /// A database without the completion marker is treated as the leftover of
    /// an interrupted build and rebuilt. A failed build removes whatever
    /// `make` left behind.
    pub fn ensure_built(&self, runner: &dyn CommandRunner) -> Result<PathBuf> {
        let db_path = self.db_path();
        if self.is_built() {
            debug!("SCOWL database present at {}", db_path.display());
            return Ok(db_path);
        }
        if db_path.exists() {
            warn!(
                "Discarding incomplete SCOWL database {}",
                db_path.display()
            );
        }
        self.discard_build()?;

        info!("Building SCOWL database in {}", self.dir.display());
        let command = CommandSpec::new("make").arg(DB_FILE).current_dir(&self.dir);
        let outcome = match runner.run(&command) {
            Err(e) => Err(WordmillError::build(format!("Could not run `{command}`: {e}"))),
            Ok(output) if !output.is_success() => {
                Err(WordmillError::build(output.failure_message(&command)))
            }
            Ok(_) if !db_path.exists() => Err(WordmillError::build(format!(
                "`{command}` succeeded but {} was not created",
                db_path.display()
            ))),
            Ok(_) => Ok(()),
        };
        if let Err(e) = outcome {
            self.discard_build()?;
            return Err(e);
        }

        storage::write_lines_atomic(self.marker_path(), [Local::now().to_rfc3339()])?;
        Ok(db_path)
    }

    /// Remove the database and its marker, if present.
    fn discard_build(&self) -> Result<()> {
        for path in [self.marker_path(), self.db_path()] {
            match fs::remove_file(&path) {
                Ok(()) => debug!("Removed {}", path.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(WordmillError::io_at(&path, e)),
            }
        }
        Ok(())
    }

    /// List the words admitted by `query`.
    pub fn word_list(&self, runner: &dyn CommandRunner, query: &ScowlQuery) -> Result<Vec<String>> {
        let script = self.script_path();
        if !script.exists() {
            return Err(WordmillError::build(format!(
                "scowl script not found at {}",
                script.display()
            )));
        }
        let db_path = self.ensure_built(runner)?;

        let command = CommandSpec::new(script)
            .arg("--db")
            .arg(db_path.to_string_lossy())
            .args(query.args())
            .current_dir(&self.dir);
        let output = runner
            .run(&command)
            .map_err(|e| WordmillError::build(format!("Could not run `{command}`: {e}")))?;
        if !output.is_success() {
            return Err(WordmillError::build(output.failure_message(&command)));
        }

        Ok(output.stdout.lines().map(str::to_string).collect())
    }
}

/// Parameters of a SCOWL word-list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScowlQuery {
    size: u8,
    no_word_filter: bool,
}

impl ScowlQuery {
    /// Create a query, rejecting sizes outside 35..=95.
    pub fn new(size: u8, no_word_filter: bool) -> Result<Self> {
        if !(MIN_SCOWL_SIZE..=MAX_SCOWL_SIZE).contains(&size) {
            return Err(WordmillError::config(format!(
                "scowl-size must be between {MIN_SCOWL_SIZE} and {MAX_SCOWL_SIZE}, got {size}"
            )));
        }
        Ok(ScowlQuery {
            size,
            no_word_filter,
        })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn no_word_filter(&self) -> bool {
        self.no_word_filter
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "word-list".to_string(),
            self.size.to_string(),
            SCOWL_CLASS.to_string(),
            SCOWL_VARIANT.to_string(),
        ];
        if self.no_word_filter {
            args.push("--no-word-filter".to_string());
        }
        args
    }
}

impl Default for ScowlQuery {
    fn default() -> Self {
        ScowlQuery {
            size: DEFAULT_SCOWL_SIZE,
            no_word_filter: false,
        }
    }
}

/// The SCOWL word source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScowlSource {
    pub dictionary: ScowlDictionary,
    pub query: ScowlQuery,
}

impl ScowlSource {
    pub fn new(dictionary: ScowlDictionary, query: ScowlQuery) -> Self {
        ScowlSource { dictionary, query }
    }

    pub fn read(&self, runner: &dyn CommandRunner) -> Result<RawTokens> {
        let tokens = self
            .dictionary
            .word_list(runner, &self.query)?
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        Ok(RawTokens::new(tokens))
    }
}
