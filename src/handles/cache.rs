//! The persisted Handles set and the reuse decision.
//!
//! The cache is a newline-delimited file of canonical words. Its
//! modification time is what the operator sees when asked whether to reuse
//! it. Reusing never writes the file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Local};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{Normalizer, WordSet};
use crate::error::Result;
use crate::storage;

/// Default cache location.
pub const DEFAULT_CACHE_PATH: &str = ".cache/handles.txt";

/// Whether a usable cache exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    Absent,
    Present { modified: DateTime<Local> },
}

/// The caller's answer to "reuse the cache?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReuseAnswer {
    Reuse,
    Refresh,
}

/// What to do about the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDecision {
    /// No cache: compute the Handles set and store it
    Compute,
    /// Use the cached set as-is
    Reuse,
    /// Recompute and overwrite the cache
    Refresh,
    /// An answer from the operator is needed
    Ask,
}

/// Limits applied before asking the operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReusePolicy {
    /// Caches older than this are refreshed without asking
    pub max_age: Option<Duration>,
}

impl ReusePolicy {
    pub fn with_max_age(max_age: Duration) -> Self {
        ReusePolicy {
            max_age: Some(max_age),
        }
    }
}

/// Decide what to do with the cache.
///
/// Pure: the same status, time, policy and answer always give the same
/// decision. `answer` is `None` when the operator has not been asked yet.
pub fn decide(
    status: &CacheStatus,
    now: DateTime<Local>,
    policy: &ReusePolicy,
    answer: Option<ReuseAnswer>,
) -> CacheDecision {
    let modified = match status {
        CacheStatus::Absent => return CacheDecision::Compute,
        CacheStatus::Present { modified } => *modified,
    };

    if let Some(max_age) = policy.max_age
        && now.signed_duration_since(modified) > max_age
    {
        return CacheDecision::Refresh;
    }

    match answer {
        Some(ReuseAnswer::Reuse) => CacheDecision::Reuse,
        Some(ReuseAnswer::Refresh) => CacheDecision::Refresh,
        None => CacheDecision::Ask,
    }
}

/// Handle to the cache file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlesCache {
    path: PathBuf,
}

impl Default for HandlesCache {
    fn default() -> Self {
        HandlesCache::new(DEFAULT_CACHE_PATH)
    }
}

impl HandlesCache {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        HandlesCache { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached set with its modification time.
    ///
    /// A missing, unreadable or corrupt (non UTF-8) cache yields `None`.
    pub fn load(&self, normalizer: &Normalizer) -> Option<(WordSet, DateTime<Local>)> {
        let modified = match storage::modified_time(&self.path) {
            Ok(Some(modified)) => modified,
            Ok(None) => {
                debug!("No Handles cache at {}", self.path.display());
                return None;
            }
            Err(e) => {
                warn!("Ignoring Handles cache: {e}");
                return None;
            }
        };

        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "Ignoring unreadable Handles cache {}: {e}",
                    self.path.display()
                );
                return None;
            }
        };

        match normalizer.normalize_all(storage::non_blank_lines(&text)) {
            Ok(batch) => Some((batch.words, modified)),
            Err(e) => {
                warn!("Ignoring Handles cache {}: {e}", self.path.display());
                None
            }
        }
    }

    /// Replace the cache atomically.
    pub fn store(&self, handles: &WordSet) -> Result<()> {
        storage::write_lines_atomic(&self.path, handles.iter().map(|word| word.as_str()))
    }
}
