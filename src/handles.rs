//! Comparing a word list against the Handles universe.
//!
//! The Handles set comes from a local export file and is cached at
//! [`DEFAULT_CACHE_PATH`](cache::DEFAULT_CACHE_PATH). A run reports the
//! candidate words that are not Handles yet ("unminted"), shortest first.
//!
//! ```text
//! Absent ──compute──▶ Cached ──reuse──▶ Cached
//!                       │  ▲
//!                       └──┘ refresh (recompute + overwrite)
//! ```

use std::path::{Path, PathBuf};

use chrono::{Duration, Local};
use log::info;
use serde::Serialize;

use crate::analysis::normalizer::{CanonicalWord, Normalizer, WordSet};
use crate::error::{Result, WordmillError};
use crate::source::FileSource;
use crate::storage;
use crate::wordlist::{DEFAULT_MAX_LEN, OutputList, sorted_by_length, validate_max_len};

pub mod cache;
pub mod prompt;

pub use cache::{CacheDecision, CacheStatus, HandlesCache, ReuseAnswer, ReusePolicy, decide};
pub use prompt::{FixedAnswer, LinePrompt, ReusePrompt};

/// Default candidate word list.
pub const DEFAULT_WORDLIST: &str = "wordlist.txt";

/// Default report path.
pub const DEFAULT_UNMINTED_OUTPUT: &str = "unminted_handles.txt";

/// Settings of a Handles comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlesConfig {
    /// Candidate word list
    pub wordlist: PathBuf,
    /// Local Handles export, needed whenever the cache must be (re)computed
    pub export: Option<PathBuf>,
    pub cache: HandlesCache,
    pub max_len: usize,
    pub output: PathBuf,
    /// Answer given up front; `None` asks the operator
    pub answer: Option<ReuseAnswer>,
    pub policy: ReusePolicy,
}

impl HandlesConfig {
    pub fn new<P: Into<PathBuf>>(wordlist: P) -> Self {
        HandlesConfig {
            wordlist: wordlist.into(),
            export: None,
            cache: HandlesCache::default(),
            max_len: DEFAULT_MAX_LEN,
            output: PathBuf::from(DEFAULT_UNMINTED_OUTPUT),
            answer: None,
            policy: ReusePolicy::default(),
        }
    }

    pub fn with_export<P: Into<PathBuf>>(mut self, export: P) -> Self {
        self.export = Some(export.into());
        self
    }

    pub fn with_cache_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.cache = HandlesCache::new(path);
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Result<Self> {
        self.max_len = validate_max_len(max_len)?;
        Ok(self)
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_answer(mut self, answer: ReuseAnswer) -> Self {
        self.answer = Some(answer);
        self
    }

    pub fn with_max_age_hours(mut self, hours: u64) -> Result<Self> {
        let hours = i64::try_from(hours)
            .map_err(|_| WordmillError::config(format!("max-cache-age {hours} is too large")))?;
        let max_age = Duration::try_hours(hours)
            .ok_or_else(|| WordmillError::config(format!("max-cache-age {hours} is too large")))?;
        self.policy = ReusePolicy::with_max_age(max_age);
        Ok(self)
    }
}

/// Where the Handles set of a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlesOrigin {
    Cache,
    Export,
}

/// Outcome of a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub candidates: usize,
    pub handles: usize,
    pub origin: HandlesOrigin,
    pub unminted: usize,
    pub output: PathBuf,
}

/// Candidate words that are not Handles, ordered by (length, word).
pub fn unminted(candidates: &WordSet, handles: &WordSet) -> Vec<CanonicalWord> {
    sorted_by_length(candidates.difference(handles))
}

/// Runs Handles comparisons.
#[derive(Debug, Clone, Default)]
pub struct HandlesComparator {
    normalizer: Normalizer,
}

impl HandlesComparator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the candidate list, normalized and length bounded.
    pub fn load_candidates(&self, path: &Path, max_len: usize) -> Result<WordSet> {
        let raw = FileSource::new([path]).read()?;
        let batch = self.normalizer.normalize_all(raw.tokens)?;
        Ok(OutputList::from_words(batch.words, max_len)
            .words()
            .iter()
            .cloned()
            .collect())
    }

    /// Compute the Handles set from the export and store it in the cache.
    fn compute(&self, config: &HandlesConfig) -> Result<WordSet> {
        let export = config.export.as_ref().ok_or_else(|| {
            WordmillError::config(format!(
                "no usable Handles cache at {} and no Handles export given (--handles)",
                config.cache.path().display()
            ))
        })?;
        let lines = storage::read_lines_lossy(export)?;
        let handles = self.normalizer.normalize_all(lines)?.words;
        config.cache.store(&handles)?;
        info!(
            "Cached {} Handles at {}",
            handles.len(),
            config.cache.path().display()
        );
        Ok(handles)
    }

    /// Obtain the Handles set, reusing the cache when the decision allows.
    pub fn resolve_handles(
        &self,
        config: &HandlesConfig,
        prompt: &mut dyn ReusePrompt,
    ) -> Result<(WordSet, HandlesOrigin)> {
        let cached = config.cache.load(&self.normalizer);
        let status = match &cached {
            Some((_, modified)) => CacheStatus::Present {
                modified: *modified,
            },
            None => CacheStatus::Absent,
        };

        let now = Local::now();
        let mut decision = decide(&status, now, &config.policy, config.answer);
        if decision == CacheDecision::Ask
            && let CacheStatus::Present { modified } = &status
        {
            let answer = prompt.ask(config.cache.path(), modified)?;
            decision = decide(&status, now, &config.policy, Some(answer));
        }

        match (decision, cached) {
            (CacheDecision::Reuse, Some((handles, _))) => {
                info!("Reusing Handles cache {}", config.cache.path().display());
                Ok((handles, HandlesOrigin::Cache))
            }
            _ => Ok((self.compute(config)?, HandlesOrigin::Export)),
        }
    }

    /// Compare the candidate list against the Handles set and write the report.
    pub fn run(&self, config: &HandlesConfig, prompt: &mut dyn ReusePrompt) -> Result<CompareReport> {
        let candidates = self.load_candidates(&config.wordlist, config.max_len)?;
        let (handles, origin) = self.resolve_handles(config, prompt)?;

        let missing = unminted(&candidates, &handles);
        storage::write_lines_atomic(&config.output, missing.iter().map(|word| word.as_str()))?;
        info!(
            "{} of {} candidates are not Handles; wrote {}",
            missing.len(),
            candidates.len(),
            config.output.display()
        );

        Ok(CompareReport {
            candidates: candidates.len(),
            handles: handles.len(),
            origin,
            unminted: missing.len(),
            output: config.output.clone(),
        })
    }
}
