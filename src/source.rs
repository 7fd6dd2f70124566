//! Word sources.
//!
//! Every source produces a [`SourceSet`]: the normalized, deduplicated words
//! it contributes. The kinds of source form a closed set, [`WordSource`],
//! chosen by configuration:
//!
//! - [`file::FileSource`] - user-supplied newline-delimited lists
//! - [`scowl::ScowlSource`] - the SCOWL dictionary
//! - [`frequency::WordfreqSource`] - a wordfreq frequency tier
//! - [`wiktextract::WiktextractSource`] - English headwords from a wiktextract dump

use std::fmt;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{Normalizer, WordSet};
use crate::error::Result;
use crate::source::runner::CommandRunner;

pub mod file;
pub mod frequency;
pub mod runner;
pub mod scowl;
pub mod wiktextract;

pub use file::FileSource;
pub use frequency::WordfreqSource;
pub use scowl::{ScowlDictionary, ScowlQuery, ScowlSource};
pub use wiktextract::WiktextractSource;

/// wordfreq list tiers, narrowest first.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyTier {
    Small,
    #[default]
    Best,
    Large,
}

impl FrequencyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyTier::Small => "small",
            FrequencyTier::Best => "best",
            FrequencyTier::Large => "large",
        }
    }
}

impl fmt::Display for FrequencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Origin of a source set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Scowl,
    Wordfreq(FrequencyTier),
    Wiktextract,
    WordList,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Scowl => write!(f, "scowl"),
            SourceKind::Wordfreq(tier) => write!(f, "wordfreq-{tier}"),
            SourceKind::Wiktextract => write!(f, "wiktextract"),
            SourceKind::WordList => write!(f, "wordlist"),
        }
    }
}

/// A record that could not be parsed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordParseWarning {
    /// File the record came from
    pub source: String,
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

impl fmt::Display for RecordParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.source, self.line, self.message)
    }
}

/// Raw tokens read from a source, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTokens {
    pub tokens: Vec<String>,
    pub warnings: Vec<RecordParseWarning>,
}

impl RawTokens {
    pub fn new(tokens: Vec<String>) -> Self {
        RawTokens {
            tokens,
            warnings: Vec::new(),
        }
    }
}

/// The normalized words contributed by one source.
///
/// Never contains a token that failed normalization.
#[derive(Debug, Clone)]
pub struct SourceSet {
    pub kind: SourceKind,
    pub words: WordSet,
    /// Raw tokens read
    pub seen: usize,
    /// Raw tokens rejected by normalization
    pub rejected: usize,
    pub warnings: Vec<RecordParseWarning>,
}

impl SourceSet {
    /// Normalize raw tokens into a source set.
    pub fn from_raw(kind: SourceKind, raw: RawTokens, normalizer: &Normalizer) -> Result<Self> {
        let batch = normalizer.normalize_all(raw.tokens)?;
        Ok(SourceSet {
            kind,
            words: batch.words,
            seen: batch.seen,
            rejected: batch.rejected,
            warnings: raw.warnings,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A configured word source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    WordList(FileSource),
    Scowl(ScowlSource),
    Frequency(WordfreqSource),
    Wiktextract(WiktextractSource),
}

impl WordSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            WordSource::WordList(_) => SourceKind::WordList,
            WordSource::Scowl(_) => SourceKind::Scowl,
            WordSource::Frequency(source) => SourceKind::Wordfreq(source.tier()),
            WordSource::Wiktextract(_) => SourceKind::Wiktextract,
        }
    }

    /// Read and normalize this source.
    pub fn produce(&self, normalizer: &Normalizer, runner: &dyn CommandRunner) -> Result<SourceSet> {
        let raw = match self {
            WordSource::WordList(source) => source.read()?,
            WordSource::Scowl(source) => source.read(runner)?,
            WordSource::Frequency(source) => source.read(runner)?,
            WordSource::Wiktextract(source) => source.read()?,
        };
        let set = SourceSet::from_raw(self.kind(), raw, normalizer)?;
        debug!(
            "Source {}: {} words from {} tokens ({} rejected)",
            set.kind,
            set.len(),
            set.seen,
            set.rejected
        );
        Ok(set)
    }
}
