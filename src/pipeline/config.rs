//! Resolved configuration of a word list build.

use std::path::{Path, PathBuf};

use crate::combine::CombineMode;
use crate::error::Result;
use crate::source::frequency::DEFAULT_PYTHON;
use crate::source::scowl::DEFAULT_SCOWL_SIZE;
use crate::source::{
    FileSource, FrequencyTier, ScowlDictionary, ScowlQuery, ScowlSource, WiktextractSource,
    WordSource, WordfreqSource,
};
use crate::wordlist::{DEFAULT_MAX_LEN, validate_max_len};

/// Default SCOWL source tree.
pub const DEFAULT_SCOWL_DIR: &str = "sources/scowl";

/// Default output path.
pub const DEFAULT_OUTPUT: &str = "wordlist.txt";

/// Everything a pipeline run needs. Built through [`PipelineConfig::builder`],
/// which validates every value before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub sources: Vec<WordSource>,
    pub mode: CombineMode,
    pub max_len: usize,
    pub output: PathBuf,
}

impl PipelineConfig {
    /// Create a new builder for PipelineConfig.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }
}

#[derive(Debug, Clone)]
struct ScowlSettings {
    dir: PathBuf,
    size: u8,
    no_word_filter: bool,
}

/// Builder for [`PipelineConfig`].
///
/// Defaults mirror the command line: SCOWL at size 70 with its word filter,
/// the `best` wordfreq tier, intersection mode, `max_len` 15.
#[derive(Debug, Clone)]
pub struct PipelineConfigBuilder {
    scowl: Option<ScowlSettings>,
    wordfreq: Option<(PathBuf, FrequencyTier)>,
    wordlists: Vec<PathBuf>,
    wiktextract: Option<PathBuf>,
    mode: CombineMode,
    max_len: usize,
    output: PathBuf,
}

impl Default for PipelineConfigBuilder {
    fn default() -> Self {
        PipelineConfigBuilder {
            scowl: Some(ScowlSettings {
                dir: PathBuf::from(DEFAULT_SCOWL_DIR),
                size: DEFAULT_SCOWL_SIZE,
                no_word_filter: false,
            }),
            wordfreq: Some((PathBuf::from(DEFAULT_PYTHON), FrequencyTier::default())),
            wordlists: Vec::new(),
            wiktextract: None,
            mode: CombineMode::default(),
            max_len: DEFAULT_MAX_LEN,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl PipelineConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with no sources enabled.
    pub fn empty() -> Self {
        PipelineConfigBuilder {
            scowl: None,
            wordfreq: None,
            ..Self::default()
        }
    }

    /// Use the SCOWL tree at `dir`.
    pub fn scowl<P: Into<PathBuf>>(mut self, dir: P, size: u8, no_word_filter: bool) -> Self {
        self.scowl = Some(ScowlSettings {
            dir: dir.into(),
            size,
            no_word_filter,
        });
        self
    }

    pub fn without_scowl(mut self) -> Self {
        self.scowl = None;
        self
    }

    /// Export the wordfreq `tier` with the given interpreter.
    pub fn wordfreq<P: Into<PathBuf>>(mut self, python: P, tier: FrequencyTier) -> Self {
        self.wordfreq = Some((python.into(), tier));
        self
    }

    pub fn without_wordfreq(mut self) -> Self {
        self.wordfreq = None;
        self
    }

    /// Add a newline-delimited word list.
    pub fn wordlist<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.wordlists.push(path.into());
        self
    }

    pub fn wiktextract<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.wiktextract = Some(path.into());
        self
    }

    pub fn mode(mut self, mode: CombineMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn output<P: AsRef<Path>>(mut self, output: P) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }

    /// Validate settings and resolve the source list.
    pub fn build(self) -> Result<PipelineConfig> {
        let max_len = validate_max_len(self.max_len)?;

        let mut sources = Vec::new();
        if let Some(scowl) = self.scowl {
            let query = ScowlQuery::new(scowl.size, scowl.no_word_filter)?;
            sources.push(WordSource::Scowl(ScowlSource::new(
                ScowlDictionary::new(scowl.dir),
                query,
            )));
        }
        if !self.wordlists.is_empty() {
            sources.push(WordSource::WordList(FileSource::new(self.wordlists)));
        }
        if let Some(path) = self.wiktextract {
            sources.push(WordSource::Wiktextract(WiktextractSource::new(path)));
        }
        if let Some((python, tier)) = self.wordfreq {
            sources.push(WordSource::Frequency(WordfreqSource::new(python, tier)));
        }

        Ok(PipelineConfig {
            sources,
            mode: self.mode,
            max_len,
            output: self.output,
        })
    }
}
