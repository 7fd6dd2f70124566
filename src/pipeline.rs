//! Word list build orchestration.
//!
//! A run reads every configured source, combines the resulting sets, applies
//! the length bound and writes the sorted list. Sources are independent and
//! are read in parallel; the result does not depend on their order. Output is
//! written only after every source has been read successfully.

use std::path::PathBuf;
use std::sync::Arc;

use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::normalizer::Normalizer;
use crate::combine::{CombineMode, combine};
use crate::error::Result;
use crate::source::runner::{CommandRunner, SystemRunner};
use crate::source::{RecordParseWarning, SourceKind, SourceSet};
use crate::wordlist::OutputList;

pub mod config;

pub use config::{PipelineConfig, PipelineConfigBuilder};

/// Per-source figures of a run.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub kind: SourceKind,
    pub words: usize,
    pub seen: usize,
    pub rejected: usize,
    pub warnings: usize,
}

impl From<&SourceSet> for SourceSummary {
    fn from(set: &SourceSet) -> Self {
        SourceSummary {
            kind: set.kind,
            words: set.len(),
            seen: set.seen,
            rejected: set.rejected,
            warnings: set.warnings.len(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub sources: Vec<SourceSummary>,
    pub mode: CombineMode,
    pub combined: usize,
    pub max_len: usize,
    pub written: usize,
    pub output: PathBuf,
    pub warnings: Vec<RecordParseWarning>,
}

/// The computed list and the source sets it came from.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub list: OutputList,
    pub sets: Vec<SourceSet>,
    /// Size of the combined set before the length bound
    pub combined: usize,
}

/// Runs word list builds.
#[derive(Clone)]
pub struct Pipeline {
    normalizer: Normalizer,
    runner: Arc<dyn CommandRunner>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("normalizer", &self.normalizer)
            .field("runner", &"<CommandRunner>")
            .finish()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Pipeline that runs external tools as child processes.
    pub fn new() -> Self {
        Self::with_runner(Arc::new(SystemRunner))
    }

    pub fn with_runner(runner: Arc<dyn CommandRunner>) -> Self {
        Pipeline {
            normalizer: Normalizer::new(),
            runner,
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Read and normalize every source. The first fatal error aborts.
    pub fn collect_sources(&self, config: &PipelineConfig) -> Result<Vec<SourceSet>> {
        let runner = self.runner.as_ref();
        config
            .sources
            .par_iter()
            .map(|source| source.produce(&self.normalizer, runner))
            .collect()
    }

    /// Compute the output list without writing it.
    pub fn build(&self, config: &PipelineConfig) -> Result<BuildOutcome> {
        let sets = self.collect_sources(config)?;
        let combined = combine(sets.iter().map(|set| &set.words), config.mode);
        info!(
            "Combined {} sources by {}: {} words",
            sets.len(),
            config.mode,
            combined.len()
        );
        Ok(BuildOutcome {
            combined: combined.len(),
            list: OutputList::from_words(combined, config.max_len),
            sets,
        })
    }

    /// Build the list and write it to the configured output.
    pub fn run(&self, config: &PipelineConfig) -> Result<RunReport> {
        let BuildOutcome {
            list,
            sets,
            combined,
        } = self.build(config)?;

        list.write_to(&config.output)?;
        info!("Wrote {} words to {}", list.len(), config.output.display());

        let warnings: Vec<RecordParseWarning> = sets
            .iter()
            .flat_map(|set| set.warnings.iter().cloned())
            .collect();
        for warning in &warnings {
            warn!("Skipped malformed record {warning}");
        }
        if !warnings.is_empty() {
            warn!("{} malformed records skipped", warnings.len());
        }

        Ok(RunReport {
            sources: sets.iter().map(SourceSummary::from).collect(),
            mode: config.mode,
            combined,
            max_len: config.max_len,
            written: list.len(),
            output: config.output.clone(),
            warnings,
        })
    }
}
