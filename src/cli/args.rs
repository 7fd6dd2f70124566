//! Command line argument parsing for wordmill using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::combine::CombineMode;
use crate::error::{Result, WordmillError};
use crate::handles::cache::DEFAULT_CACHE_PATH;
use crate::handles::{DEFAULT_UNMINTED_OUTPUT, DEFAULT_WORDLIST, HandlesConfig, ReuseAnswer};
use crate::moderation::DEFAULT_PROTECTED_WORDS;
use crate::pipeline::config::{DEFAULT_OUTPUT, DEFAULT_SCOWL_DIR};
use crate::pipeline::{PipelineConfig, PipelineConfigBuilder};
use crate::source::FrequencyTier;
use crate::source::frequency::DEFAULT_PYTHON;
use crate::source::scowl::DEFAULT_SCOWL_SIZE;
use crate::wordlist::DEFAULT_MAX_LEN;

/// Wordmill - build curated English word lists
#[derive(Parser, Debug, Clone)]
#[command(name = "wordmill")]
#[command(about = "Build curated, length-bounded English word lists")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordmillArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordmillArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a word list from the configured sources
    Build(BuildArgs),

    /// Report candidate words that are not Handles yet
    #[command(name = "compare-handles")]
    CompareHandles(CompareHandlesArgs),

    /// Screen handles against a protected-word list
    #[command(name = "check-handles")]
    CheckHandles(CheckHandlesArgs),
}

/// Arguments for building a word list
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Extra newline-delimited word lists
    #[arg(value_name = "LIST")]
    pub lists: Vec<PathBuf>,

    /// Do not use wordfreq
    #[arg(long)]
    pub wordfreq_disabled: bool,

    /// wordfreq list tier
    #[arg(long, value_enum, default_value_t = FrequencyTier::Best)]
    pub wordfreq_list: FrequencyTier,

    /// Combine sources by union instead of intersection
    #[arg(long)]
    pub no_intersection: bool,

    /// SCOWL size (35-95)
    #[arg(long, default_value_t = DEFAULT_SCOWL_SIZE)]
    pub scowl_size: u8,

    /// Pass --no-word-filter to SCOWL
    #[arg(long)]
    pub scowl_no_filter: bool,

    /// Do not use SCOWL
    #[arg(long)]
    pub no_scowl: bool,

    /// SCOWL checkout directory
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SCOWL_DIR)]
    pub scowl_dir: PathBuf,

    /// Python interpreter used to export wordfreq
    #[arg(long, value_name = "PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: PathBuf,

    /// Maximum word length
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// Newline-delimited word list (repeatable)
    #[arg(long = "wordlist", value_name = "FILE")]
    pub wordlists: Vec<PathBuf>,

    /// wiktextract JSONL dump
    #[arg(long, value_name = "FILE")]
    pub wiktextract_jsonl: Option<PathBuf>,

    /// Output file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub out: PathBuf,
}

impl BuildArgs {
    pub fn mode(&self) -> CombineMode {
        if self.no_intersection {
            CombineMode::Union
        } else {
            CombineMode::Intersection
        }
    }
}

impl TryFrom<&BuildArgs> for PipelineConfig {
    type Error = WordmillError;

    fn try_from(args: &BuildArgs) -> Result<Self> {
        let mut builder = PipelineConfigBuilder::empty()
            .mode(args.mode())
            .max_len(args.max_len)
            .output(&args.out);
        if !args.no_scowl {
            builder = builder.scowl(&args.scowl_dir, args.scowl_size, args.scowl_no_filter);
        }
        if !args.wordfreq_disabled {
            builder = builder.wordfreq(&args.python, args.wordfreq_list);
        }
        for path in args.wordlists.iter().chain(&args.lists) {
            builder = builder.wordlist(path);
        }
        if let Some(path) = &args.wiktextract_jsonl {
            builder = builder.wiktextract(path);
        }
        builder.build()
    }
}

/// Arguments for comparing a word list against Handles
#[derive(Parser, Debug, Clone)]
pub struct CompareHandlesArgs {
    /// Candidate word list
    #[arg(long, value_name = "FILE", default_value = DEFAULT_WORDLIST)]
    pub wordlist: PathBuf,

    /// Local Handles export, one handle per line
    #[arg(long, value_name = "FILE")]
    pub handles: Option<PathBuf>,

    /// Handles cache location
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CACHE_PATH)]
    pub cache_path: PathBuf,

    /// Maximum word length
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// Report file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_UNMINTED_OUTPUT)]
    pub out: PathBuf,

    /// Reuse an existing cache without asking
    #[arg(long, conflicts_with = "refresh_cache")]
    pub reuse_cache: bool,

    /// Recompute the cache without asking
    #[arg(long)]
    pub refresh_cache: bool,

    /// Refresh caches older than this many hours without asking
    #[arg(long, value_name = "HOURS")]
    pub max_cache_age: Option<u64>,
}

impl CompareHandlesArgs {
    /// Answer given on the command line, if any.
    pub fn answer(&self) -> Option<ReuseAnswer> {
        if self.reuse_cache {
            Some(ReuseAnswer::Reuse)
        } else if self.refresh_cache {
            Some(ReuseAnswer::Refresh)
        } else {
            None
        }
    }
}

impl TryFrom<&CompareHandlesArgs> for HandlesConfig {
    type Error = WordmillError;

    fn try_from(args: &CompareHandlesArgs) -> Result<Self> {
        let mut config = HandlesConfig::new(&args.wordlist)
            .with_cache_path(&args.cache_path)
            .with_output(&args.out)
            .with_max_len(args.max_len)?;
        if let Some(export) = &args.handles {
            config = config.with_export(export);
        }
        if let Some(answer) = args.answer() {
            config = config.with_answer(answer);
        }
        if let Some(hours) = args.max_cache_age {
            config = config.with_max_age_hours(hours)?;
        }
        Ok(config)
    }
}

/// Arguments for screening handles
#[derive(Parser, Debug, Clone)]
pub struct CheckHandlesArgs {
    /// File with one handle per line
    #[arg(value_name = "HANDLES_FILE")]
    pub handles_file: PathBuf,

    /// Protected-word list (JSON or pasted JavaScript array)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_PROTECTED_WORDS)]
    pub protected: PathBuf,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SourceKind, WordSource};

    fn build_args(extra: &[&str]) -> BuildArgs {
        let mut argv = vec!["wordmill", "build"];
        argv.extend_from_slice(extra);
        let args = WordmillArgs::try_parse_from(argv).unwrap();
        if let Command::Build(build_args) = args.command {
            build_args
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_build_defaults() {
        let args = build_args(&[]);
        assert_eq!(args.scowl_size, 70);
        assert_eq!(args.max_len, 15);
        assert_eq!(args.wordfreq_list, FrequencyTier::Best);
        assert_eq!(args.out, PathBuf::from("wordlist.txt"));
        assert_eq!(args.mode(), CombineMode::Intersection);

        let config = PipelineConfig::try_from(&args).unwrap();
        let kinds: Vec<SourceKind> = config.sources.iter().map(WordSource::kind).collect();
        assert_eq!(
            kinds,
            vec![SourceKind::Scowl, SourceKind::Wordfreq(FrequencyTier::Best)]
        );
    }

    #[test]
    fn test_build_command() {
        let args = build_args(&[
            "--wordfreq-disabled",
            "--no-scowl",
            "--no-intersection",
            "--wordlist",
            "a.txt",
            "--wordlist",
            "b.txt",
            "c.txt",
            "--wiktextract-jsonl",
            "dump.jsonl",
            "--max-len",
            "8",
            "-o",
            "out.txt",
        ]);
        assert_eq!(args.wordlists, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(args.lists, vec![PathBuf::from("c.txt")]);

        let config = PipelineConfig::try_from(&args).unwrap();
        assert_eq!(config.mode, CombineMode::Union);
        assert_eq!(config.max_len, 8);
        assert_eq!(config.output, PathBuf::from("out.txt"));
        let kinds: Vec<SourceKind> = config.sources.iter().map(WordSource::kind).collect();
        assert_eq!(kinds, vec![SourceKind::WordList, SourceKind::Wiktextract]);
    }

    #[test]
    fn test_invalid_build_settings_are_config_errors() {
        let args = build_args(&["--scowl-size", "20"]);
        let err = PipelineConfig::try_from(&args).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let args = build_args(&["--max-len", "0"]);
        assert!(matches!(
            PipelineConfig::try_from(&args),
            Err(WordmillError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_tier_is_rejected() {
        assert!(WordmillArgs::try_parse_from(["wordmill", "build", "--wordfreq-list", "huge"]).is_err());
    }

    #[test]
    fn test_compare_handles_command() {
        let args = WordmillArgs::try_parse_from([
            "wordmill",
            "compare-handles",
            "--handles",
            "export.txt",
            "--refresh-cache",
            "--max-cache-age",
            "12",
        ])
        .unwrap();

        if let Command::CompareHandles(compare_args) = args.command {
            assert_eq!(compare_args.wordlist, PathBuf::from("wordlist.txt"));
            assert_eq!(compare_args.cache_path, PathBuf::from(".cache/handles.txt"));
            assert_eq!(compare_args.answer(), Some(ReuseAnswer::Refresh));

            let config = HandlesConfig::try_from(&compare_args).unwrap();
            assert_eq!(config.export, Some(PathBuf::from("export.txt")));
            assert_eq!(config.answer, Some(ReuseAnswer::Refresh));
            assert!(config.policy.max_age.is_some());
        } else {
            panic!("Expected CompareHandles command");
        }
    }

    #[test]
    fn test_reuse_and_refresh_conflict() {
        let result = WordmillArgs::try_parse_from([
            "wordmill",
            "compare-handles",
            "--reuse-cache",
            "--refresh-cache",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_handles_command() {
        let args =
            WordmillArgs::try_parse_from(["wordmill", "check-handles", "handles.txt"]).unwrap();
        if let Command::CheckHandles(check_args) = args.command {
            assert_eq!(check_args.handles_file, PathBuf::from("handles.txt"));
            assert_eq!(check_args.protected, PathBuf::from("t.words"));
        } else {
            panic!("Expected CheckHandles command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = WordmillArgs::try_parse_from(["wordmill", "build"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = WordmillArgs::try_parse_from(["wordmill", "-vv", "build"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = WordmillArgs::try_parse_from(["wordmill", "--quiet", "build"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = WordmillArgs::try_parse_from(["wordmill", "--format", "json", "build"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
