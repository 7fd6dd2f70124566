//! Command implementations for wordmill CLI.

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::handles::prompt::terminal_prompt;
use crate::handles::{HandlesComparator, HandlesConfig};
use crate::moderation::{HandleChecker, Verdict, load_protected_words};
use crate::pipeline::{Pipeline, PipelineConfig};
use crate::storage;

/// Execute a CLI command.
pub fn execute_command(args: WordmillArgs) -> Result<()> {
    match &args.command {
        Command::Build(build_args) => build_wordlist(build_args, &args),
        Command::CompareHandles(compare_args) => compare_handles(compare_args, &args),
        Command::CheckHandles(check_args) => check_handles(check_args, &args),
    }
}

/// Build a word list.
fn build_wordlist(args: &BuildArgs, cli_args: &WordmillArgs) -> Result<()> {
    let config = PipelineConfig::try_from(args)?;
    info!(
        "Building {} from {} sources ({})",
        config.output.display(),
        config.sources.len(),
        config.mode
    );

    let report = Pipeline::new().run(&config)?;
    output_result("Word list built", &report, cli_args)
}

/// Compare a word list against the Handles set.
fn compare_handles(args: &CompareHandlesArgs, cli_args: &WordmillArgs) -> Result<()> {
    let config = HandlesConfig::try_from(args)?;
    let mut prompt = terminal_prompt();

    let report = HandlesComparator::new().run(&config, &mut prompt)?;
    output_result("Handles compared", &report, cli_args)
}

/// Screen handles against protected words.
fn check_handles(args: &CheckHandlesArgs, cli_args: &WordmillArgs) -> Result<()> {
    let words = load_protected_words(&args.protected)?;
    info!(
        "Loaded {} protected words from {}",
        words.len(),
        args.protected.display()
    );
    let checker = HandleChecker::new(words)?;

    let handles = storage::read_lines_lossy(&args.handles_file)?;
    let results = checker.check_all(handles);

    let result = CheckHandlesResult {
        protected_words: checker.len(),
        checked: results.len(),
        flagged: results
            .iter()
            .filter(|r| matches!(r.verdict, Verdict::Flagged { .. }))
            .count(),
        invalid: results
            .iter()
            .filter(|r| r.verdict == Verdict::Invalid)
            .count(),
        results,
    };
    output_result("Handles checked", &result, cli_args)
}
