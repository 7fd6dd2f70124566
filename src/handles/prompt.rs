//! Asking the operator whether to reuse the Handles cache.

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::handles::cache::ReuseAnswer;

/// Source of reuse answers.
pub trait ReusePrompt {
    fn ask(&mut self, path: &Path, modified: &DateTime<Local>) -> Result<ReuseAnswer>;
}

/// The question shown to the operator.
pub fn prompt_text(path: &Path, modified: &DateTime<Local>) -> String {
    format!(
        "Cached Handles list found at {} (modified {}). Use cache? [Y/n] ",
        path.display(),
        modified.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Interpret a typed answer. Empty, `y` and `yes` mean reuse.
pub fn parse_answer(input: &str) -> ReuseAnswer {
    match input.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => ReuseAnswer::Reuse,
        _ => ReuseAnswer::Refresh,
    }
}

/// Prompts on a writer and reads the answer from a reader.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompt { input, output }
    }
}

/// Prompt on the terminal.
pub fn terminal_prompt() -> LinePrompt<io::StdinLock<'static>, io::Stdout> {
    LinePrompt::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> ReusePrompt for LinePrompt<R, W> {
    fn ask(&mut self, path: &Path, modified: &DateTime<Local>) -> Result<ReuseAnswer> {
        write!(self.output, "{}", prompt_text(path, modified))?;
        self.output.flush()?;

        let mut line = String::new();
        // End of input counts as the default answer.
        self.input.read_line(&mut line)?;
        Ok(parse_answer(&line))
    }
}

/// Always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub ReuseAnswer);

impl ReusePrompt for FixedAnswer {
    fn ask(&mut self, _path: &Path, _modified: &DateTime<Local>) -> Result<ReuseAnswer> {
        Ok(self.0)
    }
}
