//! wordfreq frequency-tier reader.
//!
//! Tiers are exported from the Python `wordfreq` package, which must be
//! installed for the configured interpreter. The export script exits with
//! [`MISSING_PACKAGE_EXIT_CODE`] when the package cannot be imported.

use std::io;
use std::path::PathBuf;

use log::info;

use crate::error::{Result, WordmillError};
use crate::source::{FrequencyTier, RawTokens};
use crate::source::runner::{CommandRunner, CommandSpec};

/// Default interpreter used for the export.
pub const DEFAULT_PYTHON: &str = "python3";

/// Exit code of the export script when `wordfreq` is not importable.
pub const MISSING_PACKAGE_EXIT_CODE: i32 = 3;

const EXPORT_SCRIPT: &str = r#"import sys
try:
    from wordfreq import iter_wordlist
except ImportError:
    sys.exit(3)
for word in iter_wordlist("en", wordlist=sys.argv[1]):
    print(word)
"#;

/// The wordfreq word source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordfreqSource {
    python: PathBuf,
    tier: FrequencyTier,
}

impl WordfreqSource {
    pub fn new<P: Into<PathBuf>>(python: P, tier: FrequencyTier) -> Self {
        WordfreqSource {
            python: python.into(),
            tier,
        }
    }

    pub fn tier(&self) -> FrequencyTier {
        self.tier
    }

    fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.python)
            .arg("-c")
            .arg(EXPORT_SCRIPT)
            .arg(self.tier.as_str())
            .env("PYTHONIOENCODING", "utf-8")
    }

    pub fn read(&self, runner: &dyn CommandRunner) -> Result<RawTokens> {
        info!("Exporting wordfreq '{}' list", self.tier);
        let command = self.command();
        let output = runner.run(&command).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => WordmillError::dependency_missing(format!(
                "Python interpreter `{}` not found; wordfreq needs it",
                self.python.display()
            )),
            _ => WordmillError::dependency_missing(format!(
                "Could not run `{}`: {e}",
                self.python.display()
            )),
        })?;

        match output.code {
            Some(0) => {}
            Some(MISSING_PACKAGE_EXIT_CODE) => {
                return Err(WordmillError::dependency_missing(format!(
                    "wordfreq is not installed for `{}`. Try: pip install wordfreq",
                    self.python.display()
                )));
            }
            _ => {
                return Err(WordmillError::other(format!(
                    "wordfreq export failed: {}",
                    output.failure_message(&command)
                )));
            }
        }

        let tokens = output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(RawTokens::new(tokens))
    }
}
