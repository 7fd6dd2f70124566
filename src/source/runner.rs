//! External process execution.
//!
//! The SCOWL and wordfreq readers drive external tools. They do so through
//! [`CommandRunner`] so the process boundary can be replaced in tests.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

/// A command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub envs: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        CommandSpec {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            envs: Vec::new(),
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn env<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Name of the executable without its directory.
    pub fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output with the given stdout.
    pub fn success<S: Into<String>>(stdout: S) -> Self {
        CommandOutput {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and streams.
    pub fn failure<O: Into<String>, E: Into<String>>(code: i32, stdout: O, stderr: E) -> Self {
        CommandOutput {
            code: Some(code),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human readable failure report including both captured streams.
    pub fn failure_message(&self, command: &CommandSpec) -> String {
        let code = match self.code {
            Some(code) => code.to_string(),
            None => "signal".to_string(),
        };
        let mut message = format!("Command `{command}` failed with exit code {code}.");
        let output = [self.stdout.trim(), self.stderr.trim()]
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");
        if !output.is_empty() {
            message.push('\n');
            message.push_str(&output);
        }
        message
    }
}

/// Executes external commands.
///
/// Returns `Err` only when the process could not be started; a process that
/// ran and failed is reported through [`CommandOutput::code`].
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &CommandSpec) -> io::Result<CommandOutput>;
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> io::Result<CommandOutput> {
        debug!("Running `{command}`");
        let mut process = Command::new(&command.program);
        process.args(&command.args);
        if let Some(cwd) = &command.cwd {
            process.current_dir(cwd);
        }
        for (key, value) in &command.envs {
            process.env(key, value);
        }

        let output = process.output()?;
        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let command = CommandSpec::new("make").arg("scowl.db").current_dir("/tmp");
        assert_eq!(command.to_string(), "make scowl.db");
        assert_eq!(command.program_name(), "make");
    }

    #[test]
    fn test_failure_message_includes_streams() {
        let command = CommandSpec::new("make").arg("scowl.db");
        let output = CommandOutput::failure(2, "make out", "make err");
        let message = output.failure_message(&command);
        assert!(message.contains("exit code 2"));
        assert!(message.contains("make out"));
        assert!(message.contains("make err"));
    }

    #[test]
    fn test_failure_message_without_output() {
        let command = CommandSpec::new("scowl");
        let message = CommandOutput::failure(1, "", "  ").failure_message(&command);
        assert_eq!(message, "Command `scowl` failed with exit code 1.");
    }

    #[test]
    fn test_system_runner_reports_missing_program() {
        let command = CommandSpec::new("/nonexistent/definitely-not-a-program");
        assert!(SystemRunner.run(&command).is_err());
    }
}
