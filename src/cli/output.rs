//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{OutputFormat, WordmillArgs};
use crate::error::Result;
use crate::handles::CompareReport;
use crate::moderation::HandleCheck;
use crate::pipeline::RunReport;

/// Result structure for handle screening.
#[derive(Debug, Serialize)]
pub struct CheckHandlesResult {
    pub protected_words: usize,
    pub checked: usize,
    pub flagged: usize,
    pub invalid: usize,
    pub results: Vec<HandleCheck>,
}

/// Types that have a human-readable rendering.
pub trait HumanOutput: Serialize {
    fn print_human(&self, args: &WordmillArgs) -> Result<()> {
        output_generic_human(&serde_json::to_value(self)?, args)
    }
}

impl HumanOutput for RunReport {
    fn print_human(&self, args: &WordmillArgs) -> Result<()> {
        println!("Word list: {}", self.output.display());
        println!("═══════════");
        for source in &self.sources {
            println!(
                "{:<16} {:>8} words ({} read, {} rejected)",
                source.kind.to_string(),
                source.words,
                source.seen,
                source.rejected
            );
        }
        println!();
        println!("Combined ({}): {}", self.mode, self.combined);
        println!("Written (max length {}): {}", self.max_len, self.written);

        if !self.warnings.is_empty() {
            println!("Skipped records: {}", self.warnings.len());
            if args.verbosity() > 1 {
                for warning in &self.warnings {
                    println!("  {warning}");
                }
            }
        }
        Ok(())
    }
}

impl HumanOutput for CompareReport {}

impl CheckHandlesResult {
    /// Write the result table, one row per handle.
    pub fn write_table<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{:<20} {:<10} REASON", "HANDLE", "STATUS")?;
        writeln!(out, "{}", "-".repeat(60))?;
        for result in &self.results {
            let status = if result.verdict.is_ok() { "OK" } else { "FLAGGED" };
            writeln!(out, "{:<20} {:<10} {}", result.handle, status, result.verdict)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Checked {} handles against {} protected words: {} flagged, {} invalid",
            self.checked, self.protected_words, self.flagged, self.invalid
        )?;
        Ok(())
    }
}

impl HumanOutput for CheckHandlesResult {
    fn print_human(&self, _args: &WordmillArgs) -> Result<()> {
        self.write_table(&mut io::stdout().lock())
    }
}

/// Output a result in the specified format.
pub fn output_result<T: HumanOutput>(message: &str, result: &T, args: &WordmillArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &WordmillArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }
    result.print_human(args)
}

/// Generic key/value output.
fn output_generic_human(value: &serde_json::Value, _args: &WordmillArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordmillArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::Verdict;
    use serde_json::json;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("x")), "x");
        assert_eq!(format_value(&json!(3)), "3");
        assert_eq!(format_value(&json!(["a", 1])), "[a, 1]");
        assert_eq!(format_value(&json!({"k": 1})), "[object]");
        assert_eq!(format_value(&json!(null)), "null");
    }

    fn sample_check_result() -> CheckHandlesResult {
        CheckHandlesResult {
            protected_words: 1,
            checked: 3,
            flagged: 1,
            invalid: 1,
            results: vec![
                HandleCheck {
                    handle: "zulu".to_string(),
                    verdict: Verdict::Flagged {
                        word: "zulu".to_string(),
                        algorithms: vec!["hatespeech".to_string()],
                    },
                },
                HandleCheck {
                    handle: "alpha".to_string(),
                    verdict: Verdict::Ok,
                },
                HandleCheck {
                    handle: "has space".to_string(),
                    verdict: Verdict::Invalid,
                },
            ],
        }
    }

    #[test]
    fn test_check_result_serializes_verdicts() {
        let value = serde_json::to_value(sample_check_result()).unwrap();
        assert_eq!(value["results"][0]["verdict"]["status"], "flagged");
        assert_eq!(value["results"][0]["verdict"]["word"], "zulu");
        assert_eq!(value["results"][1]["verdict"]["status"], "ok");
        assert_eq!(value["results"][2]["verdict"]["status"], "invalid");
    }

    #[test]
    fn test_check_table_rows() {
        let mut out = Vec::new();
        sample_check_result().write_table(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], format!("{:<20} {:<10} REASON", "HANDLE", "STATUS"));
        assert_eq!(lines[1], "-".repeat(60));
        assert_eq!(
            lines[2],
            format!("{:<20} {:<10} Flagged: zulu (hatespeech)", "zulu", "FLAGGED")
        );
        assert_eq!(lines[3], format!("{:<20} {:<10} OK", "alpha", "OK"));
        assert!(lines[4].starts_with("has space"));
        assert!(lines[4].contains("FLAGGED"));
        assert!(lines[4].ends_with("Invalid format (1-15 chars, only a-z0-9_.-)"));
        assert_eq!(
            lines[6],
            "Checked 3 handles against 1 protected words: 1 flagged, 1 invalid"
        );
        assert!(!text.contains("BLOCKED"));
    }
}
