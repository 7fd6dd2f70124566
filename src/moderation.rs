//! Screening handles against a protected-word list.
//!
//! The protected-word list is a JSON array of entries:
//!
//! ```json
//! [{"word": "zulu", "algorithms": ["hatespeech"], "position": "exact"}]
//! ```
//!
//! The raw JavaScript literal copied from a web page (`t.words = [{word:
//! 'zulu', ...}]`, with unquoted keys, single quotes, `!0`/`!1` booleans and
//! trailing commas) is accepted too and cleaned up before parsing.

use std::fmt;
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordmillError};

/// Default protected-word file.
pub const DEFAULT_PROTECTED_WORDS: &str = "t.words";

const HANDLE_PATTERN: &str = r"^[a-z0-9_.-]{1,15}$";
const SEGMENT_PATTERN: &str = r"([0-9a-z]+)[@_.-]*";

/// Where in a handle a protected word must occur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPosition {
    /// A whole segment equals the word
    #[default]
    Exact,
    /// The word, its singular or its plural occurs anywhere
    Any,
    /// A segment starts with the word
    BeginsWith,
    /// Unrecognized positions never match
    #[serde(other)]
    Unknown,
}

/// One entry of the protected-word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedWord {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub algorithms: Vec<String>,
    #[serde(default)]
    pub position: MatchPosition,
    #[serde(default)]
    pub exceptions: Vec<String>,
    #[serde(default, rename = "canBePositive")]
    pub can_be_positive: bool,
}

impl ProtectedWord {
    /// Entries that are only modifiers and may be positive are not screened.
    fn is_benign_modifier(&self) -> bool {
        self.can_be_positive && self.algorithms.len() == 1 && self.algorithms[0] == "modifier"
    }
}

fn regex(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| WordmillError::Anyhow(anyhow::Error::from(e)))
}

/// Turn a pasted JavaScript array literal into JSON.
pub fn clean_js_array(raw: &str) -> Result<String> {
    let prefix = regex(r"(?i)^\s*(?:t\.)?words\s*=\s*")?;
    let unquoted_key = regex(r"([\{,]\s*)(\w+)(\s*:)")?;
    let trailing_comma = regex(r",\s*([}\]])")?;

    let cleaned = prefix.replace(raw, "");
    let cleaned = cleaned.trim();
    if !(cleaned.starts_with('[') && cleaned.ends_with(']')) {
        return Err(WordmillError::parse(
            "protected words must be an array starting with [ and ending with ]",
        ));
    }

    let cleaned = unquoted_key.replace_all(cleaned, r#"${1}"${2}":"#);
    let cleaned = cleaned
        .replace('\'', "\"")
        .replace("!0", "true")
        .replace("!1", "false");
    let cleaned = trailing_comma.replace_all(&cleaned, "${1}");

    Ok(cleaned.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Parse a protected-word list, strict JSON or pasted JavaScript.
pub fn parse_protected_words(raw: &str) -> Result<Vec<ProtectedWord>> {
    if let Ok(words) = serde_json::from_str::<Vec<ProtectedWord>>(raw) {
        return Ok(words);
    }
    let cleaned = clean_js_array(raw)?;
    serde_json::from_str(&cleaned).map_err(|e| {
        let start = floor_char_boundary(&cleaned, e.column().saturating_sub(60));
        let end = floor_char_boundary(&cleaned, e.column() + 60);
        WordmillError::parse(format!(
            "could not parse protected words: {e}; around: {}...",
            &cleaned[start..end]
        ))
    })
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Load a protected-word list from disk.
pub fn load_protected_words<P: AsRef<Path>>(path: P) -> Result<Vec<ProtectedWord>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| WordmillError::io_at(path, e))?;
    parse_protected_words(raw.trim())
}

/// Naive English plural to singular.
pub fn singular(word: &str) -> String {
    if word.len() > 3 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
        if let Some(stem) = word.strip_suffix("ves") {
            return format!("{stem}f");
        }
        if word.ends_with('s') && !(word.ends_with("ss") || word.ends_with("us") || word.ends_with("is"))
        {
            return word[..word.len() - 1].to_string();
        }
    }
    word.to_string()
}

fn occurs_in(text: &str, word: &str) -> bool {
    let plural = if word.ends_with('s') {
        word.to_string()
    } else {
        format!("{word}s")
    };
    text.contains(word) || text.contains(&singular(word)) || text.contains(&plural)
}

/// Result of screening one handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    Ok,
    Invalid,
    Flagged { word: String, algorithms: Vec<String> },
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }

    pub fn reason(&self) -> String {
        match self {
            Verdict::Ok => "OK".to_string(),
            Verdict::Invalid => "Invalid format (1-15 chars, only a-z0-9_.-)".to_string(),
            Verdict::Flagged { word, algorithms } => {
                format!("Flagged: {word} ({})", algorithms.join(", "))
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason())
    }
}

/// A screened handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandleCheck {
    pub handle: String,
    pub verdict: Verdict,
}

/// Screens handles against protected words.
#[derive(Debug, Clone)]
pub struct HandleChecker {
    words: Vec<ProtectedWord>,
    handle_pattern: Regex,
    segment_pattern: Regex,
}

impl HandleChecker {
    pub fn new(words: Vec<ProtectedWord>) -> Result<Self> {
        Ok(HandleChecker {
            words,
            handle_pattern: regex(HANDLE_PATTERN)?,
            segment_pattern: regex(SEGMENT_PATTERN)?,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn segments(&self, handle: &str) -> Vec<String> {
        self.segment_pattern
            .captures_iter(handle)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Screen one handle. The first matching protected word flags it.
    pub fn check(&self, handle: &str) -> Verdict {
        let handle = handle.trim().to_lowercase();
        if !self.handle_pattern.is_match(&handle) {
            return Verdict::Invalid;
        }

        let segments = self.segments(&handle);
        let text = segments.join(" ");

        for entry in &self.words {
            let word = entry.word.to_lowercase();
            if word.is_empty() || entry.is_benign_modifier() {
                continue;
            }

            let matched = match entry.position {
                MatchPosition::Exact => segments.iter().any(|s| *s == word),
                MatchPosition::Any => occurs_in(&text, &word),
                MatchPosition::BeginsWith => segments.iter().any(|s| s.starts_with(&word)),
                MatchPosition::Unknown => false,
            };
            if !matched {
                continue;
            }

            let excepted = entry.exceptions.iter().any(|exception| {
                let exception = exception.to_lowercase();
                text.contains(&exception) || segments.iter().any(|s| *s == exception)
            });
            if excepted {
                continue;
            }

            return Verdict::Flagged {
                word,
                algorithms: entry.algorithms.clone(),
            };
        }

        Verdict::Ok
    }

    /// Screen every handle in order.
    pub fn check_all<I, S>(&self, handles: I) -> Vec<HandleCheck>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        handles
            .into_iter()
            .map(Into::into)
            .map(|handle| {
                let verdict = self.check(&handle);
                HandleCheck { handle, verdict }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, position: MatchPosition) -> ProtectedWord {
        ProtectedWord {
            word: word.to_string(),
            algorithms: vec!["suggestive".to_string()],
            position,
            exceptions: Vec::new(),
            can_be_positive: false,
        }
    }

    #[test]
    fn test_clean_js_array() {
        let raw = "t.words = [{\n  word: 'zulu',\n  algorithms: ['hatespeech'],\n  canBePositive: !0,\n}, ]";
        let words = parse_protected_words(raw).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "zulu");
        assert_eq!(words[0].algorithms, vec!["hatespeech"]);
        assert!(words[0].can_be_positive);
        assert_eq!(words[0].position, MatchPosition::Exact);
    }

    #[test]
    fn test_strict_json_and_positions() {
        let raw = r#"[{"word": "bad", "position": "beginswith"}, {"word": "x", "position": "middle"}]"#;
        let words = parse_protected_words(raw).unwrap();
        assert_eq!(words[0].position, MatchPosition::BeginsWith);
        assert_eq!(words[1].position, MatchPosition::Unknown);
    }

    #[test]
    fn test_not_an_array() {
        assert!(matches!(
            parse_protected_words("{word: 'x'}"),
            Err(WordmillError::Parse(_))
        ));
    }

    #[test]
    fn test_singular() {
        assert_eq!(singular("ponies"), "pony");
        assert_eq!(singular("wolves"), "wolf");
        assert_eq!(singular("cats"), "cat");
        assert_eq!(singular("glass"), "glass");
        assert_eq!(singular("bus"), "bus");
        assert_eq!(singular("axis"), "axis");
        assert_eq!(singular("has"), "has");
    }

    #[test]
    fn test_invalid_format() {
        let checker = HandleChecker::new(Vec::new()).unwrap();
        assert_eq!(checker.check("has space"), Verdict::Invalid);
        assert_eq!(checker.check("waytoolonghandle1"), Verdict::Invalid);
        assert_eq!(checker.check(""), Verdict::Invalid);
        assert_eq!(checker.check("  Fine_Name  "), Verdict::Ok);
    }

    #[test]
    fn test_exact_match() {
        let checker = HandleChecker::new(vec![entry("zulu", MatchPosition::Exact)]).unwrap();
        assert!(!checker.check("zulu").is_ok());
        assert!(!checker.check("big.zulu").is_ok());
        assert!(checker.check("zulus").is_ok());
    }

    #[test]
    fn test_any_match_with_plural() {
        let checker = HandleChecker::new(vec![entry("pony", MatchPosition::Any)]).unwrap();
        assert!(!checker.check("myponyclub").is_ok());
        assert!(!checker.check("ponys").is_ok());
        assert!(checker.check("pon").is_ok());
    }

    #[test]
    fn test_begins_with() {
        let checker = HandleChecker::new(vec![entry("bad", MatchPosition::BeginsWith)]).unwrap();
        assert!(!checker.check("the_badger").is_ok());
        assert!(checker.check("notbad").is_ok());
    }

    #[test]
    fn test_exceptions_cancel_match() {
        let mut word = entry("ass", MatchPosition::Any);
        word.exceptions = vec!["class".to_string()];
        let checker = HandleChecker::new(vec![word]).unwrap();
        assert!(checker.check("firstclass").is_ok());
        assert!(!checker.check("badass").is_ok());
    }

    #[test]
    fn test_benign_modifier_is_skipped() {
        let mut word = entry("big", MatchPosition::Exact);
        word.algorithms = vec!["modifier".to_string()];
        word.can_be_positive = true;
        let checker = HandleChecker::new(vec![word]).unwrap();
        assert!(checker.check("big").is_ok());
    }

    #[test]
    fn test_flag_reason() {
        let checker = HandleChecker::new(vec![entry("zulu", MatchPosition::Exact)]).unwrap();
        let results = checker.check_all(["zulu", "alpha"]);
        assert_eq!(results[0].verdict.reason(), "Flagged: zulu (suggestive)");
        assert_eq!(results[1].verdict, Verdict::Ok);
    }
}
