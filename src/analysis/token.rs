//! Token types flowing through the normalization pipeline.
//!
//! # Examples
//!
//! ```
//! use wordmill::analysis::token::Token;
//!
//! let token = Token::new("Hello", 0);
//! assert_eq!(token.text, "Hello");
//! assert!(!token.is_stopped());
//!
//! let rejected = token.stop();
//! assert!(rejected.is_stopped());
//! ```

use std::fmt;

/// A single raw or partially normalized word candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Position of the token in its input stream (0-based)
    pub position: usize,

    /// Whether a filter has rejected this token
    pub stopped: bool,
}

/// Stream of tokens passed between filters.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            stopped: false,
        }
    }

    /// Length of the token in characters.
    ///
    /// Word length limits are expressed in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as rejected.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Replace the text, keeping position and state.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 3);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 3);
        assert!(!token.is_stopped());
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(Token::new("well-known", 0).char_len(), 10);
        assert_eq!(Token::new("café", 0).char_len(), 4);
    }

    #[test]
    fn test_with_text_keeps_state() {
        let token = Token::new("Abc", 7).stop().with_text("abc");
        assert_eq!(token.text, "abc");
        assert_eq!(token.position, 7);
        assert!(token.is_stopped());
    }
}
