//! Word alphabet filter.
//!
//! Accepts tokens made only of ASCII letters and hyphens. Hyphens are not
//! trimmed, and a token made only of hyphens passes.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Whether `c` may appear in a canonical word.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-'
}

/// A filter that rejects tokens containing characters outside `[A-Za-z-]`.
#[derive(Clone, Debug, Default)]
pub struct CharsetFilter;

impl CharsetFilter {
    /// Create a new charset filter.
    pub fn new() -> Self {
        CharsetFilter
    }
}

impl Filter for CharsetFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() || (!token.is_empty() && token.text.chars().all(is_word_char))
                {
                    token
                } else {
                    token.stop()
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "charset"
    }
}
