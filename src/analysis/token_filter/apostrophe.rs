//! Apostrophe removal filter.
//!
//! Apostrophes are deleted, not replaced, so `"don't"` becomes `"dont"`.
//! A token that is empty once its apostrophes are gone is rejected.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// The character deleted by [`ApostropheFilter`].
pub const APOSTROPHE: char = '\'';

/// A filter that deletes apostrophes from tokens.
#[derive(Clone, Debug, Default)]
pub struct ApostropheFilter;

impl ApostropheFilter {
    /// Create a new apostrophe filter.
    pub fn new() -> Self {
        ApostropheFilter
    }
}

impl Filter for ApostropheFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                let stripped: String = token.text.chars().filter(|&c| c != APOSTROPHE).collect();
                if stripped.is_empty() {
                    token.with_text(stripped).stop()
                } else {
                    token.with_text(stripped)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "apostrophe"
    }
}
