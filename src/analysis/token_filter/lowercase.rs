//! Case folding step of the normalizer.
//!
//! Runs after [`CharsetFilter`](super::CharsetFilter), so accepted tokens are
//! pure ASCII and ASCII folding is all that is needed. Hyphens pass through
//! unchanged.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Folds accepted tokens to lowercase in place. Rejected tokens keep their
/// text so callers can still report what was read.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }

    fn fold(mut token: Token) -> Token {
        if !token.is_stopped() && token.text.bytes().any(|b| b.is_ascii_uppercase()) {
            token.text.make_ascii_lowercase();
        }
        token
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(Self::fold)))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
