//! Last step of the normalizer: only accepted words leave it.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Drops rejected tokens and any token whose text ended up empty.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(
            tokens.filter(|token| !(token.is_stopped() || token.is_empty())),
        ))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
