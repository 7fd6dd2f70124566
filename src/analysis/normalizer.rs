//! The shared normalization policy.
//!
//! A raw token becomes a [`CanonicalWord`] by passing, in order:
//!
//! 1. [`ApostropheFilter`]: delete `'`, reject if nothing is left
//! 2. [`CharsetFilter`]: reject anything outside `[A-Za-z-]`
//! 3. [`LowercaseFilter`]: fold case
//! 4. [`RemoveEmptyFilter`]: drop rejected tokens
//!
//! # Examples
//!
//! ```
//! use wordmill::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::new();
//! let word = normalizer.normalize("Don't").unwrap().unwrap();
//! assert_eq!(word.as_str(), "dont");
//!
//! assert!(normalizer.normalize("hello!").unwrap().is_none());
//! ```

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{
    ApostropheFilter, CharsetFilter, Filter, LowercaseFilter, RemoveEmptyFilter,
};
use crate::error::Result;

/// A token that survived normalization.
///
/// Only ASCII lowercase letters and hyphens; ordered lexicographically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalWord(String);

impl CanonicalWord {
    /// Normalize `raw` with the standard pipeline.
    ///
    /// The standard filters never fail, so any error is reported as a rejection.
    pub fn parse(raw: &str) -> Option<Self> {
        Normalizer::new().normalize(raw).ok().flatten()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, hyphens included.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CanonicalWord {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A deduplicated, ordered set of canonical words.
pub type WordSet = BTreeSet<CanonicalWord>;

/// The outcome of normalizing a batch of raw tokens.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    /// Accepted words
    pub words: WordSet,
    /// Number of raw tokens fed in
    pub seen: usize,
    /// Number of raw tokens rejected by the policy
    pub rejected: usize,
}

/// Applies the word normalization pipeline.
#[derive(Clone)]
pub struct Normalizer {
    filters: Vec<Arc<dyn Filter>>,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field(
                "filters",
                &self.filters.iter().map(|x| x.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create the standard normalization pipeline.
    pub fn new() -> Self {
        Normalizer {
            filters: vec![
                Arc::new(ApostropheFilter::new()),
                Arc::new(CharsetFilter::new()),
                Arc::new(LowercaseFilter::new()),
                Arc::new(RemoveEmptyFilter::new()),
            ],
        }
    }

    /// Names of the filters in application order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    fn run(&self, mut tokens: TokenStream) -> Result<TokenStream> {
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    /// Normalize a single raw token. `Ok(None)` means the token was rejected.
    pub fn normalize(&self, raw: &str) -> Result<Option<CanonicalWord>> {
        let stream: TokenStream = Box::new(std::iter::once(Token::new(raw, 0)));
        Ok(self.run(stream)?.next().map(|token| CanonicalWord(token.text)))
    }

    /// Normalize every raw token of `raw`, collecting accepted words into a set.
    pub fn normalize_all<I, S>(&self, raw: I) -> Result<NormalizedBatch>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<Token> = raw
            .into_iter()
            .enumerate()
            .map(|(position, text)| Token::new(text, position))
            .collect();
        let seen = tokens.len();

        let mut accepted = 0;
        let words: WordSet = self
            .run(Box::new(tokens.into_iter()))?
            .inspect(|_| accepted += 1)
            .map(|token| CanonicalWord(token.text))
            .collect();

        Ok(NormalizedBatch {
            words,
            seen,
            rejected: seen - accepted,
        })
    }
}
