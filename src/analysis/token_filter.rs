//! Token filters that make up the normalization pipeline.
//!
//! - [`apostrophe::ApostropheFilter`] - Deletes apostrophes, rejects tokens left empty
//! - [`charset::CharsetFilter`] - Rejects tokens with characters outside the word alphabet
//! - [`lowercase::LowercaseFilter`] - Folds tokens to lowercase
//! - [`remove_empty::RemoveEmptyFilter`] - Drops rejected and empty tokens
//!
//! # Examples
//!
//! ```
//! use wordmill::analysis::token::Token;
//! use wordmill::analysis::token_filter::Filter;
//! use wordmill::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters reject a token by marking it stopped rather than removing it, so
/// later filters can skip it and [`RemoveEmptyFilter`] can drop it at the end.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod apostrophe;
pub mod charset;
pub mod lowercase;
pub mod remove_empty;

pub use apostrophe::ApostropheFilter;
pub use charset::CharsetFilter;
pub use lowercase::LowercaseFilter;
pub use remove_empty::RemoveEmptyFilter;
