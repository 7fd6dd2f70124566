//! Token normalization for word sources.
//!
//! Every reader hands raw tokens to the same [`Normalizer`](normalizer::Normalizer)
//! so that set operations across sources compare like with like. The
//! normalizer is an ordered pipeline of token filters:
//!
//! ```text
//! raw token → strip apostrophes → charset check → lowercase → remove rejected
//! ```

pub mod normalizer;
pub mod token;
pub mod token_filter;
