//! # Wordmill
//!
//! Build curated, length-bounded English word lists from several lexical
//! sources.
//!
//! ## Features
//!
//! - One normalization policy shared by every source
//! - SCOWL, wordfreq, wiktextract and plain word lists
//! - Intersection or union of sources
//! - Atomic, sorted output
//! - Handles comparison with a reusable cache
//! - Handle screening against a protected-word list

pub mod analysis;
pub mod cli;
pub mod combine;
pub mod error;
pub mod handles;
pub mod moderation;
pub mod pipeline;
pub mod source;
pub mod storage;
pub mod wordlist;

pub mod prelude {
    pub use crate::analysis::normalizer::{CanonicalWord, Normalizer, WordSet};
    pub use crate::combine::{CombineMode, combine};
    pub use crate::error::{Result, WordmillError};
    pub use crate::handles::{HandlesComparator, HandlesConfig};
    pub use crate::pipeline::{Pipeline, PipelineConfig};
    pub use crate::source::{FrequencyTier, SourceKind, WordSource};
    pub use crate::wordlist::OutputList;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
