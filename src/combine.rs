//! Set combination across word sources.
//!
//! # Examples
//!
//! ```
//! use wordmill::analysis::normalizer::{CanonicalWord, WordSet};
//! use wordmill::combine::{CombineMode, combine};
//!
//! let set = |words: &[&str]| -> WordSet {
//!     words.iter().filter_map(|w| CanonicalWord::parse(w)).collect()
//! };
//!
//! let a = set(&["cat", "dog", "bird"]);
//! let b = set(&["cat", "bird", "fish"]);
//!
//! let both = combine([&a, &b], CombineMode::Intersection);
//! assert_eq!(both, set(&["bird", "cat"]));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::WordSet;

/// How source sets are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombineMode {
    /// Keep words present in every active source
    #[default]
    Intersection,
    /// Keep words present in any active source
    Union,
}

impl fmt::Display for CombineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombineMode::Intersection => write!(f, "intersection"),
            CombineMode::Union => write!(f, "union"),
        }
    }
}

/// Combine any number of word sets.
///
/// No sources yield the empty set and a single source is returned as-is in
/// both modes. The result depends only on set membership, never on the
/// order in which sources are given.
pub fn combine<'a, I>(sources: I, mode: CombineMode) -> WordSet
where
    I: IntoIterator<Item = &'a WordSet>,
{
    let mut sources: Vec<&WordSet> = sources.into_iter().collect();

    match mode {
        CombineMode::Union => sources.into_iter().flatten().cloned().collect(),
        CombineMode::Intersection => {
            if sources.is_empty() {
                return WordSet::new();
            }
            // Start from the smallest set so the scan is bounded by it.
            sources.sort_by_key(|set| set.len());
            let (smallest, rest) = sources.split_at(1);
            smallest[0]
                .iter()
                .filter(|word| rest.iter().all(|set| set.contains(*word)))
                .cloned()
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::CanonicalWord;

    fn set(words: &[&str]) -> WordSet {
        words.iter().filter_map(|w| CanonicalWord::parse(w)).collect()
    }

    #[test]
    fn test_intersection() {
        let a = set(&["cat", "dog", "bird"]);
        let b = set(&["cat", "bird", "fish"]);
        assert_eq!(combine([&a, &b], CombineMode::Intersection), set(&["cat", "bird"]));
    }

    #[test]
    fn test_union() {
        let a = set(&["cat", "dog", "bird"]);
        let b = set(&["cat", "bird", "fish"]);
        assert_eq!(
            combine([&a, &b], CombineMode::Union),
            set(&["cat", "dog", "bird", "fish"])
        );
    }

    #[test]
    fn test_zero_sources_is_empty() {
        assert!(combine(Vec::<&WordSet>::new(), CombineMode::Intersection).is_empty());
        assert!(combine(Vec::<&WordSet>::new(), CombineMode::Union).is_empty());
    }

    #[test]
    fn test_single_source_passes_through() {
        let a = set(&["alpha", "beta"]);
        assert_eq!(combine([&a], CombineMode::Intersection), a);
        assert_eq!(combine([&a], CombineMode::Union), a);
    }

    #[test]
    fn test_order_independent() {
        let a = set(&["a", "b", "c", "d"]);
        let b = set(&["b", "c"]);
        let c = set(&["c", "b", "x"]);
        for mode in [CombineMode::Intersection, CombineMode::Union] {
            let forward = combine([&a, &b, &c], mode);
            let backward = combine([&c, &b, &a], mode);
            assert_eq!(forward, backward);
        }
        assert_eq!(combine([&a, &b, &c], CombineMode::Intersection), set(&["b", "c"]));
    }

    #[test]
    fn test_intersection_with_empty_source() {
        let a = set(&["a"]);
        let empty = WordSet::new();
        assert!(combine([&a, &empty], CombineMode::Intersection).is_empty());
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(CombineMode::default(), CombineMode::Intersection);
        assert_eq!(CombineMode::Union.to_string(), "union");
    }
}
