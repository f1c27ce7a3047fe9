// External Crate Imports
use itertools::Itertools;
use tracing::{debug, trace};

// Local Crate Imports
use crate::{Progress, Stage};

// Public API ==========================================================================================================

/// Lazily yields every subsequence of `codes` that keeps exactly `length` monomers, preserving their relative order
///
/// Subsequences are produced in lexicographic order of the retained positions, so `"AyB"` with a `length` of 2 gives
/// `"Ay"`, `"AB"`, then `"yB"`. Identical strings are yielded once per distinct set of positions.
pub fn deletions_of_length(codes: &str, length: usize) -> impl Iterator<Item = String> + '_ {
    codes.chars().combinations(length).map(String::from_iter)
}

/// Generates every deletion product of `codes` (from the empty string up to `codes` itself), grouped by increasing
/// length
///
/// A sequence of `n` monomers always produces exactly `2^n` products, so this is only practical for short sequences.
/// No duplicates are removed here; see `deduplicate()` for that.
pub fn enumerate_deletions(codes: impl AsRef<str>, mut progress: impl Progress) -> Vec<String> {
    let codes = codes.as_ref();
    let n = codes.chars().count();
    debug!(codes, n, "enumerating deletions");

    let stages = n as u64 + 1;
    progress.start(Stage::Enumerate, stages);

    let mut products = Vec::new();
    for length in 0..=n {
        let before = products.len();
        products.extend(deletions_of_length(codes, length));
        trace!(
            length,
            count = products.len() - before,
            "generated deletions"
        );
        progress.advance(Stage::Enumerate, length as u64 + 1);
    }

    progress.finish(Stage::Enumerate);
    debug!(count = products.len(), "finished enumerating deletions");
    products
}

// Module Tests ========================================================================================================
