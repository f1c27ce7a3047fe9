// External Crate Imports
use itertools::Itertools;

// Local Crate Imports
use crate::{Composition, MissingMonomers};

// Public API ==========================================================================================================

impl Composition {
    /// Computes the order-independent signature of `codes`: the same codes, sorted
    #[must_use]
    pub fn new(codes: impl AsRef<str>) -> Self {
        Self(codes.as_ref().chars().sorted_unstable().collect())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Two strings of codes share a composition when they contain exactly the same monomers, in any order
#[must_use]
pub fn is_composition_equal(a: impl AsRef<str>, b: impl AsRef<str>) -> bool {
    Composition::new(a) == Composition::new(b)
}

impl MissingMonomers {
    /// Counts, for every monomer of `parent`, how many more copies `parent` holds than `candidate`. Monomers that are
    /// at least as abundant in `candidate` are left out, so no count is ever zero or negative. Entries are ordered by
    /// the first appearance of each monomer in `parent`.
    #[must_use]
    pub fn new(candidate: impl AsRef<str>, parent: impl AsRef<str>) -> Self {
        let candidate = candidate.as_ref().chars().counts();
        let parent = parent.as_ref();
        let parent_counts = parent.chars().counts();

        let missing = parent
            .chars()
            .unique()
            .filter_map(|code| {
                let present = candidate.get(&code).copied().unwrap_or_default();
                let missing = parent_counts[&code].saturating_sub(present);
                (missing > 0).then_some((code, missing))
            })
            .collect();
        Self(missing)
    }

    #[must_use]
    pub fn get(&self, code: char) -> Option<usize> {
        self.0.iter().find(|&&(c, _)| c == code).map(|&(_, n)| n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Returns the monomers that `parent` holds more copies of than `candidate`, along with the size of each shortfall
#[must_use]
pub fn missing_monomers(candidate: impl AsRef<str>, parent: impl AsRef<str>) -> MissingMonomers {
    MissingMonomers::new(candidate, parent)
}

// Module Tests ========================================================================================================
