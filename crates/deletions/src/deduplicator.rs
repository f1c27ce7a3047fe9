// External Crate Imports
use oligochem::Composition;
use tracing::{debug, trace};

// Local Crate Imports
use crate::{CompositionRegistry, Progress, Stage};

// Public API ==========================================================================================================

impl CompositionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `codes` as the representative of its composition, unless that composition has already been seen.
    /// Returns `true` if `codes` was kept.
    pub fn insert(&mut self, codes: impl AsRef<str>) -> bool {
        let codes = codes.as_ref();
        let is_new = self.seen.insert(Composition::new(codes));
        if is_new {
            self.unique.push(codes.to_owned());
        }
        is_new
    }

    #[must_use]
    pub fn contains(&self, codes: impl AsRef<str>) -> bool {
        self.seen.contains(&Composition::new(codes))
    }

    /// The representatives kept so far, in the order they were first registered
    #[must_use]
    pub fn unique(&self) -> &[String] {
        &self.unique
    }

    #[must_use]
    pub fn into_unique(self) -> Vec<String> {
        self.unique
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.unique.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unique.is_empty()
    }
}

/// Collapses deletion products that share a composition, keeping only the first product seen for each
///
/// Products are considered in order of increasing length, then in the order they appear in `products`. So the output
/// is sorted by length, and within each length keeps the order in which `enumerate_deletions()` discovered each
/// composition. The representative kept for a composition is whichever ordering of its monomers came first, which
/// isn't necessarily the sorted one.
pub fn deduplicate(products: &[impl AsRef<str>], mut progress: impl Progress) -> Vec<String> {
    let lengths: Vec<_> = products.iter().map(|p| p.as_ref().chars().count()).collect();
    let Some(&max_length) = lengths.iter().max() else {
        return Vec::new();
    };

    let mut groups = vec![Vec::new(); max_length + 1];
    for (product, length) in products.iter().zip(lengths) {
        groups[length].push(product.as_ref());
    }

    debug!(
        products = products.len(),
        max_length,
        "deduplicating deletions"
    );
    progress.start(Stage::Deduplicate, groups.len() as u64);

    let mut registry = CompositionRegistry::new();
    for (length, group) in groups.into_iter().enumerate() {
        let before = registry.len();
        for product in group {
            registry.insert(product);
        }
        trace!(
            length,
            unique = registry.len() - before,
            "deduplicated deletions"
        );
        progress.advance(Stage::Deduplicate, length as u64 + 1);
    }

    progress.finish(Stage::Deduplicate);
    debug!(unique = registry.len(), "finished deduplicating deletions");
    registry.into_unique()
}

// Module Tests ========================================================================================================
