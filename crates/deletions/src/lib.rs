//! Enumerates every deletion product of a monomer sequence, then collapses them into unique compositions

mod deduplicator;
mod enumerator;
mod progress;

// External Crate Imports
use ahash::HashSet;
use derive_more::Display;
use oligochem::Composition;

// Local Crate Imports
pub use deduplicator::deduplicate;
pub use enumerator::{deletions_of_length, enumerate_deletions};
pub use progress::Progress;

// Public API ==========================================================================================================

/// The two passes reported to a `Progress` observer
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum Stage {
    #[display("Generating possible deletions")]
    Enumerate,
    #[display("Assessing deletion similarity")]
    Deduplicate,
}

/// Keeps the first string of codes seen for each distinct `Composition`, in the order they were first seen
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CompositionRegistry {
    seen: HashSet<Composition>,
    unique: Vec<String>,
}
