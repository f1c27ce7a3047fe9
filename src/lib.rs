//! Predicts the masses and adduct m/z values of every deletion product of a sequence-defined oligomer

pub mod report;

// External Crate Imports
use deletions::{Progress, deduplicate, enumerate_deletions};
use oligochem::{AdductDatabase, MonomerDatabase, Result, Sequence};
use tracing::info;

// Local Crate Imports
pub use report::{AdductLine, CompositionBlock, Report};

// Public API ==========================================================================================================

/// Normalizes `input` into a `Sequence`, then reports on every unique composition that could result from deleting
/// some of its monomers
///
/// # Errors
///
/// Returns an `OligochemError` if `input` can't be normalized, in which case no deletions are generated at all
pub fn calculate<'m, 'a>(
    monomer_db: &'m MonomerDatabase,
    adduct_db: &'a AdductDatabase,
    input: impl AsRef<str>,
    decimal_places: u32,
    mut progress: impl Progress,
) -> Result<Report<'m, 'a>> {
    let sequence = Sequence::new(monomer_db, input)?;
    info!(%sequence, length = sequence.len(), "parsed sequence");

    let products = enumerate_deletions(&sequence, &mut progress);
    let compositions = deduplicate(&products, &mut progress);
    info!(
        products = products.len(),
        compositions = compositions.len(),
        "found unique deletions"
    );

    Ok(Report::new(
        &sequence,
        &compositions,
        adduct_db,
        decimal_places,
    ))
}
