//! Monomer and adduct data, sequence validation, and composition arithmetic for sequence-defined oligomers

pub mod adducts;
pub mod errors;
mod mass;
pub mod monomers;

// External Crate Imports
use ahash::HashMap;
use derive_more::{Add, Display, From, Into, Sub};
use rust_decimal::Decimal;

// Local Crate Imports
pub use errors::{OligochemError, Result};
pub use mass::{MAX_DECIMAL_PLACES, mass_of};
pub use monomers::composition::{is_composition_equal, missing_monomers};

// Public API ==========================================================================================================

/// A single monomer unit, identified by its one-letter `code`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Monomer {
    code: char,
    alias: String,
    mass: MonoisotopicMass,
}

/// The closed set of monomers that a `Sequence` may be built from
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MonomerDatabase {
    monomers: Vec<Monomer>,
    codes: HashMap<char, usize>,
    aliases: HashMap<String, char>,
}

/// A validated string of one-letter monomer codes
#[derive(Clone, Eq, PartialEq, Debug, Display)]
#[display("{codes}")]
pub struct Sequence<'m> {
    db: &'m MonomerDatabase,
    codes: String,
}

/// The order-independent multiset of monomers in a string of codes, stored as its sorted codes
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub struct Composition(String);

/// Per-monomer counts that are present in a parent sequence, but absent from a candidate
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct MissingMonomers(Vec<(char, usize)>);

/// An ionization species with a fixed mass offset and charge
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Adduct {
    name: String,
    terminus: String,
    charge: Charge,
    mass: Decimal,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AdductDatabase {
    adducts: Vec<Adduct>,
}

// ---------------------------------------------------------------------------------------------------------------------

#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Display, From, Into, Add, Sub,
)]
pub struct MonoisotopicMass(Decimal);

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Display, From, Into)]
pub struct Mz(Decimal);

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, From, Into)]
pub struct Charge(i64);

// =====================================================================================================================

pub trait Massive {
    fn monoisotopic_mass(&self) -> MonoisotopicMass;
}

// Blanket impls

macro_rules! massive_ref_impls {
    ($($ref_type:ty),+ $(,)?) => {
        $(
            impl<T: Massive> Massive for $ref_type {
                fn monoisotopic_mass(&self) -> MonoisotopicMass {
                    (**self).monoisotopic_mass()
                }
            }
        )+
    };
}

massive_ref_impls!(&T, &mut T, Box<T>);
