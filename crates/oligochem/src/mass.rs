// Standard Library Imports
use std::{
    iter::Sum,
    ops::{Add, Div},
};

// External Crate Imports
use rust_decimal::Decimal;

// Local Crate Imports
use crate::{Charge, MonoisotopicMass, MonomerDatabase, Mz};

// Public API ==========================================================================================================

/// The most fractional digits that a `Decimal` (and so a rounded mass or m/z) can carry
pub const MAX_DECIMAL_PLACES: u32 = 28;

/// Sums the monoisotopic masses of every monomer in `codes`
///
/// # Panics
///
/// Panics if `codes` contains a character missing from `db`. Only call this with codes that have already been
/// validated by `Sequence`.
#[must_use]
pub fn mass_of(db: &MonomerDatabase, codes: &str) -> MonoisotopicMass {
    codes.chars().map(|code| db.mass(code)).sum()
}

impl MonoisotopicMass {
    /// Rounds to `decimal_places`, then pads so that exactly that many fractional digits are displayed
    #[must_use]
    pub fn rounded(self, decimal_places: u32) -> Decimal {
        round_and_rescale(self.0, decimal_places)
    }
}

impl Mz {
    #[must_use]
    pub fn rounded(self, decimal_places: u32) -> Decimal {
        round_and_rescale(self.0, decimal_places)
    }
}

impl Charge {
    pub(crate) const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

// Operator Impls ======================================================================================================

impl Sum for MonoisotopicMass {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|MonoisotopicMass(m)| m).sum())
    }
}

impl Add<Decimal> for MonoisotopicMass {
    type Output = Self;

    fn add(self, rhs: Decimal) -> Self::Output {
        Self(self.0 + rhs)
    }
}

// NOTE: Charge is signed, but an m/z is always reported as a magnitude
impl Div<Charge> for MonoisotopicMass {
    type Output = Mz;

    fn div(self, rhs: Charge) -> Self::Output {
        Mz((self.0 / Decimal::from(rhs.0)).abs())
    }
}

// Private Functions ===================================================================================================

// FIXME: Really this should be fixed in `rust_decimal`... `.round_dp()` won't add trailing zeros
fn round_and_rescale(value: Decimal, decimal_places: u32) -> Decimal {
    let mut value = value.round_dp(decimal_places);
    value.rescale(decimal_places);
    value
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use once_cell::sync::Lazy;
    use rust_decimal_macros::dec;

    use super::*;

    static DB: Lazy<MonomerDatabase> = Lazy::new(MonomerDatabase::default);

    #[test]
    fn single_monomer_mass() {
        assert_eq!(mass_of(&DB, "A"), MonoisotopicMass(dec!(101.04768)));
        assert_eq!(mass_of(&DB, "y"), MonoisotopicMass(dec!(195.08645)));
        assert_eq!(
            mass_of(&DB, "AA"),
            MonoisotopicMass(dec!(2) * dec!(101.04768))
        );
    }

    #[test]
    fn empty_mass() {
        assert_eq!(mass_of(&DB, ""), MonoisotopicMass(Decimal::ZERO));
    }

    #[test]
    fn mass_is_additive() {
        let pieces = ["", "A", "AyB", "hHcC", "sSlLvV", "DKEPpYy", "abAB"];
        for a in pieces {
            for b in pieces {
                let joined = format!("{a}{b}");
                assert_eq!(
                    mass_of(&DB, &joined),
                    mass_of(&DB, a) + mass_of(&DB, b),
                    "{a:?} + {b:?}"
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "could not be found")]
    fn unvalidated_mass() {
        let _ = mass_of(&DB, "AXB");
    }

    #[test]
    fn mass_rounding() {
        let ayb = mass_of(&DB, "AyB");
        assert_eq!(ayb, MonoisotopicMass(dec!(411.19746)));
        assert_eq!(ayb.rounded(3).to_string(), "411.197");
        assert_eq!(ayb.rounded(1).to_string(), "411.2");
        assert_eq!(ayb.rounded(0).to_string(), "411");
        assert_eq!(ayb.rounded(7).to_string(), "411.1974600");
        assert_eq!(mass_of(&DB, "").rounded(3).to_string(), "0.000");
    }

    #[test]
    fn max_decimal_places() {
        let zero = mass_of(&DB, "").rounded(MAX_DECIMAL_PLACES).to_string();
        assert_eq!(zero, format!("0.{}", "0".repeat(28)));
    }

    #[test]
    fn mz_from_charge() {
        let mass = MonoisotopicMass(dec!(299.15051));
        assert_eq!(mass / Charge(1), Mz(dec!(299.15051)));
        assert_eq!(mass / Charge(2), Mz(dec!(149.575255)));
        assert_eq!(mass / Charge(-1), Mz(dec!(299.15051)));
        assert_eq!((mass / Charge(2)).rounded(3).to_string(), "149.575");
    }
}
