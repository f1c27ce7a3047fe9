// External Crate Imports
use rust_decimal::Decimal;

// Local Crate Imports
use crate::{Adduct, Charge, Massive, MonoisotopicMass, Mz, OligochemError, Result};

// Public API ==========================================================================================================

impl Adduct {
    /// # Errors
    ///
    /// Returns `OligochemError::ZeroCharge` if `charge` is zero, since a neutral species has no m/z
    pub fn new(
        name: impl Into<String>,
        terminus: impl Into<String>,
        charge: i64,
        mass: Decimal,
    ) -> Result<Self> {
        let name = name.into();
        let terminus = terminus.into();
        let charge = Charge(charge);
        if charge.is_zero() {
            return Err(OligochemError::zero_charge(&name, &terminus).into());
        }

        Ok(Self {
            name,
            terminus,
            charge,
            mass,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn terminus(&self) -> &str {
        &self.terminus
    }

    #[must_use]
    pub const fn charge(&self) -> Charge {
        self.charge
    }

    /// The mass offset added to a neutral molecule when it forms this adduct
    #[must_use]
    pub const fn mass(&self) -> Decimal {
        self.mass
    }

    /// The (always positive) m/z of a neutral molecule with mass `mass` once it forms this adduct
    #[must_use]
    pub fn mz(&self, mass: MonoisotopicMass) -> Mz {
        (mass + self.mass) / self.charge
    }

    #[must_use]
    pub fn mz_of(&self, molecule: impl Massive) -> Mz {
        self.mz(molecule.monoisotopic_mass())
    }
}

// Module Tests ========================================================================================================
