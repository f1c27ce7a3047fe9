// External Crate Imports
use ahash::{HashMap, HashMapExt};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Local Crate Imports
use crate::{MonoisotopicMass, Monomer, MonomerDatabase};

// Constants ===========================================================================================================

// NOTE: The `d2` monomers are the deuterated (+2H) forms of their unlabelled counterparts
const MONOMERS: [(char, &str, Decimal); 21] = [
    ('A', "Ala", dec!(101.04768)),
    ('a', "d2Ala", dec!(103.06023)),
    // Aminobutyric acid (ethyl side chain)
    ('B', "Abu", dec!(115.06333)),
    ('b', "d2Abu", dec!(117.07588)),
    ('V', "Val", dec!(129.07898)),
    ('v', "d2Val", dec!(131.09153)),
    // O-methylated serine
    ('S', "Ser", dec!(131.05824)),
    ('s', "d2Ser", dec!(133.07080)),
    ('L', "Leu", dec!(143.09463)),
    ('l', "d2Leu", dec!(145.10718)),
    // Free carboxylic acid
    ('D', "Asp", dec!(145.03751)),
    ('K', "Lys", dec!(158.10553)),
    // Free carboxylic acid
    ('E', "Glu", dec!(159.05316)),
    ('P', "Phe", dec!(177.07898)),
    ('p', "d2Phe", dec!(179.09153)),
    // Cyclohexylalanine
    ('C', "Cha", dec!(183.12593)),
    ('c', "d2Cha", dec!(185.13848)),
    // Homophenylalaninol
    ('H', "HoPhe", dec!(191.09463)),
    ('h', "d2HoPhe", dec!(193.10718)),
    // Free phenol
    ('Y', "Tyr", dec!(193.07389)),
    ('y', "d2Tyr", dec!(195.08645)),
];

// Public API ==========================================================================================================

impl Monomer {
    #[must_use]
    pub const fn code(&self) -> char {
        self.code
    }

    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    #[must_use]
    pub const fn mass(&self) -> MonoisotopicMass {
        self.mass
    }
}

impl MonomerDatabase {
    #[must_use]
    pub fn monomer(&self, code: char) -> Option<&Monomer> {
        self.codes.get(&code).map(|&i| &self.monomers[i])
    }

    #[must_use]
    pub fn contains(&self, code: char) -> bool {
        self.codes.contains_key(&code)
    }

    #[must_use]
    pub fn code_for_alias(&self, alias: impl AsRef<str>) -> Option<char> {
        self.aliases.get(alias.as_ref()).copied()
    }

    #[must_use]
    pub fn alias_for_code(&self, code: char) -> Option<&str> {
        self.monomer(code).map(Monomer::alias)
    }

    /// Iterates over every monomer in the order they were defined
    pub fn monomers(&self) -> impl Iterator<Item = &Monomer> {
        self.monomers.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.monomers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monomers.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `code` isn't in the database. Codes must be validated before their masses are looked up
    pub(crate) fn mass(&self, code: char) -> MonoisotopicMass {
        self.monomer(code).map_or_else(
            || panic!("the monomer {code:?} could not be found, but should have been validated"),
            Monomer::mass,
        )
    }
}

impl Default for MonomerDatabase {
    fn default() -> Self {
        let mut codes = HashMap::with_capacity(MONOMERS.len());
        let mut aliases = HashMap::with_capacity(MONOMERS.len());
        let monomers = MONOMERS
            .into_iter()
            .enumerate()
            .map(|(i, (code, alias, mass))| {
                codes.insert(code, i);
                aliases.insert(alias.to_owned(), code);
                Monomer {
                    code,
                    alias: alias.to_owned(),
                    mass: MonoisotopicMass(mass),
                }
            })
            .collect();

        Self {
            monomers,
            codes,
            aliases,
        }
    }
}

// Module Tests ========================================================================================================
