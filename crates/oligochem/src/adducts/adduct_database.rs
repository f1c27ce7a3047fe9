// External Crate Imports
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Local Crate Imports
use crate::{Adduct, AdductDatabase, Charge};

// Constants ===========================================================================================================

// NOTE: Offsets already include the mass of each terminal group (N-terminal Fmoc or acetyl, C-terminal hydroxyl or
// trifluoromethoxy) along with that of the charge carrier(s)
const ADDUCTS: [(i64, &str, &str, Decimal); 46] = [
    (1, "N-Fmoc, OH", "+H+", dec!(197.09555)),
    (1, "N-Fmoc, OH", "+NH4+", dec!(214.12210)),
    (1, "N-Fmoc, OH", "+Na+", dec!(219.07749)),
    (1, "N-Fmoc, OH", "+FA+H+", dec!(243.10103)),
    (1, "N-Fmoc, OH", "+MeCN +NH4+", dec!(255.14864)),
    (1, "N-Fmoc, OCF3", "+H+", dec!(293.07893)),
    (1, "N-Fmoc, OCF3", "+NH4+", dec!(310.10494)),
    (1, "N-Fmoc, OCF3", "+Na+", dec!(315.06033)),
    (1, "N-Fmoc, OCF3", "+FA+H+", dec!(339.08387)),
    (1, "N-Fmoc, OCF3", "+MeCN +NH4+", dec!(351.13149)),
    (1, "N-Ac, OH", "+H+", dec!(17.03804)),
    (1, "N-Ac, OH", "+NH4+", dec!(34.06459)),
    (1, "N-Ac, OH", "+Na+", dec!(39.01998)),
    (1, "N-Ac, OH", "+FA+H+", dec!(63.04352)),
    (1, "N-Ac, OH", "+MeCN +NH4+", dec!(75.09114)),
    (1, "N-Ac, OCF3", "+H+", dec!(113.02088)),
    (1, "N-Ac, OCF3", "+NH4+", dec!(130.04743)),
    (1, "N-Ac, OCF3", "+Na+", dec!(135.00282)),
    (1, "N-Ac, OCF3", "+FA+H+", dec!(159.02636)),
    (1, "N-Ac, OCF3", "+MeCN +NH4+", dec!(171.07398)),
    (2, "N-Fmoc, OH", "+2H+", dec!(198.10283)),
    (2, "N-Fmoc, OH", "+H+ +NH4+", dec!(215.12937)),
    (2, "N-Fmoc, OCF3", "+2H+", dec!(294.08566)),
    (2, "N-Fmoc, OCF3", "+H+ +NH4+", dec!(311.11221)),
    (2, "N-Ac, OH", "+2H+", dec!(18.04531)),
    (2, "N-Ac, OH", "+H+ +NH4+", dec!(35.07186)),
    (2, "N-Ac, OCF3", "+2H+", dec!(114.02815)),
    (2, "N-Ac, OCF3", "+H+ +NH4+", dec!(131.0547)),
    (-1, "N-Fmoc, OH", "-H+", dec!(195.08099)),
    (-1, "N-Fmoc, OH", "+Cl-", dec!(231.05767)),
    (-1, "N-Fmoc, OH", "+FA-H+", dec!(241.08647)),
    (-1, "N-Fmoc, OH", "+TFA-H+", dec!(309.07386)),
    (-1, "N-Fmoc, OH", "-Fmoc + e-", dec!(17.00274)),
    (-1, "N-Fmoc, OCF3", "-H+", dec!(291.06383)),
    (-1, "N-Fmoc, OCF3", "+Cl-", dec!(327.04051)),
    (-1, "N-Fmoc, OCF3", "+FA-H+", dec!(337.06931)),
    (-1, "N-Fmoc, OCF3", "+TFA-H+", dec!(405.0567)),
    (-1, "N-Fmoc, OCF3", "-Fmoc + e-", dec!(112.98558)),
    (-1, "N-Ac, OH", "-H+", dec!(15.02348)),
    (-1, "N-Ac, OH", "+Cl-", dec!(51.00016)),
    (-1, "N-Ac, OH", "+FA-H+", dec!(61.02896)),
    (-1, "N-Ac, OH", "+TFA-H+", dec!(129.01635)),
    (-1, "N-Ac, OCF3", "-H+", dec!(111.00632)),
    (-1, "N-Ac, OCF3", "+Cl-", dec!(146.98300)),
    (-1, "N-Ac, OCF3", "+FA-H+", dec!(157.01180)),
    (-1, "N-Ac, OCF3", "+TFA-H+", dec!(224.99919)),
];

// Public API ==========================================================================================================

impl AdductDatabase {
    pub fn new(adducts: impl IntoIterator<Item = Adduct>) -> Self {
        let adducts = adducts.into_iter().collect();
        Self { adducts }
    }

    /// Iterates over every adduct in the order they were defined
    pub fn adducts(&self) -> impl Iterator<Item = &Adduct> {
        self.adducts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.adducts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adducts.is_empty()
    }
}

impl Default for AdductDatabase {
    fn default() -> Self {
        // NOTE: Every charge in `ADDUCTS` is non-zero, so this skips the check in `Adduct::new()`
        Self::new(
            ADDUCTS
                .into_iter()
                .map(|(charge, terminus, name, mass)| Adduct {
                    name: name.to_owned(),
                    terminus: terminus.to_owned(),
                    charge: Charge(charge),
                    mass,
                }),
        )
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use once_cell::sync::Lazy;

    use super::*;

    static DB: Lazy<AdductDatabase> = Lazy::new(AdductDatabase::default);

    #[test]
    fn default_adducts() {
        assert_eq!(DB.len(), 46);
        assert!(!DB.is_empty());
        assert!(DB.adducts().all(|a| !a.charge().is_zero()));

        let first = DB.adducts().next().unwrap();
        assert_eq!(first.name(), "+H+");
        assert_eq!(first.terminus(), "N-Fmoc, OH");
        assert_eq!(first.charge(), Charge(1));
        assert_eq!(first.mass(), dec!(197.09555));

        let last = DB.adducts().last().unwrap();
        assert_eq!(last.name(), "+TFA-H+");
        assert_eq!(last.terminus(), "N-Ac, OCF3");
        assert_eq!(last.charge(), Charge(-1));
        assert_eq!(last.mass(), dec!(224.99919));
    }

    #[test]
    fn adduct_charge_counts() {
        let counts = DB.adducts().map(|a| i64::from(a.charge())).counts();
        assert_eq!(counts[&1], 20);
        assert_eq!(counts[&2], 8);
        assert_eq!(counts[&-1], 18);
    }

    #[test]
    fn adduct_termini() {
        let termini: Vec<_> = DB.adducts().map(Adduct::terminus).unique().collect();
        assert_eq!(
            termini,
            ["N-Fmoc, OH", "N-Fmoc, OCF3", "N-Ac, OH", "N-Ac, OCF3"]
        );
        // Adduct names should fit in the 16-character column of a report
        assert!(DB.adducts().all(|a| a.name().len() <= 16));
    }

    #[test]
    fn custom_database() {
        let sodium = Adduct::new("+Na+", "N-Ac, OH", 1, dec!(39.01998)).unwrap();
        let db = AdductDatabase::new([sodium.clone()]);
        assert_eq!(db.len(), 1);
        assert_eq!(db.adducts().collect::<Vec<_>>(), [&sodium]);

        let empty = AdductDatabase::new([]);
        assert!(empty.is_empty());
    }
}
