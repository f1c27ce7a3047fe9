// Standard Library Imports
use std::{
    fmt::{self, Display, Formatter},
    fs, io,
    path::{Path, PathBuf},
};

// External Crate Imports
use oligochem::{
    Adduct, AdductDatabase, MissingMonomers, MonoisotopicMass, Mz, Sequence, mass_of,
};

// Public API ==========================================================================================================

/// The mass and adduct m/z values of every unique deletion product of a sequence
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Report<'m, 'a> {
    sequence: String,
    blocks: Vec<CompositionBlock<'m, 'a>>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CompositionBlock<'m, 'a> {
    codes: String,
    mass: MonoisotopicMass,
    missing: Vec<(usize, &'m str)>,
    adduct_lines: Vec<AdductLine<'a>>,
    decimal_places: u32,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AdductLine<'a> {
    adduct: &'a Adduct,
    mz: Mz,
    decimal_places: u32,
}

impl<'m, 'a> Report<'m, 'a> {
    /// Builds one `CompositionBlock` per entry of `compositions`, each of which must be made up of codes taken from
    /// `sequence`
    #[must_use]
    pub fn new(
        sequence: &Sequence<'m>,
        compositions: &[impl AsRef<str>],
        adducts: &'a AdductDatabase,
        decimal_places: u32,
    ) -> Self {
        let blocks = compositions
            .iter()
            .map(|codes| CompositionBlock::new(sequence, codes.as_ref(), adducts, decimal_places))
            .collect();

        Self {
            sequence: sequence.to_string(),
            blocks,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    #[must_use]
    pub fn blocks(&self) -> &[CompositionBlock<'m, 'a>] {
        &self.blocks
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.sequence)
    }

    /// Writes this report to `file_name()` inside of `dir`, returning the path of the new file
    ///
    /// # Errors
    ///
    /// Returns any `io::Error` raised while writing the file
    pub fn write_to(&self, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name());
        fs::write(&path, self.to_string())?;
        Ok(path)
    }
}

impl<'m, 'a> CompositionBlock<'m, 'a> {
    fn new(
        sequence: &Sequence<'m>,
        codes: &str,
        adducts: &'a AdductDatabase,
        decimal_places: u32,
    ) -> Self {
        let db = sequence.db();
        let mass = mass_of(db, codes);
        // SAFETY: Every code in a `Sequence` has been validated against its database, so each has an alias
        let missing = MissingMonomers::new(codes, sequence)
            .iter()
            .map(|(code, count)| (count, db.alias_for_code(code).unwrap()))
            .collect();
        let adduct_lines = adducts
            .adducts()
            .map(|adduct| AdductLine {
                adduct,
                mz: adduct.mz(mass),
                decimal_places,
            })
            .collect();

        Self {
            codes: codes.to_owned(),
            mass,
            missing,
            adduct_lines,
            decimal_places,
        }
    }

    #[must_use]
    pub fn codes(&self) -> &str {
        &self.codes
    }

    #[must_use]
    pub const fn mass(&self) -> MonoisotopicMass {
        self.mass
    }

    /// The number of each monomer (by alias) that this deletion product has lost
    #[must_use]
    pub fn missing(&self) -> &[(usize, &'m str)] {
        &self.missing
    }

    #[must_use]
    pub fn adduct_lines(&self) -> &[AdductLine<'a>] {
        &self.adduct_lines
    }
}

impl<'a> AdductLine<'a> {
    #[must_use]
    pub const fn adduct(&self) -> &'a Adduct {
        self.adduct
    }

    #[must_use]
    pub const fn mz(&self) -> Mz {
        self.mz
    }
}

// Text Formatting =====================================================================================================

const ADDUCT_HEADER: &str = "CHARGE\tTERMINUS\tNAME\t\tM/Z";

impl Display for Report<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

impl Display for CompositionBlock<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for code in self.codes.chars() {
            write!(f, "{code} ")?;
        }
        writeln!(f, " :  {}", self.mass.rounded(self.decimal_places))?;

        write!(f, "Missing ")?;
        for (count, alias) in &self.missing {
            write!(f, "{count} {alias} ")?;
        }
        writeln!(f)?;

        writeln!(f, "{ADDUCT_HEADER}")?;
        for line in &self.adduct_lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f)
    }
}

impl Display for AdductLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            adduct,
            mz,
            decimal_places,
        } = self;
        write!(
            f,
            "{}\t{}\t{:<16}\t{}",
            adduct.charge(),
            adduct.terminus(),
            adduct.name(),
            mz.rounded(*decimal_places)
        )
    }
}

// Module Tests ========================================================================================================
