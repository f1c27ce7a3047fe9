// Standard Library Imports
use std::borrow::Cow;

// External Crate Imports
use tracing::debug;

// Local Crate Imports
use crate::{
    Massive, MonoisotopicMass, MonomerDatabase, OligochemError, Result, Sequence, mass::mass_of,
};

// Public API ==========================================================================================================

impl<'m> Sequence<'m> {
    /// Builds a `Sequence` from whitespace-separated tokens, each being a one-letter code, a multi-letter alias (like
    /// `Ala` or `d2Tyr`), or a run of one-letter codes (like `AyB`)
    ///
    /// # Errors
    ///
    /// Returns `OligochemError::UnresolvedToken` for tokens that can't be read in any of the ways above, and
    /// `OligochemError::UnknownMonomer` if any resulting one-letter code is missing from `db`
    pub fn new(db: &'m MonomerDatabase, input: impl AsRef<str>) -> Result<Self> {
        let input = input.as_ref();
        let mut codes = String::with_capacity(input.len());
        for (offset, token) in tokens(input) {
            let resolved = resolve_token(db, token)
                .ok_or_else(|| OligochemError::unresolved_token(input, offset, token))?;
            if let Some(code) = resolved.chars().find(|&code| !db.contains(code)) {
                return Err(OligochemError::unknown_monomer(input, offset, code).into());
            }
            codes.push_str(&resolved);
        }

        debug!(input, %codes, "normalized sequence");
        Ok(Self { db, codes })
    }

    /// Builds a `Sequence` from a string that already consists solely of one-letter codes
    ///
    /// # Errors
    ///
    /// Returns `OligochemError::UnknownMonomer` for the first code that is missing from `db`
    pub fn from_codes(db: &'m MonomerDatabase, codes: impl Into<String>) -> Result<Self> {
        let codes = codes.into();
        if let Some((offset, code)) = codes.char_indices().find(|&(_, code)| !db.contains(code)) {
            return Err(OligochemError::unknown_monomer(&codes, offset, code).into());
        }

        Ok(Self { db, codes })
    }

    #[must_use]
    pub const fn db(&self) -> &'m MonomerDatabase {
        self.db
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.codes
    }

    /// The number of monomers in this sequence
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl AsRef<str> for Sequence<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Massive for Sequence<'_> {
    fn monoisotopic_mass(&self) -> MonoisotopicMass {
        mass_of(self.db, &self.codes)
    }
}

// Private Functions ===================================================================================================

// NOTE: Yields each token alongside its byte-offset into `input`, so that errors can point back at the bad token
fn tokens(input: &str) -> impl Iterator<Item = (usize, &str)> {
    let start = input.as_ptr() as usize;
    input
        .split_whitespace()
        .map(move |token| (token.as_ptr() as usize - start, token))
}

// NOTE: Single characters are passed through untouched here, so they're the only resolved tokens that still need
// checking against the database
fn resolve_token<'t>(db: &MonomerDatabase, token: &'t str) -> Option<Cow<'t, str>> {
    if token.chars().count() == 1 {
        Some(Cow::Borrowed(token))
    } else if let Some(code) = db.code_for_alias(token) {
        Some(Cow::Owned(code.to_string()))
    } else if token.chars().all(|code| db.contains(code)) {
        Some(Cow::Borrowed(token))
    } else {
        None
    }
}

// Module Tests ========================================================================================================
