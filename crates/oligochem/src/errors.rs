use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

pub type Result<T, E = Box<OligochemError>> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum OligochemError {
    #[diagnostic(help(
        "tokens must be one-letter codes (e.g. A), known aliases (e.g. Ala or d2Tyr), or runs of one-letter codes \
        (e.g. AyB)"
    ))]
    #[error("sequence not understood: the token {token:?} does not match any monomer in the supplied database")]
    UnresolvedToken {
        token: String,
        #[source_code]
        input: String,
        #[label("unrecognised token")]
        span: SourceSpan,
    },

    #[diagnostic(help("double-check for typos, or add a new entry to the monomer database"))]
    #[error("the monomer {code:?} could not be found in the supplied monomer database")]
    UnknownMonomer {
        code: char,
        #[source_code]
        sequence: String,
        #[label("unknown monomer")]
        span: SourceSpan,
    },

    #[error("the adduct {name:?} ({terminus}) must carry a non-zero charge")]
    ZeroCharge { name: String, terminus: String },
}

impl OligochemError {
    pub(crate) fn unresolved_token(input: &str, offset: usize, token: &str) -> Self {
        let span = (offset, token.len()).into();
        let token = token.to_owned();
        let input = input.to_owned();

        Self::UnresolvedToken { token, input, span }
    }

    pub(crate) fn unknown_monomer(sequence: &str, offset: usize, code: char) -> Self {
        let span = (offset, code.len_utf8()).into();
        let sequence = sequence.to_owned();

        Self::UnknownMonomer {
            code,
            sequence,
            span,
        }
    }

    pub(crate) fn zero_charge(name: &str, terminus: &str) -> Self {
        let name = name.to_owned();
        let terminus = terminus.to_owned();

        Self::ZeroCharge { name, terminus }
    }
}
