//! Error types for the preparation pipeline.

use thiserror::Error;

/// Every way a decode, lookup or preparation call can fail.
///
/// A failing call never hands back partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The byte string is not legal UTF-8 (bad lead byte, bad continuation,
    /// truncated or overlong sequence, surrogate, out of range, or NUL).
    #[error("incorrect utf-8 input at byte {offset}: {reason}")]
    MalformedInput {
        /// Offset of the first byte of the offending sequence.
        offset: usize,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A value reached the pipeline that no UTF-8 decode could have produced,
    /// so the table has nothing to say about it.
    #[error("no table entry for code {0:#x}")]
    UnknownCodePoint(u32),

    /// The decomposition table cannot be used: unsorted rows, or a mapping
    /// chain deeper than the configured limit (which includes cycles).
    #[error("ill-formed decomposition table: {reason}")]
    IllFormedTable {
        /// Description of the fault.
        reason: String,
    },

    /// The caller declared a text encoding other than UTF-8.
    #[error("encoding \"{0}\" is not supported, only UTF-8 input is accepted")]
    UnsupportedEncoding(String),
}

/// Convenience Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        let err = Error::MalformedInput {
            offset: 3,
            reason: "unexpected continuation byte",
        };
        assert_eq!(
            "incorrect utf-8 input at byte 3: unexpected continuation byte",
            err.to_string()
        );
        assert_eq!(
            "no table entry for code 0xffffffff",
            Error::UnknownCodePoint(u32::MAX).to_string()
        );
        assert_eq!(
            "encoding \"LATIN1\" is not supported, only UTF-8 input is accepted",
            Error::UnsupportedEncoding("LATIN1".to_owned()).to_string()
        );
    }
}
