use core::fmt::Display;

/// Errors that can occur while computing a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A negative number of terms was requested
    NegativeCount(i64),

    /// Storage for the requested number of terms cannot be reserved
    CountTooLarge(i64),

    /// A term does not fit in the fixed-width integer type
    Overflow {
        /// Zero-based index of the first term that overflowed
        index: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NegativeCount(n) => write!(f, "negative term count: {n}"),
            Self::CountTooLarge(n) => write!(f, "term count too large: {n}"),
            Self::Overflow { index } => write!(f, "term {index} overflows u64"),
        }
    }
}

impl core::error::Error for Error {}

/// A wrapper around [`core::result::Result`] for fibseq operations
pub type Result<T, E = Error> = crate::std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_includes_details() {
        assert_eq!(Error::NegativeCount(-3).to_string(), "negative term count: -3");
        assert_eq!(Error::Overflow { index: 94 }.to_string(), "term 94 overflows u64");
        assert_eq!(Error::CountTooLarge(1 << 62).to_string(), "term count too large: 4611686018427387904");
    }
}
