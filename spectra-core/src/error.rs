use core::{error, fmt};

/// Errors raised whilst running spectra.
///
/// Every failure is an input rejection: computation is deterministic, so a call
/// either fully succeeds or returns this before producing any output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Arguments passed into a function were invalid.
    InvalidInput {
        /// The invalid argument.
        arg: &'static str,
        /// Explaining why the argument is invalid.
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`].
    pub const fn invalid(arg: &'static str, reason: &'static str) -> Self {
        Error::InvalidInput { arg, reason }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput { arg, reason } => {
                write!(f, "Invalid input `{arg}`: {reason}")
            }
        }
    }
}

impl error::Error for Error {}

/// Result alias used throughout spectra.
pub type Result<T> = core::result::Result<T, Error>;
