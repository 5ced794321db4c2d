use std::borrow::Cow;
use std::io;

/// Result type used across the labelled-numerics conversions.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type surfaced by catalog construction, encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The catalog violates a construction invariant (duplicate or negative values).
    #[error("invalid catalog: {details}")]
    InvalidCatalog { details: Cow<'static, str> },

    /// An argument has the wrong shape for the requested operation.
    #[error("invalid argument: {details}")]
    InvalidArgument { details: Cow<'static, str> },

    /// A number falls outside the range a numeral system can encode.
    #[error("number {value} is not in valid range ({min}-{max})")]
    OutOfRange { value: String, min: i64, max: i64 },

    /// A token of a label sequence is missing from the catalog.
    #[error("label '{label}' not found in catalog")]
    UnknownLabel { label: String },

    /// The encoding method name is not one of the supported strategies.
    #[error("method must be 'decimal', 'digitwise' or 'decimal_float', not '{method}'")]
    UnknownMethod { method: String },

    /// Value-level arithmetic that has no defined result.
    #[error("arithmetic error: {details}")]
    Arithmetic { details: Cow<'static, str> },

    /// I/O failure while reading a catalog or writing a log file.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn invalid_argument(details: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument {
            details: details.into(),
        }
    }

    pub(crate) fn invalid_catalog(details: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidCatalog {
            details: details.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidCatalog {
            details: Cow::Owned(err.to_string()),
        }
    }
}
