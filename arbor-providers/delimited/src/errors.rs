use std::fmt;
use std::io;
use std::path::PathBuf;

use arbor_core::{MatrixError, MatrixErrorCode};
use thiserror::Error;

/// Errors raised while loading delimited text.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DelimitedError {
    /// Opening or reading a file failed.
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading from a caller-supplied reader failed.
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    /// A field could not be parsed as a number.
    #[error("line {line}, column {column}: cannot parse `{value}` as a number")]
    InvalidValue {
        /// One-based line number.
        line: usize,
        /// One-based field position within the line.
        column: usize,
        /// Offending field text.
        value: String,
    },
    /// A row had a different number of fields from the first row.
    #[error("line {line} has {actual} values but the first row has {expected}")]
    RaggedRow {
        /// One-based line number.
        line: usize,
        /// Field count of the first row.
        expected: usize,
        /// Field count of the offending row.
        actual: usize,
    },
    /// The rows did not form a valid adjacency matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Stable codes describing [`DelimitedError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum DelimitedErrorCode {
    /// Opening or reading a file failed.
    Io,
    /// Reading from a caller-supplied reader failed.
    Read,
    /// A field could not be parsed as a number.
    InvalidValue,
    /// Rows differ in length.
    RaggedRow,
    /// The rows did not form a valid adjacency matrix.
    Matrix(MatrixErrorCode),
}

impl DelimitedErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "DELIMITED_IO",
            Self::Read => "DELIMITED_READ",
            Self::InvalidValue => "DELIMITED_INVALID_VALUE",
            Self::RaggedRow => "DELIMITED_RAGGED_ROW",
            Self::Matrix(inner) => inner.as_str(),
        }
    }
}

impl fmt::Display for DelimitedErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DelimitedError {
    /// Retrieve the stable [`DelimitedErrorCode`] for this error.
    #[must_use]
    pub fn code(&self) -> DelimitedErrorCode {
        match self {
            Self::Io { .. } => DelimitedErrorCode::Io,
            Self::Read(_) => DelimitedErrorCode::Read,
            Self::InvalidValue { .. } => DelimitedErrorCode::InvalidValue,
            Self::RaggedRow { .. } => DelimitedErrorCode::RaggedRow,
            Self::Matrix(inner) => DelimitedErrorCode::Matrix(inner.code()),
        }
    }

    pub(crate) fn at_path(self, path: PathBuf) -> Self {
        match self {
            Self::Read(source) => Self::Io { path, source },
            other => other,
        }
    }
}
