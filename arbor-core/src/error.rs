//! Error types for the arbor core library.
//!
//! Every error enum carries a stable machine-readable code so callers can log
//! or match on failures without depending on display strings.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// An error produced while constructing an [`crate::AdjacencyMatrix`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MatrixError {
    /// A row did not have one entry per vertex.
    #[error("row {row} has {actual} entries but the matrix has {expected} rows")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of rows, and therefore the required row length.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A row-major buffer did not hold `n * n` values.
    #[error("row-major buffer has {actual} values but {expected} were required")]
    LengthMismatch {
        /// Required buffer length.
        expected: usize,
        /// Supplied buffer length.
        actual: usize,
    },
    /// A weight was NaN or infinite.
    #[error("weight at ({row}, {column}) is not finite")]
    NonFiniteWeight {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
    },
    /// A weight was below zero.
    #[error("weight at ({row}, {column}) is negative: {weight}")]
    NegativeWeight {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
        /// The negative weight.
        weight: f64,
    },
    /// `weight[i][j]` and `weight[j][i]` differed.
    #[error("matrix is not symmetric at ({row}, {column})")]
    Asymmetric {
        /// Row of the first differing entry.
        row: usize,
        /// Column of the first differing entry.
        column: usize,
    },
    /// A diagonal entry was non-zero.
    #[error("vertex {vertex} has a self-loop")]
    SelfLoop {
        /// The vertex carrying the self-loop.
        vertex: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MatrixError`] variants.
    enum MatrixErrorCode for MatrixError {
        /// A row did not have one entry per vertex.
        NotSquare => NotSquare { .. } => "MATRIX_NOT_SQUARE",
        /// A row-major buffer did not hold `n * n` values.
        LengthMismatch => LengthMismatch { .. } => "MATRIX_LENGTH_MISMATCH",
        /// A weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "MATRIX_NON_FINITE_WEIGHT",
        /// A weight was below zero.
        NegativeWeight => NegativeWeight { .. } => "MATRIX_NEGATIVE_WEIGHT",
        /// The matrix was not symmetric.
        Asymmetric => Asymmetric { .. } => "MATRIX_ASYMMETRIC",
        /// A diagonal entry was non-zero.
        SelfLoop => SelfLoop { .. } => "MATRIX_SELF_LOOP",
    }
}

/// Errors returned while computing a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The configured start vertex does not exist in the graph.
    #[error("start vertex {vertex} is out of range for a graph with {node_count} vertices")]
    InvalidStartVertex {
        /// The requested start vertex.
        vertex: usize,
        /// The number of vertices in the graph.
        node_count: usize,
    },
    /// The frontier emptied before every vertex joined the tree.
    #[error("graph is not connected: reached {reached} of {node_count} vertices")]
    Disconnected {
        /// Vertices reachable from the start vertex, including it.
        reached: usize,
        /// The number of vertices in the graph.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The configured start vertex does not exist in the graph.
        InvalidStartVertex => InvalidStartVertex { .. } => "MST_INVALID_START_VERTEX",
        /// The frontier emptied before every vertex joined the tree.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
    }
}
