//! Arbor core library.
//!
//! Builds minimum spanning trees of dense, undirected, weighted graphs with
//! Prim's algorithm, and provides the surrounding pieces needed to feed and
//! check it: a validated [`AdjacencyMatrix`], Euclidean
//! [`pairwise_distances`] over point sets, and [`verify_spanning_tree`].
//!
//! # Tie-breaking
//!
//! Candidate edges are ordered by `(weight, source, target)`. Among equal
//! weights the edge leaving the lowest-numbered tree vertex wins, then the
//! edge reaching the lowest-numbered new vertex. Builds are deterministic for
//! a fixed graph and start vertex.
//!
//! # Metrics
//!
//! With the `metrics` feature the builder emits:
//!
//! - `mst_builds_total` (counter)
//! - `mst_frontier_pushes_total` (counter)
//! - `mst_stale_candidates_total` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;

mod distance;
mod matrix;
mod mst;
mod verify;

pub use crate::{
    distance::{DistanceError, DistanceErrorCode, euclidean_distance, pairwise_distances},
    error::{MatrixError, MatrixErrorCode, MstError, MstErrorCode},
    matrix::AdjacencyMatrix,
    mst::{DisconnectedPolicy, PrimBuilder, SpanningTree, TreeEdge, prim_mst},
    verify::{
        TreeReport, VerificationError, VerificationErrorCode, verify_spanning_tree,
        verify_tree_matrix,
    },
};

#[cfg(test)]
pub(crate) mod test_utils;
