//! Minimum spanning tree (MST) construction over dense adjacency matrices.
//!
//! Implements Prim's algorithm with a lazily pruned binary heap. Candidate
//! edges are ordered by `(weight, source, target)`, so ties between equal
//! weights always resolve to the lowest source index and then the lowest
//! target index. The output for a given graph and start vertex is therefore
//! fully deterministic.

mod tree;

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::{debug, instrument, warn};

use crate::{AdjacencyMatrix, error::MstError};

pub use self::tree::{SpanningTree, TreeEdge};

/// Selects what happens when the frontier empties before every vertex has
/// joined the tree.
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyMatrix, DisconnectedPolicy, PrimBuilder};
///
/// let graph = AdjacencyMatrix::try_from_rows(vec![
///     vec![0.0, 1.0, 0.0],
///     vec![1.0, 0.0, 0.0],
///     vec![0.0, 0.0, 0.0],
/// ])?;
/// let partial = PrimBuilder::new()
///     .with_disconnected_policy(DisconnectedPolicy::Partial)
///     .build(&graph)?;
/// assert_eq!(partial.edge_count(), 1);
/// assert!(!partial.is_spanning());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DisconnectedPolicy {
    /// Fail with [`MstError::Disconnected`].
    #[default]
    Reject,
    /// Return the tree of the component reachable from the start vertex.
    Partial,
}

/// Configures a Prim build.
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyMatrix, PrimBuilder};
///
/// let graph = AdjacencyMatrix::try_from_rows(vec![
///     vec![0.0, 1.0, 3.0],
///     vec![1.0, 0.0, 1.0],
///     vec![3.0, 1.0, 0.0],
/// ])?;
/// let tree = PrimBuilder::new().with_start_vertex(2).build(&graph)?;
/// assert_eq!(tree.edge_count(), 2);
/// assert_eq!(tree.total_weight(), 2.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrimBuilder {
    start_vertex: usize,
    disconnected_policy: DisconnectedPolicy,
}

impl PrimBuilder {
    /// Creates a builder rooted at vertex 0 that rejects disconnected graphs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex the tree grows from.
    #[must_use]
    pub fn with_start_vertex(mut self, vertex: usize) -> Self {
        self.start_vertex = vertex;
        self
    }

    /// Returns the configured start vertex.
    #[must_use]
    pub fn start_vertex(&self) -> usize {
        self.start_vertex
    }

    /// Overrides how disconnected graphs are reported.
    #[must_use]
    pub fn with_disconnected_policy(mut self, policy: DisconnectedPolicy) -> Self {
        self.disconnected_policy = policy;
        self
    }

    /// Returns the configured disconnected-graph policy.
    #[must_use]
    pub fn disconnected_policy(&self) -> DisconnectedPolicy {
        self.disconnected_policy
    }

    /// Computes the minimum spanning tree of `graph`.
    ///
    /// Empty and single-vertex graphs produce trees with no edges. The start
    /// vertex is only checked when the graph has at least one vertex.
    ///
    /// # Errors
    /// - [`MstError::InvalidStartVertex`] when the start vertex is not in the graph.
    /// - [`MstError::Disconnected`] when the graph is disconnected and the
    ///   policy is [`DisconnectedPolicy::Reject`].
    #[instrument(
        name = "prim_mst",
        skip(self, graph),
        fields(node_count = graph.len(), start_vertex = self.start_vertex)
    )]
    pub fn build(&self, graph: &AdjacencyMatrix) -> Result<SpanningTree, MstError> {
        let node_count = graph.len();
        if node_count == 0 {
            return Ok(SpanningTree::empty(0));
        }
        if self.start_vertex >= node_count {
            return Err(MstError::InvalidStartVertex {
                vertex: self.start_vertex,
                node_count,
            });
        }

        #[cfg(feature = "metrics")]
        metrics::counter!("mst_builds_total").increment(1);

        let (tree, stats) = grow_tree(graph, self.start_vertex);
        debug!(
            edges = tree.edge_count(),
            pushes = stats.pushes,
            stale_pops = stats.stale_pops,
            "prim construction finished"
        );

        #[cfg(feature = "metrics")]
        {
            metrics::counter!("mst_frontier_pushes_total").increment(stats.pushes);
            metrics::counter!("mst_stale_candidates_total").increment(stats.stale_pops);
        }

        if tree.is_spanning() {
            return Ok(tree);
        }

        let reached = tree.edge_count().saturating_add(1);
        warn!(reached, node_count, "graph is not connected");
        match self.disconnected_policy {
            DisconnectedPolicy::Reject => Err(MstError::Disconnected {
                reached,
                node_count,
            }),
            DisconnectedPolicy::Partial => Ok(tree),
        }
    }
}

/// Computes the minimum spanning tree of `graph` rooted at vertex 0.
///
/// Equivalent to `PrimBuilder::new().build(graph)`.
///
/// # Errors
/// Returns [`MstError::Disconnected`] when the graph is not connected.
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyMatrix, prim_mst};
///
/// let graph = AdjacencyMatrix::try_from_rows(vec![
///     vec![0.0, 1.0, 2.0, 1.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![1.0, 2.0, 1.0, 0.0],
/// ])?;
/// let tree = prim_mst(&graph)?;
/// assert_eq!(tree.edge_count(), 3);
/// assert_eq!(tree.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn prim_mst(graph: &AdjacencyMatrix) -> Result<SpanningTree, MstError> {
    PrimBuilder::new().build(graph)
}

/// Frontier entry ordered lexicographically by `(weight, source, target)`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Candidate {
    weight: f64,
    source: usize,
    target: usize,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct FrontierStats {
    pushes: u64,
    stale_pops: u64,
}

struct Frontier {
    heap: BinaryHeap<Reverse<Candidate>>,
    stats: FrontierStats,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            stats: FrontierStats::default(),
        }
    }

    /// Pushes every edge from `source` to a vertex outside the tree.
    fn extend_from(&mut self, graph: &AdjacencyMatrix, source: usize, visited: &[bool]) {
        for (target, weight) in graph.neighbours(source) {
            if visited.get(target).copied().unwrap_or(true) {
                continue;
            }
            self.heap.push(Reverse(Candidate {
                weight,
                source,
                target,
            }));
            self.stats.pushes += 1;
        }
    }

    /// Pops the cheapest candidate whose target is still outside the tree.
    fn pop_fresh(&mut self, visited: &[bool]) -> Option<Candidate> {
        while let Some(Reverse(candidate)) = self.heap.pop() {
            if visited.get(candidate.target).copied().unwrap_or(true) {
                self.stats.stale_pops += 1;
                continue;
            }
            return Some(candidate);
        }
        None
    }
}

fn grow_tree(graph: &AdjacencyMatrix, start: usize) -> (SpanningTree, FrontierStats) {
    let node_count = graph.len();
    let target_edges = node_count.saturating_sub(1);
    let mut tree = SpanningTree::empty(node_count);
    let mut visited = vec![false; node_count];
    if let Some(flag) = visited.get_mut(start) {
        *flag = true;
    }

    let mut frontier = Frontier::new();
    frontier.extend_from(graph, start, &visited);

    while tree.edge_count() < target_edges {
        let Some(candidate) = frontier.pop_fresh(&visited) else {
            break;
        };
        if let Some(flag) = visited.get_mut(candidate.target) {
            *flag = true;
        }
        tree.insert(TreeEdge::new(
            candidate.source,
            candidate.target,
            candidate.weight,
        ));
        frontier.extend_from(graph, candidate.target, &visited);
    }

    (tree, frontier.stats)
}


#[cfg(test)]
mod property;
