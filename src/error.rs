use thiserror::Error;

/// The ways a search can fail because of bad input.
///
/// An unreachable goal is **not** an error. It is reported as
/// [`SearchOutcome::Unreachable`](crate::SearchOutcome::Unreachable) instead.
///
/// Neither error is transient: retrying with the same Graph and Heuristic fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError<Id> {
    /// The start Node is not part of the Graph.
    #[error("start node {start:?} is not part of the graph")]
    InvalidInput {
        /// the requested start Node
        start: Id,
    },
    /// A Node was about to be put on the frontier, but the Heuristic has no estimate for it.
    #[error("no heuristic estimate for node {node:?}")]
    MissingHeuristic {
        /// the Node without an estimate
        node: Id,
    },
}
