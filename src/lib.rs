#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate for Greedy Best-First Search on weighted, directed Graphs.
//!
//! ## Introduction
//! Greedy Best-First Search explores a Graph by always expanding the discovered Node that *looks*
//! closest to the goal, according to a static Heuristic table supplied by the caller. Unlike A*
//! it never adds the Cost accumulated so far to that decision, which makes it find *a* way to the
//! goal quickly, though not necessarily the cheapest one.
//!
//! The search returns the order in which Nodes were expanded, together with an explicit
//! [`SearchOutcome`] that tells "goal found" apart from "goal unreachable". Malformed input
//! (a start Node that is not part of the Graph, or a Node without Heuristic) is reported as a
//! [`SearchError`] instead.
//!
//! ## Examples
//! Building a Graph and searching it:
//! ```
//! use best_first_search::prelude::*;
//! use std::collections::HashMap;
//!
//! // every Node with its outgoing Edges and their weights
//! let graph: Graph<&str> = [
//!     ("A", vec![("B", 6), ("C", 3)]),
//!     ("B", vec![("D", 2), ("E", 5)]),
//!     ("C", vec![("F", 4)]),
//!     ("D", vec![]),
//!     ("E", vec![("G", 2)]),
//!     ("F", vec![("G", 5)]),
//!     ("G", vec![]),
//! ]
//! .into_iter()
//! .collect();
//!
//! // estimated Cost from every Node to the goal "G"
//! let heuristic: HashMap<&str, usize> = [
//!     ("A", 10), ("B", 8), ("C", 5), ("D", 7), ("E", 3), ("F", 6), ("G", 0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let result = best_first_search(&graph, &heuristic, &"A", &"G").unwrap();
//!
//! assert_eq!(result.outcome(), SearchOutcome::Found);
//! assert_eq!(result.expansion_order(), ["A", "C", "F", "G"]);
//! assert_eq!(result.to_string(), "A -> C -> F -> G (found)");
//! ```
//!
//! ### Errors
//! ```
//! # use best_first_search::prelude::*;
//! # use std::collections::HashMap;
//! let graph: Graph<&str> = [("A", vec![("B", 1)])].into_iter().collect();
//! let heuristic: HashMap<&str, usize> = [("A", 1)].into_iter().collect();
//!
//! assert_eq!(
//!     best_first_search(&graph, &heuristic, &"X", &"B"),
//!     Err(SearchError::InvalidInput { start: "X" })
//! );
//! assert_eq!(
//!     best_first_search(&graph, &heuristic, &"A", &"B"),
//!     Err(SearchError::MissingHeuristic { node: "B" })
//! );
//! ```
//!
//! ### Configuration
//! [`best_first_search_with_config`] takes a [`SearchConfig`] to pre-size the internal
//! collections or to cap the number of expansions:
//! ```
//! # use best_first_search::prelude::*;
//! let graph: Graph<u32> = (0..100).map(|n| (n, vec![(n + 1, 1)])).collect();
//! let heuristic = FnHeuristic(|&n: &u32| Some(100 - n as usize));
//!
//! let result = best_first_search_with_config(
//!     &graph,
//!     &heuristic,
//!     &0,
//!     &100,
//!     SearchConfig::with_expansion_limit(10),
//! )
//! .unwrap();
//!
//! assert_eq!(result.outcome(), SearchOutcome::LimitReached);
//! ```
//!
//! ### Concurrency
//! A search only reads the Graph and the Heuristic, so any number of searches can share them.
//! [`search_all`] runs a batch of queries on the rayon thread pool when the `parallel` feature
//! is enabled (the default).
//!
//! ### Logging
//! With the `log` feature enabled, every expansion is logged at `trace` level and a summary with
//! timings at `debug` level.

/// a Type to represent Edge weights and Heuristic estimates
pub type Cost = usize;

mod error;
pub use self::error::SearchError;

mod frontier;

mod graph;
pub use self::graph::Graph;

mod heuristic;
pub use self::heuristic::{FnHeuristic, Heuristic};

mod path;
pub use self::path::Path;

mod search;
pub use self::search::{
    best_first_search, best_first_search_with_config, search_all, SearchOutcome, SearchResult,
};

mod search_config;
pub use self::search_config::SearchConfig;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        best_first_search, best_first_search_with_config, search_all, Cost, FnHeuristic, Graph,
        Heuristic, SearchConfig, SearchError, SearchOutcome, SearchResult,
    };
}
