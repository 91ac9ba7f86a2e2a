use crate::frontier::Frontier;
use crate::graph::NodeKey;
use crate::{Cost, Graph, Heuristic, Path, SearchConfig, SearchError};

use hashbrown::HashMap;
use std::fmt;
use std::hash::Hash;

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// The goal was expanded.
    Found,
    /// Every reachable Node was expanded without meeting the goal.
    Unreachable,
    /// The [`expansion_limit`](SearchConfig::expansion_limit) ran out before the goal was found.
    LimitReached,
}

/// The result of a successful search call: which Nodes were expanded, in what order, and
/// whether the goal was among them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<Id> {
    order: Vec<Id>,
    outcome: SearchOutcome,
    path: Option<Path<Id>>,
    discovered: usize,
}

impl<Id> SearchResult<Id> {
    /// `true` if the goal was reached
    pub fn found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    /// How the search ended
    pub fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    /// The expanded Nodes in expansion order. Ends with the goal if it was found.
    pub fn expansion_order(&self) -> &[Id] {
        &self.order
    }

    /// The chain of Nodes through which the goal was discovered, `None` unless it was found.
    ///
    /// Every Node on it was expanded, but not every expanded Node is on it.
    pub fn path(&self) -> Option<&Path<Id>> {
        self.path.as_ref()
    }

    /// The number of frontier insertions made by the search, duplicates included
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    /// Splits the result into the expansion order and the found flag
    pub fn into_parts(self) -> (Vec<Id>, bool) {
        let found = self.found();
        (self.order, found)
    }
}

impl<Id: fmt::Display> fmt::Display for SearchResult<Id> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self.order.split_first() {
            None => write!(fmt, "<empty>")?,
            Some((first, rest)) => {
                write!(fmt, "{}", first)?;
                for id in rest {
                    write!(fmt, " -> {}", id)?;
                }
            }
        }
        match self.outcome {
            SearchOutcome::Found => write!(fmt, " (found)"),
            SearchOutcome::Unreachable => write!(fmt, " (unreachable)"),
            SearchOutcome::LimitReached => write!(fmt, " (limit reached)"),
        }
    }
}

/// Searches a Graph using [Greedy Best-First Search](https://en.wikipedia.org/wiki/Best-first_search).
///
/// Nodes are expanded strictly in order of their Heuristic value, lowest first. Ties are broken
/// by the Ids of the Nodes, lowest first, which makes the result deterministic. The Edge weights
/// and the Cost accumulated on the way are never part of that decision, so this is **not** A*:
/// the goal is found quickly, but not necessarily along the cheapest Path.
///
/// A Node can end up on the frontier several times, once for every expanded neighbor that
/// discovered it, but it is only ever expanded once.
///
/// Uses the [`Default`] [`SearchConfig`]. See [`best_first_search_with_config`] for the
/// details.
///
/// ## Examples
/// Basic usage:
/// ```
/// use best_first_search::{best_first_search, Graph};
/// use std::collections::HashMap;
///
/// let graph: Graph<&str> = [
///     ("A", vec![("B", 6), ("C", 3)]),
///     ("B", vec![("D", 2), ("E", 5)]),
///     ("C", vec![("F", 4)]),
///     ("D", vec![]),
///     ("E", vec![("G", 2)]),
///     ("F", vec![("G", 5)]),
///     ("G", vec![]),
/// ]
/// .into_iter()
/// .collect();
///
/// let heuristic: HashMap<&str, usize> = [
///     ("A", 10), ("B", 8), ("C", 5), ("D", 7), ("E", 3), ("F", 6), ("G", 0),
/// ]
/// .into_iter()
/// .collect();
///
/// let result = best_first_search(&graph, &heuristic, &"A", &"G").unwrap();
///
/// assert!(result.found());
/// assert_eq!(result.expansion_order(), ["A", "C", "F", "G"]);
/// assert_eq!(result.path().unwrap().cost, 12);
/// ```
///
/// If the goal cannot be reached, the search still ends normally:
/// ```
/// # use best_first_search::{best_first_search, Graph, SearchOutcome};
/// # use std::collections::HashMap;
/// let graph: Graph<&str> = [("A", vec![("B", 1)]), ("C", vec![])].into_iter().collect();
/// let heuristic: HashMap<&str, usize> = [("A", 2), ("B", 1), ("C", 0)].into_iter().collect();
///
/// let result = best_first_search(&graph, &heuristic, &"A", &"C").unwrap();
///
/// assert_eq!(result.outcome(), SearchOutcome::Unreachable);
/// assert_eq!(result.expansion_order(), ["A", "B"]);
/// assert!(result.path().is_none());
/// ```
pub fn best_first_search<Id, H>(
    graph: &Graph<Id>,
    heuristic: &H,
    start: &Id,
    goal: &Id,
) -> Result<SearchResult<Id>, SearchError<Id>>
where
    Id: Clone + Eq + Hash + Ord + fmt::Debug,
    H: Heuristic<Id> + ?Sized,
{
    best_first_search_with_config(graph, heuristic, start, goal, SearchConfig::default())
}

/// [`best_first_search`] with explicit [`SearchConfig`].
///
/// ## Arguments
/// - `graph` - the Graph to search. It is only read.
/// - `heuristic` - the estimate for every Node that could end up on the frontier
/// - `start` - the starting Node. Has to be part of the `graph`.
/// - `goal` - the Node to look for. Does not have to be part of the `graph`, in which case it
///     is simply never found.
/// - `config` - see [`SearchConfig`]
///
/// ## Returns
/// A [`SearchResult`] with the expansion order and the [`SearchOutcome`], or
/// - [`SearchError::InvalidInput`] if `start` is not part of the `graph`
/// - [`SearchError::MissingHeuristic`] if `start` or a Node about to be put on the frontier
///     has no estimate.
///
/// Errors are returned as soon as they are detected and discard any partial progress.
pub fn best_first_search_with_config<Id, H>(
    graph: &Graph<Id>,
    heuristic: &H,
    start: &Id,
    goal: &Id,
    config: SearchConfig,
) -> Result<SearchResult<Id>, SearchError<Id>>
where
    Id: Clone + Eq + Hash + Ord + fmt::Debug,
    H: Heuristic<Id> + ?Sized,
{
    let start_key = graph.key_of(start).ok_or_else(|| SearchError::InvalidInput {
        start: start.clone(),
    })?;
    let start_estimate = heuristic
        .estimate(start)
        .ok_or_else(|| SearchError::MissingHeuristic {
            node: start.clone(),
        })?;

    #[cfg(feature = "log")]
    let timer = std::time::Instant::now();

    let mut order: Vec<NodeKey> = Vec::new();
    // expanded Node -> (parent, weight of the Edge from the parent)
    let mut visited: HashMap<NodeKey, Option<(NodeKey, Cost)>> =
        HashMap::with_capacity(config.size_hint);
    let mut frontier = Frontier::with_capacity(config.size_hint);
    frontier.push(start_estimate, &graph.node(start_key).id, start_key, None);

    let mut outcome = SearchOutcome::Unreachable;

    while let Some(current) = frontier.pop() {
        if visited.contains_key(&current.key) {
            continue;
        }
        if config
            .expansion_limit
            .map_or(false, |limit| order.len() >= limit)
        {
            outcome = SearchOutcome::LimitReached;
            break;
        }

        #[cfg(feature = "log")]
        log::trace!(
            "expanding {:?} (h = {}) after {} expansions",
            current.id,
            current.estimate,
            order.len()
        );

        order.push(current.key);
        visited.insert(current.key, current.parent);

        if current.id == goal {
            outcome = SearchOutcome::Found;
            break;
        }

        for &(other_key, weight) in graph.node(current.key).edges.iter() {
            if visited.contains_key(&other_key) {
                continue;
            }
            let other_id = &graph.node(other_key).id;
            let estimate = heuristic
                .estimate(other_id)
                .ok_or_else(|| SearchError::MissingHeuristic {
                    node: other_id.clone(),
                })?;
            frontier.push(estimate, other_id, other_key, Some((current.key, weight)));
        }
    }

    #[cfg(feature = "log")]
    log::debug!(
        "best-first search {:?} -> {:?}: {:?} after {} expansions, {} frontier pushes, took {:?}",
        start,
        goal,
        outcome,
        order.len(),
        frontier.pushed(),
        timer.elapsed()
    );

    let path = match (outcome, order.last()) {
        (SearchOutcome::Found, Some(&goal_key)) => {
            let mut steps = vec![];
            let mut cost: Cost = 0;
            let mut current = goal_key;

            while let Some((prev, weight)) = visited[&current] {
                steps.push(graph.node(current).id.clone());
                cost = cost.saturating_add(weight);
                current = prev;
            }
            steps.push(graph.node(current).id.clone());
            steps.reverse();
            Some(Path::new(steps, cost))
        }
        _ => None,
    };

    Ok(SearchResult {
        order: order
            .into_iter()
            .map(|key| graph.node(key).id.clone())
            .collect(),
        outcome,
        path,
        discovered: frontier.pushed(),
    })
}

/// Runs one independent [`best_first_search_with_config`] for every `(start, goal)` query.
///
/// All searches share the read-only `graph` and `heuristic`, while each one owns its own
/// frontier and visited set. With the `parallel` feature (enabled by default) the queries are
/// spread over the rayon thread pool.
///
/// ## Returns
/// One result per query, in the order of `queries`. A failing query does not affect the others.
///
/// ## Examples
/// ```
/// use best_first_search::{search_all, Graph, SearchConfig};
/// use std::collections::HashMap;
///
/// let graph: Graph<u32> = [(0, vec![(1, 1)]), (1, vec![(2, 1)])].into_iter().collect();
/// let heuristic: HashMap<u32, usize> = [(0, 2), (1, 1), (2, 0)].into_iter().collect();
///
/// let results = search_all(&graph, &heuristic, &[(0, 2), (2, 0), (9, 0)], SearchConfig::default());
///
/// assert!(results[0].as_ref().unwrap().found());
/// assert!(!results[1].as_ref().unwrap().found());
/// assert!(results[2].is_err());
/// ```
pub fn search_all<Id, H>(
    graph: &Graph<Id>,
    heuristic: &H,
    queries: &[(Id, Id)],
    config: SearchConfig,
) -> Vec<Result<SearchResult<Id>, SearchError<Id>>>
where
    Id: Clone + Eq + Hash + Ord + fmt::Debug + Send + Sync,
    H: Heuristic<Id> + Sync + ?Sized,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        queries
            .par_iter()
            .map(|(start, goal)| {
                best_first_search_with_config(graph, heuristic, start, goal, config)
            })
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        queries
            .iter()
            .map(|(start, goal)| {
                best_first_search_with_config(graph, heuristic, start, goal, config)
            })
            .collect()
    }
}
