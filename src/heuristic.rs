//! Static per-Node estimates of the remaining Cost to the goal.

use crate::Cost;
use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hash};

/// Provides the Heuristic of a search: an estimate of how expensive it is to reach the goal
/// from a Node.
///
/// The estimate is static, it does not depend on how the Node was reached. Returning `None`
/// means that there is no estimate for that Node, which makes a search that needs it fail with
/// [`SearchError::MissingHeuristic`](crate::SearchError::MissingHeuristic).
///
/// Implemented for the common lookup tables (`HashMap`, `BTreeMap`) as well as for closures
/// wrapped in a [`FnHeuristic`].
pub trait Heuristic<Id> {
    /// The estimated Cost of reaching the goal from `node`
    fn estimate(&self, node: &Id) -> Option<Cost>;
}

impl<Id: Eq + Hash, S: BuildHasher> Heuristic<Id> for hashbrown::HashMap<Id, Cost, S> {
    fn estimate(&self, node: &Id) -> Option<Cost> {
        self.get(node).copied()
    }
}

impl<Id: Eq + Hash, S: BuildHasher> Heuristic<Id> for std::collections::HashMap<Id, Cost, S> {
    fn estimate(&self, node: &Id) -> Option<Cost> {
        self.get(node).copied()
    }
}

impl<Id: Ord> Heuristic<Id> for BTreeMap<Id, Cost> {
    fn estimate(&self, node: &Id) -> Option<Cost> {
        self.get(node).copied()
    }
}

impl<Id, H: Heuristic<Id> + ?Sized> Heuristic<Id> for &H {
    fn estimate(&self, node: &Id) -> Option<Cost> {
        (**self).estimate(node)
    }
}

/// Turns a Function into a [`Heuristic`].
///
/// ```
/// use best_first_search::{FnHeuristic, Heuristic};
///
/// // distance on a number line to the goal 10, nothing known below 0
/// let heuristic = FnHeuristic(|&n: &i32| (n >= 0).then(|| n.abs_diff(10) as usize));
///
/// assert_eq!(heuristic.estimate(&4), Some(6));
/// assert_eq!(heuristic.estimate(&-1), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnHeuristic<F>(pub F);

impl<Id, F: Fn(&Id) -> Option<Cost>> Heuristic<Id> for FnHeuristic<F> {
    fn estimate(&self, node: &Id) -> Option<Cost> {
        (self.0)(node)
    }
}
