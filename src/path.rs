use crate::Cost;

/// The chain of Nodes through which a search discovered its goal.
///
/// Stores the sequence of Nodes in `path` and the sum of the Edge weights along it in `cost`.
/// The first Node is always the start of the search, the last one is the goal.
///
/// Note that this is **not** necessarily the cheapest Path to the goal: greedy best-first search
/// never looks at accumulated Costs when choosing what to expand next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    /// the Nodes of the Path, in walking order
    pub path: Vec<P>,
    /// the total Cost of the Edges along the Path, saturating at `Cost::MAX`
    pub cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use best_first_search::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 42);
    ///
    /// assert_eq!(path.path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost, 42);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
