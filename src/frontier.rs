use crate::graph::NodeKey;
use crate::Cost;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A discovered Node waiting to be expanded.
///
/// `parent` is the Node that discovered it together with the weight of the Edge used,
/// `None` for the start of the search.
#[derive(Debug)]
pub(crate) struct HeuristicElement<'a, Id> {
    pub estimate: Cost,
    pub id: &'a Id,
    pub key: NodeKey,
    pub parent: Option<(NodeKey, Cost)>,
    seq: usize,
}

impl<Id: Ord> HeuristicElement<'_, Id> {
    // lowest estimate first, then lowest Id, then first pushed
    fn priority_cmp(&self, rhs: &Self) -> Ordering {
        self.estimate
            .cmp(&rhs.estimate)
            .then_with(|| self.id.cmp(rhs.id))
            .then_with(|| self.seq.cmp(&rhs.seq))
    }
}

impl<Id: Ord> PartialEq for HeuristicElement<'_, Id> {
    fn eq(&self, rhs: &Self) -> bool {
        self.priority_cmp(rhs) == Ordering::Equal
    }
}
impl<Id: Ord> Eq for HeuristicElement<'_, Id> {}
impl<Id: Ord> PartialOrd for HeuristicElement<'_, Id> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<Id: Ord> Ord for HeuristicElement<'_, Id> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        // BinaryHeap is a max-heap
        rhs.priority_cmp(self)
    }
}

/// The set of discovered but not yet expanded Nodes, ordered for selection.
///
/// The same Node may be pushed several times. Filtering those duplicates is up to the caller.
#[derive(Debug)]
pub(crate) struct Frontier<'a, Id> {
    heap: BinaryHeap<HeuristicElement<'a, Id>>,
    pushed: usize,
}

impl<'a, Id: Ord> Frontier<'a, Id> {
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            pushed: 0,
        }
    }

    pub fn push(
        &mut self,
        estimate: Cost,
        id: &'a Id,
        key: NodeKey,
        parent: Option<(NodeKey, Cost)>,
    ) {
        self.heap.push(HeuristicElement {
            estimate,
            id,
            key,
            parent,
            seq: self.pushed,
        });
        self.pushed += 1;
    }

    pub fn pop(&mut self) -> Option<HeuristicElement<'a, Id>> {
        self.heap.pop()
    }

    /// The total number of entries ever pushed, duplicates included
    pub fn pushed(&self) -> usize {
        self.pushed
    }
}
