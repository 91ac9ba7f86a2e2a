//! The weighted, directed Graph that searches run on.

use crate::Cost;
use hashbrown::HashMap;
use slab::Slab;
use std::hash::Hash;

/// Internal handle of a Node inside a [`Graph`]
pub(crate) type NodeKey = usize;

#[derive(Clone, Debug)]
pub(crate) struct Node<Id> {
    pub id: Id,
    pub edges: Vec<(NodeKey, Cost)>,
}

impl<Id> Node<Id> {
    fn new(id: Id) -> Self {
        Node {
            id,
            edges: Vec::new(),
        }
    }
}

/// A weighted, directed Graph stored as an adjacency list.
///
/// Every Node is identified by a user-supplied `Id` (a `&str`, a number, a Grid position, ...)
/// and owns an ordered list of outgoing Edges to other Nodes, each with a [`Cost`].
/// The order of the Edges is the order in which they were added, which is also the order in
/// which a search discovers the neighbors of a Node.
///
/// Adding an Edge to a Node that is not yet part of the Graph adds that Node with no outgoing
/// Edges, so leaves never have to be declared explicitly.
///
/// ## Examples
/// ```
/// use best_first_search::Graph;
///
/// let graph: Graph<&str> = [
///     ("A", vec![("B", 6), ("C", 3)]),
///     ("B", vec![("D", 2)]),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(graph.len(), 4);
/// assert!(graph.contains(&"D"));
///
/// let neighbors: Vec<_> = graph.neighbors(&"A").unwrap().collect();
/// assert_eq!(neighbors, vec![(&"B", 6), (&"C", 3)]);
/// ```
#[derive(Clone, Debug)]
pub struct Graph<Id> {
    nodes: Slab<Node<Id>>,
    index: HashMap<Id, NodeKey>,
}

impl<Id> Default for Graph<Id> {
    fn default() -> Self {
        Graph {
            nodes: Slab::new(),
            index: HashMap::new(),
        }
    }
}

impl<Id: Clone + Eq + Hash> Graph<Id> {
    /// Creates an empty Graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty Graph with space for `capacity` Nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a Graph from an adjacency list of `(node, [(neighbor, weight), ...])` entries.
    ///
    /// Same as collecting the iterator.
    pub fn from_adjacency<E>(adjacency: impl IntoIterator<Item = (Id, E)>) -> Self
    where
        E: IntoIterator<Item = (Id, Cost)>,
    {
        let mut graph = Graph::new();
        for (id, edges) in adjacency {
            graph.add_node(id.clone());
            for (other, weight) in edges {
                graph.add_edge(id.clone(), other, weight);
            }
        }
        graph
    }

    /// The number of Nodes in the Graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Graph has no Nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` if `id` is a Node of this Graph
    pub fn contains(&self, id: &Id) -> bool {
        self.index.contains_key(id)
    }

    /// Adds a Node without any Edges.
    ///
    /// Returns `false` if the Node was already part of the Graph, in which case nothing changes.
    pub fn add_node(&mut self, id: Id) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.insert_node(id);
        true
    }

    /// Adds a directed Edge from `src` to `target`, adding either Node if necessary.
    ///
    /// Parallel Edges and self-loops are allowed.
    pub fn add_edge(&mut self, src: Id, target: Id, weight: Cost) {
        let src = self.key_or_insert(src);
        let target = self.key_or_insert(target);
        self.nodes[src].edges.push((target, weight));
    }

    /// Removes a Node together with all Edges leading to or from it.
    ///
    /// Returns `false` if the Node was not part of the Graph.
    pub fn remove_node(&mut self, id: &Id) -> bool {
        let Some(key) = self.index.remove(id) else {
            return false;
        };
        self.nodes.remove(key);
        for (_, node) in self.nodes.iter_mut() {
            node.edges.retain(|&(other, _)| other != key);
        }
        true
    }

    /// The outgoing Edges of a Node as `(neighbor, weight)`, in insertion order.
    ///
    /// Returns `None` if `id` is not part of the Graph.
    pub fn neighbors<'a>(&'a self, id: &Id) -> Option<impl Iterator<Item = (&'a Id, Cost)> + 'a> {
        let key = self.key_of(id)?;
        Some(
            self.nodes[key]
                .edges
                .iter()
                .map(move |&(other, weight)| (&self.nodes[other].id, weight)),
        )
    }

    /// An Iterator over all Nodes of the Graph
    pub fn nodes(&self) -> impl Iterator<Item = &Id> + '_ {
        self.nodes.iter().map(|(_, node)| &node.id)
    }

    pub(crate) fn key_of(&self, id: &Id) -> Option<NodeKey> {
        self.index.get(id).copied()
    }

    pub(crate) fn node(&self, key: NodeKey) -> &Node<Id> {
        &self.nodes[key]
    }

    fn key_or_insert(&mut self, id: Id) -> NodeKey {
        match self.key_of(&id) {
            Some(key) => key,
            None => self.insert_node(id),
        }
    }

    fn insert_node(&mut self, id: Id) -> NodeKey {
        let key = self.nodes.insert(Node::new(id.clone()));
        self.index.insert(id, key);
        key
    }
}

impl<Id: Clone + Eq + Hash, E> FromIterator<(Id, E)> for Graph<Id>
where
    E: IntoIterator<Item = (Id, Cost)>,
{
    fn from_iter<T: IntoIterator<Item = (Id, E)>>(iter: T) -> Self {
        Graph::from_adjacency(iter)
    }
}
