pub(crate) mod cycles;
pub mod traversal;

use crate::dots_and_boxes::prelude::*;

/// An opaque vertex id, unique within one graph.
pub type Vertex = usize;

/// An undirected edge between two distinct vertices.
///
/// The endpoints are stored low-then-high, so `Edge::new(a, b) == Edge::new(b, a)` and both orderings hash and
/// sort identically everywhere an edge is used as a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(Vertex, Vertex);

impl Edge {
    /// Constructs an edge in canonical orientation.
    pub fn new(a: Vertex, b: Vertex) -> Edge {
        if a <= b { Edge(a, b) } else { Edge(b, a) }
    }

    pub fn low(&self) -> Vertex {
        self.0
    }

    pub fn high(&self) -> Vertex {
        self.1
    }

    /// Whether both ends name the same vertex.
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    pub fn endpoints(&self) -> [Vertex; 2] {
        [self.0, self.1]
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((a, b): (Vertex, Vertex)) -> Self {
        Edge::new(a, b)
    }
}

/// An undirected graph stored as adjacency sets.
///
/// Adjacency is kept symmetric by every mutator, and ordered so that iteration is reproducible between runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<Vertex, BTreeSet<Vertex>>,
}

impl Graph {
    /// Returns an empty graph.
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Adds a new vertex with no neighbours.
    pub fn add_vertex(&mut self, v: Vertex) -> std::result::Result<&mut Self, GraphError> {
        if self.adjacency.contains_key(&v) {
            return Err(GraphError::DuplicateVertex(v));
        }
        self.adjacency.insert(v, BTreeSet::new());
        Ok(self)
    }

    /// Adds an edge between two existing vertices; adding an existing edge again changes nothing.
    pub fn add_edge(&mut self, e: Edge) -> std::result::Result<&mut Self, GraphError> {
        for v in e.endpoints() {
            if !self.is_vertex(v) {
                return Err(GraphError::UnknownVertex(v));
            }
        }
        if e.is_loop() {
            return Err(GraphError::SelfLoop(e.low()));
        }

        let [a, b] = e.endpoints();
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        Ok(self)
    }

    /// Determines if the edge is in the graph.
    pub fn is_edge(&self, e: Edge) -> bool {
        self.adjacency.get(&e.low()).is_some_and(|adj| adj.contains(&e.high()))
    }

    pub fn is_vertex(&self, v: Vertex) -> bool {
        self.adjacency.contains_key(&v)
    }

    /// Removes an edge if it exists.
    pub fn remove_edge(&mut self, e: Edge) -> &mut Self {
        let [a, b] = e.endpoints();
        if let Some(adj) = self.adjacency.get_mut(&a) {
            adj.remove(&b);
        }
        if let Some(adj) = self.adjacency.get_mut(&b) {
            adj.remove(&a);
        }
        self
    }

    /// The vertices sharing an edge with `v`.
    ///
    /// # Panics
    /// If `v` is not a vertex of this graph; callers check with [`Graph::is_vertex`] first.
    pub fn neighbours(&self, v: Vertex) -> &BTreeSet<Vertex> {
        &self.adjacency[&v]
    }

    /// Every vertex, in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    /// Every edge exactly once, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(&v, adj)| {
            adj.range(v + 1..).map(move |&w| Edge::new(v, w))
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|adj| adj.len()).sum::<usize>() / 2
    }
}
