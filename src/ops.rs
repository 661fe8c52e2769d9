//! # Graph Operations
//!
//! [`GraphBase`] holds what every representation shares: a fixed number of vertices and
//! a caller-asserted number of edges. Representations embed it and implement [`Graph`],
//! supplying the two adjacency-dependent hooks [`Graph::neighbor_count`] and
//! [`Graph::has_edge`]; all degree statistics are derived from those.

use std::{io::BufRead, ops::Range};

use tracing::trace;

use crate::{edge::*, error::*, io::*, node::*};

/// Vertex and edge counts shared by all graph representations.
///
/// The number of vertices is fixed for the lifetime of the value. The number of edges is
/// set at construction and may be overwritten exactly once through
/// [`GraphBase::set_number_of_edges`], for representations that only learn it after
/// reading their edges. It is never checked against any adjacency data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphBase {
    num_vertices: NumVertices,
    num_edges: NumEdges,
    /// Set once the number of edges was updated after construction
    edges_frozen: bool,
}

impl GraphBase {
    /// Creates the base of a graph with `n` vertices and no edges
    pub fn new(n: NumVertices) -> Self {
        Self::with_edges(n, 0)
    }

    /// Creates the base of a graph with `n` vertices and `m` edges,
    /// for representations that know both upfront
    pub fn with_edges(n: NumVertices, m: NumEdges) -> Self {
        Self {
            num_vertices: n,
            num_edges: m,
            edges_frozen: false,
        }
    }

    /// Reads the header `"{n} {m}"` from the reader.
    ///
    /// As the reader is consumed, use [`GraphBase::try_from_tokens`] if the stream
    /// continues with data that should be read afterwards.
    ///
    /// # Errors
    /// Returns [`GraphError::MalformedInput`] if the stream does not start with two
    /// unsigned integers.
    pub fn try_from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::try_from_tokens(&mut TokenReader::new(reader))
    }

    /// Reads the header `"{n} {m}"` as the next two tokens, leaving the rest of the stream untouched.
    ///
    /// # Errors
    /// Returns [`GraphError::MalformedInput`] if the next two tokens are not unsigned integers.
    pub fn try_from_tokens<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Self> {
        GraphHeader::try_read(tokens).map(Self::from)
    }

    /// Returns the number of vertices
    pub fn number_of_vertices(&self) -> NumVertices {
        self.num_vertices
    }

    /// Returns the number of edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Overwrites the number of edges.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeCountFrozen`] if the number of edges was already updated.
    pub fn set_number_of_edges(&mut self, m: NumEdges) -> Result<()> {
        if self.edges_frozen {
            return Err(GraphError::EdgeCountFrozen);
        }

        trace!(from = self.num_edges, to = m, "update number of edges");
        self.num_edges = m;
        self.edges_frozen = true;
        Ok(())
    }

    /// Returns *true* if `v` is a vertex of the graph
    pub fn has_vertex(&self, v: Vertex) -> bool {
        v < self.num_vertices
    }

    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] unless `v < n`
    pub fn validate_vertex(&self, v: Vertex) -> Result<()> {
        if self.has_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: v,
                num_vertices: self.num_vertices,
            })
        }
    }

    /// # Errors
    /// Returns [`GraphError::InvalidVertices`] if both `v` and `w` are out of range and
    /// [`GraphError::InvalidVertex`] naming the offending vertex if only one is.
    pub fn validate_vertices(&self, v: Vertex, w: Vertex) -> Result<()> {
        match (self.has_vertex(v), self.has_vertex(w)) {
            (true, true) => Ok(()),
            (false, false) => Err(GraphError::InvalidVertices {
                v,
                w,
                num_vertices: self.num_vertices,
            }),
            (false, true) => self.validate_vertex(v),
            (true, false) => self.validate_vertex(w),
        }
    }
}

impl From<GraphHeader> for GraphBase {
    fn from(header: GraphHeader) -> Self {
        Self::with_edges(header.number_of_vertices, header.number_of_edges)
    }
}

/// The contract every graph representation fulfills.
///
/// Implementors provide access to their [`GraphBase`] and the two adjacency hooks.
/// Whether the graph is directed is up to the implementation: for directed graphs
/// `neighbor_count` counts outgoing edges and `has_edge(v, w)` tests for the edge from `v` to `w`.
pub trait Graph {
    /// Returns the shared vertex and edge counts
    fn base(&self) -> &GraphBase;

    /// Returns the number of edges incident to (or leaving) `v`
    /// ** Might panic if `v >= n` **
    fn neighbor_count(&self, v: Vertex) -> NumVertices;

    /// Returns *true* if an edge connects `v` and `w`.
    ///
    /// # Errors
    /// Implementations return [`GraphError::InvalidVertex`] / [`GraphError::InvalidVertices`]
    /// for out-of-range vertices, usually through [`Graph::validate_vertices`].
    fn has_edge(&self, v: Vertex, w: Vertex) -> Result<bool>;

    /// Returns the number of vertices
    fn number_of_vertices(&self) -> NumVertices {
        self.base().number_of_vertices()
    }

    /// Returns the number of edges
    fn number_of_edges(&self) -> NumEdges {
        self.base().number_of_edges()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }

    /// Returns the range `0..n` of all vertices
    fn vertices(&self) -> Range<Vertex> {
        0..self.number_of_vertices()
    }

    /// Returns *true* if `v` is a vertex of the graph
    fn has_vertex(&self, v: Vertex) -> bool {
        self.base().has_vertex(v)
    }

    /// Returns the degree of `v`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] unless `v < n`
    fn degree(&self, v: Vertex) -> Result<NumVertices> {
        self.validate_vertex(v)?;
        Ok(self.neighbor_count(v))
    }

    /// Returns an iterator over the degrees of all vertices in order
    fn degrees(&self) -> impl Iterator<Item = NumVertices> + '_ {
        self.vertices().map(move |v| self.neighbor_count(v))
    }

    /// Returns the minimum degree in the graph or `0` if there are no vertices
    fn min_degree(&self) -> NumVertices {
        self.degrees().min().unwrap_or(0)
    }

    /// Returns the maximum degree in the graph or `0` if there are no vertices
    fn max_degree(&self) -> NumVertices {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the average degree.
    ///
    /// A graph without vertices divides `0.0` by `0.0` and yields `NaN`.
    fn avg_degree(&self) -> f64 {
        let sum: f64 = self.degrees().map(f64::from).sum();
        sum / f64::from(self.number_of_vertices())
    }

    /// See [`GraphBase::validate_vertex`]
    fn validate_vertex(&self, v: Vertex) -> Result<()> {
        self.base().validate_vertex(v)
    }

    /// See [`GraphBase::validate_vertices`]
    fn validate_vertices(&self, v: Vertex, w: Vertex) -> Result<()> {
        self.base().validate_vertices(v, w)
    }
}

/// Returns the endpoint opposite to `known` of an edge given in any [`EdgeRef`] shape.
///
/// ```
/// use std::rc::Rc;
/// use graphbase::prelude::*;
///
/// let neighbor: Vertex = 5;
/// assert_eq!(other_endpoint(1, neighbor), 5);
/// assert_eq!(other_endpoint(1, Edge(1, 3)), 3);
/// assert_eq!(other_endpoint(3, &Edge(1, 3)), 1);
/// assert_eq!(other_endpoint(1, Rc::new(Edge(1, 3))), 3);
/// assert_eq!(other_endpoint(3, Box::new(WeightedEdge::new(1, 3, 0.5))), 1);
/// ```
#[inline]
pub fn other_endpoint<E: EdgeRef>(known: Vertex, edge: E) -> Vertex {
    edge.resolve_other(known)
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: Graph {
    /// *true* if edges are stored with orientation
    const DIRECTED: bool;

    /// Returns an iterator over the (outgoing) neighbors of `v`
    /// ** Panics if `v >= n` **
    fn neighbors_of(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_;

    /// Returns an iterator over the edges `(v, w)` for all neighbors `w` of `v`
    /// ** Panics if `v >= n` **
    fn edges_of(&self, v: Vertex) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(v).map(move |w| Edge(v, w))
    }

    /// Returns an iterator over all edges in the graph.
    /// For undirected graphs, each edge is reported once in normalized form.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |v| self.edges_of(v))
            .filter(|e| Self::DIRECTED || e.is_normalized())
    }
}

/// Trait for creating a graph from scratch from a set of edges and a number of vertices
pub trait GraphFromScratch: Sized {
    /// Creates the graph on top of an existing base and records the number of given edges
    /// as its edge count.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertices`] / [`GraphError::InvalidVertex`] if an edge has an
    /// out-of-range endpoint and [`GraphError::EdgeCountFrozen`] if the base's edge count
    /// was already updated.
    fn try_from_base<I>(base: GraphBase, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>;

    /// Creates a graph with `n` vertices and the given edges
    ///
    /// # Errors
    /// See [`GraphFromScratch::try_from_base`]
    fn from_edges<I>(n: NumVertices, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        Self::try_from_base(GraphBase::new(n), edges)
    }
}
