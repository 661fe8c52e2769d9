/*!
`graphbase` defines the contract shared by the graph representations of a small teaching library.
Graphs are **unlabelled**: vertices are numbered `0` to `n - 1`.

# Representation

We represent **vertices** as `u32` in the range `0..n` where `n` is the number of vertices in the graph.
For **edges**, we use a simple tuple-struct `Edge(Vertex, Vertex)`; edges carrying additional
data are available as `WeightedEdge<W>`.

# Design

Every representation embeds a [`GraphBase`](crate::ops::GraphBase), which holds
- the number of vertices, fixed once the graph is constructed, and
- the number of edges, which is asserted by whoever constructs the graph and may be updated
  exactly once afterwards (for representations that only learn it while reading their edges).

The [`Graph`](crate::ops::Graph) trait asks representations for two hooks, `neighbor_count` and
`has_edge`, and derives validated degree queries as well as degree statistics from them.
Whether a graph is directed is a property of the representation alone.

[`other_endpoint`](crate::ops::other_endpoint) resolves the opposite endpoint of an edge, no matter
if the edge is given as a raw neighbor id, an edge value or an edge behind a reference or smart pointer.

# Usage

There are *4* submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, the graph contract and the provided representations,
- [`ops`] includes [`GraphBase`](crate::ops::GraphBase) and the [`Graph`](crate::ops::Graph) contract,
- [`io`] includes the token reader and header parsing every stream-constructed graph relies on as well as
  readers/writers for edge lists,
- [`repr`] includes adjacency-list representations for undirected and directed graphs.

```
use graphbase::{io::EdgeListRead, prelude::*};

let graph = UndirectedGraph::try_read_edge_list("4 3\n0 1\n1 2\n1 3\n".as_bytes()).unwrap();

assert_eq!(graph.number_of_vertices(), 4);
assert_eq!(graph.number_of_edges(), 3);
assert_eq!(graph.degree(1).unwrap(), 3);
assert_eq!(graph.max_degree(), 3);
assert_eq!(graph.avg_degree(), 1.5);
assert!(graph.degree(4).is_err());
```
*/

pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

/// `graphbase::prelude` includes definitions for vertices and edges, the graph contract as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
