/*!
# Vertex Representation

We choose `Vertex = u32` as teaching-sized graphs stay far below `2^32` vertices.
A vertex is valid for a graph with `n` vertices iff it lies in `0..n`.
*/

/// Vertices are unsigned integers from `0` to `n - 1`
pub type Vertex = u32;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumVertices = Vertex;

/// The number of edges is caller-asserted and not bounded by the number of vertices,
/// so it gets the full `u64` range.
pub type NumEdges = u64;
