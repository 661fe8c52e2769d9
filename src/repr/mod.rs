/*!
# Representations

Adjacency-list backed implementations of [`Graph`]:

- [`UndirectedGraph`]: every edge `{u, v}` is stored at both endpoints (a self-loop once).
- [`Digraph`]: every edge `(u, v)` is stored at `u` only; in-degrees are tracked separately.

Both allow parallel edges and are immutable once built, either from an edge list via
[`GraphFromScratch`] or from a stream via [`EdgeListRead`](crate::io::EdgeListRead).
Their number of edges is the number of edges they were built from.
*/

use std::fmt::Display;

use itertools::Itertools;

use crate::{edge::*, error::*, node::*, ops::*};

mod directed;
mod undirected;

pub use directed::*;
pub use undirected::*;

pub(crate) mod macros {
    /// Implements [`Graph`], [`AdjacencyList`] and [`Display`] for a struct with fields
    /// `base: GraphBase` and `nbs: Vec<Vec<Vertex>>`
    macro_rules! impl_adjacency_graph {
        ($struct:ident, $directed:literal) => {
            impl Graph for $struct {
                fn base(&self) -> &GraphBase {
                    &self.base
                }

                fn neighbor_count(&self, v: Vertex) -> NumVertices {
                    self.nbs[v as usize].len() as NumVertices
                }

                fn has_edge(&self, v: Vertex, w: Vertex) -> Result<bool> {
                    self.validate_vertices(v, w)?;
                    Ok(self.nbs[v as usize].contains(&w))
                }
            }

            impl AdjacencyList for $struct {
                const DIRECTED: bool = $directed;

                fn neighbors_of(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
                    self.nbs[v as usize].iter().copied()
                }
            }

            impl Display for $struct {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    writeln!(
                        f,
                        "{} vertices, {} edges",
                        self.number_of_vertices(),
                        self.number_of_edges()
                    )?;
                    for v in self.vertices() {
                        let line = std::iter::once(format!("{v}:"))
                            .chain(self.neighbors_of(v).map(|w| w.to_string()))
                            .join(" ");
                        writeln!(f, "{line}")?;
                    }
                    Ok(())
                }
            }
        };
    }

    pub(crate) use impl_adjacency_graph;
}
