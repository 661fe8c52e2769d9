use crate::{repr::macros::impl_adjacency_graph, testing::test_graph_ops};

use super::*;

/// A directed graph stored as outgoing adjacency lists.
///
/// The degree of a vertex is its out-degree; in-degrees are kept alongside.
#[derive(Debug, Clone)]
pub struct Digraph {
    base: GraphBase,
    nbs: Vec<Vec<Vertex>>,
    in_degrees: Vec<NumVertices>,
}

impl_adjacency_graph!(Digraph, true);

impl Digraph {
    /// Returns the number of edges entering `v`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] unless `v < n`
    pub fn in_degree(&self, v: Vertex) -> Result<NumVertices> {
        self.validate_vertex(v)?;
        Ok(self.in_degrees[v as usize])
    }

    /// Returns the graph with every edge `(u, v)` replaced by `(v, u)`
    pub fn reverse(&self) -> Self {
        let mut nbs = vec![Vec::new(); self.nbs.len()];
        for Edge(u, v) in self.edges() {
            nbs[v as usize].push(u);
        }

        Self {
            base: GraphBase::with_edges(self.number_of_vertices(), self.number_of_edges()),
            nbs,
            in_degrees: self.degrees().collect(),
        }
    }
}

impl GraphFromScratch for Digraph {
    fn try_from_base<I>(mut base: GraphBase, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let n = base.number_of_vertices() as usize;
        let mut nbs = vec![Vec::new(); n];
        let mut in_degrees = vec![0; n];
        let mut num_edges: NumEdges = 0;

        for Edge(u, v) in edges.into_iter().map(Into::into) {
            base.validate_vertices(u, v)?;

            nbs[u as usize].push(v);
            in_degrees[v as usize] += 1;
            num_edges += 1;
        }

        base.set_number_of_edges(num_edges)?;
        Ok(Self {
            base,
            nbs,
            in_degrees,
        })
    }
}

test_graph_ops!(test_digraph, Digraph, false);

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::io::*;

    fn cycle_with_chord() -> Digraph {
        Digraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap()
    }

    #[test]
    fn out_and_in_degrees() {
        let graph = cycle_with_chord();
        assert_eq!(graph.degrees().collect_vec(), vec![2, 1, 1, 1]);
        assert_eq!(
            graph.vertices().map(|v| graph.in_degree(v).unwrap()).collect_vec(),
            vec![1, 1, 2, 1]
        );
        assert!(graph.in_degree(4).unwrap_err().is_invalid_argument());

        assert_eq!(graph.min_degree(), 1);
        assert_eq!(graph.max_degree(), 2);
        assert_eq!(graph.avg_degree(), 1.25);
    }

    #[test]
    fn has_edge_is_directed() {
        let graph = cycle_with_chord();
        assert!(graph.has_edge(0, 2).unwrap());
        assert!(!graph.has_edge(2, 0).unwrap());
        assert!(graph.has_edge(3, 0).unwrap());
        assert!(!graph.has_edge(0, 3).unwrap());
    }

    #[test]
    fn reverse() {
        let graph = cycle_with_chord();
        let reversed = graph.reverse();

        assert_eq!(reversed.number_of_vertices(), 4);
        assert_eq!(reversed.number_of_edges(), 5);
        assert_eq!(
            reversed.edges().sorted().collect_vec(),
            graph.edges().map(|e| e.reverse()).sorted().collect_vec()
        );

        for v in graph.vertices() {
            assert_eq!(reversed.degree(v).unwrap(), graph.in_degree(v).unwrap());
            assert_eq!(reversed.in_degree(v).unwrap(), graph.degree(v).unwrap());
        }
    }

    #[test]
    fn read_from_stream() {
        let input = "3 3\n0 1\n1 2\n2 0\ntrailing data for someone else";
        let graph = Digraph::try_read_edge_list(input.as_bytes()).unwrap();

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.edges().collect_vec(), vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)]);
    }

    #[test]
    fn write_one_indexed() {
        let graph = cycle_with_chord();
        let mut out = Vec::new();
        EdgeListWriter::new()
            .one_indexed(true)
            .try_write_graph(&graph, &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "4 5\n1 2\n1 3\n2 3\n3 4\n4 1\n"
        );
    }

    #[test]
    fn display() {
        let graph = Digraph::from_edges(2, [(1, 0), (1, 1)]).unwrap();
        assert_eq!(graph.to_string(), "2 vertices, 2 edges\n0:\n1: 0 1\n");
    }
}
