use crate::{repr::macros::impl_adjacency_graph, testing::test_graph_ops};

use super::*;

/// An undirected graph stored as adjacency lists
#[derive(Debug, Clone)]
pub struct UndirectedGraph {
    base: GraphBase,
    nbs: Vec<Vec<Vertex>>,
}

impl_adjacency_graph!(UndirectedGraph, false);

impl GraphFromScratch for UndirectedGraph {
    fn try_from_base<I>(mut base: GraphBase, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut nbs = vec![Vec::new(); base.number_of_vertices() as usize];
        let mut num_edges: NumEdges = 0;

        for Edge(u, v) in edges.into_iter().map(Into::into) {
            base.validate_vertices(u, v)?;

            nbs[u as usize].push(v);
            if u != v {
                nbs[v as usize].push(u);
            }
            num_edges += 1;
        }

        base.set_number_of_edges(num_edges)?;
        Ok(Self { base, nbs })
    }
}

test_graph_ops!(test_undirected_graph, UndirectedGraph, true);

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::io::*;

    /// Two triangles sharing vertex 2 plus an isolated vertex 5
    fn bowtie() -> UndirectedGraph {
        UndirectedGraph::from_edges(6, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]).unwrap()
    }

    #[test]
    fn degrees() {
        let graph = bowtie();
        assert_eq!(graph.number_of_vertices(), 6);
        assert_eq!(graph.number_of_edges(), 6);

        assert_eq!(graph.degrees().collect_vec(), vec![2, 2, 4, 2, 2, 0]);
        assert_eq!(graph.min_degree(), 0);
        assert_eq!(graph.max_degree(), 4);
        assert_eq!(graph.avg_degree(), 2.0);
    }

    #[test]
    fn has_edge_is_symmetric() {
        let graph = bowtie();
        assert!(graph.has_edge(0, 1).unwrap());
        assert!(graph.has_edge(1, 0).unwrap());
        assert!(!graph.has_edge(0, 3).unwrap());
        assert!(!graph.has_edge(5, 5).unwrap());
    }

    #[test]
    fn self_loops_and_parallel_edges() {
        let graph = UndirectedGraph::from_edges(2, [(0, 0), (0, 1), (1, 0)]).unwrap();
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.degree(0).unwrap(), 3);
        assert_eq!(graph.degree(1).unwrap(), 2);
        assert!(graph.has_edge(0, 0).unwrap());
        assert_eq!(
            graph.edges().sorted().collect_vec(),
            vec![Edge(0, 0), Edge(0, 1), Edge(0, 1)]
        );
    }

    #[test]
    fn invalid_edges_are_rejected() {
        let err = UndirectedGraph::from_edges(3, [(0, 1), (1, 3)]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidVertex { vertex: 3, .. }));

        let err = UndirectedGraph::from_edges(3, [(7, 8)]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidVertices { .. }));
    }

    #[test]
    fn read_from_stream() {
        let input = "5 4\n0 1\n1 2\n2 3\n3 4\n";
        let graph = UndirectedGraph::try_read_edge_list(input.as_bytes()).unwrap();

        assert_eq!(graph.number_of_vertices(), 5);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![1, 3]);
    }

    #[test]
    fn read_one_indexed() {
        let graph: UndirectedGraph = EdgeListReader::new()
            .one_indexed(true)
            .try_read_graph("3 2 1 2 2 3".as_bytes())
            .unwrap();
        assert_eq!(graph.edges().collect_vec(), vec![Edge(0, 1), Edge(1, 2)]);

        let err = EdgeListReader::new()
            .one_indexed(true)
            .try_read_graph("3 1 0 2".as_bytes())
            .map(|_: UndirectedGraph| ())
            .unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn read_truncated_stream() {
        for input in ["5 4\n0 1\n1 2\n", "5 1\n0", "5 1\n0 x"] {
            let err = UndirectedGraph::try_read_edge_list(input.as_bytes()).unwrap_err();
            assert!(err.is_malformed_input(), "{input:?} gave {err}");
        }

        let err = UndirectedGraph::try_read_edge_list("2 1\n0 2\n".as_bytes()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn display() {
        let graph = UndirectedGraph::from_edges(3, [(0, 1), (0, 2)]).unwrap();
        assert_eq!(
            graph.to_string(),
            "3 vertices, 2 edges\n0: 1 2\n1: 0\n2: 0\n"
        );
        assert_eq!(
            UndirectedGraph::from_edges(1, Vec::<Edge>::new())
                .unwrap()
                .to_string(),
            "1 vertices, 0 edges\n0:\n"
        );
    }
}
