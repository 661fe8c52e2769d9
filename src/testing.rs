/// Every representation should fulfill the [`Graph`](crate::ops::Graph) contract
/// on random inputs
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{error::*, io::*, ops::*, prelude::*};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of `m` random edges for vertices `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumVertices, m: NumEdges) -> Vec<Edge> {
                (0..m)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            /// Degrees expected after inserting all edges
            fn expected_degrees(n: NumVertices, edges: &[Edge]) -> Vec<NumVertices> {
                let mut degrees = vec![0; n as usize];
                for &Edge(u, v) in edges {
                    degrees[u as usize] += 1;
                    if $undirected && u != v {
                        degrees[v as usize] += 1;
                    }
                }
                degrees
            }

            #[test]
            fn graph_without_edges() {
                for n in 0..20 {
                    let graph = <$graph>::from_edges(n, Vec::<Edge>::new()).unwrap();

                    assert_eq!(graph.number_of_vertices(), n);
                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!(graph.degrees().all(|d| d == 0));

                    if n == 0 {
                        assert!(graph.avg_degree().is_nan());
                    } else {
                        assert_eq!(graph.avg_degree(), 0.0);
                    }
                }
            }

            #[test]
            fn degree_statistics() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [1 as NumVertices, 10, 20, 50] {
                    for m in [0, n / 2, n * 2, n * 5] {
                        let edges = random_edges(rng, n, m.into());
                        let graph = <$graph>::from_edges(n, edges.iter()).unwrap();
                        let degrees = expected_degrees(n, &edges);

                        assert_eq!(graph.number_of_vertices(), n);
                        assert_eq!(graph.number_of_edges(), NumEdges::from(m));

                        for v in graph.vertices() {
                            assert!(graph.has_vertex(v));
                            assert_eq!(graph.degree(v).unwrap(), degrees[v as usize]);
                            assert_eq!(graph.degree(v).unwrap(), graph.neighbor_count(v));
                        }
                        assert!(!graph.has_vertex(n));
                        assert!(graph.degree(n).unwrap_err().is_invalid_argument());
                        assert!(graph.degree(n + 1000).unwrap_err().is_invalid_argument());

                        let sum: f64 = degrees.iter().map(|&d| f64::from(d)).sum();
                        let avg = graph.avg_degree();
                        assert_eq!(avg, sum / f64::from(n));
                        assert!(f64::from(graph.min_degree()) <= avg);
                        assert!(avg <= f64::from(graph.max_degree()));
                        assert_eq!(graph.min_degree(), degrees.iter().copied().min().unwrap());
                        assert_eq!(graph.max_degree(), degrees.iter().copied().max().unwrap());
                    }
                }
            }

            #[test]
            fn adjacency() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [10 as NumVertices, 20, 50] {
                    let edges = random_edges(rng, n, (n * 2).into());
                    let graph = <$graph>::from_edges(n, edges.iter()).unwrap();

                    let mut expected = vec![vec![false; n as usize]; n as usize];
                    for &Edge(u, v) in &edges {
                        expected[u as usize][v as usize] = true;
                        if $undirected {
                            expected[v as usize][u as usize] = true;
                        }
                    }

                    for v in 0..n {
                        for w in 0..n {
                            assert_eq!(graph.has_edge(v, w).unwrap(), expected[v as usize][w as usize]);
                        }
                    }

                    assert!(graph.has_edge(0, n).unwrap_err().is_invalid_argument());
                    assert!(matches!(
                        graph.has_edge(n, n + 1),
                        Err(GraphError::InvalidVertices { .. })
                    ));

                    let mut listed = edges
                        .iter()
                        .map(|e| if $undirected { e.normalized() } else { *e })
                        .collect_vec();
                    listed.sort_unstable();
                    assert_eq!(graph.edges().sorted().collect_vec(), listed);
                }
            }

            #[test]
            fn other_endpoint_of_incident_edges() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);
                let n = 30;
                let graph = <$graph>::from_edges(n, random_edges(rng, n, 100)).unwrap();

                for v in graph.vertices() {
                    for (edge, w) in graph.edges_of(v).zip(graph.neighbors_of(v)) {
                        assert_eq!(other_endpoint(v, edge), w);
                        assert_eq!(other_endpoint(w, &edge), v);
                        assert_eq!(other_endpoint(v, w), w);
                    }
                }
            }

            #[test]
            fn edge_list_stream() {
                let rng = &mut Pcg64Mcg::seed_from_u64(6);
                let n = 25;
                let graph = <$graph>::from_edges(n, random_edges(rng, n, 60)).unwrap();

                let mut buffer = Vec::new();
                graph.try_write_edge_list(&mut buffer).unwrap();
                let read = <$graph>::try_read_edge_list(buffer.as_slice()).unwrap();

                assert_eq!(read.number_of_vertices(), graph.number_of_vertices());
                assert_eq!(read.number_of_edges(), graph.number_of_edges());
                assert_eq!(
                    read.edges().sorted().collect_vec(),
                    graph.edges().sorted().collect_vec()
                );
                assert_eq!(read.degrees().collect_vec(), graph.degrees().collect_vec());
            }
        }
    };
}

pub(crate) use test_graph_ops;
