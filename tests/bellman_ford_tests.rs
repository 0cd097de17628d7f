use mt_sssp::algorithm::analysis::{analyze_all, analyze_source};
use mt_sssp::algorithm::{eccentricity, reconstruct_path, ShortestPathAlgorithm, ShortestPathResult};
use mt_sssp::graph::generators::{generate_chain, generate_grid, generate_random};
use mt_sssp::graph::{DirectedGraph, Graph};
use mt_sssp::{BellmanFord, Error};

fn graph(n: usize, edges: &[(usize, usize, i64)]) -> DirectedGraph<i64> {
    DirectedGraph::from_edges(n, edges.iter().copied()).unwrap()
}

// Shortest distance over all simple paths, by exhaustive search
fn brute_force_distances(graph: &DirectedGraph<i64>, source: usize) -> Vec<Option<i64>> {
    fn explore(
        graph: &DirectedGraph<i64>,
        vertex: usize,
        cost: i64,
        on_path: &mut Vec<bool>,
        best: &mut Vec<Option<i64>>,
    ) {
        if best[vertex].map_or(true, |b| cost < b) {
            best[vertex] = Some(cost);
        }
        for (next, weight) in graph.outgoing_edges(vertex) {
            if !on_path[next] {
                on_path[next] = true;
                explore(graph, next, cost + weight, on_path, best);
                on_path[next] = false;
            }
        }
    }

    let n = graph.vertex_count();
    let mut best = vec![None; n];
    let mut on_path = vec![false; n];
    on_path[source] = true;
    explore(graph, source, 0, &mut on_path, &mut best);
    best
}

fn get_path(bf: &BellmanFord, result: &ShortestPathResult<i64>, target: usize) -> mt_sssp::Result<Vec<usize>> {
    <BellmanFord as ShortestPathAlgorithm<i64, DirectedGraph<i64>>>::get_path(bf, result, target)
}

fn path_cost(graph: &DirectedGraph<i64>, path: &[usize]) -> i64 {
    path.windows(2)
        .map(|pair| graph.get_edge_weight(pair[0], pair[1]).expect("path uses a missing edge"))
        .sum()
}

#[test]
fn test_two_node_scenario() {
    let g = graph(2, &[(0, 1, 5)]);
    let bf = BellmanFord::new();

    let record = analyze_source(&bf, &g, 0).unwrap();
    assert_eq!(record.distances.distances, vec![Some(0), Some(5)]);
    assert_eq!(record.eccentricity.node, 1);
    assert_eq!(record.eccentricity.cost, 5);
    assert_eq!(record.path, vec![0, 1]);

    // Nothing else is reachable: the source is its own eccentric node
    let record = analyze_source(&bf, &g, 1).unwrap();
    assert_eq!(record.distances.distances, vec![None, Some(0)]);
    assert_eq!(record.eccentricity.node, 1);
    assert_eq!(record.eccentricity.cost, 0);
    assert_eq!(record.path, vec![1]);
}

#[test]
fn test_negative_weights_match_brute_force() {
    for seed in 0..20 {
        let g = generate_random(7, 2.0, true, seed).unwrap();
        assert!(g.vertex_count() == 7);
        let bf = BellmanFord::new();
        for source in 0..g.vertex_count() {
            let result = bf.compute_shortest_paths(&g, source).unwrap();
            assert_eq!(
                result.distances,
                brute_force_distances(&g, source),
                "seed {} source {}",
                seed,
                source
            );
        }
    }
}

#[test]
fn test_paths_follow_edges_and_match_distances() {
    let g = generate_random(30, 3.0, true, 42).unwrap();
    assert!(g.has_negative_weights());
    let bf = BellmanFord::new();
    for source in 0..g.vertex_count() {
        let result = bf.compute_shortest_paths(&g, source).unwrap();
        for target in 0..g.vertex_count() {
            match result.distances[target] {
                Some(distance) => {
                    let path = get_path(&bf, &result, target).unwrap();
                    assert_eq!(path[0], source);
                    assert_eq!(*path.last().unwrap(), target);
                    assert_eq!(path_cost(&g, &path), distance);
                }
                None => assert!(get_path(&bf, &result, target).is_err()),
            }
        }
    }
}

#[test]
fn test_negative_edge_shortcut() {
    // The direct edge is more expensive than the detour through a negative edge
    let g = graph(3, &[(0, 2, 4), (0, 1, 3), (1, 2, -2)]);
    let result = BellmanFord::new().compute_shortest_paths(&g, 0).unwrap();
    assert_eq!(result.distances, vec![Some(0), Some(3), Some(1)]);
    assert_eq!(result.predecessors[2], Some(1));
}

#[test]
fn test_reachable_negative_cycle_fails() {
    // 1 -> 2 -> 1 costs -2 and every vertex reaches it, 3 through 0
    let g = graph(4, &[(0, 1, 1), (1, 2, -3), (2, 1, 1), (3, 0, 2)]);
    let bf = BellmanFord::new();
    for source in [0, 1, 2, 3] {
        assert!(
            matches!(bf.compute_shortest_paths(&g, source), Err(Error::NegativeCycle(s)) if s == source),
            "source {}",
            source
        );
    }

    // Without 0 -> 1, neither 0 nor 3 reaches the cycle
    let g = graph(4, &[(1, 2, -3), (2, 1, 1), (3, 0, 2)]);
    assert!(bf.compute_shortest_paths(&g, 0).is_ok());
    assert!(bf.compute_shortest_paths(&g, 3).is_ok());
    assert!(bf.compute_shortest_paths(&g, 1).is_err());
}

#[test]
fn test_negative_self_loop_is_a_cycle() {
    let g = graph(1, &[(0, 0, -1)]);
    assert!(matches!(
        BellmanFord::new().compute_shortest_paths(&g, 0),
        Err(Error::NegativeCycle(0))
    ));
}

#[test]
fn test_unknown_source() {
    let g = graph(2, &[(0, 1, 1)]);
    assert!(matches!(
        BellmanFord::new().compute_shortest_paths(&g, 2),
        Err(Error::SourceNotFound)
    ));
}

#[test]
fn test_cost_overflow_is_reported() {
    let g = graph(3, &[(0, 1, i64::MAX), (1, 2, 1)]);
    assert!(matches!(
        BellmanFord::new().compute_shortest_paths(&g, 0),
        Err(Error::CostOverflow(0))
    ));
}

#[test]
fn test_eccentricity_ties_go_to_smallest_id() {
    let g = graph(4, &[(0, 3, 7), (0, 1, 7), (0, 2, 1)]);
    let result = BellmanFord::new().compute_shortest_paths(&g, 0).unwrap();
    let ecc = eccentricity(&result).unwrap();
    assert_eq!((ecc.node, ecc.cost), (1, 7));
}

#[test]
fn test_eccentricity_may_be_negative() {
    // The only other reachable vertex is closer than the source itself
    let g = graph(2, &[(0, 1, -4)]);
    let result = BellmanFord::new().compute_shortest_paths(&g, 0).unwrap();
    let ecc = eccentricity(&result).unwrap();
    assert_eq!((ecc.node, ecc.cost), (1, -4));
}

#[test]
fn test_eccentricity_rejects_inconsistent_result() {
    let result: ShortestPathResult<i64> = ShortestPathResult {
        distances: vec![None, Some(3)],
        predecessors: vec![None, None],
        source: 0,
    };
    assert!(matches!(eccentricity(&result), Err(Error::InconsistentResult(0))));

    let result: ShortestPathResult<i64> = ShortestPathResult {
        distances: vec![Some(0)],
        predecessors: vec![None],
        source: 3,
    };
    assert!(eccentricity(&result).is_err());
}

#[test]
fn test_reconstruct_path_detects_broken_links() {
    // 2 -> 1 -> 2 loops without reaching 0
    let looping = vec![None, Some(2), Some(1)];
    assert!(matches!(
        reconstruct_path(&looping, 0, 1, 3),
        Err(Error::PathReconstruction(0, 1))
    ));

    // The chain stops at 1, which is not the source
    let dangling = vec![None, None, Some(1)];
    assert!(reconstruct_path(&dangling, 0, 2, 3).is_err());

    // A valid chain longer than the bound
    let chain = vec![None, Some(0), Some(1), Some(2)];
    assert_eq!(reconstruct_path(&chain, 0, 3, 4).unwrap(), vec![0, 1, 2, 3]);
    assert!(reconstruct_path(&chain, 0, 3, 3).is_err());

    // Out of range
    assert!(reconstruct_path(&chain, 0, 9, 4).is_err());
}

#[test]
fn test_chain_eccentricity_is_last_vertex() {
    let g = generate_chain(10, -1).unwrap();
    let record = analyze_source(&BellmanFord::new(), &g, 0).unwrap();
    // Every other vertex is at a negative distance; the largest is -1
    assert_eq!((record.eccentricity.node, record.eccentricity.cost), (1, -1));

    let g = generate_chain(10, 2).unwrap();
    let record = analyze_source(&BellmanFord::new(), &g, 3).unwrap();
    assert_eq!((record.eccentricity.node, record.eccentricity.cost), (9, 12));
    assert_eq!(record.path, (3..10).collect::<Vec<_>>());
}

#[test]
fn test_grid_eccentricity() {
    let g = generate_grid(3, 4).unwrap();
    let record = analyze_source(&BellmanFord::new(), &g, 0).unwrap();
    // Bottom-right corner: 2 steps down and 3 right, cost 1 each
    assert_eq!((record.eccentricity.node, record.eccentricity.cost), (11, 5));
    assert_eq!(record.path.len(), 6);
}

#[test]
fn test_analyze_all_is_indexed_by_source() {
    let g = generate_random(25, 2.5, true, 7).unwrap();
    let bf = BellmanFord::new();
    let all = analyze_all(&bf, &g);
    assert_eq!(all.len(), 25);
    for (source, record) in all.into_iter().enumerate() {
        let record = record.unwrap();
        assert_eq!(record.source, source);
        assert_eq!(record, analyze_source(&bf, &g, source).unwrap());
    }
}
