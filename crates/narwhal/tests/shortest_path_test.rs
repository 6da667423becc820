use narwhal::{
    BellmanFordPath, DijkstraPath, Distance, Graph, GraphOptions, VertexMap, WeightedPaths,
    WeightedQuery,
};

fn weighted(directed: bool) -> Graph<&'static str, i32> {
    Graph::new(GraphOptions {
        weighted: true,
        directed,
        ..Default::default()
    })
}

fn roads(directed: bool) -> Graph<&'static str, i32> {
    let mut g = weighted(directed);
    g.add("a").add("b").add("c").add("d");
    g.connect("a", "b", Some(1));
    g.connect("a", "c", Some(4));
    g.connect("b", "c", Some(2));
    g.connect("b", "d", Some(6));
    g.connect("c", "d", Some(3));
    g
}

fn triangle(ab: i32, bc: i32, ca: Option<i32>) -> Graph<&'static str, i32> {
    let mut g = weighted(true);
    g.add("A").add("B").add("C");
    g.connect("A", "B", Some(ab));
    g.connect("B", "C", Some(bc));
    if let Some(ca) = ca {
        g.connect("C", "A", Some(ca));
    }
    g
}

fn entry(
    distance: Distance<i32>,
    path: &[&'static str],
    cycle: bool,
) -> BellmanFordPath<&'static str, i32> {
    BellmanFordPath {
        distance,
        path: path.to_vec(),
        cycle,
    }
}

#[test]
fn dijkstra_to_target_directed_and_undirected() {
    for directed in [true, false] {
        let g = roads(directed);
        let result = g.short_path_weighted(WeightedQuery::new("a").to("d"));
        assert_eq!(
            result,
            Some(WeightedPaths::Target(DijkstraPath {
                path: vec!["a", "b", "c", "d"],
                cost: Some(6),
            })),
            "directed = {directed}"
        );
    }
}

#[test]
fn dijkstra_without_target_lists_every_reachable_vertex() {
    for directed in [true, false] {
        let g = roads(directed);
        let Some(WeightedPaths::All(distances)) = g.short_path_weighted(WeightedQuery::new("a"))
        else {
            panic!("expected a distance map");
        };
        let expected: VertexMap<&str, i32> = [("b", 1), ("c", 3), ("d", 6)].into_iter().collect();
        assert_eq!(distances, expected);
    }
}

#[test]
fn dijkstra_unreachable_target_has_no_cost() {
    let g = roads(true);
    assert_eq!(
        g.dijkstra("d", "a"),
        Some(DijkstraPath {
            path: Vec::new(),
            cost: None,
        })
    );
    assert_eq!(g.dijkstra("a", "zz").map(|p| p.cost), Some(None));
    assert_eq!(g.dijkstra("a", "a").map(|p| p.path), Some(vec!["a"]));
    assert!(g.dijkstra_all("d").is_some_and(|all| all.is_empty()));
}

#[test]
fn unknown_source_yields_none_for_every_query() {
    let g = triangle(1, 2, None);
    assert_eq!(g.short_path_weighted(WeightedQuery::new("D")), None);
    assert_eq!(g.short_path_weighted(WeightedQuery::new("D").to("A")), None);
    let negative = WeightedQuery::new("D").negative_weights(true);
    assert_eq!(g.short_path_weighted(negative), None);
    assert_eq!(g.short_path_weighted(negative.to("A")), None);
}

#[test]
fn unweighted_graph_counts_hops() {
    let mut g: Graph<&str> = Graph::new(GraphOptions {
        directed: true,
        ..Default::default()
    });
    g.add("a").add("b").add("c");
    g.connect("a", "b", None).connect("b", "c", None).connect("a", "c", Some(10.0));

    let best = g.dijkstra("a", "c");
    assert_eq!(best.as_ref().map(|p| p.path.clone()), Some(vec!["a", "c"]));
    assert_eq!(best.and_then(|p| p.cost), Some(1.0));
}

#[test]
fn bellman_ford_positive_weights() {
    let g = triangle(2, 3, None);
    let result = g.short_path_weighted(WeightedQuery::new("A").to("C").negative_weights(true));
    assert_eq!(
        result,
        Some(WeightedPaths::BellmanFord(entry(
            Distance::Finite(5),
            &["A", "B", "C"],
            false
        )))
    );
}

#[test]
fn bellman_ford_negative_weight() {
    let g = triangle(2, -1, None);
    let result = g.bellman_ford("A", "C");
    assert_eq!(result, Some(entry(Distance::Finite(1), &["A", "B", "C"], false)));
}

#[test]
fn bellman_ford_flags_a_negative_cycle() {
    let g = triangle(1, -2, Some(-2));
    let result = g.bellman_ford("A", "C");
    assert!(result.is_some_and(|r| r.cycle));
}

#[test]
fn bellman_ford_unknown_target_is_unreachable() {
    let g = triangle(1, 2, None);
    assert_eq!(
        g.bellman_ford("A", "Q"),
        Some(entry(Distance::Unreachable, &[], false))
    );
}

#[test]
fn bellman_ford_all_positive() {
    let g = triangle(1, 2, None);
    let result = g.short_path_weighted(WeightedQuery::new("A").negative_weights(true));
    assert_eq!(
        result,
        Some(WeightedPaths::BellmanFordAll(vec![
            entry(Distance::Finite(1), &["A", "B"], false),
            entry(Distance::Finite(3), &["A", "B", "C"], false),
        ]))
    );
}

#[test]
fn bellman_ford_all_reports_unreachable_vertices() {
    let mut g = weighted(true);
    g.add("A").add("B").add("C").add("D");
    g.connect("A", "B", Some(1));
    g.connect("C", "D", Some(1));
    assert_eq!(
        g.bellman_ford_all("A"),
        Some(vec![
            entry(Distance::Finite(1), &["A", "B"], false),
            entry(Distance::Unreachable, &["C"], false),
            entry(Distance::Unreachable, &["D"], false),
        ])
    );
}

#[test]
fn bellman_ford_all_negative_and_positive() {
    let g = triangle(3, -2, None);
    assert_eq!(
        g.bellman_ford_all("A"),
        Some(vec![
            entry(Distance::Finite(3), &["A", "B"], false),
            entry(Distance::Finite(1), &["A", "B", "C"], false),
        ])
    );
}

#[test]
fn bellman_ford_all_with_negative_cycle() {
    let g = triangle(1, -2, Some(-2));
    assert_eq!(
        g.bellman_ford_all("A"),
        Some(vec![
            entry(Distance::Finite(-2), &["A", "B", "C", "A", "B"], true),
            entry(Distance::Finite(-4), &["B", "C", "A", "B", "C"], true),
        ])
    );
}

#[test]
fn dijkstra_and_bellman_ford_agree_without_negative_weights() {
    let mut g = weighted(true);
    let names = ["s", "t", "u", "v", "w", "x"];
    for name in names {
        g.add(name);
    }
    for (u, v, w) in [
        ("s", "t", 7),
        ("s", "u", 2),
        ("u", "t", 3),
        ("t", "v", 1),
        ("u", "v", 8),
        ("v", "w", 2),
        ("u", "w", 12),
        ("w", "s", 5),
    ] {
        g.connect(u, v, Some(w));
    }

    let dijkstra = g.dijkstra_all("s").unwrap_or_default();
    let bellman = g.bellman_ford_all("s").unwrap_or_default();
    assert_eq!(bellman.len(), names.len() - 1);
    for result in bellman {
        let Some(target) = result.path.last() else {
            panic!("every result names its target");
        };
        let expected = Distance::from(dijkstra.get(target).copied());
        assert_eq!(result.distance, expected, "{target}");
        assert!(!result.cycle);
    }
    assert_eq!(dijkstra.get("w"), Some(&8));
    assert_eq!(dijkstra.get("x"), None);
}

#[test]
fn undirected_weight_is_found_from_either_endpoint() {
    let mut g = weighted(false);
    g.add("p").add("q");
    g.connect("p", "q", Some(9));
    assert_eq!(g.dijkstra("q", "p").and_then(|r| r.cost), Some(9));
    assert_eq!(
        g.bellman_ford("q", "p").map(|r| r.distance),
        Some(Distance::Finite(9))
    );
}

#[test]
fn undirected_costs_are_symmetric_after_reweighting() {
    let mut g = weighted(false);
    g.add("a").add("b").add("c");
    g.connect("a", "b", Some(50));
    g.connect("a", "c", Some(1));
    g.connect("b", "c", Some(100));
    assert!(g.set_weight("c", "b", 1));

    assert_eq!(g.dijkstra("b", "c").and_then(|r| r.cost), Some(1));
    assert_eq!(g.dijkstra("c", "b").and_then(|r| r.cost), Some(1));
    assert_eq!(
        g.bellman_ford("b", "c").map(|r| r.distance),
        g.bellman_ford("c", "b").map(|r| r.distance)
    );
}

#[test]
fn weighted_paths_compare_by_variant_and_content() {
    let g = roads(true);
    let all = g.short_path_weighted(WeightedQuery::new("a"));
    assert_eq!(all, g.short_path_weighted(WeightedQuery::new("a")));
    assert_ne!(all, g.short_path_weighted(WeightedQuery::new("b")));
    assert_ne!(all, g.short_path_weighted(WeightedQuery::new("a").to("d")));

    let Some(WeightedPaths::All(mut reordered)) = all.clone() else {
        panic!("expected a distance map");
    };
    reordered.reverse();
    assert_eq!(Some(WeightedPaths::All(reordered)), all);
}
