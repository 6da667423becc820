#![forbid(unsafe_code)]

//! In-memory graph engine.
//!
//! [`Graph`] is a mutable vertex/edge store that can be directed or undirected, weighted or
//! unweighted, with or without self-loops (see [`GraphOptions`]). Vertices are identified by
//! caller-supplied values (`V: Eq + Hash + Clone`); weights are any primitive number (see
//! [`Weight`]).
//!
//! On top of the store the graph offers:
//!
//! - traversals: [`Graph::dfs`], [`Graph::bfs`]
//! - connectivity: [`Graph::wcc`], [`Graph::scc`], [`Graph::has_cycles`],
//!   [`Graph::topological_sort`]
//! - shortest paths: [`Graph::short_path`] (hops), [`Graph::short_path_weighted`] (Dijkstra or
//!   Bellman-Ford)
//! - spanning forests: [`Graph::mst`] (Prim or Kruskal, picked by [`Graph::density`])
//!
//! [`BinaryHeap`] and [`DisjointSetUnion`] back Dijkstra/Prim and Kruskal respectively and are
//! exported for direct use.
//!
//! ```
//! use narwhal::{Graph, GraphOptions, WeightedPaths, WeightedQuery};
//!
//! let mut g: Graph<&str, i32> = Graph::new(GraphOptions {
//!     weighted: true,
//!     directed: true,
//!     ..Default::default()
//! });
//! g.add("a").add("b").add("c");
//! g.connect("a", "b", Some(1)).connect("b", "c", Some(2)).connect("a", "c", Some(5));
//!
//! let Some(WeightedPaths::Target(best)) = g.short_path_weighted(WeightedQuery::new("a").to("c"))
//! else {
//!     unreachable!();
//! };
//! assert_eq!(best.path, vec!["a", "b", "c"]);
//! assert_eq!(best.cost, Some(3));
//! ```

pub mod dsu;
pub mod error;
pub mod graph;
pub mod heap;
pub mod weight;

pub use dsu::DisjointSetUnion;
pub use error::{Error, Result};
pub use graph::{
    BellmanFordPath, DijkstraPath, Edges, Graph, GraphOptions, SpanningEdge, VertexMap,
    VertexSet, Vertices, WeightedPaths, WeightedQuery,
};
pub use heap::BinaryHeap;
pub use weight::{Distance, Weight};
