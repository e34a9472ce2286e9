use crate::algorithm::Analysis;
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

pub trait Connectivity
where
    Self: QueryableGraph + Sized,
{
    /// Depth-first search from `v1` towards `v2`, returning the visitation
    /// order when a route exists.
    ///
    /// This is the editor's historical walk search, kept as documented
    /// behavior: at every frontier vertex it first checks whether `v2` is
    /// an immediate neighbour, so the returned walk ends at `v2` but is
    /// neither a shortest path nor pruned of dead branches. Use
    /// [crate::algorithm::SimplePaths::shortest_path] when the walk itself
    /// matters; use this when only reachability does.
    fn walk_between(&self, v1: VertexNo, v2: VertexNo) -> Option<Vec<VertexNo>> {
        let mut visited = HashSet::with_hasher(RandomState::new());
        let mut walk = vec![];
        if visit(self, v1, v2, &mut visited, &mut walk) {
            Some(walk)
        } else {
            None
        }
    }

    /// Whether every vertex is reachable from vertex 1.
    ///
    /// Runs one fresh walk search per target, O(V·(V+E)). That quadratic
    /// shape is part of the contract: the editor targets human-placed
    /// graphs of at most a few hundred vertices, and the per-target search
    /// keeps this function independent of any cached traversal state.
    fn is_connected(&self) -> Analysis<bool> {
        let start = match self.iter_vertices().next() {
            Some(v) => v,
            None => return Analysis::NoVertices,
        };
        for v in self.iter_vertices() {
            if self.walk_between(start, v).is_none() {
                return Analysis::Value(false);
            }
        }
        Analysis::Value(true)
    }
}

impl<G: QueryableGraph> Connectivity for G {}

fn visit<G>(
    g: &G,
    v1: VertexNo,
    v2: VertexNo,
    visited: &mut HashSet<VertexNo, RandomState>,
    walk: &mut Vec<VertexNo>,
) -> bool
where
    G: QueryableGraph,
{
    visited.insert(v1);
    walk.push(v1);

    if v1 == v2 {
        return true;
    }

    let nbrs = g.neighbours(&v1);
    if nbrs.contains(&v2) {
        walk.push(v2);
        return true;
    }

    for n in nbrs {
        if !visited.contains(&n) && visit(g, n, v2, visited, walk) {
            return true;
        }
    }

    false
}
