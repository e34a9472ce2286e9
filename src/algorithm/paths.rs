use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// Result of a path search: how many simple paths exist, and the shortest
/// of them.
///
/// `shortest` is measured in vertices; ties go to the path found first,
/// which follows neighbour-number order. Empty when no path exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSearch {
    pub total: usize,
    pub shortest: Vec<VertexNo>,
}

pub trait SimplePaths
where
    Self: QueryableGraph + Sized,
{
    /// Every simple path from `v1` to `v2`, by exhaustive depth-first
    /// search with backtracking. Exponential in the worst case; the total
    /// count is part of the editor's contract, so no shortest-path-only
    /// shortcut can replace this.
    ///
    /// Parallel edges multiply the count, one path per traversal.
    /// `v1 == v2` yields the single degenerate path `[v1]`.
    fn all_simple_paths(&self, v1: VertexNo, v2: VertexNo) -> Vec<Vec<VertexNo>> {
        let mut visited = HashSet::with_hasher(RandomState::new());
        let mut path = vec![v1];
        let mut out = vec![];
        collect(self, v1, v2, &mut visited, &mut path, &mut out);
        out
    }

    /// Enumerates all simple paths and selects the shortest.
    fn shortest_path(&self, v1: VertexNo, v2: VertexNo) -> PathSearch {
        let paths = self.all_simple_paths(v1, v2);
        // ties keep the path found first, not the last one min_by_key
        // would hand back
        let mut shortest: Vec<VertexNo> = vec![];
        for p in &paths {
            if shortest.is_empty() || p.len() < shortest.len() {
                shortest = p.clone();
            }
        }
        PathSearch {
            total: paths.len(),
            shortest,
        }
    }
}

impl<G: QueryableGraph> SimplePaths for G {}

fn collect<G>(
    g: &G,
    v: VertexNo,
    target: VertexNo,
    visited: &mut HashSet<VertexNo, RandomState>,
    path: &mut Vec<VertexNo>,
    out: &mut Vec<Vec<VertexNo>>,
) where
    G: QueryableGraph,
{
    if v == target {
        out.push(path.clone());
        return;
    }

    visited.insert(v);
    for n in g.neighbours(&v) {
        if !visited.contains(&n) {
            path.push(n);
            collect(g, n, target, visited, path, out);
            path.pop();
        }
    }
    visited.remove(&v);
}
