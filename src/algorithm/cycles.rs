use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

pub trait SimpleCycles
where
    Self: QueryableGraph + Sized,
{
    /// Every simple cycle, as a closed walk: the start vertex is repeated
    /// at the end, so a triangle comes back as `[a, b, c, a]`.
    ///
    /// The search only walks through vertices of degree at least two
    /// (nothing else can lie on a cycle) and records a cycle when the
    /// current vertex is adjacent to the walk's start and at least three
    /// vertices are on the walk, which keeps the two-vertex "cycles" of
    /// parallel edges out. Rotations and reversals of the same cycle are
    /// collapsed by comparing sorted vertex sets; two cycles over the same
    /// vertices through different parallel edges collapse too, which is
    /// the editor's documented simple-graph assumption.
    fn simple_cycles(&self) -> Vec<Vec<VertexNo>> {
        let core: Vec<VertexNo> = self
            .iter_vertices()
            .filter(|v| self.degree(v) >= 2)
            .collect();

        let mut raw = vec![];
        for s in &core {
            let mut visited = HashSet::with_hasher(RandomState::new());
            let mut trail = vec![*s];
            collect(self, *s, &core, &mut visited, &mut trail, &mut raw);
        }

        let mut seen = HashSet::with_hasher(RandomState::new());
        let mut out = vec![];
        for mut cyc in raw {
            cyc.pop(); // closing repeat plays no part in identity
            let mut key: Vec<usize> = cyc.iter().map(|v| v.to_raw()).collect();
            key.sort_unstable();
            if seen.insert(key) {
                cyc.push(cyc[0]);
                out.push(cyc);
            }
        }
        out
    }

    /// Girth: edge count of the shortest cycle, `None` on an acyclic
    /// graph.
    fn girth(&self) -> Option<usize> {
        girth_of(&self.simple_cycles())
    }
}

impl<G: QueryableGraph> SimpleCycles for G {}

/// Girth of an already-enumerated cycle collection. Closed walks carry the
/// start twice, so the edge count is the walk length minus one.
pub fn girth_of(cycles: &[Vec<VertexNo>]) -> Option<usize> {
    cycles.iter().map(|c| c.len() - 1).min()
}

fn collect<G>(
    g: &G,
    v: VertexNo,
    core: &[VertexNo],
    visited: &mut HashSet<VertexNo, RandomState>,
    trail: &mut Vec<VertexNo>,
    out: &mut Vec<Vec<VertexNo>>,
) where
    G: QueryableGraph,
{
    if trail.len() >= 3 && g.connects(&v, &trail[0]) {
        let mut cyc = trail.clone();
        cyc.push(trail[0]);
        out.push(cyc);
        return;
    }

    visited.insert(v);
    for n in g.neighbours(&v) {
        if !visited.contains(&n) && core.contains(&n) {
            trail.push(n);
            collect(g, n, core, visited, trail, out);
            trail.pop();
        }
    }
    visited.remove(&v);
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn ring(n: usize) -> GraphEngine {
        let mut g = GraphEngine::new();
        for i in 0..n {
            g.add_vertex(i as f64, 0.0);
        }
        for i in 1..n {
            g.add_edge(VertexNo::new(i), VertexNo::new(i + 1), 0);
        }
        g.add_edge(VertexNo::new(n), VertexNo::new(1), 0);
        g
    }

    #[test]
    fn triangle_is_one_cycle() {
        let g = ring(3);
        let cycles = g.simple_cycles();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 4);
        assert_eq!(cycles[0][0], *cycles[0].last().unwrap());
        assert_eq!(girth_of(&cycles), Some(3));
    }

    #[test]
    fn acyclic_graph_has_no_cycles_and_no_girth() {
        let mut g = GraphEngine::new();
        let v1 = g.add_vertex(0.0, 0.0);
        let v2 = g.add_vertex(1.0, 0.0);
        let v3 = g.add_vertex(2.0, 0.0);
        g.add_edge(v1, v2, 0);
        g.add_edge(v2, v3, 0);
        assert!(g.simple_cycles().is_empty());
        assert_eq!(g.girth(), None);
        assert_eq!(girth_of(&[]), None);
    }

    #[test]
    fn parallel_edges_are_not_a_cycle() {
        let mut g = GraphEngine::new();
        let v1 = g.add_vertex(0.0, 0.0);
        let v2 = g.add_vertex(1.0, 0.0);
        g.add_edge(v1, v2, 0);
        g.add_edge(v1, v2, 0);
        assert!(g.simple_cycles().is_empty());
    }

    #[test]
    fn two_triangles_sharing_an_edge_make_three_cycles() {
        // 1-2-3 and 2-3-4 share edge 2-3; the rim 1-2-4-3 is the third
        let mut g = GraphEngine::new();
        for i in 0..4 {
            g.add_vertex(i as f64, 0.0);
        }
        for (a, b) in [(1, 2), (2, 3), (1, 3), (2, 4), (3, 4)] {
            g.add_edge(VertexNo::new(a), VertexNo::new(b), 0);
        }
        let cycles = g.simple_cycles();
        assert_eq!(cycles.len(), 3);
        assert_eq!(girth_of(&cycles), Some(3));
    }

    #[test]
    fn girth_of_square_is_four() {
        assert_eq!(ring(4).girth(), Some(4));
    }

    #[test]
    fn pendant_vertices_stay_off_cycles() {
        let mut g = ring(3);
        let v4 = g.add_vertex(9.0, 9.0);
        g.add_edge(VertexNo::new(1), v4, 0);
        let cycles = g.simple_cycles();
        assert_eq!(cycles.len(), 1);
        assert!(!cycles[0].contains(&v4));
    }

    #[quickcheck]
    fn cycles_are_closed_simple_and_edge_connected(ops: crate::graph::Ops) {
        let g = ops.build();
        if g.edge_size() > 24 {
            // enumeration is exponential; keep the generated cases small
            return;
        }
        for cyc in g.simple_cycles() {
            assert!(cyc.len() >= 4);
            assert_eq!(cyc[0], *cyc.last().unwrap());
            for w in cyc.windows(2) {
                assert!(g.connects(&w[0], &w[1]), "{:?}\n{:?}", cyc, g.debug());
            }
            let distinct: HashSet<_, RandomState> =
                cyc[..cyc.len() - 1].iter().collect();
            assert_eq!(distinct.len(), cyc.len() - 1);
        }
    }

    #[quickcheck]
    fn no_two_cycles_share_a_vertex_set(ops: crate::graph::Ops) {
        let g = ops.build();
        if g.edge_size() > 24 {
            return;
        }
        let mut seen = HashSet::with_hasher(RandomState::new());
        for cyc in g.simple_cycles() {
            let mut key: Vec<usize> =
                cyc[..cyc.len() - 1].iter().map(|v| v.to_raw()).collect();
            key.sort_unstable();
            assert!(seen.insert(key));
        }
    }
}
