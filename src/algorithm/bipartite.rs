use crate::algorithm::{Analysis, SimpleCycles};
use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashMap, VecDeque};

/// The two vertex groups of a two-coloring.
///
/// Vertices outside the start vertex's component appear in neither group;
/// the flood fill only colors what it can reach.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bipartition {
    pub set_a: Vec<VertexNo>,
    pub set_b: Vec<VertexNo>,
}

pub trait BipartiteCheck
where
    Self: QueryableGraph + Sized,
{
    /// The editor's bipartiteness test, preserved exactly.
    ///
    /// Enumerates all simple cycles and rejects when any *closed walk*
    /// (start vertex counted twice) has even length; since the closing
    /// repeat adds one, that is the classic odd-cycle rejection. Past the
    /// parity check the answer is `Value(true)` unconditionally; the
    /// coloring in [bipartition] is a side product and never vetoes the
    /// answer. For a check that verifies the coloring itself, see
    /// [is_two_colorable].
    ///
    /// [bipartition]: BipartiteCheck::bipartition
    /// [is_two_colorable]: BipartiteCheck::is_two_colorable
    fn is_bipartite(&self) -> Analysis<bool> {
        if self.vertex_size() == 0 {
            return Analysis::NoVertices;
        }
        for cyc in self.simple_cycles() {
            if cyc.len() % 2 == 0 {
                return Analysis::Value(false);
            }
        }
        Analysis::Value(true)
    }

    /// Two-coloring by recursive flood fill from vertex 1, alternating
    /// groups across every edge; only that vertex's component is colored.
    /// With no edges at all, vertices alternate groups by index instead.
    fn bipartition(&self) -> Bipartition {
        let mut part = Bipartition::default();
        let first = match self.iter_vertices().next() {
            Some(v) => v,
            None => return part,
        };
        if self.edge_size() != 0 {
            part.set_a.push(first);
            flood(self, first, &mut part);
        } else {
            for (i, v) in self.iter_vertices().enumerate() {
                if i % 2 == 0 {
                    part.set_a.push(v);
                } else {
                    part.set_b.push(v);
                }
            }
        }
        part
    }

    /// Textbook bipartiteness: breadth-first two-coloring of every
    /// component, failing on the first same-color edge. The standard
    /// alternative to [is_bipartite], kept separate so the editor's
    /// historical answer stays reproducible.
    ///
    /// [is_bipartite]: BipartiteCheck::is_bipartite
    fn is_two_colorable(&self) -> Analysis<bool> {
        if self.vertex_size() == 0 {
            return Analysis::NoVertices;
        }
        let mut color: HashMap<VertexNo, bool, RandomState> =
            HashMap::with_hasher(RandomState::new());
        for start in self.iter_vertices() {
            if color.contains_key(&start) {
                continue;
            }
            color.insert(start, false);
            let mut queue = VecDeque::new();
            queue.push_back(start);
            while let Some(v) = queue.pop_front() {
                let side = color[&v];
                for n in self.neighbours(&v) {
                    match color.get(&n) {
                        Some(other) => {
                            if *other == side {
                                return Analysis::Value(false);
                            }
                        }
                        None => {
                            color.insert(n, !side);
                            queue.push_back(n);
                        }
                    }
                }
            }
        }
        Analysis::Value(true)
    }
}

impl<G: QueryableGraph> BipartiteCheck for G {}

fn flood<G>(g: &G, v: VertexNo, part: &mut Bipartition)
where
    G: QueryableGraph,
{
    let in_a = part.set_a.contains(&v);
    for n in g.neighbours(&v) {
        if !part.set_a.contains(&n) && !part.set_b.contains(&n) {
            if in_a {
                part.set_b.push(n);
            } else {
                part.set_a.push(n);
            }
            flood(g, n, part);
        }
    }
}

impl GraphEngine {
    /// Runs [BipartiteCheck::is_bipartite] and, when the graph passes,
    /// paints the flood-fill groups onto the `set_a`/`set_b` flags for the
    /// renderer. Paint over a clean slate: call
    /// [deselect_all](GraphEngine::deselect_all) first, as every analysis
    /// entry point does.
    pub fn check_bipartite(&mut self) -> Analysis<bool> {
        let res = self.is_bipartite();
        if res == Analysis::Value(true) {
            let part = self.bipartition();
            self.set_partition(&part.set_a, &part.set_b);
        }
        res
    }
}
