use crate::graph::*;

/// Read access to an undirected weighted graph.
///
/// Implementors provide the five core queries; adjacency helpers are
/// derived by scanning the edge sequence, which matches the editor's
/// O(E)-per-query behavior and keeps the contract identical across
/// implementations.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexNo> + '_>;
    fn contains_vertex(&self, v: &VertexNo) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = EdgeRef> + '_>;
    fn find_edge(&self, e: &EdgeIdx) -> Option<EdgeRef>;

    /// Edges whose endpoints are `a` and `b`, in either orientation, in
    /// insertion order. Yields every parallel edge.
    fn edges_connecting(&self, a: &VertexNo, b: &VertexNo) -> Box<dyn Iterator<Item = EdgeRef> + '_> {
        let a = *a;
        let b = *b;
        let it = self.iter_edges().filter(move |e| {
            (e.from == a && e.to == b) || (e.from == b && e.to == a)
        });
        Box::new(it)
    }

    /// True iff at least one edge connects `a` and `b`.
    fn connects(&self, a: &VertexNo, b: &VertexNo) -> bool {
        self.edges_connecting(a, b).next().is_some()
    }

    /// Every edge with `v` as an endpoint, in insertion order. A self-loop
    /// appears once.
    fn incident_edges(&self, v: &VertexNo) -> Box<dyn Iterator<Item = EdgeRef> + '_> {
        let v = *v;
        let it = self.iter_edges().filter(move |e| e.from == v || e.to == v);
        Box::new(it)
    }

    /// Neighbours of `v` ordered by number.
    ///
    /// One entry per incident edge endpoint, so parallel edges contribute
    /// duplicates and a self-loop contributes `v` twice. Degree is defined
    /// as the length of this sequence.
    fn neighbours(&self, v: &VertexNo) -> Vec<VertexNo> {
        let mut nbrs = vec![];
        for e in self.iter_edges() {
            if e.from == *v {
                nbrs.push(e.to);
            }
            if e.to == *v {
                nbrs.push(e.from);
            }
        }
        nbrs.sort_unstable();
        nbrs
    }

    fn degree(&self, v: &VertexNo) -> usize {
        self.neighbours(v).len()
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

/// Indented adjacency listing for test failures and logs.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{}", v)?;
            for e in self.graph.incident_edges(&v) {
                self.display_indent(f, 1)?;
                if e.weight != 0 {
                    writeln!(f, "-- {} ({:?}, w={})", e.other(v), e.idx, e.weight)?;
                } else {
                    writeln!(f, "-- {} ({:?})", e.other(v), e.idx)?;
                }
            }
        }
        Ok(())
    }
}
