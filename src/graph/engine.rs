use crate::graph::*;

/// The editor's graph: an ordered vertex sequence and an ordered edge
/// sequence, mutated only through the methods below.
///
/// Invariant: `vertices[i].no == i + 1` at all times. Removal therefore
/// only pops from the end of either sequence; popping a vertex also drops
/// every edge incident to it so no edge ever dangles.
#[derive(Clone, Default)]
pub struct GraphEngine {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl GraphEngine {
    pub fn new() -> Self {
        Self {
            vertices: vec![],
            edges: vec![],
        }
    }

    /// Appends a vertex at the given canvas position and returns its
    /// number. Never fails; numbering is `len + 1` by construction.
    pub fn add_vertex(&mut self, x: f64, y: f64) -> VertexNo {
        let no = VertexNo::new(self.vertices.len() + 1);
        self.vertices.push(Vertex::new(no, x, y));
        no
    }

    /// Appends an edge between two existing vertices.
    ///
    /// Parallel edges and self-loops are not rejected; the input layer
    /// decides what may be drawn.
    pub fn add_edge(&mut self, v1: VertexNo, v2: VertexNo, weight: u32) -> EdgeIdx {
        debug_assert!(self.contains_vertex(&v1));
        debug_assert!(self.contains_vertex(&v2));
        let idx = EdgeIdx::new(self.edges.len());
        self.edges.push(Edge::new(v1, v2, weight));
        idx
    }

    /// Removes the most recently added vertex together with every edge
    /// incident to it, then clears all annotations. No-op on an empty
    /// store.
    pub fn remove_vertex(&mut self) -> Option<Vertex> {
        let removed = self.vertices.pop()?;
        self.edges.retain(|e| !e.touches(removed.no));
        self.deselect_all();
        Some(removed)
    }

    /// Removes the most recently added edge, then clears all annotations.
    /// No-op when there are no edges.
    pub fn remove_edge(&mut self) -> Option<Edge> {
        let removed = self.edges.pop()?;
        self.deselect_all();
        Some(removed)
    }

    /// Empties the store.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    pub fn is_vertex(&self, no: VertexNo) -> bool {
        self.contains_vertex(&no)
    }

    /// True iff some edge connects the two vertices, in either direction.
    pub fn is_edge(&self, v1: VertexNo, v2: VertexNo) -> bool {
        self.connects(&v1, &v2)
    }

    pub fn vertex(&self, no: VertexNo) -> Option<&Vertex> {
        if no.0 == 0 {
            return None;
        }
        self.vertices.get(no.to_index())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// `2E / V`, the figure the editor shows in its status line. NaN for
    /// an empty graph.
    pub fn density(&self) -> f64 {
        2.0 * self.edges.len() as f64 / self.vertices.len() as f64
    }

    /// Moves a vertex; called by the input layer while dragging.
    pub fn set_position(&mut self, no: VertexNo, x: f64, y: f64) {
        if let Some(v) = self.vertex_mut(no) {
            v.x = x;
            v.y = y;
        }
    }

    pub fn set_selected(&mut self, no: VertexNo, selected: bool) {
        if let Some(v) = self.vertex_mut(no) {
            v.selected = selected;
        }
    }

    /// Clears every annotation flag on vertices and edges. Every analysis
    /// entry point in the editor calls this first so stale paint never
    /// survives; calling it twice is the same as calling it once.
    pub fn deselect_all(&mut self) {
        for v in self.vertices.iter_mut() {
            v.clear_flags();
        }
        for e in self.edges.iter_mut() {
            e.highlight = false;
        }
    }

    /// Sets the highlight flag on the given edges.
    pub fn highlight_edges(&mut self, idxs: &[EdgeIdx]) {
        for idx in idxs {
            if let Some(e) = self.edges.get_mut(idx.to_raw()) {
                e.highlight = true;
            }
        }
    }

    /// Highlights every edge along a walk: for each consecutive pair of
    /// numbers, all parallel edges between them light up. Pairs naming a
    /// vertex that does not exist are skipped.
    pub fn highlight_path(&mut self, walk: &[VertexNo]) {
        for w in walk.windows(2) {
            if !self.is_vertex(w[0]) || !self.is_vertex(w[1]) {
                continue;
            }
            for e in self.edges.iter_mut() {
                if e.connects(w[0], w[1]) {
                    e.highlight = true;
                }
            }
        }
    }

    /// Sets the leaf flag on the given vertices.
    pub fn mark_leaves(&mut self, leaves: &[VertexNo]) {
        for no in leaves {
            if let Some(v) = self.vertex_mut(*no) {
                v.leaf = true;
            }
        }
    }

    /// Paints a two-coloring: `set_a` on the first group, `set_b` on the
    /// second. Vertices in neither group keep their flags untouched.
    pub fn set_partition(&mut self, set_a: &[VertexNo], set_b: &[VertexNo]) {
        for no in set_a {
            if let Some(v) = self.vertex_mut(*no) {
                v.set_a = true;
            }
        }
        for no in set_b {
            if let Some(v) = self.vertex_mut(*no) {
                v.set_b = true;
            }
        }
    }

    fn vertex_mut(&mut self, no: VertexNo) -> Option<&mut Vertex> {
        if no.0 == 0 {
            return None;
        }
        self.vertices.get_mut(no.to_index())
    }
}

impl QueryableGraph for GraphEngine {
    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexNo> + '_> {
        Box::new(self.vertices.iter().map(|v| v.no))
    }

    fn contains_vertex(&self, v: &VertexNo) -> bool {
        v.0 >= 1 && v.0 <= self.vertices.len()
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = EdgeRef> + '_> {
        let it = self.edges.iter().enumerate().map(|(i, e)| EdgeRef {
            idx: EdgeIdx::new(i),
            from: e.from,
            to: e.to,
            weight: e.weight,
        });
        Box::new(it)
    }

    fn find_edge(&self, e: &EdgeIdx) -> Option<EdgeRef> {
        self.edges.get(e.to_raw()).map(|edge| EdgeRef {
            idx: *e,
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        })
    }
}

impl std::fmt::Debug for GraphEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "GraphEngine {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn numbering_follows_insertion_order() {
        let mut g = GraphEngine::new();
        assert_eq!(g.add_vertex(0.0, 0.0), VertexNo::new(1));
        assert_eq!(g.add_vertex(1.0, 0.0), VertexNo::new(2));
        assert_eq!(g.add_vertex(2.0, 0.0), VertexNo::new(3));
        assert!(g.is_vertex(VertexNo::new(3)));
        assert!(!g.is_vertex(VertexNo::new(4)));
    }

    #[quickcheck]
    fn numbering_stays_dense(ops: crate::graph::Ops) {
        let g = ops.build();
        for (i, v) in g.vertices().iter().enumerate() {
            assert_eq!(v.no.to_raw(), i + 1);
        }
    }

    #[quickcheck]
    fn no_edge_dangles(ops: crate::graph::Ops) {
        let g = ops.build();
        for e in g.edges() {
            assert!(g.is_vertex(e.from));
            assert!(g.is_vertex(e.to));
        }
    }

    #[test]
    fn remove_vertex_sweeps_incident_edges() {
        let mut g = GraphEngine::new();
        let v1 = g.add_vertex(0.0, 0.0);
        let v2 = g.add_vertex(1.0, 0.0);
        g.add_edge(v1, v2, 0);
        g.remove_vertex();
        g.remove_vertex();
        assert_eq!(g.vertex_size(), 0);
        assert_eq!(g.edge_size(), 0);
    }

    #[test]
    fn removals_on_empty_store_are_noops() {
        let mut g = GraphEngine::new();
        assert!(g.remove_vertex().is_none());
        assert!(g.remove_edge().is_none());
        assert_eq!(g.vertex_size(), 0);
    }

    #[test]
    fn removal_clears_annotations() {
        let mut g = GraphEngine::new();
        let v1 = g.add_vertex(0.0, 0.0);
        let v2 = g.add_vertex(1.0, 0.0);
        let e = g.add_edge(v1, v2, 0);
        g.add_vertex(2.0, 2.0);
        g.set_selected(v1, true);
        g.highlight_edges(&[e]);
        g.remove_vertex();
        assert!(!g.vertex(v1).unwrap().selected);
        assert!(!g.edges()[0].highlight);
    }

    #[test]
    fn deselect_all_is_idempotent() {
        let mut g = GraphEngine::new();
        let v1 = g.add_vertex(0.0, 0.0);
        let v2 = g.add_vertex(1.0, 0.0);
        g.add_edge(v1, v2, 3);
        g.set_selected(v2, true);
        g.highlight_path(&[v1, v2]);
        g.deselect_all();
        let once = g.clone();
        g.deselect_all();
        assert_eq!(g.vertices(), once.vertices());
        assert_eq!(g.edges(), once.edges());
    }

    #[test]
    fn neighbours_are_ordered_and_count_multiplicity() {
        let mut g = GraphEngine::new();
        let v1 = g.add_vertex(0.0, 0.0);
        let v2 = g.add_vertex(1.0, 0.0);
        let v3 = g.add_vertex(2.0, 0.0);
        g.add_edge(v3, v1, 0);
        g.add_edge(v1, v2, 0);
        g.add_edge(v1, v2, 0); // parallel
        g.add_edge(v1, v1, 0); // self-loop
        assert_eq!(g.neighbours(&v1), vec![v1, v1, v2, v2, v3]);
        assert_eq!(g.degree(&v1), 5);
        assert_eq!(g.degree(&v3), 1);
    }

    #[test]
    fn highlight_path_lights_all_parallel_edges() {
        let mut g = GraphEngine::new();
        let v1 = g.add_vertex(0.0, 0.0);
        let v2 = g.add_vertex(1.0, 0.0);
        g.add_edge(v1, v2, 0);
        g.add_edge(v2, v1, 0);
        g.highlight_path(&[v1, v2]);
        assert!(g.edges().iter().all(|e| e.highlight));
    }

    #[test]
    fn is_edge_checks_both_orientations() {
        let mut g = GraphEngine::new();
        let v1 = g.add_vertex(0.0, 0.0);
        let v2 = g.add_vertex(1.0, 0.0);
        g.add_edge(v1, v2, 0);
        assert!(g.is_edge(v1, v2));
        assert!(g.is_edge(v2, v1));
        assert!(!g.is_edge(v1, v1));
    }

    #[test]
    fn density_counts_both_edge_ends() {
        let mut g = GraphEngine::new();
        let v1 = g.add_vertex(0.0, 0.0);
        let v2 = g.add_vertex(1.0, 0.0);
        g.add_vertex(2.0, 0.0);
        g.add_edge(v1, v2, 0);
        assert!((g.density() - 2.0 / 3.0).abs() < 1e-12);
    }
}
