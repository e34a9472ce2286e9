//! Demo graphs the editor can load with one click.
//!
//! Layout math mirrors the editor's canvas placement: positions are
//! computed from the drawable area's width and height so the presets land
//! where the buttons always put them.
//!
//! The complete graphs insert both orientations of every pair, so `K3`
//! arrives with six edges rather than three. That is how the editor has
//! always built them; the data model accepts parallel edges and the
//! analyses that care (cycles, bridges) already collapse them.

use crate::graph::*;

fn mid(width: f64, height: f64) -> (f64, f64) {
    let left_shift = width * 0.2;
    let top_shift = height * 0.1;
    (width / 2.0 - left_shift, height / 2.0 - top_shift)
}

fn all_pairs_both_ways(g: &mut GraphEngine) {
    let n = g.vertex_size();
    for i in 1..=n {
        for j in 1..=n {
            if i != j {
                g.add_edge(VertexNo::new(i), VertexNo::new(j), 0);
            }
        }
    }
}

/// Replaces the graph with a complete graph on `size` vertices.
/// Supported sizes are 3, 4 and 5; anything else leaves the graph alone.
pub fn complete(g: &mut GraphEngine, size: usize, width: f64, height: f64) -> bool {
    let (hmid, vmid) = mid(width, height);
    match size {
        3 => {
            g.clear();
            g.add_vertex(hmid, vmid - 75.0);
            g.add_vertex(hmid + 50.0, vmid);
            g.add_vertex(hmid - 50.0, vmid);
        }
        4 => {
            g.clear();
            g.add_vertex(hmid - 100.0, vmid - 100.0);
            g.add_vertex(hmid + 100.0, vmid - 100.0);
            g.add_vertex(hmid + 100.0, vmid + 100.0);
            g.add_vertex(hmid - 100.0, vmid + 100.0);
        }
        5 => {
            g.clear();
            g.add_vertex(hmid, vmid - 150.0);
            g.add_vertex(hmid + 100.0, vmid - 80.0);
            g.add_vertex(hmid - 100.0, vmid - 80.0);
            g.add_vertex(hmid + 60.0, vmid + 30.0);
            g.add_vertex(hmid - 60.0, vmid + 30.0);
        }
        _ => return false,
    }
    all_pairs_both_ways(g);
    true
}

/// Replaces the graph with a complete bipartite graph `K(size, size)`.
/// Supported sizes are 3 and 4.
pub fn complete_bipartite(g: &mut GraphEngine, size: usize, width: f64, height: f64) -> bool {
    let (hmid, vmid) = mid(width, height);
    let xs: &[f64] = match size {
        3 => &[-150.0, 0.0, 150.0],
        4 => &[-225.0, -75.0, 75.0, 225.0],
        _ => return false,
    };
    g.clear();
    for x in xs {
        g.add_vertex(hmid + x, vmid - 75.0);
    }
    for x in xs {
        g.add_vertex(hmid + x, vmid + 75.0);
    }
    for i in 1..=size {
        for j in size + 1..=2 * size {
            g.add_edge(VertexNo::new(i), VertexNo::new(j), 0);
        }
    }
    true
}

/// Replaces the graph with a three-level binary tree on seven vertices.
pub fn basic_tree(g: &mut GraphEngine, width: f64, height: f64) {
    let (hmid, vmid) = mid(width, height);
    g.clear();
    g.add_vertex(hmid, vmid - 200.0);
    g.add_vertex(hmid - 150.0, vmid - 75.0);
    g.add_vertex(hmid + 150.0, vmid - 75.0);
    g.add_vertex(hmid - 250.0, vmid + 50.0);
    g.add_vertex(hmid - 75.0, vmid + 50.0);
    g.add_vertex(hmid + 75.0, vmid + 50.0);
    g.add_vertex(hmid + 250.0, vmid + 50.0);

    let links = [(1, 2), (1, 3), (2, 4), (2, 5), (3, 6), (3, 7)];
    for (a, b) in links {
        g.add_edge(VertexNo::new(a), VertexNo::new(b), 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_graphs_double_every_pair() {
        let mut g = GraphEngine::new();
        assert!(complete(&mut g, 3, 800.0, 600.0));
        assert_eq!(g.vertex_size(), 3);
        assert_eq!(g.edge_size(), 6);
        assert!(complete(&mut g, 5, 800.0, 600.0));
        assert_eq!(g.vertex_size(), 5);
        assert_eq!(g.edge_size(), 20);
        assert!(!complete(&mut g, 6, 800.0, 600.0));
        assert_eq!(g.vertex_size(), 5);
    }

    #[test]
    fn bipartite_presets_link_top_row_to_bottom_row() {
        let mut g = GraphEngine::new();
        assert!(complete_bipartite(&mut g, 3, 800.0, 600.0));
        assert_eq!(g.vertex_size(), 6);
        assert_eq!(g.edge_size(), 9);
        for i in 1..=3 {
            for j in 4..=6 {
                assert!(g.is_edge(VertexNo::new(i), VertexNo::new(j)));
            }
        }
        assert!(!g.is_edge(VertexNo::new(1), VertexNo::new(2)));
    }

    #[test]
    fn basic_tree_is_seven_vertices_six_edges() {
        let mut g = GraphEngine::new();
        basic_tree(&mut g, 800.0, 600.0);
        assert_eq!(g.vertex_size(), 7);
        assert_eq!(g.edge_size(), 6);
    }
}
