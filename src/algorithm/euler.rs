use crate::algorithm::{Analysis, Connectivity};
use crate::graph::*;

pub trait EulerianCircuit
where
    Self: QueryableGraph + Sized,
{
    /// Whether the graph admits an Eulerian circuit.
    ///
    /// Connected graphs use the classical criterion: every degree even.
    /// Disconnected graphs use the editor's deliberately relaxed rule:
    /// isolated vertices are ignored and every vertex with at least one
    /// neighbour must have even degree, so two disjoint cycles pass even
    /// though no single circuit covers both. Preserved as specified.
    fn has_eulerian_circuit(&self) -> Analysis<bool> {
        if self.vertex_size() == 0 {
            return Analysis::NoVertices;
        }
        let connected = self.is_connected() == Analysis::Value(true);
        for v in self.iter_vertices() {
            let deg = self.degree(&v);
            if !connected && deg == 0 {
                continue;
            }
            if deg % 2 == 1 {
                return Analysis::Value(false);
            }
        }
        Analysis::Value(true)
    }
}

impl<G: QueryableGraph> EulerianCircuit for G {}
