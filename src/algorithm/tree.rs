use crate::algorithm::{Analysis, SimpleCycles};
use crate::graph::*;

/// What a cycle-free check concluded about the graph's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeClass {
    /// Acyclic with every vertex attached somewhere.
    Tree,
    /// Acyclic but with at least one isolated vertex.
    Forest,
    /// At least one cycle.
    Cyclic,
}

/// Leaves of a tree: how many, and which.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafReport {
    pub total: usize,
    pub leaves: Vec<VertexNo>,
}

pub trait TreeCheck
where
    Self: QueryableGraph + Sized,
{
    /// Classifies the graph as tree, forest or cyclic.
    ///
    /// "Forest" here means the editor's notion: acyclic and some vertex
    /// has degree zero. A connected-looking acyclic graph with every
    /// vertex attached is a tree; two disjoint non-trivial trees with no
    /// isolated vertex still classify as [TreeClass::Tree], matching the
    /// editor's behavior.
    fn classify_tree(&self) -> Analysis<TreeClass> {
        if self.vertex_size() == 0 {
            return Analysis::NoVertices;
        }
        let cycles = self.simple_cycles();
        let has_isolated = self.iter_vertices().any(|v| self.degree(&v) == 0);
        if !cycles.is_empty() {
            Analysis::Value(TreeClass::Cyclic)
        } else if has_isolated {
            Analysis::Value(TreeClass::Forest)
        } else {
            Analysis::Value(TreeClass::Tree)
        }
    }

    /// Counts degree-one vertices, defined only when [classify_tree]
    /// answers [TreeClass::Tree].
    ///
    /// [classify_tree]: TreeCheck::classify_tree
    fn count_leaves(&self) -> Analysis<LeafReport> {
        match self.classify_tree() {
            Analysis::NoVertices => Analysis::NoVertices,
            Analysis::Value(TreeClass::Tree) => {
                let leaves: Vec<VertexNo> = self
                    .iter_vertices()
                    .filter(|v| self.degree(v) == 1)
                    .collect();
                Analysis::Value(LeafReport {
                    total: leaves.len(),
                    leaves,
                })
            }
            _ => Analysis::NotApplicable,
        }
    }
}

impl<G: QueryableGraph> TreeCheck for G {}
