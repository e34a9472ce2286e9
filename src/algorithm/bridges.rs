use crate::algorithm::SimpleCycles;
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

pub trait Bridges
where
    Self: QueryableGraph + Sized,
{
    /// Every edge that lies on no cycle, in insertion order.
    ///
    /// Cycle-complement definition: enumerate all simple cycles, map each
    /// closed walk back to concrete edges (every parallel edge between a
    /// consecutive pair counts as on-cycle), and return the rest. Correct
    /// for simple graphs; a lone parallel pair is reported as two bridges
    /// even though removing one of them disconnects nothing, which is the
    /// editor's documented simple-graph assumption.
    fn bridges(&self) -> Vec<EdgeIdx> {
        let mut on_cycle = HashSet::with_hasher(RandomState::new());
        for cyc in self.simple_cycles() {
            for w in cyc.windows(2) {
                for e in self.edges_connecting(&w[0], &w[1]) {
                    on_cycle.insert(e.idx);
                }
            }
        }
        self.iter_edges()
            .filter(|e| !on_cycle.contains(&e.idx))
            .map(|e| e.idx)
            .collect()
    }
}

impl<G: QueryableGraph> Bridges for G {}
