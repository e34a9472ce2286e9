use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

pub trait MinimumSpanningTree
where
    Self: QueryableGraph + Sized,
{
    /// Prim's algorithm: grows a tree from vertex 1, always absorbing the
    /// minimum-weight edge that crosses the frontier. When a component is
    /// exhausted, growth restarts from the next unvisited vertex in
    /// number order, so a disconnected graph yields a minimum spanning
    /// forest. Returns the selected edges in absorption order.
    ///
    /// The frontier is a keyed priority queue with one slot per
    /// out-of-tree vertex; a cheaper crossing edge displaces the slot
    /// (decrease-key), so self-loops and the heavier of parallel edges
    /// are never selected.
    fn prim_mst(&self) -> Vec<EdgeIdx> {
        let mut in_tree = HashSet::with_hasher(RandomState::new());
        let mut picked = vec![];
        let seeds: Vec<VertexNo> = self.iter_vertices().collect();
        for seed in seeds {
            if in_tree.contains(&seed) {
                continue;
            }
            in_tree.insert(seed);
            let mut frontier: KeyedPriorityQueue<VertexNo, Reverse<u32>, RandomState> =
                KeyedPriorityQueue::with_capacity_and_hasher(
                    self.vertex_size(),
                    RandomState::new(),
                );
            let mut via: HashMap<VertexNo, EdgeIdx, RandomState> =
                HashMap::with_hasher(RandomState::new());
            relax(self, seed, &in_tree, &mut frontier, &mut via);
            while let Some((v, _)) = frontier.pop() {
                if !in_tree.insert(v) {
                    continue;
                }
                picked.push(*via.get(&v).unwrap());
                relax(self, v, &in_tree, &mut frontier, &mut via);
            }
        }
        picked
    }

    /// Sum of the weights of the given edges. Indices that no longer
    /// resolve contribute nothing.
    fn total_weight(&self, edges: &[EdgeIdx]) -> u64 {
        edges
            .iter()
            .filter_map(|idx| self.find_edge(idx))
            .map(|e| e.weight as u64)
            .sum()
    }
}

impl<G: QueryableGraph> MinimumSpanningTree for G {}

fn relax<G>(
    g: &G,
    v: VertexNo,
    in_tree: &HashSet<VertexNo, RandomState>,
    frontier: &mut KeyedPriorityQueue<VertexNo, Reverse<u32>, RandomState>,
    via: &mut HashMap<VertexNo, EdgeIdx, RandomState>,
) where
    G: QueryableGraph,
{
    for e in g.incident_edges(&v) {
        let n = e.other(v);
        if in_tree.contains(&n) {
            continue;
        }
        let better = match frontier.get_priority(&n) {
            Some(Reverse(w)) => e.weight < *w,
            None => true,
        };
        if better {
            frontier.push(n, Reverse(e.weight));
            via.insert(n, e.idx);
        }
    }
}
