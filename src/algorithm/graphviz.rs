//! Visualize the editor's graph in the graphviz format.
use crate::graph::*;

/**
 * Dumps the graph to a `std::io::Write` object in the graphviz format.
 *
 * Vertices are named by their number; edges carry a `label` attribute
 * when weighted (weight 0 means unlabeled, as everywhere in the editor).
 *
 * # Examples
 *
 * ```rust
 * use canvasgraph::{algorithm::graphviz::*, graph::*};
 *
 * let mut g = GraphEngine::new();
 * let v1 = g.add_vertex(0.0, 0.0);
 * let v2 = g.add_vertex(1.0, 0.0);
 * g.add_edge(v1, v2, 7);
 * g.add_edge(v2, v2, 0);
 * let trial = {
 *     let mut buf = vec![];
 *     g.dump_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph trial {
 *   1 ;
 *   2 ;
 *   1 -- 2 [label=7] ;
 *   2 -- 2 ;
 * }
 * "#
 * );
 * ```
 */
pub trait DumpInGraphviz
where
    Self: QueryableGraph,
{
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        writeln!(out, "graph {} {{", graph_name)?;
        for v in self.iter_vertices() {
            writeln!(out, "  {} ;", v)?;
        }
        for e in self.iter_edges() {
            if e.weight != 0 {
                writeln!(out, "  {} -- {} [label={}] ;", e.from, e.to, e.weight)?;
            } else {
                writeln!(out, "  {} -- {} ;", e.from, e.to)?;
            }
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl<G> DumpInGraphviz for G where G: QueryableGraph {}
