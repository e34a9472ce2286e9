//! The analysis engine behind an interactive graph editor.
//!
//! A graph here is what a user draws on a canvas: vertices numbered `1..N`
//! in the order they were placed, and undirected weighted edges between
//! them. The rendering and input layers live elsewhere; this crate owns the
//! mutable vertex/edge store ([graph::GraphEngine]) and the analyses the
//! editor offers over it.
//!
//! # The store
//!
//! Vertices keep their 1-based number equal to their position in the
//! insertion sequence at all times. To make that hold without renumbering,
//! removal only pops the most recently added vertex (taking its incident
//! edges with it) or the most recently added edge. Multi-edges and
//! self-loops are accepted as drawn; algorithms assume a simple graph.
//!
//! # The algorithms
//!
//! Analyses are extension traits blanket-implemented for any
//! [graph::QueryableGraph]: connectivity and walk search, exhaustive
//! simple-path enumeration with shortest selection, simple-cycle
//! enumeration with girth, bridge detection, tree/forest classification,
//! bipartiteness, Eulerian-circuit existence, and Prim's minimum spanning
//! tree. Degenerate inputs (no vertices, not-a-tree) come back as
//! [algorithm::Analysis] variants instead of in-band sentinels.
//!
//! Algorithms annotate their findings (selection, leaf, partition and
//! highlight flags) through [graph::GraphEngine] so the renderer can paint
//! them; the flags are write-only from the algorithms' point of view and
//! never steer control flow.

pub mod algorithm;
pub mod graph;
