//! The editor's graph store and the query surface algorithms run against.
//!
//! [GraphEngine] owns the vertex and edge sequences and is the only
//! mutator. Everything an algorithm needs to read goes through
//! [QueryableGraph], so analyses stay decoupled from the concrete store
//! and can be exercised against test doubles.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod engine;
pub use self::engine::*;
pub mod preset;

#[cfg(test)]
pub use self::tests::*;
