//! Analyses the editor offers over the graph store.

mod outcome;
pub use self::outcome::*;
mod connectivity;
pub use self::connectivity::*;
mod paths;
pub use self::paths::*;
mod cycles;
pub use self::cycles::*;
mod bridges;
pub use self::bridges::*;
mod tree;
pub use self::tree::*;
mod bipartite;
pub use self::bipartite::*;
mod euler;
pub use self::euler::*;
mod mst;
pub use self::mst::*;
pub mod graphviz;
