//! Enumeration of immersed multigraphs obtained by gluing quadrangulated
//! disks with transversals.
//!
//! Pipeline
//! - `disk`: the primary disk templates and their transversal expansions.
//! - `composition`: the transversal-count assignments, one per strand pair.
//! - `glue`: the two gluing operations (`connect`, `fuse`) that walk paired
//!   strand endpoints across two disks and emit the glued graph.
//! - `graph`: small multigraphs and the isomorphism-aware store that decides
//!   whether a glued graph is combinatorially new.
//! - `targets`: the externally supplied graphs the search is hunting for.
//!
//! The enumeration driver lives in the `cli` crate; this crate is
//! deterministic and single-threaded throughout.

pub mod composition;
pub mod disk;
pub mod glue;
pub mod graph;
pub mod targets;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::disk::{Dwt, Landing, PrimaryDisk, Twisted, Vertex};
    pub use crate::glue::{compatible, connect, fuse, search, Side, Sided};
    pub use crate::graph::{AdjMatrix, Graph, GraphBag};
}
