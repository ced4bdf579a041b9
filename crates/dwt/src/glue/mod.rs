//! Gluing two disks with transversals into an immersed multigraph.
//!
//! Purpose
//! - `connect` glues two equal-circumference disks boundary-to-boundary,
//!   matching boundary vertices position for position and joining every
//!   transversal strand across the pair.
//! - `fuse` instead merges the two boundary circles into one shared rim
//!   cycle; it is only defined when no position is degree 2 on both disks
//!   at once and returns `None` otherwise.
//!
//! Why this design
//! - The first disk is always read unrotated and the second under the given
//!   twist, via borrowed `Twisted` views, so no disk is ever mutated and
//!   self-gluing needs no clone.
//! - Open strand endpoints go through an explicit worklist of pending
//!   `(side, base, position)` records; `search` follows a strand across the
//!   pair (hop parity decides which side it ends on) and the matched record
//!   is removed. Every endpoint is consumed exactly once; anything else is
//!   an unrecoverable inconsistency in the disk data and panics.

mod connect;
mod fuse;
mod strand;
mod types;

pub use connect::connect;
pub use fuse::{compatible, fuse};
pub use strand::search;
pub use types::{HalfEdge, Side, Sided};

#[cfg(test)]
mod tests;
