//! Primary quadrangulated disks and disks with transversals.
//!
//! Purpose
//! - Load and validate the nine primitive disk templates from their
//!   JSON-lines record format.
//! - Expand a template with chosen transversal counts into a `Dwt`, whose
//!   enlarged cyclic boundary ("circum" positions) is what the gluing
//!   algorithms walk.
//!
//! Why this design
//! - Rotation ("twist") is a borrowed view (`Twisted`), not a mutable field:
//!   two sides of a gluing can rotate the same disk differently, so gluing a
//!   disk to itself needs no clone and there is no aliasing hazard.
//! - Interior vertex labels are interned as indices into the sorted label
//!   list (`IvId`), so id order equals label order and graph vertices stay
//!   `Copy`.

mod dwt;
mod primary;

pub use dwt::{Dwt, DwtDescription, Landing, Twisted, Vertex};
pub use primary::{load_primary_disks, parse_primary_disks, DiskDataError, IvId, PrimaryDisk};
