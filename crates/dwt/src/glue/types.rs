//! Shared vocabulary for the gluing algorithms.

use crate::disk::Vertex;

/// Which disk a glued vertex belongs to. `Rim` marks the shared boundary
/// cycle created by `fuse`, distinct from both disk sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    One,
    Two,
    Rim,
}

impl Side {
    /// The opposite disk side.
    ///
    /// # Panics
    ///
    /// Panics on `Rim`, which has no opposite.
    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
            Side::Rim => panic!("the shared rim has no opposite side"),
        }
    }
}

/// A disk vertex tagged with the side it came from; the vertex type of
/// glued graphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sided {
    pub vertex: Vertex,
    pub side: Side,
}

impl Sided {
    pub fn new(vertex: Vertex, side: Side) -> Self {
        Self { vertex, side }
    }
}

/// An open transversal-strand endpoint awaiting its partner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    pub side: Side,
    /// The vertex the strand is anchored at.
    pub base: Vertex,
    /// Circum position of the open endpoint.
    pub pos: usize,
}
