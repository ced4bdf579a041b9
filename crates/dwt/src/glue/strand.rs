//! Strand following across a pair of rotated disks.

use crate::disk::{Dwt, Landing, Twisted};

use super::types::{HalfEdge, Side};

/// Follow a transversal strand entering `b` at position `start`, crossing to
/// the other disk on every exit, until it lands on a vertex.
///
/// Returns the number of boundary steps taken and the terminal position. An
/// odd step count ends on `b`'s side of the gluing, an even count back on
/// `a`'s.
///
/// # Panics
///
/// Panics when the strand takes more than `circum(a) + circum(b)` steps:
/// that many steps revisit a position, so the strand cycles without ever
/// reaching a vertex and the disk data is malformed.
pub fn search(a: Twisted<'_>, b: Twisted<'_>, start: usize) -> (usize, usize) {
    let bound = a.circum() + b.circum();
    let (mut from, mut into) = (a, b);
    let mut pos = start;
    let mut steps = 0;
    loop {
        steps += 1;
        assert!(
            steps <= bound,
            "strand from position {start} never reached a vertex within {bound} steps"
        );
        match into.next(pos) {
            Landing::Exit(p) => {
                pos = p;
                std::mem::swap(&mut from, &mut into);
            }
            Landing::Vertex(p) | Landing::Deg2(p) => return (steps, p),
        }
    }
}

/// The two rotation views of a gluing: the first disk unrotated, the second
/// under the chosen twist.
pub(super) struct Pair<'a> {
    pub one: Twisted<'a>,
    pub two: Twisted<'a>,
}

impl<'a> Pair<'a> {
    /// # Panics
    ///
    /// Panics when the circumferences differ; only equal-size boundaries
    /// can be glued.
    pub fn new(d1: &'a Dwt<'a>, d2: &'a Dwt<'a>, twist: usize) -> Self {
        assert_eq!(
            d1.circum(),
            d2.circum(),
            "cannot glue disks with circumferences {} and {}",
            d1.circum(),
            d2.circum()
        );
        Self { one: d1.twist(0), two: d2.twist(twist) }
    }

    pub fn view(&self, side: Side) -> Twisted<'a> {
        match side {
            Side::One => self.one,
            Side::Two => self.two,
            Side::Rim => panic!("the shared rim is not a disk side"),
        }
    }

    pub fn sides(&self) -> [(Side, Twisted<'a>); 2] {
        [(Side::One, self.one), (Side::Two, self.two)]
    }

    /// Follow the strand leaving `he` and report where its far end lies:
    /// the side (by hop parity) and the terminal circum position.
    pub fn far_end(&self, he: &HalfEdge) -> (Side, usize) {
        let (steps, pos) = search(self.view(he.side), self.view(he.side.other()), he.pos);
        let side = if steps % 2 == 1 { he.side.other() } else { he.side };
        (side, pos)
    }
}
