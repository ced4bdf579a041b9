//! Boundary-fusing gluing: both disks share one rim cycle.

use std::collections::HashSet;

use tracing::debug;

use crate::disk::{Dwt, IvId, Vertex};
use crate::graph::Graph;

use super::strand::Pair;
use super::types::{HalfEdge, Side, Sided};

/// Whether `fuse` is defined for this pair and twist: no circum position may
/// be a degree-2 boundary vertex on both disks at once.
pub fn compatible(d1: &Dwt<'_>, d2: &Dwt<'_>, twist: usize) -> bool {
    let a = d1.twist(0);
    let b = d2.twist(twist);
    (0..a.circum()).all(|i| !(a.is_deg2(i) && b.is_deg2(i)))
}

/// Glue two equal-circumference disks so that their boundary circles fuse
/// into a single shared cycle, tagged [`Side::Rim`]. Returns `None` when the
/// pair is incompatible under `twist`; that is the expected negative
/// outcome, not an error.
///
/// Interior structure is collected per side as in [`connect`](super::connect),
/// but boundary vertices are not disk-local: every degree-2 position across
/// both disks joins one ordered rim, a single cycle is added over it, and
/// strand endpoints landing on the boundary are re-tagged to the rim before
/// their edge is recorded.
///
/// # Panics
///
/// Panics on mismatched circumferences, a rim position visited twice, or a
/// strand whose far end has no unique pending endpoint.
pub fn fuse(d1: &Dwt<'_>, d2: &Dwt<'_>, twist: usize) -> Option<Graph<Sided>> {
    let pair = Pair::new(d1, d2, twist);
    if !compatible(d1, d2, twist) {
        return None;
    }

    let mut g = Graph::new();
    let mut pending: Vec<HalfEdge> = Vec::new();

    for (side, view) in pair.sides() {
        for iv in 0..view.primary().interior_vertices.len() {
            let v = Vertex::Interior(IvId(iv));
            for w in view.neighbors(v) {
                match w {
                    Vertex::Interior(_) if v < w => {
                        g.add_edge(Sided::new(v, side), Sided::new(w, side));
                    }
                    Vertex::Interior(_) => {}
                    Vertex::Half(pos) => pending.push(HalfEdge { side, base: v, pos }),
                    Vertex::Boundary(_) => {
                        unreachable!("interior vertices neighbor only interiors and strand endpoints")
                    }
                }
            }
        }
    }

    // Fused rim: degree-2 positions across both disks, position-major.
    // Compatibility guarantees each position appears at most once.
    let circum = pair.one.circum();
    let mut rim: Vec<usize> = Vec::new();
    for i in 0..circum {
        for (side, view) in pair.sides() {
            if view.is_deg2(i) {
                rim.push(i);
                pending.push(HalfEdge { side, base: Vertex::Boundary(i), pos: i });
            }
        }
    }
    let mut seen = HashSet::new();
    assert!(
        rim.iter().all(|&i| seen.insert(i)),
        "fused boundary visits a position twice"
    );

    for k in 0..rim.len() {
        let a = rim[k];
        let b = rim[(k + 1) % rim.len()];
        g.add_edge(
            Sided::new(Vertex::Boundary(a), Side::Rim),
            Sided::new(Vertex::Boundary(b), Side::Rim),
        );
    }

    while let Some(he) = pending.pop() {
        let (far_side, far_pos) = pair.far_end(&he);
        // The far end may be a rim vertex recorded under either disk's
        // side, so candidates are matched by position alone.
        let at = {
            let mut hits = pending
                .iter()
                .enumerate()
                .filter(|(_, c)| c.pos == far_pos)
                .map(|(k, _)| k);
            let at = hits.next().unwrap_or_else(|| {
                panic!(
                    "strand from {:?} position {} ends at position {far_pos} with no pending endpoint",
                    he.side, he.pos
                )
            });
            assert!(hits.next().is_none(), "multiple pending endpoints at position {far_pos}");
            at
        };
        let partner = pending.remove(at);
        debug!(?he, ?partner, "matched strand");

        let near_tag = match he.base {
            Vertex::Boundary(_) => Side::Rim,
            _ => he.side,
        };
        let far_tag = match partner.base {
            Vertex::Boundary(_) => Side::Rim,
            _ => far_side,
        };
        g.add_edge(Sided::new(he.base, near_tag), Sided::new(partner.base, far_tag));
    }

    Some(g)
}
