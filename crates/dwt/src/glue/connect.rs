//! Pairwise boundary gluing of two disks with transversals.

use std::collections::HashSet;

use tracing::debug;

use crate::disk::{Dwt, Vertex};
use crate::graph::Graph;

use super::strand::Pair;
use super::types::{HalfEdge, Sided};

/// Glue two equal-circumference disks by keeping every disk vertex on its
/// own side and joining each transversal strand across the pair. The first
/// disk is read unrotated, the second under `twist`.
///
/// Each side contributes its vertices and in-disk edges (undirected pairs
/// deduplicated by endpoint order, self-loops kept); the open strand
/// endpoints are then matched up via [`search`](super::search) until none
/// remain.
///
/// # Panics
///
/// Panics on mismatched circumferences, duplicate strand endpoints, or a
/// strand whose far end has no unique pending endpoint; all of these mean
/// the disk data is inconsistent.
pub fn connect(d1: &Dwt<'_>, d2: &Dwt<'_>, twist: usize) -> Graph<Sided> {
    let pair = Pair::new(d1, d2, twist);

    let mut g = Graph::new();
    let mut pending: Vec<HalfEdge> = Vec::new();

    for (side, view) in pair.sides() {
        for v in view.vertices() {
            g.add_node(Sided::new(v, side));
            for w in view.neighbors(v) {
                match w {
                    Vertex::Half(pos) => pending.push(HalfEdge { side, base: v, pos }),
                    // Within a disk, neighbors share the vertex kind, so the
                    // derived order compares values; <= keeps one copy per
                    // undirected pair and admits self-loops.
                    _ if v <= w => g.add_edge(Sided::new(v, side), Sided::new(w, side)),
                    _ => {}
                }
            }
        }
    }

    let mut seen = HashSet::new();
    for he in &pending {
        assert!(
            seen.insert((he.side, he.pos)),
            "duplicate strand endpoint at {:?} position {}",
            he.side,
            he.pos
        );
    }

    while let Some(he) = pending.pop() {
        let (far_side, far_pos) = pair.far_end(&he);
        let at = {
            let mut hits = pending
                .iter()
                .enumerate()
                .filter(|(_, c)| c.side == far_side && c.pos == far_pos)
                .map(|(k, _)| k);
            let at = hits.next().unwrap_or_else(|| {
                panic!(
                    "strand from {:?} position {} ends at {:?} position {far_pos} with no pending endpoint",
                    he.side, he.pos, far_side
                )
            });
            assert!(
                hits.next().is_none(),
                "multiple pending endpoints at {far_side:?} position {far_pos}"
            );
            at
        };
        let partner = pending.remove(at);
        debug!(?he, ?partner, "matched strand");
        g.add_edge(Sided::new(he.base, he.side), Sided::new(partner.base, far_side));
    }

    g
}
