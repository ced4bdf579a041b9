//! Disks with transversals and their rotated boundary views.

use serde::Serialize;

use super::primary::{IvId, PrimaryDisk};

/// A node contributed by one disk to a gluing.
///
/// `Half` marks an open transversal-strand endpoint; it is consumed during
/// gluing and never survives into a finished graph. Ordering is by variant,
/// then value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Vertex {
    Interior(IvId),
    /// A circum position carrying a boundary vertex.
    Boundary(usize),
    /// A circum position carrying an open strand endpoint.
    Half(usize),
}

/// Where stepping into the boundary at a circum position lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    /// A boundary vertex with an interior attachment.
    Vertex(usize),
    /// A degree-2 boundary vertex (no interior attachment).
    Deg2(usize),
    /// Mid-strand: the transversal crosses the disk and exits here.
    Exit(usize),
}

/// A primary disk expanded by transversal counts into a larger cyclic
/// boundary.
///
/// Each primitive boundary position `e` widens into `tc[e] + 1` consecutive
/// circum positions, sub-indexed `j = 0..=tc[e]`; `j == 0` is the primitive
/// vertex itself, `j > 0` a strand crossing. Sigma partners share their
/// count, so the mirrored sub-index on the partner side is always in range.
/// The position ↔ `(e, j)` bijection is fixed for the value's lifetime;
/// rotation happens only in [`Twisted`] views.
#[derive(Clone, Debug)]
pub struct Dwt<'a> {
    pd: &'a PrimaryDisk,
    /// Transversal count per primitive boundary position.
    tc: Vec<usize>,
    /// First circum position of each primitive position's sub-range.
    starts: Vec<usize>,
    /// Dense inverse: circum position -> (primitive position, sub-index).
    bpc: Vec<(usize, usize)>,
    circum: usize,
}

/// Serializable description of a DWT, used in discovery records.
#[derive(Clone, Debug, Serialize)]
pub struct DwtDescription {
    pub disk: String,
    pub transversal_counts: Vec<usize>,
}

impl<'a> Dwt<'a> {
    /// Expand `pd` with one transversal count per sigma pair, counts taken in
    /// pair-opener order (the opener of a pair is its position `e` with
    /// `sigma[e] > e`).
    ///
    /// # Panics
    ///
    /// Panics when `counts.len() != size / 2` (a malformed composition).
    pub fn new(pd: &'a PrimaryDisk, counts: &[usize]) -> Self {
        let size = pd.size();
        assert_eq!(
            2 * counts.len(),
            size,
            "disk {} takes {} transversal counts, got {}",
            pd.name,
            size / 2,
            counts.len()
        );

        let mut tc = vec![0usize; size];
        let mut taken = 0;
        for i in 0..size {
            let p = pd.sigma[i];
            if p > i {
                tc[i] = counts[taken];
                taken += 1;
            } else {
                tc[i] = tc[p];
            }
        }

        let mut starts = Vec::with_capacity(size);
        let mut bpc = Vec::new();
        let mut pos = 0;
        for (e, &c) in tc.iter().enumerate() {
            starts.push(pos);
            for j in 0..=c {
                bpc.push((e, j));
            }
            pos += c + 1;
        }

        Self { pd, tc, starts, bpc, circum: pos }
    }

    pub fn primary(&self) -> &PrimaryDisk {
        self.pd
    }

    /// Total number of boundary positions after transversal expansion.
    pub fn circum(&self) -> usize {
        self.circum
    }

    pub fn transversal_counts(&self) -> &[usize] {
        &self.tc
    }

    /// Borrowed rotation view; all boundary lookups on it are shifted by
    /// `twist` modulo `circum`. Views are cheap and independent, so the two
    /// sides of a gluing can rotate the same disk differently.
    pub fn twist(&self, twist: usize) -> Twisted<'_> {
        Twisted { dwt: self, twist: twist % self.circum }
    }

    pub fn description(&self) -> DwtDescription {
        DwtDescription {
            disk: self.pd.name.clone(),
            transversal_counts: self.tc.clone(),
        }
    }
}

/// A [`Dwt`] read under a cyclic rotation offset.
#[derive(Clone, Copy, Debug)]
pub struct Twisted<'a> {
    dwt: &'a Dwt<'a>,
    twist: usize,
}

impl<'a> Twisted<'a> {
    pub fn circum(&self) -> usize {
        self.dwt.circum
    }

    pub fn primary(&self) -> &PrimaryDisk {
        self.dwt.pd
    }

    /// Boundary code pair at circum position `i`: the primitive position and
    /// sub-index underneath it, under this view's rotation.
    pub fn bcp(&self, i: usize) -> (usize, usize) {
        let c = self.dwt.circum;
        self.dwt.bpc[(i % c + c - self.twist) % c]
    }

    /// Circum position of boundary code pair `(e, j)`; the two-sided inverse
    /// of [`bcp`] modulo `circum`.
    pub fn boundary_index(&self, e: usize, j: usize) -> usize {
        debug_assert!(j <= self.dwt.tc[e], "sub-index {j} out of range at position {e}");
        (self.dwt.starts[e] + j + self.twist) % self.dwt.circum
    }

    /// Step into the boundary at position `i`: either land on a vertex of
    /// the primary disk, or follow the transversal strand out the paired
    /// side of the disk.
    pub fn next(&self, i: usize) -> Landing {
        let (e, j) = self.bcp(i);
        if j == 0 {
            return match self.dwt.pd.inwards[e] {
                None => Landing::Deg2(i),
                Some(_) => Landing::Vertex(i),
            };
        }
        let e2 = self.dwt.pd.sigma[e];
        let j2 = self.dwt.tc[e] + 1 - j;
        Landing::Exit(self.boundary_index(e2, j2))
    }

    pub fn is_deg2(&self, i: usize) -> bool {
        matches!(self.next(i), Landing::Deg2(_))
    }

    /// The vertices this view contributes to a gluing: every interior
    /// vertex, then one boundary vertex per degree-2 primitive position.
    /// Restartable; derived purely from immutable data plus the rotation.
    pub fn vertices(self) -> impl Iterator<Item = Vertex> + 'a {
        let interior = (0..self.dwt.pd.interior_vertices.len()).map(|i| Vertex::Interior(IvId(i)));
        let boundary = self
            .dwt
            .pd
            .deg2
            .iter()
            .map(move |&e| Vertex::Boundary(self.boundary_index(e, 0)));
        interior.chain(boundary)
    }

    /// Neighbors of `v` inside this disk. `Half` entries are open strand
    /// endpoints, matched against the other disk during gluing.
    ///
    /// # Panics
    ///
    /// Panics when `v` is a `Half` vertex or a boundary vertex that is not a
    /// degree-2 position of this view.
    pub fn neighbors(&self, v: Vertex) -> Vec<Vertex> {
        match v {
            Vertex::Interior(iv) => self.interior_neighbors(iv),
            Vertex::Boundary(i) => self.boundary_neighbors(i),
            Vertex::Half(i) => panic!("open strand endpoint at {i} has no neighbors"),
        }
    }

    fn interior_neighbors(&self, v: IvId) -> Vec<Vertex> {
        let pd = self.dwt.pd;
        let mut out = Vec::new();
        for &(a, b) in &pd.interior_edges {
            if a == v {
                out.push(Vertex::Interior(b));
            } else if b == v {
                out.push(Vertex::Interior(a));
            }
        }
        for (e, inw) in pd.inwards.iter().enumerate() {
            if *inw == Some(v) {
                out.push(Vertex::Half(self.boundary_index(e, 0)));
            }
        }
        out
    }

    /// The degree-2 boundary vertex at `i` neighbors its own strand endpoint
    /// plus the two cyclically adjacent degree-2 vertices; when it is the
    /// only one, the boundary circle closes into a loop on it.
    fn boundary_neighbors(&self, i: usize) -> Vec<Vertex> {
        let pd = self.dwt.pd;
        let (e, j) = self.bcp(i);
        assert_eq!(j, 0, "boundary vertex at mid-strand position {i}");
        let k = pd
            .deg2
            .iter()
            .position(|&d| d == e)
            .unwrap_or_else(|| panic!("position {i} is not a degree-2 vertex"));

        let mut out = vec![Vertex::Half(i)];
        let n = pd.deg2.len();
        if n == 1 {
            out.push(Vertex::Boundary(i));
        } else {
            let prev = pd.deg2[(k + n - 1) % n];
            let next = pd.deg2[(k + 1) % n];
            out.push(Vertex::Boundary(self.boundary_index(prev, 0)));
            out.push(Vertex::Boundary(self.boundary_index(next, 0)));
        }
        out
    }
}
