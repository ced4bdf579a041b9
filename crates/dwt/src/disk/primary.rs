//! Primary disk templates and their on-disk record format.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Interior vertex id: index into the owning disk's sorted label list, so id
/// order equals label order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IvId(pub usize);

/// One of the nine primitive quadrangulated disk templates.
///
/// Immutable after loading. `sigma` pairs each boundary position with the
/// position where a transversal entering there exits; it is an involution
/// without fixed points, so the boundary length is even.
#[derive(Clone, Debug)]
pub struct PrimaryDisk {
    pub name: String,
    /// Boundary pairing: `sigma[sigma[i]] == i` and `sigma[i] != i`.
    pub sigma: Vec<usize>,
    /// Sorted interior vertex labels; `IvId(i)` names `interior_vertices[i]`.
    pub interior_vertices: Vec<String>,
    /// Unordered interior edges, endpoints ordered `a < b`.
    pub interior_edges: Vec<(IvId, IvId)>,
    /// Interior vertex attached at each boundary position, if any.
    pub inwards: Vec<Option<IvId>>,
    /// Boundary positions with no interior attachment (degree-2 vertices).
    pub deg2: Vec<usize>,
}

impl PrimaryDisk {
    /// Boundary length of the template.
    pub fn size(&self) -> usize {
        self.sigma.len()
    }

    pub fn label(&self, v: IvId) -> &str {
        &self.interior_vertices[v.0]
    }
}

/// Errors produced while loading the disk record file.
#[derive(Debug, Error)]
pub enum DiskDataError {
    #[error("reading disk data: {0}")]
    Io(#[from] std::io::Error),
    #[error("disk record on line {line}: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
    #[error("disk {name}: {reason}")]
    Invalid { name: String, reason: String },
}

/// On-disk record, one JSON object per line. Field names are fixed by the
/// upstream data pipeline that produces `disk_data.json`.
#[derive(Debug, Deserialize)]
struct DiskRecord {
    #[serde(rename = "Filename")]
    filename: String,
    #[serde(rename = "EnterExitTrans")]
    sigma: Vec<usize>,
    #[serde(rename = "InteriorVertices")]
    interior_vertices: Vec<String>,
    #[serde(rename = "InteriorEdges")]
    interior_edges: Vec<(String, String)>,
    #[serde(rename = "BoundaryInteriorEdge")]
    inwards: Vec<String>,
}

fn invalid(name: &str, reason: impl Into<String>) -> DiskDataError {
    DiskDataError::Invalid {
        name: name.to_string(),
        reason: reason.into(),
    }
}

impl PrimaryDisk {
    fn from_record(rec: DiskRecord) -> Result<Self, DiskDataError> {
        let name = rec.filename;
        let size = rec.sigma.len();
        if size == 0 || size % 2 != 0 {
            return Err(invalid(&name, format!("boundary size {size} is not even and positive")));
        }
        for (i, &p) in rec.sigma.iter().enumerate() {
            if p >= size {
                return Err(invalid(&name, format!("sigma[{i}] = {p} out of range")));
            }
            if p == i {
                return Err(invalid(&name, format!("sigma has a fixed point at {i}")));
            }
            if rec.sigma[p] != i {
                return Err(invalid(&name, format!("sigma is not an involution at {i}")));
            }
        }
        if rec.inwards.len() != size {
            return Err(invalid(
                &name,
                format!("{} boundary attachments for boundary size {size}", rec.inwards.len()),
            ));
        }

        let mut labels = rec.interior_vertices;
        labels.sort();
        if labels.windows(2).any(|w| w[0] == w[1]) {
            return Err(invalid(&name, "duplicate interior vertex label"));
        }
        let find = |label: &str| labels.binary_search_by(|l| l.as_str().cmp(label)).ok().map(IvId);

        let inwards = rec
            .inwards
            .iter()
            .map(|label| {
                if label.is_empty() {
                    Ok(None)
                } else {
                    find(label)
                        .map(Some)
                        .ok_or_else(|| invalid(&name, format!("unknown boundary attachment {label:?}")))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut interior_edges = Vec::with_capacity(rec.interior_edges.len());
        for (a, b) in &rec.interior_edges {
            let a = find(a).ok_or_else(|| invalid(&name, format!("unknown interior vertex {a:?}")))?;
            let b = find(b).ok_or_else(|| invalid(&name, format!("unknown interior vertex {b:?}")))?;
            if a == b {
                return Err(invalid(&name, format!("interior edge with equal endpoints {:?}", labels[a.0])));
            }
            interior_edges.push(if a < b { (a, b) } else { (b, a) });
        }

        let deg2 = inwards
            .iter()
            .enumerate()
            .filter(|(_, inw)| inw.is_none())
            .map(|(i, _)| i)
            .collect();

        Ok(PrimaryDisk {
            name,
            sigma: rec.sigma,
            interior_vertices: labels,
            interior_edges,
            inwards,
            deg2,
        })
    }
}

/// Load and validate all primary disks from a JSON-lines file. The result is
/// sorted by name so enumeration order is stable.
pub fn load_primary_disks(path: impl AsRef<Path>) -> Result<Vec<PrimaryDisk>, DiskDataError> {
    parse_primary_disks(&fs::read_to_string(path)?)
}

/// Parse primary disks from in-memory JSON-lines text; blank lines are
/// skipped.
pub fn parse_primary_disks(text: &str) -> Result<Vec<PrimaryDisk>, DiskDataError> {
    let mut disks = Vec::new();
    for (k, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let rec: DiskRecord =
            serde_json::from_str(line).map_err(|source| DiskDataError::Json { line: k + 1, source })?;
        disks.push(PrimaryDisk::from_record(rec)?);
    }
    disks.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(disks)
}
