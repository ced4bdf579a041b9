use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

use dwt::composition::non_negative;
use dwt::disk::{load_primary_disks, Dwt, PrimaryDisk};
use dwt::glue::{connect, fuse};
use dwt::graph::GraphBag;
use dwt::targets::load_targets;

#[derive(Parser)]
#[command(name = "dwt")]
#[command(about = "Exhaustive search over graphs glued from disks with transversals")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate glued graphs, stopping on a target match or the discovery limit
    Search {
        /// JSON-lines file with the primary disk records
        #[arg(long, default_value = "disk_data.json")]
        disks: String,
        /// Target-graph file (blocks of twelve edge lines)
        #[arg(long, default_value = "targets.txt")]
        targets: String,
        /// Smallest boundary size to examine (even)
        #[arg(long, default_value_t = 4)]
        min_size: usize,
        /// Largest boundary size to examine (even, inclusive)
        #[arg(long, default_value_t = 16)]
        max_size: usize,
        /// Stop after this many non-isomorphic graphs
        #[arg(long, default_value_t = 137)]
        limit: usize,
    },
    /// Print a JSON summary line per primary disk
    Disks {
        #[arg(long, default_value = "disk_data.json")]
        disks: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Search { disks, targets, min_size, max_size, limit } => {
            search(&disks, &targets, min_size, max_size, limit)
        }
        Action::Disks { disks } => list_disks(&disks),
    }
}

/// All disks with transversals whose expanded boundary has `size` positions:
/// every primary disk that fits, with every composition of the remaining
/// positions into transversal counts, in a fixed order.
fn dwts_with_circum(disks: &[PrimaryDisk], size: usize) -> Vec<Dwt<'_>> {
    let mut out = Vec::new();
    for pd in disks {
        if pd.size() > size {
            continue;
        }
        for counts in non_negative((size - pd.size()) / 2, pd.size() / 2) {
            out.push(Dwt::new(pd, &counts));
        }
    }
    out
}

fn search(
    disk_path: &str,
    target_path: &str,
    min_size: usize,
    max_size: usize,
    limit: usize,
) -> Result<()> {
    anyhow::ensure!(
        min_size % 2 == 0 && max_size % 2 == 0 && min_size >= 2,
        "boundary sizes must be even and positive"
    );
    let disks = load_primary_disks(disk_path)?;
    let targets = load_targets(target_path)?;
    tracing::info!(disks = disks.len(), targets = targets.len(), "loaded search inputs");

    let mut known = GraphBag::new();
    let mut cases: u64 = 0;
    for size in (min_size..=max_size).step_by(2) {
        println!("D disk_size = {size} cases examined = {cases}");
        let dwts = dwts_with_circum(&disks, size);
        for d1 in &dwts {
            for d2 in &dwts {
                for twist in 0..size {
                    for mode in ["connect", "fuse"] {
                        let g = match mode {
                            "connect" => Some(connect(d1, d2, twist)),
                            _ => fuse(d1, d2, twist),
                        };
                        cases += 1;
                        let Some(g) = g else { continue };
                        if known.insert(&g) {
                            let record = serde_json::json!({
                                "Id": known.len(),
                                "Matrix": g.adj_mat_sorted(),
                                "Dwt1": d1.description(),
                                "Dwt2": d2.description(),
                                "Twist": twist,
                                "Mode": mode,
                            });
                            println!("G {record}");
                            if targets.contains(&g) {
                                println!("!!!");
                                return Ok(());
                            }
                        }
                        if known.len() == limit {
                            println!("cases examined {cases}");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn list_disks(disk_path: &str) -> Result<()> {
    let disks = load_primary_disks(disk_path)?;
    for pd in &disks {
        let line = serde_json::json!({
            "name": pd.name,
            "size": pd.size(),
            "interior_vertices": pd.interior_vertices.len(),
            "interior_edges": pd.interior_edges.len(),
            "deg2": pd.deg2.len(),
        });
        println!("{line}");
    }
    Ok(())
}
