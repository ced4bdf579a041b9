//! Glue the two smallest disks and print the resulting graph.
//!
//! Purpose
//! - A runnable probe of the whole pipeline on the hand-checkable case: two
//!   transversal-free quadrangles connected at twist 0 form the cube graph.

use dwt::disk::{parse_primary_disks, Dwt};
use dwt::glue::connect;

const QUAD: &str = r#"{"Filename":"quad","EnterExitTrans":[1,0,3,2],"InteriorVertices":[],"InteriorEdges":[],"BoundaryInteriorEdge":["","","",""]}"#;

fn main() {
    let disks = parse_primary_disks(QUAD).expect("quad record parses");
    let d1 = Dwt::new(&disks[0], &[0, 0]);
    let d2 = Dwt::new(&disks[0], &[0, 0]);

    let g = connect(&d1, &d2, 0);
    println!("vertices={} edges={}", g.vertices().len(), g.edge_count());
    for row in g.adj_mat_sorted() {
        println!("{row:?}");
    }
}
