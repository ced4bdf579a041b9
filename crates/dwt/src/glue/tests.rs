//! Tests for the gluing algorithms, including the hand-computed golden case
//! of the two smallest disks.

use crate::disk::{parse_primary_disks, Dwt, PrimaryDisk, Vertex};
use crate::graph::{Graph, GraphBag};

use super::*;

fn quad() -> PrimaryDisk {
    parse_primary_disks(
        r#"{"Filename":"quad","EnterExitTrans":[1,0,3,2],"InteriorVertices":[],"InteriorEdges":[],"BoundaryInteriorEdge":["","","",""]}"#,
    )
    .expect("quad record parses")
    .remove(0)
}

fn pillow() -> PrimaryDisk {
    parse_primary_disks(
        r#"{"Filename":"pillow","EnterExitTrans":[1,0,3,2],"InteriorVertices":["A","B"],"InteriorEdges":[["A","B"]],"BoundaryInteriorEdge":["A","","B",""]}"#,
    )
    .expect("pillow record parses")
    .remove(0)
}

fn solid() -> PrimaryDisk {
    parse_primary_disks(
        r#"{"Filename":"solid","EnterExitTrans":[1,0,3,2],"InteriorVertices":["A","B"],"InteriorEdges":[["A","B"]],"BoundaryInteriorEdge":["A","A","B","B"]}"#,
    )
    .expect("solid record parses")
    .remove(0)
}

/// Open strand endpoints must never survive into a finished graph.
fn assert_no_half(g: &Graph<Sided>) {
    assert!(
        g.vertices().iter().all(|s| !matches!(s.vertex, Vertex::Half(_))),
        "unconsumed strand endpoint in glued graph"
    );
}

fn degrees(g: &Graph<Sided>) -> Vec<u32> {
    g.adj_mat_sorted().iter().map(|row| row.iter().sum()).collect()
}

#[test]
fn connecting_the_two_smallest_disks_yields_the_cube() {
    let pd = quad();
    let d1 = Dwt::new(&pd, &[0, 0]);
    let d2 = Dwt::new(&pd, &[0, 0]);
    let g = connect(&d1, &d2, 0);

    assert_no_half(&g);
    assert_eq!(g.vertices().len(), 8);
    assert_eq!(g.edge_count(), 12);
    assert!(degrees(&g).iter().all(|&d| d == 3));

    // Two 4-cycles joined by four rungs: the cube graph.
    let mut cube: Graph<u8> = Graph::new();
    for k in 0..4u8 {
        cube.add_edge(k, (k + 1) % 4);
        cube.add_edge(4 + k, 4 + (k + 1) % 4);
        cube.add_edge(k, 4 + k);
    }
    let mut bag = GraphBag::new();
    bag.insert(&cube);
    assert!(bag.contains(&g));
}

#[test]
fn connect_is_indifferent_to_aliased_inputs() {
    let pd = quad();
    let d = Dwt::new(&pd, &[1, 1]);
    let clone = d.clone();
    let aliased = connect(&d, &d, 1);
    let separate = connect(&d, &clone, 1);
    assert_eq!(aliased.adj_mat_sorted(), separate.adj_mat_sorted());
}

#[test]
fn connect_with_transversals_stays_cubic() {
    let pd = quad();
    let d1 = Dwt::new(&pd, &[1, 1]);
    let d2 = Dwt::new(&pd, &[1, 1]);
    for twist in 0..d1.circum() {
        let g = connect(&d1, &d2, twist);
        assert_no_half(&g);
        assert_eq!(g.vertices().len(), 8, "twist {twist}");
        assert_eq!(g.edge_count(), 12, "twist {twist}");
        assert!(degrees(&g).iter().all(|&d| d == 3), "twist {twist}");
    }
}

#[test]
fn connect_keeps_interior_structure_per_side() {
    let pd = pillow();
    let d1 = Dwt::new(&pd, &[0, 0]);
    let d2 = Dwt::new(&pd, &[0, 0]);
    let g = connect(&d1, &d2, 0);

    assert_no_half(&g);
    // Per side: two interiors, two boundary vertices, the interior edge and
    // a doubled boundary arc; plus one cross edge per strand position.
    assert_eq!(g.vertices().len(), 8);
    assert_eq!(g.edge_count(), 10);
    let vs = g.vertices();
    let (one, two): (Vec<&_>, Vec<&_>) = vs.iter().partition(|s| s.side == Side::One);
    assert_eq!(one.len(), 4);
    assert_eq!(two.len(), 4);
}

#[test]
#[should_panic(expected = "circumferences")]
fn gluing_mismatched_circumferences_is_fatal() {
    let pd = quad();
    let d1 = Dwt::new(&pd, &[0, 0]);
    let d2 = Dwt::new(&pd, &[1, 1]);
    let _ = connect(&d1, &d2, 0);
}

#[test]
fn search_reports_steps_and_terminal_position() {
    let pd = pillow();
    let d1 = Dwt::new(&pd, &[0, 0]);
    let d2 = Dwt::new(&pd, &[0, 0]);
    // Entering the other disk at position 0 lands on its attached vertex
    // immediately: one step, same position.
    assert_eq!(search(d1.twist(0), d2.twist(0), 0), (1, 0));

    // With a transversal in the way the strand crosses back once before it
    // lands on the second disk's other attached vertex.
    let d3 = Dwt::new(&pd, &[1, 0]);
    let d4 = Dwt::new(&pd, &[1, 0]);
    assert_eq!(search(d3.twist(0), d4.twist(1), 2), (2, 4));
}

#[test]
#[should_panic(expected = "never reached a vertex")]
fn cyclic_strand_trips_the_step_bound() {
    let pd = quad();
    let d = Dwt::new(&pd, &[1, 1]);
    // Position 1 is mid-strand on both disks under twist 0; following it
    // ping-pongs between the two forever.
    let _ = search(d.twist(0), d.twist(0), 1);
}

#[test]
fn compatible_fails_exactly_on_shared_deg2_positions() {
    let pd = quad();
    let d1 = Dwt::new(&pd, &[0, 0]);
    let d2 = Dwt::new(&pd, &[0, 0]);
    // Every position is degree 2 on both sides, whatever the twist.
    for twist in 0..4 {
        assert!(!compatible(&d1, &d2, twist));
        assert!(fuse(&d1, &d2, twist).is_none());
    }

    let pd = pillow();
    let d1 = Dwt::new(&pd, &[0, 0]);
    let d2 = Dwt::new(&pd, &[0, 0]);
    // Degree-2 positions sit at 1 and 3 on both sides: clash on even
    // twists, interleave on odd ones.
    for twist in 0..4 {
        assert_eq!(compatible(&d1, &d2, twist), twist % 2 == 1);
        assert_eq!(fuse(&d1, &d2, twist).is_some(), twist % 2 == 1);
    }
}

#[test]
fn fuse_builds_one_shared_rim_cycle() {
    let pd = quad();
    let d1 = Dwt::new(&pd, &[1, 1]);
    let d2 = Dwt::new(&pd, &[1, 1]);
    // Degree-2 positions: {0,2,4,6} on side one, {1,3,5,7} on side two.
    let g = fuse(&d1, &d2, 1).expect("interleaved rims are compatible");

    assert_no_half(&g);
    assert_eq!(g.vertices().len(), 8);
    assert!(g.vertices().iter().all(|s| s.side == Side::Rim));
    // Eight rim-cycle edges plus four strand chords, all vertices cubic.
    assert_eq!(g.edge_count(), 12);
    assert!(degrees(&g).iter().all(|&d| d == 3));
}

#[test]
fn fuse_without_boundary_vertices_has_no_rim() {
    let pd = solid();
    let d1 = Dwt::new(&pd, &[0, 0]);
    let d2 = Dwt::new(&pd, &[0, 0]);
    let g = fuse(&d1, &d2, 0).expect("no degree-2 positions at all");

    assert_no_half(&g);
    let vs = g.vertices();
    assert_eq!(vs.len(), 4);
    assert!(vs.iter().all(|s| matches!(s.vertex, Vertex::Interior(_))));
    assert_eq!(g.edge_count(), 6);

    // Doubly attached interiors end up joined by parallel cross edges.
    let a1 = vs.iter().find(|s| s.side == Side::One).copied().expect("side one vertex");
    let a2 = Sided::new(a1.vertex, Side::Two);
    assert_eq!(g.multiplicity(&a1, &a2), 2);
}

#[test]
fn fuse_retags_boundary_strand_ends_to_the_rim() {
    let pd = pillow();
    let d1 = Dwt::new(&pd, &[0, 0]);
    let d2 = Dwt::new(&pd, &[0, 0]);
    let g = fuse(&d1, &d2, 1).expect("odd twist interleaves the rims");

    assert_no_half(&g);
    for s in g.vertices() {
        match s.vertex {
            Vertex::Boundary(_) => assert_eq!(s.side, Side::Rim),
            Vertex::Interior(_) => assert_ne!(s.side, Side::Rim),
            Vertex::Half(_) => unreachable!(),
        }
    }
}
