//! Criterion benchmarks for the gluing hot path and the graph store.
//! The graph-store insert is the known factorial-cost step; the gluing
//! itself should stay linear in the circumference.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use dwt::disk::{parse_primary_disks, Dwt, PrimaryDisk};
use dwt::glue::{connect, fuse};
use dwt::graph::GraphBag;

const QUAD: &str = r#"{"Filename":"quad","EnterExitTrans":[1,0,3,2],"InteriorVertices":[],"InteriorEdges":[],"BoundaryInteriorEdge":["","","",""]}"#;

fn quad() -> PrimaryDisk {
    parse_primary_disks(QUAD).expect("quad record parses").remove(0)
}

fn bench_glue(c: &mut Criterion) {
    let pd = quad();
    let d1 = Dwt::new(&pd, &[2, 2]);
    let d2 = Dwt::new(&pd, &[2, 2]);

    let mut group = c.benchmark_group("glue");
    group.bench_function("connect_circum12", |b| b.iter(|| connect(&d1, &d2, 1)));
    group.bench_function("fuse_circum12", |b| b.iter(|| fuse(&d1, &d2, 1)));
    group.finish();
}

fn bench_bag(c: &mut Criterion) {
    let pd = quad();
    let d1 = Dwt::new(&pd, &[0, 0]);
    let d2 = Dwt::new(&pd, &[0, 0]);
    let g = connect(&d1, &d2, 0);

    let mut group = c.benchmark_group("graph_bag");
    group.sample_size(10);
    group.bench_function("insert_8_vertex_graph", |b| {
        b.iter_batched(
            GraphBag::new,
            |mut bag| {
                bag.insert(&g);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_glue, bench_bag);
criterion_main!(benches);
