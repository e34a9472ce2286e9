use canvasgraph::{algorithm::*, graph::*};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use static_init::dynamic;

// interactive-scale defaults; the engine targets human-placed graphs
#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("100".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("300".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, mutation, analysis);
criterion_main!(benches);

fn random_graph(vertex_size: usize, edge_size: usize) -> GraphEngine {
    let mut g = GraphEngine::new();
    for i in 0..vertex_size {
        g.add_vertex(i as f64, 0.0);
    }
    let mut rng = rand::thread_rng();
    for _ in 0..edge_size {
        let a = VertexNo::new(rng.gen::<usize>() % vertex_size + 1);
        let b = VertexNo::new(rng.gen::<usize>() % vertex_size + 1);
        g.add_edge(a, b, rng.gen::<u32>() % 100);
    }
    g
}

fn ring(n: usize) -> GraphEngine {
    let mut g = GraphEngine::new();
    for i in 0..n {
        g.add_vertex(i as f64, 0.0);
    }
    for i in 1..n {
        g.add_edge(VertexNo::new(i), VertexNo::new(i + 1), 0);
    }
    g.add_edge(VertexNo::new(n), VertexNo::new(1), 0);
    g
}

fn mutation(c: &mut Criterion) {
    let vertex_size = *VERTEX_SIZE;
    let edge_size = *EDGE_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    println!("EDGE_SIZE: {}", edge_size);

    c.bench_function("mutation/grow", |b| {
        b.iter(|| black_box(random_graph(vertex_size, edge_size)))
    });

    let full = random_graph(vertex_size, edge_size);
    c.bench_function("mutation/shrink_to_empty", |b| {
        b.iter(|| {
            let mut g = full.clone();
            while g.remove_vertex().is_some() {}
            black_box(g)
        })
    });
}

fn analysis(c: &mut Criterion) {
    let g = random_graph(*VERTEX_SIZE, *EDGE_SIZE);

    c.bench_function("analysis/neighbours", |b| {
        b.iter(|| {
            for v in g.iter_vertices() {
                black_box(g.neighbours(&v));
            }
        })
    });
    c.bench_function("analysis/is_connected", |b| {
        b.iter(|| black_box(g.is_connected()))
    });
    c.bench_function("analysis/prim_mst", |b| {
        b.iter(|| black_box(g.prim_mst()))
    });
    c.bench_function("analysis/eulerian", |b| {
        b.iter(|| black_box(g.has_eulerian_circuit()))
    });

    // cycle enumeration is exponential on dense random graphs; measure it
    // on a ring, where exactly one cycle exists
    let r = ring(*VERTEX_SIZE);
    c.bench_function("analysis/simple_cycles_ring", |b| {
        b.iter(|| black_box(r.simple_cycles()))
    });
}
