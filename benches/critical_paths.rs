//! Criterion benchmarks for meta-sprite critical paths
//!
//! Benchmarks the per-frame operations:
//! - Composition: free-form and tile-mode meta-sprite draws
//! - Geometry: grid mirroring
//! - Parser: collection parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use metasprite::chip::RecordingChip;
use metasprite::composition::{draw_collection, DrawRequest};
use metasprite::geometry::mirror_ids;
use metasprite::models::{DrawMode, SpriteCollection};
use metasprite::parser::parse_line;

// =============================================================================
// Test Data Generators
// =============================================================================

/// Build a square meta-sprite of `side` x `side` 8x8 sprites
fn make_collection(side: i32) -> SpriteCollection {
    let mut collection = SpriteCollection::new("bench").with_sprite_size(8, 8);
    for row in 0..side {
        for col in 0..side {
            collection.add_sprite(row * side + col, col * 8, row * 8, false, false, 0);
        }
    }
    collection
}

/// Generate a collection JSON line with `count` placements
fn make_collection_json(count: usize) -> String {
    let sprites: Vec<String> =
        (0..count).map(|i| format!("{{\"id\": {}, \"x\": {}, \"y\": 0}}", i, i * 8)).collect();
    format!(r#"{{"name": "bench", "sprites": [{}]}}"#, sprites.join(", "))
}

// =============================================================================
// Composition Benchmarks
// =============================================================================

fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");

    for side in [2, 4, 8].iter() {
        let collection = make_collection(*side);
        let mut chip = RecordingChip::new(8, 8, 1024);
        group.throughput(Throughput::Elements((*side * *side) as u64));

        let free_form = DrawRequest::new(10, 10).with_flip(true, false);
        group.bench_with_input(BenchmarkId::new("free_form", side), &collection, |b, collection| {
            b.iter(|| {
                chip.clear();
                draw_collection(&mut chip, black_box(collection), black_box(&free_form))
            })
        });

        let tile = DrawRequest::new(10, 10).with_mode(DrawMode::Tile).with_flip(true, true);
        group.bench_with_input(BenchmarkId::new("tile", side), &collection, |b, collection| {
            b.iter(|| {
                chip.clear();
                draw_collection(&mut chip, black_box(collection), black_box(&tile))
            })
        });
    }

    group.finish();
}

// =============================================================================
// Geometry Benchmarks
// =============================================================================

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    let ids: Vec<i32> = (0..256).collect();
    group.bench_function("mirror_16x16", |b| {
        b.iter(|| mirror_ids(black_box(&ids), 16, 16, true, true))
    });

    group.finish();
}

// =============================================================================
// Parser Benchmarks
// =============================================================================

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let small = make_collection_json(4);
    let large = make_collection_json(64);

    group.bench_function("parse_line_4", |b| b.iter(|| parse_line(black_box(&small), 1)));
    group.bench_function("parse_line_64", |b| b.iter(|| parse_line(black_box(&large), 1)));

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_composition, bench_geometry, bench_parser);

criterion_main!(benches);
