use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sesdiff::engine::{self, diff_lines, diff_slices};
use sesdiff::path::build_path;
use std::fs;
use std::path::Path;

fn gen_data(len: usize, alphabet: u32, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..alphabet)).collect()
}

// Overwrite every `stride`-th element with a value outside the alphabet.
fn mutate(base: &[u32], stride: usize) -> Vec<u32> {
    let mut out = base.to_vec();
    for i in (0..out.len()).step_by(stride.max(1)) {
        out[i] = u32::MAX;
    }
    out
}

fn gen_text(lines: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::new();
    for n in 0..lines {
        let width = rng.random_range(0..60usize);
        out.push_str(&format!("{n:06} {}\n", "x".repeat(width)));
    }
    out
}

fn edit_text(text: &str, stride: usize) -> String {
    let mut out = String::with_capacity(text.len());
    for (n, line) in text.lines().enumerate() {
        if n % stride == 0 {
            out.push_str("changed\n");
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn write_distance_snapshot() {
    let mut csv = String::from("len,stride,edit_distance,path_nodes\n");
    for (len, stride) in [(10_000usize, 1000usize), (10_000, 100), (50_000, 5000)] {
        let old = gen_data(len, 1024, 7);
        let new = mutate(&old, stride);
        let path = build_path(&old, &new).unwrap();
        csv.push_str(&format!(
            "{len},{stride},{},{}\n",
            path.edit_distance(),
            path.len()
        ));
    }
    let out_dir = Path::new("target/criterion/custom_reports");
    let _ = fs::create_dir_all(out_dir);
    let _ = fs::write(out_dir.join("distance_snapshot.csv"), csv);
}

fn bench_near_identical(c: &mut Criterion) {
    let mut g = c.benchmark_group("near_identical_vs_len");
    for len in [1_000usize, 10_000, 100_000] {
        let old = gen_data(len, 1024, 1);
        let new = mutate(&old, len / 8);
        g.throughput(Throughput::Elements(len as u64));
        g.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                let ops = diff_slices(black_box(&old), black_box(&new)).unwrap();
                black_box(ops);
            });
        });
    }
    g.finish();
}

fn bench_distance_scaling(c: &mut Criterion) {
    write_distance_snapshot();
    let mut g = c.benchmark_group("time_vs_edit_distance");
    let old = gen_data(10_000, 1024, 2);
    for stride in [2_000usize, 500, 100] {
        let new = mutate(&old, stride);
        g.bench_with_input(BenchmarkId::from_parameter(stride), &stride, |b, _| {
            b.iter(|| {
                let path = build_path(black_box(&old), black_box(&new)).unwrap();
                black_box(path.edit_distance());
            });
        });
    }
    g.finish();
}

fn bench_small_alphabet(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_small_alphabet");
    for len in [100usize, 500, 1_000] {
        let old = gen_data(len, 4, 3);
        let new = gen_data(len, 4, 4);
        g.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                let ops = diff_slices(black_box(&old), black_box(&new)).unwrap();
                black_box(ops);
            });
        });
    }
    g.finish();
}

fn bench_text_lines(c: &mut Criterion) {
    let mut g = c.benchmark_group("text_lines");
    for lines in [1_000usize, 10_000] {
        let old = gen_text(lines, 5);
        let new = edit_text(&old, 97);
        g.throughput(Throughput::Bytes(old.len() as u64));
        g.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
            b.iter(|| {
                let d = diff_lines(black_box(&old), black_box(&new)).unwrap();
                black_box(d.render_unified("a", "b", 3));
            });
        });
    }
    g.finish();
}

fn bench_batch(c: &mut Criterion) {
    let pairs: Vec<(Vec<u32>, Vec<u32>)> = (0..32)
        .map(|seed| {
            let old = gen_data(2_000, 256, seed);
            let new = mutate(&old, 250);
            (old, new)
        })
        .collect();
    let borrowed: Vec<(&[u32], &[u32])> = pairs
        .iter()
        .map(|(a, b)| (a.as_slice(), b.as_slice()))
        .collect();

    c.bench_function("batch_32_pairs", |b| {
        b.iter(|| {
            let out = engine::diff_batch(black_box(&borrowed));
            black_box(out);
        });
    });
}

criterion_group!(
    benches,
    bench_near_identical,
    bench_distance_scaling,
    bench_small_alphabet,
    bench_text_lines,
    bench_batch
);
criterion_main!(benches);
