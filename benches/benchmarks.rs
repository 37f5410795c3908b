//! Performance benchmarks for dirjson

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dirjson::test_utils::TestDir;
use dirjson::{build_tree, summarize, to_json_string};

/// Create a tree `depth` levels deep with `fanout` directories and files per level.
fn create_test_tree(depth: usize, fanout: usize) -> TestDir {
    let dir = TestDir::new();
    let mut frontier = vec![String::new()];

    for _ in 0..depth {
        let mut next = Vec::new();
        for parent in &frontier {
            for i in 0..fanout {
                let prefix = if parent.is_empty() {
                    String::new()
                } else {
                    format!("{}/", parent)
                };
                dir.add_file(&format!("{}file_{}.txt", prefix, i), "content");
                dir.add_file(&format!("{}.hidden_{}", prefix, i), "skipped");
                let sub = format!("{}Dir_{}", prefix, i);
                dir.add_dir(&sub);
                next.push(sub);
            }
        }
        frontier = next;
    }

    dir
}

fn bench_build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");

    for (depth, fanout) in [(2, 10), (3, 6), (4, 4)] {
        let dir = create_test_tree(depth, fanout);
        group.bench_function(format!("depth_{}_fanout_{}", depth, fanout), |b| {
            b.iter(|| build_tree(black_box(dir.path())))
        });
    }

    group.finish();
}

fn bench_serialize_and_summarize(c: &mut Criterion) {
    let dir = create_test_tree(3, 8);
    let tree = build_tree(dir.path()).unwrap();

    c.bench_function("to_json_string", |b| {
        b.iter(|| to_json_string(black_box(&tree)))
    });
    c.bench_function("summarize", |b| b.iter(|| summarize(black_box(&tree))));
}

criterion_group!(benches, bench_build_tree, bench_serialize_and_summarize);
criterion_main!(benches);
