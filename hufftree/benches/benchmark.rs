extern crate criterion;

use self::criterion::*;
use hist::count_simple;
use hufftree::build_tree;
use hufftree::tree_to_table;

const COMPRESSION1K: &'static [u8] = include_bytes!("../../test_data/compression_1k.txt");

fn tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    let input_bytes = COMPRESSION1K.len() as u64;
    group.throughput(Throughput::Bytes(input_bytes));
    group.bench_with_input(
        BenchmarkId::new("build_tree", input_bytes),
        &COMPRESSION1K,
        |b, i| {
            let counts = count_simple(i);
            b.iter(|| build_tree(&counts).unwrap());
        },
    );
    group.bench_with_input(
        BenchmarkId::new("tree_to_table", input_bytes),
        &COMPRESSION1K,
        |b, i| {
            let counts = count_simple(i);
            let tree = build_tree(&counts).unwrap();
            b.iter(|| tree_to_table(&tree));
        },
    );
    group.finish();
}

criterion_group!(benches, tree);
criterion_main!(benches);
