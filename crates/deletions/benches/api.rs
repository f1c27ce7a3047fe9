use deletions::{deduplicate, enumerate_deletions};
use divan::AllocProfiler;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

// NOTE: Sequences share a prefix, so the benchmarks show how quickly things blow up as monomers are added
const SEQUENCES: [&str; 5] = [
    "AyB",
    "AyBhhV",
    "AyBhhVLLs",
    "AyBhhVLLsCcP",
    "AyBhhVLLsCcPDAy",
];

fn main() {
    divan::main();
}

#[divan::bench(args = SEQUENCES)]
fn enumerate(sequence: &str) -> Vec<String> {
    enumerate_deletions(sequence, ())
}

#[divan::bench(args = SEQUENCES)]
fn enumerate_and_deduplicate(bencher: divan::Bencher, sequence: &str) {
    bencher
        .with_inputs(|| enumerate_deletions(sequence, ()))
        .bench_refs(|products| deduplicate(products.as_slice(), ()));
}
