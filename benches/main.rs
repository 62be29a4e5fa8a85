use criterion::criterion_main;


// Main entry point for running the benchmarks
criterion_main!(bench_concave::benches, bench_rtree::benches);
