//! Benchmarks for the ray tracing kernel.
//!
//! Run with: `cargo bench -p rtk-bench`
