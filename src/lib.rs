//! Benchmark and demo host for the rowstep workspace.
//!
//! The library surface lives in the `rowstep` crate; this package only
//! re-exports it so benches and demos share one dependency root.

pub use rowstep::*;
