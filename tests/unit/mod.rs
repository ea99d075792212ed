//! Aggregates the scenario, law, and property test modules into a single
//! integration test binary, following the teacher's `tests/unit/mod.rs`
//! aggregation pattern.

mod helpers;
mod invariants_proptest;
mod laws;
mod scenarios;
