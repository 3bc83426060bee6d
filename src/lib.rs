//! sumfact — addition-fact CLI (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod arith;
pub mod constants;
pub mod message;
