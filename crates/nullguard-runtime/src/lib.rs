//! nullguard runtime library entry.
//!
//! Wires declaration loading, the compiled policy registry, the call guard,
//! and constructor selection around the core resolver. Consumed by the CLI
//! binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod construct;
pub mod guard;
pub mod policy;
pub mod runtime;

pub use runtime::Runtime;
