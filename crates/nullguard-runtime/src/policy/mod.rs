//! Policy layer (compiled declarations, diagnostic lines).
//!
//! Compiles declaration config into lookup structures the resolver consumes
//! at call time.

pub mod lines;
pub mod registry;

pub use lines::DeclaredLines;
pub use registry::PolicyRegistry;
