//! Top-level facade crate for nullguard.
//!
//! Re-exports the core resolver and the runtime so users can depend on a single crate.

pub mod core {
    pub use nullguard_core::*;
}

pub mod runtime {
    pub use nullguard_runtime::*;
}

pub use nullguard_core::{NullGuardError, Result};
pub use nullguard_runtime::Runtime;
