//! Interception layer.
//!
//! Re-exports the guard and interceptor trait so callers can depend on this
//! module directly.

pub mod guarded;
pub mod interceptor;

pub use guarded::Guarded;
pub use interceptor::{Guard, Interceptor};
