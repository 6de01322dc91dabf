//! nullguard core: the null-enforcement policy model and resolver.
//!
//! Given a call target, its declared parameter types, the supplied arguments,
//! and the annotation layers attached to the member and its declaring type,
//! the resolver decides per argument whether an absent value is permitted and
//! builds the failure message when it is not.
//!
//! Interception, instance construction, and line-number lookup live outside
//! this crate; it only consumes `(CallTarget, args)` and returns a `Verdict`.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;
pub mod resolve;

/// Shared result type.
pub use error::{ErrorCode, NullGuardError, Result};
pub use policy::{ArgumentRule, CallTarget, ExemptionSet, Policy, PolicyModel, RuleSet, TypeRef};
pub use resolve::{Resolver, Verdict};
