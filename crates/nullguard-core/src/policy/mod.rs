//! Policy model: call targets and the annotation layers attached to them.
//!
//! Four independently optional layers exist per target:
//! - method-scope accept (unconditional exemption of one member)
//! - method-scope reject (rule set replacing the type's)
//! - type-scope accept (member names waived)
//! - type-scope reject (the type's default rule set)
//!
//! Nothing here interprets the layers; see `crate::resolve`.

pub mod model;
pub mod rules;
pub mod target;

pub use model::{AcceptMarker, EnforcementMode, Policy, PolicyModel};
pub use rules::{ArgumentRule, ExemptionSet, RuleSet, TYPE_PLACEHOLDER};
pub use target::{CallTarget, TargetKind, TypeRef, IDENTITY_METHOD, OBJECT_TYPE};
