use serde::Deserialize;

use super::rules::{ExemptionSet, RuleSet};
use super::target::CallTarget;

/// Unconditional method-scope exemption marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptMarker;

/// Which call targets are enforced when no annotation applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnforcementMode {
    /// Every reachable target is enforced unless exempted.
    #[default]
    DenyUnlessExempt,
    /// Only types carrying a type-scope reject marker are enforced.
    OptIn,
}

/// Layered annotation data for call targets. Pure lookups, no interpretation.
pub trait PolicyModel: Send + Sync {
    fn method_accept(&self, target: &CallTarget) -> Option<AcceptMarker>;
    fn method_reject(&self, target: &CallTarget) -> Option<RuleSet>;
    fn type_accept(&self, target: &CallTarget) -> Option<ExemptionSet>;
    fn type_reject(&self, target: &CallTarget) -> Option<RuleSet>;

    fn enforcement_mode(&self, _target: &CallTarget) -> EnforcementMode {
        EnforcementMode::DenyUnlessExempt
    }
}

/// Statically built policy record for a single call target.
///
/// Lookups ignore the target argument: the record already belongs to one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Policy {
    #[serde(default)]
    pub mode: EnforcementMode,
    #[serde(default)]
    pub method_accept: bool,
    #[serde(default)]
    pub method_reject: Option<RuleSet>,
    #[serde(default)]
    pub type_accept: Option<ExemptionSet>,
    #[serde(default)]
    pub type_reject: Option<RuleSet>,
}

impl Policy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: EnforcementMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn accept_method(mut self) -> Self {
        self.method_accept = true;
        self
    }

    pub fn reject_method(mut self, rules: impl Into<RuleSet>) -> Self {
        self.method_reject = Some(rules.into());
        self
    }

    pub fn accept_type(mut self, exempt: ExemptionSet) -> Self {
        self.type_accept = Some(exempt);
        self
    }

    pub fn reject_type(mut self, rules: impl Into<RuleSet>) -> Self {
        self.type_reject = Some(rules.into());
        self
    }
}

impl PolicyModel for Policy {
    fn method_accept(&self, _target: &CallTarget) -> Option<AcceptMarker> {
        self.method_accept.then_some(AcceptMarker)
    }

    fn method_reject(&self, _target: &CallTarget) -> Option<RuleSet> {
        self.method_reject.clone()
    }

    fn type_accept(&self, _target: &CallTarget) -> Option<ExemptionSet> {
        self.type_accept.clone()
    }

    fn type_reject(&self, _target: &CallTarget) -> Option<RuleSet> {
        self.type_reject.clone()
    }

    fn enforcement_mode(&self, _target: &CallTarget) -> EnforcementMode {
        self.mode
    }
}
