//! Argument rules, rule sets, and exemption sets.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Deserialize;

use super::target::TypeRef;

/// Placeholder replaced by the parameter's simple type name in rule messages.
pub const TYPE_PLACEHOLDER: &str = "$TYPE";

/// Per-type override inside a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArgumentRule {
    #[serde(rename = "type")]
    pub target_type: TypeRef,
    /// Empty means "use the generic message".
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub ignore: bool,
}

impl ArgumentRule {
    /// Reject absent values of `ty` with the generic message.
    pub fn reject(ty: impl Into<TypeRef>) -> Self {
        Self {
            target_type: ty.into(),
            message: String::new(),
            ignore: false,
        }
    }

    /// Permit absent values of `ty`.
    pub fn ignore(ty: impl Into<TypeRef>) -> Self {
        Self {
            target_type: ty.into(),
            message: String::new(),
            ignore: true,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Rule message with the placeholder substituted, `None` if empty.
    pub fn render_message(&self, param: &TypeRef) -> Option<String> {
        if self.message.is_empty() {
            return None;
        }
        Some(self.message.replace(TYPE_PLACEHOLDER, param.simple_name()))
    }
}

/// Ordered rule set. Empty is valid and rejects every absent argument.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<ArgumentRule>")]
pub struct RuleSet {
    rules: Arc<[ArgumentRule]>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RuleSet {
    pub fn new(rules: Vec<ArgumentRule>) -> Self {
        Self { rules: rules.into() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// First rule targeting exactly `ty`, in declaration order.
    pub fn first_match(&self, ty: &TypeRef) -> Option<&ArgumentRule> {
        self.rules.iter().find(|r| &r.target_type == ty)
    }

    pub fn rules(&self) -> &[ArgumentRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<ArgumentRule>> for RuleSet {
    fn from(rules: Vec<ArgumentRule>) -> Self {
        RuleSet::new(rules)
    }
}

/// Simple method names waived at type scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct ExemptionSet {
    names: Arc<BTreeSet<String>>,
}

impl ExemptionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: Arc::new(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<Vec<String>> for ExemptionSet {
    fn from(names: Vec<String>) -> Self {
        ExemptionSet::new(names)
    }
}
