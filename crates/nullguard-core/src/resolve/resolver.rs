use std::sync::Arc;

use tracing::debug;

use crate::policy::{CallTarget, EnforcementMode, PolicyModel, RuleSet, TypeRef};

use super::frame::{LineSuffix, PlaceholderSuffix};
use super::presence::{absent_at, Presence};
use super::verdict::{AbsenceKind, Rejection, Verdict};

/// Null-enforcement resolver.
///
/// Stateless apart from the suffix source; cheap to clone and share.
#[derive(Clone)]
pub struct Resolver {
    suffix: Arc<dyn LineSuffix>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(PlaceholderSuffix)
    }
}

impl Resolver {
    pub fn new(suffix: impl LineSuffix + 'static) -> Self {
        Self {
            suffix: Arc::new(suffix),
        }
    }

    /// Decide whether `args` may be passed to `target`.
    ///
    /// Order: identity exemption, mode gate, method accept, method reject,
    /// type exemption, then type rules (or an empty set).
    pub fn resolve<M, A>(&self, model: &M, target: &CallTarget, args: &[A]) -> Verdict
    where
        M: PolicyModel + ?Sized,
        A: Presence,
    {
        if target.is_identity_comparison() {
            return Verdict::Continue;
        }

        let type_reject = model.type_reject(target);
        if model.enforcement_mode(target) == EnforcementMode::OptIn && type_reject.is_none() {
            debug!(call = %target, "type not opted in");
            return Verdict::Continue;
        }

        if model.method_accept(target).is_some() {
            debug!(call = %target, "exempt at method scope");
            return Verdict::Continue;
        }

        if let Some(rules) = model.method_reject(target) {
            return self.enforce(target, &rules, args);
        }

        if model
            .type_accept(target)
            .is_some_and(|exempt| exempt.contains(target.name()))
        {
            debug!(call = %target, "exempt at type scope");
            return Verdict::Continue;
        }

        let rules = type_reject.unwrap_or_default();
        self.enforce(target, &rules, args)
    }

    /// Check every position left to right against one rule set.
    pub fn enforce<A: Presence>(&self, target: &CallTarget, rules: &RuleSet, args: &[A]) -> Verdict {
        for (position, param) in target.params().iter().enumerate() {
            if !absent_at(args, position) {
                continue;
            }

            let (kind, text) = match rules.first_match(param) {
                Some(rule) if rule.ignore => continue,
                Some(rule) => (
                    AbsenceKind::Rule,
                    rule.render_message(param)
                        .unwrap_or_else(|| generic_message(param)),
                ),
                None => (AbsenceKind::Generic, generic_message(param)),
            };

            let message = text + &self.suffix.line_suffix(target);
            return Verdict::Fail(Rejection {
                kind,
                position,
                param_type: param.clone(),
                message,
            });
        }
        Verdict::Continue
    }
}

fn generic_message(param: &TypeRef) -> String {
    format!("Parameter<{}> is not nullable", param.simple_name())
}
