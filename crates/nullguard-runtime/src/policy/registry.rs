use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;

use nullguard_core::error::{NullGuardError, Result};
use nullguard_core::policy::{
    AcceptMarker, CallTarget, EnforcementMode, ExemptionSet, Policy, PolicyModel, RuleSet,
    TypeRef,
};

use crate::config::PolicyConfig;

/// Method-scope markers of one declared member.
#[derive(Debug, Clone)]
struct MemberEntry {
    accept: bool,
    reject: Option<RuleSet>,
}

/// Type-scope markers plus the annotated members of one type.
#[derive(Debug, Default)]
struct TypeEntry {
    accept: Option<ExemptionSet>,
    reject: Option<RuleSet>,
    members: HashMap<CallTarget, MemberEntry>,
}

/// Compiled declarations.
/// Construct once at startup, then share via Arc.
///
/// Undeclared members (and undeclared types) resolve with no method-scope
/// layers, so they fall through to the type scope or to default deny.
pub struct PolicyRegistry {
    mode: EnforcementMode,
    types: HashMap<TypeRef, TypeEntry>,
    // Flattened per-target records of declared types, filled on first lookup.
    cache: DashMap<CallTarget, Arc<Policy>>,
    // Shared by every target of an undeclared type; never cached.
    undeclared: Arc<Policy>,
}

impl PolicyRegistry {
    pub fn compile(cfg: &PolicyConfig) -> Result<Self> {
        let mut types = HashMap::with_capacity(cfg.types.len());
        for decl in &cfg.types {
            let mut entry = TypeEntry {
                accept: decl.accept.clone(),
                reject: decl.reject.clone(),
                members: HashMap::new(),
            };
            for (target, m) in decl.members() {
                let label = target.to_string();
                let prev = entry.members.insert(
                    target,
                    MemberEntry {
                        accept: m.accept,
                        reject: m.reject.clone(),
                    },
                );
                if prev.is_some() {
                    return Err(NullGuardError::BadConfig(format!("declared twice: {label}")));
                }
            }
            if types.insert(decl.type_ref(), entry).is_some() {
                return Err(NullGuardError::BadConfig(format!(
                    "type declared twice: {}",
                    decl.name
                )));
            }
        }

        tracing::info!(types = types.len(), mode = ?cfg.mode, "policy registry compiled");
        Ok(Self {
            mode: cfg.mode,
            types,
            cache: DashMap::new(),
            undeclared: Arc::new(Policy::new().with_mode(cfg.mode)),
        })
    }

    pub fn mode(&self) -> EnforcementMode {
        self.mode
    }

    pub fn is_declared(&self, ty: &TypeRef) -> bool {
        self.types.contains_key(ty)
    }

    /// Policy record for `target`, built on first use.
    ///
    /// Concurrent first lookups may both build; the first insert wins and
    /// the records are identical anyway. Only targets of declared types are
    /// cached, so lookups against arbitrary types cannot grow the cache.
    pub fn policy(&self, target: &CallTarget) -> Arc<Policy> {
        if !self.is_declared(target.declaring()) {
            return Arc::clone(&self.undeclared);
        }
        if let Some(hit) = self.cache.get(target) {
            return Arc::clone(hit.value());
        }
        let built = Arc::new(self.build(target));
        Arc::clone(self.cache.entry(target.clone()).or_insert(built).value())
    }

    pub fn cached_targets(&self) -> usize {
        self.cache.len()
    }

    fn build(&self, target: &CallTarget) -> Policy {
        let mut policy = Policy::new().with_mode(self.mode);
        let Some(entry) = self.types.get(target.declaring()) else {
            return policy;
        };

        policy.type_accept = entry.accept.clone();
        policy.type_reject = entry.reject.clone();
        if let Some(member) = entry.members.get(target) {
            policy.method_accept = member.accept;
            policy.method_reject = member.reject.clone();
        }
        policy
    }
}

impl PolicyModel for PolicyRegistry {
    fn method_accept(&self, target: &CallTarget) -> Option<AcceptMarker> {
        self.policy(target).method_accept(target)
    }

    fn method_reject(&self, target: &CallTarget) -> Option<RuleSet> {
        self.policy(target).method_reject.clone()
    }

    fn type_accept(&self, target: &CallTarget) -> Option<ExemptionSet> {
        self.policy(target).type_accept.clone()
    }

    fn type_reject(&self, target: &CallTarget) -> Option<RuleSet> {
        self.policy(target).type_reject.clone()
    }

    fn enforcement_mode(&self, _target: &CallTarget) -> EnforcementMode {
        self.mode
    }
}
