//! Constructor selection by argument types.
//!
//! Picks the first declared constructor whose arity matches and whose every
//! present argument is assignable to the declared parameter type. Absent
//! arguments match any parameter. There is no implicit conversion: a
//! parameter accepts its own type, a declared subtype, or anything when it is
//! the universal object type.
//!
//! Type names carry no built-in meaning, so primitive and boxed spellings
//! (`int` and `Integer`) are unrelated until the declarations say otherwise.
//! Declare the pair in the `hierarchy` section (`Integer: [int]`) to let a
//! boxed argument select a primitive parameter.
//!
//! When absent arguments make the first-match choice ambiguous, use
//! [`OverloadTable::exact`] to name the declared signature directly.

use std::collections::{HashMap, HashSet};

use dashmap::DashMap;

use nullguard_core::error::{NullGuardError, Result};
use nullguard_core::policy::{CallTarget, TypeRef};

use crate::config::PolicyConfig;

/// Declared supertype edges.
#[derive(Debug, Default)]
pub struct TypeHierarchy {
    supers: HashMap<TypeRef, Vec<TypeRef>>,
}

impl TypeHierarchy {
    pub fn from_config(cfg: &PolicyConfig) -> Self {
        let supers = cfg
            .hierarchy
            .iter()
            .map(|(ty, s)| {
                let s = s.iter().map(|n| TypeRef::new(n.as_str())).collect();
                (TypeRef::new(ty.as_str()), s)
            })
            .collect();
        Self { supers }
    }

    /// `arg` can be passed where `param` is declared.
    pub fn is_assignable(&self, param: &TypeRef, arg: &TypeRef) -> bool {
        if param == arg || param.is_object() {
            return true;
        }

        let mut seen = HashSet::new();
        let mut stack = vec![arg];
        while let Some(ty) = stack.pop() {
            if !seen.insert(ty) {
                continue;
            }
            for s in self.supers.get(ty).into_iter().flatten() {
                if s == param {
                    return true;
                }
                stack.push(s);
            }
        }
        false
    }
}

type SelectKey = (TypeRef, Vec<Option<TypeRef>>);

/// Upper bound on remembered selections; lookups past it are still answered.
pub const SELECTION_CACHE_LIMIT: usize = 4096;

/// Declared constructors per type, in declaration order.
pub struct OverloadTable {
    ctors: HashMap<TypeRef, Vec<CallTarget>>,
    hierarchy: TypeHierarchy,
    // Index into `ctors[type]`, per successful runtime signature.
    selected: DashMap<SelectKey, usize>,
}

impl OverloadTable {
    pub fn from_config(cfg: &PolicyConfig) -> Self {
        let ctors = cfg
            .types
            .iter()
            .map(|decl| {
                let targets = decl
                    .constructors
                    .iter()
                    .map(|c| CallTarget::constructor(decl.type_ref(), c.param_refs()))
                    .collect();
                (decl.type_ref(), targets)
            })
            .collect();

        Self {
            ctors,
            hierarchy: TypeHierarchy::from_config(cfg),
            selected: DashMap::new(),
        }
    }

    pub fn hierarchy(&self) -> &TypeHierarchy {
        &self.hierarchy
    }

    /// Constructor for `ty` accepting arguments of `arg_types` (`None` = absent).
    pub fn select(&self, ty: &TypeRef, arg_types: &[Option<TypeRef>]) -> Result<CallTarget> {
        let candidates = self
            .ctors
            .get(ty)
            .ok_or_else(|| NullGuardError::UnknownTarget(format!("type {ty}")))?;

        let key = (ty.clone(), arg_types.to_vec());
        if let Some(idx) = self.selected.get(&key) {
            if let Some(hit) = candidates.get(*idx) {
                return Ok(hit.clone());
            }
        }

        let idx = candidates
            .iter()
            .position(|c| self.accepts(c, arg_types))
            .ok_or_else(|| {
                NullGuardError::NoMatchingConstructor(format!(
                    "{ty} with {} argument(s)",
                    arg_types.len()
                ))
            })?;

        if self.selected.len() < SELECTION_CACHE_LIMIT {
            self.selected.insert(key, idx);
        }
        candidates
            .get(idx)
            .cloned()
            .ok_or_else(|| NullGuardError::Internal("constructor index out of range".into()))
    }

    /// Constructor of `ty` declared with exactly `signature`.
    pub fn exact(&self, ty: &TypeRef, signature: &[TypeRef]) -> Result<CallTarget> {
        let candidates = self
            .ctors
            .get(ty)
            .ok_or_else(|| NullGuardError::UnknownTarget(format!("type {ty}")))?;

        candidates
            .iter()
            .find(|c| c.params() == signature)
            .cloned()
            .ok_or_else(|| {
                let names: Vec<&str> = signature.iter().map(TypeRef::name).collect();
                NullGuardError::NoMatchingConstructor(format!("{ty}({})", names.join(", ")))
            })
    }

    pub fn cached_selections(&self) -> usize {
        self.selected.len()
    }

    fn accepts(&self, ctor: &CallTarget, arg_types: &[Option<TypeRef>]) -> bool {
        ctor.params().len() == arg_types.len()
            && ctor
                .params()
                .iter()
                .zip(arg_types)
                .all(|(param, arg)| match arg {
                    None => true,
                    Some(arg) => self.hierarchy.is_assignable(param, arg),
                })
    }
}
