use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use nullguard_core::error::{NullGuardError, Result};
use nullguard_core::policy::{CallTarget, EnforcementMode, ExemptionSet, RuleSet, TypeRef};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    pub version: u32,

    #[serde(default)]
    pub mode: EnforcementMode,

    /// Declared supertypes per type name, used for constructor selection.
    #[serde(default)]
    pub hierarchy: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NullGuardError::UnsupportedVersion);
        }
        if self.types.is_empty() {
            return Err(NullGuardError::BadConfig("types must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for t in &self.types {
            t.validate()?;
            if !seen.insert(t.name.trim()) {
                return Err(NullGuardError::BadConfig(format!(
                    "type declared twice: {}",
                    t.name
                )));
            }
        }

        for (ty, supers) in &self.hierarchy {
            if ty.trim().is_empty() || supers.iter().any(|s| s.trim().is_empty()) {
                return Err(NullGuardError::BadConfig(
                    "hierarchy entries must name non-empty types".into(),
                ));
            }
        }
        Ok(())
    }
}

/// One declared type with its type-scope markers and annotated members.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    pub name: String,

    /// Source file shown in diagnostic frames.
    #[serde(default)]
    pub file: Option<String>,

    /// Type-scope accept marker: member names waived.
    #[serde(default)]
    pub accept: Option<ExemptionSet>,

    /// Type-scope reject marker: the type's default rule set.
    #[serde(default)]
    pub reject: Option<RuleSet>,

    #[serde(default)]
    pub constructors: Vec<MemberDecl>,

    #[serde(default)]
    pub methods: Vec<MemberDecl>,
}

impl TypeDecl {
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::new(self.name.as_str())
    }

    /// Constructors then methods, each paired with its call target.
    pub fn members(&self) -> impl Iterator<Item = (CallTarget, &MemberDecl)> {
        let ty = self.type_ref();
        let ctor_ty = ty.clone();
        let ctors = self
            .constructors
            .iter()
            .map(move |m| (CallTarget::constructor(ctor_ty.clone(), m.param_refs()), m));
        let methods = self.methods.iter().map(move |m| {
            let name = m.name.as_deref().unwrap_or_default();
            (CallTarget::method(ty.clone(), name, m.param_refs()), m)
        });
        ctors.chain(methods)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(NullGuardError::BadConfig("type name must not be empty".into()));
        }
        if let Some(rules) = &self.reject {
            validate_rules(&self.name, rules)?;
        }
        if let Some(exempt) = &self.accept {
            if exempt.names().any(|n| n.trim().is_empty()) {
                return Err(NullGuardError::BadConfig(format!(
                    "{}: accept entries must not be empty",
                    self.name
                )));
            }
        }

        for c in &self.constructors {
            if c.name.is_some() {
                return Err(NullGuardError::BadConfig(format!(
                    "{}: constructors take no name",
                    self.name
                )));
            }
        }
        for m in &self.methods {
            if m.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
                return Err(NullGuardError::BadConfig(format!(
                    "{}: method name must not be empty",
                    self.name
                )));
            }
        }

        let mut seen = HashSet::new();
        for (target, m) in self.members() {
            if m.params.iter().any(|p| p.trim().is_empty()) {
                return Err(NullGuardError::BadConfig(format!(
                    "{target}: parameter types must not be empty"
                )));
            }
            if let Some(rules) = &m.reject {
                validate_rules(&self.name, rules)?;
            }
            let label = target.to_string();
            if !seen.insert(target) {
                return Err(NullGuardError::BadConfig(format!("declared twice: {label}")));
            }
        }
        Ok(())
    }
}

fn validate_rules(owner: &str, rules: &RuleSet) -> Result<()> {
    if rules.rules().iter().any(|r| r.target_type.name().is_empty()) {
        return Err(NullGuardError::BadConfig(format!(
            "{owner}: rule type must not be empty"
        )));
    }
    Ok(())
}

/// Constructor or method declaration with its method-scope markers.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberDecl {
    /// Required for methods, absent for constructors.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub params: Vec<String>,

    /// Method-scope accept marker (unconditional exemption).
    #[serde(default)]
    pub accept: bool,

    /// Method-scope reject marker.
    #[serde(default)]
    pub reject: Option<RuleSet>,

    /// Source line shown in diagnostic frames.
    #[serde(default)]
    pub line: Option<u32>,
}

impl MemberDecl {
    pub fn param_refs(&self) -> Vec<TypeRef> {
        self.params.iter().map(|p| TypeRef::new(p.as_str())).collect()
    }
}
