//! Call target descriptors (types, constructors, methods).

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

/// Name of the identity-comparison method.
pub const IDENTITY_METHOD: &str = "equals";

/// Name of the universal object type.
pub const OBJECT_TYPE: &str = "Object";

/// Reference to a declared type, by name.
///
/// Names may be qualified with `.` or `::`; the simple name is the last
/// segment. Equality is on the full name as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "String")]
pub struct TypeRef {
    name: Arc<str>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self { name: Arc::from(name.trim()) }
    }

    /// The universal object type.
    pub fn object() -> Self {
        Self::new(OBJECT_TYPE)
    }

    /// Name as declared (possibly qualified).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last path segment of the name.
    pub fn simple_name(&self) -> &str {
        let s: &str = &self.name;
        let after_colons = s.rsplit("::").next().unwrap_or(s);
        after_colons.rsplit('.').next().unwrap_or(after_colons)
    }

    /// Only the unqualified `Object` is universal; `geo.Object` is a user type.
    pub fn is_object(&self) -> bool {
        self.name() == OBJECT_TYPE
    }
}

impl From<String> for TypeRef {
    fn from(s: String) -> Self {
        TypeRef::new(s)
    }
}

impl From<&str> for TypeRef {
    fn from(s: &str) -> Self {
        TypeRef::new(s)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Constructor or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Constructor,
    Method,
}

/// One constructor or method being checked. Immutable once built.
///
/// Constructors carry the declaring type's simple name as their name, so a
/// type-scope exemption naming the type waives its constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallTarget {
    declaring: TypeRef,
    kind: TargetKind,
    name: String,
    params: Vec<TypeRef>,
}

impl CallTarget {
    pub fn constructor(declaring: impl Into<TypeRef>, params: Vec<TypeRef>) -> Self {
        let declaring = declaring.into();
        let name = declaring.simple_name().to_string();
        Self {
            declaring,
            kind: TargetKind::Constructor,
            name,
            params,
        }
    }

    pub fn method(
        declaring: impl Into<TypeRef>,
        name: impl Into<String>,
        params: Vec<TypeRef>,
    ) -> Self {
        Self {
            declaring: declaring.into(),
            kind: TargetKind::Method,
            name: name.into(),
            params,
        }
    }

    pub fn declaring(&self) -> &TypeRef {
        &self.declaring
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    /// Simple member name (the type's simple name for constructors).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[TypeRef] {
        &self.params
    }

    pub fn is_constructor(&self) -> bool {
        self.kind == TargetKind::Constructor
    }

    /// `equals` taking exactly one universal-object parameter.
    pub fn is_identity_comparison(&self) -> bool {
        self.kind == TargetKind::Method
            && self.name == IDENTITY_METHOD
            && self.params.len() == 1
            && self.params.first().is_some_and(TypeRef::is_object)
    }
}

impl fmt::Display for CallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.declaring, self.name)?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(p.simple_name())?;
        }
        f.write_str(")")
    }
}
