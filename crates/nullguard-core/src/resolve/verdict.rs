use crate::error::{NullGuardError, Result};
use crate::policy::TypeRef;

/// Which branch produced a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsenceKind {
    /// No rule matched the parameter type.
    Generic,
    /// A non-ignoring rule matched the parameter type.
    Rule,
}

/// Details of a failed check: first offending position only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: AbsenceKind,
    pub position: usize,
    pub param_type: TypeRef,
    /// Full message, diagnostic suffix included.
    pub message: String,
}

impl Rejection {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Rejection> for NullGuardError {
    fn from(r: Rejection) -> Self {
        match r.kind {
            AbsenceKind::Generic => NullGuardError::GenericAbsence {
                position: r.position,
                message: r.message,
            },
            AbsenceKind::Rule => NullGuardError::RuleAbsence {
                position: r.position,
                message: r.message,
            },
        }
    }
}

/// Resolver output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Fail(Rejection),
}

impl Verdict {
    pub fn is_continue(&self) -> bool {
        matches!(self, Verdict::Continue)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Continue => None,
            Verdict::Fail(r) => Some(r),
        }
    }

    /// Turn a failure into the error the interception layer raises.
    pub fn into_result(self) -> Result<()> {
        match self {
            Verdict::Continue => Ok(()),
            Verdict::Fail(r) => Err(r.into()),
        }
    }
}
