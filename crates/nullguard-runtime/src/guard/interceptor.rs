use std::sync::Arc;

use tracing::warn;

use nullguard_core::error::Result;
use nullguard_core::policy::{CallTarget, PolicyModel};
use nullguard_core::resolve::{Presence, Resolver, Verdict};

/// Hook run before the real body of an intercepted call.
pub trait Interceptor: Send + Sync {
    /// `Err` aborts the call; the body must not run.
    fn before(&self, target: &CallTarget, args: &[&dyn Presence]) -> Result<()>;
}

/// Null-enforcing interceptor.
#[derive(Clone)]
pub struct Guard {
    model: Arc<dyn PolicyModel>,
    resolver: Resolver,
}

impl Guard {
    pub fn new(model: Arc<dyn PolicyModel>, resolver: Resolver) -> Self {
        Self { model, resolver }
    }

    /// Resolve and raise a rejection as an error.
    pub fn check<A: Presence>(&self, target: &CallTarget, args: &[A]) -> Result<()> {
        match self.resolver.resolve(self.model.as_ref(), target, args) {
            Verdict::Continue => Ok(()),
            Verdict::Fail(rejection) => {
                warn!(
                    call = %target,
                    position = rejection.position,
                    param = %rejection.param_type,
                    kind = ?rejection.kind,
                    "absent argument rejected"
                );
                Err(rejection.into())
            }
        }
    }

    /// Run `body` only if the arguments pass; its result is returned unchanged.
    pub fn invoke<A, R, F>(&self, target: &CallTarget, args: &[A], body: F) -> Result<R>
    where
        A: Presence,
        F: FnOnce() -> R,
    {
        self.check(target, args)?;
        Ok(body())
    }
}

impl Interceptor for Guard {
    fn before(&self, target: &CallTarget, args: &[&dyn Presence]) -> Result<()> {
        self.check(target, args)
    }
}
