//! Instances whose method calls go through an interceptor.

use std::sync::Arc;

use nullguard_core::error::Result;
use nullguard_core::policy::CallTarget;
use nullguard_core::resolve::Presence;

use super::interceptor::Interceptor;

/// Wraps a value so that every call made through it is checked first.
pub struct Guarded<T> {
    inner: T,
    interceptor: Arc<dyn Interceptor>,
}

impl<T> Guarded<T> {
    pub fn new(inner: T, interceptor: Arc<dyn Interceptor>) -> Self {
        Self { inner, interceptor }
    }

    pub fn call<R, F>(&self, target: &CallTarget, args: &[&dyn Presence], f: F) -> Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.interceptor.before(target, args)?;
        Ok(f(&self.inner))
    }

    pub fn call_mut<R, F>(&mut self, target: &CallTarget, args: &[&dyn Presence], f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.interceptor.before(target, args)?;
        Ok(f(&mut self.inner))
    }

    /// Unchecked access (private members are never intercepted).
    pub fn get(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}
