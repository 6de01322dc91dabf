//! Shared runtime: compiled registry, guard, and constructor table.
//!
//! Built once from declarations; startup errors surface as `Result`.

use std::sync::Arc;

use nullguard_core::error::Result;
use nullguard_core::policy::{PolicyModel, TypeRef};
use nullguard_core::resolve::{Presence, Resolver};

use crate::config::PolicyConfig;
use crate::construct::OverloadTable;
use crate::guard::{Guard, Guarded, Interceptor};
use crate::policy::{DeclaredLines, PolicyRegistry};

#[derive(Clone)]
pub struct Runtime {
    inner: Arc<RuntimeInner>,
}

struct RuntimeInner {
    registry: Arc<PolicyRegistry>,
    guard: Arc<Guard>,
    overloads: OverloadTable,
}

impl Runtime {
    pub fn new(cfg: &PolicyConfig) -> Result<Self> {
        let registry = Arc::new(PolicyRegistry::compile(cfg)?);
        let resolver = Resolver::new(DeclaredLines::from_config(cfg));
        let model: Arc<dyn PolicyModel> = registry.clone();
        let guard = Arc::new(Guard::new(model, resolver));
        let overloads = OverloadTable::from_config(cfg);

        Ok(Self {
            inner: Arc::new(RuntimeInner {
                registry,
                guard,
                overloads,
            }),
        })
    }

    pub fn registry(&self) -> &PolicyRegistry {
        &self.inner.registry
    }

    pub fn guard(&self) -> &Guard {
        &self.inner.guard
    }

    pub fn overloads(&self) -> &OverloadTable {
        &self.inner.overloads
    }

    /// Select a constructor, check its arguments, then build and wrap the value.
    ///
    /// `arg_types` carries each argument's runtime type, `None` when absent.
    /// `make` runs only when the check passes.
    pub fn construct<T, F>(&self, ty: &TypeRef, arg_types: &[Option<TypeRef>], make: F) -> Result<Guarded<T>>
    where
        F: FnOnce() -> T,
    {
        let ctor = self.inner.overloads.select(ty, arg_types)?;
        let value = self.inner.guard.invoke(&ctor, arg_types, make)?;
        Ok(self.wrap(value))
    }

    /// Like [`construct`](Self::construct), but the constructor is named by
    /// its declared `signature` instead of being inferred from argument types.
    ///
    /// `args` are checked against that constructor's policy; `make` runs only
    /// when they pass.
    pub fn construct_with<T, A, F>(
        &self,
        ty: &TypeRef,
        signature: &[TypeRef],
        args: &[A],
        make: F,
    ) -> Result<Guarded<T>>
    where
        A: Presence,
        F: FnOnce() -> T,
    {
        let ctor = self.inner.overloads.exact(ty, signature)?;
        let value = self.inner.guard.invoke(&ctor, args, make)?;
        Ok(self.wrap(value))
    }

    fn wrap<T>(&self, value: T) -> Guarded<T> {
        let interceptor: Arc<dyn Interceptor> = self.inner.guard.clone();
        Guarded::new(value, interceptor)
    }
}
