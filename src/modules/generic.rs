use crate::binding::{Binder, Injector, Module, Named, Scope};
use crate::error::Result;
use crate::services::{Service, ServiceImpl};
use std::sync::Arc;

/// Binds `generic` to a fresh `ServiceImpl`
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericModule {
    scope: Scope,
}

impl GenericModule {
    pub fn new(scope: Scope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }
}

impl Module for GenericModule {
    fn configure(&self, binder: &mut Binder) -> Result<()> {
        binder.bind(
            Named::GENERIC,
            self.scope,
            Box::new(|_: &Injector| Ok(Arc::new(ServiceImpl::new()) as Arc<dyn Service>)),
        )
    }
}
