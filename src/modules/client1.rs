use crate::binding::{Binder, Injector, Module, Named, Scope};
use crate::error::Result;

/// Binds `client1` to the `generic` service after `setup_client1`
#[derive(Debug, Clone, Copy, Default)]
pub struct Client1Module;

impl Module for Client1Module {
    fn configure(&self, binder: &mut Binder) -> Result<()> {
        binder.bind(
            Named::CLIENT1,
            Scope::Prototype,
            Box::new(|injector: &Injector| {
                let service = injector.get(Named::GENERIC)?;
                service.setup_client1();
                Ok(service)
            }),
        )
    }
}
