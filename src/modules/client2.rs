use crate::binding::{Binder, Injector, Module, Named, Scope};
use crate::error::Result;

/// Binds `client2` to the `generic` service after `setup_client2`
#[derive(Debug, Clone, Copy, Default)]
pub struct Client2Module;

impl Module for Client2Module {
    fn configure(&self, binder: &mut Binder) -> Result<()> {
        binder.bind(
            Named::CLIENT2,
            Scope::Prototype,
            Box::new(|injector: &Injector| {
                let service = injector.get(Named::GENERIC)?;
                service.setup_client2();
                Ok(service)
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::GenericModule;
    use crate::services::SetupCounts;

    #[test]
    fn test_client2_binding_applies_setup_once() {
        let mut binder = Binder::new();
        binder.install(&GenericModule::default()).unwrap();
        binder.install(&Client2Module).unwrap();
        let injector = binder.build();

        let service = injector.get(Named::CLIENT2).unwrap();
        assert_eq!(
            service.setup_counts(),
            SetupCounts {
                client1: 0,
                client2: 1
            }
        );
    }

    #[test]
    fn test_installing_twice_is_a_duplicate() {
        let mut binder = Binder::new();
        binder.install(&Client2Module).unwrap();
        assert!(binder.install(&Client2Module).is_err());
    }
}
