// Integration tests for the service layer wired through real modules
//
// Unit tests elsewhere use mocks; these use ServiceImpl end to end.
//
// Usage:
//     cargo test --lib services::integration_tests

#[cfg(test)]
mod integration {
    use crate::binding::{Binder, Named, Scope};
    use crate::modules::{Client1Module, Client2Module, GenericModule};
    use crate::services::mocks::test_helpers::*;
    use crate::services::*;
    use std::sync::Arc;

    fn build_injector(scope: Scope) -> crate::binding::Injector {
        let mut binder = Binder::new();
        binder.install(&GenericModule::new(scope)).unwrap();
        binder.install(&Client1Module).unwrap();
        binder.install(&Client2Module).unwrap();
        binder.build()
    }

    #[test]
    fn test_each_tag_gets_its_own_instance() {
        let injector = build_injector(Scope::Prototype);

        let one = injector.get(Named::CLIENT1).unwrap();
        let two = injector.get(Named::CLIENT2).unwrap();

        assert!(!Arc::ptr_eq(&one, &two));
        assert_eq!(one.setup_counts(), SetupCounts { client1: 1, client2: 0 });
        assert_eq!(two.setup_counts(), SetupCounts { client1: 0, client2: 1 });
    }

    #[test]
    fn test_singleton_generic_is_shared_between_tags() {
        let injector = build_injector(Scope::Singleton);

        let one = injector.get(Named::CLIENT1).unwrap();
        let two = injector.get(Named::CLIENT2).unwrap();

        assert!(Arc::ptr_eq(&one, &two));
        assert_eq!(one.setup_counts(), SetupCounts { client1: 1, client2: 1 });
    }

    #[test]
    fn test_repeated_resolution_runs_setup_per_resolution() {
        let injector = build_injector(Scope::Prototype);

        let first = injector.get(Named::CLIENT1).unwrap();
        let second = injector.get(Named::CLIENT1).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.setup_counts().client1, 1);
        assert_eq!(second.setup_counts().client1, 1);
    }

    #[test]
    fn test_client1_binding_calls_setup_on_generic_mock() {
        let mock = Arc::new(create_mock_service(1, 0));

        let mut binder = Binder::new();
        binder
            .bind(Named::GENERIC, Scope::Prototype, mock_provider(mock.clone()))
            .unwrap();
        binder.install(&Client1Module).unwrap();
        let injector = binder.build();

        let resolved = injector.get(Named::CLIENT1).unwrap();
        assert!(Arc::ptr_eq(&resolved, &(mock.clone() as Arc<dyn Service>)));
    }

    #[test]
    fn test_client2_binding_calls_setup_on_generic_mock() {
        let mock = Arc::new(create_mock_service(0, 1));

        let mut binder = Binder::new();
        binder
            .bind(Named::GENERIC, Scope::Prototype, mock_provider(mock.clone()))
            .unwrap();
        binder.install(&Client2Module).unwrap();
        let injector = binder.build();

        let resolved = injector.get(Named::CLIENT2).unwrap();
        assert_eq!(resolved.setup_counts().client2, 1);
    }

    #[test]
    fn test_composed_services_are_usable_across_threads() {
        let injector = build_injector(Scope::Prototype);
        let service = injector.get(Named::CLIENT2).unwrap();

        let handle = std::thread::spawn(move || service.setup_counts());
        assert_eq!(handle.join().unwrap().client2, 1);
    }
}
