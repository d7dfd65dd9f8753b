// Service layer: the injectable capability and its default implementation
//
// Clients depend on `Arc<dyn Service>` only. Which implementation they get,
// and how it was configured, is decided by the bindings in `crate::modules`.
//
// Usage Example:
//     // Production code
//     let service: Arc<dyn Service> = Arc::new(ServiceImpl::new());
//
//     // Test code
//     let mut mock = MockService::new();
//     mock.expect_setup_client1().times(1).return_const(());

#[cfg(test)]
pub mod integration_tests;
#[cfg(test)]
pub mod mocks;
pub mod service_impl;
pub mod traits;

pub use service_impl::ServiceImpl;
pub use traits::{Service, SetupCounts};
