// Mock test helpers and common mock patterns
//
// Usage:
//     use crate::services::mocks::test_helpers::*;
//     let mock = create_mock_service(1, 0);
//     // mock panics on drop unless setup_client1 ran exactly once

#[cfg(test)]
pub mod test_helpers {
    use super::super::traits::*;
    use crate::binding::{Injector, Provider};
    use std::sync::Arc;

    /// Mock with no expectations: any call panics
    pub fn create_untouched_service() -> MockService {
        MockService::new()
    }

    /// Mock expecting exactly `client1` / `client2` setup calls
    ///
    /// `setup_counts()` reports the expected totals so code that inspects the
    /// counts sees a consistent picture.
    pub fn create_mock_service(client1: usize, client2: usize) -> MockService {
        let mut mock = MockService::new();

        mock.expect_setup_client1().times(client1).return_const(());
        mock.expect_setup_client2().times(client2).return_const(());
        mock.expect_setup_counts()
            .returning(move || SetupCounts { client1, client2 });

        mock
    }

    /// Provider that always hands out the same mock instance
    pub fn mock_provider(mock: Arc<MockService>) -> Provider {
        Box::new(move |_: &Injector| Ok(mock.clone() as Arc<dyn Service>))
    }
}

#[cfg(test)]
mod tests {
    use super::super::traits::*;
    use super::test_helpers::*;

    #[test]
    fn test_create_untouched_service() {
        let mock = create_untouched_service();
        drop(mock);
    }

    #[test]
    fn test_create_mock_service() {
        let mock = create_mock_service(1, 0);
        mock.setup_client1();
        assert_eq!(mock.setup_counts().client1, 1);
        assert_eq!(mock.setup_counts().client2, 0);
    }

    #[test]
    #[should_panic]
    fn test_mock_service_rejects_unexpected_setup() {
        let mock = create_mock_service(1, 0);
        mock.setup_client1();
        mock.setup_client2();
    }
}
