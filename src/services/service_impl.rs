// Default service implementation
//
// Setup has no behavior beyond bookkeeping: each call bumps a counter and logs.
// Counters are atomics so the trait can take `&self` and stay Sync.

use super::traits::{Service, SetupCounts};
use std::sync::atomic::{AtomicUsize, Ordering};

/// The concrete service bound under the `generic` tag
///
/// Usage:
///     let service = ServiceImpl::new();
///     service.setup_client2();
///     assert_eq!(service.setup_counts().client2, 1);
#[derive(Debug, Default)]
pub struct ServiceImpl {
    client1_setups: AtomicUsize,
    client2_setups: AtomicUsize,
}

impl ServiceImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service for ServiceImpl {
    fn setup_client1(&self) {
        let calls = self.client1_setups.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!("Service configured for client1 (call #{})", calls);
    }

    fn setup_client2(&self) {
        let calls = self.client2_setups.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!("Service configured for client2 (call #{})", calls);
    }

    fn setup_counts(&self) -> SetupCounts {
        SetupCounts {
            client1: self.client1_setups.load(Ordering::SeqCst),
            client2: self.client2_setups.load(Ordering::SeqCst),
        }
    }
}
