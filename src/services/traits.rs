// Core trait definitions for the injectable service
//
// Clients only ever see `Arc<dyn Service>`, so the trait is the single seam
// between wiring code and whatever implementation a binding provides.
// Send + Sync lets a composed graph be handed to other threads afterwards.

#[cfg(test)]
use mockall::automock;

/// Capability shared by every client
///
/// Each client identity has its own setup operation. Bindings call exactly one
/// of them before handing the instance to the client that requested it.
///
/// Usage:
///     let service: Arc<dyn Service> = Arc::new(ServiceImpl::new());
///     service.setup_client1();
///     assert_eq!(service.setup_counts().client1, 1);
#[cfg_attr(test, automock)]
pub trait Service: Send + Sync {
    /// Configure this instance for use by `Client1`
    fn setup_client1(&self);

    /// Configure this instance for use by `Client2`
    fn setup_client2(&self);

    /// Number of setup calls received so far, per client identity
    fn setup_counts(&self) -> SetupCounts;
}

/// Setup calls recorded by a service instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetupCounts {
    /// Calls to `setup_client1`
    pub client1: usize,

    /// Calls to `setup_client2`
    pub client2: usize,
}

impl SetupCounts {
    /// True if no setup has run yet
    pub fn is_unconfigured(&self) -> bool {
        self.client1 == 0 && self.client2 == 0
    }
}
