// Clients and their injection constructors
//
// `Client` is the shared holder; `Client1` and `Client2` are thin newtypes that
// pin down which named service they are built from.

use crate::binding::{Injector, Named};
use crate::error::Result;
use crate::services::Service;
use std::ops::Deref;
use std::sync::Arc;

/// Holds exactly one service reference for its whole lifetime
#[derive(Clone)]
pub struct Client {
    service: Arc<dyn Service>,
}

impl Client {
    pub fn new(service: Arc<dyn Service>) -> Self {
        Self { service }
    }

    /// The service this client was constructed with
    pub fn service(&self) -> &Arc<dyn Service> {
        &self.service
    }
}

/// Client built from the `client1` binding
#[derive(Clone)]
pub struct Client1(Client);

impl Client1 {
    pub fn new(service: Arc<dyn Service>) -> Self {
        Self(Client::new(service))
    }

    /// Resolve `client1` from `injector` and construct the client
    pub fn inject(injector: &Injector) -> Result<Self> {
        Ok(Self::new(injector.get(Named::CLIENT1)?))
    }

    pub fn into_inner(self) -> Client {
        self.0
    }
}

impl Deref for Client1 {
    type Target = Client;

    fn deref(&self) -> &Client {
        &self.0
    }
}

/// Client built from the `client2` binding
#[derive(Clone)]
pub struct Client2(Client);

impl Client2 {
    pub fn new(service: Arc<dyn Service>) -> Self {
        Self(Client::new(service))
    }

    /// Resolve `client2` from `injector` and construct the client
    pub fn inject(injector: &Injector) -> Result<Self> {
        Ok(Self::new(injector.get(Named::CLIENT2)?))
    }

    pub fn into_inner(self) -> Client {
        self.0
    }
}

impl Deref for Client2 {
    type Target = Client;

    fn deref(&self) -> &Client {
        &self.0
    }
}
