// Library interface for clientwire
// Exposes the named bindings, the clients and the composition root so the
// graph can be composed from the binary, from tests, or from other crates.

pub mod app_builder;
pub mod binding;
pub mod client;
pub mod config;
pub mod error;
pub mod modules;
pub mod services;

// Re-export commonly used types for convenience
pub use app_builder::{compose, AppBuilder, AppDependencies};
pub use binding::{Binder, Injector, Module, Named, Provider, Scope};
pub use client::{Client, Client1, Client2};
pub use config::WiringConfig;
pub use error::{Result, WiringError};
pub use modules::{Client1Module, Client2Module, GenericModule};
pub use services::{Service, ServiceImpl, SetupCounts};
