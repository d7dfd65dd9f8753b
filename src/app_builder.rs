// AppBuilder: the composition root
//
// All object construction happens here, once, at startup:
//     config -> modules -> Binder -> Injector -> Client1, Client2
//
// Usage Example:
//     // Production
//     let deps = AppBuilder::new()
//         .with_config(WiringConfig::load()?)
//         .with_production_modules()
//         .build()?;
//
//     // Testing
//     let deps = AppBuilder::new()
//         .with_production_modules()
//         .with_binding_override(Named::GENERIC, Scope::Prototype, mock_provider(mock))
//         .build()?;

use crate::binding::{Binder, Injector, Module, Named, Provider, Scope};
use crate::client::{Client1, Client2};
use crate::config::WiringConfig;
use crate::error::{Result, WiringError};
use crate::modules::{production_modules, GenericModule};

/// Builder for composing the client graph
///
/// # Examples
///
/// ```no_run
/// use clientwire::{AppBuilder, WiringConfig};
///
/// fn main() -> clientwire::Result<()> {
///     let deps = AppBuilder::new()
///         .with_config(WiringConfig::load()?)
///         .with_production_modules()
///         .build()?;
///
///     assert_eq!(deps.client1.service().setup_counts().client1, 1);
///     Ok(())
/// }
/// ```
pub struct AppBuilder {
    config: WiringConfig,

    // Production modules are installed first, at build time, so the
    // configured scope applies regardless of call order
    production_modules: bool,
    modules: Vec<Box<dyn Module>>,

    // Applied after all modules (for testing)
    overrides: Vec<(Named, Scope, Provider)>,
}

impl AppBuilder {
    /// Create a new AppBuilder with default configuration and no modules
    pub fn new() -> Self {
        Self {
            config: WiringConfig::default(),
            production_modules: false,
            modules: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Set the wiring configuration
    pub fn with_config(mut self, config: WiringConfig) -> Self {
        self.config = config;
        self
    }

    /// Install GenericModule, Client1Module and Client2Module
    pub fn with_production_modules(mut self) -> Self {
        self.production_modules = true;
        self
    }

    /// Install an additional module
    pub fn with_module(mut self, module: Box<dyn Module>) -> Self {
        self.modules.push(module);
        self
    }

    /// Replace (or add) the binding for `name` after all modules are installed
    pub fn with_binding_override(mut self, name: Named, scope: Scope, provider: Provider) -> Self {
        self.overrides.push((name, scope, provider));
        self
    }

    /// Install modules, freeze bindings and construct both clients
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No modules were installed
    /// - Two modules bind the same tag
    /// - A binding a client needs is missing or its provider fails
    pub fn build(self) -> Result<AppDependencies> {
        let mut modules = if self.production_modules {
            production_modules(GenericModule::new(self.config.generic_scope))
        } else {
            Vec::new()
        };
        modules.extend(self.modules);

        if modules.is_empty() && self.overrides.is_empty() {
            return Err(WiringError::ConfigError(
                "No modules installed".to_string(),
            ));
        }

        let mut binder = Binder::new();
        for module in &modules {
            binder.install(module.as_ref())?;
        }
        for (name, scope, provider) in self.overrides {
            binder.override_binding(name, scope, provider);
        }
        let injector = binder.build();

        let client1 = Client1::inject(&injector)?;
        let client2 = Client2::inject(&injector)?;

        tracing::info!(
            "Composed clients (generic scope: {}, bindings: {})",
            self.config.generic_scope,
            injector.names().len()
        );

        Ok(AppDependencies {
            injector,
            client1,
            client2,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The composed object graph
///
/// The injector is kept so callers can resolve further clients from the same
/// bindings (singleton caches included).
pub struct AppDependencies {
    pub injector: Injector,
    pub client1: Client1,
    pub client2: Client2,
}

/// Compose the production graph using `WiringConfig::load()`
///
/// # Errors
/// - Configuration cannot be loaded
/// - Composition fails (see `AppBuilder::build`)
pub fn compose() -> Result<AppDependencies> {
    AppBuilder::new()
        .with_config(WiringConfig::load()?)
        .with_production_modules()
        .build()
}
