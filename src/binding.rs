// Named bindings: tag -> provider, resolved on request
//
// Not a general container: every binding produces an
// `Arc<dyn Service>`, keyed by a string tag. Modules register providers into a
// `Binder`; `Binder::build` freezes them into an `Injector` that clients
// resolve from.

use crate::error::{Result, WiringError};
use crate::services::Service;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Tag distinguishing bindings of the same service type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Named(&'static str);

impl Named {
    /// Unconfigured service, as constructed by `GenericModule`
    pub const GENERIC: Named = Named("generic");
    /// Service after `setup_client1`
    pub const CLIENT1: Named = Named("client1");
    /// Service after `setup_client2`
    pub const CLIENT2: Named = Named("client2");

    pub const fn new(tag: &'static str) -> Self {
        Named(tag)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Instance lifetime for a binding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Run the provider on every request
    #[default]
    Prototype,
    /// Run the provider once per injector and reuse the result
    Singleton,
}

impl FromStr for Scope {
    type Err = WiringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prototype" => Ok(Scope::Prototype),
            "singleton" => Ok(Scope::Singleton),
            other => Err(WiringError::ConfigError(format!(
                "Unknown scope '{}' (expected 'prototype' or 'singleton')",
                other
            ))),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Prototype => f.write_str("prototype"),
            Scope::Singleton => f.write_str("singleton"),
        }
    }
}

/// Provider function for a named service
///
/// Receives the injector so it can resolve the bindings it depends on.
pub type Provider = Box<dyn Fn(&Injector) -> Result<Arc<dyn Service>> + Send + Sync>;

struct Binding {
    scope: Scope,
    provider: Provider,
    instance: OnceLock<Arc<dyn Service>>,
}

impl Binding {
    fn new(scope: Scope, provider: Provider) -> Self {
        Self {
            scope,
            provider,
            instance: OnceLock::new(),
        }
    }
}

/// A set of bindings contributed to the binder
pub trait Module {
    /// Register this module's bindings
    ///
    /// # Errors
    /// - A tag this module binds is already bound
    fn configure(&self, binder: &mut Binder) -> Result<()>;
}

/// Mutable registry that modules write their bindings into
#[derive(Default)]
pub struct Binder {
    bindings: HashMap<Named, Binding>,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider for `name`
    ///
    /// # Errors
    /// - `DuplicateBinding` if `name` is already bound
    pub fn bind(&mut self, name: Named, scope: Scope, provider: Provider) -> Result<()> {
        if self.bindings.contains_key(&name) {
            return Err(WiringError::DuplicateBinding(name.to_string()));
        }
        tracing::debug!("Binding '{}' ({})", name, scope);
        self.bindings.insert(name, Binding::new(scope, provider));
        Ok(())
    }

    /// Register a provider for `name`, replacing any existing binding
    pub fn override_binding(&mut self, name: Named, scope: Scope, provider: Provider) {
        if self
            .bindings
            .insert(name, Binding::new(scope, provider))
            .is_some()
        {
            tracing::debug!("Overrode binding '{}' ({})", name, scope);
        } else {
            tracing::debug!("Binding '{}' ({}) via override", name, scope);
        }
    }

    /// Let `module` register its bindings
    pub fn install(&mut self, module: &dyn Module) -> Result<()> {
        module.configure(self)
    }

    pub fn is_bound(&self, name: Named) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Freeze the bindings
    pub fn build(self) -> Injector {
        Injector {
            bindings: self.bindings,
        }
    }
}

/// Resolves named services from a frozen set of bindings
pub struct Injector {
    bindings: HashMap<Named, Binding>,
}

impl Injector {
    /// Resolve the service bound under `name`
    ///
    /// Prototype bindings run their provider on every call. Singleton bindings
    /// run it on the first call and return the cached instance afterwards.
    ///
    /// # Errors
    /// - `BindingNotFound` if nothing is bound under `name`
    /// - Whatever the provider (or a binding it depends on) returns
    pub fn get(&self, name: Named) -> Result<Arc<dyn Service>> {
        let binding = self
            .bindings
            .get(&name)
            .ok_or_else(|| WiringError::BindingNotFound(name.to_string()))?;

        if let Some(instance) = binding.instance.get() {
            tracing::debug!("Resolved '{}' from singleton cache", name);
            return Ok(instance.clone());
        }

        tracing::debug!("Resolving '{}'", name);
        let instance = (binding.provider)(self)?;

        match binding.scope {
            Scope::Prototype => Ok(instance),
            Scope::Singleton => Ok(binding.instance.get_or_init(|| instance).clone()),
        }
    }

    pub fn contains(&self, name: Named) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Bound tags, sorted for stable output
    pub fn names(&self) -> Vec<Named> {
        let mut names: Vec<Named> = self.bindings.keys().copied().collect();
        names.sort_by_key(|n| n.as_str());
        names
    }
}
