// Centralized error handling using thiserror for type-safe error management
//
// Composition either produces a fully wired graph or fails with one of these
// variants. Nothing is retried: the first error aborts startup.

use thiserror::Error;

/// Main error type for wiring and composition
///
/// Usage:
///     fn lookup(injector: &Injector) -> Result<Arc<dyn Service>> {
///         injector.get(Named::GENERIC)
///     }
#[derive(Debug, Error)]
pub enum WiringError {
    /// No binding registered for the requested tag
    #[error("No binding for named service: {0}")]
    BindingNotFound(String),

    /// A module tried to bind a tag that is already bound
    #[error("Binding already configured for named service: {0}")]
    DuplicateBinding(String),

    /// A provider function failed while constructing a service
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Composition was set up incorrectly (no modules, bad overrides, etc.)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Environment variable present but holding an invalid value
    #[error("Environment error: {0}")]
    EnvError(String),

    /// Reading the wiring config file failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The wiring config file is not valid JSON for `WiringConfig`
    #[error("JSON serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Type alias for Result with WiringError
pub type Result<T> = std::result::Result<T, WiringError>;

// Providers are free to use anyhow internally; failures surface as provider errors.
impl From<anyhow::Error> for WiringError {
    fn from(err: anyhow::Error) -> Self {
        WiringError::ProviderError(err.to_string())
    }
}
