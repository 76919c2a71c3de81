//! Name-to-constructor registry for diagnostic variants.

use indexmap::IndexMap;

use crate::clock::ClockDiagnostic;
use crate::config::DiagnosticConfig;
use crate::diagnostic::Diagnostic;
use crate::error::ConfigError;
use crate::field::FieldDiagnostic;
use crate::grid_dump::GridDiagnostic;
use crate::point::PointDiagnostic;

/// Factory signature for a diagnostic variant.
pub type Constructor = fn(&DiagnosticConfig) -> Result<Box<dyn Diagnostic>, ConfigError>;

/// Explicit mapping from diagnostic type names to constructors.
///
/// Built once at startup and passed to whatever assembles diagnostics
/// from configuration — there is no process-wide mutable state, and
/// registration order is deterministic. The built-in set covers
/// `point`, `field`, `grid`, and `clock`; extensions register
/// additional names (or deliberately shadow a built-in, which
/// [`register()`](DiagnosticRegistry::register) makes visible by
/// returning the displaced constructor).
///
/// # Examples
///
/// ```
/// use strobe_diag::{DiagnosticConfig, DiagnosticRegistry};
///
/// let registry = DiagnosticRegistry::with_builtins();
/// let config = DiagnosticConfig {
///     kind: "clock".into(),
///     ..Default::default()
/// };
/// let diag = registry.create(&config).unwrap();
/// assert_eq!(diag.kind(), "clock");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticRegistry {
    entries: IndexMap<String, Constructor>,
}

impl DiagnosticRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in variants.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("point", PointDiagnostic::boxed);
        registry.register("field", FieldDiagnostic::boxed);
        registry.register("grid", GridDiagnostic::boxed);
        registry.register("clock", ClockDiagnostic::boxed);
        registry
    }

    /// Associate a type name with a constructor.
    ///
    /// Registering an existing name replaces the prior constructor and
    /// returns it, so overriding a built-in is an explicit, observable
    /// act rather than a silent one.
    pub fn register(&mut self, name: impl Into<String>, constructor: Constructor) -> Option<Constructor> {
        self.entries.insert(name.into(), constructor)
    }

    /// Construct a diagnostic for `config.kind`.
    ///
    /// Returns `Err(ConfigError::UnknownDiagnosticType)` if the name
    /// was never registered.
    pub fn create(&self, config: &DiagnosticConfig) -> Result<Box<dyn Diagnostic>, ConfigError> {
        let constructor =
            self.entries
                .get(&config.kind)
                .ok_or_else(|| ConfigError::UnknownDiagnosticType {
                    name: config.kind.clone(),
                })?;
        constructor(config)
    }

    /// Whether a type name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
