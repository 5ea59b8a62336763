//! Name → constructor registry for pore size distributions.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::distribution::{DistributionSpec, Family, Parametric, Quantile};
use crate::error::{PoreError, PoreResult};

/// Builds a fresh distribution from a spec.
pub type Constructor = Arc<dyn Fn(&DistributionSpec) -> PoreResult<Box<dyn Quantile>> + Send + Sync>;

/// Registry preloaded with every builtin [`Family`], shared process-wide.
pub static BUILTIN_REGISTRY: Lazy<DistributionRegistry> = Lazy::new(DistributionRegistry::builtin);

#[derive(Clone, Default)]
pub struct DistributionRegistry {
    constructors: HashMap<String, Constructor>,
}

impl DistributionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every builtin family under its name and aliases.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for family in Family::ALL {
            let ctor: Constructor = Arc::new(move |spec: &DistributionSpec| -> PoreResult<Box<dyn Quantile>> {
                let dist = Parametric::new(family, spec.shape, spec.loc, spec.scale)?;
                Ok(Box::new(dist) as Box<dyn Quantile>)
            });
            registry.insert(family.name(), ctor.clone());
            for alias in family.aliases() {
                registry.insert(*alias, ctor.clone());
            }
        }
        registry
    }

    /// Register (or replace) a constructor under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, ctor: F)
    where
        F: Fn(&DistributionSpec) -> PoreResult<Box<dyn Quantile>> + Send + Sync + 'static,
    {
        self.insert(name, Arc::new(ctor));
    }

    fn insert(&mut self, name: impl Into<String>, ctor: Constructor) {
        self.constructors.insert(name.into(), ctor);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct the distribution named by `spec`.
    ///
    /// Each call builds a new instance; nothing is cached.
    pub fn resolve(&self, spec: &DistributionSpec) -> PoreResult<Box<dyn Quantile>> {
        let ctor = self.constructors.get(&spec.name).ok_or_else(|| {
            PoreError::configuration(format!(
                "unknown distribution '{}' (known: {})",
                spec.name,
                self.names().join(", ")
            ))
        })?;
        ctor(spec)
    }
}

impl std::fmt::Debug for DistributionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistributionRegistry")
            .field("names", &self.names())
            .finish()
    }
}
