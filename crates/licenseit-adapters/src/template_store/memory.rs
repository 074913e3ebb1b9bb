//! In-memory template store with bundled templates.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use licenseit_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::LicenseitResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
///
/// Keyed by full template name; iteration order is the sorted name order.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create a store with the bundled templates loaded.
    pub fn with_builtin() -> LicenseitResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load the bundled templates.
    pub fn load_builtin(&self) -> LicenseitResult<()> {
        for (name, body) in builtin_templates::all_templates() {
            self.insert(name, body)?;
        }
        debug!(count = self.len(), "bundled templates loaded");
        Ok(())
    }

    /// Add or replace a template.
    pub fn insert(&self, name: impl Into<String>, body: impl Into<String>) -> LicenseitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(name.into(), body.into());
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn list_names(&self) -> LicenseitResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.keys().cloned().collect())
    }

    fn read_body(&self, name: &str) -> LicenseitResult<Option<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.get(name).cloned())
    }

    fn contains(&self, name: &str) -> LicenseitResult<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.contains_key(name))
    }
}
