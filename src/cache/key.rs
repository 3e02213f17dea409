//! Cache Key Module
//!
//! Typed cache keys: a dataset name always travels with its scope so a
//! per-user dataset cannot be looked up without saying whose data it is.

use std::fmt;

use crate::error::{CacheError, Result};

/// Scope rendered when no identity is available.
pub const DEFAULT_SCOPE: &str = "default";

// == Scope ==
/// Namespace suffix that keeps one caller's cached data away from another's.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// No signed-in identity; renders as [`DEFAULT_SCOPE`]
    Default,
    /// A specific identity (e.g. the signed-in user's email)
    User(String),
}

impl Scope {
    /// Maps an optional identity to a scope.
    ///
    /// Missing or blank identities fall back to [`Scope::Default`].
    pub fn from_identity(identity: Option<&str>) -> Self {
        match identity.map(str::trim) {
            Some(id) if !id.is_empty() => Scope::User(id.to_string()),
            _ => Scope::Default,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Scope::Default => DEFAULT_SCOPE,
            Scope::User(id) => id,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Cache Key ==
/// A rendered cache key of the form `{dataset}_{scope}`, or `{dataset}` for
/// datasets that are explicitly shared by every caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    dataset: String,
    scope: Option<Scope>,
    rendered: String,
}

impl CacheKey {
    // == Constructors ==
    /// Builds a key for `dataset` namespaced by `scope`.
    pub fn scoped(dataset: impl Into<String>, scope: Scope) -> Result<Self> {
        let dataset = validate_dataset(dataset.into())?;
        let rendered = format!("{}_{}", dataset, scope);
        Ok(Self {
            dataset,
            scope: Some(scope),
            rendered,
        })
    }

    /// Builds a key for `dataset` scoped to an optional identity.
    pub fn for_identity(dataset: impl Into<String>, identity: Option<&str>) -> Result<Self> {
        Self::scoped(dataset, Scope::from_identity(identity))
    }

    /// Builds a key for a dataset that is the same for every caller
    /// (market-wide quotes, fund NAV lists).
    pub fn global(dataset: impl Into<String>) -> Result<Self> {
        let dataset = validate_dataset(dataset.into())?;
        Ok(Self {
            rendered: dataset.clone(),
            dataset,
            scope: None,
        })
    }

    // == Accessors ==
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// Returns the scope, or `None` for a global key.
    pub fn scope(&self) -> Option<&Scope> {
        self.scope.as_ref()
    }

    /// The string stored in the cache map.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.rendered
    }
}

fn validate_dataset(dataset: String) -> Result<String> {
    let trimmed = dataset.trim();
    if trimmed.is_empty() {
        return Err(CacheError::InvalidKey(
            "Dataset name cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
