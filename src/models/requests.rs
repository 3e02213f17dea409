//! Request DTOs for the cache API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::Scope;

/// Request body for storing a payload (PUT /cache/:dataset)
///
/// # Fields
/// - `scope`: Optional identity the payload belongs to (default scope if absent)
/// - `value`: The payload, any JSON
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    #[serde(default)]
    pub scope: Option<String>,
    pub value: Value,
}

impl SetRequest {
    pub fn scope(&self) -> Scope {
        Scope::from_identity(self.scope.as_deref())
    }
}

/// Query string selecting the scope of a dataset (`?scope=user@example.com`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopeQuery {
    #[serde(default)]
    pub scope: Option<String>,
}

impl ScopeQuery {
    pub fn scope(&self) -> Scope {
        Scope::from_identity(self.scope.as_deref())
    }
}
