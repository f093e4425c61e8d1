use std::collections::HashSet;

use crate::error::CoreError;

/// The set of API key tokens permitted to authenticate requests.
///
/// Parsed once from the `API_KEYS` configuration string and held immutably
/// for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeySet {
    keys: HashSet<String>,
}

impl ApiKeySet {
    /// Parses a comma-separated allow-list string.
    ///
    /// Empty segments (`"a,,b"`) are dropped; an empty key can never
    /// authorize a request.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyAllowList`] if no non-empty token remains.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let keys: HashSet<String> = raw
            .split(',')
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect();
        if keys.is_empty() {
            return Err(CoreError::EmptyAllowList);
        }
        Ok(Self { keys })
    }

    /// Returns `true` if `key` is non-empty and present in the set.
    #[must_use]
    pub fn authorizes(&self, key: &str) -> bool {
        !key.is_empty() && self.keys.contains(key)
    }

    /// Number of distinct keys in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the set holds no keys. Unreachable through
    /// [`ApiKeySet::parse`], which rejects empty sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
