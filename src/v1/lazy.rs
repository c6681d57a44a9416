/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::BoxError;
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Function resolving a value from its key, usually with a round trip to the service
pub type Fetch<K, V> = Arc<dyn Fn(K) -> BoxFuture<'static, Result<V, BoxError>> + Send + Sync>;

enum LazyState<K, V> {
    Unresolved { fetch: Fetch<K, V> },
    Resolved(V),
}

/// A value that is either known or fetched the first time it is read.
///
/// Once resolved the value is kept for the lifetime of the owning object. A failed fetch leaves
/// the field unresolved so the next read tries again.
pub struct Lazy<K, V> {
    key: K,
    state: Mutex<LazyState<K, V>>,
}

impl<K, V> Lazy<K, V>
where
    K: Clone + Send + Sync,
    V: Clone + Send,
{
    /// Value fetched on first read
    pub fn deferred(key: K, fetch: Fetch<K, V>) -> Self {
        Self {
            key,
            state: Mutex::new(LazyState::Unresolved { fetch }),
        }
    }

    /// Value already known, no fetch will ever happen
    pub fn resolved(key: K, value: V) -> Self {
        Self {
            key,
            state: Mutex::new(LazyState::Resolved(value)),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value, fetching it if this is the first read
    pub async fn get(&self) -> Result<V, BoxError> {
        let mut state = self.state.lock().await;
        let fetch = match &*state {
            LazyState::Resolved(value) => return Ok(value.clone()),
            LazyState::Unresolved { fetch } => fetch.clone(),
        };
        let value = fetch(self.key.clone()).await?;
        *state = LazyState::Resolved(value.clone());
        Ok(value)
    }

    /// Returns the value only if it has already been resolved
    pub fn peek(&self) -> Option<V> {
        match &*self.state.try_lock().ok()? {
            LazyState::Resolved(value) => Some(value.clone()),
            LazyState::Unresolved { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.peek().is_some()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Lazy<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if self.key != other.key {
            return false;
        }
        match (self.state.try_lock(), other.state.try_lock()) {
            (Ok(a), Ok(b)) => match (&*a, &*b) {
                (LazyState::Resolved(a), LazyState::Resolved(b)) => a == b,
                _ => true,
            },
            _ => true,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Lazy<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Lazy");
        s.field("key", &self.key);
        match self.state.try_lock().as_deref() {
            Ok(LazyState::Resolved(value)) => s.field("value", value),
            _ => s.field("value", &"<unresolved>"),
        };
        s.finish()
    }
}
