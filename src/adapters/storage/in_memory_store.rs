//! In-memory `Store` backed by a `HashMap`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::Store;

/// Shared in-memory key/value store. Clones share the same map.
#[derive(Debug)]
pub struct InMemoryStore<K, V> {
    entries: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> InMemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl<K, V> Clone for InMemoryStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K, V> Store<K, V> for InMemoryStore<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Result<Option<V>, DomainError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: K, value: V) -> Result<(), DomainError> {
        self.entries.write().await.insert(key, value);
        Ok(())
    }

    async fn values(&self) -> Result<Vec<V>, DomainError> {
        Ok(self.entries.read().await.values().cloned().collect())
    }
}
