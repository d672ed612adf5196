//! Store port - key/value persistence underneath the repositories.
//!
//! Repositories map aggregates to storage models and keep them here.
//! The storage engine itself is behind this trait.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// A key/value store of storage models.
#[async_trait]
pub trait Store<K, V>: Send + Sync
where
    K: Send + Sync + 'static,
    V: Send + 'static,
{
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &K) -> Result<Option<V>, DomainError>;

    /// Inserts or replaces the value under `key`.
    async fn set(&self, key: K, value: V) -> Result<(), DomainError>;

    /// Returns every stored value in no particular order.
    async fn values(&self) -> Result<Vec<V>, DomainError>;
}
