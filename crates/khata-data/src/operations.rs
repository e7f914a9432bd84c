use anyhow::Result;
use async_trait::async_trait;

use crate::Snapshot;

#[async_trait]
pub trait Query<T> {
    type Filter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<T>>;
}

#[async_trait]
pub trait Upsert<T> {
    /// Insert or replace an item, keyed on its id.
    async fn upsert(&self, item: T) -> Result<T>;
}

#[async_trait]
pub trait Retrieve<T> {
    type Key;
    async fn retrieve(&self, key: Self::Key) -> Result<T>;
}

#[async_trait]
pub trait Delete<T> {
    /// Delete an item. Deleting an item that is already
    /// gone is not an error.
    async fn delete(&self, item: T) -> Result<()>;
}

#[async_trait]
pub trait ExportSnapshot {
    async fn export_snapshot(&self) -> Result<Snapshot>;
}

#[async_trait]
pub trait ImportSnapshot {
    /// Replace the entire store contents with the snapshot,
    /// all-or-nothing.
    async fn import_snapshot(&self, snapshot: &Snapshot) -> Result<()>;
}

#[async_trait]
pub trait ClearAll {
    async fn clear_all(&self) -> Result<()>;
}
