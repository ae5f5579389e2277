use crate::content::records::{ContentKind, ContentRecord, RecordFields};
use crate::error::PersistError;
use async_trait::async_trait;

/// Sort order for record listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// External document store holding persisted notes and reviews. The store
/// serializes its own writes; this crate performs no locking over it, so the
/// last writer on `update` wins.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Persists a new record and returns its id.
    async fn create(&self, fields: &RecordFields) -> Result<String, PersistError>;

    /// Replaces the stored fields of an existing record.
    async fn update(&self, id: &str, fields: &RecordFields) -> Result<(), PersistError>;

    /// Deletes a record.
    async fn delete(&self, kind: ContentKind, id: &str) -> Result<(), PersistError>;

    /// Lists records of one kind, optionally filtered by game.
    async fn list(
        &self,
        kind: ContentKind,
        game_id: Option<&str>,
        order: ListOrder,
    ) -> Result<Vec<ContentRecord>, PersistError>;
}
