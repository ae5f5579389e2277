use crate::error::StoreError;
use async_trait::async_trait;
use std::sync::Arc;

/// External object storage for committed image bytes. Implemented by the
/// application shell; assumed to serialize its own writes.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes an object. Names are caller-assigned and never reused, so an
    /// implementation may treat every put as a fresh write.
    async fn put(&self, name: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StoreError>;

    /// Deletes an object. Deleting a missing object must succeed.
    async fn delete(&self, name: &str) -> Result<(), StoreError>;

    /// Resolves the durable public locator for an object name.
    fn public_url(&self, name: &str) -> String;
}

/// Stores normalized image bytes under collision-resistant names and hands
/// back public locators.
#[derive(Clone)]
pub struct AssetUploader {
    store: Arc<dyn ObjectStore>,
}

impl AssetUploader {
    #[must_use]
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Uploads one normalized image and returns its public locator.
    ///
    /// Each call writes at most one object. Retrying after a failure
    /// produces a new, distinct object; there is no dedup.
    ///
    /// # Errors
    /// Propagates [`StoreError`] from the object store unchanged.
    pub async fn upload(&self, bytes: Vec<u8>, extension: &str) -> Result<String, StoreError> {
        let name = unique_object_name(extension);
        self.store
            .put(&name, bytes, mime::IMAGE_JPEG.as_ref())
            .await?;
        Ok(self.store.public_url(&name))
    }

    /// Deletes the object behind a locator. An already-absent object counts
    /// as success; the caller may race a collection edit against a completed
    /// delete.
    ///
    /// # Errors
    /// Propagates [`StoreError`] for real store failures.
    pub async fn remove(&self, locator: &str) -> Result<(), StoreError> {
        self.store.delete(object_name(locator)).await
    }
}

/// Object name from a public locator: the final path segment, the inverse of
/// [`ObjectStore::public_url`].
fn object_name(locator: &str) -> &str {
    locator.rsplit('/').next().unwrap_or(locator)
}

/// Time-based component plus a random suffix. Never derived from the
/// user-supplied filename, so crafted names cannot collide or traverse.
fn unique_object_name(extension: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = std::iter::repeat_with(fastrand::alphanumeric)
        .take(8)
        .collect();
    format!("{millis}-{suffix}.{extension}")
}
