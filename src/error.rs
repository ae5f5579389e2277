use thiserror::Error;

/// Failures while turning a selected file into normalized image bytes.
///
/// `UnsupportedType` and `TooLarge` are pre-decode rejections; `Decode` means
/// the payload claimed to be an image but could not be read. Callers show
/// different feedback for each (wrong file vs. corrupt file).
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("unsupported media type `{0}`, expected an image")]
    UnsupportedType(String),

    #[error("file is {size} bytes, over the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to resize image: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
}

/// Failures reported by the external object store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("object store unavailable: {0}")]
    Unavailable(String),

    #[error("object store quota exceeded")]
    QuotaExceeded,
}

/// Failures of collection-level batch operations.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("batch of {requested} image(s) does not fit, {remaining} slot(s) remaining")]
    CapacityExceeded { requested: usize, remaining: usize },
}

/// Per-file pipeline failure inside an intake batch. Recorded and skipped;
/// never aborts the rest of the batch.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures reported by the external content store or game catalog.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("content store unavailable: {0}")]
    Unavailable(String),

    #[error("record not found: {0}")]
    NotFound(String),
}

/// Failures of a draft submit. Both leave the draft in place.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("draft failed validation")]
    Validation(#[source] validator::ValidationErrors),

    #[error("failed to persist draft: {0}")]
    Persistence(#[from] PersistError),
}
