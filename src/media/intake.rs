use crate::error::{CollectionError, PipelineError};
use crate::media::collection::MediaCollection;
use crate::media::normalize::{normalize, IncomingFile};
use crate::media::store::AssetUploader;
use crate::settings::UploadLimits;
use tracing::{info, warn};

/// One failed file out of a batch. The rest of the batch is unaffected.
#[derive(Debug)]
pub struct IntakeFailure {
    pub file_name: String,
    pub error: PipelineError,
}

/// Outcome of one intake batch: the locators appended, in selection order,
/// plus one entry per skipped file for user feedback.
#[derive(Debug, Default)]
pub struct IntakeReport {
    pub appended: Vec<String>,
    pub failures: Vec<IntakeFailure>,
}

/// Drives a batch of selected files through normalize → upload → append.
pub struct MediaIntake {
    uploader: AssetUploader,
    limits: UploadLimits,
}

impl MediaIntake {
    #[must_use]
    pub fn new(uploader: AssetUploader, limits: UploadLimits) -> Self {
        Self { uploader, limits }
    }

    /// Processes one batch of selected files sequentially.
    ///
    /// The whole batch is rejected before any decode or upload work when it
    /// cannot fit in the collection's remaining capacity. Past that gate
    /// each file stands alone: a failure is recorded and skipped, later
    /// files still run, and every success is appended in selection order.
    ///
    /// # Errors
    /// [`CollectionError::CapacityExceeded`] from the up-front gate; per-file
    /// errors never abort the batch and land in the report instead.
    pub async fn ingest(
        &self,
        collection: &mut MediaCollection,
        files: Vec<IncomingFile>,
    ) -> Result<IntakeReport, CollectionError> {
        let remaining = collection.remaining();
        if files.len() > remaining {
            return Err(CollectionError::CapacityExceeded {
                requested: files.len(),
                remaining,
            });
        }

        let total = files.len();
        let mut report = IntakeReport::default();
        for (i, file) in files.into_iter().enumerate() {
            info!(file = %file.name, "uploading file {} of {total}", i + 1);
            match self.process_one(&file).await {
                Ok(locator) => report.appended.push(locator),
                Err(error) => {
                    warn!(file = %file.name, %error, "skipping failed file");
                    report.failures.push(IntakeFailure {
                        file_name: file.name,
                        error,
                    });
                }
            }
        }

        // Cannot overflow: gated on remaining capacity before any work.
        collection.append(report.appended.clone())?;
        Ok(report)
    }

    async fn process_one(&self, file: &IncomingFile) -> Result<String, PipelineError> {
        let bytes = normalize(file, &self.limits)?;
        let locator = self.uploader.upload(bytes, "jpg").await?;
        Ok(locator)
    }

    /// Removes the item at `index` locally, then tries to delete the remote
    /// object. The two operations are independent: local state is
    /// authoritative for the UI, and a failed remote delete only leaves an
    /// orphan in the store, which gets logged rather than propagated.
    pub async fn discard(&self, collection: &mut MediaCollection, index: usize) {
        let Some(locator) = collection.remove(index) else {
            return;
        };
        if let Err(error) = self.uploader.remove(&locator).await {
            warn!(%locator, %error, "remote delete failed, orphan left in object store");
        }
    }
}
