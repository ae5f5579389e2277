//! Media asset pipeline and authoring core for a personal game journal.
//!
//! The crate owns everything with real invariants: image intake and
//! compression, upload orchestration, ordered media collections with a cover
//! designation, the create/edit authoring state machine, and the lightbox
//! viewer. Network transport, authentication and page rendering live in the
//! application shell and reach this crate only through the [`media::store`],
//! [`content::store`] and [`content::games`] collaborator traits.

pub mod authoring;
pub mod content;
pub mod error;
pub mod media;
pub mod settings;
pub mod viewer;

pub use authoring::session::{AuthoringSession, SessionMode, SessionState};
pub use error::{
    CollectionError, NormalizeError, PersistError, PipelineError, StoreError, SubmitError,
};
pub use media::collection::MediaCollection;
pub use media::intake::{IntakeReport, MediaIntake};
pub use media::normalize::IncomingFile;
pub use media::store::{AssetUploader, ObjectStore};
pub use settings::Settings;
pub use viewer::{KeyInput, Lightbox, LightboxCommand, LightboxOutcome};
