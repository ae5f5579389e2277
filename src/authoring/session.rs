use crate::authoring::draft::Draft;
use crate::content::games::{resolve_game, CatalogGame, GameCatalog};
use crate::content::records::{ContentKind, ContentRecord, Game};
use crate::content::store::ContentStore;
use crate::error::{CollectionError, PersistError, SubmitError};
use crate::media::intake::{IntakeReport, MediaIntake};
use crate::media::normalize::IncomingFile;
use crate::media::store::{AssetUploader, ObjectStore};
use crate::settings::Settings;
use std::mem;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// How long the success state stays up before the machine resets.
pub const DONE_RESET_DELAY: Duration = Duration::from_secs(2);

/// Where the authoring flow currently is, observable by the UI shell.
#[derive(Debug)]
pub enum SessionState {
    /// Waiting for the user to resolve a target game.
    SelectingGame,
    /// Game resolved; waiting for the choice between the two content kinds.
    SelectingKind { game: Game },
    /// Form fields and the draft's media collection mutate freely here.
    /// Nothing is persisted in this state.
    Editing { draft: Draft },
    /// A submit is in flight.
    Submitting,
    /// Submit succeeded; the draft is gone and `message` is showing.
    Done { message: String },
    /// Edit-mode terminal state; the shell returns to its list view.
    Closed,
}

/// Whether submit creates a new record or updates an existing one. Fixed at
/// construction, never read from ambient state mid-lifecycle.
#[derive(Debug, Clone)]
pub enum SessionMode {
    Create,
    Edit { record_id: String },
}

/// The create/edit workflow for both content kinds. One session drives one
/// draft at a time on a single UI task; collaborators are awaited
/// sequentially, so there is no internal locking.
pub struct AuthoringSession {
    state: SessionState,
    mode: SessionMode,
    catalog: Arc<dyn GameCatalog>,
    content: Arc<dyn ContentStore>,
    intake: MediaIntake,
    settings: Settings,
}

impl AuthoringSession {
    /// A create-mode session, starting at game selection.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn GameCatalog>,
        content: Arc<dyn ContentStore>,
        objects: Arc<dyn ObjectStore>,
        settings: Settings,
    ) -> Self {
        let intake = MediaIntake::new(AssetUploader::new(objects), settings.upload.clone());
        Self {
            state: SessionState::SelectingGame,
            mode: SessionMode::Create,
            catalog,
            content,
            intake,
            settings,
        }
    }

    /// An edit-mode session, opening directly in `Editing` with a draft
    /// pre-populated from the persisted record. Submit will update that
    /// record instead of creating a new one.
    #[must_use]
    pub fn edit(
        catalog: Arc<dyn GameCatalog>,
        content: Arc<dyn ContentStore>,
        objects: Arc<dyn ObjectStore>,
        settings: Settings,
        game: Game,
        record: &ContentRecord,
    ) -> Self {
        let intake = MediaIntake::new(AssetUploader::new(objects), settings.upload.clone());
        let capacity = settings.media_capacity(record.kind());
        Self {
            state: SessionState::Editing {
                draft: Draft::from_record(game, record, capacity),
            },
            mode: SessionMode::Edit {
                record_id: record.id().to_string(),
            },
            catalog,
            content,
            intake,
            settings,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    #[must_use]
    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            SessionState::Editing { draft } => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match &mut self.state {
            SessionState::Editing { draft } => Some(draft),
            _ => None,
        }
    }

    /// Resolves the picked catalog game (create-or-reuse by external id) and
    /// advances to kind selection. Ignored outside `SelectingGame`.
    ///
    /// # Errors
    /// Propagates [`PersistError`] from the catalog; the state is unchanged
    /// on failure.
    pub async fn select_game(&mut self, candidate: &CatalogGame) -> Result<(), PersistError> {
        if !matches!(self.state, SessionState::SelectingGame) {
            return Ok(());
        }
        let game = resolve_game(self.catalog.as_ref(), candidate).await?;
        info!(game = %game.name, "game selected");
        self.state = SessionState::SelectingKind { game };
        Ok(())
    }

    /// Builds an empty draft of `kind` and enters `Editing`. Only offered
    /// once a game is resolved; ignored elsewhere.
    pub fn choose_kind(&mut self, kind: ContentKind) {
        let state = mem::replace(&mut self.state, SessionState::SelectingGame);
        self.state = match state {
            SessionState::SelectingKind { game } => SessionState::Editing {
                draft: Draft::new(game, kind, self.settings.media_capacity(kind)),
            },
            other => other,
        };
    }

    /// Abandons whatever is in progress. The draft is lost; assets already
    /// uploaded stay in the object store as accepted orphans.
    pub fn cancel(&mut self) {
        self.state = match self.mode {
            SessionMode::Create => SessionState::SelectingGame,
            SessionMode::Edit { .. } => SessionState::Closed,
        };
    }

    /// Runs one intake batch against the current draft's collection.
    /// Ignored outside `Editing` (returns an empty report).
    ///
    /// # Errors
    /// [`CollectionError::CapacityExceeded`] before any pipeline work when
    /// the batch cannot fit.
    pub async fn add_media(
        &mut self,
        files: Vec<IncomingFile>,
    ) -> Result<IntakeReport, CollectionError> {
        let SessionState::Editing { draft } = &mut self.state else {
            return Ok(IntakeReport::default());
        };
        self.intake.ingest(&mut draft.media, files).await
    }

    /// Removes a collection item locally and best-effort deletes the remote
    /// object. Ignored outside `Editing`.
    pub async fn remove_media(&mut self, index: usize) {
        let SessionState::Editing { draft } = &mut self.state else {
            return;
        };
        self.intake.discard(&mut draft.media, index).await;
    }

    pub fn reorder_media(&mut self, from: usize, to: usize) {
        if let SessionState::Editing { draft } = &mut self.state {
            draft.media.reorder(from, to);
        }
    }

    pub fn toggle_cover(&mut self, locator: &str) {
        if let SessionState::Editing { draft } = &mut self.state {
            draft.media.toggle_cover(locator);
        }
    }

    /// Validates and persists the draft.
    ///
    /// Validation failure returns to `Editing` without touching the content
    /// store; persistence failure returns to `Editing` with the draft
    /// intact. Success lands in `Done`. Unsaved work survives every failure.
    ///
    /// # Errors
    /// [`SubmitError::Validation`] or [`SubmitError::Persistence`].
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let state = mem::replace(&mut self.state, SessionState::Submitting);
        let SessionState::Editing { draft } = state else {
            self.state = state;
            return Ok(());
        };

        if let Err(err) = draft.validate() {
            self.state = SessionState::Editing { draft };
            return Err(err);
        }

        let fields = draft.to_record_fields();
        let result = match &self.mode {
            SessionMode::Create => self.content.create(&fields).await.map(|_| ()),
            SessionMode::Edit { record_id } => self.content.update(record_id, &fields).await,
        };

        match result {
            Ok(()) => {
                info!(
                    kind = draft.kind().as_str(),
                    game = %draft.game.name,
                    "draft persisted"
                );
                let message = match draft.kind() {
                    ContentKind::Note => "Quick note posted!",
                    ContentKind::Review => "Review published!",
                };
                self.state = SessionState::Done {
                    message: message.to_string(),
                };
                Ok(())
            }
            Err(err) => {
                self.state = SessionState::Editing { draft };
                Err(SubmitError::Persistence(err))
            }
        }
    }

    /// Holds the success message for [`DONE_RESET_DELAY`], then resets:
    /// back to game selection in create mode, `Closed` in edit mode. The
    /// draft was already persisted, so the reset loses nothing.
    pub async fn dismiss_done(&mut self) {
        if !matches!(self.state, SessionState::Done { .. }) {
            return;
        }
        tokio::time::sleep(DONE_RESET_DELAY).await;
        self.cancel();
    }
}
