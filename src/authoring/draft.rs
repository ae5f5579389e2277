use crate::content::records::{
    ContentKind, ContentRecord, Game, NoteFields, RecordFields, ReviewFields, PLATFORMS,
};
use crate::error::SubmitError;
use crate::media::collection::MediaCollection;
use validator::{Validate, ValidationError};

/// Hard character ceiling for quick notes. Input past it is truncated while
/// typing, never rejected at submit.
pub const NOTE_CONTENT_LIMIT: usize = 280;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;
/// Mid-scale rating a fresh review draft opens with.
pub const RATING_DEFAULT: u8 = 7;

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("non_blank"));
    }
    Ok(())
}

/// Every entry must come from the [`PLATFORMS`] vocabulary the form offers.
fn known_platforms(value: &[String]) -> Result<(), ValidationError> {
    if value.iter().all(|p| PLATFORMS.contains(&p.as_str())) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_platform"))
    }
}

/// Form state for a quick note. The content field is private so every write
/// goes through the truncating setter.
#[derive(Debug, Clone, Default, Validate)]
pub struct NoteDraft {
    #[validate(custom(function = non_blank, message = "note content is required"))]
    content: String,
}

impl NoteDraft {
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the note body, truncating at [`NOTE_CONTENT_LIMIT`]
    /// characters the way the form caps input as the user types.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.chars().take(NOTE_CONTENT_LIMIT).collect();
    }
}

/// Form state for a review. Title and body are mandatory; everything else is
/// optional color.
#[derive(Debug, Clone, Validate)]
pub struct ReviewDraft {
    #[validate(custom(function = non_blank, message = "review title is required"))]
    pub title: String,
    #[validate(custom(function = non_blank, message = "review body is required"))]
    pub content: String,
    #[validate(range(min = 1, max = 10))]
    pub rating: u8,
    #[validate(custom(function = known_platforms, message = "unknown platform"))]
    pub platforms_played: Vec<String>,
    pub playtime_hours: Option<f64>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            rating: RATING_DEFAULT,
            platforms_played: Vec::new(),
            playtime_hours: None,
            pros: Vec::new(),
            cons: Vec::new(),
        }
    }
}

/// Kind-specific draft fields, one variant per content kind.
#[derive(Debug, Clone)]
pub enum DraftFields {
    Note(NoteDraft),
    Review(ReviewDraft),
}

/// In-progress authoring state for one record: the target game, the form
/// fields for its kind, and the draft's own media collection.
///
/// Dropped on cancel or after a successful submit. Never partially
/// persisted; abandoning a draft loses it on purpose.
#[derive(Debug, Clone)]
pub struct Draft {
    pub game: Game,
    pub fields: DraftFields,
    pub media: MediaCollection,
}

impl Draft {
    /// An empty draft of the given kind.
    #[must_use]
    pub fn new(game: Game, kind: ContentKind, media_capacity: usize) -> Self {
        let fields = match kind {
            ContentKind::Note => DraftFields::Note(NoteDraft::default()),
            ContentKind::Review => DraftFields::Review(ReviewDraft::default()),
        };
        Self {
            game,
            fields,
            media: MediaCollection::new(media_capacity),
        }
    }

    /// A draft pre-populated from a persisted record (edit mode).
    #[must_use]
    pub fn from_record(game: Game, record: &ContentRecord, media_capacity: usize) -> Self {
        match record {
            ContentRecord::Note(note) => {
                let mut fields = NoteDraft::default();
                fields.set_content(&note.content);
                Self {
                    game,
                    fields: DraftFields::Note(fields),
                    media: MediaCollection::from_existing(
                        note.images.clone(),
                        note.cover_image.clone(),
                        media_capacity,
                    ),
                }
            }
            ContentRecord::Review(review) => Self {
                game,
                fields: DraftFields::Review(ReviewDraft {
                    title: review.title.clone(),
                    content: review.content.clone(),
                    rating: review.rating,
                    platforms_played: review.platforms_played.clone(),
                    playtime_hours: review.playtime_hours,
                    pros: review.pros.clone(),
                    cons: review.cons.clone(),
                }),
                media: MediaCollection::from_existing(
                    review.images.clone(),
                    review.cover_image.clone(),
                    media_capacity,
                ),
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match &self.fields {
            DraftFields::Note(_) => ContentKind::Note,
            DraftFields::Review(_) => ContentKind::Review,
        }
    }

    pub fn note_mut(&mut self) -> Option<&mut NoteDraft> {
        match &mut self.fields {
            DraftFields::Note(note) => Some(note),
            DraftFields::Review(_) => None,
        }
    }

    pub fn review_mut(&mut self) -> Option<&mut ReviewDraft> {
        match &mut self.fields {
            DraftFields::Review(review) => Some(review),
            DraftFields::Note(_) => None,
        }
    }

    /// Checks the kind's required fields.
    ///
    /// # Errors
    /// [`SubmitError::Validation`] listing every violated field.
    pub fn validate(&self) -> Result<(), SubmitError> {
        match &self.fields {
            DraftFields::Note(note) => note.validate(),
            DraftFields::Review(review) => review.validate(),
        }
        .map_err(SubmitError::Validation)
    }

    /// Snapshots the draft as a store payload: trimmed text, blank pros and
    /// cons dropped, plus the current media sequence and cover.
    #[must_use]
    pub fn to_record_fields(&self) -> RecordFields {
        let images = self.media.locators().to_vec();
        let cover_image = self.media.cover().map(str::to_string);
        match &self.fields {
            DraftFields::Note(note) => RecordFields::Note(NoteFields {
                game_id: self.game.id.clone(),
                content: note.content().trim().to_string(),
                images,
                cover_image,
            }),
            DraftFields::Review(review) => RecordFields::Review(ReviewFields {
                game_id: self.game.id.clone(),
                title: review.title.trim().to_string(),
                content: review.content.trim().to_string(),
                rating: review.rating,
                platforms_played: review.platforms_played.clone(),
                playtime_hours: review.playtime_hours,
                pros: keep_filled(&review.pros),
                cons: keep_filled(&review.cons),
                images,
                cover_image,
            }),
        }
    }
}

fn keep_filled(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}
