use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform vocabulary offered by the review form.
pub const PLATFORMS: [&str; 8] = [
    "PC",
    "PlayStation 5",
    "PlayStation 4",
    "Xbox Series X/S",
    "Xbox One",
    "Nintendo Switch",
    "Steam Deck",
    "Mobile",
];

/// The two authorable content kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Note,
    Review,
}

impl ContentKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Review => "review",
        }
    }
}

/// A game record, created locally on first use from an external catalog hit
/// and reused afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    /// Id of the catalog entry this game was imported from.
    pub external_id: i64,
    pub name: String,
    pub background_image: Option<String>,
    pub released: Option<String>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A persisted quick note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickNote {
    pub id: String,
    pub game_id: String,
    pub content: String,
    pub images: Vec<String>,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A persisted long-form review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub game_id: String,
    pub title: String,
    pub content: String,
    pub rating: u8,
    pub platforms_played: Vec<String>,
    pub playtime_hours: Option<f64>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub images: Vec<String>,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Note payload as sent to the content store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteFields {
    pub game_id: String,
    pub content: String,
    pub images: Vec<String>,
    pub cover_image: Option<String>,
}

/// Review payload as sent to the content store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewFields {
    pub game_id: String,
    pub title: String,
    pub content: String,
    pub rating: u8,
    pub platforms_played: Vec<String>,
    pub playtime_hours: Option<f64>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub images: Vec<String>,
    pub cover_image: Option<String>,
}

/// Create/update payload, tagged by kind. One variant per content kind
/// instead of a single loose record with optional fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "fields", rename_all = "snake_case")]
pub enum RecordFields {
    Note(NoteFields),
    Review(ReviewFields),
}

impl RecordFields {
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Note(_) => ContentKind::Note,
            Self::Review(_) => ContentKind::Review,
        }
    }

    #[must_use]
    pub fn game_id(&self) -> &str {
        match self {
            Self::Note(fields) => &fields.game_id,
            Self::Review(fields) => &fields.game_id,
        }
    }
}

/// A persisted record of either kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum ContentRecord {
    Note(QuickNote),
    Review(Review),
}

impl ContentRecord {
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Note(_) => ContentKind::Note,
            Self::Review(_) => ContentKind::Review,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Note(note) => &note.id,
            Self::Review(review) => &review.id,
        }
    }

    #[must_use]
    pub fn game_id(&self) -> &str {
        match self {
            Self::Note(note) => &note.game_id,
            Self::Review(review) => &review.game_id,
        }
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Note(note) => note.created_at,
            Self::Review(review) => review.created_at,
        }
    }
}
