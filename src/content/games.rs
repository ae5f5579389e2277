use crate::content::records::Game;
use crate::error::PersistError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A search hit from the external game catalog, as handed to
/// [`AuthoringSession::select_game`](crate::authoring::session::AuthoringSession::select_game).
/// Searching the catalog happens outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogGame {
    /// The catalog's own id; local game records are keyed by it.
    pub id: i64,
    pub name: String,
    pub background_image: Option<String>,
    pub released: Option<String>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
}

/// Locally persisted games, looked up by external catalog id.
#[async_trait]
pub trait GameCatalog: Send + Sync {
    async fn find_by_external_id(&self, external_id: i64) -> Result<Option<Game>, PersistError>;

    /// Persists a new game record built from a catalog hit.
    async fn create(&self, game: &CatalogGame) -> Result<Game, PersistError>;
}

/// Creates-or-reuses the local game record for a catalog hit. Idempotent:
/// look up by external id, create only on a miss.
///
/// # Errors
/// Propagates [`PersistError`] from the catalog.
pub async fn resolve_game(
    catalog: &dyn GameCatalog,
    candidate: &CatalogGame,
) -> Result<Game, PersistError> {
    if let Some(existing) = catalog.find_by_external_id(candidate.id).await? {
        return Ok(existing);
    }
    catalog.create(candidate).await
}
