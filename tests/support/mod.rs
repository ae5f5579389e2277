//! In-memory collaborator doubles shared by the integration tests. Call
//! counters back the "zero network calls" assertions; the fail flags inject
//! outages.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use image::{DynamicImage, RgbImage};
use journal_core::content::games::{CatalogGame, GameCatalog};
use journal_core::content::records::{
    ContentKind, ContentRecord, Game, QuickNote, RecordFields, Review,
};
use journal_core::content::store::{ContentStore, ListOrder};
use journal_core::error::{PersistError, StoreError};
use journal_core::media::store::ObjectStore;
use journal_core::IncomingFile;
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    puts: AtomicUsize,
    deletes: AtomicUsize,
    fail_puts: AtomicBool,
    fail_deletes: AtomicBool,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn delete_count(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn fail_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, name: &str, bytes: Vec<u8>, _content_type: &str) -> Result<(), StoreError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected outage".to_string()));
        }
        self.objects.lock().unwrap().insert(name.to_string(), bytes);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected outage".to_string()));
        }
        // Missing objects are deleted successfully.
        self.objects.lock().unwrap().remove(name);
        Ok(())
    }

    fn public_url(&self, name: &str) -> String {
        format!("https://cdn.test/screenshots/{name}")
    }
}

#[derive(Default)]
pub struct MemoryContentStore {
    records: Mutex<Vec<ContentRecord>>,
    seq: AtomicUsize,
    creates: AtomicUsize,
    updates: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn seed(&self, record: ContentRecord) {
        self.records.lock().unwrap().push(record);
    }

    pub fn records(&self) -> Vec<ContentRecord> {
        self.records.lock().unwrap().clone()
    }

    fn materialize(&self, id: String, fields: &RecordFields) -> ContentRecord {
        let now = Utc::now();
        match fields {
            RecordFields::Note(f) => ContentRecord::Note(QuickNote {
                id,
                game_id: f.game_id.clone(),
                content: f.content.clone(),
                images: f.images.clone(),
                cover_image: f.cover_image.clone(),
                created_at: now,
            }),
            RecordFields::Review(f) => ContentRecord::Review(Review {
                id,
                game_id: f.game_id.clone(),
                title: f.title.clone(),
                content: f.content.clone(),
                rating: f.rating,
                platforms_played: f.platforms_played.clone(),
                playtime_hours: f.playtime_hours,
                pros: f.pros.clone(),
                cons: f.cons.clone(),
                images: f.images.clone(),
                cover_image: f.cover_image.clone(),
                created_at: now,
                updated_at: now,
            }),
        }
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn create(&self, fields: &RecordFields) -> Result<String, PersistError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistError::Unavailable("injected outage".to_string()));
        }
        let id = format!(
            "{}-{}",
            fields.kind().as_str(),
            self.seq.fetch_add(1, Ordering::SeqCst) + 1
        );
        let record = self.materialize(id.clone(), fields);
        self.records.lock().unwrap().push(record);
        Ok(id)
    }

    async fn update(&self, id: &str, fields: &RecordFields) -> Result<(), PersistError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistError::Unavailable("injected outage".to_string()));
        }
        let mut records = self.records.lock().unwrap();
        let Some(slot) = records.iter_mut().find(|r| r.id() == id) else {
            return Err(PersistError::NotFound(id.to_string()));
        };
        let created_at = slot.created_at();
        let mut replacement = self.materialize(id.to_string(), fields);
        match &mut replacement {
            ContentRecord::Note(note) => note.created_at = created_at,
            ContentRecord::Review(review) => review.created_at = created_at,
        }
        *slot = replacement;
        Ok(())
    }

    async fn delete(&self, kind: ContentKind, id: &str) -> Result<(), PersistError> {
        self.records
            .lock()
            .unwrap()
            .retain(|r| !(r.kind() == kind && r.id() == id));
        Ok(())
    }

    async fn list(
        &self,
        kind: ContentKind,
        game_id: Option<&str>,
        order: ListOrder,
    ) -> Result<Vec<ContentRecord>, PersistError> {
        let mut records: Vec<ContentRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.kind() == kind)
            .filter(|r| game_id.map_or(true, |g| r.game_id() == g))
            .cloned()
            .collect();
        match order {
            ListOrder::NewestFirst => records.sort_by_key(|r| std::cmp::Reverse(r.created_at())),
            ListOrder::OldestFirst => records.sort_by_key(|r| r.created_at()),
        }
        Ok(records)
    }
}

#[derive(Default)]
pub struct MemoryGameCatalog {
    games: Mutex<Vec<Game>>,
    creates: AtomicUsize,
}

impl MemoryGameCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GameCatalog for MemoryGameCatalog {
    async fn find_by_external_id(&self, external_id: i64) -> Result<Option<Game>, PersistError> {
        Ok(self
            .games
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.external_id == external_id)
            .cloned())
    }

    async fn create(&self, game: &CatalogGame) -> Result<Game, PersistError> {
        let n = self.creates.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Game {
            id: format!("game-{n}"),
            external_id: game.id,
            name: game.name.clone(),
            background_image: game.background_image.clone(),
            released: game.released.clone(),
            genres: game.genres.clone(),
            platforms: game.platforms.clone(),
            created_at: Utc::now(),
        };
        self.games.lock().unwrap().push(created.clone());
        Ok(created)
    }
}

/// A valid in-memory PNG selected from the UI.
pub fn png_file(name: &str, width: u32, height: u32) -> IncomingFile {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([40, 90, 160])));
    let mut out = Cursor::new(Vec::new());
    img.write_with_encoder(image::codecs::png::PngEncoder::new(&mut out))
        .unwrap();
    IncomingFile {
        name: name.to_string(),
        content_type: "image/png".to_string(),
        bytes: out.into_inner(),
    }
}

/// Declares itself an image but holds garbage bytes.
pub fn corrupt_file(name: &str) -> IncomingFile {
    IncomingFile {
        name: name.to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0xde, 0xad, 0xbe, 0xef],
    }
}

pub fn catalog_game() -> CatalogGame {
    CatalogGame {
        id: 3498,
        name: "Hollow Knight".to_string(),
        background_image: Some("https://img.test/hk.jpg".to_string()),
        released: Some("2017-02-24".to_string()),
        genres: vec!["Metroidvania".to_string()],
        platforms: vec!["PC".to_string(), "Nintendo Switch".to_string()],
    }
}
