//! Storage operations for flashcards
//!
//! Layout under the data directory:
//! ```text
//! <data_dir>/
//! ├── settings.toml        # optional, see crate::config
//! ├── cards/
//! │   └── {card-id}.json   # one flashcard per file
//! └── attempts.json        # quiz attempt log, see crate::quiz
//! ```

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use super::models::Flashcard;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Card not found: {0}")]
    CardNotFound(Uuid),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// File-backed store for the flashcard collection
pub struct CardStore {
    base_path: PathBuf,
}

impl CardStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory (e.g. ~/.local/share/cardforge)
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("cardforge"))
            .ok_or(StoreError::DataDirNotFound)
    }

    fn cards_dir(&self) -> PathBuf {
        self.base_path.join("cards")
    }

    fn card_path(&self, card_id: Uuid) -> PathBuf {
        self.cards_dir().join(format!("{}.json", card_id))
    }

    /// Initialize storage directories
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(self.cards_dir())?;
        Ok(())
    }

    /// List all cards sorted by display position
    pub fn list_cards(&self) -> Result<Vec<Flashcard>> {
        let cards_dir = self.cards_dir();
        if !cards_dir.exists() {
            return Ok(Vec::new());
        }

        let mut cards = Vec::new();
        for entry in fs::read_dir(&cards_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                let content = fs::read_to_string(&path)?;
                let card: Flashcard = serde_json::from_str(&content)?;
                cards.push(card);
            }
        }

        cards.sort_by_key(|c| c.position);
        Ok(cards)
    }

    /// Get a specific card
    pub fn get_card(&self, card_id: Uuid) -> Result<Flashcard> {
        let card_path = self.card_path(card_id);
        if !card_path.exists() {
            return Err(StoreError::CardNotFound(card_id));
        }

        let content = fs::read_to_string(&card_path)?;
        let card: Flashcard = serde_json::from_str(&content)?;
        Ok(card)
    }

    /// Persist freshly generated cards, assigning the next display numbers
    pub fn add_cards(&self, cards: &mut [Flashcard]) -> Result<()> {
        self.init()?;

        let mut next = self
            .list_cards()?
            .last()
            .map(|c| c.position)
            .unwrap_or(0);

        for card in cards.iter_mut() {
            next += 1;
            card.position = next;
            self.write_card(card)?;
        }

        log::info!("Stored {} new cards", cards.len());
        Ok(())
    }

    /// Update an existing card
    pub fn update_card(&self, card: &Flashcard) -> Result<()> {
        if !self.card_path(card.id).exists() {
            return Err(StoreError::CardNotFound(card.id));
        }
        self.write_card(card)
    }

    /// Mark a card as read; returns the updated card
    pub fn mark_read(&self, card_id: Uuid) -> Result<Flashcard> {
        let mut card = self.get_card(card_id)?;
        if !card.is_read {
            card.is_read = true;
            card.updated_at = Utc::now();
            self.write_card(&card)?;
        }
        Ok(card)
    }

    /// Case-insensitive keyword search over prompt and masked term
    pub fn search(&self, keyword: &str) -> Result<Vec<Flashcard>> {
        let needle = keyword.to_lowercase();
        let mut cards = self.list_cards()?;
        cards.retain(|c| {
            c.prompt.to_lowercase().contains(&needle)
                || c.masked_term.to_lowercase().contains(&needle)
        });
        Ok(cards)
    }

    /// Delete exactly the given cards, then renumber survivors from 1.
    ///
    /// Fails with `CardNotFound` before touching anything if any id is
    /// unknown.
    pub fn delete_cards(&self, card_ids: &[Uuid]) -> Result<usize> {
        for card_id in card_ids {
            if !self.card_path(*card_id).exists() {
                return Err(StoreError::CardNotFound(*card_id));
            }
        }

        for card_id in card_ids {
            fs::remove_file(self.card_path(*card_id))?;
        }

        self.renumber()?;
        Ok(card_ids.len())
    }

    /// Renumber positions sequentially after deletions
    fn renumber(&self) -> Result<()> {
        let mut cards = self.list_cards()?;
        for (i, card) in cards.iter_mut().enumerate() {
            let position = (i + 1) as u32;
            if card.position != position {
                card.position = position;
                self.write_card(card)?;
            }
        }
        Ok(())
    }

    fn write_card(&self, card: &Flashcard) -> Result<()> {
        fs::write(
            self.card_path(card.id),
            serde_json::to_string_pretty(card)?,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> (tempfile::TempDir, CardStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CardStore::new(dir.path().to_path_buf());
        store.init().unwrap();
        (dir, store)
    }

    fn sample_card(term: &str) -> Flashcard {
        Flashcard::new(
            "The _____ was mentioned in the notes".to_string(),
            term.to_string(),
            format!("The {} was mentioned in the notes", term),
        )
    }

    fn add(store: &CardStore, terms: &[&str]) -> Vec<Flashcard> {
        let mut cards: Vec<Flashcard> = terms.iter().map(|t| sample_card(t)).collect();
        store.add_cards(&mut cards).unwrap();
        cards
    }

    #[test]
    fn test_add_assigns_sequential_positions() {
        let (_dir, store) = test_store();
        add(&store, &["alpha", "beta"]);
        add(&store, &["gamma"]);

        let cards = store.list_cards().unwrap();
        let positions: Vec<u32> = cards.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_delete_removes_exactly_given_ids_and_renumbers() {
        let (_dir, store) = test_store();
        let cards = add(&store, &["alpha", "beta", "gamma", "delta"]);

        let deleted = store.delete_cards(&[cards[1].id, cards[3].id]).unwrap();
        assert_eq!(deleted, 2);

        let rest = store.list_cards().unwrap();
        let terms: Vec<&str> = rest.iter().map(|c| c.masked_term.as_str()).collect();
        assert_eq!(terms, vec!["alpha", "gamma"]);

        let positions: Vec<u32> = rest.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn test_delete_unknown_id_fails_without_side_effects() {
        let (_dir, store) = test_store();
        let cards = add(&store, &["alpha"]);

        let result = store.delete_cards(&[cards[0].id, Uuid::new_v4()]);
        assert!(matches!(result, Err(StoreError::CardNotFound(_))));
        assert_eq!(store.list_cards().unwrap().len(), 1);
    }

    #[test]
    fn test_mark_read() {
        let (_dir, store) = test_store();
        let cards = add(&store, &["alpha"]);
        assert!(!cards[0].is_read);

        let updated = store.mark_read(cards[0].id).unwrap();
        assert!(updated.is_read);
        assert!(store.get_card(cards[0].id).unwrap().is_read);
    }

    #[test]
    fn test_search_matches_prompt_and_term() {
        let (_dir, store) = test_store();
        add(&store, &["Photosynthesis", "ribosome"]);

        let hits = store.search("PHOTO").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].masked_term, "Photosynthesis");

        // "notes" appears in every prompt
        assert_eq!(store.search("notes").unwrap().len(), 2);
    }

    #[test]
    fn test_get_missing_card() {
        let (_dir, store) = test_store();
        assert!(matches!(
            store.get_card(Uuid::new_v4()),
            Err(StoreError::CardNotFound(_))
        ));
    }
}
