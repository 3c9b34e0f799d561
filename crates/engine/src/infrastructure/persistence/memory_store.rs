//! In-memory character store.

use dashmap::DashMap;

use charforge_domain::{CharacterDraft, CharacterId};

use crate::infrastructure::ports::{CharacterStore, RepoError};

/// Characters held for the life of the process.
#[derive(Default)]
pub struct InMemoryCharacterStore {
    characters: DashMap<CharacterId, CharacterDraft>,
}

impl InMemoryCharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl CharacterStore for InMemoryCharacterStore {
    fn save(&self, character: &CharacterDraft) -> Result<(), RepoError> {
        self.characters.insert(character.id, character.clone());
        Ok(())
    }

    fn get(&self, id: CharacterId) -> Result<Option<CharacterDraft>, RepoError> {
        Ok(self.characters.get(&id).map(|entry| entry.value().clone()))
    }

    fn list(&self) -> Result<Vec<CharacterDraft>, RepoError> {
        let mut characters: Vec<_> = self
            .characters
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        characters.sort_by_key(|c| (c.created_at, c.id.to_string()));
        Ok(characters)
    }

    fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        self.characters
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Character", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn draft_at(minutes: i64) -> CharacterDraft {
        let base = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        CharacterDraft::new(base + Duration::minutes(minutes))
    }

    #[test]
    fn save_then_get() {
        let store = InMemoryCharacterStore::new();
        let mut draft = draft_at(0);
        draft.name = "Felix".to_string();
        store.save(&draft).unwrap();

        assert_eq!(store.get(draft.id).unwrap(), Some(draft.clone()));
        assert_eq!(store.len(), 1);

        draft.name = "Felix Jaeger".to_string();
        store.save(&draft).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(draft.id).unwrap().unwrap().name, "Felix Jaeger");
    }

    #[test]
    fn list_is_oldest_first() {
        let store = InMemoryCharacterStore::new();
        let newer = draft_at(10);
        let older = draft_at(0);
        store.save(&newer).unwrap();
        store.save(&older).unwrap();

        let ids: Vec<_> = store.list().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![older.id, newer.id]);
    }

    #[test]
    fn delete_missing_is_not_found() {
        let store = InMemoryCharacterStore::new();
        let draft = draft_at(0);
        assert!(store.delete(draft.id).unwrap_err().is_not_found());

        store.save(&draft).unwrap();
        store.delete(draft.id).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get(draft.id).unwrap(), None);
    }
}
