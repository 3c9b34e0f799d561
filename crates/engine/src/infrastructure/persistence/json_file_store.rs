//! Character store backed by one JSON file per character.
//!
//! Layout: `<dir>/<character-id>.json`, pretty-printed. Writes go to a
//! temporary file first and are renamed into place.

use std::fs;
use std::path::{Path, PathBuf};

use charforge_domain::{CharacterDraft, CharacterId};

use crate::infrastructure::ports::{CharacterStore, RepoError};

const EXTENSION: &str = "json";

pub struct JsonFileCharacterStore {
    dir: PathBuf,
}

impl JsonFileCharacterStore {
    /// Open (and create if needed) the store directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, RepoError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| RepoError::io("create_dir", e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: CharacterId) -> PathBuf {
        self.dir.join(format!("{}.{}", id, EXTENSION))
    }

    fn read(path: &Path) -> Result<CharacterDraft, RepoError> {
        let text = fs::read_to_string(path).map_err(|e| RepoError::io("read", e))?;
        serde_json::from_str(&text).map_err(RepoError::serialization)
    }
}

impl CharacterStore for JsonFileCharacterStore {
    fn save(&self, character: &CharacterDraft) -> Result<(), RepoError> {
        let json = serde_json::to_string_pretty(character).map_err(RepoError::serialization)?;
        let path = self.path_for(character.id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| RepoError::io("write", e))?;
        fs::rename(&tmp, &path).map_err(|e| RepoError::io("rename", e))?;
        tracing::debug!(character_id = %character.id, path = %path.display(), "Character written");
        Ok(())
    }

    fn get(&self, id: CharacterId) -> Result<Option<CharacterDraft>, RepoError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        Self::read(&path).map(Some)
    }

    fn list(&self) -> Result<Vec<CharacterDraft>, RepoError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| RepoError::io("read_dir", e))?;
        let mut characters = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| RepoError::io("read_dir", e))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            match Self::read(&path) {
                Ok(character) => characters.push(character),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Skipping unreadable character file"
                ),
            }
        }
        characters.sort_by_key(|c| (c.created_at, c.id.to_string()));
        Ok(characters)
    }

    fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(RepoError::not_found("Character", id));
        }
        fs::remove_file(&path).map_err(|e| RepoError::io("delete", e))
    }
}
