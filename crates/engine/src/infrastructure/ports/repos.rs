//! Repository ports.

use charforge_domain::{CharacterDraft, CharacterId};

use super::RepoError;

// =============================================================================
// Character Store
// =============================================================================

/// Saved characters keyed by id. The domain never sees how they are kept.
#[cfg_attr(test, mockall::automock)]
pub trait CharacterStore: Send + Sync {
    /// Insert or overwrite.
    fn save(&self, character: &CharacterDraft) -> Result<(), RepoError>;
    fn get(&self, id: CharacterId) -> Result<Option<CharacterDraft>, RepoError>;
    /// All saved characters, oldest first.
    fn list(&self) -> Result<Vec<CharacterDraft>, RepoError>;
    /// Fails with `NotFound` when nothing is stored under `id`.
    fn delete(&self, id: CharacterId) -> Result<(), RepoError>;
}
