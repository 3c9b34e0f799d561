//! Character creation errors.

use charforge_domain::{CharacterId, DomainError};

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum CharacterCreationError {
    #[error("Unknown race: {0}")]
    UnknownRace(String),
    #[error("Unknown career: {0}")]
    UnknownCareer(String),
    #[error("Choose a race first")]
    RaceNotSelected,
    #[error("Roll characteristics, wounds and fate before completing the character")]
    NotRolled,
    #[error("Character not found: {0}")]
    NotFound(CharacterId),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}
