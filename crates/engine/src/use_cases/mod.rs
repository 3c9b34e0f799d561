//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod character_creation;

pub use character_creation::{CharacterCreation, CharacterCreationError};
