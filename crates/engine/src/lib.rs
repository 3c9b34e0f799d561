//! Charforge Engine library.
//!
//! Application layer around the character-creation rules in
//! `charforge-domain`.
//!
//! ## Structure
//!
//! - `infrastructure/` - Ports, adapters (clock, character stores) and env config
//! - `stores/` - Runtime state: the draft being edited
//! - `use_cases/` - User story orchestration over the draft and the stores

pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use infrastructure::config::EngineConfig;
pub use use_cases::CharacterCreation;
