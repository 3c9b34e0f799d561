//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Character persistence (could swap JSON files -> a database)
//! - Clock (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::CharacterStore;
pub use testing::ClockPort;

#[cfg(test)]
pub use repos::MockCharacterStore;
#[cfg(test)]
pub use testing::MockClockPort;
