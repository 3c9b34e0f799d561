//! Character store adapters.

mod json_file_store;
mod memory_store;

pub use json_file_store::JsonFileCharacterStore;
pub use memory_store::InMemoryCharacterStore;
