//! In-memory state storage modules.
//!
//! Stores manage runtime state that is not persisted on every change:
//! - `DraftStore` - The character draft currently being edited

pub mod draft;

pub use draft::DraftStore;
