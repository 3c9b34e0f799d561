//! The character draft and the transitions that build it up.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`CharacterDraft`] | Serializable record handed to stores and views |
//! | [`DraftState`] | Draft plus has-rolled flag and tracked magic floor |
//! | [`DraftAction`] | One discrete edit |
//! | [`reduce`] | `(state, action) -> state`, the only writer |

pub mod character_draft;
pub mod draft;

pub use character_draft::{CharacterDraft, PLACEHOLDER_NAME};
pub use draft::{reduce, DraftAction, DraftContext, DraftState, StatEditPolicy};
