//! The draft being edited.
//!
//! Owns exactly one [`DraftState`] and changes it only through
//! [`DraftStore::dispatch`], which applies each action in place with the
//! configured catalog, stat-edit policy and the current time.

use std::sync::Arc;

use charforge_domain::{
    Catalog, CharacterDraft, DraftAction, DraftContext, DraftState, StatEditPolicy,
};

use crate::infrastructure::ports::ClockPort;

pub struct DraftStore {
    state: DraftState,
    catalog: Arc<Catalog>,
    policy: StatEditPolicy,
    clock: Arc<dyn ClockPort>,
}

impl DraftStore {
    /// Start with a fresh draft.
    pub fn new(catalog: Arc<Catalog>, policy: StatEditPolicy, clock: Arc<dyn ClockPort>) -> Self {
        let state = DraftState::new(clock.now());
        Self {
            state,
            catalog,
            policy,
            clock,
        }
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    pub fn draft(&self) -> &CharacterDraft {
        self.state.draft()
    }

    pub fn has_rolled(&self) -> bool {
        self.state.has_rolled()
    }

    pub fn policy(&self) -> StatEditPolicy {
        self.policy
    }

    /// Apply one action and return the new state.
    pub fn dispatch(&mut self, action: DraftAction) -> &DraftState {
        let ctx = DraftContext {
            catalog: &self.catalog,
            policy: self.policy,
            now: self.clock.now(),
        };
        let kind = action.kind();
        self.state.apply(action, &ctx);

        tracing::debug!(
            character_id = %self.state.draft().id,
            action = kind,
            has_rolled = self.state.has_rolled(),
            "Draft updated"
        );
        &self.state
    }

    /// Swap in a previously saved draft and keep editing it.
    pub fn resume(&mut self, draft: CharacterDraft) -> &DraftState {
        tracing::debug!(character_id = %draft.id, "Draft resumed");
        self.state = DraftState::from_draft(draft);
        &self.state
    }
}
