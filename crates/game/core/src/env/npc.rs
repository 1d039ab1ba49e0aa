use super::GameEnv;
use crate::action::Action;
use crate::state::{EntityId, GameState};

/// Decision source for non-player actors.
///
/// Returning `None` skips the actor's turn.
pub trait ActionProvider {
    fn provide_action(
        &self,
        entity: EntityId,
        state: &GameState,
        env: &GameEnv<'_>,
    ) -> Option<Action>;
}

/// A simple action provider that always returns Wait action.
/// Useful for testing or as a fallback.
pub struct WaitActionProvider;

impl ActionProvider for WaitActionProvider {
    fn provide_action(
        &self,
        entity: EntityId,
        _state: &GameState,
        _env: &GameEnv<'_>,
    ) -> Option<Action> {
        Some(Action::wait(entity))
    }
}
