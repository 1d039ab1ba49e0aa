use game_core::{Action, ActionProvider, EntityId, GameEnv, GameState};

/// Monsters that wake once they stand in the player's view.
///
/// Adjacent monsters strike; others step straight toward the player and
/// simply lose the turn when the step is refused.
pub struct HostileProvider;

impl ActionProvider for HostileProvider {
    fn provide_action(
        &self,
        entity: EntityId,
        state: &GameState,
        _env: &GameEnv<'_>,
    ) -> Option<Action> {
        let own = state.entities.get(entity)?.position;
        let target = state.player_position()?;

        if !state.visibility.is_visible(own) {
            return Some(Action::wait(entity));
        }

        let (dx, dy) = (target.x - own.x, target.y - own.y);
        if dx.abs().max(dy.abs()) <= 1 {
            Some(Action::melee(entity, dx, dy))
        } else {
            Some(Action::movement(entity, dx.signum(), dy.signum()))
        }
    }
}
