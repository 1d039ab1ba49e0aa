use crate::action::Action;
use crate::env::GameEnv;
use crate::error::GameError;
use crate::state::EntityId;

use super::GameEngine;

/// Non-player turns and visibility refresh.
impl<'a> GameEngine<'a> {
    /// Gives every living non-player actor one action, in insertion order.
    ///
    /// The roster is captured up front; actors that die mid-round are
    /// skipped when their slot comes up. Failures are logged and swallowed
    /// so one misbehaving actor cannot stall the round.
    pub fn handle_enemy_turns(&mut self, env: GameEnv<'_>) {
        let player = self.state.player;
        let roster: Vec<EntityId> = self
            .state
            .entities
            .actors()
            .filter(|entity| entity.id != player && entity.is_alive())
            .map(|entity| entity.id)
            .collect();

        let provider = match env.provider() {
            Ok(provider) => provider,
            Err(err) => {
                if !roster.is_empty() {
                    tracing::warn!(target: "game_core::engine", error = %err, "skipping enemy turns");
                }
                return;
            }
        };

        for actor in roster {
            let still_alive = self
                .state
                .entities
                .get(actor)
                .is_some_and(|entity| entity.is_alive());
            if !still_alive {
                continue;
            }

            let Some(action) = provider.provide_action(actor, self.state, &env) else {
                continue;
            };
            if action.actor() != actor {
                tracing::warn!(
                    target: "game_core::engine",
                    actor = %actor,
                    issued_for = %action.actor(),
                    "provider returned action for another entity"
                );
                continue;
            }

            if let Err(err) = action.perform(self.state, &env) {
                match err.impossible() {
                    Some(reason) => tracing::debug!(
                        target: "game_core::engine",
                        actor = %actor,
                        action = action.as_snake_case(),
                        reason = %reason,
                        "enemy action refused"
                    ),
                    None => tracing::warn!(
                        target: "game_core::engine",
                        actor = %actor,
                        action = action.as_snake_case(),
                        code = err.error_code(),
                        severity = err.severity().as_str(),
                        phase = err.phase().map(|phase| phase.as_str()),
                        error = %err,
                        "enemy action failed"
                    ),
                }
            }
        }
    }

    /// Recomputes visible cells around the player and folds them into the
    /// explored set.
    pub fn update_fov(&mut self, env: GameEnv<'_>) {
        let (Ok(map), Ok(fov)) = (env.map(), env.fov()) else {
            tracing::trace!(target: "game_core::engine", "no fov oracle; visibility unchanged");
            return;
        };
        let Some(origin) = self.state.player_position() else {
            return;
        };

        let visibility = &mut self.state.visibility;
        visibility.clear_visible();
        fov.compute_fov(map, origin, env.config().fov_radius, visibility);
        visibility.merge_explored();
    }
}
