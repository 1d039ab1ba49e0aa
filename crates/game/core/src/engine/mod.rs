//! Turn resolution and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It runs
//! the player's action through the transition phases, converts refusals into
//! log messages, and on success lets every other living actor act before
//! refreshing visibility.

mod errors;
mod transition;
mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub(crate) use transition::execute_transition;

use crate::action::{Action, ActionResult, Impossible};
use crate::env::GameEnv;
use crate::error::GameError;
use crate::state::GameState;

/// What a call to [`GameEngine::process_player_action`] did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The action succeeded and the world advanced one turn.
    Advanced(ActionResult),
    /// The action was refused. The reason was logged; nothing else changed.
    Rejected(Impossible),
    /// The player asked to end the session.
    Terminated,
}

impl TurnOutcome {
    pub fn advanced(&self) -> bool {
        matches!(self, Self::Advanced(_))
    }
}

/// Game engine that resolves turns against a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes a single action with no turn bookkeeping.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ActionResult, ExecuteError> {
        action.perform(self.state, &env)
    }

    /// Runs one player command to completion.
    ///
    /// On success the turn counter advances, every other living actor takes
    /// a turn, and visibility is recomputed around the player. A refusal is
    /// appended to the message log in the impossible color and the world
    /// stays as it was. Defects propagate.
    pub fn process_player_action(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<TurnOutcome, ExecuteError> {
        let palette = env.config().palette;
        let env = env.with_attack_color(palette.player_attack);

        let result = match action.perform(self.state, &env) {
            Ok(ActionResult::Terminate) => {
                tracing::info!(target: "game_core::engine", "player requested exit");
                return Ok(TurnOutcome::Terminated);
            }
            Ok(result) => result,
            Err(err) => {
                let Some(impossible) = err.impossible().cloned() else {
                    tracing::error!(
                        target: "game_core::engine",
                        action = action.as_snake_case(),
                        code = err.error_code(),
                        severity = err.severity().as_str(),
                        phase = err.phase().map(|phase| phase.as_str()),
                        error = %err,
                        "player action failed"
                    );
                    return Err(err);
                };
                tracing::debug!(
                    target: "game_core::engine",
                    action = action.as_snake_case(),
                    reason = %impossible,
                    "player action refused"
                );
                self.state
                    .messages
                    .push(impossible.to_string(), palette.impossible);
                return Ok(TurnOutcome::Rejected(impossible));
            }
        };

        self.state.turn.nonce += 1;
        tracing::debug!(
            target: "game_core::engine",
            action = action.as_snake_case(),
            nonce = self.state.turn.nonce,
            "player action resolved"
        );

        self.handle_enemy_turns(env.with_attack_color(palette.enemy_attack));
        self.update_fov(env);

        Ok(TurnOutcome::Advanced(result))
    }
}
