//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action variant to its transition.
///
/// Bumps are resolved against the current state first and then executed
/// as the melee or movement they stand for.
pub(crate) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Wait(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Wait)?;
            Ok(ActionResult::Wait)
        }
        Action::Bump(bump) => {
            let resolved = bump.resolve(state).map_err(ExecuteError::Bump)?;
            execute_transition(&resolved, state, env)
        }
        Action::Move(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Move)
        }
        Action::Melee(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Melee)
        }
        Action::Pickup(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Pickup)
        }
        Action::Drop(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Drop)
        }
        Action::UseItem(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::UseItem)
        }
        Action::Escape { .. } => Ok(ActionResult::Terminate),
    }
}
