//! Error types for action execution pipeline.

use core::convert::Infallible;

use crate::action::{ActionError, Impossible};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("wait action failed: {0}")]
    Wait(TransitionPhaseError<Infallible>),

    /// The bump could not be resolved to a concrete action.
    #[error("bump action failed: {0}")]
    Bump(ActionError),

    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<ActionError>),

    #[error("melee action failed: {0}")]
    Melee(TransitionPhaseError<ActionError>),

    #[error("pickup action failed: {0}")]
    Pickup(TransitionPhaseError<ActionError>),

    #[error("drop action failed: {0}")]
    Drop(TransitionPhaseError<ActionError>),

    #[error("use item action failed: {0}")]
    UseItem(TransitionPhaseError<ActionError>),
}

impl ExecuteError {
    /// The underlying action error, if the variant carries one.
    pub fn action_error(&self) -> Option<&ActionError> {
        match self {
            Self::Wait(_) => None,
            Self::Bump(error) => Some(error),
            Self::Move(err)
            | Self::Melee(err)
            | Self::Pickup(err)
            | Self::Drop(err)
            | Self::UseItem(err) => Some(&err.error),
        }
    }

    /// Returns the player-facing refusal when this is an ordinary outcome
    /// rather than a defect.
    pub fn impossible(&self) -> Option<&Impossible> {
        self.action_error().and_then(ActionError::as_impossible)
    }

    /// Pipeline stage that failed. A bump fails before any stage runs.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            Self::Wait(err) => Some(err.phase),
            Self::Bump(_) => None,
            Self::Move(err)
            | Self::Melee(err)
            | Self::Pickup(err)
            | Self::Drop(err)
            | Self::UseItem(err) => Some(err.phase),
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.action_error()
            .map_or(ErrorSeverity::Internal, GameError::severity)
    }

    fn error_code(&self) -> &'static str {
        self.action_error()
            .map_or("EXECUTE_WAIT", GameError::error_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityId;

    #[test]
    fn refusal_keeps_phase_and_validation_severity() {
        let err = ExecuteError::Move(TransitionPhaseError::new(
            TransitionPhase::PreValidate,
            ActionError::EntityNotFound(EntityId(7)),
        ));
        assert_eq!(err.phase(), Some(TransitionPhase::PreValidate));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "ACTION_ENTITY_NOT_FOUND");
        assert_eq!(
            err.to_string(),
            "move action failed: pre_validate failed: entity #7 not found"
        );
    }

    #[test]
    fn bump_errors_have_no_phase() {
        let err = ExecuteError::Bump(ActionError::EntityNotFound(EntityId(1)));
        assert_eq!(err.phase(), None);
        assert!(err.impossible().is_none());
    }
}
