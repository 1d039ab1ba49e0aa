//! Action domain.
//!
//! Every command an entity can issue is an [`Action`]: a closed enum over
//! concrete transitions. Each transition runs through the same three-phase
//! pipeline (`pre_validate` → `apply` → `post_validate`) driven by the
//! engine, which tags failures with the phase that produced them.
//!
//! # Module Structure
//!
//! - `error`: refusal and defect types ([`Impossible`], [`ActionError`])
//! - `wait`: no-op turn
//! - `movement`: relative step with blocking checks
//! - `combat`: melee against the actor in an adjacent cell
//! - `bump`: resolves a direction to melee or movement
//! - `inventory`: pickup and drop
//! - `item`: item use routed through the item oracle

mod bump;
mod combat;
pub mod error;
mod inventory;
mod item;
mod movement;
mod wait;

pub use bump::BumpAction;
pub use combat::{AttackOutcome, MeleeAction};
pub use error::{ActionError, BlockCause, Capability, Impossible};
pub use inventory::{DropAction, PickupAction};
pub use item::UseItemAction;
pub use movement::MoveAction;
pub use wait::WaitAction;

use crate::engine::ExecuteError;
use crate::env::GameEnv;
use crate::state::{EntityId, GameState, Position};

/// Defines how a concrete action variant mutates game state.
///
/// Hooks receive read-only collaborators through [`GameEnv`]. Validation
/// hooks must stay side-effect free.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Every command an entity can issue.
///
/// Frontends translate directional input into [`Action::bump`]; movement
/// and melee are chosen by the bump at perform time.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Wait(WaitAction),
    Bump(BumpAction),
    Move(MoveAction),
    Melee(MeleeAction),
    Pickup(PickupAction),
    Drop(DropAction),
    UseItem(UseItemAction),
    /// Ends the session. Carries no game logic.
    Escape { actor: EntityId },
}

impl Action {
    pub fn wait(actor: EntityId) -> Self {
        Self::Wait(WaitAction::new(actor))
    }

    pub fn bump(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self::Bump(BumpAction::new(actor, dx, dy))
    }

    pub fn movement(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self::Move(MoveAction::new(actor, dx, dy))
    }

    pub fn melee(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self::Melee(MeleeAction::new(actor, dx, dy))
    }

    pub fn pickup(actor: EntityId) -> Self {
        Self::Pickup(PickupAction::new(actor))
    }

    pub fn drop_item(actor: EntityId, item: EntityId) -> Self {
        Self::Drop(DropAction::new(actor, item))
    }

    pub fn use_item(actor: EntityId, item: EntityId, target: Option<Position>) -> Self {
        Self::UseItem(UseItemAction::new(actor, item, target))
    }

    pub fn escape(actor: EntityId) -> Self {
        Self::Escape { actor }
    }

    pub fn actor(&self) -> EntityId {
        match self {
            Self::Wait(action) => action.actor(),
            Self::Bump(action) => action.actor,
            Self::Move(action) => action.actor(),
            Self::Melee(action) => action.actor(),
            Self::Pickup(action) => action.actor(),
            Self::Drop(action) => action.actor(),
            Self::UseItem(action) => action.actor(),
            Self::Escape { actor } => *actor,
        }
    }

    /// Returns the canonical snake_case identifier for this action.
    pub fn as_snake_case(&self) -> &'static str {
        self.into()
    }

    /// Runs the action against `state`.
    ///
    /// Refusals come back as an [`ExecuteError`] whose inner error is
    /// [`ActionError::Impossible`]; callers decide whether to show them.
    pub fn perform(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<ActionResult, ExecuteError> {
        crate::engine::execute_transition(self, state, env)
    }
}

/// Result of a successfully performed action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Wait,
    Move { from: Position, to: Position },
    Attack(AttackOutcome),
    Pickup { item: EntityId },
    Drop { item: EntityId },
    UseItem { item: EntityId },
    /// The session should end.
    Terminate,
}

impl ActionResult {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_names_follow_variants() {
        let actor = EntityId(0);
        assert_eq!(Action::wait(actor).as_snake_case(), "wait");
        assert_eq!(Action::bump(actor, 1, 0).as_snake_case(), "bump");
        assert_eq!(
            Action::use_item(actor, EntityId(1), None).as_snake_case(),
            "use_item"
        );
        assert_eq!(Action::escape(actor).actor(), actor);
    }
}
