use crate::action::{ActionError, ActionResult, ActionTransition, BlockCause, Impossible};
use crate::env::GameEnv;
use crate::state::{EntityId, GameState, Position};

/// Relative step by `(dx, dy)`.
///
/// Issued by [`BumpAction`](super::BumpAction) when the destination holds
/// no blocking entity, or directly by non-player decision sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MoveAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    fn origin(&self, state: &GameState) -> Result<Position, ActionError> {
        state
            .entities
            .get(self.actor)
            .map(|entity| entity.position)
            .ok_or(ActionError::EntityNotFound(self.actor))
    }
}

impl ActionTransition for MoveAction {
    type Error = ActionError;
    type Result = ActionResult;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let origin = self.origin(state)?;
        let Some(destination) = origin.checked_offset(self.dx, self.dy) else {
            return Err(Impossible::PathBlocked {
                destination: origin.saturating_offset(self.dx, self.dy),
                cause: BlockCause::OutOfBounds,
            }
            .into());
        };
        let spatial = state.spatial(env.map()?);

        let cause = if !spatial.in_bounds(destination) {
            Some(BlockCause::OutOfBounds)
        } else if !spatial.is_walkable(destination) {
            Some(BlockCause::Terrain)
        } else {
            spatial
                .blocking_entity_at(destination)
                .map(|blocker| BlockCause::Occupied(blocker.id))
        };

        match cause {
            Some(cause) => Err(Impossible::PathBlocked { destination, cause }.into()),
            None => Ok(()),
        }
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let entity = state
            .entities
            .get_mut(self.actor)
            .ok_or(ActionError::EntityNotFound(self.actor))?;
        let from = entity.position;
        entity.position = from.offset(self.dx, self.dy);

        Ok(ActionResult::Move {
            from,
            to: entity.position,
        })
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let entity = state
            .entities
            .get(self.actor)
            .ok_or(ActionError::EntityNotFound(self.actor))?;
        let position = entity.position;

        let shares_cell = entity.blocks_movement
            && state.entities.iter().any(|other| {
                other.id != self.actor && other.blocks_movement && other.position == position
            });
        if shares_cell || !env.map()?.is_walkable(position) {
            return Err(ActionError::OccupancyDesync {
                entity: self.actor,
                expected: position,
            });
        }

        Ok(())
    }
}
