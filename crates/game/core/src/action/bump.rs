use crate::action::{Action, ActionError};
use crate::state::{EntityId, GameState};

/// Directional intent issued by the input layer.
///
/// Resolved when performed: melee if the destination holds a blocking
/// entity, movement otherwise. Carries no logic of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BumpAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl BumpAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    /// Picks the concrete action against the current state.
    pub fn resolve(&self, state: &GameState) -> Result<Action, ActionError> {
        let origin = state
            .entities
            .get(self.actor)
            .map(|entity| entity.position)
            .ok_or(ActionError::EntityNotFound(self.actor))?;
        let blocked = origin
            .checked_offset(self.dx, self.dy)
            .is_some_and(|destination| state.entities.blocking_entity_at(destination).is_some());

        if blocked {
            Ok(Action::melee(self.actor, self.dx, self.dy))
        } else {
            Ok(Action::movement(self.actor, self.dx, self.dy))
        }
    }
}
