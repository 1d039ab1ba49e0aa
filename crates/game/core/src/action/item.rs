use crate::action::{ActionError, ActionResult, ActionTransition, Capability};
use crate::env::{GameEnv, ItemActionContext};
use crate::state::{EntityId, GameState, ItemHandle, Position};

/// Uses a held consumable, optionally aimed at a cell.
///
/// The effect itself is delegated to the item oracle; the core only checks
/// ownership and routes the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub actor: EntityId,
    pub item: EntityId,
    /// Target cell. `None` targets the actor's own cell.
    pub target: Option<Position>,
}

impl UseItemAction {
    pub fn new(actor: EntityId, item: EntityId, target: Option<Position>) -> Self {
        Self {
            actor,
            item,
            target,
        }
    }

    fn handle(&self, state: &GameState) -> Result<(ItemHandle, Position), ActionError> {
        let entity = state
            .entities
            .get(self.actor)
            .ok_or(ActionError::EntityNotFound(self.actor))?;
        let item = entity
            .inventory()
            .and_then(|inventory| inventory.get(self.item))
            .ok_or(ActionError::ItemNotHeld {
                actor: self.actor,
                item: self.item,
            })?;
        let consumable = item
            .consumable
            .ok_or(ActionError::missing(self.item, Capability::Consumable))?;
        Ok((consumable.handle, entity.position))
    }
}

impl ActionTransition for UseItemAction {
    type Error = ActionError;
    type Result = ActionResult;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        env.items()?;
        self.handle(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let oracle = env.items()?;
        let (handle, origin) = self.handle(state)?;

        let mut ctx = ItemActionContext {
            actor: self.actor,
            item: self.item,
            target: self.target.unwrap_or(origin),
            state,
            env: *env,
        };
        oracle.activate(handle, &mut ctx)?;

        Ok(ActionResult::UseItem { item: self.item })
    }
}
