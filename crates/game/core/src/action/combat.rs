use crate::action::{ActionError, ActionResult, ActionTransition, Capability, Impossible};
use crate::env::GameEnv;
use crate::state::{EntityId, Fighter, GameState, Position};

/// Melee strike against the actor standing at `(dx, dy)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

/// What a melee strike did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub target: EntityId,
    /// Hit points removed. Zero when defense absorbed the blow.
    pub damage: i32,
}

impl MeleeAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    fn attacker<'s>(&self, state: &'s GameState) -> Result<(&'s str, Fighter, Position), ActionError> {
        let entity = state
            .entities
            .get(self.actor)
            .ok_or(ActionError::EntityNotFound(self.actor))?;
        let fighter = entity
            .fighter
            .ok_or(ActionError::missing(self.actor, Capability::Fighter))?;
        Ok((&entity.name, fighter, entity.position))
    }

    fn target_id(&self, state: &GameState, origin: Position) -> Result<EntityId, ActionError> {
        let Some(destination) = origin.checked_offset(self.dx, self.dy) else {
            return Err(Impossible::NothingToAttack {
                destination: origin.saturating_offset(self.dx, self.dy),
            }
            .into());
        };
        state
            .entities
            .actor_at(destination)
            .map(|target| target.id)
            .ok_or_else(|| Impossible::NothingToAttack { destination }.into())
    }
}

impl ActionTransition for MeleeAction {
    type Error = ActionError;
    type Result = ActionResult;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let (_, _, origin) = self.attacker(state)?;
        self.target_id(state, origin)?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let (attacker_name, attacker, origin) = self.attacker(state)?;
        let attack_desc = format!("{} attacks", capitalize(attacker_name));
        let target_id = self.target_id(state, origin)?;

        let target = state
            .entities
            .get_mut(target_id)
            .ok_or(ActionError::EntityNotFound(target_id))?;
        let target_name = target.name.clone();
        let defender = target
            .fighter
            .as_mut()
            .ok_or(ActionError::missing(target_id, Capability::Fighter))?;

        let damage = attacker.power - defender.defense;
        let text = if damage > 0 {
            defender.hp -= damage;
            format!("{attack_desc} {target_name} for {damage} hit points.")
        } else {
            format!("{attack_desc} {target_name} but does no damage.")
        };
        state.messages.push(text, env.attack_color());

        tracing::trace!(
            target: "game_core::action",
            attacker = %self.actor,
            target = %target_id,
            damage = damage.max(0),
            "melee resolved"
        );

        Ok(ActionResult::Attack(AttackOutcome {
            target: target_id,
            damage: damage.max(0),
        }))
    }
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
