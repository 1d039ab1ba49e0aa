//! Action execution errors.
//!
//! Two classes exist and are never mixed. [`Impossible`] is an ordinary
//! refusal the player sees as a message; the turn does not advance. Every
//! other [`ActionError`] variant is a defect in the caller or the state.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Why a destination cell refused an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BlockCause {
    OutOfBounds,
    Terrain,
    Occupied(EntityId),
}

/// Expected refusals. `Display` is the exact text shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Impossible {
    #[error("That way is blocked.")]
    PathBlocked {
        destination: Position,
        cause: BlockCause,
    },

    #[error("Nothing to attack.")]
    NothingToAttack { destination: Position },

    #[error("Your inventory is full.")]
    InventoryFull,

    #[error("There is nothing here to pick up.")]
    NothingToPickUp,

    #[error("Invalid entry.")]
    InvalidEntry,

    /// Refusal raised by an item effect, e.g. a potion used at full health.
    #[error("{0}")]
    Consumable(String),
}

impl Impossible {
    pub fn consumable(reason: impl Into<String>) -> Self {
        Self::Consumable(reason.into())
    }
}

impl GameError for Impossible {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PathBlocked { .. } => "IMPOSSIBLE_PATH_BLOCKED",
            Self::NothingToAttack { .. } => "IMPOSSIBLE_NOTHING_TO_ATTACK",
            Self::InventoryFull => "IMPOSSIBLE_INVENTORY_FULL",
            Self::NothingToPickUp => "IMPOSSIBLE_NOTHING_TO_PICK_UP",
            Self::InvalidEntry => "IMPOSSIBLE_INVALID_ENTRY",
            Self::Consumable(_) => "IMPOSSIBLE_CONSUMABLE",
        }
    }
}

/// Capability an action expected to find on an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    Fighter,
    Inventory,
    Consumable,
}

/// Errors that can occur while running an action transition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error(transparent)]
    Impossible(#[from] Impossible),

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("entity {entity} lacks the {capability} capability")]
    MissingCapability {
        entity: EntityId,
        capability: Capability,
    },

    #[error("item {item} is not held by {actor}")]
    ItemNotHeld { actor: EntityId, item: EntityId },

    #[error("entity {entity} expected at {expected} after moving")]
    OccupancyDesync {
        entity: EntityId,
        expected: Position,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ActionError {
    pub fn missing(entity: EntityId, capability: Capability) -> Self {
        Self::MissingCapability { entity, capability }
    }

    /// Returns the refusal when this error is an ordinary outcome.
    pub fn as_impossible(&self) -> Option<&Impossible> {
        match self {
            Self::Impossible(impossible) => Some(impossible),
            _ => None,
        }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Impossible(inner) => inner.severity(),
            Self::EntityNotFound(_) | Self::ItemNotHeld { .. } => ErrorSeverity::Validation,
            Self::MissingCapability { .. } | Self::OccupancyDesync { .. } => {
                ErrorSeverity::Internal
            }
            Self::Oracle(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Impossible(inner) => inner.error_code(),
            Self::EntityNotFound(_) => "ACTION_ENTITY_NOT_FOUND",
            Self::MissingCapability { .. } => "ACTION_MISSING_CAPABILITY",
            Self::ItemNotHeld { .. } => "ACTION_ITEM_NOT_HELD",
            Self::OccupancyDesync { .. } => "ACTION_OCCUPANCY_DESYNC",
            Self::Oracle(inner) => inner.error_code(),
        }
    }
}
