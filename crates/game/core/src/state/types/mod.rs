//! Plain data types that make up [`GameState`](super::GameState).
mod common;
mod entities;
mod inventory;

pub use common::{Color, EntityId, ItemHandle, Position};
pub use entities::{Consumable, EntitiesState, Entity, Fighter, RenderOrder};
pub use inventory::Inventory;
