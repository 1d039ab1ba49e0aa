//! Deterministic turn-resolution core for a grid roguelike.
//!
//! `game-core` defines the canonical rules (actions, engine, world state) and
//! exposes pure APIs that frontends drive. All state mutation flows through
//! [`engine::GameEngine`] or [`Action::perform`], and supporting crates depend
//! on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionError, ActionResult, ActionTransition, AttackOutcome, BlockCause, BumpAction,
    Capability, DropAction, Impossible, MeleeAction, MoveAction, PickupAction, UseItemAction,
    WaitAction,
};
pub use config::{GameConfig, MessagePalette};
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError, TurnOutcome};
pub use env::{
    ActionProvider, FovOracle, GameEnv, ItemActionContext, ItemOracle, MapDimensions, MapOracle,
    OracleError, SHROUD, StaticTile, TerrainKind, TileGraphic, TileGrid, WaitActionProvider,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Color, Consumable, EntitiesState, Entity, EntityId, Fighter, GameState, Inventory, ItemHandle,
    Message, MessageLog, Position, RenderOrder, SpatialMap, TurnState, VisibilityMap,
};
