//! Traits describing collaborators the core consults but does not implement.
//!
//! Oracles expose static map geometry, item effects, field-of-view, and
//! non-player decisions. The [`GameEnv`] aggregate bundles them so actions
//! and the engine can reach everything they need through one explicit
//! handle instead of back-pointers.
mod error;
mod fov;
mod items;
mod map;
mod npc;

pub use error::OracleError;
pub use fov::FovOracle;
pub use items::{ItemActionContext, ItemOracle};
pub use map::{MapDimensions, MapOracle, SHROUD, StaticTile, TerrainKind, TileGraphic, TileGrid};
pub use npc::{ActionProvider, WaitActionProvider};

use crate::config::GameConfig;
use crate::state::Color;

/// Aggregates read-only collaborators required by actions and the engine.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    map: Option<&'a dyn MapOracle>,
    items: Option<&'a dyn ItemOracle>,
    provider: Option<&'a dyn ActionProvider>,
    fov: Option<&'a dyn FovOracle>,
    attack_color: Color,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self {
            config,
            map: None,
            items: None,
            provider: None,
            fov: None,
            attack_color: config.palette.player_attack,
        }
    }

    pub fn with_map(mut self, map: &'a dyn MapOracle) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_items(mut self, items: &'a dyn ItemOracle) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_provider(mut self, provider: &'a dyn ActionProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_fov(mut self, fov: &'a dyn FovOracle) -> Self {
        self.fov = Some(fov);
        self
    }

    /// Color for attack messages. Chosen by the caller per acting entity.
    pub fn with_attack_color(mut self, color: Color) -> Self {
        self.attack_color = color;
        self
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn attack_color(&self) -> Color {
        self.attack_color
    }

    /// Returns the MapOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` if no map oracle was provided.
    pub fn map(&self) -> Result<&'a dyn MapOracle, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the ActionProvider, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ProviderNotAvailable` if no provider was supplied.
    pub fn provider(&self) -> Result<&'a dyn ActionProvider, OracleError> {
        self.provider.ok_or(OracleError::ProviderNotAvailable)
    }

    /// Returns the FovOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::FovNotAvailable` if no FOV oracle was provided.
    pub fn fov(&self) -> Result<&'a dyn FovOracle, OracleError> {
        self.fov.ok_or(OracleError::FovNotAvailable)
    }
}
