//! Frontend configuration structures and loaders.
//!
//! This module contains settings shared across frontend implementations
//! (CLI, GUI, etc.), including the rules tunables handed to `game-core`.

use std::env;

use game_core::GameConfig;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub game: GameConfig,
    pub input: InputConfig,
}

impl FrontendConfig {
    pub const fn new(game: GameConfig, input: InputConfig) -> Self {
        Self { game, input }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_INVENTORY_CAPACITY` - Player inventory size, 1-26 (default: 26)
    /// - `DUNGEON_FOV_RADIUS` - Field-of-view radius in tiles (default: 8)
    /// - `DUNGEON_HISTORY_PAGE_STEP` - Lines scrolled by PageUp/PageDown (default: 10)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("DUNGEON_INVENTORY_CAPACITY") {
            config.game = config.game.with_inventory_capacity(capacity.max(1));
        }
        if let Some(radius) = read_env::<u32>("DUNGEON_FOV_RADIUS") {
            config.game = config.game.with_fov_radius(radius);
        }
        if let Some(step) = read_env::<usize>("DUNGEON_HISTORY_PAGE_STEP") {
            config.input.history_page_step = step.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct InputConfig {
    /// Lines moved by PageUp/PageDown in the history viewer.
    pub history_page_step: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            history_page_step: 10,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
