use crate::state::Color;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of items a freshly created inventory may hold.
    /// Clamped to [`GameConfig::MAX_INVENTORY_SLOTS`].
    pub inventory_capacity: usize,

    /// Radius handed to the field-of-view oracle after every player turn.
    pub fov_radius: u32,

    /// Colors used for messages appended by the core.
    pub palette: MessagePalette,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Hard upper bound for any inventory. One slot per selection letter a-z.
    pub const MAX_INVENTORY_SLOTS: usize = 26;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 26;
    pub const DEFAULT_FOV_RADIUS: u32 = 8;

    pub fn new() -> Self {
        Self {
            inventory_capacity: Self::DEFAULT_INVENTORY_CAPACITY,
            fov_radius: Self::DEFAULT_FOV_RADIUS,
            palette: MessagePalette::default(),
        }
    }

    pub fn with_inventory_capacity(mut self, capacity: usize) -> Self {
        self.inventory_capacity = capacity.min(Self::MAX_INVENTORY_SLOTS);
        self
    }

    pub fn with_fov_radius(mut self, radius: u32) -> Self {
        self.fov_radius = radius;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Message colors keyed by what produced the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessagePalette {
    pub text: Color,
    pub player_attack: Color,
    pub enemy_attack: Color,
    pub impossible: Color,
    pub invalid: Color,
    pub welcome: Color,
    pub health_recovered: Color,
}

impl Default for MessagePalette {
    fn default() -> Self {
        Self {
            text: Color::WHITE,
            player_attack: Color::new(0xE0, 0xE0, 0xE0),
            enemy_attack: Color::new(0xFF, 0xC0, 0xC0),
            impossible: Color::new(0x80, 0x80, 0x80),
            invalid: Color::new(0xFF, 0xFF, 0x00),
            welcome: Color::new(0x20, 0xA0, 0xFF),
            health_recovered: Color::new(0x00, 0xFF, 0x00),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_capacity_is_clamped_to_letter_slots() {
        let config = GameConfig::new().with_inventory_capacity(40);
        assert_eq!(config.inventory_capacity, GameConfig::MAX_INVENTORY_SLOTS);
    }
}
