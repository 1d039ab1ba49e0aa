//! Turns fallen actors into corpses after each turn.
//!
//! The core only drives hit points below zero; what death looks like is a
//! content decision. Corpses lose their fighter so they stop being melee
//! targets and stop taking turns.

use game_core::{Color, GameState, RenderOrder};

pub const PLAYER_DEATH_COLOR: Color = Color::new(255, 48, 48);
pub const ENEMY_DEATH_COLOR: Color = Color::new(255, 160, 48);
const CORPSE_COLOR: Color = Color::new(191, 0, 0);

/// Converts every dead actor that is not yet a corpse. Returns how many
/// actors fell since the last call.
pub fn reap_dead(state: &mut GameState) -> usize {
    let player = state.player;
    let mut fallen = Vec::new();

    for entity in state.entities.actors() {
        if !entity.is_alive() {
            fallen.push(entity.id);
        }
    }

    for id in &fallen {
        let Some(entity) = state.entities.get_mut(*id) else {
            continue;
        };
        let (text, color) = if *id == player {
            ("You died!".to_string(), PLAYER_DEATH_COLOR)
        } else {
            (format!("{} is dead!", entity.name), ENEMY_DEATH_COLOR)
        };

        entity.fighter = None;
        entity.glyph = '%';
        entity.color = CORPSE_COLOR;
        entity.blocks_movement = false;
        entity.render_order = RenderOrder::Corpse;
        entity.name = format!("remains of {}", entity.name);

        tracing::debug!(entity = %id, "actor died");
        state.messages.push(text, color);
    }

    fallen.len()
}
