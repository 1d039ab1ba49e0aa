//! Mapping from core colors and graphics to ratatui styles.

use game_core::{Color as CoreColor, Entity, Message, TileGraphic};
use ratatui::style::{Color, Modifier, Style};

pub fn color(color: CoreColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

pub fn tile_style(graphic: &TileGraphic) -> Style {
    Style::default().fg(color(graphic.fg)).bg(color(graphic.bg))
}

/// Entity glyph drawn over the tile background underneath it.
pub fn entity_style(entity: &Entity, under: &TileGraphic) -> Style {
    let mut style = Style::default().fg(color(entity.color)).bg(color(under.bg));
    if entity.is_actor() && entity.is_alive() {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

pub fn message_style(message: &Message) -> Style {
    Style::default().fg(color(message.color))
}

/// Hit point readout, reddening as health drops.
pub fn hp_style(hp: i32, max_hp: i32) -> Style {
    let fg = if max_hp > 0 && hp * 4 <= max_hp {
        Color::LightRed
    } else if max_hp > 0 && hp * 2 <= max_hp {
        Color::Yellow
    } else {
        Color::LightGreen
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

pub fn overlay_border() -> Style {
    Style::default().fg(Color::White).bg(Color::Black)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_colors_follow_thresholds() {
        assert_eq!(hp_style(30, 30).fg, Some(Color::LightGreen));
        assert_eq!(hp_style(15, 30).fg, Some(Color::Yellow));
        assert_eq!(hp_style(7, 30).fg, Some(Color::LightRed));
        assert_eq!(hp_style(-2, 30).fg, Some(Color::LightRed));
    }
}
