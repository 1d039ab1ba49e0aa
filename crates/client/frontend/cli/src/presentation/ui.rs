//! Frame rendering with ratatui.
//!
//! The map is drawn unbordered at the top-left corner so terminal cells and
//! map cells share coordinates. Below it sit a one-line status bar and the
//! message panel. Ask-user modes draw an overlay on top of the map.
use std::collections::HashMap;

use anyhow::Result;
use client_frontend_core::{HistoryCursor, InputMode};
use game_core::{Entity, GameState, MapOracle, Position, SHROUD};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListDirection, ListItem, Paragraph},
};

use super::{terminal::Tui, theme};
use crate::config::UiConfig;

const INVENTORY_WIDTH: u16 = 40;

/// Everything one frame needs, borrowed from the running session.
pub struct Screen<'a> {
    pub map: &'a dyn MapOracle,
    pub state: &'a GameState,
    pub mode: &'a InputMode,
    pub mouse: Position,
    pub ui: &'a UiConfig,
}

pub fn render(terminal: &mut Tui, screen: &Screen<'_>) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, screen))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, screen: &Screen<'_>) {
    let dimensions = screen.map.dimensions();
    let map_height = u16::try_from(dimensions.height).unwrap_or(u16::MAX);
    let map_width = u16::try_from(dimensions.width).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(map_height),
            Constraint::Length(1),
            Constraint::Length(screen.ui.message_panel_height),
            Constraint::Min(0),
        ])
        .split(frame.area());

    let map_area = Rect {
        width: map_width.min(chunks[0].width),
        ..chunks[0]
    };

    render_map(frame, map_area, screen);
    render_status(frame, chunks[1], screen);
    render_messages(frame, chunks[2], screen);

    match screen.mode {
        InputMode::Main => {}
        InputMode::InventoryActivate => {
            render_inventory(frame, map_area, screen, "Select an item to use")
        }
        InputMode::InventoryDrop => {
            render_inventory(frame, map_area, screen, "Select an item to drop")
        }
        InputMode::HistoryViewer(cursor) => render_history(frame, map_area, screen, cursor),
        InputMode::GameOver => render_game_over(frame, map_area),
    }
}

fn render_map(frame: &mut Frame, area: Rect, screen: &Screen<'_>) {
    let visibility = &screen.state.visibility;
    let overlay = visible_entities(screen.state);

    let mut rows = Vec::with_capacity(usize::from(area.height));
    for y in 0..i32::from(area.height) {
        let spans = (0..i32::from(area.width))
            .map(|x| {
                let position = Position::new(x, y);
                let graphic = match screen.map.tile(position) {
                    Some(tile) if visibility.is_visible(position) => tile.light,
                    Some(tile) if visibility.is_explored(position) => tile.dark,
                    _ => SHROUD,
                };

                match overlay.get(&position) {
                    Some(entity) => Span::styled(
                        entity.glyph.to_string(),
                        theme::entity_style(entity, &graphic),
                    ),
                    None => Span::styled(graphic.glyph.to_string(), theme::tile_style(&graphic)),
                }
            })
            .collect::<Vec<_>>();
        rows.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(rows), area);
}

/// Topmost visible entity per cell. Ties in render order go to the entity
/// inserted last.
fn visible_entities(state: &GameState) -> HashMap<Position, &Entity> {
    let mut visible = state
        .entities
        .iter()
        .filter(|entity| state.visibility.is_visible(entity.position))
        .collect::<Vec<_>>();
    visible.sort_by_key(|entity| entity.render_order);

    visible
        .into_iter()
        .map(|entity| (entity.position, entity))
        .collect()
}

fn render_status(frame: &mut Frame, area: Rect, screen: &Screen<'_>) {
    let mut spans = Vec::new();

    if let Some(fighter) = screen.state.player_entity().and_then(|player| player.fighter) {
        spans.push(Span::raw("HP: "));
        spans.push(Span::styled(
            format!("{}/{}", fighter.hp, fighter.max_hp),
            theme::hp_style(fighter.hp, fighter.max_hp),
        ));
    }

    spans.push(Span::styled(
        format!("  Turn {}", screen.state.turn.nonce),
        Style::default().fg(Color::DarkGray),
    ));

    let names = names_at(screen.state, screen.mouse);
    if !names.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(names, Style::default().fg(Color::Gray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Comma-separated names of visible entities under the pointer.
pub fn names_at(state: &GameState, position: Position) -> String {
    if !state.visibility.is_visible(position) {
        return String::new();
    }
    state
        .entities
        .iter()
        .filter(|entity| entity.position == position)
        .map(|entity| entity.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_messages(frame: &mut Frame, area: Rect, screen: &Screen<'_>) {
    let capacity = usize::from(area.height.saturating_sub(2));
    let items = screen
        .state
        .messages
        .recent(capacity)
        .map(|message| ListItem::new(message.full_text()).style(theme::message_style(message)))
        .collect::<Vec<_>>();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

fn render_inventory(frame: &mut Frame, map_area: Rect, screen: &Screen<'_>, title: &str) {
    let inventory = screen.state.player_entity().and_then(Entity::inventory);

    let lines = match inventory {
        Some(inventory) if !inventory.is_empty() => inventory
            .items()
            .iter()
            .zip('a'..='z')
            .map(|(item, letter)| Line::from(format!("({letter}) {}", item.name)))
            .collect::<Vec<_>>(),
        _ => vec![Line::from("(Empty)")],
    };

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let width = INVENTORY_WIDTH.max(u16::try_from(title.len() + 4).unwrap_or(u16::MAX));
    let area = popup(map_area, width, height);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::overlay_border())
                .title(title),
        ),
        area,
    );
}

fn render_history(
    frame: &mut Frame,
    map_area: Rect,
    screen: &Screen<'_>,
    cursor: &HistoryCursor,
) {
    let area = Rect {
        x: map_area.x + 1,
        y: map_area.y + 1,
        width: map_area.width.saturating_sub(2),
        height: map_area.height.saturating_sub(2),
    };
    let rows = usize::from(area.height.saturating_sub(2));

    let messages = screen.state.messages.messages();
    let end = (cursor.position() + 1).min(messages.len());
    let start = end.saturating_sub(rows);
    let lines = messages[start..end]
        .iter()
        .map(|message| Line::styled(message.full_text(), theme::message_style(message)))
        .collect::<Vec<_>>();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::overlay_border())
                .title(format!(
                    "Message history ({}/{})",
                    end,
                    cursor.log_length()
                )),
        ),
        area,
    );
}

fn render_game_over(frame: &mut Frame, map_area: Rect) {
    let area = popup(map_area, 30, 3);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            "You died. Press Esc to leave.",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Rectangle of the given size centered in `outer`, clipped to it.
fn popup(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}
