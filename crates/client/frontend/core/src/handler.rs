//! Session dispatch boundary.
//!
//! [`InputHandler`] owns the live [`InputMode`], turns input events into
//! actions or mode transitions, and feeds actions to the turn engine.
//! Refusals are already logged by the engine; termination is surfaced as
//! [`Control::Quit`]. Only defects escape as errors.

use game_core::{
    Action, ExecuteError, GameEngine, GameEnv, GameState, Impossible, Position, TurnOutcome,
};

use crate::config::FrontendConfig;
use crate::input::{InputEvent, KeyCode, KeyInput};
use crate::keymap::{Intent, KeyMap};
use crate::mode::{HistoryCursor, InputMode};

/// Result of mapping one event in the current mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// No action this step. A mode transition may have happened.
    Nothing,
    /// Run this action through the turn engine.
    Act(Action),
    /// Close the session without running an action.
    Quit,
}

/// Whether the session loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct InputHandler {
    mode: InputMode,
    keymap: KeyMap,
    history_page_step: usize,
    mouse_location: Position,
}

impl InputHandler {
    pub fn new(config: &FrontendConfig) -> Self {
        Self::with_keymap(config, KeyMap::default())
    }

    pub fn with_keymap(config: &FrontendConfig, keymap: KeyMap) -> Self {
        Self {
            mode: InputMode::Main,
            keymap,
            history_page_step: config.input.history_page_step.max(1),
            mouse_location: Position::ORIGIN,
        }
    }

    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    /// Last map cell the pointer hovered inside the map.
    pub fn mouse_location(&self) -> Position {
        self.mouse_location
    }

    /// Returns to `Main`. Used when an ask-user mode is dismissed.
    pub fn exit_to_main(&mut self) {
        self.set_mode(InputMode::Main);
    }

    fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            tracing::debug!(
                target: "frontend::input",
                from = self.mode.as_snake_case(),
                to = mode.as_snake_case(),
                "mode change"
            );
        }
        self.mode = mode;
    }

    /// Processes one event end to end.
    ///
    /// Actions run through [`GameEngine::process_player_action`]. After a
    /// turn advances, an ask-user mode returns to `Main`, and a dead player
    /// moves the session to `GameOver`.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        state: &mut GameState,
        env: GameEnv<'_>,
    ) -> Result<Control, ExecuteError> {
        let action = match self.dispatch(event, state, &env) {
            Dispatch::Nothing => return Ok(Control::Continue),
            Dispatch::Quit => return Ok(Control::Quit),
            Dispatch::Act(action) => action,
        };

        let outcome = GameEngine::new(state).process_player_action(env, &action)?;
        match outcome {
            TurnOutcome::Terminated => Ok(Control::Quit),
            TurnOutcome::Rejected(_) => Ok(Control::Continue),
            TurnOutcome::Advanced(_) => {
                if !state.player_is_alive() {
                    tracing::info!(target: "frontend::input", "player died");
                    self.set_mode(InputMode::GameOver);
                } else if self.mode.is_ask_user() {
                    self.exit_to_main();
                }
                Ok(Control::Continue)
            }
        }
    }

    /// Maps an event to an action or a mode transition without running it.
    ///
    /// Takes the state mutably only to log [`Impossible::InvalidEntry`] for
    /// an empty inventory slot.
    pub fn dispatch(
        &mut self,
        event: &InputEvent,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Dispatch {
        match *event {
            InputEvent::Quit => Dispatch::Quit,
            InputEvent::MouseMotion(position) => {
                if let Ok(map) = env.map()
                    && map.contains(position)
                {
                    self.mouse_location = position;
                }
                Dispatch::Nothing
            }
            InputEvent::MouseButton(_) => {
                if self.mode.is_ask_user() {
                    self.exit_to_main();
                }
                Dispatch::Nothing
            }
            InputEvent::Key(key) => self.dispatch_key(key, state, env),
        }
    }

    fn dispatch_key(&mut self, key: KeyInput, state: &mut GameState, env: &GameEnv<'_>) -> Dispatch {
        if self.mode.is_ask_user() && key.is_modifier_only() {
            return Dispatch::Nothing;
        }

        match self.mode {
            InputMode::Main => self.main_key(key, state),
            InputMode::InventoryActivate | InputMode::InventoryDrop => {
                self.inventory_key(key, state, env)
            }
            InputMode::HistoryViewer(cursor) => self.history_key(key, cursor),
            InputMode::GameOver => match self.keymap.lookup(&key) {
                Some(Intent::Exit) => Dispatch::Act(Action::escape(state.player)),
                _ => Dispatch::Nothing,
            },
        }
    }

    fn main_key(&mut self, key: KeyInput, state: &GameState) -> Dispatch {
        let player = state.player;
        let Some(intent) = self.keymap.lookup(&key) else {
            return Dispatch::Nothing;
        };

        match intent {
            Intent::Move { dx, dy } => Dispatch::Act(Action::bump(player, dx, dy)),
            Intent::Wait => Dispatch::Act(Action::wait(player)),
            Intent::PickUp => Dispatch::Act(Action::pickup(player)),
            Intent::Exit => Dispatch::Act(Action::escape(player)),
            Intent::OpenInventory => {
                self.set_mode(InputMode::InventoryActivate);
                Dispatch::Nothing
            }
            Intent::OpenDrop => {
                self.set_mode(InputMode::InventoryDrop);
                Dispatch::Nothing
            }
            Intent::OpenHistory => {
                let cursor = HistoryCursor::new(state.messages.len());
                self.set_mode(InputMode::HistoryViewer(cursor));
                Dispatch::Nothing
            }
        }
    }

    fn inventory_key(&mut self, key: KeyInput, state: &mut GameState, env: &GameEnv<'_>) -> Dispatch {
        let Some(letter) = key.letter() else {
            self.exit_to_main();
            return Dispatch::Nothing;
        };
        let index = (letter as u8 - b'a') as usize;
        let player = state.player;

        let item = state
            .player_entity()
            .and_then(|entity| entity.inventory())
            .and_then(|inventory| inventory.slot(index));
        let Some(item) = item else {
            tracing::debug!(target: "frontend::input", slot = %letter, "empty inventory slot");
            state.messages.push(
                Impossible::InvalidEntry.to_string(),
                env.config().palette.invalid,
            );
            return Dispatch::Nothing;
        };

        match self.mode {
            InputMode::InventoryDrop => Dispatch::Act(Action::drop_item(player, item.id)),
            _ => match env.items() {
                Ok(items) => items
                    .get_action(player, item)
                    .map_or(Dispatch::Nothing, Dispatch::Act),
                // Let the action surface the missing oracle as a defect.
                Err(_) => Dispatch::Act(Action::use_item(player, item.id, None)),
            },
        }
    }

    fn history_key(&mut self, key: KeyInput, mut cursor: HistoryCursor) -> Dispatch {
        let step = self.history_page_step as isize;
        match key.code {
            KeyCode::Up => cursor.scroll(-1),
            KeyCode::Down => cursor.scroll(1),
            KeyCode::PageUp => cursor.scroll(-step),
            KeyCode::PageDown => cursor.scroll(step),
            KeyCode::Home => cursor.home(),
            KeyCode::End => cursor.end(),
            _ => {
                self.exit_to_main();
                return Dispatch::Nothing;
            }
        }
        self.mode = InputMode::HistoryViewer(cursor);
        Dispatch::Nothing
    }
}
