//! Cross-frontend primitives for driving the game.
//!
//! Houses device-agnostic input events, the key map, the input mode state
//! machine, and the session dispatch boundary that both the terminal client
//! and future graphical clients reuse.
pub mod config;
pub mod handler;
pub mod input;
pub mod keymap;
pub mod mode;

pub use config::{FrontendConfig, InputConfig};
pub use handler::{Control, Dispatch, InputHandler};
pub use input::{InputEvent, KeyCode, KeyInput, KeyModifiers, ModifierKey};
pub use keymap::{Intent, KeyBinding, KeyMap};
pub use mode::{HistoryCursor, InputMode};
