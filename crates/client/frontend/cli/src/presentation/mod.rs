//! Terminal presentation components used by the CLI client.
pub mod terminal;
pub mod theme;
pub mod ui;

pub use terminal::{TerminalGuard, Tui};
pub use ui::Screen;
