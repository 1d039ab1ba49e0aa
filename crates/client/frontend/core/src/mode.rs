//! Input mode state machine.
//!
//! Exactly one mode is live at a time. `Main` turns keys into actions;
//! the inventory and history modes are "ask user" modes that fall back to
//! `Main` on any key they do not handle; `GameOver` only honors exit.

/// Scroll position over the message log, captured when history opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryCursor {
    log_length: usize,
    cursor: usize,
}

impl HistoryCursor {
    /// Opens at the newest message. An empty log pins the cursor to 0.
    pub fn new(log_length: usize) -> Self {
        Self {
            log_length,
            cursor: log_length.saturating_sub(1),
        }
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Log length captured when the mode was entered.
    pub fn log_length(&self) -> usize {
        self.log_length
    }

    fn last(&self) -> usize {
        self.log_length.saturating_sub(1)
    }

    /// Moves by `adjust` lines. Wraps only when already at the end being
    /// pushed against; otherwise clamps to the log.
    pub fn scroll(&mut self, adjust: isize) {
        if self.log_length == 0 {
            return;
        }
        let last = self.last();
        self.cursor = if adjust < 0 && self.cursor == 0 {
            last
        } else if adjust > 0 && self.cursor == last {
            0
        } else {
            self.cursor.saturating_add_signed(adjust).min(last)
        };
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.last();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum InputMode {
    #[default]
    Main,
    /// Letter keys pick an item to use.
    InventoryActivate,
    /// Letter keys pick an item to drop.
    InventoryDrop,
    HistoryViewer(HistoryCursor),
    GameOver,
}

impl InputMode {
    /// Modes that return to `Main` on unhandled input.
    pub fn is_ask_user(&self) -> bool {
        matches!(
            self,
            Self::InventoryActivate | Self::InventoryDrop | Self::HistoryViewer(_)
        )
    }

    pub fn as_snake_case(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_at_newest_message() {
        assert_eq!(HistoryCursor::new(5).position(), 4);
        assert_eq!(HistoryCursor::new(0).position(), 0);
    }

    #[test]
    fn clamps_before_wrapping() {
        let mut cursor = HistoryCursor::new(25);
        cursor.scroll(-10);
        assert_eq!(cursor.position(), 14);
        cursor.scroll(-10);
        assert_eq!(cursor.position(), 4);
        cursor.scroll(-10);
        assert_eq!(cursor.position(), 0);
        cursor.scroll(-1);
        assert_eq!(cursor.position(), 24);
        cursor.scroll(10);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn page_down_clamps_to_last_line() {
        let mut cursor = HistoryCursor::new(25);
        cursor.home();
        cursor.scroll(10);
        cursor.scroll(10);
        cursor.scroll(10);
        assert_eq!(cursor.position(), 24);
    }

    #[test]
    fn empty_log_never_moves() {
        let mut cursor = HistoryCursor::new(0);
        cursor.scroll(-1);
        cursor.scroll(10);
        cursor.end();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn ask_user_modes() {
        assert!(!InputMode::Main.is_ask_user());
        assert!(!InputMode::GameOver.is_ask_user());
        assert!(InputMode::InventoryDrop.is_ask_user());
        assert!(InputMode::HistoryViewer(HistoryCursor::new(1)).is_ask_user());
        assert_eq!(InputMode::InventoryActivate.as_snake_case(), "inventory_activate");
    }
}
