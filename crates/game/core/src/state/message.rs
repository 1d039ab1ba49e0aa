//! Append-only message log shared by the core and any frontend.

use super::Color;

/// Single log entry. Repeats of the same text stack into `count`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub text: String,
    pub color: Color,
    pub count: u32,
}

impl Message {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            count: 1,
        }
    }

    /// Text with a stack counter suffix when repeated.
    pub fn full_text(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.text, self.count)
        } else {
            self.text.clone()
        }
    }
}

/// Ordered list of `(text, color)` messages. Entries are never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message, stacking it onto the previous one if the text matches.
    pub fn push(&mut self, text: impl Into<String>, color: Color) {
        let text = text.into();
        if let Some(last) = self.messages.last_mut()
            && last.text == text
        {
            last.count += 1;
            return;
        }
        self.messages.push(Message::new(text, color));
    }

    /// Appends a message in the default text color.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.push(text, Color::WHITE);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recent messages first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Message> {
        self.messages.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_text_stacks() {
        let mut log = MessageLog::new();
        log.push_text("That way is blocked.");
        log.push_text("That way is blocked.");
        log.push_text("Nothing to attack.");

        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].full_text(), "That way is blocked. (x2)");
        assert_eq!(log.last().unwrap().full_text(), "Nothing to attack.");
    }

    #[test]
    fn recent_is_newest_first() {
        let mut log = MessageLog::new();
        log.push_text("one");
        log.push_text("two");
        let recent: Vec<_> = log.recent(5).map(|m| m.text.as_str()).collect();
        assert_eq!(recent, ["two", "one"]);
    }
}
