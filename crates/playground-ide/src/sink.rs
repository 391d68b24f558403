//! Delivery of hints and submissions to the hint subsystem.

use serde::{Deserialize, Serialize};

/// Receiver for everything the editor reports to the hint subsystem.
pub trait HintSink {
    /// Called on every cursor move with the resolved hint.
    fn cursor_moved(&mut self, hint: Option<&str>);

    /// Called when the source is compiled.
    fn source_submitted(&mut self, source: &str);
}

/// A message queued for the hint subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HintMessage {
    /// The cursor moved.
    CursorMoved {
        /// What the resolver produced for the new position.
        hint: Option<String>,
    },
    /// The source was submitted for compilation.
    Submitted {
        /// The submitted buffer text.
        source: String,
    },
}

/// A sink that buffers messages until the host drains them.
///
/// Only the latest cursor move matters to the hint panel, so a cursor move
/// replaces an undrained cursor move at the back of the queue. Between
/// drains the queue holds at most one cursor move per submission, plus one.
#[derive(Debug, Default)]
pub struct QueuedHints {
    messages: Vec<HintMessage>,
}

impl QueuedHints {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every queued message, oldest first.
    pub fn drain(&mut self) -> Vec<HintMessage> {
        std::mem::take(&mut self.messages)
    }

    /// Number of queued messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl HintSink for QueuedHints {
    fn cursor_moved(&mut self, hint: Option<&str>) {
        let message = HintMessage::CursorMoved {
            hint: hint.map(str::to_string),
        };
        if let Some(last) = self.messages.last_mut() {
            if matches!(last, HintMessage::CursorMoved { .. }) {
                *last = message;
                return;
            }
        }
        self.messages.push(message);
    }

    fn source_submitted(&mut self, source: &str) {
        self.messages.push(HintMessage::Submitted {
            source: source.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_messages_in_order() {
        let mut queue = QueuedHints::new();
        queue.cursor_moved(Some("List.map"));
        queue.source_submitted("main = 1");
        queue.cursor_moved(None);

        assert_eq!(queue.len(), 3);
        assert_eq!(
            queue.drain(),
            vec![
                HintMessage::CursorMoved {
                    hint: Some("List.map".to_string())
                },
                HintMessage::Submitted {
                    source: "main = 1".to_string()
                },
                HintMessage::CursorMoved { hint: None },
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn undrained_cursor_moves_keep_only_the_latest() {
        let mut queue = QueuedHints::new();
        for column in 0..1000 {
            queue.cursor_moved(Some(&format!("x{column}")));
        }
        assert_eq!(queue.len(), 1);

        queue.source_submitted("x = 1");
        queue.cursor_moved(None);
        queue.cursor_moved(Some("Html.div"));
        assert_eq!(
            queue.drain(),
            vec![
                HintMessage::CursorMoved {
                    hint: Some("x999".to_string())
                },
                HintMessage::Submitted {
                    source: "x = 1".to_string()
                },
                HintMessage::CursorMoved {
                    hint: Some("Html.div".to_string())
                },
            ]
        );
    }
}
