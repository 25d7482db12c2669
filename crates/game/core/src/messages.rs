//! Player-visible narration sink.
//!
//! The message log UI lives outside this core; actions and status
//! transitions hand it formatted strings through [`MessageSink`].

/// Sink for player-visible messages.
pub trait MessageSink {
    fn push(&mut self, text: String);
}

/// Vec-backed sink for tests and headless embedders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLog {
    entries: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl MessageSink for MessageLog {
    fn push(&mut self, text: String) {
        self.entries.push(text);
    }
}
