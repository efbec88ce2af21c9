//! Narrative message log
//!
//! The core only ever appends; reading the log back is the UI's business.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::colors::{self, Rgb};

/// Default number of lines kept before the oldest are dropped
pub const DEFAULT_LOG_CAPACITY: usize = 100;

/// A line of narrative text with its color tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub color: Rgb,
}

impl Message {
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// Message in the default (white) color
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, colors::WHITE)
    }
}

/// Append-only message sink
#[derive(Debug, Clone)]
pub struct MessageLog {
    messages: VecDeque<Message>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn add_message(&mut self, message: Message) {
        log::trace!("message: {}", message.text);
        self.messages.push_back(message);
        // Keep only the last `capacity` messages
        while self.messages.len() > self.capacity {
            self.messages.pop_front();
        }
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        for message in messages {
            self.add_message(message);
        }
    }

    /// Messages, oldest first
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.back()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}
