//! Notification pattern for accumulating validation errors
//!
//! A `Notification` collects every constraint violation found during one
//! validation pass instead of failing on the first, so callers see all
//! problems at once. Entities create a fresh instance per validation call
//! and discard it afterwards; it holds no shared state.

use std::fmt;

/// Ordered collection of validation error messages.
#[derive(Debug, Default)]
pub struct Notification {
    errors: Vec<String>,
}

impl Notification {
    /// Create an empty notification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one error message.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Append a sequence of error messages in order.
    pub fn add_errors<I>(&mut self, messages: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for message in messages {
            self.errors.push(message.into());
        }
    }

    /// Whether any error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All accumulated messages, comma-joined in insertion order.
    /// Empty string when no errors were recorded.
    pub fn messages(&self) -> String {
        self.errors.join(",")
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages())
    }
}
