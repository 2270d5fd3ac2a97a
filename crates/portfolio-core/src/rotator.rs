//! Title Rotator
//!
//! Cycles the hero subtitle through a fixed list. The owner drives `tick()`
//! from a repeating timer every [`ROTATION_INTERVAL`].

use std::time::Duration;

use crate::error::RotationError;

/// Cadence of the hero title rotation
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRotation {
    titles: Vec<String>,
    current_index: usize,
}

impl TitleRotation {
    /// Start a rotation at index 0. Rejects an empty list.
    pub fn new(titles: Vec<String>) -> Result<Self, RotationError> {
        if titles.is_empty() {
            return Err(RotationError::Empty);
        }
        Ok(Self { titles, current_index: 0 })
    }

    /// Advance to the next title, wrapping at the end
    pub fn tick(&mut self) {
        self.current_index = (self.current_index + 1) % self.titles.len();
    }

    pub fn current(&self) -> &str {
        &self.titles[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}
