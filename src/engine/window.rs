use std::{error::Error, fmt};

use crate::domain::Coordinate;

/// A fixed-size, cyclically advancing view over the loaded coordinates.
///
/// Holds `start_index` in `[0, len - visible_count]` whenever `visible_count <= len`.
/// When the window is wider than the data the start is pinned at 0 and advancing is a no-op.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    coordinates: Vec<Coordinate>,
    start_index: usize,
    visible_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VisibleCountError {
    NotANumber(String),
    OutOfRange { value: i64, max: usize },
}

impl fmt::Display for VisibleCountError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VisibleCountError::NotANumber(text) => write!(f, "Not a whole number: {:?}", text),
            VisibleCountError::OutOfRange { value, max } => {
                write!(f, "Visible count {} outside 1..={}", value, max)
            }
        }
    }
}

impl Error for VisibleCountError {}

impl SlidingWindow {
    pub fn new(visible_count: usize) -> Self {
        Self {
            coordinates: Vec::new(),
            start_index: 0,
            visible_count: visible_count.max(1),
        }
    }

    /// Replace the backing list and rewind. A window wider than the new list is clamped down to it.
    pub fn load(&mut self, coordinates: Vec<Coordinate>) {
        self.coordinates = coordinates;
        self.start_index = 0;
        if !self.coordinates.is_empty() && self.visible_count > self.coordinates.len() {
            self.visible_count = self.coordinates.len();
        }
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Number of distinct start positions, i.e. the wraparound modulus.
    /// `None` when the window does not fit (including before any data is loaded).
    pub fn positions(&self) -> Option<usize> {
        (self.coordinates.len() + 1)
            .checked_sub(self.visible_count)
            .filter(|&n| n > 0)
    }

    /// Move the window forward `steps` places, wrapping back to 0 after the last position.
    /// Returns false (and pins the start at 0) when the window does not fit.
    pub fn advance_by(&mut self, steps: u32) -> bool {
        match self.positions() {
            Some(n) => {
                let steps = steps as usize % n;
                self.start_index = (self.start_index + steps) % n;
                true
            }
            None => {
                self.start_index = 0;
                false
            }
        }
    }

    pub fn advance(&mut self) -> bool {
        self.advance_by(1)
    }

    pub fn reset(&mut self) {
        self.start_index = 0;
    }

    /// Accepts only a whole number in `[1, len]`. Anything else leaves the window untouched.
    pub fn set_visible_count(&mut self, input: &str) -> Result<usize, VisibleCountError> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| VisibleCountError::NotANumber(input.to_string()))?;

        let max = self.coordinates.len();
        if value < 1 || value as u64 > max as u64 {
            return Err(VisibleCountError::OutOfRange { value, max });
        }

        self.visible_count = value as usize;
        // A wider window has fewer start positions; keep the start inside them.
        self.start_index = self.start_index.min(max - self.visible_count);
        Ok(self.visible_count)
    }

    /// `coordinates[start .. start + visible_count]`, clipped to the list.
    pub fn visible(&self) -> &[Coordinate] {
        let len = self.coordinates.len();
        let start = self.start_index.min(len);
        let end = (start + self.visible_count).min(len);
        &self.coordinates[start..end]
    }
}
