//! A rectangle value with a derived area.

use serde::{Deserialize, Serialize};

use crate::rehydrate::Template;

/// Width and height of a rectangle. The area is computed on demand, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Template for Rect {
    const NAME: &'static str = "Rect";
    const FIELDS: &'static [&'static str] = &["width", "height"];
}
