//! Rectangles.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json::{ConstructorRegistry, HelperError, expect_arity, number_arg};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Name the constructor is registered under.
    pub const NAME: &'static str = "Rectangle";

    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Build from positional arguments `[width, height]`.
    ///
    /// # Errors
    ///
    /// [`HelperError::Arity`] unless exactly two arguments are given,
    /// [`HelperError::ArgumentType`] if either is not a number.
    pub fn from_args(args: &[Value]) -> Result<Self, HelperError> {
        expect_arity(args, 2)?;
        Ok(Self::new(number_arg(args, 0)?, number_arg(args, 1)?))
    }

    /// Register [`Rectangle::from_args`] under [`Rectangle::NAME`].
    pub fn register(registry: &mut ConstructorRegistry) {
        registry.register(Self::NAME, |args| Self::from_args(&args));
    }
}
