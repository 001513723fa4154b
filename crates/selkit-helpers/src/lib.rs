//! Small standalone helpers that ship alongside the selector builder.
//!
//! - **Shapes** - [`Rectangle`] with an area method
//! - **JSON** - [`to_json`] encoding and [`from_json`] reconstruction
//!   through a [`ConstructorRegistry`]
//!
//! None of this is used by `selkit-css`.

/// JSON encoding and registry-based reconstruction.
pub mod json;
/// Geometric value types.
pub mod shape;

pub use json::{ConstructorRegistry, HelperError, from_json, from_json_as, to_json};
pub use shape::Rectangle;
