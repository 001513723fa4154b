//! CSS selector construction for selkit.
//!
//! # Scope
//!
//! This crate implements a fluent builder for selector strings per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/):
//!
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Parts must be appended in that order
//!   - Type, ID and pseudo-element parts occur at most once
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Two builders joined by a combinator (descendant, child, sibling)
//!   - Combined builders can be combined again
//!
//! # Not Implemented
//!
//! - Selector parsing
//! - Matching against a document tree
//! - Escaping or validating the text of individual parts
//!
//! # Example
//!
//! ```
//! use selkit_css::{combine_str, element};
//!
//! # fn main() -> Result<(), selkit_css::SelectorError> {
//! let link = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.render(), r#"a[href$=".png"]:focus"#);
//!
//! let pair = combine_str(&element("div").id("main")?, "+", &element("table").id("data")?)?;
//! assert_eq!(pair.render(), "div#main + table#data");
//! # Ok(())
//! # }
//! ```

/// Selector builder, fragments and combinators per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use selector::{
    Category, Combinator, Fragment, SelectorBuilder, SelectorError, attribute, class, combine,
    combine_str, element, id, pseudo_class, pseudo_element,
};
