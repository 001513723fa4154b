//! CSS selector construction
//!
//! This module builds selector strings per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! A [`SelectorBuilder`] holds the fragments of one compound selector in the
//! order they were appended. Every append is validated against the fragments
//! already present; [`combine`] joins two builders into a complex selector.

mod combinator;
mod error;

use std::fmt;

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use selkit_common::warning::warn_once;

pub use combinator::{Combinator, combine, combine_str};
pub use error::SelectorError;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kind of simple selector a fragment holds. Ranked categories must be
/// appended in rank order: element, id, class, attribute, pseudo-class,
/// pseudo-element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.container`, `.editable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    PseudoClass,

    /// [§ 4 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,

    /// Pre-rendered text, such as the output of [`combine`]. Carries no rank
    /// and is never checked.
    Raw,
}

impl Category {
    /// Ordering rank, 1 (element) through 6 (pseudo-element). `None` for
    /// [`Category::Raw`].
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::Element => Some(1),
            Self::Id => Some(2),
            Self::Class => Some(3),
            Self::Attribute => Some(4),
            Self::PseudoClass => Some(5),
            Self::PseudoElement => Some(6),
            Self::Raw => None,
        }
    }

    /// The six ranked categories in rank order.
    pub fn ranked() -> impl Iterator<Item = Self> {
        Self::iter().filter(|category| category.rank().is_some())
    }

    /// Whether a compound selector may contain at most one fragment of this
    /// category.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// The text written before and after the value.
    const fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Element | Self::Raw => ("", ""),
            Self::Id => ("#", ""),
            Self::Class => (".", ""),
            Self::Attribute => ("[", "]"),
            Self::PseudoClass => (":", ""),
            Self::PseudoElement => ("::", ""),
        }
    }

    /// Format `value` with this category's sigil, e.g. `main` -> `#main`.
    #[must_use]
    pub fn decorate(self, value: &str) -> String {
        let (open, close) = self.delimiters();
        format!("{open}{value}{close}")
    }
}

/// One appended selector piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// What kind of simple selector this is.
    pub category: Category,
    /// The literal text to render, sigil included.
    pub text: String,
}

impl Fragment {
    /// Create a fragment, decorating `value` with the category's sigil.
    #[must_use]
    pub fn new(category: Category, value: &str) -> Self {
        Self {
            category,
            text: category.decorate(value),
        }
    }

    /// See [`Category::rank`].
    #[must_use]
    pub const fn rank(&self) -> Option<u8> {
        self.category.rank()
    }
}

/// Fluent builder for one compound selector.
///
/// Fragments render in append order. Appends that would break the category
/// order or repeat a unique category are rejected with a [`SelectorError`]
/// and leave the builder unchanged.
///
/// ```
/// use selkit_css::id;
///
/// # fn main() -> Result<(), selkit_css::SelectorError> {
/// let selector = id("main").class("container")?.class("editable")?;
/// assert_eq!(selector.render(), "#main.container.editable");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectorBuilder {
    fragments: Vec<Fragment>,
    /// Highest-ranked category in the rightmost compound.
    #[serde(skip)]
    highest: Option<Category>,
    /// Unique categories present in the rightmost compound.
    #[serde(skip)]
    unique: Vec<Category>,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder holding a single raw fragment whose rightmost compound is
    /// the one `rightmost` ends with. Later appends are checked against it.
    pub(crate) fn from_raw(text: String, rightmost: &Self) -> Self {
        Self {
            fragments: vec![Fragment {
                category: Category::Raw,
                text,
            }],
            highest: rightmost.highest,
            unique: rightmost.unique.clone(),
        }
    }

    /// The fragments in append order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Highest rank in the rightmost compound, `None` if it has no ranked
    /// fragment.
    #[must_use]
    pub fn max_rank(&self) -> Option<u8> {
        self.highest.and_then(Category::rank)
    }

    /// Validate and append one fragment.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::Repeated`] if `category` is element, id or
    ///   pseudo-element and the rightmost compound already has one.
    /// - [`SelectorError::OutOfOrder`] if the rightmost compound already has
    ///   a fragment of higher rank than `category`.
    ///
    /// Raw fragments are appended without checks.
    pub fn push(&mut self, category: Category, value: &str) -> Result<(), SelectorError> {
        if self.unique.contains(&category) {
            return Err(SelectorError::Repeated { category });
        }

        let rank = category.rank();
        if let Some(after) = self
            .highest
            .filter(|after| rank.is_some() && after.rank() > rank)
        {
            return Err(SelectorError::OutOfOrder { category, after });
        }

        self.append(category, value);
        Ok(())
    }

    /// Append without validation. Callers have already checked.
    fn append(&mut self, category: Category, value: &str) {
        check_value(category, value);

        let fragment = Fragment::new(category, value);

        #[cfg(feature = "selector-trace")]
        eprintln!(
            "[SELECTOR] push {category} {:?} -> {} fragments",
            fragment.text,
            self.fragments.len() + 1
        );

        if fragment.rank().is_some() {
            self.highest = Some(category);
        }
        if category.is_unique() {
            self.unique.push(category);
        }
        self.fragments.push(fragment);
    }

    /// Start a builder with one fragment. Nothing can be rejected on an
    /// empty builder.
    fn starting_with(category: Category, value: &str) -> Self {
        let mut builder = Self::new();
        builder.append(category, value);
        builder
    }

    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Repeated`] if an element is present,
    /// [`SelectorError::OutOfOrder`] if anything of higher rank is.
    pub fn element(mut self, value: &str) -> Result<Self, SelectorError> {
        self.push(Category::Element, value)?;
        Ok(self)
    }

    /// Append an ID selector, rendered `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Repeated`] if an id is present,
    /// [`SelectorError::OutOfOrder`] if a class or later part is.
    pub fn id(mut self, value: &str) -> Result<Self, SelectorError> {
        self.push(Category::Id, value)?;
        Ok(self)
    }

    /// Append a class selector, rendered `.value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if an attribute or later part is present.
    pub fn class(mut self, value: &str) -> Result<Self, SelectorError> {
        self.push(Category::Class, value)?;
        Ok(self)
    }

    /// Append an attribute selector, rendered `[value]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-class or pseudo-element is present.
    pub fn attribute(mut self, value: &str) -> Result<Self, SelectorError> {
        self.push(Category::Attribute, value)?;
        Ok(self)
    }

    /// Shorthand for [`SelectorBuilder::attribute`].
    ///
    /// # Errors
    ///
    /// Same as [`SelectorBuilder::attribute`].
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.attribute(value)
    }

    /// Append a pseudo-class, rendered `:value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-element is present.
    pub fn pseudo_class(mut self, value: &str) -> Result<Self, SelectorError> {
        self.push(Category::PseudoClass, value)?;
        Ok(self)
    }

    /// Append a pseudo-element, rendered `::value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Repeated`] if a pseudo-element is present.
    pub fn pseudo_element(mut self, value: &str) -> Result<Self, SelectorError> {
        self.push(Category::PseudoElement, value)?;
        Ok(self)
    }

    /// Concatenate the fragments in append order.
    ///
    /// Rendering does not change the builder and can be repeated.
    #[must_use]
    pub fn render(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(&fragment.text)?;
        }
        Ok(())
    }
}

/// Start a selector with a type selector, e.g. `div`.
#[must_use]
pub fn element(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Element, value)
}

/// Start a selector with an ID selector, rendered `#value`.
#[must_use]
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Id, value)
}

/// Start a selector with a class selector, rendered `.value`.
#[must_use]
pub fn class(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Class, value)
}

/// Start a selector with an attribute selector, rendered `[value]`.
#[must_use]
pub fn attribute(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Attribute, value)
}

/// Start a selector with a pseudo-class, rendered `:value`.
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::PseudoClass, value)
}

/// Start a selector with a pseudo-element, rendered `::value`.
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::PseudoElement, value)
}

/// Warn about values that are accepted but almost certainly a mistake.
fn check_value(category: Category, value: &str) {
    if let Some(message) = value_warning(category, value) {
        warn_once("Selector", &message);
    }
}

fn value_warning(category: Category, value: &str) -> Option<String> {
    if category == Category::Raw {
        return None;
    }

    if value.is_empty() {
        return Some(format!(
            "empty {category} value renders as a bare '{}'",
            category.decorate("")
        ));
    }

    let (open, _) = category.delimiters();
    (!open.is_empty() && value.starts_with(open))
        .then(|| format!("{category} value '{value}' already starts with '{open}'"))
}
