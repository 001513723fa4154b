//! Errors raised while building a selector.

use thiserror::Error;

use super::Category;

/// A rejected append or combine.
///
/// The builder is left untouched when any of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    /// A compound selector names at most one element type, one ID and one
    /// pseudo-element.
    #[error("{category} selectors must occur at most once in a compound selector")]
    Repeated {
        /// The category that was appended twice.
        category: Category,
    },

    /// Parts were appended out of order.
    #[error(
        "selector parts must follow the order: element, id, class, attribute, \
         pseudo-class, pseudo-element (cannot append {category} after {after})"
    )]
    OutOfOrder {
        /// The category that was rejected.
        category: Category,
        /// The highest-ranked category already present.
        after: Category,
    },

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    /// The token is not one of `' '`, `'>'`, `'+'`, `'~'`.
    #[error("invalid combinator {token:?}: expected one of ' ', '>', '+', '~'")]
    InvalidCombinator {
        /// The token as given by the caller.
        token: String,
    },
}
