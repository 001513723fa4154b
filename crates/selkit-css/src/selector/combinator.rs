//! Combinators and complex selectors
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::EnumIter;

use super::{SelectorBuilder, SelectorError};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The token written between the two selectors.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Accepts `" "`, `">"`, `"+"` or `"~"`, optionally padded with
    /// whitespace. Any non-empty run of whitespace is the descendant
    /// combinator.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "" if !token.is_empty() => Ok(Self::Descendant),
            ">" => Ok(Self::Child),
            "+" => Ok(Self::NextSibling),
            "~" => Ok(Self::SubsequentSibling),
            _ => Err(SelectorError::InvalidCombinator {
                token: token.to_string(),
            }),
        }
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;

    fn try_from(token: char) -> Result<Self, Self::Error> {
        token.encode_utf8(&mut [0; 4]).parse()
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Join two selectors into `left combinator right`, with one space on each
/// side of the combinator token. The result is itself a builder and can be
/// combined again. Appends to it extend `right`'s compound and are checked
/// against what `right` already holds.
///
/// ```
/// use selkit_css::{Combinator, combine, element};
///
/// # fn main() -> Result<(), selkit_css::SelectorError> {
/// let list = combine(&element("ul"), Combinator::Child, &element("li"));
/// assert_eq!(list.render(), "ul > li");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn combine(
    left: &SelectorBuilder,
    combinator: Combinator,
    right: &SelectorBuilder,
) -> SelectorBuilder {
    SelectorBuilder::from_raw(format!("{left} {combinator} {right}"), right)
}

/// Like [`combine`], with the combinator given as a token.
///
/// # Errors
///
/// [`SelectorError::InvalidCombinator`] if `token` is not a combinator.
pub fn combine_str(
    left: &SelectorBuilder,
    token: &str,
    right: &SelectorBuilder,
) -> Result<SelectorBuilder, SelectorError> {
    Ok(combine(left, token.parse()?, right))
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_token_parses_back() {
        for combinator in Combinator::iter() {
            assert_eq!(combinator.token().parse::<Combinator>(), Ok(combinator));
        }
    }

    #[test]
    fn test_padded_tokens() {
        assert_eq!(" > ".parse::<Combinator>(), Ok(Combinator::Child));
        assert_eq!("\t".parse::<Combinator>(), Ok(Combinator::Descendant));
        assert_eq!("   ".parse::<Combinator>(), Ok(Combinator::Descendant));
    }

    #[test]
    fn test_char_tokens() {
        assert_eq!(Combinator::try_from('~'), Ok(Combinator::SubsequentSibling));
        assert!(Combinator::try_from('/').is_err());
    }
}
