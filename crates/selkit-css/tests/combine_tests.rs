//! Integration tests for complex selectors built with combinators.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use selkit_css::{
    Category, Combinator, SelectorError, class, combine, combine_str, element, id, pseudo_class,
    pseudo_element,
};

#[test]
fn test_next_sibling_of_two_compounds() {
    // [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    let left = element("div").id("main").unwrap();
    let right = element("table").id("data").unwrap();
    let selector = combine_str(&left, "+", &right).unwrap();
    assert_eq!(selector.render(), "div#main + table#data");
}

#[test]
fn test_nested_combinations() {
    let first = element("div")
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("draggable")
        .unwrap();
    let second = element("table").id("data").unwrap();
    let row = element("tr").pseudo_class("nth-of-type(even)").unwrap();
    let cell = element("td").pseudo_class("nth-of-type(even)").unwrap();

    let siblings = combine_str(&first, "+", &second).unwrap();
    let cells = combine_str(&row, " ", &cell).unwrap();
    let selector = combine_str(&siblings, "~", &cells).unwrap();

    // The descendant token sits between the two padding spaces.
    assert_eq!(
        selector.render(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_every_combinator_token() {
    let left = element("ul");
    let right = element("li");
    assert_eq!(combine(&left, Combinator::Descendant, &right).render(), "ul   li");
    assert_eq!(combine(&left, Combinator::Child, &right).render(), "ul > li");
    assert_eq!(combine(&left, Combinator::NextSibling, &right).render(), "ul + li");
    assert_eq!(
        combine(&left, Combinator::SubsequentSibling, &right).render(),
        "ul ~ li"
    );
}

#[test]
fn test_combine_does_not_consume_inputs() {
    let left = id("nav");
    let right = pseudo_class("hover");
    let _first = combine(&left, Combinator::Child, &right);
    assert_eq!(left.render(), "#nav");
    assert_eq!(right.render(), ":hover");
}

#[test]
fn test_combined_builder_holds_one_raw_fragment() {
    let selector = combine(&element("h1"), Combinator::NextSibling, &element("p"));
    assert_eq!(selector.len(), 1);
    assert_eq!(selector.fragments()[0].category, Category::Raw);
    assert_eq!(selector.max_rank(), Some(1));
}

#[test]
fn test_append_after_combine_extends_rightmost_compound() {
    let selector = combine(&element("h1"), Combinator::NextSibling, &element("p"))
        .class("lead")
        .unwrap();
    assert_eq!(selector.render(), "h1 + p.lead");
}

#[test]
fn test_element_after_combine_is_repeated() {
    let err = combine(&element("h1"), Combinator::NextSibling, &element("p"))
        .element("span")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::Repeated {
            category: Category::Element
        }
    );
}

#[test]
fn test_id_after_combine_with_id_is_repeated() {
    let right = element("table").id("data").unwrap();
    let err = combine(&element("div"), Combinator::Child, &right)
        .id("other")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::Repeated {
            category: Category::Id
        }
    );
}

#[test]
fn test_nothing_follows_pseudo_element_after_combine() {
    let combined = combine(&element("h1"), Combinator::Child, &pseudo_element("after"));
    for category in Category::ranked() {
        let mut builder = combined.clone();
        let err = builder.push(category, "x").unwrap_err();
        if category == Category::PseudoElement {
            assert_eq!(err, SelectorError::Repeated { category });
        } else {
            assert_eq!(
                err,
                SelectorError::OutOfOrder {
                    category,
                    after: Category::PseudoElement
                }
            );
        }
        assert_eq!(builder.render(), "h1 > ::after");
    }
}

#[test]
fn test_left_operand_does_not_constrain_appends() {
    // Only the rightmost compound is extended, so the left side's id and
    // pseudo-class do not matter.
    let left = id("main").pseudo_class("hover").unwrap();
    let selector = combine(&left, Combinator::Descendant, &class("item"))
        .class("active")
        .unwrap()
        .attribute("data-x")
        .unwrap();
    assert_eq!(selector.render(), "#main:hover   .item.active[data-x]");
}

#[test]
fn test_nested_combine_checks_innermost_right_operand() {
    let inner = combine(&element("ul"), Combinator::Child, &element("li").class("x").unwrap());
    let outer = combine(&element("nav"), Combinator::Descendant, &inner);
    let err = outer.attribute("href").unwrap().class("y").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            category: Category::Class,
            after: Category::Attribute
        }
    );
}

#[test]
fn test_invalid_combinator_tokens() {
    let left = element("a");
    let right = element("b");
    for token in ["", "/", ">>", "||", "+~", "a"] {
        assert_eq!(
            combine_str(&left, token, &right),
            Err(SelectorError::InvalidCombinator {
                token: token.to_string()
            }),
            "token {token:?}"
        );
    }
}

#[test]
fn test_padded_combinator_token() {
    let selector = combine_str(&element("ul"), " > ", &element("li")).unwrap();
    assert_eq!(selector.render(), "ul > li");
}

#[test]
fn test_invalid_combinator_message() {
    let err = "/".parse::<Combinator>().unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"invalid combinator "/": expected one of ' ', '>', '+', '~'"#
    );
}
