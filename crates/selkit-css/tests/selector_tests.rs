//! Integration tests for selector building and rendering.

use selkit_css::{
    Combinator, ComponentKind, SelectorError, attr, class, combine, element, id, pseudo_class,
    pseudo_element,
};

// Facade Tests

#[test]
fn test_facade_punctuation() {
    assert_eq!(element("div").render(), "div");
    assert_eq!(id("main").render(), "#main");
    assert_eq!(class("highlight").render(), ".highlight");
    assert_eq!(attr("type=text").render(), "[type=text]");
    assert_eq!(pseudo_class("hover").render(), ":hover");
    assert_eq!(pseudo_element("before").render(), "::before");
}

#[test]
fn test_facade_records_seed_kind() {
    assert_eq!(element("p").last_kind(), Some(ComponentKind::Element));
    assert_eq!(
        pseudo_element("after").last_kind(),
        Some(ComponentKind::PseudoElement)
    );
}

#[test]
fn test_text_is_not_validated() {
    assert_eq!(class("").render(), ".");
    assert_eq!(id("has space").render(), "#has space");
    assert_eq!(attr("href$=\".png\"").render(), "[href$=\".png\"]");
}

// Compound Selector Tests
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

#[test]
fn test_id_with_repeated_classes() -> Result<(), SelectorError> {
    let selector = id("main").class("container")?.class("editable")?.render();
    assert_eq!(selector, "#main.container.editable");
    Ok(())
}

#[test]
fn test_element_attribute_pseudo_class() -> Result<(), SelectorError> {
    let selector = element("a")
        .attr("href$=\".png\"")?
        .pseudo_class("focus")?
        .render();
    assert_eq!(selector, "a[href$=\".png\"]:focus");
    Ok(())
}

#[test]
fn test_full_order() -> Result<(), SelectorError> {
    let selector = element("input")
        .id("email")?
        .class("field")?
        .class("wide")?
        .attr("type=email")?
        .attr("required")?
        .pseudo_class("focus")?
        .pseudo_class("invalid")?
        .pseudo_element("placeholder")?
        .render();
    assert_eq!(
        selector,
        "input#email.field.wide[type=email][required]:focus:invalid::placeholder"
    );
    Ok(())
}

#[test]
fn test_kinds_may_be_skipped() -> Result<(), SelectorError> {
    assert_eq!(
        element("li").pseudo_class("first-child")?.render(),
        "li:first-child"
    );
    assert_eq!(id("nav").pseudo_element("after")?.render(), "#nav::after");
    assert_eq!(class("btn").attr("disabled")?.render(), ".btn[disabled]");
    Ok(())
}

// Singleton Tests

#[test]
fn test_duplicate_element() {
    let err = element("a").element("b").unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicateSingleton {
            kind: ComponentKind::Element
        }
    );
}

#[test]
fn test_duplicate_id() {
    let mut expr = element("div");
    let _ = expr.id("a").unwrap();
    assert_eq!(
        expr.id("b").unwrap_err(),
        SelectorError::DuplicateSingleton {
            kind: ComponentKind::Id
        }
    );
}

#[test]
fn test_duplicate_pseudo_element() {
    let err = pseudo_element("before")
        .pseudo_element("after")
        .unwrap_err();
    assert!(matches!(err, SelectorError::DuplicateSingleton { .. }));
    assert_eq!(err.attempted(), ComponentKind::PseudoElement);
}

#[test]
fn test_duplicate_message_names_singletons() {
    let message = element("a").element("b").unwrap_err().to_string();
    assert!(message.contains("element, id, and pseudo-element"));
    assert!(message.contains("once"));
}

// Ordering Tests

#[test]
fn test_class_then_element() {
    let err = class("x").element("y").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OrderViolation {
            previous: ComponentKind::Class,
            attempted: ComponentKind::Element
        }
    );
}

#[test]
fn test_class_then_id() {
    let err = class("x").id("y").unwrap_err();
    assert!(matches!(
        err,
        SelectorError::OrderViolation {
            previous: ComponentKind::Class,
            attempted: ComponentKind::Id
        }
    ));
}

#[test]
fn test_pseudo_element_then_pseudo_class() {
    let err = element("p")
        .pseudo_element("first-line")
        .unwrap()
        .pseudo_class("hover")
        .unwrap_err();
    assert_eq!(err.attempted(), ComponentKind::PseudoClass);
}

#[test]
fn test_order_message_lists_order() {
    let message = attr("href").class("x").unwrap_err().to_string();
    assert!(message.contains("element, id, class, attribute, pseudo-class, pseudo-element"));
}

// Render Reset Tests

#[test]
fn test_second_render_is_empty() -> Result<(), SelectorError> {
    let mut expr = element("ul");
    let _ = expr.class("menu")?;
    assert_eq!(expr.render(), "ul.menu");
    assert_eq!(expr.render(), "");
    Ok(())
}

#[test]
fn test_reset_expression_behaves_like_new() -> Result<(), SelectorError> {
    let mut expr = class("a");
    assert_eq!(expr.render(), ".a");
    // Would be an order violation before the reset.
    let _ = expr.element("span")?.id("x")?;
    assert_eq!(expr.render(), "span#x");
    Ok(())
}

// Combinator Tests
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_combine_next_sibling() -> Result<(), SelectorError> {
    let mut selector = combine(
        element("div").id("main")?,
        "+",
        element("table").id("data")?,
    );
    assert_eq!(selector.render(), "div#main + table#data");
    Ok(())
}

#[test]
fn test_combine_descendant_keeps_padding() {
    let mut selector = combine(&mut element("a"), " ", &mut element("b"));
    assert_eq!(selector.render(), "a   b");

    let mut typed = combine(&mut element("a"), Combinator::Descendant, &mut element("b"));
    assert_eq!(typed.render(), "a   b");
}

#[test]
fn test_combine_typed_combinators() {
    let cases = [
        (Combinator::Child, "ul > li"),
        (Combinator::NextSibling, "ul + li"),
        (Combinator::SubsequentSibling, "ul ~ li"),
    ];
    for (combinator, expected) in cases {
        let mut selector = combine(&mut element("ul"), combinator, &mut element("li"));
        assert_eq!(selector.render(), expected);
    }
}

#[test]
fn test_combine_resets_operands() {
    let mut left = element("nav");
    let mut right = class("item");
    let mut selector = combine(&mut left, ">", &mut right);
    assert!(left.is_empty());
    assert!(right.is_empty());
    assert_eq!(left.render(), "");
    assert_eq!(selector.render(), "nav > .item");
}

#[test]
fn test_combine_is_untagged() {
    let selector = combine(&mut class("a"), ">", &mut class("b"));
    assert_eq!(selector.last_kind(), None);
    assert_eq!(selector.len(), 1);
}

#[test]
fn test_combine_nested() {
    let mut inner = combine(&mut element("main"), ">", &mut element("article"));
    let mut outer = combine(&mut inner, "~", &mut element("aside"));
    assert_eq!(outer.render(), "main > article ~ aside");
}

#[test]
fn test_fragments_serialize() -> Result<(), SelectorError> {
    let mut expr = element("a");
    let _ = expr.class("external")?;
    let json = serde_json::to_string(&expr.fragments().collect::<Vec<_>>()).unwrap();
    assert_eq!(
        json,
        r#"[{"kind":"element","text":"a"},{"kind":"class","text":".external"}]"#
    );
    // Inspection does not reset.
    assert_eq!(expr.render(), "a.external");
    Ok(())
}
