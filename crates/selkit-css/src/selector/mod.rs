//! CSS selector building
//!
//! This module assembles selector text per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/), enforcing the
//! component order and single-use rules of a compound selector. Text passed
//! in is never parsed or validated.

mod combinator;
mod expression;
mod kind;

pub use combinator::Combinator;
pub use expression::{Fragment, SelectorExpression};
pub use kind::ComponentKind;

/// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
///
/// Start a selector with a type selector: `element("div")` renders `div`.
#[must_use]
pub fn element(name: &str) -> SelectorExpression {
    SelectorExpression::seeded(ComponentKind::Element, name)
}

/// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
///
/// Start a selector with an ID selector: `id("main")` renders `#main`.
#[must_use]
pub fn id(name: &str) -> SelectorExpression {
    SelectorExpression::seeded(ComponentKind::Id, name)
}

/// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
///
/// Start a selector with a class selector: `class("nav")` renders `.nav`.
#[must_use]
pub fn class(name: &str) -> SelectorExpression {
    SelectorExpression::seeded(ComponentKind::Class, name)
}

/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// Start a selector with an attribute selector: `attr("href")` renders `[href]`.
#[must_use]
pub fn attr(spec: &str) -> SelectorExpression {
    SelectorExpression::seeded(ComponentKind::Attribute, spec)
}

/// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
///
/// Start a selector with a pseudo-class: `pseudo_class("hover")` renders `:hover`.
#[must_use]
pub fn pseudo_class(name: &str) -> SelectorExpression {
    SelectorExpression::seeded(ComponentKind::PseudoClass, name)
}

/// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
///
/// Start a selector with a pseudo-element: `pseudo_element("after")` renders `::after`.
#[must_use]
pub fn pseudo_element(name: &str) -> SelectorExpression {
    SelectorExpression::seeded(ComponentKind::PseudoElement, name)
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Join two selectors with a combinator.
///
/// Both operands are rendered, which resets them. The result holds the single
/// fragment `"<left> <combinator> <right>"`: one space is always placed on
/// each side of the combinator text, so [`Combinator::Descendant`] (or `" "`)
/// produces three spaces between the operands.
///
/// The result carries no component kind, so the next append is not order
/// checked against anything inside it.
#[must_use]
pub fn combine(
    left: &mut SelectorExpression,
    combinator: impl AsRef<str>,
    right: &mut SelectorExpression,
) -> SelectorExpression {
    let left = left.render();
    let right = right.render();
    SelectorExpression::composite(format!("{left} {} {right}", combinator.as_ref()))
}
