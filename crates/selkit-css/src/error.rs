//! Builder errors.
//!
//! Both variants are fatal to the build chain that raised them; the
//! expression is left exactly as it was before the rejected append.

use crate::selector::ComponentKind;

/// An append rejected by a [`SelectorExpression`](crate::SelectorExpression).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    /// "If it contains a type selector or universal selector, that selector
    /// must come first in the sequence. Only one type selector or universal
    /// selector is allowed in the sequence."
    ///
    /// The same single-use rule is applied to ID selectors and pseudo-elements.
    #[error(
        "duplicate {kind} selector: element, id, and pseudo-element may each appear only once per selector"
    )]
    DuplicateSingleton {
        /// The singleton kind that was appended a second time.
        kind: ComponentKind,
    },

    /// A component was appended after a component that must follow it.
    #[error(
        "{attempted} selector cannot follow {previous} selector: components must appear in the order element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// The kind of the last component successfully appended.
        previous: ComponentKind,
        /// The kind that was rejected.
        attempted: ComponentKind,
    },
}

impl SelectorError {
    /// The component kind whose append was rejected.
    #[must_use]
    pub const fn attempted(&self) -> ComponentKind {
        match self {
            Self::DuplicateSingleton { kind } => *kind,
            Self::OrderViolation { attempted, .. } => *attempted,
        }
    }
}
