//! The selector expression state machine.

use std::collections::HashSet;

use selkit_common::warning::warn_once;
use serde::Serialize;

use super::kind::ComponentKind;
use crate::error::SelectorError;

/// One rendered piece of a selector, punctuation included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// The component kind, or `None` for a pre-rendered combination.
    pub kind: Option<ComponentKind>,
    /// The rendered text, e.g. `#main` or `div#main + table#data`.
    pub text: String,
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
///
/// Accumulates components in order, rejecting appends that would break the
/// kind ordering or repeat a singleton kind. Created by the facade functions
/// ([`element`](super::element), [`id`](super::id), ...) or by
/// [`combine`](super::combine).
///
/// [`render`](Self::render) returns the selector text and resets the
/// expression: fragments, singleton usage and the ordering state are all
/// cleared, so a second render returns an empty string.
#[derive(Debug, Default)]
pub struct SelectorExpression {
    /// Rendered fragments in append order.
    fragments: Vec<Fragment>,
    /// Singleton kinds already present.
    used: HashSet<ComponentKind>,
    /// Kind of the last successful append; `None` when fresh or combined.
    last_kind: Option<ComponentKind>,
}

impl SelectorExpression {
    /// An expression holding a single component.
    pub(crate) fn seeded(kind: ComponentKind, text: &str) -> Self {
        let mut expr = Self::default();
        expr.record(kind, text);
        expr
    }

    /// An expression holding pre-rendered text with no kind.
    pub(crate) fn composite(text: String) -> Self {
        Self {
            fragments: vec![Fragment { kind: None, text }],
            used: HashSet::new(),
            last_kind: None,
        }
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append a type selector, rendered verbatim.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingleton`] if an element is already present,
    /// [`SelectorError::OrderViolation`] if any component precedes it.
    pub fn element(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(ComponentKind::Element, name)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append `#name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingleton`] if an id is already present,
    /// [`SelectorError::OrderViolation`] if the last component must follow an id.
    pub fn id(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(ComponentKind::Id, name)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append `.name`. Classes may repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] after an attribute, pseudo-class or
    /// pseudo-element.
    pub fn class(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(ComponentKind::Class, name)
    }

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append `[spec]`. Attributes may repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] after a pseudo-class or pseudo-element.
    pub fn attr(&mut self, spec: &str) -> Result<&mut Self, SelectorError> {
        self.append(ComponentKind::Attribute, spec)
    }

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append `:name`. Pseudo-classes may repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] after a pseudo-element.
    pub fn pseudo_class(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(ComponentKind::PseudoClass, name)
    }

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Append `::name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingleton`] if a pseudo-element is already present.
    pub fn pseudo_element(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(ComponentKind::PseudoElement, name)
    }

    /// Append a component of any kind.
    ///
    /// The singleton check runs before the ordering check, so `a` followed by
    /// `b` reports a duplicate element rather than an ordering problem.
    ///
    /// # Errors
    ///
    /// See [`SelectorError`]. A rejected append leaves the expression unchanged.
    pub fn append(&mut self, kind: ComponentKind, text: &str) -> Result<&mut Self, SelectorError> {
        if kind.is_singleton() && self.used.contains(&kind) {
            return Err(SelectorError::DuplicateSingleton { kind });
        }

        // Only the immediately preceding kind is compared. Accepted kinds never
        // decrease, so this is the same as comparing against the maximum.
        if let Some(previous) = self.last_kind {
            if previous > kind {
                return Err(SelectorError::OrderViolation {
                    previous,
                    attempted: kind,
                });
            }
        } else if !self.fragments.is_empty() {
            warn_once(
                "Selector",
                "appending to a combined selector; ordering is only checked from here on",
            );
        }

        self.record(kind, text);
        Ok(self)
    }

    /// Join all fragments, then reset the expression.
    ///
    /// After this call the expression is empty and behaves like a fresh one:
    /// no singleton kinds are marked used and any kind may be appended next.
    #[must_use = "rendering resets the expression; the selector is only available from this return value"]
    pub fn render(&mut self) -> String {
        if self.fragments.is_empty() {
            warn_once(
                "Selector",
                "render() on an empty expression; expressions reset after each render",
            );
        }

        let rendered: String = self.fragments.drain(..).map(|f| f.text).collect();
        self.used.clear();
        self.last_kind = None;
        rendered
    }

    /// Render the expression and consume it, so it cannot be rendered again.
    #[cfg(feature = "consuming-render")]
    #[must_use]
    pub fn finish(mut self) -> String {
        self.render()
    }

    /// `true` if nothing has been appended since creation or the last render.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragments accumulated so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Kind of the last successfully appended component.
    #[must_use]
    pub const fn last_kind(&self) -> Option<ComponentKind> {
        self.last_kind
    }

    /// Fragments accumulated so far, in append order. Does not reset.
    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    fn record(&mut self, kind: ComponentKind, text: &str) {
        if kind.is_singleton() {
            let _ = self.used.insert(kind);
        }
        self.fragments.push(Fragment {
            kind: Some(kind),
            text: kind.punctuate(text),
        });
        self.last_kind = Some(kind);
    }
}
