//! Selector component kinds and their punctuation.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// The kind of a simple selector inside a compound selector.
///
/// Variants are declared in the order they must appear in a compound
/// selector, so the derived [`Ord`] is the ordering the builder enforces:
/// `Element < Id < Class < Attribute < PseudoClass < PseudoElement`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Rendered verbatim: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Rendered as `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Rendered as `.container`
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Rendered as `[href$=".png"]`; the text between the brackets is not inspected.
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// "The syntax of a pseudo-class consists of a ":" (U+003A COLON)
    /// followed by the name of the pseudo-class."
    ///
    /// Rendered as `:focus`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "A pseudo-element is represented by two colons (::) followed by the
    /// name of the pseudo-element."
    ///
    /// Rendered as `::before`
    PseudoElement,
}

impl ComponentKind {
    /// Whether at most one component of this kind may appear per selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Wrap `text` in this kind's punctuation.
    #[must_use]
    pub fn punctuate(self, text: &str) -> String {
        match self {
            Self::Element => text.to_string(),
            Self::Id => format!("#{text}"),
            Self::Class => format!(".{text}"),
            Self::Attribute => format!("[{text}]"),
            Self::PseudoClass => format!(":{text}"),
            Self::PseudoElement => format!("::{text}"),
        }
    }
}
