//! Order-checked CSS selector builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Simple selector fragments** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element components
//!   - Punctuation for each component kind (`#`, `.`, `[...]`, `:`, `::`)
//!
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Component ordering: element, id, class, attribute, pseudo-class, pseudo-element
//!   - At most one element, id and pseudo-element per compound
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Joining two compounds with a combinator
//!
//! # Not In Scope
//!
//! - Parsing selectors back from text
//! - Validating attribute or pseudo-class syntax (text is passed through verbatim)
//! - Specificity and matching
//!
//! # Example
//!
//! ```
//! use selkit_css::{combine, element, id, SelectorError};
//!
//! # fn main() -> Result<(), SelectorError> {
//! let selector = id("main").class("container")?.class("editable")?.render();
//! assert_eq!(selector, "#main.container.editable");
//!
//! let mut sibling = combine(element("div").id("main")?, "+", element("table").id("data")?);
//! assert_eq!(sibling.render(), "div#main + table#data");
//! # Ok(())
//! # }
//! ```

/// Errors raised while appending selector components.
pub mod error;
/// Selector components, expressions and the builder facade.
pub mod selector;

// Re-exports for convenience
pub use error::SelectorError;
pub use selector::{
    Combinator, ComponentKind, Fragment, SelectorExpression, attr, class, combine, element, id,
    pseudo_class, pseudo_element,
};
