//! Command-line parts and how they become a selector.

use anyhow::{Context, Result, anyhow, bail};
use selkit_css::{
    Combinator, ComponentKind, Fragment, SelectorExpression, attr, class, combine, element, id,
    pseudo_class, pseudo_element,
};
use serde::Serialize;

/// One positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// `<kind>=<text>`, e.g. `class=active`.
    Component(ComponentKind, String),
    /// A combinator token such as `>` or `descendant`.
    Combinator(Combinator),
}

impl Part {
    /// Parse a single argument.
    ///
    /// Combinator tokens are checked first, so `>` is never read as a component.
    pub fn parse(arg: &str) -> Result<Self> {
        if let Ok(combinator) = arg.parse::<Combinator>() {
            return Ok(Self::Combinator(combinator));
        }

        let (kind, text) = arg
            .split_once('=')
            .ok_or_else(|| anyhow!("expected <kind>=<text> or a combinator, got `{arg}`"))?;
        let kind = kind.parse::<ComponentKind>().with_context(|| {
            format!(
                "unknown component kind `{kind}` (expected element, id, class, attribute, pseudo-class or pseudo-element)"
            )
        })?;
        Ok(Self::Component(kind, text.to_string()))
    }
}

/// The result of building a selector from parts.
#[derive(Debug, Serialize)]
pub struct Built {
    /// Rendered selector text.
    pub selector: String,
    /// Fragments of each compound, captured before combining.
    pub compounds: Vec<Vec<Fragment>>,
}

/// Start an expression with the facade entry point for `kind`.
fn start(kind: ComponentKind, text: &str) -> SelectorExpression {
    match kind {
        ComponentKind::Element => element(text),
        ComponentKind::Id => id(text),
        ComponentKind::Class => class(text),
        ComponentKind::Attribute => attr(text),
        ComponentKind::PseudoClass => pseudo_class(text),
        ComponentKind::PseudoElement => pseudo_element(text),
    }
}

/// A compound's components and the combinator joining it to the previous one.
type Compound<'a> = (Option<Combinator>, Vec<(ComponentKind, &'a str)>);

/// Split parts into compounds separated by combinators.
fn split_compounds(parts: &[Part]) -> Result<Vec<Compound<'_>>> {
    let mut compounds = vec![(None, Vec::new())];
    for part in parts {
        match part {
            Part::Component(kind, text) => {
                if let Some((_, components)) = compounds.last_mut() {
                    components.push((*kind, text.as_str()));
                }
            }
            Part::Combinator(combinator) => {
                if compounds.last().is_none_or(|(_, c)| c.is_empty()) {
                    bail!("combinator `{combinator}` must sit between two compounds");
                }
                compounds.push((Some(*combinator), Vec::new()));
            }
        }
    }
    if compounds.last().is_none_or(|(_, c)| c.is_empty()) {
        bail!("selector must end with a component");
    }
    Ok(compounds)
}

/// Build every compound, then fold them left to right with `combine`.
pub fn build(parts: &[Part]) -> Result<Built> {
    let mut exprs = Vec::new();
    let mut snapshots = Vec::new();

    for (index, (combinator, components)) in split_compounds(parts)?.into_iter().enumerate() {
        let Some(((first_kind, first_text), rest)) = components.split_first() else {
            continue;
        };
        let mut expr = start(*first_kind, first_text);
        for (kind, text) in rest {
            let _ = expr
                .append(*kind, text)
                .with_context(|| format!("in compound {}", index + 1))?;
        }
        snapshots.push(expr.fragments().cloned().collect());
        exprs.push((combinator, expr));
    }

    let mut exprs = exprs.into_iter();
    let (_, mut selector) = exprs
        .next()
        .ok_or_else(|| anyhow!("no selector components given"))?;
    for (combinator, mut right) in exprs {
        let combinator = combinator.unwrap_or(Combinator::Descendant);
        selector = combine(&mut selector, combinator, &mut right);
    }

    Ok(Built {
        selector: finish(selector),
        compounds: snapshots,
    })
}

#[cfg(feature = "consuming-render")]
fn finish(selector: SelectorExpression) -> String {
    selector.finish()
}

#[cfg(not(feature = "consuming-render"))]
fn finish(mut selector: SelectorExpression) -> String {
    selector.render()
}
