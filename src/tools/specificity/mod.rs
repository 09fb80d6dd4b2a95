pub mod types;
mod utils;

#[cfg(test)]
mod tests;

pub use types::*;
pub(crate) use utils::split_list;
use utils::*;

use crate::types::SelectorKind;

/// Functional pseudo-classes nested deeper than this score zero.
pub(crate) const MAX_NESTING: usize = 64;

/// Specificity of a CSS selector.
///
/// IDs count toward the first component; classes, attribute selectors and
/// pseudo-classes toward the second; type selectors and pseudo-elements toward
/// the third. `*` and combinators count for nothing. `:is()`, `:not()` and
/// `:has()` take the specificity of their most specific argument and
/// `:where()` contributes zero.
///
/// For a comma-separated list the **maximum** branch is returned; use
/// [`branch_specificities`] for the per-branch breakdown.
///
/// # Examples
/// ```
/// use selector_parser::{specificity, SpecificityScore};
///
/// assert_eq!(specificity("#main div"), SpecificityScore::new(1, 0, 1));
/// assert_eq!(specificity("h1.title, #a"), SpecificityScore::new(1, 0, 0));
/// ```
pub fn specificity(selector: &str) -> SpecificityScore {
    max_of(selector, 0)
}

/// Specificity of each selector in a comma-separated list, in order.
pub fn branch_specificities(selector: &str) -> Vec<SpecificityScore> {
    branches_at(selector, 0)
}

/// Specificity where it is defined: valid CSS only. Shorthands and XPath
/// return `None` ("not applicable"), never zero.
pub fn specificity_for(selector: &str, kind: SelectorKind) -> Option<SpecificityScore> {
    match kind {
        SelectorKind::Css => Some(specificity(selector)),
        _ => None,
    }
}

/// Break the first selector of a list into its simple-selector components.
pub fn extract_selector_parts(selector: &str) -> SelectorParts {
    let mut out = SelectorParts::default();
    let Some(first) = split_list(selector).into_iter().next() else {
        return out;
    };

    let parts = tokenize(first);
    if let Some(Part::Type(tag)) = parts.first() {
        out.tag = Some(tag.clone());
    }
    for part in parts {
        match part {
            Part::Id(id) => out.ids.push(id),
            Part::Class(class) => out.classes.push(class),
            Part::Attribute(attr) => out.attributes.push(attr),
            Part::PseudoClass { name, .. } | Part::PseudoElement(name) => out.pseudo.push(name),
            _ => {}
        }
    }
    out
}

fn branches_at(list: &str, depth: usize) -> Vec<SpecificityScore> {
    split_list(list)
        .into_iter()
        .map(|branch| score_parts(&tokenize(branch), depth))
        .collect()
}

fn max_of(list: &str, depth: usize) -> SpecificityScore {
    if depth > MAX_NESTING {
        return SpecificityScore::default();
    }
    branches_at(list, depth).into_iter().max().unwrap_or_default()
}

fn score_parts(parts: &[Part], depth: usize) -> SpecificityScore {
    let mut score = SpecificityScore::default();
    for part in parts {
        score += match part {
            Part::Id(_) => SpecificityScore::new(1, 0, 0),
            Part::Class(_) | Part::Attribute(_) => SpecificityScore::new(0, 1, 0),
            Part::PseudoElement(_) | Part::Type(_) => SpecificityScore::new(0, 0, 1),
            Part::PseudoClass { name, args } => pseudo_class(name, args.as_deref(), depth),
            Part::Universal | Part::Combinator => SpecificityScore::default(),
        };
    }
    score
}

fn pseudo_class(name: &str, args: Option<&str>, depth: usize) -> SpecificityScore {
    match name {
        n if LEGACY_PSEUDO_ELEMENTS.contains(&n) => SpecificityScore::new(0, 0, 1),
        "where" => SpecificityScore::default(),
        "is" | "not" | "has" | "matches" | "any" => args
            .map(|list| max_of(list, depth + 1))
            .unwrap_or_default(),
        "nth-child" | "nth-last-child" => {
            let of_selector = args
                .and_then(|a| a.split_once(" of "))
                .map(|(_, list)| max_of(list, depth + 1))
                .unwrap_or_default();
            SpecificityScore::new(0, 1, 0) + of_selector
        }
        _ => SpecificityScore::new(0, 1, 0),
    }
}
