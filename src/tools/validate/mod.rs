mod utils;


use crate::error::FieldError;
use crate::patterns::{CSS_IDENT, TAG_NAME};
use crate::tools::classify::normalize_selector;
use crate::tools::xpath;
use crate::types::SelectorKind;
use utils::check_css;

/// Check `raw` against the grammar of `kind`.
///
/// Grammar failures come back as [`FieldError::InvalidSelector`] carrying the
/// underlying parser's message; nothing here panics or aborts a batch.
///
/// CSS is checked against selector grammar, not against what the matching
/// engine implements: `p::before` is valid even though it can never be
/// matched.
pub fn validate(raw: &str, kind: SelectorKind) -> Result<(), FieldError> {
    let selector = normalize_selector(raw);
    if selector.is_empty() {
        return Err(FieldError::invalid("empty selector"));
    }
    match kind {
        SelectorKind::Id => validate_shorthand(&selector, '#', "ID"),
        SelectorKind::Class => validate_shorthand(&selector, '.', "class"),
        SelectorKind::Tag => validate_tag(&selector),
        SelectorKind::Xpath => validate_xpath(&selector),
        SelectorKind::Css => validate_css(&selector),
    }
}

fn validate_shorthand(selector: &str, prefix: char, label: &str) -> Result<(), FieldError> {
    let Some(ident) = selector.strip_prefix(prefix) else {
        return Err(FieldError::invalid(format!(
            "{label} selector must start with `{prefix}`"
        )));
    };
    if ident.is_empty() {
        return Err(FieldError::invalid(format!(
            "{label} selector has no name after `{prefix}`"
        )));
    }
    if !CSS_IDENT.is_match(ident) {
        return Err(FieldError::invalid(format!(
            "`{ident}` is not a valid {label} name"
        )));
    }
    Ok(())
}

fn validate_tag(selector: &str) -> Result<(), FieldError> {
    if TAG_NAME.is_match(selector) {
        Ok(())
    } else {
        Err(FieldError::invalid(format!(
            "`{selector}` is not a valid tag name"
        )))
    }
}

fn validate_xpath(selector: &str) -> Result<(), FieldError> {
    xpath::compile(selector).map(|_| ())
}

fn validate_css(selector: &str) -> Result<(), FieldError> {
    check_css(selector, 0).map_err(FieldError::invalid)
}
