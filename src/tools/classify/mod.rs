mod utils;


pub use utils::normalize_selector;
use utils::*;

use crate::error::FieldError;
use crate::types::SelectorKind;

/// Classify a selector string. First matching rule wins:
///
/// 1. `#` + bare identifier → [`SelectorKind::Id`]
/// 2. `.` + bare identifier → [`SelectorKind::Class`]
/// 3. leading `/` or `(/` → [`SelectorKind::Xpath`]
/// 4. bare tag name → [`SelectorKind::Tag`]
/// 5. anything else → [`SelectorKind::Css`]
///
/// Empty and whitespace-only input is rejected rather than given a kind, as is
/// relative XPath (`./a`, `../a`) which no rule can place with confidence.
///
/// # Examples
/// ```
/// use selector_parser::{classify, SelectorKind};
///
/// assert_eq!(classify("#main").unwrap(), SelectorKind::Id);
/// assert_eq!(classify("#main .child").unwrap(), SelectorKind::Css);
/// assert_eq!(classify("//div[@id='x']").unwrap(), SelectorKind::Xpath);
/// assert!(classify("   ").is_err());
/// ```
pub fn classify(raw: &str) -> Result<SelectorKind, FieldError> {
    let selector = normalize_selector(raw);
    if selector.is_empty() {
        return Err(FieldError::invalid("empty selector"));
    }
    if is_relative_xpath(&selector) {
        return Err(FieldError::unsupported(
            "relative XPath; anchor the expression with `/` or `//`",
        ));
    }

    let kind = if is_shorthand(&selector, '#') {
        SelectorKind::Id
    } else if is_shorthand(&selector, '.') {
        SelectorKind::Class
    } else if is_xpath(&selector) {
        SelectorKind::Xpath
    } else if is_tag(&selector) {
        SelectorKind::Tag
    } else {
        SelectorKind::Css
    };
    Ok(kind)
}
