use crate::patterns::{BARE_TOKEN, TAG_NAME};

/// Trim and collapse whitespace runs to a single space. Quoted strings are
/// copied through untouched.
pub fn normalize_selector(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut quote: Option<char> = None;
    let mut pending_space = false;

    for c in raw.trim().chars() {
        if let Some(q) = quote {
            out.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        if c == '"' || c == '\'' {
            quote = Some(c);
        }
        out.push(c);
    }
    out
}

pub(super) fn is_shorthand(selector: &str, prefix: char) -> bool {
    selector
        .strip_prefix(prefix)
        .is_some_and(|rest| BARE_TOKEN.is_match(rest))
}

pub(super) fn is_xpath(selector: &str) -> bool {
    selector.starts_with('/') || selector.starts_with("(/")
}

pub(super) fn is_relative_xpath(selector: &str) -> bool {
    selector.starts_with("./") || selector.starts_with("../")
}

pub(super) fn is_tag(selector: &str) -> bool {
    TAG_NAME.is_match(selector)
}
