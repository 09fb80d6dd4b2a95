/// One lexical component of a complex selector.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Part {
    Id(String),
    Class(String),
    Attribute(String),
    PseudoClass { name: String, args: Option<String> },
    PseudoElement(String),
    Type(String),
    Universal,
    Combinator,
}

/// Pseudo-elements that still accept single-colon syntax.
pub(super) const LEGACY_PSEUDO_ELEMENTS: &[&str] =
    &["before", "after", "first-line", "first-letter"];

/// Split a selector list on commas that are not nested in brackets,
/// parentheses or strings.
pub(crate) fn split_list(selector: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in selector.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                out.push(selector[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(selector[start..].trim());
    out.retain(|s| !s.is_empty());
    out
}

pub(super) fn tokenize(selector: &str) -> Vec<Part> {
    let chars: Vec<char> = selector.chars().collect();
    let mut parts = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() || matches!(c, '>' | '+' | '~') => {
                if parts.last() != Some(&Part::Combinator) {
                    parts.push(Part::Combinator);
                }
                i += 1;
            }
            '#' => {
                let (ident, next) = read_ident(&chars, i + 1);
                parts.push(Part::Id(ident));
                i = next;
            }
            '.' => {
                let (ident, next) = read_ident(&chars, i + 1);
                parts.push(Part::Class(ident));
                i = next;
            }
            '[' => {
                let (inner, next) = read_balanced(&chars, i, '[', ']');
                parts.push(Part::Attribute(inner.trim().to_string()));
                i = next;
            }
            ':' if chars.get(i + 1) == Some(&':') => {
                let (name, next) = read_ident(&chars, i + 2);
                i = next;
                if chars.get(i) == Some(&'(') {
                    i = read_balanced(&chars, i, '(', ')').1;
                }
                parts.push(Part::PseudoElement(name.to_ascii_lowercase()));
            }
            ':' => {
                let (name, next) = read_ident(&chars, i + 1);
                i = next;
                let mut args = None;
                if chars.get(i) == Some(&'(') {
                    let (inner, next) = read_balanced(&chars, i, '(', ')');
                    args = Some(inner.trim().to_string());
                    i = next;
                }
                parts.push(Part::PseudoClass {
                    name: name.to_ascii_lowercase(),
                    args,
                });
            }
            '*' => {
                parts.push(Part::Universal);
                i += 1;
            }
            c if is_ident_start(c) => {
                let (ident, next) = read_ident(&chars, i);
                // `ns|tag`: the namespace prefix does not count
                if chars.get(next) == Some(&'|') && chars.get(next + 1) != Some(&'=') {
                    i = next + 1;
                    continue;
                }
                parts.push(Part::Type(ident));
                i = next;
            }
            _ => i += 1,
        }
    }

    // Leading/trailing whitespace is not a combinator.
    while parts.last() == Some(&Part::Combinator) {
        parts.pop();
    }
    if parts.first() == Some(&Part::Combinator) {
        parts.remove(0);
    }
    parts
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '-' || c == '\\' || !c.is_ascii()
}

fn read_ident(chars: &[char], start: usize) -> (String, usize) {
    let mut out = String::new();
    let mut i = start;
    while let Some(&c) = chars.get(i) {
        if c == '\\' {
            if let Some(&escaped) = chars.get(i + 1) {
                out.push(escaped);
                i += 2;
                continue;
            }
            break;
        }
        if c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            out.push(c);
            i += 1;
        } else {
            break;
        }
    }
    (out, i)
}

/// Read from an opening delimiter at `start` to its matching close. Returns
/// the inner text and the index just past the close.
fn read_balanced(chars: &[char], start: usize, open: char, close: char) -> (String, usize) {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut inner = String::new();
    let mut i = start;

    while let Some(&c) = chars.get(i) {
        i += 1;
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            inner.push(c);
            continue;
        }
        if c == open {
            depth += 1;
            if depth == 1 {
                continue;
            }
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return (inner, i);
            }
        } else if c == '"' || c == '\'' {
            quote = Some(c);
        }
        inner.push(c);
    }
    (inner, i)
}
