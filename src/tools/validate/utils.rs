use crate::tools::specificity::{split_list, MAX_NESTING};
use scraper::Selector;

/// Stand-in for pseudo-classes and pseudo-elements the matching engine does
/// not implement. Grammatically it sits wherever they do.
const PLACEHOLDER: &str = ":first-child";

/// Functional pseudo-classes whose argument is itself a selector list.
const SELECTOR_LIST_PSEUDOS: &[&str] = &["is", "where", "matches", "any", "-webkit-any", "not", "has"];

/// Checks `selector` against CSS selector grammar.
///
/// Pseudo-classes and pseudo-elements are swapped for [`PLACEHOLDER`] and
/// their selector-list arguments checked on their own, so grammar does not
/// depend on which pseudos scraper can match. What is left goes through
/// `scraper::Selector::parse`.
pub(super) fn check_css(selector: &str, depth: usize) -> Result<(), String> {
    if depth > MAX_NESTING {
        return Err("selector nested too deeply".to_string());
    }
    let reduced = reduce(selector, depth)?;
    Selector::parse(&reduced)
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}

fn check_list(list: &str, relative: bool, depth: usize) -> Result<(), String> {
    let branches = split_list(list);
    if branches.is_empty() {
        return Err("empty selector list".to_string());
    }
    for branch in branches {
        let branch = if relative {
            branch
                .trim_start_matches(|c| matches!(c, '>' | '+' | '~'))
                .trim_start()
        } else {
            branch
        };
        check_css(branch, depth + 1)?;
    }
    Ok(())
}

fn reduce(selector: &str, depth: usize) -> Result<String, String> {
    let chars: Vec<char> = selector.chars().collect();
    let mut out = String::with_capacity(selector.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                out.extend(&chars[i..(i + 2).min(chars.len())]);
                i += 2;
            }
            '"' | '\'' => {
                let end = closing_quote(&chars, i)?;
                out.extend(&chars[i..end]);
                i = end;
            }
            '[' => {
                let end = closing(&chars, i, '[', ']')?;
                out.extend(&chars[i..end]);
                i = end;
            }
            ':' => i = pseudo(&chars, i, &mut out, depth)?,
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    Ok(out)
}

/// Rewrites the pseudo at `start` into `out`; returns the index past it.
fn pseudo(chars: &[char], start: usize, out: &mut String, depth: usize) -> Result<usize, String> {
    let element = chars.get(start + 1) == Some(&':');
    let (name, mut i) = read_name(chars, if element { start + 2 } else { start + 1 });
    if name.is_empty() {
        return Err("expected a name after `:`".to_string());
    }
    let name = name.to_ascii_lowercase();

    let mut args = None;
    if chars.get(i) == Some(&'(') {
        let end = closing(chars, i, '(', ')')?;
        args = Some(chars[i + 1..end - 1].iter().collect::<String>());
        i = end;
    }

    match args {
        Some(args) if !element && (name == "nth-child" || name == "nth-last-child") => {
            let an_b = match args.split_once(" of ") {
                Some((an_b, list)) => {
                    check_list(list, false, depth)?;
                    an_b
                }
                None => args.as_str(),
            };
            out.push_str(&format!(":{name}({})", an_b.trim()));
        }
        Some(args) if !element && name.starts_with("nth-") => {
            out.push_str(&format!(":{name}({args})"));
        }
        Some(args) if !element && SELECTOR_LIST_PSEUDOS.contains(&name.as_str()) => {
            check_list(&args, name == "has", depth)?;
            out.push_str(PLACEHOLDER);
        }
        _ => out.push_str(PLACEHOLDER),
    }
    Ok(i)
}

fn read_name(chars: &[char], start: usize) -> (String, usize) {
    let mut i = start;
    while chars
        .get(i)
        .is_some_and(|&c| c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii())
    {
        i += 1;
    }
    (chars[start..i].iter().collect(), i)
}

/// Index just past the quote that closes the string opening at `start`.
fn closing_quote(chars: &[char], start: usize) -> Result<usize, String> {
    let quote = chars[start];
    let mut i = start + 1;
    while let Some(&c) = chars.get(i) {
        match c {
            '\\' => i += 2,
            c if c == quote => return Ok(i + 1),
            _ => i += 1,
        }
    }
    Err("unterminated string".to_string())
}

/// Index just past the `close` matching the `open` at `start`.
fn closing(chars: &[char], start: usize, open: char, close: char) -> Result<usize, String> {
    let mut depth = 0usize;
    let mut i = start;
    while let Some(&c) = chars.get(i) {
        match c {
            '\\' => {
                i += 2;
                continue;
            }
            '"' | '\'' => {
                i = closing_quote(chars, i)?;
                continue;
            }
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    Err(format!("unclosed `{open}`"))
}
