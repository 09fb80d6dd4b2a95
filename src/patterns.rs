//! Shared Patterns

use regex::Regex;
use std::sync::LazyLock;

/// Remainder of a `#`/`.` shorthand with no combinators, attributes or pseudos.
pub static BARE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").expect("valid bare token regex"));

/// CSS identifier: may not start with a digit or a hyphen followed by a digit.
pub static CSS_IDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:--|-?[A-Za-z_])[A-Za-z0-9_-]*$").expect("valid identifier regex")
});

/// HTML tag name, custom elements included.
pub static TAG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").expect("valid tag name regex"));

/// Any run of whitespace.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
