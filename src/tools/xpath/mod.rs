//! XPath 1.0 over scraper's HTML tree.
//!
//! Expressions are compiled with `sxd_xpath`. The parsed `Html` is mirrored
//! into an `sxd_document` package once, so XPath sees the same nodes the CSS
//! engine queries.

mod utils;

#[cfg(test)]
mod tests;

use crate::error::FieldError;
use scraper::Html;
use sxd_document::Package;
use sxd_xpath::{Context, Factory, Value, XPath};
use utils::{check_nesting, mirror};

/// Deepest bracket, parenthesis or unary-minus nesting accepted.
pub const MAX_NESTING: usize = 64;

/// Compiles an absolute XPath expression, rejecting malformed grammar.
pub fn compile(expr: &str) -> Result<XPath, FieldError> {
    check_nesting(expr, MAX_NESTING).map_err(FieldError::invalid)?;
    Factory::new()
        .build(expr)
        .map_err(|e| FieldError::invalid(format!("{e:?}")))?
        .ok_or_else(|| FieldError::invalid("empty expression"))
}

/// An XML copy of a parsed HTML document.
pub struct XmlMirror {
    package: Package,
}

impl XmlMirror {
    pub fn from_html(html: &Html) -> Self {
        Self {
            package: mirror(html),
        }
    }

    /// String values of the selected nodes, in document order.
    ///
    /// Expressions that evaluate to a number, string or boolean, unknown
    /// functions and unbound variables are `UnsupportedSelector`.
    pub fn select(&self, xpath: &XPath) -> Result<Vec<String>, FieldError> {
        let document = self.package.as_document();
        let context = Context::new();
        let value = xpath
            .evaluate(&context, document.root())
            .map_err(|e| FieldError::unsupported(format!("{e:?}")))?;

        match value {
            Value::Nodeset(nodes) => Ok(nodes
                .document_order()
                .iter()
                .map(|node| node.string_value())
                .collect()),
            Value::Boolean(_) | Value::Number(_) | Value::String(_) => Err(
                FieldError::unsupported("expression evaluates to a value, not a node-set"),
            ),
        }
    }
}
