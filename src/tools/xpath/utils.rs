use ego_tree::NodeRef;
use scraper::{Html, Node};
use sxd_document::{dom, Package};

/// Rejects expressions nested deeper than `limit`, before they reach the
/// recursive-descent compiler.
pub(super) fn check_nesting(expr: &str, limit: usize) -> Result<(), String> {
    let mut depth = 0usize;
    let mut minus_run = 0usize;
    let mut quote = None;

    for c in expr.chars() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if c == '-' {
            minus_run += 1;
        } else if !c.is_whitespace() {
            minus_run = 0;
        }
        if depth > limit || minus_run > limit {
            return Err("expression nested too deeply".to_string());
        }
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Parent<'d> {
    Root(dom::Root<'d>),
    Element(dom::Element<'d>),
}

/// Copies elements, attributes, text and comments of `html` into a new
/// package. Doctypes are skipped.
pub(super) fn mirror(html: &Html) -> Package {
    let package = Package::new();
    {
        let doc = package.as_document();
        let mut stack: Vec<(NodeRef<'_, Node>, Parent<'_>)> = html
            .tree
            .root()
            .children()
            .rev()
            .map(|child| (child, Parent::Root(doc.root())))
            .collect();

        while let Some((node, parent)) = stack.pop() {
            match node.value() {
                Node::Element(el) => {
                    let element = doc.create_element(el.name());
                    for (name, value) in el.attrs() {
                        element.set_attribute_value(name, value);
                    }
                    match parent {
                        Parent::Root(root) => root.append_child(element),
                        Parent::Element(p) => p.append_child(element),
                    }
                    stack.extend(
                        node.children()
                            .rev()
                            .map(|child| (child, Parent::Element(element))),
                    );
                }
                Node::Text(text) => {
                    if let Parent::Element(p) = parent {
                        p.append_child(doc.create_text(text));
                    }
                }
                Node::Comment(comment) => {
                    let comment = doc.create_comment(comment);
                    match parent {
                        Parent::Root(root) => root.append_child(comment),
                        Parent::Element(p) => p.append_child(comment),
                    }
                }
                _ => {}
            }
        }
    }
    package
}
