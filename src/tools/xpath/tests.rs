use super::*;
use scraper::Html;

const PAGE: &str = r#"
<html>
  <body>
    <div id="main" class="content">
      <h1 class="title">Hello</h1>
      <p>First <b>bold</b></p>
      <p class="note">Second</p>
      <!-- promo -->
      <ul>
        <li>one</li>
        <li>two</li>
        <li>three</li>
      </ul>
      <a href="/about" title="About us">About</a>
    </div>
    <div id="footer">Bye</div>
  </body>
</html>
"#;

fn texts(xpath: &str) -> Vec<String> {
    let html = Html::parse_document(PAGE);
    let expr = compile(xpath).expect("valid xpath");
    XmlMirror::from_html(&html)
        .select(&expr)
        .expect("node-set")
        .iter()
        .map(|s| s.trim().to_string())
        .collect()
}

fn nested(depth: usize) -> String {
    format!("//li[{}1{}]", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn compiles_common_expressions() {
    for ok in [
        "//div",
        "/html/body/div[1]",
        "//div[@class='content']//p",
        "(//li)[last()]",
        "//a/@href",
        "//p[contains(., 'Sec')]",
        "//li[position() > 1 and position() <= 3]",
        "//ul/li | //h1",
        "//div[@id=\"main\"]/following-sibling::div",
        "//p/text()",
        "count(//p) > 1",
    ] {
        assert!(compile(ok).is_ok(), "expected `{ok}` to compile");
    }
}

#[test]
fn rejects_malformed_expressions() {
    for bad in ["//div[@class='x'", "//div[", "//div)", "//div ~ p", "//div]"] {
        let err = compile(bad).err();
        assert!(matches!(err, Some(FieldError::InvalidSelector(_))), "{bad}");
    }
    assert_eq!(
        compile("").err(),
        Some(FieldError::invalid("empty expression"))
    );
}

#[test]
fn deep_nesting_is_rejected_before_compiling() {
    assert!(compile(&nested(MAX_NESTING - 2)).is_ok());

    assert_eq!(
        compile(&nested(10_000)).err(),
        Some(FieldError::invalid("expression nested too deeply"))
    );

    let minus = format!("//li[{}1]", "-".repeat(10_000));
    assert!(compile(&minus).is_err());
}

#[test]
fn brackets_inside_literals_do_not_count() {
    let literal = format!("//p[. = '{}']", "[(".repeat(500));
    assert!(compile(&literal).is_ok());
}

#[test]
fn selects_descendants_in_document_order() {
    assert_eq!(texts("//li"), vec!["one", "two", "three"]);
}

#[test]
fn attribute_predicates() {
    assert_eq!(texts("//h1[@class='title']"), vec!["Hello"]);
    assert_eq!(texts("//p[@class]"), vec!["Second"]);
    assert_eq!(texts("//div[@id='footer']"), vec!["Bye"]);
}

#[test]
fn positional_predicates() {
    assert_eq!(texts("//li[2]"), vec!["two"]);
    assert_eq!(texts("//li[last()]"), vec!["three"]);
    assert_eq!(texts("(//p)[1]"), vec!["First bold"]);
}

#[test]
fn attribute_axis_yields_values() {
    assert_eq!(texts("//a/@href"), vec!["/about"]);
    let mut all = texts("//a/@*");
    all.sort();
    assert_eq!(all, vec!["/about", "About us"]);
}

#[test]
fn text_and_comment_nodes_are_mirrored() {
    assert_eq!(texts("//p[1]/text()"), vec!["First"]);
    assert_eq!(texts("//div[@id='main']/comment()"), vec!["promo"]);
    assert_eq!(texts("//li[starts-with(., 't')]"), vec!["two", "three"]);
}

#[test]
fn union_is_deduplicated_and_ordered() {
    assert_eq!(texts("//h1 | //li[1] | //h1"), vec!["Hello", "one"]);
}

#[test]
fn absolute_child_path() {
    assert_eq!(texts("/html/body/div[2]"), vec!["Bye"]);
    assert!(texts("/body").is_empty());
}

#[test]
fn non_node_set_result_is_unsupported() {
    let html = Html::parse_document(PAGE);
    let expr = compile("count(//li)").unwrap();
    let err = XmlMirror::from_html(&html).select(&expr).unwrap_err();
    assert!(matches!(err, FieldError::UnsupportedSelector(_)));
    assert!(err.to_string().contains("not a node-set"));
}

#[test]
fn unknown_function_is_unsupported() {
    let html = Html::parse_document(PAGE);
    let expr = compile("//p[matches(., 'x')]").unwrap();
    let err = XmlMirror::from_html(&html).select(&expr).unwrap_err();
    assert!(matches!(err, FieldError::UnsupportedSelector(_)));
}
