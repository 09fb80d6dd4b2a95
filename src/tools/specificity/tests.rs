use super::*;
use crate::types::SelectorKind;

fn tuple(s: &str) -> (u32, u32, u32) {
    specificity(s).as_tuple()
}

#[test]
fn one_id_one_tag() {
    assert_eq!(tuple("#main div"), (1, 0, 1));
}

#[test]
fn compound_tag_and_class() {
    assert_eq!(tuple("h1.title"), (0, 1, 1));
    assert_eq!(tuple("ul li.active > a"), (0, 1, 3));
}

#[test]
fn attributes_and_pseudo_classes_count_as_classes() {
    assert_eq!(tuple("a[href]"), (0, 1, 1));
    assert_eq!(tuple("input[type='text']:focus"), (0, 2, 1));
    assert_eq!(tuple("li:nth-child(2n+1)"), (0, 1, 1));
}

#[test]
fn pseudo_elements_count_as_types() {
    assert_eq!(tuple("p::first-line"), (0, 0, 2));
    assert_eq!(tuple("p:before"), (0, 0, 2));
}

#[test]
fn universal_and_combinators_count_for_nothing() {
    assert_eq!(tuple("*"), (0, 0, 0));
    assert_eq!(tuple("* > * + * ~ *"), (0, 0, 0));
    assert_eq!(tuple("div > p + span ~ em"), (0, 0, 4));
}

#[test]
fn functional_pseudo_classes_use_their_arguments() {
    assert_eq!(tuple("div:not(.a)"), (0, 1, 1));
    assert_eq!(tuple(":is(#x, .y) p"), (1, 0, 1));
    assert_eq!(tuple(":where(#x) p"), (0, 0, 1));
}

#[test]
fn list_reports_maximum_branch() {
    assert_eq!(tuple("h1.title, #a, div p span"), (1, 0, 0));
    assert_eq!(
        branch_specificities("h1.title, #a, div p span"),
        vec![
            SpecificityScore::new(0, 1, 1),
            SpecificityScore::new(1, 0, 0),
            SpecificityScore::new(0, 0, 3),
        ]
    );
}

#[test]
fn commas_inside_brackets_do_not_split() {
    assert_eq!(branch_specificities("a[title='x, y']").len(), 1);
    assert_eq!(branch_specificities(":is(a, b) span").len(), 1);
}

#[test]
fn not_applicable_for_non_css_kinds() {
    assert_eq!(specificity_for("#foo", SelectorKind::Id), None);
    assert_eq!(specificity_for(".foo", SelectorKind::Class), None);
    assert_eq!(specificity_for("div", SelectorKind::Tag), None);
    assert_eq!(specificity_for("//div", SelectorKind::Xpath), None);
    assert_eq!(
        specificity_for("#main div", SelectorKind::Css),
        Some(SpecificityScore::new(1, 0, 1))
    );
}

#[test]
fn aggregate_score() {
    assert_eq!(SpecificityScore::new(1, 2, 3).score(), 10_203);
}

#[test]
fn serialized_form_includes_score() {
    let json = serde_json::to_value(SpecificityScore::new(1, 0, 1)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"ids": 1, "classes": 0, "types": 1, "score": 10001})
    );
}

#[test]
fn selector_parts_of_first_branch() {
    let parts = extract_selector_parts("div#main.content.wide[data-x]:hover, p");
    assert_eq!(parts.tag.as_deref(), Some("div"));
    assert_eq!(parts.ids, vec!["main"]);
    assert_eq!(parts.classes, vec!["content", "wide"]);
    assert_eq!(parts.attributes, vec!["data-x"]);
    assert_eq!(parts.pseudo, vec!["hover"]);
}

#[test]
fn selector_parts_without_leading_tag() {
    let parts = extract_selector_parts(".a span");
    assert_eq!(parts.tag, None);
    assert_eq!(parts.classes, vec!["a"]);
}

#[test]
fn nesting_beyond_the_limit_scores_zero() {
    let shallow = format!("{}#a{}", ":is(".repeat(3), ")".repeat(3));
    assert_eq!(specificity(&shallow), SpecificityScore::new(1, 0, 0));

    let deep = format!("{}#a{}", ":is(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(specificity(&deep), SpecificityScore::default());
}
