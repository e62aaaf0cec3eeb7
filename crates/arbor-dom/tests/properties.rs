//! Property tests for text collapsing and attribute queries.

#![allow(clippy::needless_pass_by_value)]

use arbor_dom::{AttrQuery, ElementData, PlainText, Render, VoidElements, is_html_space};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn prop_collapsed_text_has_no_space_runs(data: String) -> bool {
    let text = PlainText::new(&data).text();
    !text.contains("  ") && !text.chars().any(|c| is_html_space(c) && c != ' ')
}

#[quickcheck]
fn prop_collapse_is_idempotent(data: String) -> bool {
    let once = PlainText::new(&data).text();
    PlainText::new(&once).text() == once
}

#[quickcheck]
fn prop_raw_text_is_untouched(data: String) -> bool {
    PlainText::new(&data).raw_html() == data
}

#[quickcheck]
fn prop_padding_around_clauses_is_ignored(name: u8, value: u8) -> bool {
    let (name, value) = (format!("a{name}"), format!("v{value}"));
    let plain: Result<AttrQuery, _> = format!("{name}={value}").parse();
    let padded: Result<AttrQuery, _> = format!(" ; {name} =  {value} ;; ").parse();
    plain == padded
}

#[quickcheck]
fn prop_element_matches_its_own_attributes(pairs: Vec<(u8, u8)>) -> bool {
    let attrs: Vec<(String, String)> = pairs
        .iter()
        .map(|(name, value)| (format!("data-{name}"), format!("v{value}")))
        .collect();
    let element = ElementData::new("div", attrs, &VoidElements::default());
    let query: Vec<String> = element
        .attrs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    element.check_attrs(&query.join("; "))
}
