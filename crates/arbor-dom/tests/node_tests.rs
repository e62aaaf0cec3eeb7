//! Tests for leaf nodes, element data and entity resolution.

use arbor_dom::{
    Comment, Doctype, DomError, ElementData, NamedEntity, NumericEntity, PlainText, Render,
    VoidElements, is_blank, resolve_named, resolve_numeric,
};

fn element(tag: &str, attrs: &[(&str, &str)]) -> ElementData {
    ElementData::new(
        tag,
        attrs
            .iter()
            .map(|&(name, value)| (name.to_string(), value.to_string())),
        &VoidElements::default(),
    )
}

// ========== PlainText ==========

#[test]
fn test_plain_text_without_spaces() {
    let text = PlainText::new("test");
    assert_eq!(text.text(), "test");
    assert_eq!(text.raw_html(), "test");
}

#[test]
fn test_plain_text_with_single_spaces() {
    let text = PlainText::new(" test ");
    assert_eq!(text.text(), " test ");
    assert_eq!(text.raw_html(), " test ");
}

#[test]
fn test_plain_text_with_multiple_spaces() {
    let text = PlainText::new("   test   ");
    assert_eq!(text.text(), " test ");
    assert_eq!(text.raw_html(), "   test   ");
}

#[test]
fn test_plain_text_with_other_space_symbols() {
    let text = PlainText::new("\t test\t");
    assert_eq!(text.text(), " test ");
    assert_eq!(text.raw_html(), "\t test\t");
}

#[test]
fn test_plain_text_collapses_newlines_and_nbsp() {
    let text = PlainText::new("a\n\n\u{00A0} b");
    assert_eq!(text.text(), "a b");
    assert_eq!(text.raw(), "a\n\n\u{00A0} b");
}

#[test]
fn test_plain_text_carriage_return_is_not_space() {
    let text = PlainText::new("a\r\n  b");
    assert_eq!(text.text(), "a\r b");
    assert!(!is_blank("\r"));
    assert!(is_blank(" \t\n\u{00A0}"));
}

// ========== NamedEntity ==========

#[test]
fn test_named_entity_valid() {
    let entity = NamedEntity::new("lt").unwrap();
    assert_eq!(entity.text(), "<");
    assert_eq!(entity.raw_html(), "&lt;");
    assert_eq!(entity.name(), "lt");
}

#[test]
fn test_named_entity_invalid() {
    assert_eq!(
        NamedEntity::new("bogus"),
        Err(DomError::UnknownEntity("bogus".to_string()))
    );
}

#[test]
fn test_named_entity_is_case_sensitive() {
    assert_eq!(NamedEntity::new("Eacute").unwrap().text(), "\u{00C9}");
    assert_eq!(NamedEntity::new("eacute").unwrap().text(), "\u{00E9}");
    assert!(NamedEntity::new("LT").is_err());
}

// ========== NumericEntity ==========

#[test]
fn test_numeric_entity_decimal() {
    let entity = NumericEntity::new("60").unwrap();
    assert_eq!(entity.text(), "<");
    assert_eq!(entity.raw_html(), "&#60;");
}

#[test]
fn test_numeric_entity_hex() {
    let entity = NumericEntity::new("x3c").unwrap();
    assert_eq!(entity.text(), "<");
    assert_eq!(entity.raw_html(), "&#x3c;");
}

#[test]
fn test_numeric_entity_uppercase_hex_prefix() {
    let entity = NumericEntity::new("X3C").unwrap();
    assert_eq!(entity.value(), '<');
    assert_eq!(entity.raw_html(), "&#X3C;");
}

#[test]
fn test_numeric_entity_invalid() {
    assert_eq!(
        NumericEntity::new("zz"),
        Err(DomError::InvalidCodepoint("zz".to_string()))
    );
    assert!(NumericEntity::new("test").is_err());
    assert!(NumericEntity::new("").is_err());
    assert!(NumericEntity::new("x").is_err());
}

#[test]
fn test_numeric_entity_rejects_non_scalar_values() {
    // Surrogates and values past U+10FFFF are not characters.
    assert!(NumericEntity::new("xD800").is_err());
    assert!(NumericEntity::new("1114112").is_err());
    assert!(NumericEntity::new("99999999999999999999").is_err());
}

#[test]
fn test_resolver_functions() {
    assert_eq!(resolve_named("amp"), Ok("&"));
    assert_eq!(resolve_named("nbsp"), Ok("\u{00A0}"));
    assert_eq!(resolve_numeric("8364"), Ok('\u{20AC}'));
    assert_eq!(resolve_numeric("x20AC"), Ok('\u{20AC}'));
}

// ========== Comment / Doctype ==========

#[test]
fn test_comment() {
    let comment = Comment::new("test");
    assert_eq!(comment.text(), "");
    assert_eq!(comment.raw_html(), "<!-- test -->\n");
    assert_eq!(comment.body(), "test");
}

#[test]
fn test_doctype() {
    let doctype = Doctype::new("test");
    assert_eq!(doctype.text(), "");
    assert_eq!(doctype.raw_html(), "<!test>\n");
    assert_eq!(doctype.declaration(), "test");
}

// ========== ElementData ==========

#[test]
fn test_create_element() {
    let tag = element("tag", &[("attr1", "value1"), ("attr2", "value2")]);
    assert_eq!(tag.tag_name, "tag");
    assert_eq!(tag.attr("attr1"), Some("value1"));
    assert_eq!(tag.attr("attr2"), Some("value2"));
    assert_eq!(tag.attr("attr3"), None);
}

#[test]
fn test_attributes_keep_source_order() {
    let tag = element("a", &[("z", "1"), ("a", "2"), ("m", "3")]);
    let names: Vec<&str> = tag.attrs.keys().map(String::as_str).collect();
    assert_eq!(names, ["z", "a", "m"]);
}

#[test]
fn test_duplicate_attribute_last_value_wins() {
    let tag = element("a", &[("href", "first"), ("id", "x"), ("href", "second")]);
    assert_eq!(tag.attrs.len(), 2);
    assert_eq!(tag.attr("href"), Some("second"));
    assert_eq!(tag.attrs.get_index(0).map(|(k, _)| k.as_str()), Some("href"));
}

#[test]
fn test_void_classification() {
    assert!(element("br", &[]).void);
    assert!(element("IMG", &[]).void);
    assert!(element("input", &[]).void);
    assert!(!element("div", &[]).void);
}

#[test]
fn test_custom_void_set() {
    let voids = VoidElements::from_names(["Spacer"]);
    let tag = ElementData::new("spacer", Vec::new(), &voids);
    assert!(tag.void);
    let tag = ElementData::new("br", Vec::new(), &voids);
    assert!(!tag.void);
}

#[test]
fn test_start_tag() {
    let tag = element("tag", &[("attr1", "value1")]);
    assert_eq!(tag.start_tag(), "<tag attr1=\"value1\">\n");
}

#[test]
fn test_start_tag_without_attributes() {
    assert_eq!(element("p", &[]).start_tag(), "<p>\n");
}

#[test]
fn test_start_tag_escapes_quotes() {
    let tag = element("a", &[("title", "say \"hi\"")]);
    assert_eq!(tag.start_tag(), "<a title=\"say &quot;hi&quot;\">\n");
}

#[test]
fn test_end_tag() {
    let tag = element("tag", &[("attr1", "value1")]);
    assert_eq!(tag.end_tag().as_deref(), Some("</tag>\n"));
}

#[test]
fn test_void_element_has_no_end_tag() {
    assert_eq!(element("br", &[]).end_tag(), None);
}

// ========== check_attr / check_attrs ==========

#[test]
fn test_check_attr_correct() {
    let tag = element("tag", &[("attr1", "value1")]);
    assert!(tag.check_attr("attr1", "value1"));
}

#[test]
fn test_check_attr_wrong() {
    let tag = element("tag", &[("attr1", "value1")]);
    assert!(!tag.check_attr("attr1", "value2"));
}

#[test]
fn test_check_attr_not_exists() {
    let tag = element("tag", &[("attr1", "value1")]);
    assert!(!tag.check_attr("attr2", "value2"));
}

#[test]
fn test_check_attr_is_case_sensitive() {
    let tag = element("tag", &[("lang", "en")]);
    assert!(!tag.check_attr("lang", "EN"));
}

#[test]
fn test_check_attr_class_single() {
    let tag = element("tag", &[("class", "foo")]);
    assert!(tag.check_attr("class", "foo"));
    assert!(!tag.check_attr("class", "bar"));
}

#[test]
fn test_check_attr_class_not_specified() {
    let tag = element("tag", &[]);
    assert!(!tag.check_attr("class", "foo"));
}

#[test]
fn test_check_attr_class_multiple() {
    let tag = element("tag", &[("class", "foo baz")]);
    assert!(tag.check_attr("class", "foo"));
    assert!(tag.check_attr("class", "baz"));
    assert!(!tag.check_attr("class", "bar"));
    assert!(!tag.check_attr("class", "foo baz"));
}

#[test]
fn test_check_attrs_all_clauses_hold() {
    let tag = element("tag", &[("attr1", "value1"), ("attr2", "value2")]);
    assert!(tag.check_attrs("attr1=value1; attr2=value2"));
}

#[test]
fn test_check_attrs_one_wrong() {
    let tag = element("tag", &[("attr1", "value1"), ("attr2", "value2")]);
    assert!(!tag.check_attrs("attr1=value1; attr2=value1"));
    assert!(!tag.check_attrs("attr1=nope; attr2=value2"));
}

#[test]
fn test_check_attrs_malformed_matches_nothing() {
    let tag = element("tag", &[("hidden", "")]);
    assert!(!tag.check_attrs("hidden"));
}

#[test]
fn test_check_attrs_empty_query_matches() {
    assert!(element("tag", &[]).check_attrs(""));
}
