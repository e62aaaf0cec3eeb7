//! Tests for shape-preserving collections.

use arbor_dom::{
    Collection, CollectionItem, Document, ElementData, ElementRef, NodeId, NodeKind, VoidElements,
};

fn add_element(doc: &mut Document, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let data = ElementData::new(
        tag,
        attrs
            .iter()
            .map(|&(name, value)| (name.to_string(), value.to_string())),
        &VoidElements::default(),
    );
    let id = doc.alloc(NodeKind::Element(data));
    doc.append_child(parent, id);
    id
}

/// Node IDs of the fixture tree.
struct Fixture {
    div: NodeId,
    div_child: NodeId,
    p_child: NodeId,
    div_child_child: NodeId,
    p_child_child: NodeId,
}

/// Builds:
///
/// ```text
/// div
/// ├── div (div_child)
/// │   ├── div (div_child_child)
/// │   └── p   (p_child_child)
/// └── p (p_child)
/// ```
///
/// `attrs` supplies attributes for `div`, `div_child` and `div_child_child`.
fn fixture(attrs: [&[(&str, &str)]; 3]) -> (Document, Fixture) {
    let mut doc = Document::new();
    let div = add_element(&mut doc, NodeId::ROOT, "div", attrs[0]);
    let div_child = add_element(&mut doc, div, "div", attrs[1]);
    let div_child_child = add_element(&mut doc, div_child, "div", attrs[2]);
    let p_child_child = add_element(&mut doc, div_child, "p", &[]);
    let p_child = add_element(&mut doc, div, "p", &[]);
    let ids = Fixture {
        div,
        div_child,
        p_child,
        div_child_child,
        p_child_child,
    };
    (doc, ids)
}

const TEST_CLASS: &[(&str, &str)] = &[("class", "test")];
const TEST_ID: &[(&str, &str)] = &[("id", "test")];
const NONE: &[(&str, &str)] = &[];

fn wrap<'a>(doc: &'a Document, ids: &Fixture) -> Collection<'a> {
    std::iter::once(doc.element(ids.div).unwrap()).collect()
}

fn wrap_nested<'a>(doc: &'a Document, ids: &Fixture) -> Collection<'a> {
    Collection::new(vec![CollectionItem::Nested(wrap(doc, ids))])
}

fn ids_of(collection: &Collection<'_>) -> Vec<NodeId> {
    collection
        .iter()
        .filter_map(CollectionItem::as_tag)
        .map(ElementRef::id)
        .collect()
}

fn nested<'c, 'a>(item: &'c CollectionItem<'a>) -> &'c Collection<'a> {
    item.as_nested().unwrap()
}

// ========== Basics ==========

#[test]
fn test_len_and_iteration_order() {
    let (doc, ids) = fixture([NONE; 3]);
    let coll: Collection<'_> = [ids.div, ids.div_child, ids.p_child]
        .into_iter()
        .filter_map(|id| doc.element(id))
        .collect();

    assert_eq!(coll.len(), 3);
    assert!(!coll.is_empty());
    assert_eq!(ids_of(&coll), [ids.div, ids.div_child, ids.p_child]);
    assert!(Collection::default().is_empty());
}

#[test]
fn test_map_elementwise_preserves_shape() {
    let (doc, ids) = fixture([NONE; 3]);
    let coll: Collection<'_> = [ids.div, ids.p_child]
        .into_iter()
        .filter_map(|id| doc.element(id))
        .collect();

    let result = coll.map_elementwise(|item| match item {
        CollectionItem::Tag(tag) if tag.tag_name() == "div" => {
            CollectionItem::Nested(tag.children_tags().collect())
        }
        _ => CollectionItem::Nested(Collection::default()),
    });

    assert_eq!(result.len(), 2);
    assert_eq!(ids_of(nested(&result[0])), [ids.div_child, ids.p_child]);
    assert!(nested(&result[1]).is_empty());
}

// ========== tags_by_name ==========

#[test]
fn test_tags_by_name_found() {
    let (doc, ids) = fixture([NONE; 3]);
    let result = wrap(&doc, &ids).tags_by_name("div");

    assert_eq!(result.len(), 1);
    let found = ids_of(nested(&result[0]));
    assert!(!found.contains(&ids.div));
    assert!(found.contains(&ids.div_child));
}

#[test]
fn test_tags_by_name_not_found() {
    let (doc, ids) = fixture([NONE; 3]);
    let result = wrap(&doc, &ids).tags_by_name("div");
    let found = ids_of(nested(&result[0]));
    assert!(!found.contains(&ids.p_child));
}

#[test]
fn test_tags_by_name_nested_child() {
    let (doc, ids) = fixture([NONE; 3]);
    let result = wrap(&doc, &ids).tags_by_name("div");
    assert_eq!(
        ids_of(nested(&result[0])),
        [ids.div_child, ids.div_child_child]
    );
}

#[test]
fn test_tags_by_name_nested_child_not_found() {
    let (doc, ids) = fixture([NONE; 3]);
    let result = wrap(&doc, &ids).tags_by_name("div");
    assert!(!ids_of(nested(&result[0])).contains(&ids.p_child_child));
}

#[test]
fn test_tags_by_name_in_nested_collection() {
    let (doc, ids) = fixture([NONE; 3]);
    let result = wrap_nested(&doc, &ids).tags_by_name("div");

    let inner = nested(&result[0]);
    let found = ids_of(nested(&inner[0]));
    assert!(!found.contains(&ids.div));
    assert!(found.contains(&ids.div_child));
}

// ========== children_matching ==========

#[test]
fn test_children_matching_found() {
    let (doc, ids) = fixture([TEST_CLASS, TEST_CLASS, NONE]);
    let result = wrap(&doc, &ids).children_matching("class=test");
    assert_eq!(ids_of(nested(&result[0])), [ids.div_child]);
}

#[test]
fn test_children_matching_not_found() {
    let (doc, ids) = fixture([TEST_CLASS, NONE, NONE]);
    let result = wrap(&doc, &ids).children_matching("class=test");
    assert!(nested(&result[0]).is_empty());
}

#[test]
fn test_children_matching_nested_child() {
    let (doc, ids) = fixture([TEST_CLASS, TEST_CLASS, TEST_CLASS]);
    let result = wrap(&doc, &ids).children_matching("class=test");
    assert_eq!(
        ids_of(nested(&result[0])),
        [ids.div_child, ids.div_child_child]
    );
}

#[test]
fn test_children_matching_found_in_non_matching_parent() {
    let (doc, ids) = fixture([TEST_CLASS, NONE, TEST_CLASS]);
    let result = wrap(&doc, &ids).children_matching("class=test");
    assert_eq!(ids_of(nested(&result[0])), [ids.div_child_child]);
}

#[test]
fn test_children_matching_in_nested_collection() {
    let (doc, ids) = fixture([TEST_CLASS, TEST_CLASS, NONE]);
    let result = wrap_nested(&doc, &ids).children_matching("class=test");
    let inner = nested(&result[0]);
    assert_eq!(ids_of(nested(&inner[0])), [ids.div_child]);
}

// ========== filter_by_attrs ==========

#[test]
fn test_filter_by_attrs_found() {
    let (doc, ids) = fixture([TEST_CLASS, TEST_CLASS, NONE]);
    let result = wrap(&doc, &ids).filter_by_attrs("class=test");
    assert_eq!(result.len(), 1);
    assert_eq!(ids_of(&result), [ids.div]);
}

#[test]
fn test_filter_by_attrs_not_found_leaves_vacant_slot() {
    let (doc, ids) = fixture([NONE, TEST_CLASS, NONE]);
    let result = wrap(&doc, &ids).filter_by_attrs("class=test");
    assert_eq!(result.len(), 1);
    assert!(result[0].is_vacant());
}

#[test]
fn test_filter_by_attrs_keeps_positions() {
    let (doc, ids) = fixture([TEST_CLASS, NONE, TEST_CLASS]);
    let coll: Collection<'_> = [ids.div, ids.div_child, ids.div_child_child]
        .into_iter()
        .filter_map(|id| doc.element(id))
        .collect();

    let result = coll.filter_by_attrs("class=test");
    assert_eq!(result.len(), 3);
    assert_eq!(result[0].as_tag().map(ElementRef::id), Some(ids.div));
    assert!(result[1].is_vacant());
    assert_eq!(
        result[2].as_tag().map(ElementRef::id),
        Some(ids.div_child_child)
    );
}

#[test]
fn test_filter_by_attrs_in_nested_collection_found() {
    let (doc, ids) = fixture([TEST_CLASS, TEST_CLASS, NONE]);
    let result = wrap_nested(&doc, &ids).filter_by_attrs("class=test");
    assert_eq!(ids_of(nested(&result[0])), [ids.div]);
}

#[test]
fn test_filter_by_attrs_in_nested_collection_not_found() {
    let (doc, ids) = fixture([NONE, TEST_CLASS, NONE]);
    let result = wrap_nested(&doc, &ids).filter_by_attrs("class=test");
    let inner = nested(&result[0]);
    assert_eq!(inner.len(), 1);
    assert!(inner[0].is_vacant());
}

#[test]
fn test_vacant_slots_stay_vacant() {
    let (doc, ids) = fixture([NONE, TEST_CLASS, NONE]);
    let filtered = wrap(&doc, &ids).filter_by_attrs("class=test");
    let again = filtered.tags_by_name("div");
    assert_eq!(again.len(), 1);
    assert!(again[0].is_vacant());
    assert!(again.element_by_id("anything").is_none());
}

// ========== element_by_id ==========

#[test]
fn test_element_by_id_found() {
    let (doc, ids) = fixture([TEST_ID, NONE, NONE]);
    let found = wrap(&doc, &ids).element_by_id("test");
    assert_eq!(found.map(ElementRef::id), Some(ids.div));
}

#[test]
fn test_element_by_id_not_found() {
    let (doc, ids) = fixture([NONE; 3]);
    assert!(wrap(&doc, &ids).element_by_id("test").is_none());
}

#[test]
fn test_element_by_id_nested_found() {
    let (doc, ids) = fixture([NONE, TEST_ID, NONE]);
    let found = wrap(&doc, &ids).element_by_id("test");
    assert_eq!(found.map(ElementRef::id), Some(ids.div_child));
}

#[test]
fn test_element_by_id_in_nested_collection() {
    let (doc, ids) = fixture([TEST_ID, NONE, NONE]);
    let found = wrap_nested(&doc, &ids).element_by_id("test");
    assert_eq!(found.map(ElementRef::id), Some(ids.div));
}
