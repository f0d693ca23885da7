//! Integration tests for the Tally facade.

use tally::widgets::{PageView, WidgetError};
use tally::yaml::Page;
use tally::{Counter, CounterConfig, Document, Mount, MountError, NodeId, Tag};
use tally_test::Harness;

const HELLO: &str = include_str!("../../../demos/hello-world/page.yaml");

#[test]
fn test_counter_scenario_default_start() {
    let mut harness = Harness::new();
    harness.mount_counter("c", &CounterConfig::default());
    harness.click_n("#c button", 3).assert_text("#c span", "3");
}

#[test]
fn test_counter_scenario_step_not_applied() {
    let mut harness = Harness::new();
    harness.mount_counter("c", &CounterConfig::new().with_start(5).with_step(10));
    harness.click_n("#c button", 2).assert_text("#c span", "7");
}

#[test]
fn test_two_mounts_do_not_interfere() {
    let mut doc = Document::new();
    let root = doc.root();
    let left = doc.create_element(Tag::Div).unwrap();
    let right = doc.create_element(Tag::Div).unwrap();
    doc.append_child(&root, &left).unwrap();
    doc.append_child(&root, &right).unwrap();

    let mut a = Counter::mount(&CounterConfig::default(), &mut doc, &left).unwrap();
    let mut b = Counter::mount(&CounterConfig::default(), &mut doc, &right).unwrap();

    a.click(&mut doc).unwrap();
    a.click(&mut doc).unwrap();
    b.click(&mut doc).unwrap();

    assert_eq!(doc.text(*a.display()).unwrap(), "2");
    assert_eq!(doc.text(*b.display()).unwrap(), "1");
}

#[test]
fn test_mount_into_invalid_target() {
    let mut doc = Document::new();
    let err = Counter::mount(&CounterConfig::default(), &mut doc, &NodeId(1000)).unwrap_err();
    assert!(matches!(err, MountError::UnknownNode(_)));
}

#[test]
fn test_hello_world_demo_page() {
    let page = Page::from_yaml(HELLO).unwrap();
    page.validate().unwrap();

    let mut harness = Harness::with_page(&page);
    harness.assert_count("button", page.widgets.len());
    harness.click_n("#main button", 2).assert_text("#main span", "7");
}

#[test]
fn test_page_view_rejects_unknown_widget() {
    let page = Page::from_yaml("name: p\nwidgets:\n  - {id: a, type: clock}\n").unwrap();
    let mut doc = Document::new();
    let root = doc.root();
    let err = PageView::mount(&page, &mut doc, &root).unwrap_err();
    assert!(matches!(err, WidgetError::UnknownKind(_)));
}

#[test]
fn test_parse_config_matches_serde_defaults() {
    let config = tally::parse_config(Some(r#"{"start": 9}"#)).unwrap();
    assert_eq!(config, CounterConfig::new().with_start(9));
}
