//! Tests for topmost-element lookup.

use swatch_dom::{DomTree, ElementData, NodeId, Rect, Viewport};

/// html (0,0 200x200) > [left (0,0 100x200) > [badge (10,10 20x20)], right (100,0 100x200)],
/// plus a floating overlay appended last over (50,50 100x100).
struct Page {
    tree: DomTree,
    html: NodeId,
    left: NodeId,
    badge: NodeId,
    right: NodeId,
    overlay: NodeId,
}

fn page() -> Page {
    let mut tree = DomTree::new(Viewport::new(200.0, 200.0));
    let html = tree.alloc_element(ElementData::new("html", Rect::new(0.0, 0.0, 200.0, 200.0)));
    tree.append_child(NodeId::ROOT, html);
    let left = tree.alloc_element(ElementData::new("div", Rect::new(0.0, 0.0, 100.0, 200.0)));
    tree.append_child(html, left);
    let badge = tree.alloc_element(ElementData::new("span", Rect::new(10.0, 10.0, 20.0, 20.0)));
    tree.append_child(left, badge);
    let right = tree.alloc_element(ElementData::new("div", Rect::new(100.0, 0.0, 100.0, 200.0)));
    tree.append_child(html, right);
    let overlay = tree.alloc_element(ElementData::new("div", Rect::new(50.0, 50.0, 100.0, 100.0)));
    tree.append_child(html, overlay);
    Page {
        tree,
        html,
        left,
        badge,
        right,
        overlay,
    }
}

#[test]
fn test_hit_test_child_over_parent() {
    let p = page();
    assert_eq!(p.tree.hit_test(15.0, 15.0), Some(p.badge));
    assert_eq!(p.tree.hit_test(5.0, 5.0), Some(p.left));
}

#[test]
fn test_hit_test_later_sibling_on_top() {
    let p = page();
    assert_eq!(p.tree.hit_test(60.0, 60.0), Some(p.overlay));
    assert_eq!(p.tree.hit_test(140.0, 140.0), Some(p.overlay));
    assert_eq!(p.tree.hit_test(160.0, 160.0), Some(p.right));
}

#[test]
fn test_hit_test_edges_are_half_open() {
    let p = page();
    // x = 100 belongs to the right column, not the left one.
    assert_eq!(p.tree.hit_test(100.0, 10.0), Some(p.right));
    assert_eq!(p.tree.hit_test(99.5, 10.0), Some(p.left));
}

#[test]
fn test_hit_test_outside_viewport_misses() {
    let p = page();
    assert_eq!(p.tree.hit_test(-1.0, 10.0), None);
    assert_eq!(p.tree.hit_test(200.0, 10.0), None);
    assert_eq!(p.tree.hit_test(10.0, 200.0), None);
    assert_eq!(p.tree.hit_test(f64::NAN, 10.0), None);
}

#[test]
fn test_hit_test_uncovered_point_falls_back_to_root_element() {
    let mut tree = DomTree::new(Viewport::new(300.0, 300.0));
    let html = tree.alloc_element(ElementData::new("html", Rect::new(0.0, 0.0, 100.0, 100.0)));
    tree.append_child(NodeId::ROOT, html);

    assert_eq!(tree.hit_test(250.0, 250.0), Some(html));
}

#[test]
fn test_hit_test_empty_document_misses() {
    let tree = DomTree::new(Viewport::new(300.0, 300.0));
    assert_eq!(tree.hit_test(1.0, 1.0), None);
}

#[test]
fn test_hit_test_ignores_detached_nodes() {
    let mut p = page();
    assert!(p.tree.remove_child(p.html, p.overlay));
    assert_eq!(p.tree.hit_test(60.0, 60.0), Some(p.left));
}
