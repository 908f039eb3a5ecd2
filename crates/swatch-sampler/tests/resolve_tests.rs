//! Tests for ancestor-chain compositing.

mod common;

use common::ScriptedSurface;
use swatch_sampler::{Color, LayerRole, blend, resolve, trace};

#[test]
fn test_resolve_none_is_white() {
    let surface = ScriptedSurface::chain(&[Some("rgb(0, 0, 0)")]);
    assert_eq!(resolve(&surface, None), Color::WHITE);
    assert!(surface.reads().is_empty());
}

#[test]
fn test_resolve_opaque_stops_without_reading_ancestors() {
    // If the ancestors were consulted the result would be a purple-ish blend.
    let surface = ScriptedSurface::chain(&[
        Some("rgb(255, 0, 0)"),
        Some("rgba(0, 0, 255, 0.5)"),
        Some("rgb(0, 0, 0)"),
    ]);

    assert_eq!(resolve(&surface, Some(0)), Color::rgb(255, 0, 0));
    assert_eq!(surface.reads(), vec![0]);
}

#[test]
fn test_resolve_transparent_child_contributes_nothing() {
    let surface = ScriptedSurface::chain(&[
        Some("rgba(10, 200, 30, 0)"),
        Some("rgba(0, 0, 255, 0.5)"),
        Some("rgb(255, 255, 255)"),
    ]);

    let child = resolve(&surface, Some(0));
    let middle = resolve(&surface, Some(1));
    assert_eq!(child, middle);
    assert_eq!(child, Color::rgb(128, 128, 255));
}

#[test]
fn test_resolve_composites_innermost_over_outer() {
    let surface = ScriptedSurface::chain(&[
        Some("rgba(255, 0, 0, 0.5)"),
        Some("rgba(0, 0, 255, 0.5)"),
        Some("rgb(0, 255, 0)"),
    ]);

    let expected = blend(
        Color::rgba(255, 0, 0, 0.5),
        blend(Color::rgba(0, 0, 255, 0.5), Color::rgb(0, 255, 0)),
    );
    assert_eq!(resolve(&surface, Some(0)), expected);
    // One read per layer, innermost first.
    assert_eq!(surface.reads(), vec![0, 1, 2]);

    assert_ne!(
        expected,
        blend(
            Color::rgba(0, 0, 255, 0.5),
            blend(Color::rgba(255, 0, 0, 0.5), Color::rgb(0, 255, 0)),
        ),
        "reversing the chain order must give a different color"
    );
}

#[test]
fn test_resolve_translucent_root_blends_over_white() {
    let surface = ScriptedSurface::chain(&[Some("rgba(0, 0, 0, 0.5)")]);
    // (0 * 0.5 + 255 * 0.5) = 127.5 -> 128
    assert_eq!(resolve(&surface, Some(0)), Color::rgb(128, 128, 128));
}

#[test]
fn test_resolve_all_transparent_chain_is_white() {
    let surface = ScriptedSurface::chain(&[
        Some("rgba(0, 0, 0, 0)"),
        Some("rgba(0, 0, 0, 0)"),
    ]);
    assert_eq!(resolve(&surface, Some(0)), Color::WHITE);
}

#[test]
fn test_resolve_unrecognized_background_is_opaque_white() {
    // `transparent` isn't how computed styles report transparency, so it
    // reads as "no information": opaque white, hiding the black root.
    let surface = ScriptedSurface::chain(&[Some("transparent"), Some("rgb(0, 0, 0)")]);
    assert_eq!(resolve(&surface, Some(0)), Color::WHITE);

    let surface = ScriptedSurface::chain(&[None, Some("rgb(0, 0, 0)")]);
    assert_eq!(resolve(&surface, Some(0)), Color::WHITE);
    assert_eq!(surface.reads(), vec![0]);
}

#[test]
fn test_resolve_deep_chain() {
    let mut backgrounds = vec![Some("rgba(0, 0, 0, 0)"); 100_000];
    backgrounds.push(Some("rgb(1, 2, 3)"));
    let surface = ScriptedSurface::chain(&backgrounds);
    assert_eq!(resolve(&surface, Some(0)), Color::rgb(1, 2, 3));
}

#[test]
fn test_trace_reports_layers_innermost_first() {
    let surface = ScriptedSurface::chain(&[
        Some("rgba(0, 0, 0, 0)"),
        Some("rgba(0, 0, 255, 0.5)"),
        Some("rgb(255, 255, 255)"),
        Some("rgb(0, 0, 0)"),
    ]);

    let resolution = trace(&surface, Some(0));

    assert_eq!(resolution.color, resolve(&surface, Some(0)));
    assert!(!resolution.white_fallback);
    let summary: Vec<(usize, LayerRole)> =
        resolution.layers.iter().map(|l| (l.node, l.role)).collect();
    assert_eq!(
        summary,
        vec![
            (0, LayerRole::Skipped),
            (1, LayerRole::Blended),
            (2, LayerRole::Backdrop),
        ]
    );
    assert_eq!(resolution.layers[1].color, Color::rgba(0, 0, 255, 0.5));
}

#[test]
fn test_trace_marks_white_fallback() {
    let surface = ScriptedSurface::chain(&[Some("rgba(0, 0, 0, 0.25)")]);
    let resolution = trace(&surface, Some(0));
    assert!(resolution.white_fallback);
    assert_eq!(resolution.layers.len(), 1);

    let miss = trace(&surface, None);
    assert!(miss.white_fallback);
    assert!(miss.layers.is_empty());
    assert_eq!(miss.color, Color::WHITE);
}
