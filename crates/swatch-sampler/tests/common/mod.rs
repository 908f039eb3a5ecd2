//! Shared fixtures for the sampler tests.

#![allow(dead_code)]

use std::cell::RefCell;

use swatch_sampler::{Surface, Viewport};

/// A hand-built chain of elements with scripted hit-testing.
///
/// Elements are indices into `nodes`; every background read and hit-test
/// is recorded so tests can check what the sampler looked at.
pub struct ScriptedSurface {
    pub nodes: Vec<FakeNode>,
    pub viewport: Viewport,
    pub hit: Box<dyn Fn(f64, f64) -> Option<usize>>,
    pub reads: RefCell<Vec<usize>>,
    pub hits: RefCell<Vec<(f64, f64)>>,
}

pub struct FakeNode {
    pub background: Option<String>,
    pub parent: Option<usize>,
}

impl ScriptedSurface {
    /// Elements listed innermost first: each one's parent is the next.
    pub fn chain(backgrounds: &[Option<&str>]) -> Self {
        let nodes = backgrounds
            .iter()
            .enumerate()
            .map(|(i, bg)| FakeNode {
                background: bg.map(str::to_string),
                parent: (i + 1 < backgrounds.len()).then_some(i + 1),
            })
            .collect();
        Self {
            nodes,
            viewport: Viewport::new(100.0, 100.0),
            hit: Box::new(|_, _| Some(0)),
            reads: RefCell::new(Vec::new()),
            hits: RefCell::new(Vec::new()),
        }
    }

    /// Sibling root elements; `pick` decides which one a point hits.
    pub fn columns(
        backgrounds: &[&str],
        viewport: Viewport,
        pick: impl Fn(f64, f64) -> Option<usize> + 'static,
    ) -> Self {
        let nodes = backgrounds
            .iter()
            .map(|bg| FakeNode {
                background: Some((*bg).to_string()),
                parent: None,
            })
            .collect();
        Self {
            nodes,
            viewport,
            hit: Box::new(pick),
            reads: RefCell::new(Vec::new()),
            hits: RefCell::new(Vec::new()),
        }
    }

    pub fn reads(&self) -> Vec<usize> {
        self.reads.borrow().clone()
    }
}

impl Surface for ScriptedSurface {
    type Node = usize;

    fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.hits.borrow_mut().push((x, y));
        (self.hit)(x, y)
    }

    fn computed_background(&self, node: usize) -> Option<&str> {
        self.reads.borrow_mut().push(node);
        self.nodes[node].background.as_deref()
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    fn viewport_size(&self) -> Viewport {
        self.viewport
    }
}
