//! The page as the sampler sees it.
//!
//! Everything the sampler needs from a rendering engine fits in four
//! synchronous calls. They are assumed to be cheap and to see a consistent
//! document for the duration of one resolution.

use std::fmt::Debug;
use std::hash::Hash;

use swatch_dom::{DomTree, NodeId, Viewport};

/// A rendered page that can be hit-tested and queried for computed
/// backgrounds.
pub trait Surface {
    /// A stable, non-owning handle to an element. Holding one must not keep
    /// the element alive; it is used as a cache key.
    type Node: Copy + Eq + Hash + Debug;

    /// The topmost element at a viewport point, if any.
    fn hit_test(&self, x: f64, y: f64) -> Option<Self::Node>;

    /// The element's computed `background-color`, or `None` when the
    /// platform has no value for it.
    fn computed_background(&self, node: Self::Node) -> Option<&str>;

    /// The element's parent element. `None` at the root element.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The visible area, in hit-testing coordinates.
    fn viewport_size(&self) -> Viewport;
}

impl<S: Surface + ?Sized> Surface for &S {
    type Node = S::Node;

    fn hit_test(&self, x: f64, y: f64) -> Option<Self::Node> {
        (**self).hit_test(x, y)
    }

    fn computed_background(&self, node: Self::Node) -> Option<&str> {
        (**self).computed_background(node)
    }

    fn parent(&self, node: Self::Node) -> Option<Self::Node> {
        (**self).parent(node)
    }

    fn viewport_size(&self) -> Viewport {
        (**self).viewport_size()
    }
}

impl Surface for DomTree {
    type Node = NodeId;

    fn hit_test(&self, x: f64, y: f64) -> Option<NodeId> {
        Self::hit_test(self, x, y)
    }

    fn computed_background(&self, node: NodeId) -> Option<&str> {
        self.background(node)
    }

    /// Like `parentElement`: the document node is not an element, so the
    /// walk ends at the root element.
    fn parent(&self, node: NodeId) -> Option<NodeId> {
        Self::parent(self, node).filter(|&p| self.as_element(p).is_some())
    }

    fn viewport_size(&self) -> Viewport {
        self.viewport()
    }
}
