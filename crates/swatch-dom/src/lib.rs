//! Document tree for the swatch sampler.
//!
//! This crate provides an arena-based tree of elements, each carrying the
//! two things color sampling reads: a computed background value and a
//! border box. It is the sampler's stand-in for a rendered page.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues. Ids are
//! never reused: removing a node detaches it but keeps its slot, so an id held
//! elsewhere (a color cache, say) can go stale but never aliases a new node.

/// Rectangles and viewport sizes.
pub mod geometry;
/// Topmost-element lookup at a point.
pub mod hit_test;
/// JSON scene descriptions.
pub mod scene;

pub use geometry::{Rect, Viewport};
pub use scene::{SceneError, load_scene, parse_scene};

use serde::Serialize;

/// A type-safe index into the document tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A node and its links.
///
/// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
/// "An object that participates in a tree has a parent, which is either
/// null or an object."
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is.
    pub node_type: NodeType,
    /// Parent, or `None` for the document and for detached nodes.
    pub parent: Option<NodeId>,
    /// Children in paint order: later children paint over earlier ones.
    pub children: Vec<NodeId>,
}

/// The node kinds the sampler cares about.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// The document itself. Never painted and never hit.
    Document,
    /// A rendered element.
    Element(ElementData),
}

/// Computed `background-color` of an element nobody styled: the initial
/// value `transparent`, serialized the way `getComputedStyle` reports it.
///
/// [CSS Backgrounds 3 § 3.2](https://www.w3.org/TR/css-backgrounds-3/#background-color)
pub const INITIAL_BACKGROUND: &str = "rgba(0, 0, 0, 0)";

/// Element-specific data: the computed values sampling reads.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// The `id` attribute, if any.
    pub id: Option<String>,
    /// Computed `background-color`, as serialized by the style system.
    /// `None` models a value the platform didn't report.
    pub background: Option<String>,
    /// Border box in viewport coordinates.
    pub rect: Rect,
}

impl ElementData {
    /// An unstyled element with a tag and a box: no id, and the initial
    /// [`INITIAL_BACKGROUND`].
    #[must_use]
    pub fn new(tag_name: impl Into<String>, rect: Rect) -> Self {
        Self {
            tag_name: tag_name.into(),
            id: None,
            background: Some(INITIAL_BACKGROUND.to_string()),
            rect,
        }
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the computed background value.
    #[must_use]
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }
}

/// Arena-based document tree with O(1) node access and traversal.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
///
/// The Document node is always at index 0 ([`NodeId::ROOT`]); everything
/// reachable from it is "connected". The tree also knows the viewport it
/// is displayed in.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
    viewport: Viewport,
}

impl DomTree {
    /// Create a tree with just the Document node, shown in `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let document = Node {
            node_type: NodeType::Document,
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![document],
            viewport,
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The area the document is displayed in.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize the viewport (a window resize).
    pub const fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of allocated nodes, detached ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the Document node exists from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new element and return its ID.
    /// The element is not yet attached to the tree.
    pub fn alloc_element(&mut self, data: ElementData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type: NodeType::Element(data),
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Appends `child` as the last (topmost) child of `parent`. A child that
    /// already has a parent is moved. Unknown ids are ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() || child == NodeId::ROOT {
            return;
        }
        if parent == child || self.is_ancestor_of(child, parent) {
            log::warn!("refusing to append {child:?} under its own descendant {parent:?}");
            return;
        }
        if let Some(old_parent) = self.nodes[child.0].parent {
            let _ = self.remove_child(old_parent, child);
        }
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// [§ 4.2.3 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Detaches `child` (and its subtree) from `parent`. The subtree stays in
    /// the arena and keeps its ids. Returns false if `child` wasn't a child
    /// of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(node) = self.nodes.get_mut(parent.0) else {
            return false;
        };
        let Some(index) = node.children.iter().position(|&c| c == child) else {
            return false;
        };
        let _ = node.children.remove(index);
        self.nodes[child.0].parent = None;
        true
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Whether `ancestor` is a proper ancestor of `id`.
    #[must_use]
    pub fn is_ancestor_of(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// [§ 4.2.1](https://dom.spec.whatwg.org/#connected)
    ///
    /// "A node is connected if its shadow-including root is a document."
    #[must_use]
    pub fn is_connected(&self, id: NodeId) -> bool {
        id == NodeId::ROOT || self.is_ancestor_of(NodeId::ROOT, id)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Connected nodes in tree order (pre-order, document first). Tree order
    /// is also paint order when stacking is ignored.
    pub fn descendants(&self) -> TreeOrderIterator<'_> {
        TreeOrderIterator {
            tree: self,
            stack: vec![NodeId::ROOT],
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Document => None,
        })
    }

    /// Computed background of an element. `None` for the document, unknown
    /// ids, and elements without a reported value.
    #[must_use]
    pub fn background(&self, id: NodeId) -> Option<&str> {
        self.as_element(id).and_then(|e| e.background.as_deref())
    }

    /// Replace an element's computed background (a style change).
    /// Returns false if `id` isn't an element.
    pub fn set_background(&mut self, id: NodeId, background: Option<String>) -> bool {
        match self.nodes.get_mut(id.0).map(|n| &mut n.node_type) {
            Some(NodeType::Element(data)) => {
                data.background = background;
                true
            }
            _ => false,
        }
    }

    /// [§ 4.2.4](https://dom.spec.whatwg.org/#dom-nonelementparentnode-getelementbyid)
    ///
    /// "The `getElementById(elementId)` method steps are to return the first
    /// element, in tree order, within this's descendants, whose ID is `elementId`"
    #[must_use]
    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants()
            .find(|&id| self.as_element(id).and_then(|e| e.id.as_deref()) == Some(element_id))
    }

    /// The element whose parent is the document, if any.
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .find(|&&id| self.as_element(id).is_some())
            .copied()
    }
}

/// Iterator over ancestors of a node.
#[derive(Debug)]
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over connected nodes.
#[derive(Debug)]
pub struct TreeOrderIterator<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for TreeOrderIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
