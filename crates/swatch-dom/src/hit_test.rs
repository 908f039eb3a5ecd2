//! [CSSOM View § 5 `elementFromPoint()`](https://drafts.csswg.org/cssom-view/#dom-document-elementfrompoint)
//!
//! "The `elementFromPoint(x, y)` method must follow these steps:
//! 1. If either argument is negative, x is greater than the viewport width
//!    excluding the size of a rendered scroll bar (if any), or y is greater
//!    than the viewport height excluding the size of a rendered scroll bar
//!    (if any), or there is no viewport associated with the document, return
//!    null and terminate these steps.
//! 2. If there is a box in the viewport that would be a target for hit
//!    testing at coordinates x,y, when applying the transforms that apply to
//!    the descendants of the viewport, return the associated element and
//!    terminate these steps.
//! 3. If the document has a root element, return the root element and
//!    terminate these steps.
//! 4. Return null."
//!
//! NOTE: There are no stacking contexts here. Tree order is paint order, so
//! the topmost box at a point is the *last* box in tree order containing it.

use crate::{DomTree, NodeId};

impl DomTree {
    /// The topmost element at `(x, y)`, or `None` outside the viewport.
    ///
    /// Inside the viewport a point no box covers falls back to the document
    /// element (step 3), so only an empty document misses there.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<NodeId> {
        // STEP 1: Outside the viewport (NaN included) there is no target.
        if !self.viewport().contains(x, y) {
            return None;
        }

        // STEP 2: Last element in tree order whose border box contains the point.
        let topmost = self
            .descendants()
            .filter(|&id| self.as_element(id).is_some_and(|e| e.rect.contains(x, y)))
            .last();

        // STEP 3: The root element catches everything else.
        topmost.or_else(|| self.document_element())
    }
}
