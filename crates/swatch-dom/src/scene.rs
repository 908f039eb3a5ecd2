//! JSON scene descriptions.
//!
//! A scene is a viewport plus an element tree with pre-computed backgrounds
//! and boxes: the values a browser would report after style and layout.
//!
//! ```json
//! {
//!   "viewport": { "width": 800, "height": 600 },
//!   "root": {
//!     "tag": "html",
//!     "background": "rgb(255, 255, 255)",
//!     "rect": [0, 0, 800, 600],
//!     "children": [
//!       { "tag": "div", "id": "overlay", "background": "rgba(0, 0, 0, 0.5)",
//!         "rect": [100, 100, 200, 200] }
//!     ]
//!   }
//! }
//! ```
//!
//! An element without a `"background"` key is unstyled and gets
//! [`INITIAL_BACKGROUND`] (`rgba(0, 0, 0, 0)`), so it shows whatever is
//! behind it. An explicit `"background": null` stands for a value the
//! platform didn't report.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::{DomTree, ElementData, INITIAL_BACKGROUND, NodeId, Rect, Viewport};

/// Errors from reading or validating a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file couldn't be read.
    #[error("failed to read scene '{path}': {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The text isn't a valid scene document.
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// An element box has a non-finite component or a negative size.
    #[error("element <{tag}> has an invalid rect {rect:?}")]
    InvalidRect {
        /// Tag of the offending element.
        tag: String,
        /// The rect as given.
        rect: [f64; 4],
    },
    /// The viewport has no area to sample.
    #[error("viewport {width}x{height} is empty")]
    EmptyViewport {
        /// Width as given.
        width: f64,
        /// Height as given.
        height: f64,
    },
}

/// Top-level scene document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneDoc {
    viewport: Viewport,
    root: ElementDoc,
}

/// One element of the scene tree.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementDoc {
    tag: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default = "initial_background")]
    background: Option<String>,
    rect: Rect,
    #[serde(default)]
    children: Vec<ElementDoc>,
}

/// Parse a scene from JSON text into a tree rooted at a single document
/// element.
///
/// # Errors
///
/// Returns [`SceneError::Json`] for malformed JSON, and the validation
/// variants for empty viewports or bad rects.
pub fn parse_scene(json: &str) -> Result<DomTree, SceneError> {
    let doc: SceneDoc = serde_json::from_str(json)?;
    let Viewport { width, height } = doc.viewport;
    if doc.viewport.is_empty() || !width.is_finite() || !height.is_finite() {
        return Err(SceneError::EmptyViewport { width, height });
    }

    let mut tree = DomTree::new(doc.viewport);
    build_element(&mut tree, NodeId::ROOT, doc.root)?;
    log::debug!(
        "loaded scene: {} nodes in a {width}x{height} viewport",
        tree.len()
    );
    Ok(tree)
}

/// Read and parse a scene file.
///
/// # Errors
///
/// Returns [`SceneError::Io`] if the file can't be read, otherwise whatever
/// [`parse_scene`] returns.
pub fn load_scene(path: impl AsRef<Path>) -> Result<DomTree, SceneError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_scene(&json)
}

fn initial_background() -> Option<String> {
    Some(INITIAL_BACKGROUND.to_string())
}

fn build_element(tree: &mut DomTree, parent: NodeId, doc: ElementDoc) -> Result<(), SceneError> {
    if !doc.rect.is_valid() {
        return Err(SceneError::InvalidRect {
            tag: doc.tag,
            rect: doc.rect.into(),
        });
    }

    let data = ElementData {
        tag_name: doc.tag,
        id: doc.id,
        background: doc.background,
        rect: doc.rect,
    };
    let id = tree.alloc_element(data);
    tree.append_child(parent, id);

    for child in doc.children {
        build_element(tree, id, child)?;
    }
    Ok(())
}
