//! Content painted over the canvas until the editor next redraws.
//!
//! An opened image is shown once at the canvas origin. It is not part of the
//! drawing: the first redraw the editor requests, such as any drag, wipes it.
//! A press or a click alone does not.

use crate::editor::Editor;

/// Overlay content tagged with the editor revision it was shown at
#[derive(Debug, Clone)]
pub struct CanvasOverlay<T> {
    content: T,
    shown_at_revision: u64,
}

impl<T> CanvasOverlay<T> {
    pub fn new(content: T, editor: &Editor) -> Self {
        Self {
            content,
            shown_at_revision: editor.revision(),
        }
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    /// True once the editor has redrawn since the overlay was shown
    pub fn is_expired(&self, editor: &Editor) -> bool {
        editor.revision() != self.shown_at_revision
    }
}

/// Drop `overlay` if the editor has redrawn since it was shown.
///
/// Returns true if an overlay was dropped.
pub fn expire<T>(overlay: &mut Option<CanvasOverlay<T>>, editor: &Editor) -> bool {
    if overlay.as_ref().is_some_and(|overlay| overlay.is_expired(editor)) {
        *overlay = None;
        return true;
    }
    false
}
