//! Caption overlay positioning and drag geometry.
//!
//! All math lives here so the preview (container coordinates) and the
//! export (native surface coordinates) resolve the same stored percentages
//! to the same normalized point.

use crate::consts::{DRAG_MAX_PERCENT, DRAG_MIN_PERCENT};
use crate::session::TextOverlay;

/// An in-flight drag of the caption overlay.
///
/// Created on pointer-down over the caption while text editing is active,
/// dropped on release. Input is single-pointer, so at most one session
/// exists at a time.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    /// Overlay position when the drag began, in percent.
    pub origin: (f32, f32),
}

impl DragSession {
    pub fn begin(overlay: &TextOverlay) -> Self {
        Self {
            origin: (overlay.x, overlay.y),
        }
    }
}

/// Whether dragging is allowed: text mode must be active and the overlay
/// must have content. Mode switches and drags never touch the content.
pub fn drag_enabled(text_mode_active: bool, overlay: &TextOverlay) -> bool {
    text_mode_active && !overlay.is_empty()
}

/// Map an absolute pointer position to clamped overlay percentages.
///
/// `container_min` / `container_size` describe the displayed image rect.
/// The result is clamped to [5, 95] on both axes so the caption can never
/// reach the edge, no matter where the pointer goes.
pub fn drag_position(
    pointer: (f32, f32),
    container_min: (f32, f32),
    container_size: (f32, f32),
) -> (f32, f32) {
    let x = (pointer.0 - container_min.0) / container_size.0 * 100.0;
    let y = (pointer.1 - container_min.1) / container_size.1 * 100.0;
    (
        x.clamp(DRAG_MIN_PERCENT, DRAG_MAX_PERCENT),
        y.clamp(DRAG_MIN_PERCENT, DRAG_MAX_PERCENT),
    )
}

/// Anchor point of the overlay center inside a surface of the given size.
pub fn anchor_point(overlay: &TextOverlay, width: f32, height: f32) -> (f32, f32) {
    (width * overlay.x / 100.0, height * overlay.y / 100.0)
}
