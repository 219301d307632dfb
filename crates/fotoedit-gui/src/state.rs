use fotoedit_core::overlay::DragSession;

/// Tool tabs along the bottom of the edit screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Filters,
    Crop,
    Adjust,
    Text,
}

impl EditMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Filters => "Filtros",
            Self::Crop => "Recortar",
            Self::Adjust => "Ajustes",
            Self::Text => "Texto",
        }
    }
}

pub const ASPECT_NAMES: &[&str] = &["Original", "1:1", "4:5", "16:9"];

/// Width/height ratio for an aspect index, or `None` for free framing.
///
/// Aspect selection constrains only the preview container; the export
/// always rasterizes the full original image.
pub fn aspect_value(index: usize) -> Option<f32> {
    match index {
        1 => Some(1.0),
        2 => Some(4.0 / 5.0),
        3 => Some(16.0 / 9.0),
        _ => None,
    }
}

/// Transient UI state, reset together with the session on discard.
#[derive(Default)]
pub struct UiState {
    pub edit_mode: EditMode,
    /// Selected index into `ASPECT_NAMES`.
    pub aspect_index: usize,
    /// In-flight caption drag, if any.
    pub drag: Option<DragSession>,
    /// Busy flags gating the trigger controls.
    pub loading: bool,
    pub exporting: bool,
    pub suggesting: bool,
    /// Blocking, dismissible error notice.
    pub notice: Option<String>,
    /// One-line status under the save screen.
    pub last_status: Option<String>,
}

impl UiState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
