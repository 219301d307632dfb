//! Screen navigation state machine.
//!
//! Four screens with fixed transitions:
//! Upload → Preview (image loaded), Preview → Edit (continue),
//! Edit → Save (save). Back edges: Preview → Upload (drops the image),
//! Edit → Preview, Save → Edit. Discard from any screen returns to Upload
//! with a full session reset.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Upload,
    Preview,
    Edit,
    Save,
}

impl Screen {
    /// Where the back control leads. Upload has no back edge.
    pub fn back(self) -> Screen {
        match self {
            Self::Upload => Self::Upload,
            Self::Preview => Self::Upload,
            Self::Edit => Self::Preview,
            Self::Save => Self::Edit,
        }
    }

    /// Going back from the preview abandons the loaded image.
    pub fn back_discards_image(self) -> bool {
        matches!(self, Self::Preview)
    }

    /// The forward edge, if this screen has one. Upload advances through
    /// image acquisition, not a button, so it reports `None` here.
    pub fn forward(self) -> Option<Screen> {
        match self {
            Self::Upload => None,
            Self::Preview => Some(Self::Edit),
            Self::Edit => Some(Self::Save),
            Self::Save => None,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upload => write!(f, "Upload"),
            Self::Preview => write!(f, "Preview"),
            Self::Edit => write!(f, "Edit"),
            Self::Save => write!(f, "Save"),
        }
    }
}
