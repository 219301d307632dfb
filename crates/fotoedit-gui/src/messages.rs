use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use fotoedit_core::catalog::ChainOp;
use fotoedit_core::export::ExportedImage;
use fotoedit_core::session::EditSession;

/// Commands sent from the UI thread to the worker thread.
pub enum WorkerCommand {
    /// Read and fully decode an image file picked by the user.
    LoadImage { path: PathBuf },

    /// Apply a resolved operator chain to the cached preview-scale copy.
    /// `revision` identifies the chain so stale results can be dropped.
    FilterPreview { chain: Vec<ChainOp>, revision: u64 },

    /// Flatten a session snapshot to JPEG bytes at native resolution.
    Export { session: EditSession },

    /// Ask the caption suggestion backend for a phrase for the loaded
    /// image. `generation` ties the reply to the session that asked.
    Suggest { generation: u64 },
}

/// Results sent from the worker thread back to the UI thread.
pub enum WorkerResult {
    /// Image decoded; bytes are handed back for the session, the preview
    /// image goes straight to a texture.
    ImageLoaded {
        bytes: Arc<Vec<u8>>,
        preview: egui::ColorImage,
        width: u32,
        height: u32,
    },

    /// Filtered preview for `revision` ready for display.
    PreviewReady {
        image: egui::ColorImage,
        revision: u64,
    },

    ExportComplete {
        exported: ExportedImage,
        elapsed: Duration,
    },

    SuggestionReady {
        phrase: String,
        generation: u64,
    },

    LoadFailed {
        message: String,
    },
    ExportFailed {
        message: String,
    },
    SuggestFailed {
        message: String,
        generation: u64,
    },
}
