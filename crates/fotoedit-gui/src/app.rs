use std::sync::mpsc;

use fotoedit_core::catalog::FilterCatalog;
use fotoedit_core::compose::resolve_chain;
use fotoedit_core::screen::Screen;
use fotoedit_core::session::{EditSession, SessionPatch, TextOverlay};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::UiState;
use crate::worker;

pub struct FotoEditApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub screen: Screen,
    pub session: EditSession,
    pub ui: UiState,
    /// Unfiltered preview-scale texture, shown on the preview screen.
    pub source_texture: Option<egui::TextureHandle>,
    /// Filtered preview texture, shown while editing and saving.
    pub filtered_texture: Option<egui::TextureHandle>,
    /// Native dimensions of the loaded image.
    pub image_size: Option<(u32, u32)>,
    /// Monotonic id of the most recently requested filter chain.
    chain_revision: u64,
    /// Revision currently displayed by `filtered_texture`.
    shown_revision: u64,
    /// Suggestion generation, bumped on reset so stale replies are dropped.
    generation: u64,
    pub suggest_available: bool,
}

impl FotoEditApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        // No suggestion backend is wired in by default; the button stays
        // hidden until one is.
        let suggester: Option<Box<dyn fotoedit_core::suggest::CaptionSuggester>> = None;
        let suggest_available = suggester.is_some();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone(), suggester);

        Self {
            cmd_tx,
            result_rx,
            screen: Screen::default(),
            session: EditSession::default(),
            ui: UiState::default(),
            source_texture: None,
            filtered_texture: None,
            image_size: None,
            chain_revision: 0,
            shown_revision: 0,
            generation: 0,
            suggest_available,
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Apply an edit and queue a fresh filtered preview.
    pub fn patch_session(&mut self, patch: SessionPatch) {
        self.session.patch(patch);
        self.request_preview();
    }

    /// Caption edits do not change the filter chain, so no new preview.
    pub fn set_caption(&mut self, overlay: TextOverlay) {
        self.session.patch(SessionPatch::text(overlay));
    }

    pub fn request_preview(&mut self) {
        self.chain_revision += 1;
        let preset = FilterCatalog::builtin().get_or_identity(&self.session.preset_id);
        let chain = resolve_chain(preset, self.session.intensity, &self.session.adjustments);
        self.send_command(WorkerCommand::FilterPreview {
            chain,
            revision: self.chain_revision,
        });
    }

    pub fn begin_load(&mut self, path: std::path::PathBuf) {
        self.ui.loading = true;
        self.send_command(WorkerCommand::LoadImage { path });
    }

    pub fn begin_export(&mut self) {
        if self.ui.exporting {
            return;
        }
        self.ui.exporting = true;
        self.ui.last_status = None;
        self.send_command(WorkerCommand::Export {
            session: self.session.clone(),
        });
    }

    pub fn begin_suggest(&mut self) {
        if self.ui.suggesting {
            return;
        }
        self.ui.suggesting = true;
        self.send_command(WorkerCommand::Suggest {
            generation: self.generation,
        });
    }

    /// Drop the image and all edits, back to the upload screen.
    pub fn discard(&mut self) {
        self.session.reset();
        self.ui.reset();
        self.source_texture = None;
        self.filtered_texture = None;
        self.image_size = None;
        self.generation += 1;
        self.screen = Screen::Upload;
    }

    pub fn go_back(&mut self) {
        if self.screen.back_discards_image() {
            self.discard();
        } else {
            self.screen = self.screen.back();
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    bytes,
                    preview,
                    width,
                    height,
                } => {
                    self.ui.loading = false;
                    self.session.reset();
                    self.session.attach_image(bytes);
                    self.image_size = Some((width, height));
                    let texture =
                        ctx.load_texture("source", preview, egui::TextureOptions::LINEAR);
                    self.filtered_texture = Some(texture.clone());
                    self.source_texture = Some(texture);
                    self.shown_revision = self.chain_revision;
                    self.screen = Screen::Preview;
                }
                WorkerResult::PreviewReady { image, revision } => {
                    // An older chain finishing after a newer one must not
                    // overwrite the newer preview.
                    if revision < self.shown_revision || self.source_texture.is_none() {
                        continue;
                    }
                    self.shown_revision = revision;
                    self.filtered_texture = Some(ctx.load_texture(
                        "filtered",
                        image,
                        egui::TextureOptions::LINEAR,
                    ));
                }
                WorkerResult::ExportComplete { exported, elapsed } => {
                    self.ui.exporting = false;
                    tracing::info!(
                        file = %exported.file_name,
                        bytes = exported.bytes.len(),
                        ?elapsed,
                        "export ready"
                    );
                    self.save_exported(&exported);
                }
                WorkerResult::SuggestionReady { phrase, generation } => {
                    self.ui.suggesting = false;
                    if generation == self.generation {
                        let overlay = TextOverlay {
                            content: phrase,
                            ..self.session.text.clone()
                        };
                        self.set_caption(overlay);
                    }
                }
                WorkerResult::LoadFailed { message } => {
                    self.ui.loading = false;
                    self.ui.notice = Some(message);
                }
                WorkerResult::ExportFailed { message } => {
                    self.ui.exporting = false;
                    self.ui.notice = Some(message);
                }
                WorkerResult::SuggestFailed {
                    message,
                    generation,
                } => {
                    self.ui.suggesting = false;
                    if generation == self.generation {
                        self.ui.notice = Some(message);
                    }
                }
            }
        }
    }

    /// Prompt for a destination and write the exported JPEG.
    fn save_exported(&mut self, exported: &fotoedit_core::export::ExportedImage) {
        let picked = rfd::FileDialog::new()
            .set_file_name(&exported.file_name)
            .add_filter("JPEG", &["jpg", "jpeg"])
            .save_file();
        let Some(path) = picked else {
            self.ui.last_status = Some("Exportación cancelada".to_string());
            return;
        };
        match std::fs::write(&path, &exported.bytes) {
            Ok(()) => {
                self.ui.last_status =
                    Some(format!("Guardada en {}", path.display()));
            }
            Err(err) => {
                self.ui.notice =
                    Some(format!("No se pudo guardar el archivo: {err}"));
            }
        }
    }
}

impl eframe::App for FotoEditApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        match self.screen {
            Screen::Upload => panels::upload::show(ctx, self),
            Screen::Preview => panels::preview::show(ctx, self),
            Screen::Edit => panels::edit::show(ctx, self),
            Screen::Save => panels::save::show(ctx, self),
        }

        if let Some(message) = self.ui.notice.clone() {
            egui::Window::new("Aviso")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("Cerrar").clicked() {
                        self.ui.notice = None;
                    }
                });
        }
    }
}
