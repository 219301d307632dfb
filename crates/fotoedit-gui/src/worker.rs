use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use image::RgbaImage;

use fotoedit_core::apply::{apply_chain, downscale_for_preview};
use fotoedit_core::catalog::FilterCatalog;
use fotoedit_core::export::export_jpeg;
use fotoedit_core::suggest::CaptionSuggester;

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Decoded source data cached on the worker thread between commands.
struct ImageCache {
    /// Full-resolution decode, kept for suggestion snapshots.
    decoded: Option<RgbaImage>,
    /// Display-scaled copy that preview filtering starts from.
    preview_base: Option<RgbaImage>,
}

impl ImageCache {
    fn new() -> Self {
        Self {
            decoded: None,
            preview_base: None,
        }
    }
}

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    suggester: Option<Box<dyn CaptionSuggester>>,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("fotoedit-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, suggester);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    suggester: Option<Box<dyn CaptionSuggester>>,
) {
    let mut cache = ImageCache::new();

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path } => {
                let loaded = std::fs::read(&path)
                    .map_err(anyhow::Error::from)
                    .and_then(|bytes| {
                        // Decode fully before anything draws from it.
                        let decoded = image::load_from_memory(&bytes)?.to_rgba8();
                        Ok((bytes, decoded))
                    });
                match loaded {
                    Ok((bytes, decoded)) => {
                        let (width, height) = decoded.dimensions();
                        let preview_base = downscale_for_preview(&decoded);
                        let preview = rgba_to_color_image(&preview_base);
                        cache.decoded = Some(decoded);
                        cache.preview_base = Some(preview_base);
                        tracing::info!(path = %path.display(), width, height, "image loaded");
                        send(
                            &result_tx,
                            &ctx,
                            WorkerResult::ImageLoaded {
                                bytes: Arc::new(bytes),
                                preview,
                                width,
                                height,
                            },
                        );
                    }
                    Err(err) => {
                        tracing::warn!(path = %path.display(), %err, "image load failed");
                        send(
                            &result_tx,
                            &ctx,
                            WorkerResult::LoadFailed {
                                message: format!("No se pudo cargar la imagen: {err}"),
                            },
                        );
                    }
                }
            }

            WorkerCommand::FilterPreview { chain, revision } => {
                let Some(base) = cache.preview_base.as_ref() else {
                    continue;
                };
                let mut img = base.clone();
                apply_chain(&mut img, &chain);
                send(
                    &result_tx,
                    &ctx,
                    WorkerResult::PreviewReady {
                        image: rgba_to_color_image(&img),
                        revision,
                    },
                );
            }

            WorkerCommand::Export { session } => {
                let start = Instant::now();
                match export_jpeg(&session, FilterCatalog::builtin()) {
                    Ok(exported) => send(
                        &result_tx,
                        &ctx,
                        WorkerResult::ExportComplete {
                            exported,
                            elapsed: start.elapsed(),
                        },
                    ),
                    Err(err) => {
                        tracing::warn!(%err, "export failed");
                        send(
                            &result_tx,
                            &ctx,
                            WorkerResult::ExportFailed {
                                message: format!(
                                    "No se pudo exportar la foto: {err}. Inténtalo de nuevo."
                                ),
                            },
                        );
                    }
                }
            }

            WorkerCommand::Suggest { generation } => {
                let result = suggest_caption(&cache, suggester.as_deref());
                match result {
                    Ok(phrase) => send(
                        &result_tx,
                        &ctx,
                        WorkerResult::SuggestionReady { phrase, generation },
                    ),
                    Err(message) => send(
                        &result_tx,
                        &ctx,
                        WorkerResult::SuggestFailed {
                            message,
                            generation,
                        },
                    ),
                }
            }
        }
    }
}

/// One-shot suggestion call: snapshot the image as JPEG, hand it to the
/// backend, pass its phrase through. No retry on failure.
fn suggest_caption(
    cache: &ImageCache,
    suggester: Option<&dyn CaptionSuggester>,
) -> Result<String, String> {
    let Some(suggester) = suggester else {
        return Err("Sugerencias no disponibles".to_string());
    };
    let Some(decoded) = cache.decoded.as_ref() else {
        return Err("No hay imagen cargada".to_string());
    };

    let snapshot = downscale_for_preview(decoded);
    let mut jpeg = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, 80);
    if let Err(err) = image::DynamicImage::ImageRgba8(snapshot)
        .to_rgb8()
        .write_with_encoder(encoder)
    {
        return Err(format!("No se pudo preparar la imagen: {err}"));
    }

    suggester
        .suggest(&jpeg)
        .map_err(|err| format!("Sin conexión con el servicio de sugerencias: {err}"))
}
