use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use fotoedit_core::catalog::FilterCatalog;
use fotoedit_core::compose::{chain_to_string, resolve_chain};
use fotoedit_core::export::export_jpeg;
use fotoedit_core::session::{EditSession, SessionPatch, TextOverlay};

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image file (any format the image crate can decode)
    pub file: PathBuf,

    /// Filter preset id (see `fotoedit filters`)
    #[arg(long, default_value = "original")]
    pub filter: String,

    /// Filter intensity, 0-100
    #[arg(long, default_value_t = 75.0)]
    pub intensity: f32,

    /// Brightness percent, 0-200
    #[arg(long, default_value_t = 100.0)]
    pub brightness: f32,

    /// Contrast percent, 0-200
    #[arg(long, default_value_t = 100.0)]
    pub contrast: f32,

    /// Saturation percent, 0-200
    #[arg(long, default_value_t = 100.0)]
    pub saturation: f32,

    /// Caption text burned into the export
    #[arg(long)]
    pub text: Option<String>,

    /// Caption horizontal position, percent of image width
    #[arg(long, default_value_t = 50.0)]
    pub x: f32,

    /// Caption vertical position, percent of image height
    #[arg(long, default_value_t = 50.0)]
    pub y: f32,

    /// Output file path (defaults to the timestamped export name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let catalog = FilterCatalog::builtin();
    catalog
        .require(&args.filter)
        .context("Run `fotoedit filters` for the list of presets")?;

    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let mut session = EditSession::default();
    session.attach_image(Arc::new(bytes));
    session.patch(SessionPatch {
        preset_id: Some(args.filter.clone()),
        intensity: Some(args.intensity),
        brightness: Some(args.brightness),
        contrast: Some(args.contrast),
        saturation: Some(args.saturation),
        text: args.text.as_ref().map(|content| TextOverlay {
            content: content.clone(),
            x: args.x,
            y: args.y,
        }),
    });

    let preset = catalog.get_or_identity(&session.preset_id);
    let chain = resolve_chain(preset, session.intensity, &session.adjustments);
    println!(
        "{} {} @ {:.0}%: {}",
        style("Applying").green().bold(),
        preset.name,
        args.intensity,
        chain_to_string(&chain)
    );

    let exported = export_jpeg(&session, catalog).context("Export failed")?;
    tracing::debug!(
        preset = %session.preset_id,
        intensity = session.intensity,
        bytes = exported.bytes.len(),
        "export finished"
    );

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&exported.file_name));
    std::fs::write(&output, &exported.bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} {} ({}x{}, {} bytes)",
        style("Saved").green().bold(),
        output.display(),
        exported.width,
        exported.height,
        exported.bytes.len()
    );

    Ok(())
}
