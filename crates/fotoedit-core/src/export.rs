//! Export rasterizer: flatten the session to a JPEG byte buffer.

use std::time::{SystemTime, UNIX_EPOCH};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

use crate::apply::apply_chain;
use crate::caption::{draw_caption, layout_caption, load_bold_sans};
use crate::catalog::FilterCatalog;
use crate::compose::resolve_chain;
use crate::consts::EXPORT_JPEG_QUALITY;
use crate::error::{EditError, Result};
use crate::session::EditSession;

/// A finished export, ready to hand to whatever writes the download.
#[derive(Clone, Debug)]
pub struct ExportedImage {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// Download name for an export finished at the given instant.
pub fn export_file_name(unix_millis: u128) -> String {
    format!("foto-edit-{unix_millis}.jpg")
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Flatten the session into a JPEG at the source image's native size.
///
/// The operator chain is identical to the one the preview uses, so the
/// result matches the live view pixel-for-pixel; the caption is drawn after
/// the chain with fresh state so the image filters never compound into the
/// text shadow. Any failure aborts before bytes are produced and leaves the
/// session untouched.
/// Composite the surface over black and force alpha opaque.
///
/// JPEG carries no alpha channel; an `opacity` operator in the chain lands
/// in alpha, and stripping it at RGB conversion would undo the operator.
/// Flattening happens before the caption so the text composites onto an
/// opaque surface.
fn flatten_alpha(surface: &mut RgbaImage) {
    for px in surface.pixels_mut() {
        if px.0[3] == 255 {
            continue;
        }
        let a = px.0[3] as f32 / 255.0;
        for c in 0..3 {
            px.0[c] = (px.0[c] as f32 * a).round() as u8;
        }
        px.0[3] = 255;
    }
}

pub fn export_jpeg(session: &EditSession, catalog: &FilterCatalog) -> Result<ExportedImage> {
    let source = session.image.as_ref().ok_or(EditError::NoImage)?;

    // Full decode up front; drawing from a partially decoded source would
    // silently produce a blank export.
    let decoded = image::load_from_memory(source)?;
    let mut surface: RgbaImage = decoded.to_rgba8();
    let (width, height) = surface.dimensions();
    if width == 0 || height == 0 {
        return Err(EditError::InvalidDimensions { width, height });
    }

    let preset = catalog.get_or_identity(&session.preset_id);
    let chain = resolve_chain(preset, session.intensity, &session.adjustments);
    apply_chain(&mut surface, &chain);
    flatten_alpha(&mut surface);

    if let Some(layout) = layout_caption(&session.text, width, height) {
        let font = load_bold_sans()?;
        draw_caption(&mut surface, &layout, &font);
    }

    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, EXPORT_JPEG_QUALITY);
    // Alpha is already flattened, so the RGB conversion is lossless here.
    DynamicImage::ImageRgba8(surface).to_rgb8().write_with_encoder(encoder)?;

    let file_name = export_file_name(now_millis());
    tracing::info!(%file_name, width, height, "export complete");

    Ok(ExportedImage {
        bytes,
        file_name,
        width,
        height,
    })
}
