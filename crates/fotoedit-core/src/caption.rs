//! Caption layout and rasterization for the export surface.
//!
//! Layout is pure math (testable without a font); rasterization uses
//! ab_glyph coverage and a separable gaussian blur for the drop shadow.

use std::path::PathBuf;

use ab_glyph::{Font, FontArc, ScaleFont};
use image::RgbaImage;
use rayon::prelude::*;

use crate::consts::{
    CAPTION_MIN_PX, CAPTION_SHADOW_ALPHA, CAPTION_WIDTH_DIVISOR, PARALLEL_PIXEL_THRESHOLD,
};
use crate::error::{EditError, Result};
use crate::overlay::anchor_point;
use crate::session::TextOverlay;

/// Drop shadow parameters derived from the font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowSpec {
    pub blur_radius: f32,
    pub offset_y: f32,
    pub alpha: f32,
}

/// Fully resolved caption placement for a surface of known size.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionLayout {
    /// Upper-cased content. The raw stored string is upper-cased here
    /// because the export surface inherits no text styling.
    pub text: String,
    pub font_px: f32,
    /// Center of the caption in surface pixels.
    pub anchor: (f32, f32),
    pub shadow: ShadowSpec,
}

/// Caption font size for a surface width: scales with the image but never
/// drops below a readable floor.
pub fn caption_font_px(surface_width: u32) -> f32 {
    (surface_width as f32 / CAPTION_WIDTH_DIVISOR).max(CAPTION_MIN_PX)
}

/// Resolve the caption layout, or `None` when there is nothing to draw.
pub fn layout_caption(overlay: &TextOverlay, width: u32, height: u32) -> Option<CaptionLayout> {
    if overlay.is_empty() {
        return None;
    }
    let font_px = caption_font_px(width);
    Some(CaptionLayout {
        text: overlay.content.to_uppercase(),
        font_px,
        anchor: anchor_point(overlay, width as f32, height as f32),
        shadow: ShadowSpec {
            blur_radius: font_px / 2.0,
            offset_y: font_px / 5.0,
            alpha: CAPTION_SHADOW_ALPHA,
        },
    })
}

/// Candidate paths for a bold sans-serif face, checked in order.
fn bold_sans_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(path) = std::env::var("FOTOEDIT_FONT") {
        candidates.push(PathBuf::from(path));
    }
    for p in [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "C:\\Windows\\Fonts\\arialbd.ttf",
    ] {
        candidates.push(PathBuf::from(p));
    }
    candidates
}

/// Load a bold sans-serif system font for caption burning.
pub fn load_bold_sans() -> Result<FontArc> {
    for path in bold_sans_candidates() {
        if let Ok(data) = std::fs::read(&path) {
            if let Ok(font) = FontArc::try_from_vec(data) {
                tracing::debug!(path = %path.display(), "caption font loaded");
                return Ok(font);
            }
        }
    }
    Err(EditError::FontUnavailable)
}

/// Burn the caption into the image: blurred black shadow first, then the
/// solid white fill, both centered on the layout anchor.
///
/// Must be called after the filter chain has been applied; the caption is
/// never run through the image operators.
pub fn draw_caption(img: &mut RgbaImage, layout: &CaptionLayout, font: &FontArc) {
    let mask = rasterize_line(font, &layout.text, layout.font_px);
    if mask.width == 0 || mask.height == 0 {
        return;
    }

    // Shadow blur radius maps to a gaussian sigma of half the radius.
    let sigma = layout.shadow.blur_radius / 2.0;
    let shadow = mask.blurred(sigma);

    let left = layout.anchor.0 - mask.width as f32 / 2.0;
    let top = layout.anchor.1 - mask.height as f32 / 2.0;

    composite_mask(
        img,
        &shadow,
        left,
        top + layout.shadow.offset_y,
        [0, 0, 0],
        layout.shadow.alpha,
    );
    composite_mask(img, &mask, left, top, [255, 255, 255], 1.0);
}

/// Grayscale coverage mask for one line of text, padded so the shadow blur
/// has room to spread.
struct CoverageMask {
    width: u32,
    height: u32,
    /// Row-major coverage in [0, 1]. Padding around the glyph box is
    /// symmetric, so centering the mask centers the text.
    data: Vec<f32>,
}

impl CoverageMask {
    fn blurred(&self, sigma: f32) -> CoverageMask {
        if sigma <= 0.0 {
            return CoverageMask {
                width: self.width,
                height: self.height,
                data: self.data.clone(),
            };
        }
        let kernel = gaussian_kernel(sigma);
        let rows = convolve_rows(&self.data, self.width as usize, self.height as usize, &kernel);
        let data = convolve_cols(&rows, self.width as usize, self.height as usize, &kernel);
        CoverageMask {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

fn rasterize_line(font: &FontArc, text: &str, size_px: f32) -> CoverageMask {
    let scale = ab_glyph::PxScale::from(size_px);
    let scaled = font.as_scaled(scale);
    let ascent = scaled.ascent();
    let descent = scaled.descent();
    let line_h = (ascent - descent).ceil();

    // Measure advance width with kerning.
    let mut line_w = 0.0f32;
    let mut prev: Option<ab_glyph::GlyphId> = None;
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(p) = prev {
            line_w += scaled.kern(p, id);
        }
        line_w += scaled.h_advance(id);
        prev = Some(id);
    }

    // Pad generously: glyphs may overhang their advance box and the shadow
    // blur spreads beyond the coverage.
    let pad = (size_px * 2.0).ceil();
    let width = (line_w.ceil() + pad * 2.0) as u32;
    let height = (line_h + pad * 2.0) as u32;
    if width == 0 || height == 0 || text.is_empty() {
        return CoverageMask {
            width: 0,
            height: 0,
            data: Vec::new(),
        };
    }

    let mut data = vec![0.0f32; width as usize * height as usize];
    let baseline_y = pad + ascent;
    let mut cursor_x = pad;
    let mut prev: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(p) = prev {
            cursor_x += scaled.kern(p, id);
        }
        let glyph = id.with_scale_and_position(scale, ab_glyph::point(cursor_x, baseline_y));
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, cov| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                    return;
                }
                let idx = py as usize * width as usize + px as usize;
                data[idx] = data[idx].max(cov);
            });
        }
        cursor_x += scaled.h_advance(id);
        prev = Some(id);
    }

    CoverageMask {
        width,
        height,
        data,
    }
}

fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as usize;
    let size = 2 * radius + 1;
    let mut kernel = vec![0.0f32; size];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

fn convolve_rows(data: &[f32], w: usize, h: usize, kernel: &[f32]) -> Vec<f32> {
    let radius = kernel.len() / 2;
    let convolve_row = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let src =
                        (col as isize + ki as isize - radius as isize).clamp(0, w as isize - 1) as usize;
                    sum += data[row * w + src] * kv;
                }
                sum
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if w * h >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(convolve_row).collect()
    } else {
        (0..h).map(convolve_row).collect()
    };
    rows.into_iter().flatten().collect()
}

fn convolve_cols(data: &[f32], w: usize, h: usize, kernel: &[f32]) -> Vec<f32> {
    let radius = kernel.len() / 2;
    let convolve_row = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let src =
                        (row as isize + ki as isize - radius as isize).clamp(0, h as isize - 1) as usize;
                    sum += data[src * w + col] * kv;
                }
                sum
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if w * h >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(convolve_row).collect()
    } else {
        (0..h).map(convolve_row).collect()
    };
    rows.into_iter().flatten().collect()
}

/// Alpha-blend a tinted coverage mask over the image at `(left, top)`.
fn composite_mask(
    img: &mut RgbaImage,
    mask: &CoverageMask,
    left: f32,
    top: f32,
    color: [u8; 3],
    opacity: f32,
) {
    let (iw, ih) = img.dimensions();
    let x0 = left.round() as i64;
    let y0 = top.round() as i64;

    for my in 0..mask.height as i64 {
        let py = y0 + my;
        if py < 0 || py >= ih as i64 {
            continue;
        }
        for mx in 0..mask.width as i64 {
            let px = x0 + mx;
            if px < 0 || px >= iw as i64 {
                continue;
            }
            let cov = mask.data[my as usize * mask.width as usize + mx as usize];
            let alpha = (cov * opacity).clamp(0.0, 1.0);
            if alpha <= 0.0 {
                continue;
            }
            let dst = img.get_pixel_mut(px as u32, py as u32);
            for c in 0..3 {
                let d = dst.0[c] as f32 / 255.0;
                let s = color[c] as f32 / 255.0;
                dst.0[c] = ((s * alpha + d * (1.0 - alpha)) * 255.0).round() as u8;
            }
            let da = dst.0[3] as f32 / 255.0;
            dst.0[3] = ((alpha + da * (1.0 - alpha)) * 255.0).round() as u8;
        }
    }
}
