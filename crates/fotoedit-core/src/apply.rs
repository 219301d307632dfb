//! Destructive application of a resolved operator chain to pixel data.
//!
//! Each operator becomes a small per-pixel transform; transforms run in
//! chain order with channel clamping between steps, matching how the
//! display-time filter functions behave. The same pass serves both the
//! preview (on a display-scaled copy) and the export (at native size).

use image::RgbaImage;
use rayon::prelude::*;

use crate::catalog::{ChainOp, OpKind, OpUnit};
use crate::consts::{LUMA_B, LUMA_G, LUMA_R, PARALLEL_PIXEL_THRESHOLD, PREVIEW_MAX_EDGE};

/// A compiled per-pixel operator.
#[derive(Clone, Copy, Debug)]
enum PixelTransform {
    /// `rgb' = matrix * rgb + offset`
    Linear([[f32; 3]; 3], [f32; 3]),
    /// `alpha' = alpha * factor`
    Alpha(f32),
}

/// Apply a resolved operator chain to an image in place.
///
/// Raw tokens are skipped: the compositor already guarantees they carry no
/// interpretable magnitude, and an uninterpretable operator must degrade to
/// a no-op rather than fail the render.
pub fn apply_chain(img: &mut RgbaImage, chain: &[ChainOp]) {
    let transforms: Vec<PixelTransform> = chain.iter().filter_map(compile_op).collect();
    if transforms.is_empty() {
        return;
    }

    let (w, h) = img.dimensions();
    tracing::debug!(width = w, height = h, ops = transforms.len(), "applying operator chain");

    let pixels = img.as_mut();
    if (w as usize) * (h as usize) >= PARALLEL_PIXEL_THRESHOLD {
        pixels
            .par_chunks_exact_mut(4)
            .for_each(|px| transform_pixel(px, &transforms));
    } else {
        pixels
            .chunks_exact_mut(4)
            .for_each(|px| transform_pixel(px, &transforms));
    }
}

fn transform_pixel(px: &mut [u8], transforms: &[PixelTransform]) {
    let mut r = px[0] as f32 / 255.0;
    let mut g = px[1] as f32 / 255.0;
    let mut b = px[2] as f32 / 255.0;
    let mut a = px[3] as f32 / 255.0;

    for t in transforms {
        match *t {
            PixelTransform::Linear(m, off) => {
                let nr = m[0][0] * r + m[0][1] * g + m[0][2] * b + off[0];
                let ng = m[1][0] * r + m[1][1] * g + m[1][2] * b + off[1];
                let nb = m[2][0] * r + m[2][1] * g + m[2][2] * b + off[2];
                r = nr.clamp(0.0, 1.0);
                g = ng.clamp(0.0, 1.0);
                b = nb.clamp(0.0, 1.0);
            }
            PixelTransform::Alpha(f) => a = (a * f).clamp(0.0, 1.0),
        }
    }

    px[0] = (r * 255.0).round() as u8;
    px[1] = (g * 255.0).round() as u8;
    px[2] = (b * 255.0).round() as u8;
    px[3] = (a * 255.0).round() as u8;
}

fn compile_op(op: &ChainOp) -> Option<PixelTransform> {
    let ChainOp::Filter { kind, value, unit } = op else {
        return None;
    };
    // Percent and unitless magnitudes mean the same multiplier at different
    // scales; degrees only ever reach the hue rotation.
    let v = match unit {
        OpUnit::Percent => value / 100.0,
        OpUnit::Degrees | OpUnit::Unitless => *value,
    };

    Some(match kind {
        OpKind::Brightness => scale_matrix(v),
        OpKind::Contrast => PixelTransform::Linear(
            [[v, 0.0, 0.0], [0.0, v, 0.0], [0.0, 0.0, v]],
            [0.5 - 0.5 * v; 3],
        ),
        OpKind::Saturate => saturate_matrix(v),
        OpKind::Grayscale => saturate_matrix(1.0 - v.clamp(0.0, 1.0)),
        OpKind::Sepia => sepia_matrix(v.clamp(0.0, 1.0)),
        OpKind::HueRotate => hue_rotate_matrix(v),
        OpKind::Opacity => PixelTransform::Alpha(v.clamp(0.0, 1.0)),
    })
}

fn scale_matrix(v: f32) -> PixelTransform {
    PixelTransform::Linear([[v, 0.0, 0.0], [0.0, v, 0.0], [0.0, 0.0, v]], [0.0; 3])
}

/// Saturation matrix from the filter-effects specification: interpolates
/// between full luminance collapse (s=0) and identity (s=1), extrapolating
/// beyond for s>1.
fn saturate_matrix(s: f32) -> PixelTransform {
    PixelTransform::Linear(
        [
            [LUMA_R + (1.0 - LUMA_R) * s, LUMA_G - LUMA_G * s, LUMA_B - LUMA_B * s],
            [LUMA_R - LUMA_R * s, LUMA_G + (1.0 - LUMA_G) * s, LUMA_B - LUMA_B * s],
            [LUMA_R - LUMA_R * s, LUMA_G - LUMA_G * s, LUMA_B + (1.0 - LUMA_B) * s],
        ],
        [0.0; 3],
    )
}

/// Sepia matrix interpolated between identity (t=0) and the full sepia
/// tone mapping (t=1).
fn sepia_matrix(t: f32) -> PixelTransform {
    let lerp = |full: f32, ident: f32| ident + (full - ident) * t;
    PixelTransform::Linear(
        [
            [lerp(0.393, 1.0), lerp(0.769, 0.0), lerp(0.189, 0.0)],
            [lerp(0.349, 0.0), lerp(0.686, 1.0), lerp(0.168, 0.0)],
            [lerp(0.272, 0.0), lerp(0.534, 0.0), lerp(0.131, 1.0)],
        ],
        [0.0; 3],
    )
}

/// Hue rotation color matrix for an angle in degrees.
fn hue_rotate_matrix(degrees: f32) -> PixelTransform {
    let rad = degrees.to_radians();
    let cos = rad.cos();
    let sin = rad.sin();
    PixelTransform::Linear(
        [
            [
                LUMA_R + cos * (1.0 - LUMA_R) - sin * LUMA_R,
                LUMA_G - cos * LUMA_G - sin * LUMA_G,
                LUMA_B - cos * LUMA_B + sin * (1.0 - LUMA_B),
            ],
            [
                LUMA_R - cos * LUMA_R + sin * 0.143,
                LUMA_G + cos * (1.0 - LUMA_G) + sin * 0.140,
                LUMA_B - cos * LUMA_B - sin * 0.283,
            ],
            [
                LUMA_R - cos * LUMA_R - sin * (1.0 - LUMA_R),
                LUMA_G - cos * LUMA_G + sin * LUMA_G,
                LUMA_B + cos * (1.0 - LUMA_B) + sin * LUMA_B,
            ],
        ],
        [0.0; 3],
    )
}

/// Downscale a source image for interactive preview filtering.
///
/// Returns a copy whose longest edge is at most `PREVIEW_MAX_EDGE`; the
/// original is returned unchanged (cloned) when it already fits.
pub fn downscale_for_preview(img: &RgbaImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    let longest = w.max(h);
    if longest <= PREVIEW_MAX_EDGE {
        return img.clone();
    }
    let scale = PREVIEW_MAX_EDGE as f32 / longest as f32;
    let nw = ((w as f32 * scale).round() as u32).max(1);
    let nh = ((h as f32 * scale).round() as u32).max(1);
    image::imageops::resize(img, nw, nh, image::imageops::FilterType::Triangle)
}
