/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Rec. 709 luminance coefficient for the red channel, as used by the
/// saturate/grayscale/hue-rotate color matrices.
pub const LUMA_R: f32 = 0.2126;

/// Rec. 709 luminance coefficient for the green channel.
pub const LUMA_G: f32 = 0.7152;

/// Rec. 709 luminance coefficient for the blue channel.
pub const LUMA_B: f32 = 0.0722;

/// Default filter intensity (percent of the preset's baseline strength).
pub const DEFAULT_INTENSITY: f32 = 75.0;

/// Intensity slider range upper bound.
pub const INTENSITY_MAX: f32 = 100.0;

/// Default value for each global adjustment slider (no-op multiplier).
pub const DEFAULT_ADJUSTMENT: f32 = 100.0;

/// Adjustment slider range upper bound.
pub const ADJUSTMENT_MAX: f32 = 200.0;

/// Caption position clamp: the overlay center never gets closer than this
/// many percent to any image edge while dragging.
pub const DRAG_MIN_PERCENT: f32 = 5.0;

/// Upper caption position clamp, mirroring `DRAG_MIN_PERCENT`.
pub const DRAG_MAX_PERCENT: f32 = 95.0;

/// Minimum exported caption size in surface pixels.
pub const CAPTION_MIN_PX: f32 = 40.0;

/// Exported caption size is `surface_width / CAPTION_WIDTH_DIVISOR`,
/// floored at `CAPTION_MIN_PX`.
pub const CAPTION_WIDTH_DIVISOR: f32 = 15.0;

/// Opacity of the caption drop shadow.
pub const CAPTION_SHADOW_ALPHA: f32 = 0.8;

/// JPEG quality for exported images (0-100).
pub const EXPORT_JPEG_QUALITY: u8 = 90;

/// Longest edge of the image copy used for live preview filtering.
pub const PREVIEW_MAX_EDGE: u32 = 1280;
