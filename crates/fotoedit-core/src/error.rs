use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unknown filter preset: {0}")]
    UnknownPreset(String),

    #[error("No usable bold sans-serif font found on this system")]
    FontUnavailable,

    #[error("No source image loaded")]
    NoImage,

    #[error("Caption suggestion failed: {0}")]
    Suggestion(String),
}

pub type Result<T> = std::result::Result<T, EditError>;
