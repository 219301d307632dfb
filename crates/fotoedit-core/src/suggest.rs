//! Caption suggestion seam.
//!
//! The suggestion backend is an external collaborator: JPEG bytes in, a
//! short phrase out. It is called at most once per trigger, with no retry;
//! a failure surfaces straight to the caller and must leave the session's
//! text untouched.

use crate::error::Result;

/// Fixed instruction sent along with the image by concrete backends.
pub const SUGGESTION_PROMPT: &str =
    "Sugiere una frase corta y llamativa en español para esta foto. Responde solo con la frase.";

/// Opaque caption suggestion backend.
pub trait CaptionSuggester: Send + Sync {
    /// Produce a short caption for a JPEG-encoded image.
    fn suggest(&self, jpeg: &[u8]) -> Result<String>;
}

impl<F> CaptionSuggester for F
where
    F: Fn(&[u8]) -> Result<String> + Send + Sync,
{
    fn suggest(&self, jpeg: &[u8]) -> Result<String> {
        self(jpeg)
    }
}
