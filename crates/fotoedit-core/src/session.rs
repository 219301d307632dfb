//! The single in-memory edit session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::IDENTITY_PRESET_ID;
use crate::compose::Adjustments;
use crate::consts::DEFAULT_INTENSITY;

/// The caption overlay. `x`/`y` are percentages of the image's displayed
/// bounding box; the caption is centered on that point. Empty content means
/// no overlay is rendered and dragging is disabled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    pub content: String,
    pub x: f32,
    pub y: f32,
}

impl Default for TextOverlay {
    fn default() -> Self {
        Self {
            content: String::new(),
            x: 50.0,
            y: 50.0,
        }
    }
}

impl TextOverlay {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Mutable aggregate owned by the editing flow for its lifetime.
///
/// Mutated only through [`EditSession::patch`] (explicit-keys merge) and
/// [`EditSession::reset`]; the source image bytes are attached separately
/// since they come from the acquisition collaborator, not from a slider.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditSession {
    pub preset_id: String,
    pub intensity: f32,
    pub adjustments: Adjustments,
    pub text: TextOverlay,
    /// Raw source file bytes. Shared with the worker thread during
    /// preview/export without copying.
    #[serde(skip)]
    pub image: Option<Arc<Vec<u8>>>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self {
            preset_id: IDENTITY_PRESET_ID.to_string(),
            intensity: DEFAULT_INTENSITY,
            adjustments: Adjustments::default(),
            text: TextOverlay::default(),
            image: None,
        }
    }
}

impl EditSession {
    /// Restore the literal default state, discarding the image.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply a partial update. Only the fields a patch explicitly carries
    /// are replaced; everything else keeps its current value.
    pub fn patch(&mut self, patch: SessionPatch) {
        if let Some(preset_id) = patch.preset_id {
            self.preset_id = preset_id;
        }
        if let Some(intensity) = patch.intensity {
            self.intensity = intensity;
        }
        if let Some(brightness) = patch.brightness {
            self.adjustments.brightness = brightness;
        }
        if let Some(contrast) = patch.contrast {
            self.adjustments.contrast = contrast;
        }
        if let Some(saturation) = patch.saturation {
            self.adjustments.saturation = saturation;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
    }

    pub fn attach_image(&mut self, bytes: Arc<Vec<u8>>) {
        self.image = Some(bytes);
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// Partial session update; `None` fields are left untouched by
/// [`EditSession::patch`].
#[derive(Clone, Debug, Default)]
pub struct SessionPatch {
    pub preset_id: Option<String>,
    pub intensity: Option<f32>,
    pub brightness: Option<f32>,
    pub contrast: Option<f32>,
    pub saturation: Option<f32>,
    pub text: Option<TextOverlay>,
}

impl SessionPatch {
    pub fn preset(id: impl Into<String>) -> Self {
        Self {
            preset_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn intensity(value: f32) -> Self {
        Self {
            intensity: Some(value),
            ..Self::default()
        }
    }

    pub fn text(overlay: TextOverlay) -> Self {
        Self {
            text: Some(overlay),
            ..Self::default()
        }
    }
}
