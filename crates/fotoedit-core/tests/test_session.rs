use std::sync::Arc;

use fotoedit_core::catalog::IDENTITY_PRESET_ID;
use fotoedit_core::error::EditError;
use fotoedit_core::screen::Screen;
use fotoedit_core::session::{EditSession, SessionPatch, TextOverlay};
use fotoedit_core::suggest::CaptionSuggester;

fn mutated_session() -> EditSession {
    let mut session = EditSession::default();
    session.attach_image(Arc::new(vec![1, 2, 3]));
    session.patch(SessionPatch {
        preset_id: Some("golden".to_string()),
        intensity: Some(40.0),
        brightness: Some(150.0),
        contrast: Some(60.0),
        saturation: Some(110.0),
        text: Some(TextOverlay {
            content: "hola".to_string(),
            x: 20.0,
            y: 80.0,
        }),
    });
    session
}

// ---------------------------------------------------------------------------
// Defaults and reset
// ---------------------------------------------------------------------------

#[test]
fn test_default_session_state() {
    let session = EditSession::default();
    assert_eq!(session.preset_id, IDENTITY_PRESET_ID);
    assert_eq!(session.intensity, 75.0);
    assert_eq!(session.adjustments.brightness, 100.0);
    assert_eq!(session.adjustments.contrast, 100.0);
    assert_eq!(session.adjustments.saturation, 100.0);
    assert_eq!(session.text, TextOverlay::default());
    assert_eq!(session.text.x, 50.0);
    assert_eq!(session.text.y, 50.0);
    assert!(!session.has_image());
}

#[test]
fn test_reset_restores_literal_defaults() {
    let mut session = mutated_session();
    session.reset();
    assert_eq!(session.preset_id, IDENTITY_PRESET_ID);
    assert_eq!(session.intensity, 75.0);
    assert_eq!(session.adjustments, Default::default());
    assert_eq!(session.text, TextOverlay::default());
    assert!(!session.has_image());

    // Resetting twice is still the same literal state.
    session.reset();
    assert_eq!(session.preset_id, IDENTITY_PRESET_ID);
}

// ---------------------------------------------------------------------------
// Patch merge
// ---------------------------------------------------------------------------

#[test]
fn test_patch_replaces_only_explicit_fields() {
    let mut session = mutated_session();
    session.patch(SessionPatch::intensity(90.0));
    assert_eq!(session.intensity, 90.0);
    // Everything else untouched.
    assert_eq!(session.preset_id, "golden");
    assert_eq!(session.adjustments.brightness, 150.0);
    assert_eq!(session.text.content, "hola");
    assert!(session.has_image());
}

#[test]
fn test_empty_patch_is_noop() {
    let mut session = mutated_session();
    let before = (
        session.preset_id.clone(),
        session.intensity,
        session.adjustments,
        session.text.clone(),
    );
    session.patch(SessionPatch::default());
    assert_eq!(session.preset_id, before.0);
    assert_eq!(session.intensity, before.1);
    assert_eq!(session.adjustments, before.2);
    assert_eq!(session.text, before.3);
}

#[test]
fn test_text_patch_does_not_touch_sliders() {
    let mut session = mutated_session();
    session.patch(SessionPatch::text(TextOverlay {
        content: "hola".to_string(),
        x: 30.0,
        y: 70.0,
    }));
    assert_eq!(session.text.x, 30.0);
    assert_eq!(session.intensity, 40.0);
    assert_eq!(session.adjustments.contrast, 60.0);
}

#[test]
fn test_session_roundtrips_through_serde_without_image() {
    let session = mutated_session();
    let json = serde_json::to_string(&session).unwrap();
    let back: EditSession = serde_json::from_str(&json).unwrap();
    assert_eq!(back.preset_id, session.preset_id);
    assert_eq!(back.text, session.text);
    // Image bytes are session-local and never serialized.
    assert!(!back.has_image());
}

// ---------------------------------------------------------------------------
// Screen state machine
// ---------------------------------------------------------------------------

#[test]
fn test_screen_back_edges() {
    assert_eq!(Screen::Preview.back(), Screen::Upload);
    assert_eq!(Screen::Edit.back(), Screen::Preview);
    assert_eq!(Screen::Save.back(), Screen::Edit);
    assert_eq!(Screen::Upload.back(), Screen::Upload);
}

#[test]
fn test_screen_forward_edges() {
    assert_eq!(Screen::Preview.forward(), Some(Screen::Edit));
    assert_eq!(Screen::Edit.forward(), Some(Screen::Save));
    assert_eq!(Screen::Upload.forward(), None);
    assert_eq!(Screen::Save.forward(), None);
}

#[test]
fn test_only_preview_back_discards_image() {
    assert!(Screen::Preview.back_discards_image());
    assert!(!Screen::Edit.back_discards_image());
    assert!(!Screen::Save.back_discards_image());
    assert!(!Screen::Upload.back_discards_image());
}

// ---------------------------------------------------------------------------
// Suggestion seam
// ---------------------------------------------------------------------------

#[test]
fn test_suggestion_success_applies_via_patch() {
    let suggester = |_jpeg: &[u8]| -> fotoedit_core::error::Result<String> {
        Ok("buenas noches".to_string())
    };
    let mut session = mutated_session();
    let phrase = suggester.suggest(b"fake-jpeg").unwrap();
    let mut text = session.text.clone();
    text.content = phrase;
    session.patch(SessionPatch::text(text));
    assert_eq!(session.text.content, "buenas noches");
    // Position survives a content swap.
    assert_eq!((session.text.x, session.text.y), (20.0, 80.0));
}

#[test]
fn test_suggestion_failure_leaves_content_unchanged() {
    let suggester =
        |_jpeg: &[u8]| -> fotoedit_core::error::Result<String> {
            Err(EditError::Suggestion("connection refused".to_string()))
        };
    let mut session = mutated_session();
    let before = session.text.clone();
    match suggester.suggest(b"fake-jpeg") {
        Ok(phrase) => {
            let mut text = session.text.clone();
            text.content = phrase;
            session.patch(SessionPatch::text(text));
        }
        Err(err) => {
            assert!(matches!(err, EditError::Suggestion(_)));
        }
    }
    assert_eq!(session.text, before);
}
