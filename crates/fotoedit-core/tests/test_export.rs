use std::io::Cursor;
use std::sync::Arc;

use fotoedit_core::caption::{caption_font_px, layout_caption};
use fotoedit_core::catalog::FilterCatalog;
use fotoedit_core::error::EditError;
use fotoedit_core::export::{export_file_name, export_jpeg};
use fotoedit_core::session::{EditSession, SessionPatch, TextOverlay};
use image::{ImageFormat, Rgba, RgbaImage};

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(w, h, |x, y| {
        Rgba([(x * 7 % 256) as u8, (y * 5 % 256) as u8, 80, 255])
    });
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn session_with_image(w: u32, h: u32) -> EditSession {
    let mut session = EditSession::default();
    session.attach_image(Arc::new(png_bytes(w, h)));
    session
}

// ---------------------------------------------------------------------------
// Caption layout
// ---------------------------------------------------------------------------

#[test]
fn test_caption_font_scales_with_width() {
    assert_eq!(caption_font_px(3000), 200.0);
    assert_eq!(caption_font_px(1500), 100.0);
}

#[test]
fn test_caption_font_has_minimum() {
    // 300/15 = 20 would be unreadable; the floor wins.
    assert_eq!(caption_font_px(300), 40.0);
    assert_eq!(caption_font_px(0), 40.0);
}

#[test]
fn test_layout_uppercases_content() {
    let overlay = TextOverlay {
        content: "buenas noches".to_string(),
        x: 50.0,
        y: 50.0,
    };
    let layout = layout_caption(&overlay, 1500, 1000).unwrap();
    assert_eq!(layout.text, "BUENAS NOCHES");
}

#[test]
fn test_layout_shadow_derives_from_font_size() {
    let overlay = TextOverlay {
        content: "hola".to_string(),
        x: 50.0,
        y: 50.0,
    };
    let layout = layout_caption(&overlay, 1500, 1000).unwrap();
    assert_eq!(layout.font_px, 100.0);
    assert_eq!(layout.shadow.blur_radius, 50.0);
    assert_eq!(layout.shadow.offset_y, 20.0);
    assert_eq!(layout.shadow.alpha, 0.8);
}

#[test]
fn test_layout_anchor_uses_native_surface() {
    let overlay = TextOverlay {
        content: "hola".to_string(),
        x: 25.0,
        y: 75.0,
    };
    let layout = layout_caption(&overlay, 4000, 2000).unwrap();
    assert_eq!(layout.anchor, (1000.0, 1500.0));
}

#[test]
fn test_empty_content_has_no_layout() {
    let layout = layout_caption(&TextOverlay::default(), 1500, 1000);
    assert!(layout.is_none());
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn test_export_produces_jpeg_at_native_size() {
    let catalog = FilterCatalog::builtin();
    let mut session = session_with_image(320, 240);
    session.patch(SessionPatch::preset("golden"));

    let exported = export_jpeg(&session, catalog).unwrap();
    assert_eq!((exported.width, exported.height), (320, 240));
    // JPEG SOI marker.
    assert_eq!(&exported.bytes[..2], &[0xFF, 0xD8]);

    let decoded = image::load_from_memory(&exported.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (320, 240));
}

#[test]
fn test_export_file_name_pattern() {
    assert_eq!(export_file_name(1700000000123), "foto-edit-1700000000123.jpg");

    let exported = export_jpeg(&session_with_image(32, 32), FilterCatalog::builtin()).unwrap();
    assert!(exported.file_name.starts_with("foto-edit-"));
    assert!(exported.file_name.ends_with(".jpg"));
    let stamp = &exported.file_name["foto-edit-".len()..exported.file_name.len() - 4];
    assert!(stamp.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_export_without_image_fails() {
    let session = EditSession::default();
    let err = export_jpeg(&session, FilterCatalog::builtin()).unwrap_err();
    assert!(matches!(err, EditError::NoImage));
}

#[test]
fn test_export_undecodable_bytes_fail_cleanly() {
    let mut session = EditSession::default();
    session.attach_image(Arc::new(vec![0xDE, 0xAD, 0xBE, 0xEF]));
    let before = session.clone();
    let err = export_jpeg(&session, FilterCatalog::builtin()).unwrap_err();
    assert!(matches!(err, EditError::ImageError(_)));
    // Session untouched by the failed export.
    assert_eq!(session.preset_id, before.preset_id);
    assert_eq!(session.text, before.text);
}

#[test]
fn test_export_flattens_opacity_over_black() {
    let catalog = FilterCatalog::builtin();

    fn gray_session() -> EditSession {
        let img = RgbaImage::from_pixel(32, 32, Rgba([200, 200, 200, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        let mut session = EditSession::default();
        session.attach_image(Arc::new(bytes));
        session
    }

    let plain = export_jpeg(&gray_session(), catalog).unwrap();

    // faded at 50% resolves opacity(0.45): the export must composite the
    // dimmed image over black, not strip the alpha channel.
    let mut faded = gray_session();
    faded.patch(SessionPatch::preset("faded"));
    faded.patch(SessionPatch::intensity(50.0));
    let exported = export_jpeg(&faded, catalog).unwrap();

    let plain_px = image::load_from_memory(&plain.bytes)
        .unwrap()
        .to_rgb8()
        .get_pixel(16, 16)
        .0;
    let faded_px = image::load_from_memory(&exported.bytes)
        .unwrap()
        .to_rgb8()
        .get_pixel(16, 16)
        .0;
    assert!(
        faded_px[0] < 120,
        "expected alpha-darkened pixel, got {faded_px:?}"
    );
    assert!(faded_px[0] < plain_px[0]);
}

#[test]
fn test_export_filtered_differs_from_original_pixels() {
    let catalog = FilterCatalog::builtin();
    let plain = export_jpeg(&session_with_image(64, 64), catalog).unwrap();

    let mut noir = session_with_image(64, 64);
    noir.patch(SessionPatch::preset("noir"));
    noir.patch(SessionPatch::intensity(100.0));
    let filtered = export_jpeg(&noir, catalog).unwrap();

    assert_ne!(plain.bytes, filtered.bytes);

    // noir at full intensity is grayscale: decoded channels should agree.
    let decoded = image::load_from_memory(&filtered.bytes).unwrap().to_rgb8();
    let px = decoded.get_pixel(32, 32);
    let spread = px.0.iter().max().unwrap() - px.0.iter().min().unwrap();
    assert!(spread <= 8, "expected near-gray pixel, got {:?}", px.0);
}
