pub mod edit;
pub mod preview;
pub mod save;
pub mod upload;

use fotoedit_core::consts::CAPTION_WIDTH_DIVISOR;
use fotoedit_core::overlay::anchor_point;
use fotoedit_core::session::TextOverlay;

use crate::state::aspect_value;

/// Largest rect with the image's aspect that fits inside `avail`, centered.
pub(crate) fn contain_rect(avail: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    let scale = (avail.width() / image_size.x).min(avail.height() / image_size.y);
    let size = image_size * scale;
    egui::Rect::from_center_size(avail.center(), size)
}

/// Container for the edit screen: constrained to the selected aspect,
/// centered in the available rect.
pub(crate) fn aspect_rect(
    avail: egui::Rect,
    image_size: egui::Vec2,
    aspect_index: usize,
) -> egui::Rect {
    match aspect_value(aspect_index) {
        None => contain_rect(avail, image_size),
        Some(ratio) => contain_rect(avail, egui::vec2(ratio, 1.0)),
    }
}

/// UV rect that crops the texture to fill `container` edge to edge,
/// like CSS object-cover.
pub(crate) fn cover_uv(container: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    let container_ratio = container.width() / container.height();
    let image_ratio = image_size.x / image_size.y;
    if image_ratio > container_ratio {
        // Wider than the container: crop left/right.
        let visible = container_ratio / image_ratio;
        let margin = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(margin, 0.0), egui::pos2(1.0 - margin, 1.0))
    } else {
        let visible = image_ratio / container_ratio;
        let margin = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, margin), egui::pos2(1.0, 1.0 - margin))
    }
}

/// Paint the caption over the displayed image the way the export draws it:
/// uppercase, centered on the stored percentage point, white over a dark
/// offset shadow. Returns the caption's screen rect for hit testing.
pub(crate) fn draw_caption(
    ui: &egui::Ui,
    container: egui::Rect,
    overlay: &TextOverlay,
) -> Option<egui::Rect> {
    if overlay.is_empty() {
        return None;
    }

    // The export sizes the font as native width / 15 with a minimum floor.
    // The preview uses the same ratio of the container width, skipping the
    // floor, so the on-screen proportion matches the exported file.
    let font_px = container.width() / CAPTION_WIDTH_DIVISOR;
    let (ax, ay) = anchor_point(overlay, container.width(), container.height());
    let anchor = container.min + egui::vec2(ax, ay);
    let text = overlay.content.to_uppercase();
    let font = egui::FontId::proportional(font_px);

    // Offset shadow. The export blurs it as well; the preview keeps it hard.
    ui.painter().text(
        anchor + egui::vec2(0.0, font_px / 5.0),
        egui::Align2::CENTER_CENTER,
        &text,
        font.clone(),
        egui::Color32::from_black_alpha(204),
    );
    let rect = ui.painter().text(
        anchor,
        egui::Align2::CENTER_CENTER,
        &text,
        font,
        egui::Color32::WHITE,
    );
    Some(rect)
}

/// Top bar with a back control and an optional right-aligned action.
/// Returns (back_clicked, action_clicked).
pub(crate) fn header_bar(
    ctx: &egui::Context,
    title: &str,
    action: Option<&str>,
) -> (bool, bool) {
    let mut back = false;
    let mut act = false;
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("←").clicked() {
                back = true;
            }
            ui.strong(title);
            if let Some(label) = action {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(label).clicked() {
                        act = true;
                    }
                });
            }
        });
    });
    (back, act)
}
