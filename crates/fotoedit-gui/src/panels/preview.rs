use fotoedit_core::screen::Screen;

use crate::app::FotoEditApp;
use crate::panels::contain_rect;

pub fn show(ctx: &egui::Context, app: &mut FotoEditApp) {
    let mut continue_clicked = false;
    let mut discard_clicked = false;

    egui::TopBottomPanel::bottom("preview_actions").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let half = (ui.available_width() - 8.0) / 2.0;
            if ui
                .add(egui::Button::new("Elegir otra").min_size(egui::vec2(half, 32.0)))
                .clicked()
            {
                discard_clicked = true;
            }
            if ui
                .add(egui::Button::new("Continuar").min_size(egui::vec2(half, 32.0)))
                .clicked()
            {
                continue_clicked = true;
            }
        });
        ui.add_space(8.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let avail = ui.available_rect_before_wrap();
        if let Some(texture) = &app.source_texture {
            let size = texture.size();
            let rect = contain_rect(avail, egui::vec2(size[0] as f32, size[1] as f32));
            ui.painter().image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
    });

    if discard_clicked {
        app.discard();
    } else if continue_clicked {
        app.screen = Screen::Edit;
        app.request_preview();
    }
}
