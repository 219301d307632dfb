use crate::app::FotoEditApp;
use crate::panels::{contain_rect, cover_uv, draw_caption, header_bar};

pub fn show(ctx: &egui::Context, app: &mut FotoEditApp) {
    let (back, _) = header_bar(ctx, "Guardar", None);

    let mut export_clicked = false;
    egui::TopBottomPanel::bottom("save_actions").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if app.ui.exporting {
                ui.spinner();
                ui.small("Exportando...");
            } else {
                let button = egui::Button::new("Descargar foto")
                    .min_size(egui::vec2(ui.available_width().min(280.0), 36.0));
                if ui.add(button).clicked() {
                    export_clicked = true;
                }
            }
            if let Some(status) = &app.ui.last_status {
                ui.add_space(4.0);
                ui.small(status);
            }
        });
        ui.add_space(8.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let avail = ui.available_rect_before_wrap();
        if let Some(texture) = app.filtered_texture.clone() {
            let tex_size = texture.size();
            let image_size = egui::vec2(tex_size[0] as f32, tex_size[1] as f32);
            let rect = contain_rect(avail, image_size);
            ui.painter().image(
                texture.id(),
                rect,
                cover_uv(rect, image_size),
                egui::Color32::WHITE,
            );
            draw_caption(ui, rect, &app.session.text);
        }
    });

    if back {
        app.go_back();
    } else if export_clicked {
        app.begin_export();
    }
}
