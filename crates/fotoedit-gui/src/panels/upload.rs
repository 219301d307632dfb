use crate::app::FotoEditApp;

pub fn show(ctx: &egui::Context, app: &mut FotoEditApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.heading("FotoEdit");
            ui.label("Edita tus fotos con filtros y texto");
            ui.add_space(16.0);

            if app.ui.loading {
                ui.spinner();
                ui.small("Cargando imagen...");
                return;
            }

            let button = egui::Button::new("Subir una foto").min_size(egui::vec2(200.0, 36.0));
            if ui.add(button).clicked() {
                let picked = rfd::FileDialog::new()
                    .add_filter("Imágenes", &["jpg", "jpeg", "png", "webp", "bmp"])
                    .pick_file();
                if let Some(path) = picked {
                    app.begin_load(path);
                }
            }
        });
    });
}
