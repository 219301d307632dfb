use fotoedit_core::catalog::FilterCatalog;
use fotoedit_core::consts::{ADJUSTMENT_MAX, INTENSITY_MAX};
use fotoedit_core::overlay::{drag_enabled, drag_position, DragSession};
use fotoedit_core::screen::Screen;
use fotoedit_core::session::{SessionPatch, TextOverlay};

use crate::app::FotoEditApp;
use crate::panels::{aspect_rect, cover_uv, draw_caption, header_bar};
use crate::state::{EditMode, ASPECT_NAMES};

pub fn show(ctx: &egui::Context, app: &mut FotoEditApp) {
    let (back, save) = header_bar(ctx, "Editar", Some("Guardar"));

    egui::TopBottomPanel::bottom("edit_tools")
        .min_height(140.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            mode_tabs(ui, app);
            ui.separator();
            match app.ui.edit_mode {
                EditMode::Filters => filters_section(ui, app),
                EditMode::Crop => crop_section(ui, app),
                EditMode::Adjust => adjust_section(ui, app),
                EditMode::Text => text_section(ui, app),
            }
            ui.add_space(6.0);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        image_area(ui, app);
    });

    if back {
        app.go_back();
    } else if save {
        app.screen = Screen::Save;
    }
}

fn mode_tabs(ui: &mut egui::Ui, app: &mut FotoEditApp) {
    ui.horizontal(|ui| {
        for mode in [
            EditMode::Filters,
            EditMode::Crop,
            EditMode::Adjust,
            EditMode::Text,
        ] {
            // Switching tools never clears the tool's state; text and
            // position survive leaving and re-entering text mode.
            if ui
                .selectable_label(app.ui.edit_mode == mode, mode.label())
                .clicked()
            {
                app.ui.edit_mode = mode;
            }
        }
    });
}

fn filters_section(ui: &mut egui::Ui, app: &mut FotoEditApp) {
    let catalog = FilterCatalog::builtin();
    let mut picked: Option<String> = None;

    egui::ScrollArea::horizontal()
        .id_salt("preset_strip")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for preset in catalog.presets() {
                    let selected = app.session.preset_id == preset.id;
                    if ui.selectable_label(selected, &preset.name).clicked() {
                        picked = Some(preset.id.clone());
                    }
                }
            });
        });

    if let Some(id) = picked {
        app.patch_session(SessionPatch::preset(id));
    }

    let preset = catalog.get_or_identity(&app.session.preset_id);
    if !preset.is_identity() {
        ui.add_space(4.0);
        let mut intensity = app.session.intensity;
        if ui
            .add(
                egui::Slider::new(&mut intensity, 0.0..=INTENSITY_MAX)
                    .text("Intensidad")
                    .fixed_decimals(0),
            )
            .changed()
        {
            app.patch_session(SessionPatch::intensity(intensity));
        }
    }
}

fn crop_section(ui: &mut egui::Ui, app: &mut FotoEditApp) {
    ui.horizontal(|ui| {
        for (i, name) in ASPECT_NAMES.iter().enumerate() {
            if ui
                .selectable_label(app.ui.aspect_index == i, *name)
                .clicked()
            {
                app.ui.aspect_index = i;
            }
        }
    });
    ui.small("El recorte solo cambia la vista previa.");
}

fn adjust_section(ui: &mut egui::Ui, app: &mut FotoEditApp) {
    let mut adjustments = app.session.adjustments.clone();
    let mut patch = SessionPatch::default();

    if ui
        .add(
            egui::Slider::new(&mut adjustments.brightness, 0.0..=ADJUSTMENT_MAX)
                .text("Brillo")
                .fixed_decimals(0),
        )
        .changed()
    {
        patch.brightness = Some(adjustments.brightness);
    }
    if ui
        .add(
            egui::Slider::new(&mut adjustments.contrast, 0.0..=ADJUSTMENT_MAX)
                .text("Contraste")
                .fixed_decimals(0),
        )
        .changed()
    {
        patch.contrast = Some(adjustments.contrast);
    }
    if ui
        .add(
            egui::Slider::new(&mut adjustments.saturation, 0.0..=ADJUSTMENT_MAX)
                .text("Saturación")
                .fixed_decimals(0),
        )
        .changed()
    {
        patch.saturation = Some(adjustments.saturation);
    }

    if patch.brightness.is_some() || patch.contrast.is_some() || patch.saturation.is_some() {
        app.patch_session(patch);
    }
}

fn text_section(ui: &mut egui::Ui, app: &mut FotoEditApp) {
    let mut content = app.session.text.content.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut content)
            .hint_text("Escribe una frase...")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        app.set_caption(TextOverlay {
            content,
            ..app.session.text.clone()
        });
    }

    if app.suggest_available {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let button = egui::Button::new("Sugerir frase");
            if ui.add_enabled(!app.ui.suggesting, button).clicked() {
                app.begin_suggest();
            }
            if app.ui.suggesting {
                ui.spinner();
            }
        });
    }

    if !app.session.text.is_empty() {
        ui.small("Arrastra el texto sobre la foto para colocarlo.");
    }
}

fn image_area(ui: &mut egui::Ui, app: &mut FotoEditApp) {
    let avail = ui.available_rect_before_wrap();
    let Some(texture) = app.filtered_texture.clone() else {
        return;
    };
    let tex_size = texture.size();
    let image_size = egui::vec2(tex_size[0] as f32, tex_size[1] as f32);

    let container = aspect_rect(avail, image_size, app.ui.aspect_index);
    ui.painter().image(
        texture.id(),
        container,
        cover_uv(container, image_size),
        egui::Color32::WHITE,
    );

    let caption_rect = draw_caption(ui, container, &app.session.text);

    let text_mode = app.ui.edit_mode == EditMode::Text;
    if !drag_enabled(text_mode, &app.session.text) {
        app.ui.drag = None;
        return;
    }
    let Some(caption_rect) = caption_rect else {
        return;
    };

    let response = ui.interact(
        caption_rect,
        ui.id().with("caption_drag"),
        egui::Sense::drag(),
    );
    if response.drag_started() {
        app.ui.drag = Some(DragSession::begin(&app.session.text));
    }
    if response.dragged() {
        if let Some(pointer) = response.interact_pointer_pos() {
            let (x, y) = drag_position(
                (pointer.x, pointer.y),
                (container.min.x, container.min.y),
                (container.width(), container.height()),
            );
            app.set_caption(TextOverlay {
                content: app.session.text.content.clone(),
                x,
                y,
            });
        }
    }
    if response.drag_stopped() {
        app.ui.drag = None;
    }
}
