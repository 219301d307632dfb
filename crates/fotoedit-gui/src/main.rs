mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([400.0, 700.0])
            .with_title("FotoEdit"),
        ..Default::default()
    };

    eframe::run_native(
        "FotoEdit",
        options,
        Box::new(|cc| Ok(Box::new(app::FotoEditApp::new(&cc.egui_ctx)))),
    )
}
