use multi_slider::gui::DemoApp;
use multi_slider::logging;
use multi_slider::settings::DemoSettings;

use eframe::egui;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "settings.json".to_string());
    let settings = DemoSettings::load(&settings_path)?;
    logging::init(
        settings.debug_logging,
        settings.log_file.as_ref().map(PathBuf::from),
    );
    tracing::debug!(path = %settings_path, "settings loaded");

    let (width, height) = settings.window_size.unwrap_or((360.0, 240.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([120.0, 80.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MultiSlider",
        native_options,
        Box::new(move |_cc| Box::new(DemoApp::new(&settings))),
    )
    .map_err(|e| anyhow::anyhow!("demo window failed: {e}"))
}
