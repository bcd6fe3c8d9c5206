use super::MultiSliderWidget;
use crate::settings::DemoSettings;
use crate::slider::MultiSlider;
use eframe::egui;

/// Window showing the configured sliders side by side.
pub struct DemoApp {
    sliders: Vec<MultiSlider>,
}

impl DemoApp {
    pub fn new(settings: &DemoSettings) -> Self {
        let mut sliders = settings.build_sliders();
        for (slot, slider) in sliders.iter_mut().enumerate() {
            trace_signals(slot, slider);
        }
        tracing::info!(count = sliders.len(), "demo sliders created");
        Self { sliders }
    }

    pub fn sliders(&self) -> &[MultiSlider] {
        &self.sliders
    }

    pub fn sliders_mut(&mut self) -> &mut [MultiSlider] {
        &mut self.sliders
    }
}

fn trace_signals(slot: usize, slider: &mut MultiSlider) {
    slider
        .signals
        .value_changed
        .connect(move |&(handle, value)| tracing::info!(slot, handle, value, "value changed"));
    slider
        .signals
        .range_changed
        .connect(move |&(min, max)| tracing::info!(slot, min, max, "range changed"));
    slider
        .signals
        .pressed
        .connect(move |_| tracing::debug!(slot, "slider pressed"));
    slider
        .signals
        .released
        .connect(move |_| tracing::debug!(slot, "slider released"));
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.sliders.is_empty() {
                ui.label("No sliders configured");
                return;
            }
            let count = self.sliders.len();
            ui.columns(count, |columns| {
                for (column, slider) in columns.iter_mut().zip(self.sliders.iter_mut()) {
                    column.add(MultiSliderWidget::new(slider));
                }
            });
        });
    }
}
