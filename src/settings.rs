use crate::color::{ColorGenerator, ColorSource, Rgba};
use crate::slider::{MultiSlider, Orientation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleSettings {
    pub value: i32,
    /// Random color when absent.
    #[serde(default)]
    pub color: Option<Rgba>,
}

impl From<i32> for HandleSettings {
    fn from(value: i32) -> Self {
        Self { value, color: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSettings {
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_minimum")]
    pub minimum: i32,
    #[serde(default = "default_maximum")]
    pub maximum: i32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Hit-test tolerance around each handle in pixels.
    #[serde(default = "default_border")]
    pub border: i32,
    #[serde(default)]
    pub handles: Vec<HandleSettings>,
}

fn default_minimum() -> i32 {
    0
}

fn default_maximum() -> i32 {
    100
}

fn default_enabled() -> bool {
    true
}

fn default_border() -> i32 {
    2
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            minimum: default_minimum(),
            maximum: default_maximum(),
            enabled: default_enabled(),
            border: default_border(),
            handles: Vec::new(),
        }
    }
}

impl SliderSettings {
    /// Build a slider from these settings. Handle values outside the range
    /// are clamped into it.
    pub fn build(&self, colors: Box<dyn ColorSource>) -> MultiSlider {
        let mut slider = MultiSlider::with_color_source(self.orientation, colors);
        slider.set_range(self.minimum, self.maximum);
        slider.set_border(self.border);
        for handle in &self.handles {
            let value = handle.value.clamp(slider.minimum(), slider.maximum());
            slider.add_handle(value, handle.color);
        }
        slider.set_enabled(self.enabled);
        slider
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSettings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving a copy of the log output.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Initial window size. If absent, a default size is used.
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
    /// Seed for handle colors so repeated runs look the same.
    #[serde(default)]
    pub color_seed: Option<u64>,
    #[serde(default = "default_sliders")]
    pub sliders: Vec<SliderSettings>,
}

fn default_sliders() -> Vec<SliderSettings> {
    vec![
        SliderSettings {
            orientation: Orientation::Horizontal,
            enabled: false,
            handles: vec![40.into(), 60.into()],
            ..SliderSettings::default()
        },
        SliderSettings {
            orientation: Orientation::Vertical,
            handles: vec![40.into(), 60.into(), 80.into()],
            ..SliderSettings::default()
        },
    ]
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            window_size: None,
            color_seed: None,
            sliders: default_sliders(),
        }
    }
}

impl DemoSettings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Color source for the slider at position `slot`. Seeded sources differ
    /// per slot so two sliders do not share a palette.
    pub fn color_source(&self, slot: usize) -> Box<dyn ColorSource> {
        match self.color_seed {
            Some(seed) => Box::new(ColorGenerator::seeded(seed.wrapping_add(slot as u64))),
            None => Box::new(ColorGenerator::from_entropy()),
        }
    }

    pub fn build_sliders(&self) -> Vec<MultiSlider> {
        self.sliders
            .iter()
            .enumerate()
            .map(|(slot, s)| s.build(self.color_source(slot)))
            .collect()
    }
}
