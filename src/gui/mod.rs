mod demo;
mod widget;

pub use demo::DemoApp;
pub use widget::{cursor_icon, EguiPainter, MultiSliderWidget};
