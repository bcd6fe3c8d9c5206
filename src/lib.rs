pub mod color;
pub mod gui;
pub mod host;
pub mod logging;
pub mod settings;
pub mod signals;
pub mod slider;

pub use color::{ColorGenerator, ColorSource, Rgba};
pub use host::{
    CursorShape, PixelPoint, PixelRect, PixelSize, PointerButtons, PointerHandler, SliderPainter,
};
pub use signals::{ConnectionId, Signal, SliderSignals};
pub use slider::{Handle, MultiSlider, Orientation};
