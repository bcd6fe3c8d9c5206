//! The boundary between a slider and whatever toolkit hosts it.
//!
//! Coordinates are integer pixels local to the widget, origin top-left.

use crate::color::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelSize {
    pub width: i32,
    pub height: i32,
}

impl PixelSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(size: PixelSize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Grow or shrink the far edges, keeping the origin.
    pub const fn adjusted(self, dw: i32, dh: i32) -> Self {
        Self::new(
            self.x,
            self.y,
            self.width.saturating_add(dw),
            self.height.saturating_add(dh),
        )
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: PixelPoint) -> bool {
        let (px, py) = (p.x as i64, p.y as i64);
        let (x, y) = (self.x as i64, self.y as i64);
        px >= x && px < x + self.width as i64 && py >= y && py < y + self.height as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerButtons {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl PointerButtons {
    pub const NONE: PointerButtons = PointerButtons {
        primary: false,
        secondary: false,
        middle: false,
    };

    pub const PRIMARY: PointerButtons = PointerButtons {
        primary: true,
        secondary: false,
        middle: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Arrow,
    ResizeHorizontal,
    ResizeVertical,
}

/// 2D drawing primitives the host provides during a paint.
pub trait SliderPainter {
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba);
    fn set_pen(&mut self, color: Rgba);
    /// Outline `rect` with the current pen. The outline covers
    /// `width + 1` by `height + 1` pixels.
    fn draw_rect(&mut self, rect: PixelRect);
}

/// Event hooks a host dispatcher calls on a widget.
pub trait PointerHandler {
    fn on_paint(&self, painter: &mut dyn SliderPainter, size: PixelSize);
    fn on_pointer_down(&mut self, pos: PixelPoint, buttons: PointerButtons, size: PixelSize);
    fn on_pointer_move(&mut self, pos: PixelPoint, buttons: PointerButtons, size: PixelSize);
    fn on_pointer_up(&mut self, pos: PixelPoint, buttons: PointerButtons, size: PixelSize);
}
