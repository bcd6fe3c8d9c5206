use crate::color::{ColorGenerator, ColorSource, Rgba};
use crate::host::{
    CursorShape, PixelPoint, PixelRect, PixelSize, PointerButtons, PointerHandler, SliderPainter,
};
use crate::signals::SliderSignals;
use serde::{Deserialize, Serialize};

const DEFAULT_MINIMUM: i32 = 0;
const DEFAULT_MAXIMUM: i32 = 100;
const DEFAULT_BORDER: i32 = 2;
/// Largest hit-test tolerance; keeps `border * 2` representable.
const MAX_BORDER: i32 = i32::MAX / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    fn resize_cursor(self) -> CursorShape {
        match self {
            Orientation::Horizontal => CursorShape::ResizeHorizontal,
            Orientation::Vertical => CursorShape::ResizeVertical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle {
    value: i32,
    pressed: bool,
    color: Rgba,
}

impl Handle {
    fn new(value: i32, color: Rgba) -> Self {
        Self {
            value,
            pressed: false,
            color,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn color(&self) -> Rgba {
        self.color
    }
}

/// A slider carrying several independently draggable handles over one
/// shared `[minimum, maximum]` range.
///
/// Each handle is painted as a bar growing from the origin edge (left for
/// horizontal sliders, bottom for vertical ones). Bars are painted tallest
/// first so that shorter bars stay visible and grabbable on top.
pub struct MultiSlider {
    orientation: Orientation,
    minimum: i32,
    maximum: i32,
    border: i32,
    enabled: bool,
    handles: Vec<Handle>,
    cursor: CursorShape,
    repaint_requested: bool,
    colors: Box<dyn ColorSource>,
    pub signals: SliderSignals,
}

impl Default for MultiSlider {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl std::fmt::Debug for MultiSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiSlider")
            .field("orientation", &self.orientation)
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .field("border", &self.border)
            .field("enabled", &self.enabled)
            .field("handles", &self.handles)
            .finish_non_exhaustive()
    }
}

impl MultiSlider {
    pub fn new(orientation: Orientation) -> Self {
        Self::with_color_source(orientation, Box::new(ColorGenerator::from_entropy()))
    }

    /// Like [`MultiSlider::new`] but handles added without a color draw
    /// theirs from `colors`.
    pub fn with_color_source(orientation: Orientation, colors: Box<dyn ColorSource>) -> Self {
        Self {
            orientation,
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            border: DEFAULT_BORDER,
            enabled: true,
            handles: Vec::new(),
            cursor: CursorShape::Arrow,
            repaint_requested: false,
            colors,
            signals: SliderSignals::default(),
        }
    }

    pub fn minimum_size_hint(&self) -> PixelSize {
        match self.orientation {
            Orientation::Horizontal => PixelSize::new(50, 20),
            Orientation::Vertical => PixelSize::new(20, 50),
        }
    }

    /// Value of the handle at `index`, or [`MultiSlider::minimum`] when there
    /// is no such handle.
    pub fn value(&self, index: usize) -> i32 {
        self.handles
            .get(index)
            .map(|h| h.value)
            .unwrap_or(self.minimum)
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn border(&self) -> i32 {
        self.border
    }

    pub fn set_border(&mut self, border: i32) {
        self.border = border.clamp(0, MAX_BORDER);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.request_repaint();
        }
    }

    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    pub fn handle(&self, index: usize) -> Option<&Handle> {
        self.handles.get(index)
    }

    /// Handles in insertion order.
    pub fn handles(&self) -> impl Iterator<Item = &Handle> {
        self.handles.iter()
    }

    pub fn pressed_handle(&self) -> Option<usize> {
        self.handles.iter().position(|h| h.pressed)
    }

    /// Cursor the host should show over the widget.
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Returns whether a redraw was requested since the last call and clears
    /// the request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }

    pub fn add_handle(&mut self, value: i32, color: Option<Rgba>) {
        let color = color.unwrap_or_else(|| self.colors.next_color());
        self.handles.push(Handle::new(value, color));
        tracing::debug!(index = self.handles.len() - 1, value, "handle added");
        self.request_repaint();
    }

    /// Insert a handle before `index`. An index past the end appends.
    pub fn insert_handle(&mut self, index: usize, value: i32, color: Option<Rgba>) {
        let len = self.handles.len();
        let at = if index > len {
            tracing::warn!(index, len, "insert index out of bounds; appending");
            len
        } else {
            index
        };
        let color = color.unwrap_or_else(|| self.colors.next_color());
        self.handles.insert(at, Handle::new(value, color));
        tracing::debug!(index = at, value, "handle inserted");
        self.request_repaint();
    }

    pub fn remove_handle(&mut self, index: usize) {
        if index < self.handles.len() {
            self.handles.remove(index);
            tracing::debug!(index, "handle removed");
            self.request_repaint();
        }
    }

    pub fn set_handle_color(&mut self, index: usize, color: Rgba) {
        if let Some(handle) = self.handles.get_mut(index) {
            if handle.color != color {
                handle.color = color;
                self.request_repaint();
            }
        }
    }

    /// Clamp `value` into the range and assign it to the handle at `index`.
    /// Emits `value_changed` only when the stored value actually changes.
    pub fn set_value(&mut self, index: usize, value: i32) {
        let value = value.clamp(self.minimum, self.maximum);
        let Some(handle) = self.handles.get_mut(index) else {
            return;
        };
        if handle.value != value {
            handle.value = value;
            self.signals.value_changed.emit(&(index, value));
            self.request_repaint();
        }
    }

    /// Set the lower bound. A bound above the current maximum flips the
    /// range: the old maximum becomes the minimum and `min` the maximum.
    pub fn set_minimum(&mut self, min: i32) {
        if min <= self.maximum {
            self.minimum = min;
        } else {
            tracing::debug!(min, maximum = self.maximum, "minimum above maximum; flipping range");
            self.minimum = self.maximum;
            self.maximum = min;
        }
        self.range_updated();
    }

    /// Set the upper bound. A bound below the current minimum flips the
    /// range: the old minimum becomes the maximum and `max` the minimum.
    pub fn set_maximum(&mut self, max: i32) {
        if max >= self.minimum {
            self.maximum = max;
        } else {
            tracing::debug!(max, minimum = self.minimum, "maximum below minimum; flipping range");
            self.maximum = self.minimum;
            self.minimum = max;
        }
        self.range_updated();
    }

    /// `set_minimum(min)` followed by `set_maximum(max)`. Each step resolves
    /// inversion against the bounds as they are at that moment, so an
    /// inverted pair emits two `range_changed` notifications.
    pub fn set_range(&mut self, min: i32, max: i32) {
        self.set_minimum(min);
        self.set_maximum(max);
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        self.orientation = orientation;
        self.request_repaint();
    }

    fn range_updated(&mut self) {
        self.request_repaint();
        for index in 0..self.handles.len() {
            let value = self.handles[index].value;
            if value < self.minimum || value > self.maximum {
                self.set_value(index, value);
            }
        }
        self.signals
            .range_changed
            .emit(&(self.minimum, self.maximum));
    }

    /// Handle indices ordered by descending value. Ties keep insertion order.
    fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.handles.len()).collect();
        indices.sort_by(|&a, &b| self.handles[b].value.cmp(&self.handles[a].value));
        indices
    }

    fn span(&self) -> i64 {
        (self.maximum as i64 - self.minimum as i64).abs()
    }

    /// Pixel length covered by `value` along an axis of `extent` pixels.
    fn value_to_pixels(&self, value: i32, extent: i32) -> i64 {
        let span = self.span();
        if span == 0 {
            return 0;
        }
        value as i64 * extent as i64 / span
    }

    /// Inverse of [`MultiSlider::value_to_pixels`].
    fn pixels_to_value(&self, pixels: i64, extent: i32) -> i32 {
        if extent == 0 {
            return self.minimum;
        }
        saturate(pixels * self.span() / extent as i64)
    }

    /// Band around a handle's edge in which a press grabs it.
    pub fn handle_band(&self, index: usize, size: PixelSize) -> Option<PixelRect> {
        let handle = self.handles.get(index)?;
        let border = self.border as i64;
        let thickness = saturate(border * 2);
        Some(match self.orientation {
            Orientation::Horizontal => {
                let v = self.value_to_pixels(handle.value, size.width);
                PixelRect::new(saturate(v - border), 0, thickness, size.height)
            }
            Orientation::Vertical => {
                let v = size.height as i64 - self.value_to_pixels(handle.value, size.height);
                PixelRect::new(0, saturate(v - border), size.width, thickness)
            }
        })
    }

    /// First handle, in descending value order, whose band contains `pos`.
    pub fn hit_test(&self, pos: PixelPoint, size: PixelSize) -> Option<usize> {
        self.sorted_indices().into_iter().find(|&index| {
            self.handle_band(index, size)
                .is_some_and(|band| band.contains(pos))
        })
    }

    /// Value a pointer at `pos` maps to along the slider axis, before
    /// clamping.
    pub fn value_at(&self, pos: PixelPoint, size: PixelSize) -> i32 {
        match self.orientation {
            Orientation::Horizontal => self.pixels_to_value(pos.x as i64, size.width),
            Orientation::Vertical => {
                self.pixels_to_value(size.height as i64 - pos.y as i64, size.height)
            }
        }
    }

    fn bar_rect(&self, value: i32, size: PixelSize) -> PixelRect {
        match self.orientation {
            Orientation::Horizontal => {
                let v = self.value_to_pixels(value, size.width);
                PixelRect::new(0, 0, saturate(v), size.height)
            }
            Orientation::Vertical => {
                let v = self.value_to_pixels(value, size.height);
                PixelRect::new(0, saturate(size.height as i64 - v), size.width, saturate(v))
            }
        }
    }
}

impl MultiSlider {
    /// Paint with an explicit enabled state. Hosts use this when an
    /// enclosing container disables the widget without touching
    /// [`MultiSlider::set_enabled`].
    pub fn paint(&self, painter: &mut dyn SliderPainter, size: PixelSize, enabled: bool) {
        for index in self.sorted_indices() {
            let handle = &self.handles[index];
            let color = if enabled {
                handle.color
            } else {
                handle.color.gray()
            };
            painter.fill_rect(self.bar_rect(handle.value, size), color);
        }

        painter.set_pen(if enabled { Rgba::BLACK } else { Rgba::GRAY });
        painter.draw_rect(PixelRect::from_size(size).adjusted(-1, -1));
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl PointerHandler for MultiSlider {
    fn on_paint(&self, painter: &mut dyn SliderPainter, size: PixelSize) {
        self.paint(painter, size, self.enabled);
    }

    fn on_pointer_down(&mut self, pos: PixelPoint, buttons: PointerButtons, size: PixelSize) {
        if !buttons.primary {
            return;
        }
        for handle in self.handles.iter_mut() {
            handle.pressed = false;
        }
        if let Some(index) = self.hit_test(pos, size) {
            self.handles[index].pressed = true;
            tracing::debug!(index, x = pos.x, y = pos.y, "handle pressed");
            self.signals.pressed.emit(&());
        }
    }

    fn on_pointer_move(&mut self, pos: PixelPoint, buttons: PointerButtons, size: PixelSize) {
        if buttons.primary {
            if let Some(index) = self.pressed_handle() {
                self.cursor = self.orientation.resize_cursor();
                let value = self.value_at(pos, size);
                self.set_value(index, value);
                self.request_repaint();
                return;
            }
        }

        let near_handle = (0..self.handles.len()).any(|index| {
            self.handle_band(index, size)
                .is_some_and(|band| band.contains(pos))
        });
        self.cursor = if near_handle {
            self.orientation.resize_cursor()
        } else {
            CursorShape::Arrow
        };
    }

    fn on_pointer_up(&mut self, _pos: PixelPoint, _buttons: PointerButtons, _size: PixelSize) {
        for index in self.sorted_indices() {
            if self.handles[index].pressed {
                tracing::debug!(index, value = self.handles[index].value, "handle released");
                self.signals.released.emit(&());
                self.handles[index].pressed = false;
            }
        }
    }
}
