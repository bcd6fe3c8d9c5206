use crate::color::Rgba;
use crate::host::{
    CursorShape, PixelPoint, PixelRect, PixelSize, PointerButtons, PointerHandler, SliderPainter,
};
use crate::slider::MultiSlider;
use eframe::egui;

/// [`SliderPainter`] drawing into an egui painter, offset to the widget rect.
pub struct EguiPainter<'p> {
    painter: &'p egui::Painter,
    origin: egui::Pos2,
    pen: Rgba,
}

impl<'p> EguiPainter<'p> {
    pub fn new(painter: &'p egui::Painter, origin: egui::Pos2) -> Self {
        Self {
            painter,
            origin,
            pen: Rgba::BLACK,
        }
    }

    fn to_rect(&self, rect: PixelRect) -> egui::Rect {
        egui::Rect::from_two_pos(
            self.origin + egui::vec2(rect.x as f32, rect.y as f32),
            self.origin
                + egui::vec2(
                    (rect.x as i64 + rect.width as i64) as f32,
                    (rect.y as i64 + rect.height as i64) as f32,
                ),
        )
    }
}

impl SliderPainter for EguiPainter<'_> {
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.painter
            .rect_filled(self.to_rect(rect), 0.0, egui::Color32::from(color));
    }

    fn set_pen(&mut self, color: Rgba) {
        self.pen = color;
    }

    fn draw_rect(&mut self, rect: PixelRect) {
        // Stroke through pixel centres so the outline covers the last row and column.
        let outline = self.to_rect(rect.adjusted(1, 1)).shrink(0.5);
        self.painter.rect_stroke(
            outline,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from(self.pen)),
        );
    }
}

pub fn cursor_icon(shape: CursorShape) -> egui::CursorIcon {
    match shape {
        CursorShape::Arrow => egui::CursorIcon::Default,
        CursorShape::ResizeHorizontal => egui::CursorIcon::ResizeHorizontal,
        CursorShape::ResizeVertical => egui::CursorIcon::ResizeVertical,
    }
}

/// Shows a [`MultiSlider`] inside an egui layout and routes pointer input to it.
pub struct MultiSliderWidget<'a> {
    slider: &'a mut MultiSlider,
    size: Option<egui::Vec2>,
}

impl<'a> MultiSliderWidget<'a> {
    pub fn new(slider: &'a mut MultiSlider) -> Self {
        Self { slider, size: None }
    }

    /// Fixed size instead of filling the available space. Never smaller than
    /// the slider's minimum size hint.
    pub fn size(mut self, size: egui::Vec2) -> Self {
        self.size = Some(size);
        self
    }
}

impl egui::Widget for MultiSliderWidget<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let hint = self.slider.minimum_size_hint();
        let min = egui::vec2(hint.width as f32, hint.height as f32);
        let desired = self.size.unwrap_or_else(|| ui.available_size()).max(min);

        let (response, painter) = ui.allocate_painter(desired, egui::Sense::click_and_drag());
        let rect = response.rect;
        let size = PixelSize::new(rect.width().round() as i32, rect.height().round() as i32);

        let enabled = ui.is_enabled() && self.slider.is_enabled();
        if enabled {
            dispatch_pointer(ui, self.slider, rect, size);
        }

        let mut egui_painter = EguiPainter::new(&painter, rect.min);
        self.slider.paint(&mut egui_painter, size, enabled);

        if self.slider.take_repaint_request() {
            ui.ctx().request_repaint();
        }

        response
    }
}

fn dispatch_pointer(ui: &egui::Ui, slider: &mut MultiSlider, rect: egui::Rect, size: PixelSize) {
    let (pos, pressed, released, moved, buttons) = ui.input(|i| {
        (
            i.pointer.latest_pos(),
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.delta() != egui::Vec2::ZERO,
            PointerButtons {
                primary: i.pointer.primary_down(),
                secondary: i.pointer.secondary_down(),
                middle: i.pointer.middle_down(),
            },
        )
    });
    let Some(pos) = pos else {
        return;
    };

    let local = PixelPoint::new(
        (pos.x - rect.min.x).floor() as i32,
        (pos.y - rect.min.y).floor() as i32,
    );
    let inside = rect.contains(pos);

    if pressed && inside {
        let buttons = PointerButtons {
            primary: true,
            ..buttons
        };
        slider.on_pointer_down(local, buttons, size);
    }

    let grabbed = slider.pressed_handle().is_some();
    if moved && (inside || grabbed) {
        slider.on_pointer_move(local, buttons, size);
    }

    if released && grabbed {
        slider.on_pointer_up(local, buttons, size);
    }

    if inside || grabbed {
        ui.ctx().set_cursor_icon(cursor_icon(slider.cursor()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::Orientation;

    #[test]
    fn cursor_shapes_map_to_resize_icons() {
        assert_eq!(cursor_icon(CursorShape::Arrow), egui::CursorIcon::Default);
        assert_eq!(
            cursor_icon(CursorShape::ResizeHorizontal),
            egui::CursorIcon::ResizeHorizontal
        );
        assert_eq!(
            cursor_icon(CursorShape::ResizeVertical),
            egui::CursorIcon::ResizeVertical
        );
    }

    #[test]
    fn widget_paints_bars_and_frame() {
        let ctx = egui::Context::default();
        let mut slider = MultiSlider::new(Orientation::Horizontal);
        slider.add_handle(40, Some(Rgba::rgb(200, 0, 0)));
        slider.add_handle(60, Some(Rgba::rgb(0, 200, 0)));

        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add(MultiSliderWidget::new(&mut slider).size(egui::vec2(100.0, 20.0)));
            });
        });

        // Two bars plus the outline, on top of the panel background.
        assert!(output.shapes.len() >= 3);
    }
}
