use multi_slider::{
    CursorShape, MultiSlider, Orientation, PixelPoint, PixelSize, PointerButtons, PointerHandler,
    Rgba,
};
use std::cell::RefCell;
use std::rc::Rc;

const WIDE: PixelSize = PixelSize::new(100, 20);
const TALL: PixelSize = PixelSize::new(20, 100);

fn slider(orientation: Orientation, values: &[i32]) -> MultiSlider {
    let mut slider = MultiSlider::new(orientation);
    for &v in values {
        slider.add_handle(v, Some(Rgba::rgb(10, 20, 30)));
    }
    slider
}

#[derive(Default)]
struct Events {
    pressed: usize,
    released: usize,
    values: Vec<(usize, i32)>,
}

fn record(slider: &mut MultiSlider) -> Rc<RefCell<Events>> {
    let events = Rc::new(RefCell::new(Events::default()));
    let e = events.clone();
    slider.signals.pressed.connect(move |_| e.borrow_mut().pressed += 1);
    let e = events.clone();
    slider
        .signals
        .released
        .connect(move |_| e.borrow_mut().released += 1);
    let e = events.clone();
    slider
        .signals
        .value_changed
        .connect(move |change| e.borrow_mut().values.push(*change));
    events
}

#[test]
fn drag_moves_pressed_handle_and_notifies() {
    let mut slider = slider(Orientation::Horizontal, &[40, 60]);
    let events = record(&mut slider);

    slider.on_pointer_down(PixelPoint::new(40, 10), PointerButtons::PRIMARY, WIDE);
    assert_eq!(slider.pressed_handle(), Some(0));
    assert_eq!(events.borrow().pressed, 1);

    slider.on_pointer_move(PixelPoint::new(75, 10), PointerButtons::PRIMARY, WIDE);
    assert_eq!(slider.value(0), 75);
    assert_eq!(slider.value(1), 60);
    assert_eq!(events.borrow().values, vec![(0, 75)]);
    assert_eq!(slider.cursor(), CursorShape::ResizeHorizontal);
    assert!(slider.take_repaint_request());

    slider.on_pointer_up(PixelPoint::new(75, 10), PointerButtons::NONE, WIDE);
    assert_eq!(slider.pressed_handle(), None);
    assert_eq!(events.borrow().released, 1);
}

#[test]
fn drag_past_the_end_clamps() {
    let mut slider = slider(Orientation::Horizontal, &[40]);
    slider.on_pointer_down(PixelPoint::new(39, 0), PointerButtons::PRIMARY, WIDE);
    slider.on_pointer_move(PixelPoint::new(250, 0), PointerButtons::PRIMARY, WIDE);
    assert_eq!(slider.value(0), 100);
    slider.on_pointer_move(PixelPoint::new(-30, 0), PointerButtons::PRIMARY, WIDE);
    assert_eq!(slider.value(0), 0);
}

#[test]
fn vertical_axis_grows_upwards() {
    let mut slider = slider(Orientation::Vertical, &[40]);

    // value 40 of 100 on a 100px tall slider sits at y = 60
    slider.on_pointer_down(PixelPoint::new(5, 61), PointerButtons::PRIMARY, TALL);
    assert_eq!(slider.pressed_handle(), Some(0));

    slider.on_pointer_move(PixelPoint::new(5, 25), PointerButtons::PRIMARY, TALL);
    assert_eq!(slider.value(0), 75);
    assert_eq!(slider.cursor(), CursorShape::ResizeVertical);
}

#[test]
fn projection_scales_with_widget_size() {
    let mut slider = slider(Orientation::Horizontal, &[50]);
    let size = PixelSize::new(200, 20);

    slider.on_pointer_down(PixelPoint::new(100, 3), PointerButtons::PRIMARY, size);
    slider.on_pointer_move(PixelPoint::new(151, 3), PointerButtons::PRIMARY, size);

    // 151 * 100 / 200 truncates to 75
    assert_eq!(slider.value(0), 75);
}

#[test]
fn overlapping_press_takes_higher_value() {
    let mut slider = slider(Orientation::Horizontal, &[50, 51]);
    let events = record(&mut slider);

    slider.on_pointer_down(PixelPoint::new(50, 5), PointerButtons::PRIMARY, WIDE);

    assert_eq!(slider.pressed_handle(), Some(1));
    assert_eq!(slider.handles().filter(|h| h.is_pressed()).count(), 1);
    assert_eq!(events.borrow().pressed, 1);
}

#[test]
fn band_edges_follow_border() {
    let mut slider = slider(Orientation::Horizontal, &[40]);

    for (x, hit) in [(37, false), (38, true), (41, true), (42, false)] {
        assert_eq!(
            slider.hit_test(PixelPoint::new(x, 0), WIDE).is_some(),
            hit,
            "x = {x}"
        );
    }

    slider.set_border(5);
    assert_eq!(slider.hit_test(PixelPoint::new(35, 0), WIDE), Some(0));
}

#[test]
fn press_outside_the_cross_axis_misses() {
    let mut slider = slider(Orientation::Horizontal, &[40]);
    slider.on_pointer_down(PixelPoint::new(40, 20), PointerButtons::PRIMARY, WIDE);
    assert_eq!(slider.pressed_handle(), None);
}

#[test]
fn missed_press_emits_nothing() {
    let mut slider = slider(Orientation::Horizontal, &[40, 60]);
    let events = record(&mut slider);

    slider.on_pointer_down(PixelPoint::new(10, 5), PointerButtons::PRIMARY, WIDE);
    slider.on_pointer_move(PixelPoint::new(90, 5), PointerButtons::PRIMARY, WIDE);
    slider.on_pointer_up(PixelPoint::new(90, 5), PointerButtons::NONE, WIDE);

    let events = events.borrow();
    assert_eq!(events.pressed, 0);
    assert_eq!(events.released, 0);
    assert!(events.values.is_empty());
    assert_eq!(slider.value(0), 40);
    assert_eq!(slider.value(1), 60);
}

#[test]
fn hover_only_changes_cursor() {
    let mut slider = slider(Orientation::Horizontal, &[40, 60]);
    let events = record(&mut slider);
    slider.take_repaint_request();

    slider.on_pointer_move(PixelPoint::new(59, 5), PointerButtons::NONE, WIDE);
    assert_eq!(slider.cursor(), CursorShape::ResizeHorizontal);

    slider.on_pointer_move(PixelPoint::new(10, 5), PointerButtons::NONE, WIDE);
    assert_eq!(slider.cursor(), CursorShape::Arrow);

    assert!(events.borrow().values.is_empty());
    assert_eq!(slider.pressed_handle(), None);
    assert!(!slider.take_repaint_request());
}

#[test]
fn pressed_handle_ignores_moves_without_button() {
    let mut slider = slider(Orientation::Horizontal, &[40]);
    slider.on_pointer_down(PixelPoint::new(40, 5), PointerButtons::PRIMARY, WIDE);
    slider.on_pointer_move(PixelPoint::new(80, 5), PointerButtons::NONE, WIDE);
    assert_eq!(slider.value(0), 40);
}

#[test]
fn new_press_replaces_previous_grab() {
    let mut slider = slider(Orientation::Horizontal, &[20, 80]);
    slider.on_pointer_down(PixelPoint::new(20, 5), PointerButtons::PRIMARY, WIDE);
    slider.on_pointer_down(PixelPoint::new(80, 5), PointerButtons::PRIMARY, WIDE);
    assert_eq!(slider.pressed_handle(), Some(1));
    assert_eq!(slider.handles().filter(|h| h.is_pressed()).count(), 1);
}


#[test]
fn extreme_values_and_border_do_not_overflow() {
    let positions = [
        PixelPoint::new(10, 5),
        PixelPoint::new(i32::MAX - 1, 5),
        PixelPoint::new(i32::MAX, i32::MAX),
        PixelPoint::new(i32::MIN, i32::MIN),
    ];

    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let size = match orientation {
            Orientation::Horizontal => WIDE,
            Orientation::Vertical => TALL,
        };
        let mut slider = slider(orientation, &[i32::MAX, i32::MIN, 50]);

        for pos in positions {
            slider.on_pointer_move(pos, PointerButtons::NONE, size);
            slider.on_pointer_down(pos, PointerButtons::PRIMARY, size);
            slider.on_pointer_move(pos, PointerButtons::PRIMARY, size);
            slider.on_pointer_up(pos, PointerButtons::NONE, size);
        }

        slider.set_border(i32::MAX);
        assert_eq!(slider.border(), i32::MAX / 2);
        for pos in positions {
            slider.on_pointer_move(pos, PointerButtons::NONE, size);
            slider.on_pointer_down(pos, PointerButtons::PRIMARY, size);
            slider.on_pointer_up(pos, PointerButtons::NONE, size);
        }

        let mut painter = mock_painter::MockPainter::default();
        slider.on_paint(&mut painter, size);
        assert_eq!(painter.fills().len(), slider.handle_count());
    }
}

#[test]
fn handle_far_past_the_range_is_still_grabbable_at_the_edge() {
    let mut slider = slider(Orientation::Horizontal, &[i32::MAX]);

    slider.on_pointer_down(PixelPoint::new(i32::MAX - 1, 5), PointerButtons::PRIMARY, WIDE);
    assert_eq!(slider.pressed_handle(), Some(0));

    slider.on_pointer_move(PixelPoint::new(30, 5), PointerButtons::PRIMARY, WIDE);
    assert_eq!(slider.value(0), 30);
}
