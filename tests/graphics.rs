use analog_face::complication::{ComplicationSlots, FramedSlot, LEFT_SLOT_BOUNDS, LEFT_SLOT_ID, RIGHT_SLOT_BOUNDS, RIGHT_SLOT_ID};
use analog_face::{AnalogFace, ClockTime, ColorStyleId, GraphicsCanvas, RenderParameters, StyleAndDimensions, StyleHub};
use embedded_graphics::mock_display::MockDisplay;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

fn display() -> MockDisplay<Rgb565> {
    let mut d = MockDisplay::new();
    d.set_allow_overdraw(true);
    d.set_allow_out_of_bounds_drawing(true);
    d
}

fn face(hub: &StyleHub) -> AnalogFace<'_, FramedSlot> {
    let mut slots = ComplicationSlots::new();
    slots.add(LEFT_SLOT_ID, FramedSlot::new(LEFT_SLOT_BOUNDS)).unwrap();
    slots.add(RIGHT_SLOT_ID, FramedSlot::new(RIGHT_SLOT_BOUNDS)).unwrap();
    AnalogFace::new(hub, slots).unwrap()
}

#[test]
fn hour_hand_lands_at_three_oclock() {
    let hub = StyleHub::new();
    hub.publish(StyleAndDimensions::DEFAULT);
    let mut face = face(&hub);
    let mut d = display();

    let mut canvas = GraphicsCanvas::new(&mut d);
    face.render(&mut canvas, &ClockTime::new(3, 0, 0, 0), &RenderParameters::INTERACTIVE).unwrap();

    let style = ColorStyleId::Red.style();
    assert_eq!(d.get_pixel(Point::new(40, 32)), Some(style.primary));
    assert_eq!(d.get_pixel(Point::new(2, 62)), Some(style.background));
}

#[test]
fn ambient_frame_uses_ambient_palette() {
    let hub = StyleHub::new();
    hub.publish(StyleAndDimensions::DEFAULT);
    let mut face = face(&hub);
    let mut d = display();

    let mut canvas = GraphicsCanvas::new(&mut d);
    face.render(&mut canvas, &ClockTime::new(3, 0, 0, 0), &RenderParameters::AMBIENT).unwrap();

    let ambient = ColorStyleId::Ambient.style();
    assert_eq!(d.get_pixel(Point::new(2, 2)), Some(ambient.background));
    // borders only: nothing of the active palette is left on screen
    let active = ColorStyleId::Red.style().primary;
    for p in d.bounding_box().points() {
        assert_ne!(d.get_pixel(p), Some(active), "{p:?}");
    }
}
