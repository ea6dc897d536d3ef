//! Outer ring: "3 6 9 12" labels and dots for the other hours.

use embedded_graphics::pixelcolor::Rgb565;

use crate::canvas::{Canvas, Paint};
use crate::geometry::{PointF, RenderBounds};
use crate::style::StyleAndDimensions;

pub const HOUR_MARKS: [&str; 4] = ["3", "6", "9", "12"];

pub fn draw_hour_pips<C: Canvas>(
    canvas: &mut C,
    bounds: &RenderBounds,
    data: &StyleAndDimensions,
    color: Rgb565,
) -> Result<(), C::Error> {
    let w = bounds.width as f32;
    let center = bounds.center();

    // Labels at 3, 6, 9 and 12 o'clock, centered on their own text box
    for (i, mark) in HOUR_MARKS.iter().enumerate() {
        let rad = (90.0 * (i + 1) as f32).to_radians();
        let dx = libm::sinf(rad) * data.number_radius * w;
        let dy = -libm::cosf(rad) * data.number_radius * w;
        let size = canvas.text_size(mark);
        let top_left = PointF::new(
            center.x + dx - size.width / 2.0,
            center.y + dy - size.height / 2.0,
        );
        canvas.draw_text(mark, top_left, color)?;
    }

    // Dots for the remaining hours. One dot is always drawn at the top-middle
    // point; the canvas rotation keeps compounding so each lands one hour further.
    let dot = top_middle(bounds, data);
    let radius = data.pip_radius * w;
    let paint = Paint::fill_and_stroke(color, data.pip_stroke * w);

    canvas.save();
    let drawn = (0..12).try_for_each(|i| -> Result<(), C::Error> {
        if i % 3 != 0 {
            canvas.draw_circle(dot, radius, &paint)?;
        }
        canvas.rotate(360.0 / 12.0, center);
        Ok(())
    });
    canvas.restore();
    drawn
}

fn top_middle(bounds: &RenderBounds, data: &StyleAndDimensions) -> PointF {
    let w = bounds.width as f32;
    PointF::new(bounds.center().x, bounds.y as f32 + w * (data.pip_gap + data.pip_radius))
}
