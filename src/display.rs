//! `Canvas` on top of an embedded-graphics `DrawTarget`.
//!
//! Works with any Rgb565 target: the GC9A01 mipidsi display, the CO5300
//! framebuffer driver, or the `MockDisplay` in tests. Rotation and scale are
//! applied in software; hand outlines are rasterized as a triangle fan (they are
//! convex) and stroked as a closed polyline.

use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Polyline, PrimitiveStyle, PrimitiveStyleBuilder, Triangle},
    text::{renderer::TextRenderer, Baseline, Text},
};
use heapless::Vec;

use crate::canvas::{Affine, Canvas, Paint, PaintStyle, TextSize};
use crate::config::SAVE_DEPTH;
use crate::geometry::{HandOutline, PointF, RenderBounds, OUTLINE_POINTS};

const CLOSED_POINTS: usize = OUTLINE_POINTS + 1;

pub struct GraphicsCanvas<'d, D> {
    target: &'d mut D,
    font: &'static MonoFont<'static>,
    transform: Affine,
    stack: Vec<Affine, SAVE_DEPTH>,
    // saves that did not fit on the stack, so restores stay balanced
    overflow: u16,
}

impl<'d, D> GraphicsCanvas<'d, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'d mut D) -> Self {
        Self::with_font(target, &FONT_10X20)
    }

    /// Use another mono font for the hour labels (e.g. `FONT_6X10` on the 240px panel).
    pub fn with_font(target: &'d mut D, font: &'static MonoFont<'static>) -> Self {
        Self {
            target,
            font,
            transform: Affine::IDENTITY,
            stack: Vec::new(),
            overflow: 0,
        }
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn into_inner(self) -> &'d mut D {
        self.target
    }

    fn map(&self, p: PointF) -> Point {
        to_point(self.transform.apply(p))
    }

    fn px(&self, len: f32) -> u32 {
        let v = libm::roundf(len * self.transform.scale_factor());
        if v < 1.0 {
            1
        } else {
            v as u32
        }
    }

    fn fill_outline(&mut self, pts: &[Point], color: Rgb565) -> Result<(), D::Error> {
        let Some((&first, rest)) = pts.split_first() else {
            return Ok(());
        };
        let style = PrimitiveStyle::with_fill(color);
        for pair in rest.windows(2) {
            Triangle::new(first, pair[0], pair[1]).into_styled(style).draw(&mut *self.target)?;
        }
        Ok(())
    }

    fn stroke_outline(&mut self, pts: &[Point], color: Rgb565, width: u32) -> Result<(), D::Error> {
        let mut closed: Vec<Point, CLOSED_POINTS> = Vec::new();
        for &p in pts {
            closed.push(p).ok();
        }
        if let Some(&first) = pts.first() {
            closed.push(first).ok();
        }
        Polyline::new(&closed)
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(&mut *self.target)
    }
}

/// Saves nest at most `SAVE_DEPTH` deep. A save beyond that asserts in debug
/// builds; in release it is counted and its restore leaves the transform alone,
/// so transforms applied inside it are not undone.
impl<D> Canvas for GraphicsCanvas<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn bounds(&self) -> RenderBounds {
        self.target.bounding_box().into()
    }

    fn fill(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        self.target.clear(color)
    }

    fn draw_outline(&mut self, outline: &HandOutline, paint: &Paint) -> Result<(), Self::Error> {
        let mut pts: Vec<Point, OUTLINE_POINTS> = Vec::new();
        for p in outline.outline() {
            pts.push(self.map(p)).ok();
        }

        match paint.style {
            PaintStyle::Fill => self.fill_outline(&pts, paint.color),
            PaintStyle::Stroke { width } => {
                let w = self.px(width);
                self.stroke_outline(&pts, paint.color, w)
            }
            PaintStyle::FillAndStroke { width } => {
                let w = self.px(width);
                self.fill_outline(&pts, paint.color)?;
                self.stroke_outline(&pts, paint.color, w)
            }
        }
    }

    fn draw_circle(&mut self, center: PointF, radius: f32, paint: &Paint) -> Result<(), Self::Error> {
        let diameter = self.px(2.0 * radius);
        let style = match paint.style {
            PaintStyle::Fill => PrimitiveStyle::with_fill(paint.color),
            PaintStyle::Stroke { width } => PrimitiveStyle::with_stroke(paint.color, self.px(width)),
            PaintStyle::FillAndStroke { width } => PrimitiveStyleBuilder::new()
                .fill_color(paint.color)
                .stroke_color(paint.color)
                .stroke_width(self.px(width))
                .build(),
        };
        Circle::with_center(self.map(center), diameter)
            .into_styled(style)
            .draw(&mut *self.target)
    }

    fn text_size(&self, text: &str) -> TextSize {
        let style = MonoTextStyle::new(self.font, Rgb565::WHITE);
        let size = style.measure_string(text, Point::zero(), Baseline::Top).bounding_box.size;
        TextSize { width: size.width as f32, height: size.height as f32 }
    }

    fn draw_text(&mut self, text: &str, top_left: PointF, color: Rgb565) -> Result<(), Self::Error> {
        // glyphs are never rotated, only their anchor moves
        let style = MonoTextStyle::new(self.font, color);
        Text::with_baseline(text, self.map(top_left), style, Baseline::Top)
            .draw(&mut *self.target)
            .map(|_| ())
    }

    fn save(&mut self) {
        debug_assert!(self.stack.len() < SAVE_DEPTH, "canvas save stack full");
        if self.stack.push(self.transform).is_err() {
            log::warn!("canvas save stack full ({} deep)", SAVE_DEPTH);
            self.overflow = self.overflow.saturating_add(1);
        }
    }

    fn restore(&mut self) {
        if self.overflow > 0 {
            self.overflow -= 1;
            return;
        }
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }

    fn rotate(&mut self, degrees: f32, pivot: PointF) {
        self.transform = self.transform.then(&Affine::about(&Affine::rotate(degrees), pivot));
    }

    fn scale(&mut self, factor: f32, pivot: PointF) {
        self.transform = self.transform.then(&Affine::about(&Affine::scale(factor), pivot));
    }
}

fn to_point(p: PointF) -> Point {
    Point::new(libm::roundf(p.x) as i32, libm::roundf(p.y) as i32)
}
