//! Drawing surface used by the face renderer.
//!
//! The renderer only talks to `Canvas`; `display::GraphicsCanvas` implements it on
//! top of an embedded-graphics `DrawTarget`, tests implement it as a recorder.

use embedded_graphics::pixelcolor::Rgb565;

use crate::geometry::{HandOutline, PointF, RenderBounds};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PaintStyle {
    Fill,
    Stroke { width: f32 },
    FillAndStroke { width: f32 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Paint {
    pub color: Rgb565,
    pub style: PaintStyle,
}

impl Paint {
    pub const fn fill(color: Rgb565) -> Self {
        Self { color, style: PaintStyle::Fill }
    }

    pub const fn stroke(color: Rgb565, width: f32) -> Self {
        Self { color, style: PaintStyle::Stroke { width } }
    }

    pub const fn fill_and_stroke(color: Rgb565, width: f32) -> Self {
        Self { color, style: PaintStyle::FillAndStroke { width } }
    }
}

/// Width and height of a measured string, in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

pub trait Canvas {
    type Error;

    fn bounds(&self) -> RenderBounds;

    /// Paint the whole surface, ignoring the transform.
    fn fill(&mut self, color: Rgb565) -> Result<(), Self::Error>;

    fn draw_outline(&mut self, outline: &HandOutline, paint: &Paint) -> Result<(), Self::Error>;

    fn draw_circle(&mut self, center: PointF, radius: f32, paint: &Paint) -> Result<(), Self::Error>;

    fn text_size(&self, text: &str) -> TextSize;

    /// Draw `text` with its bounding box's top-left corner at `top_left`.
    fn draw_text(&mut self, text: &str, top_left: PointF, color: Rgb565) -> Result<(), Self::Error>;

    fn save(&mut self);

    /// Undo everything since the matching `save`.
    fn restore(&mut self);

    /// Rotate clockwise by `degrees` about `pivot`, composed with the current transform.
    fn rotate(&mut self, degrees: f32, pivot: PointF);

    fn scale(&mut self, factor: f32, pivot: PointF);
}

/// 2D affine transform, column major:
///
/// | a c e |
/// | b d f |
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Affine {
    pub const IDENTITY: Affine = Affine { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    pub const fn translate(x: f32, y: f32) -> Self {
        Affine { e: x, f: y, ..Self::IDENTITY }
    }

    /// Clockwise on a y-down screen.
    pub fn rotate(degrees: f32) -> Self {
        let rad = degrees.to_radians();
        let (s, c) = (libm::sinf(rad), libm::cosf(rad));
        Affine { a: c, b: s, c: -s, d: c, e: 0.0, f: 0.0 }
    }

    pub const fn scale(factor: f32) -> Self {
        Affine { a: factor, d: factor, ..Self::IDENTITY }
    }

    /// `self * rhs`: `rhs` applies first.
    pub fn then(&self, rhs: &Affine) -> Affine {
        Affine {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }

    /// `m` applied about `pivot` instead of the origin.
    pub fn about(m: &Affine, pivot: PointF) -> Affine {
        Affine::translate(pivot.x, pivot.y)
            .then(m)
            .then(&Affine::translate(-pivot.x, -pivot.y))
    }

    pub fn apply(&self, p: PointF) -> PointF {
        PointF::new(self.a * p.x + self.c * p.y + self.e, self.b * p.x + self.d * p.y + self.f)
    }

    /// Length scale, for stroke widths and radii (uniform scales only).
    pub fn scale_factor(&self) -> f32 {
        libm::sqrtf(self.a * self.a + self.b * self.b)
    }
}

impl Default for Affine {
    fn default() -> Self {
        Affine::IDENTITY
    }
}
