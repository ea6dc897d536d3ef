#![allow(dead_code)]

use std::cell::Cell;

use analog_face::canvas::{Canvas, Paint, TextSize};
use analog_face::clock::ClockTime;
use analog_face::complication::{Complication, SlotId};
use analog_face::geometry::{HandOutline, PointF, RectF, RenderBounds};
use analog_face::style::{ColorStyleId, ComplicationTheme, StyleAndDimensions, UserStyle};
use analog_face::ui::RenderParameters;
use embedded_graphics::pixelcolor::Rgb565;

pub const GLYPH_W: f32 = 10.0;
pub const GLYPH_H: f32 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Fill(Rgb565),
    Outline { rect: RectF, paint: Paint, rotation: f32, scale: f32 },
    Circle { center: PointF, radius: f32, paint: Paint, rotation: f32 },
    Text { text: String, top_left: PointF, color: Rgb565 },
}

/// Canvas that records draw calls together with the rotation/scale in effect.
/// Every pivot is assumed to be the bounds center, which is all the face uses.
pub struct RecordingCanvas {
    pub bounds: RenderBounds,
    pub ops: Vec<Op>,
    rotation: f32,
    scale: f32,
    stack: Vec<(f32, f32)>,
}

impl RecordingCanvas {
    pub fn new(side: u32) -> Self {
        Self {
            bounds: RenderBounds::square(side),
            ops: Vec::new(),
            rotation: 0.0,
            scale: 1.0,
            stack: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn outlines(&self) -> Vec<(RectF, Paint, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Outline { rect, paint, rotation, .. } => Some((*rect, *paint, *rotation)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(PointF, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle { center, rotation, .. } => Some((*center, *rotation)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, PointF)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, top_left, .. } => Some((text.clone(), *top_left)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    type Error = ();

    fn bounds(&self) -> RenderBounds {
        self.bounds
    }

    fn fill(&mut self, color: Rgb565) -> Result<(), ()> {
        self.ops.push(Op::Fill(color));
        Ok(())
    }

    fn draw_outline(&mut self, outline: &HandOutline, paint: &Paint) -> Result<(), ()> {
        self.ops.push(Op::Outline {
            rect: outline.rect(),
            paint: *paint,
            rotation: self.rotation,
            scale: self.scale,
        });
        Ok(())
    }

    fn draw_circle(&mut self, center: PointF, radius: f32, paint: &Paint) -> Result<(), ()> {
        self.ops.push(Op::Circle { center, radius, paint: *paint, rotation: self.rotation });
        Ok(())
    }

    fn text_size(&self, text: &str) -> TextSize {
        TextSize { width: GLYPH_W * text.len() as f32, height: GLYPH_H }
    }

    fn draw_text(&mut self, text: &str, top_left: PointF, color: Rgb565) -> Result<(), ()> {
        self.ops.push(Op::Text { text: text.to_string(), top_left, color });
        Ok(())
    }

    fn save(&mut self) {
        self.stack.push((self.rotation, self.scale));
    }

    fn restore(&mut self) {
        let (r, s) = self.stack.pop().expect("restore without save");
        self.rotation = r;
        self.scale = s;
    }

    fn rotate(&mut self, degrees: f32, _pivot: PointF) {
        self.rotation += degrees;
    }

    fn scale(&mut self, factor: f32, _pivot: PointF) {
        self.scale *= factor;
    }
}

/// Complication that only counts what the face asks of it.
pub struct CountingSlot {
    pub enabled: bool,
    pub themes: Vec<ColorStyleId>,
    pub renders: Cell<u32>,
}

impl CountingSlot {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, themes: Vec::new(), renders: Cell::new(0) }
    }
}

impl Complication for CountingSlot {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_theme(&mut self, theme: ComplicationTheme) {
        self.themes.push(theme.id);
    }

    fn render<C: Canvas>(
        &self,
        _canvas: &mut C,
        _time: &ClockTime,
        _params: &RenderParameters,
    ) -> Result<(), C::Error> {
        self.renders.set(self.renders.get() + 1);
        Ok(())
    }

    fn render_highlight<C: Canvas>(
        &self,
        _id: SlotId,
        _canvas: &mut C,
        _params: &RenderParameters,
    ) -> Result<(), C::Error> {
        Ok(())
    }
}

pub fn styled(color: ColorStyleId) -> StyleAndDimensions {
    with_user(UserStyle { color_style: color, ..Default::default() })
}

pub fn with_user(user: UserStyle) -> StyleAndDimensions {
    StyleAndDimensions::DEFAULT.with_user_style(&user)
}

pub fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
