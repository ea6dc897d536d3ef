//! Complication slots.
//!
//! The face never looks inside a complication: it only checks `is_enabled`,
//! pushes the color theme when the style changes and asks it to render.

use heapless::{String, Vec};

use crate::canvas::{Canvas, Paint};
use crate::clock::ClockTime;
use crate::config::MAX_SLOTS;
use crate::geometry::{PointF, RectF};
use crate::style::{ColorStyleId, ComplicationTheme};
use crate::ui::{HighlightedElement, RenderParameters};

pub type SlotId = u16;

pub const LEFT_SLOT_ID: SlotId = 100;
pub const RIGHT_SLOT_ID: SlotId = 101;

// Slot bounds as fractions of the face bounds
pub const LEFT_SLOT_BOUNDS: RectF = RectF::new(0.2, 0.4, 0.4, 0.6);
pub const RIGHT_SLOT_BOUNDS: RectF = RectF::new(0.6, 0.4, 0.8, 0.6);

/// Ring stroke of a framed slot, as a fraction of the slot diameter.
const FRAME_STROKE_FRACTION: f32 = 0.06;

#[derive(Debug, PartialEq, Eq)]
pub enum SlotError {
    Full,
    DuplicateId(SlotId),
}

pub trait Complication {
    fn is_enabled(&self) -> bool;

    fn set_theme(&mut self, theme: ComplicationTheme);

    fn render<C: Canvas>(
        &self,
        canvas: &mut C,
        time: &ClockTime,
        params: &RenderParameters,
    ) -> Result<(), C::Error>;

    /// Editor overlay for slot `id`. Nothing by default.
    fn render_highlight<C: Canvas>(
        &self,
        _id: SlotId,
        _canvas: &mut C,
        _params: &RenderParameters,
    ) -> Result<(), C::Error> {
        Ok(())
    }
}

/// Fixed capacity id -> complication map, iterated in insertion order.
pub struct ComplicationSlots<S> {
    slots: Vec<(SlotId, S), MAX_SLOTS>,
}

impl<S: Complication> ComplicationSlots<S> {
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn add(&mut self, id: SlotId, slot: S) -> Result<(), SlotError> {
        if self.get(id).is_some() {
            return Err(SlotError::DuplicateId(id));
        }
        self.slots.push((id, slot)).map_err(|_| SlotError::Full)
    }

    pub fn get(&self, id: SlotId) -> Option<&S> {
        self.slots.iter().find(|(i, _)| *i == id).map(|(_, s)| s)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut S> {
        self.slots.iter_mut().find(|(i, _)| *i == id).map(|(_, s)| s)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &S)> {
        self.slots.iter().map(|(id, s)| (*id, s))
    }

    /// Push `theme` to every slot, enabled or not.
    pub fn set_theme_all(&mut self, theme: ComplicationTheme) {
        for (_, slot) in self.slots.iter_mut() {
            slot.set_theme(theme);
        }
    }
}

impl<S: Complication> Default for ComplicationSlots<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Default slot look: a themed ring with an optional short value in the middle.
pub struct FramedSlot {
    bounds: RectF,
    enabled: bool,
    theme: Option<ComplicationTheme>,
    text: String<8>,
}

impl FramedSlot {
    pub const fn new(bounds: RectF) -> Self {
        Self { bounds, enabled: true, theme: None, text: String::new() }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Value shown in the ring. Longer text is cut at 8 bytes.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        for ch in text.chars() {
            if self.text.push(ch).is_err() {
                break;
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn theme(&self) -> Option<ComplicationTheme> {
        self.theme
    }

    fn ring<C: Canvas>(&self, canvas: &C) -> (PointF, f32) {
        let r = canvas.bounds().scale_rect(&self.bounds);
        (r.center(), r.width().min(r.height()) / 2.0)
    }
}

impl Complication for FramedSlot {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_theme(&mut self, theme: ComplicationTheme) {
        self.theme = Some(theme);
    }

    fn render<C: Canvas>(
        &self,
        canvas: &mut C,
        _time: &ClockTime,
        params: &RenderParameters,
    ) -> Result<(), C::Error> {
        let Some(theme) = self.theme else {
            return Ok(());
        };
        let theme = if params.is_ambient() {
            ColorStyleId::Ambient.style().complication
        } else {
            theme
        };
        let (center, radius) = self.ring(canvas);
        let stroke = 2.0 * radius * FRAME_STROKE_FRACTION;
        canvas.draw_circle(center, radius, &Paint::stroke(theme.border, stroke))?;

        if !self.text.is_empty() {
            let size = canvas.text_size(&self.text);
            let top_left = PointF::new(center.x - size.width / 2.0, center.y - size.height / 2.0);
            canvas.draw_text(&self.text, top_left, theme.text)?;
        }
        Ok(())
    }

    fn render_highlight<C: Canvas>(
        &self,
        id: SlotId,
        canvas: &mut C,
        params: &RenderParameters,
    ) -> Result<(), C::Error> {
        let Some(layer) = params.highlight else {
            return Ok(());
        };
        let selected = match layer.element {
            HighlightedElement::AllSlots => true,
            HighlightedElement::Slot(target) => target == id,
            HighlightedElement::UserStyle => false,
        };
        if selected {
            let (center, radius) = self.ring(canvas);
            canvas.draw_circle(center, radius, &Paint::fill(layer.highlight_tint))?;
        }
        Ok(())
    }
}
