//! Face state and per-frame rendering.
//!
//! This module provides:
//! - `RenderParameters`: draw mode, layer visibility and the optional editor highlight
//! - `FaceState`: `NoData` until the first style snapshot arrives, then `Ready`
//! - `AnalogFace`: applies style snapshots and draws complete frames
//!
//! Frames are composed back to front: background, complications, hands, outer ring.

use embedded_graphics::pixelcolor::Rgb565;

use crate::canvas::{Canvas, Paint};
use crate::clock::{hand_angles, ClockTime};
use crate::complication::{Complication, ComplicationSlots, SlotId};
use crate::config::{HAND_SCALE, HAND_STROKE_WIDTH};
use crate::feed::{FeedError, Snapshot, StyleHub, Subscription};
use crate::geometry::{HandGeometry, HandOutline, PointF, RenderBounds};
use crate::pips::draw_hour_pips;
use crate::style::{ColorStyleId, ComplicationTheme, StyleAndDimensions};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawMode {
    Interactive,
    Ambient,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visibility {
    Show,
    Hide,
}

/// Per-layer visibility. `top` carries the hands, `base` the background ring.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LayerVisibility {
    pub base: Visibility,
    pub top: Visibility,
}

impl LayerVisibility {
    pub const ALL: LayerVisibility = LayerVisibility { base: Visibility::Show, top: Visibility::Show };
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HighlightedElement {
    AllSlots,
    Slot(SlotId),
    UserStyle,
}

/// Overlay the style editor asks for on top of a normal frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HighlightLayer {
    pub element: HighlightedElement,
    pub highlight_tint: Rgb565,
    pub background_tint: Rgb565,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderParameters {
    pub draw_mode: DrawMode,
    pub layers: LayerVisibility,
    pub highlight: Option<HighlightLayer>,
}

impl RenderParameters {
    pub const INTERACTIVE: RenderParameters = RenderParameters {
        draw_mode: DrawMode::Interactive,
        layers: LayerVisibility::ALL,
        highlight: None,
    };

    pub const AMBIENT: RenderParameters = RenderParameters {
        draw_mode: DrawMode::Ambient,
        layers: LayerVisibility::ALL,
        highlight: None,
    };

    pub fn is_ambient(&self) -> bool {
        self.draw_mode == DrawMode::Ambient
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FaceState {
    NoData,
    Ready,
}

pub struct AnalogFace<'h, S> {
    subscription: Subscription<'h>,
    slots: ComplicationSlots<S>,
    data: Option<Snapshot>,
    theme: Option<ColorStyleId>,
    hands: Option<HandGeometry>,
    bounds: RenderBounds,
    hands_dirty: bool,
    geometry_builds: u32,
}

impl<'h, S: Complication> AnalogFace<'h, S> {
    /// Subscribe to `hub` and take ownership of the complication slots.
    pub fn new(hub: &'h StyleHub, slots: ComplicationSlots<S>) -> Result<Self, FeedError> {
        Ok(AnalogFace {
            subscription: hub.subscribe()?,
            slots,
            data: None,
            theme: None,
            hands: None,
            bounds: RenderBounds::ZERO,
            hands_dirty: false,
            geometry_builds: 0,
        })
    }

    pub fn state(&self) -> FaceState {
        match self.data {
            Some(_) => FaceState::Ready,
            None => FaceState::NoData,
        }
    }

    pub fn data(&self) -> Option<&StyleAndDimensions> {
        self.data.as_deref()
    }

    pub fn slots(&self) -> &ComplicationSlots<S> {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut ComplicationSlots<S> {
        &mut self.slots
    }

    /// How many times hand geometry has been built so far.
    pub fn geometry_builds(&self) -> u32 {
        self.geometry_builds
    }

    /// Apply one snapshot: retheme slots on a color change, mark the hands dirty
    /// when any hand dimension or the center gap changed, then store it.
    pub fn apply(&mut self, next: Snapshot) {
        debug_assert!(next.is_finite(), "non-finite value in style snapshot");
        self.push_theme(next.active.complication);

        if let Some(prev) = self.data.as_deref() {
            if !prev.same_hand_geometry(&next) {
                self.hands_dirty = true;
            }
        }

        self.data = Some(next);
    }

    /// Apply everything waiting in the subscription. Themes folded into a
    /// delivery by a full mailbox are pushed first. Returns how many snapshots
    /// were applied.
    pub fn pump(&mut self) -> usize {
        let mut n = 0;
        while let Some(delivery) = self.subscription.try_next() {
            for theme in delivery.folded_themes() {
                self.push_theme(*theme);
            }
            self.apply(delivery.snapshot);
            n += 1;
        }
        n
    }

    fn push_theme(&mut self, theme: ComplicationTheme) {
        if self.theme != Some(theme.id) {
            log::debug!("complication theme -> {}", theme.id.display_name());
            self.slots.set_theme_all(theme);
            self.theme = Some(theme.id);
        }
    }

    /// Draw one frame. Does nothing until a style snapshot has arrived.
    pub fn render<C: Canvas>(
        &mut self,
        canvas: &mut C,
        time: &ClockTime,
        params: &RenderParameters,
    ) -> Result<(), C::Error> {
        self.pump();
        let Some(data) = self.data.clone() else {
            return Ok(());
        };

        let background = if params.is_ambient() {
            data.ambient.background
        } else {
            data.active.background
        };
        canvas.fill(background)?;

        for (_, slot) in self.slots.iter() {
            if slot.is_enabled() {
                slot.render(canvas, time, params)?;
            }
        }

        if params.layers.top != Visibility::Hide {
            self.draw_clock_hands(canvas, time, params, &data)?;
        }

        if !params.is_ambient() && params.layers.base == Visibility::Show && data.draw_hour_pips {
            let bounds = canvas.bounds();
            draw_hour_pips(canvas, &bounds, &data, data.active.outer_element)?;
        }
        Ok(())
    }

    /// Editor overlay: background tint plus each enabled slot's highlight.
    pub fn render_highlight_layer<C: Canvas>(
        &mut self,
        canvas: &mut C,
        params: &RenderParameters,
    ) -> Result<(), C::Error> {
        let Some(layer) = params.highlight else {
            return Ok(());
        };
        canvas.fill(layer.background_tint)?;
        for (id, slot) in self.slots.iter() {
            if slot.is_enabled() {
                slot.render_highlight(id, canvas, params)?;
            }
        }
        Ok(())
    }

    /// Stop receiving style updates. Same as dropping the face.
    pub fn dispose(self) {}

    fn hands_for(&mut self, bounds: RenderBounds, data: &StyleAndDimensions) -> HandGeometry {
        if let Some(hands) = self.hands {
            if bounds == self.bounds && !self.hands_dirty {
                return hands;
            }
        }

        let hands = HandGeometry::build(&bounds, data);
        self.hands = Some(hands);
        self.bounds = bounds;
        self.hands_dirty = false;
        self.geometry_builds += 1;
        log::debug!(
            "hand geometry rebuilt for {}x{} (build {})",
            bounds.width,
            bounds.height,
            self.geometry_builds
        );
        hands
    }

    fn draw_clock_hands<C: Canvas>(
        &mut self,
        canvas: &mut C,
        time: &ClockTime,
        params: &RenderParameters,
        data: &StyleAndDimensions,
    ) -> Result<(), C::Error> {
        let bounds = canvas.bounds();
        let hands = self.hands_for(bounds, data);
        let angles = hand_angles(time);
        let center = bounds.center();

        canvas.save();
        canvas.scale(HAND_SCALE, center);
        let drawn = if params.is_ambient() {
            // borders only, no second hand
            let paint = Paint::stroke(data.ambient.primary, HAND_STROKE_WIDTH);
            draw_hand(canvas, &hands.hour, angles.hour, center, &paint)
                .and_then(|_| draw_hand(canvas, &hands.minute, angles.minute, center, &paint))
        } else {
            let paint = Paint::fill(data.active.primary);
            let second = Paint::fill(data.active.secondary);
            draw_hand(canvas, &hands.hour, angles.hour, center, &paint)
                .and_then(|_| draw_hand(canvas, &hands.minute, angles.minute, center, &paint))
                .and_then(|_| draw_hand(canvas, &hands.second, angles.second, center, &second))
        };
        canvas.restore();
        drawn
    }
}

fn draw_hand<C: Canvas>(
    canvas: &mut C,
    outline: &HandOutline,
    degrees: f32,
    center: PointF,
    paint: &Paint,
) -> Result<(), C::Error> {
    canvas.save();
    canvas.rotate(degrees, center);
    let drawn = canvas.draw_outline(outline, paint);
    canvas.restore();
    drawn
}
