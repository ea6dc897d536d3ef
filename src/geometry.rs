//! Hand geometry.
//!
//! Hands are built pointing at 12 o'clock, above the center of the bounds, and
//! rotated into place at draw time. Every length is a fraction of the bounds
//! width so a face keeps its proportions on any panel.

use embedded_graphics::{prelude::Size, primitives::Rectangle};
use heapless::Vec;

use crate::config::ARC_SEGMENTS;
use crate::style::{HandDimensions, StyleAndDimensions};

/// Max vertices of one hand outline.
pub const OUTLINE_POINTS: usize = 4 * (ARC_SEGMENTS + 1);

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis aligned float rectangle, y grows downwards.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> PointF {
        PointF::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }
}

/// The drawable area of the canvas the last time geometry was built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl RenderBounds {
    pub const ZERO: RenderBounds = RenderBounds { x: 0, y: 0, width: 0, height: 0 };

    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Square bounds anchored at the origin, as on a round watch panel.
    pub const fn square(side: u32) -> Self {
        Self::new(0, 0, side, side)
    }

    pub fn center(&self) -> PointF {
        PointF::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Map a rect given in fractions of these bounds to pixels.
    pub fn scale_rect(&self, frac: &RectF) -> RectF {
        let (w, h) = (self.width as f32, self.height as f32);
        RectF::new(
            self.x as f32 + frac.left * w,
            self.y as f32 + frac.top * h,
            self.x as f32 + frac.right * w,
            self.y as f32 + frac.bottom * h,
        )
    }
}

impl From<Rectangle> for RenderBounds {
    fn from(r: Rectangle) -> Self {
        let Size { width, height } = r.size;
        RenderBounds::new(r.top_left.x, r.top_left.y, width, height)
    }
}

/// Outline of one clock hand. Fill and border share this one shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HandOutline {
    Rect(RectF),
    RoundRect { rect: RectF, rx: f32, ry: f32 },
}

impl HandOutline {
    pub fn rect(&self) -> RectF {
        match *self {
            HandOutline::Rect(r) => r,
            HandOutline::RoundRect { rect, .. } => rect,
        }
    }

    /// Polygon vertices in clockwise order (screen space, y down), starting at
    /// the top-left corner.
    pub fn outline(&self) -> Vec<PointF, OUTLINE_POINTS> {
        let mut pts = Vec::new();
        match *self {
            HandOutline::Rect(r) => {
                for p in [
                    PointF::new(r.left, r.top),
                    PointF::new(r.right, r.top),
                    PointF::new(r.right, r.bottom),
                    PointF::new(r.left, r.bottom),
                ] {
                    pts.push(p).ok();
                }
            }
            HandOutline::RoundRect { rect: r, rx, ry } => {
                let rx = rx.min(r.width() / 2.0);
                let ry = ry.min(r.height() / 2.0);
                // (arc center, start angle in degrees), sweeping +90 each
                let corners = [
                    (PointF::new(r.left + rx, r.top + ry), 180.0f32),
                    (PointF::new(r.right - rx, r.top + ry), 270.0),
                    (PointF::new(r.right - rx, r.bottom - ry), 0.0),
                    (PointF::new(r.left + rx, r.bottom - ry), 90.0),
                ];
                for (c, start) in corners {
                    for step in 0..=ARC_SEGMENTS {
                        let deg = start + 90.0 * step as f32 / ARC_SEGMENTS as f32;
                        let rad = deg.to_radians();
                        pts.push(PointF::new(c.x + rx * libm::cosf(rad), c.y + ry * libm::sinf(rad)))
                            .ok();
                    }
                }
            }
        }
        pts
    }
}

/// Build one hand pointing at 12 o'clock.
///
/// `length`, `width` and `gap` are fractions of the bounds width; `gap` is the
/// empty space between the center and the near end of the hand. Corner radii are
/// fractions of the bounds width as well; both zero gives a plain rectangle.
pub fn build_hand(
    bounds: &RenderBounds,
    length: f32,
    width: f32,
    gap: f32,
    corner_rx: f32,
    corner_ry: f32,
) -> HandOutline {
    debug_assert!(
        length.is_finite()
            && width.is_finite()
            && gap.is_finite()
            && corner_rx.is_finite()
            && corner_ry.is_finite(),
        "non-finite hand dimension"
    );

    let w = bounds.width as f32;
    let c = bounds.center();
    let rect = RectF::new(
        c.x - width / 2.0 * w,
        c.y - (gap + length) * w,
        c.x + width / 2.0 * w,
        c.y - gap * w,
    );

    if corner_rx != 0.0 || corner_ry != 0.0 {
        HandOutline::RoundRect { rect, rx: corner_rx * w, ry: corner_ry * w }
    } else {
        HandOutline::Rect(rect)
    }
}

fn build_from(bounds: &RenderBounds, dims: &HandDimensions, gap: f32) -> HandOutline {
    build_hand(bounds, dims.length, dims.width, gap, dims.corner_rx, dims.corner_ry)
}

/// Outlines for all three hands, valid for one (bounds, snapshot) pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HandGeometry {
    pub hour: HandOutline,
    pub minute: HandOutline,
    pub second: HandOutline,
}

impl HandGeometry {
    pub fn build(bounds: &RenderBounds, data: &StyleAndDimensions) -> Self {
        let gap = data.gap_to_center;
        HandGeometry {
            hour: build_from(bounds, &data.hour_hand, gap),
            minute: build_from(bounds, &data.minute_hand, gap),
            second: build_from(bounds, &data.second_hand, gap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        libm::fabsf(a - b) < 1e-3
    }

    // twice the signed area; positive means clockwise with y pointing down
    fn signed_area2(pts: &[PointF]) -> f32 {
        let n = pts.len();
        (0..n)
            .map(|i| {
                let (a, b) = (pts[i], pts[(i + 1) % n]);
                a.x * b.y - b.x * a.y
            })
            .sum()
    }

    #[test]
    fn plain_hand_on_400px_face() {
        let b = RenderBounds::square(400);
        let hand = build_hand(&b, 0.3, 0.02, 0.1, 0.0, 0.0);
        let HandOutline::Rect(r) = hand else {
            panic!("expected a plain rect, got {hand:?}");
        };
        assert!(close(r.top, 200.0 - 160.0));
        assert!(close(r.bottom, 200.0 - 40.0));
        assert!(close(r.left, 200.0 - 4.0));
        assert!(close(r.right, 200.0 + 4.0));
        assert!(close(r.width(), 0.02 * 400.0));
    }

    #[test]
    fn offset_bounds_use_their_own_center() {
        let b = RenderBounds::new(10, 20, 200, 300);
        let r = build_hand(&b, 0.5, 0.1, 0.0, 0.0, 0.0).rect();
        assert!(close(r.bottom, 170.0));
        assert!(close(r.center().x, 110.0));
    }

    #[test]
    fn rounded_when_any_radius_set() {
        let b = RenderBounds::square(200);
        let hand = build_hand(&b, 0.3, 0.05, 0.02, 0.01, 0.0);
        assert!(matches!(hand, HandOutline::RoundRect { .. }));
        assert_eq!(hand.outline().len(), OUTLINE_POINTS);
    }

    #[test]
    fn outlines_wind_clockwise() {
        let b = RenderBounds::square(300);
        let plain = build_hand(&b, 0.3, 0.05, 0.02, 0.0, 0.0).outline();
        let round = build_hand(&b, 0.3, 0.05, 0.02, 0.01, 0.01).outline();
        assert!(signed_area2(&plain) > 0.0);
        assert!(signed_area2(&round) > 0.0);
    }

    #[test]
    fn rounded_outline_stays_inside_rect() {
        let b = RenderBounds::square(300);
        let hand = build_hand(&b, 0.3, 0.02, 0.02, 0.5, 0.5);
        let r = hand.rect();
        for p in hand.outline() {
            assert!(p.x >= r.left - 1e-3 && p.x <= r.right + 1e-3);
            assert!(p.y >= r.top - 1e-3 && p.y <= r.bottom + 1e-3);
        }
    }

    #[test]
    #[should_panic(expected = "non-finite")]
    #[cfg(debug_assertions)]
    fn non_finite_fraction_fails_fast() {
        build_hand(&RenderBounds::square(100), f32::NAN, 0.1, 0.1, 0.0, 0.0);
    }
}
