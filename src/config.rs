//! Compile-time configuration for the analog face.
//!
//! All fractional values are relative to the width of the render bounds, so the
//! same face scales from the 240x240 GC9A01 panel up to the 466x466 CO5300 AMOLED.

// ------------------------- Capacities -------------------------

/// Max complication slots a face can hold.
pub const MAX_SLOTS: usize = 4;

/// Max live subscriptions on one `StyleHub`.
pub const MAX_SUBSCRIBERS: usize = 4;

/// Pending snapshots per subscriber before the oldest one is dropped.
pub const MAILBOX_DEPTH: usize = 4;

/// Nested `save()` depth kept by the embedded-graphics canvas.
pub const SAVE_DEPTH: usize = 8;

/// Chords used to approximate one rounded hand corner.
pub const ARC_SEGMENTS: usize = 6;

// ------------------------- Hands -------------------------

/// Uniform scale applied around the center before drawing the hands.
pub const HAND_SCALE: f32 = 1.0;

/// Stroke width (px) of the hand borders drawn in ambient mode.
pub const HAND_STROKE_WIDTH: f32 = 4.0;

pub const CENTER_CIRCLE_DIAMETER_FRACTION: f32 = 0.037_38;
pub const GAP_BETWEEN_HAND_AND_CENTER_FRACTION: f32 =
    0.018_69 + CENTER_CIRCLE_DIAMETER_FRACTION / 2.0;

pub const HOUR_HAND_LENGTH_FRACTION: f32 = 0.210_28;
pub const HOUR_HAND_WIDTH_FRACTION: f32 = 0.023_36;
pub const HOUR_HAND_CORNER_FRACTION: f32 = 0.018_69;

pub const MINUTE_HAND_LENGTH_FRACTION: f32 = 0.378_3;
pub const MINUTE_HAND_WIDTH_FRACTION: f32 = 0.016_3;
pub const MINUTE_HAND_CORNER_FRACTION: f32 = 0.018_69;

pub const SECOND_HAND_LENGTH_FRACTION: f32 = 0.373_83;
pub const SECOND_HAND_WIDTH_FRACTION: f32 = 0.009_34;
pub const SECOND_HAND_CORNER_FRACTION: f32 = 0.009_34;

// User adjustable range for the minute hand
pub const MINUTE_HAND_LENGTH_MIN: f32 = 0.10;
pub const MINUTE_HAND_LENGTH_MAX: f32 = 0.40;

// ------------------------- Outer ring -------------------------

/// Distance of the "3/6/9/12" labels from the center.
pub const NUMBER_RADIUS_FRACTION: f32 = 0.45;
/// Radius of one hour dot.
pub const PIP_RADIUS_FRACTION: f32 = 0.005_84;
/// Gap between the top of the dot ring and the bounds edge.
pub const PIP_GAP_FRACTION: f32 = 0.037_38;
/// Stroke thickness around each hour dot.
pub const PIP_STROKE_FRACTION: f32 = 0.004_67;

pub const DRAW_HOUR_PIPS_DEFAULT: bool = true;
