//! Color styles, hand dimensions and the immutable style snapshot.

use embedded_graphics::{pixelcolor::Rgb565, prelude::RgbColor};

use crate::config::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorStyleId {
    Ambient,
    Red,
    Green,
    Blue,
    White,
}

impl ColorStyleId {
    pub const ALL: [ColorStyleId; 5] = [
        ColorStyleId::Ambient,
        ColorStyleId::Red,
        ColorStyleId::Green,
        ColorStyleId::Blue,
        ColorStyleId::White,
    ];

    /// Styles a user can pick for interactive mode.
    pub const SELECTABLE: [ColorStyleId; 4] =
        [ColorStyleId::Red, ColorStyleId::Green, ColorStyleId::Blue, ColorStyleId::White];

    /// Stable id, used when the selection is stored by the settings side.
    pub fn id(self) -> &'static str {
        match self {
            ColorStyleId::Ambient => "ambient_style_id",
            ColorStyleId::Red => "red_style_id",
            ColorStyleId::Green => "green_style_id",
            ColorStyleId::Blue => "blue_style_id",
            ColorStyleId::White => "white_style_id",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ColorStyleId::Ambient => "Ambient",
            ColorStyleId::Red => "Red",
            ColorStyleId::Green => "Green",
            ColorStyleId::Blue => "Blue",
            ColorStyleId::White => "White",
        }
    }

    pub const fn style(self) -> ColorStyle {
        match self {
            ColorStyleId::Ambient => ColorStyle {
                id: self,
                primary: Rgb565::WHITE,
                secondary: Rgb565::WHITE,
                background: Rgb565::BLACK,
                outer_element: Rgb565::WHITE,
                complication: ComplicationTheme { id: self, border: Rgb565::WHITE, text: Rgb565::WHITE },
            },
            ColorStyleId::Red => ColorStyle {
                id: self,
                primary: Rgb565::new(31, 19, 19),
                secondary: Rgb565::new(31, 0, 0),
                background: Rgb565::BLACK,
                outer_element: Rgb565::new(31, 38, 38),
                complication: ComplicationTheme { id: self, border: Rgb565::new(31, 19, 19), text: Rgb565::WHITE },
            },
            ColorStyleId::Green => ColorStyle {
                id: self,
                primary: Rgb565::new(19, 63, 19),
                secondary: Rgb565::new(0, 50, 0),
                background: Rgb565::BLACK,
                outer_element: Rgb565::new(24, 63, 24),
                complication: ComplicationTheme { id: self, border: Rgb565::new(19, 63, 19), text: Rgb565::WHITE },
            },
            ColorStyleId::Blue => ColorStyle {
                id: self,
                primary: Rgb565::new(12, 40, 31),
                secondary: Rgb565::new(0, 24, 31),
                background: Rgb565::BLACK,
                outer_element: Rgb565::new(19, 50, 31),
                complication: ComplicationTheme { id: self, border: Rgb565::new(12, 40, 31), text: Rgb565::WHITE },
            },
            ColorStyleId::White => ColorStyle {
                id: self,
                primary: Rgb565::WHITE,
                secondary: Rgb565::new(31, 32, 0),
                background: Rgb565::BLACK,
                outer_element: Rgb565::WHITE,
                complication: ComplicationTheme { id: self, border: Rgb565::WHITE, text: Rgb565::WHITE },
            },
        }
    }
}

/// Colors handed to every complication slot when the style changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ComplicationTheme {
    pub id: ColorStyleId,
    pub border: Rgb565,
    pub text: Rgb565,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorStyle {
    pub id: ColorStyleId,
    pub primary: Rgb565,
    pub secondary: Rgb565,
    pub background: Rgb565,
    pub outer_element: Rgb565,
    pub complication: ComplicationTheme,
}

/// Size of one hand, as fractions of the bounds width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HandDimensions {
    pub length: f32,
    pub width: f32,
    pub corner_rx: f32,
    pub corner_ry: f32,
}

impl HandDimensions {
    pub const fn new(length: f32, width: f32, corner: f32) -> Self {
        Self { length, width, corner_rx: corner, corner_ry: corner }
    }

    pub fn is_finite(&self) -> bool {
        self.length.is_finite()
            && self.width.is_finite()
            && self.corner_rx.is_finite()
            && self.corner_ry.is_finite()
    }
}

/// Everything a frame needs besides the time. Replaced wholesale, never edited.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StyleAndDimensions {
    pub active: ColorStyle,
    pub ambient: ColorStyle,
    pub hour_hand: HandDimensions,
    pub minute_hand: HandDimensions,
    pub second_hand: HandDimensions,
    pub gap_to_center: f32,
    pub number_radius: f32,
    pub pip_radius: f32,
    pub pip_gap: f32,
    pub pip_stroke: f32,
    pub draw_hour_pips: bool,
}

impl StyleAndDimensions {
    pub const DEFAULT: StyleAndDimensions = StyleAndDimensions {
        active: ColorStyleId::Red.style(),
        ambient: ColorStyleId::Ambient.style(),
        hour_hand: HandDimensions::new(
            HOUR_HAND_LENGTH_FRACTION,
            HOUR_HAND_WIDTH_FRACTION,
            HOUR_HAND_CORNER_FRACTION,
        ),
        minute_hand: HandDimensions::new(
            MINUTE_HAND_LENGTH_FRACTION,
            MINUTE_HAND_WIDTH_FRACTION,
            MINUTE_HAND_CORNER_FRACTION,
        ),
        second_hand: HandDimensions::new(
            SECOND_HAND_LENGTH_FRACTION,
            SECOND_HAND_WIDTH_FRACTION,
            SECOND_HAND_CORNER_FRACTION,
        ),
        gap_to_center: GAP_BETWEEN_HAND_AND_CENTER_FRACTION,
        number_radius: NUMBER_RADIUS_FRACTION,
        pip_radius: PIP_RADIUS_FRACTION,
        pip_gap: PIP_GAP_FRACTION,
        pip_stroke: PIP_STROKE_FRACTION,
        draw_hour_pips: DRAW_HOUR_PIPS_DEFAULT,
    };

    /// New snapshot with the user's choices applied on top of `self`.
    pub fn with_user_style(&self, user: &UserStyle) -> Self {
        let mut next = *self;
        next.active = user.color_style.style();
        next.draw_hour_pips = user.draw_hour_pips;
        next.minute_hand.length = clamp_minute_length(user.minute_hand_length);
        next
    }

    /// True when both snapshots build the same hand outlines.
    pub fn same_hand_geometry(&self, other: &Self) -> bool {
        self.hour_hand == other.hour_hand
            && self.minute_hand == other.minute_hand
            && self.second_hand == other.second_hand
            && self.gap_to_center == other.gap_to_center
    }

    /// Cheap sanity check for data coming from outside the firmware.
    pub fn is_finite(&self) -> bool {
        self.hour_hand.is_finite()
            && self.minute_hand.is_finite()
            && self.second_hand.is_finite()
            && [self.gap_to_center, self.number_radius, self.pip_radius, self.pip_gap, self.pip_stroke]
                .iter()
                .all(|v| v.is_finite())
    }
}

impl Default for StyleAndDimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The settings a user can change on the watch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UserStyle {
    pub color_style: ColorStyleId,
    pub draw_hour_pips: bool,
    pub minute_hand_length: f32,
}

impl Default for UserStyle {
    fn default() -> Self {
        UserStyle {
            color_style: ColorStyleId::Red,
            draw_hour_pips: DRAW_HOUR_PIPS_DEFAULT,
            minute_hand_length: MINUTE_HAND_LENGTH_FRACTION,
        }
    }
}

fn clamp_minute_length(v: f32) -> f32 {
    debug_assert!(v.is_finite(), "non-finite minute hand length");
    v.clamp(MINUTE_HAND_LENGTH_MIN, MINUTE_HAND_LENGTH_MAX)
}
