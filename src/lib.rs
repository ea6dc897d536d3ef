#![cfg_attr(not(test), no_std)]

pub mod canvas;
pub mod clock;
pub mod complication;
pub mod config;
pub mod display;
pub mod feed;
pub mod geometry;
pub mod pips;
pub mod style;
pub mod ui;

pub use canvas::{Canvas, Paint, PaintStyle};
pub use clock::{hand_angles, ClockTime, HandAngles};
pub use complication::{Complication, ComplicationSlots, FramedSlot, SlotError, SlotId};
pub use display::GraphicsCanvas;
pub use feed::{Delivery, FeedError, StyleHub, Subscription};
pub use geometry::{build_hand, HandGeometry, HandOutline, RenderBounds};
pub use style::{ColorStyleId, StyleAndDimensions, UserStyle};
pub use ui::{AnalogFace, DrawMode, FaceState, LayerVisibility, RenderParameters, Visibility};
