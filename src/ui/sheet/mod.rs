// SPDX-License-Identifier: MPL-2.0
//! Draggable bottom sheet with three snap points.
//!
//! The sheet rests in one of three positions (closed, a thin "peek"
//! strip, or fully open) and moves between them through handle taps,
//! programmatic requests, or (on touch form factors) drag gestures.
//! The module splits along the same lines as the behavior:
//!
//! - [`position`] - snap points and the pure snap decision
//! - [`drag`] - drag session bookkeeping and live height tracking
//! - [`component`] - the presentation state machine and its view
//!
//! [`component::State`] is the single owner of the sheet position and
//! the live height; everything else goes through its operations and the
//! [`component::Event`]s it emits.

pub mod component;
pub mod drag;
pub mod position;

pub use component::{Event, FormFactor, Message, State};
pub use position::SheetPosition;
