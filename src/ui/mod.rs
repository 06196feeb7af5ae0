// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`sheet`] - Draggable bottom sheet with three snap points
//! - [`tabs`] - Tab bar for the content panes hosted in the sheet
//! - [`panes`] - Achievements, journal, calendar, and settings panes
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (sheet, tab bar, cards, cells)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod panes;
pub mod sheet;
pub mod styles;
pub mod tabs;
pub mod theming;
