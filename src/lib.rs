// SPDX-License-Identifier: MPL-2.0
//! `vox_journal` is a voice-journal companion built with the Iced GUI
//! framework.
//!
//! Journal entries, achievements, and settings live inside a draggable
//! bottom sheet with three snap points; the crate also demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/vox_journal/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod journal;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
