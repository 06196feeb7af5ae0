// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::panes::{calendar, journal, settings};
use crate::ui::sheet;
use crate::ui::tabs;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sheet(sheet::Message),
    Tabs(tabs::Message),
    Journal(journal::Message),
    Calendar(calendar::Message),
    Settings(settings::Message),
    /// The window was resized; the sheet re-projects its height.
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Forces the touch form factor (drag gestures and auto-peek) on.
    pub touch: bool,
}
