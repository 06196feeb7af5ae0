// SPDX-License-Identifier: MPL-2.0
//! Content panes hosted inside the bottom sheet, one per tab.
//!
//! - [`achievements`] - progress cards computed from the journal store
//! - [`journal`] - chronological entry list with a mood filter
//! - [`calendar`] - month grid with per-day mood accents
//! - [`settings`] - theme, sheet behavior, and language preferences

pub mod achievements;
pub mod calendar;
pub mod journal;
pub mod settings;

use crate::journal::Mood;
use crate::ui::design_tokens::palette;
use iced::Color;

/// Accent color associated with a mood, shared by the calendar cells
/// and the journal entry cards.
#[must_use]
pub fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Joy => palette::MOOD_JOY,
        Mood::Sadness => palette::MOOD_SADNESS,
        Mood::Anger => palette::MOOD_ANGER,
        Mood::Fear => palette::MOOD_FEAR,
        Mood::Surprise => palette::MOOD_SURPRISE,
        Mood::Neutral => palette::MOOD_NEUTRAL,
    }
}
