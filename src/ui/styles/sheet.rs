// SPDX-License-Identifier: MPL-2.0
//! Styles for the bottom sheet, its handle, and the dimming overlay.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Full-screen dimming layer behind the sheet.
#[must_use]
pub fn overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// The sheet body: surface color, rounded top corners, upward shadow.
#[must_use]
pub fn body(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: iced::border::Radius {
                top_left: radius::SHEET,
                top_right: radius::SHEET,
                bottom_right: radius::NONE,
                bottom_left: radius::NONE,
            },
            ..Default::default()
        },
        shadow: shadow::SHEET,
        ..Default::default()
    }
}

/// Pill-shaped indicator centered in the handle band.
#[must_use]
pub fn handle_indicator(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.strong.color.into()),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Invisible button covering the handle band (tap target).
#[must_use]
pub fn handle_button(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: theme.extended_palette().background.base.text,
        border: Border::default(),
        ..Default::default()
    }
}
