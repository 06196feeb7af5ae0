// SPDX-License-Identifier: MPL-2.0
//! Styles for the tab bar and the content panes it hosts.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Background strip behind the tab buttons.
#[must_use]
pub fn tab_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tab button; the selected tab gets the brand background.
pub fn tab_button(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();

        let background = if selected {
            Some(Background::Color(palette.primary.base.color))
        } else if status == button::Status::Hovered {
            Some(Background::Color(palette.background.strong.color))
        } else {
            None
        };

        let text_color = if selected {
            palette.primary.base.text
        } else {
            palette.background.base.text
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Rounded card used for achievements and journal rows.
#[must_use]
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Calendar day cell. `accent` carries the mood color for days with
/// records; today gets a border ring.
pub fn day_cell(accent: Option<Color>, is_today: bool, selected: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let theme_palette = theme.extended_palette();

        let background = if selected {
            Some(Background::Color(theme_palette.primary.weak.color))
        } else {
            accent.map(|color| Background::Color(Color { a: 0.35, ..color }))
        };

        let border = if is_today {
            Border {
                color: palette::PRIMARY_500,
                width: 2.0,
                radius: radius::MD.into(),
            }
        } else {
            Border {
                radius: radius::MD.into(),
                ..Default::default()
            }
        };

        container::Style {
            background,
            border,
            ..Default::default()
        }
    }
}

/// Borderless button wrapping a calendar day cell.
#[must_use]
pub fn day_button(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: theme.extended_palette().background.base.text,
        border: Border::default(),
        ..Default::default()
    }
}
