// SPDX-License-Identifier: MPL-2.0
//! Settings pane: theme mode, sheet behavior, and display language.
//!
//! The pane holds no state of its own; every choice is forwarded to the
//! application, which owns the configuration and persists it.

use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, toggler, Column, Row, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// Messages emitted by the settings pane.
#[derive(Debug, Clone)]
pub enum Message {
    ThemeModeSelected(ThemeMode),
    AutoPeekToggled(bool),
    LanguageSelected(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ThemeModeChanged(ThemeMode),
    AutoPeekChanged(bool),
    LanguageChanged(LanguageIdentifier),
}

/// Contextual data needed to render the settings pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
}

/// Process a settings message into the event the application applies.
pub fn update(message: Message) -> Event {
    match message {
        Message::ThemeModeSelected(mode) => Event::ThemeModeChanged(mode),
        Message::AutoPeekToggled(enabled) => Event::AutoPeekChanged(enabled),
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
    }
}

/// Render the settings pane.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let theme_section = build_theme_section(&ctx);
    let sheet_section = build_sheet_section(&ctx);
    let language_section = build_language_section(&ctx);

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .width(Length::Fill)
        .push(theme_section)
        .push(sheet_section)
        .push(language_section)
        .into()
}

fn build_theme_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.config.general.theme_mode;
    let mut row = Row::new().spacing(spacing::XS);

    for (mode, key) in [
        (ThemeMode::Light, "settings-theme-light"),
        (ThemeMode::Dark, "settings-theme-dark"),
        (ThemeMode::System, "settings-theme-system"),
    ] {
        row = row.push(
            button(Text::new(ctx.i18n.tr(key)).size(typography::BODY_SM))
                .on_press(Message::ThemeModeSelected(mode))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::panes::tab_button(mode == current)),
        );
    }

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings-theme-label")).size(typography::BODY))
        .push(row)
        .into()
}

fn build_sheet_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let auto_peek = toggler(ctx.config.auto_peek_enabled())
        .label(ctx.i18n.tr("settings-auto-peek-label"))
        .on_toggle(Message::AutoPeekToggled);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings-sheet-label")).size(typography::BODY))
        .push(auto_peek)
        .into()
}

fn build_language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);
    column = column.push(Text::new(ctx.i18n.tr("settings-language-label")).size(typography::BODY));

    for locale in &ctx.i18n.available_locales {
        let translated = ctx.i18n.tr(&format!("language-name-{locale}"));
        let label = if translated.starts_with("MISSING:") {
            locale.to_string()
        } else {
            format!("{translated} ({locale})")
        };

        let selected = ctx.i18n.current_locale() == locale;
        column = column.push(
            button(Text::new(label).size(typography::BODY_SM))
                .on_press(Message::LanguageSelected(locale.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::panes::tab_button(selected)),
        );
    }

    column.into()
}
