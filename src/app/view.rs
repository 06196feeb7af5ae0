// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The home page sits at the back; the bottom sheet (overlay, body, and
//! tabbed content) is stacked on top of it.

use super::Message;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::journal::Store;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::panes::{achievements, calendar, journal, settings};
use crate::ui::sheet::{self, FormFactor};
use crate::ui::tabs::{self, TabId};
use chrono::Local;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub sheet: &'a sheet::State,
    pub tabs: &'a tabs::State,
    pub journal_pane: &'a journal::State,
    pub calendar_pane: &'a calendar::State,
    pub store: &'a Store,
    /// Translation keys for degraded-startup warnings.
    pub warnings: &'a [String],
}

/// Renders the home page with the bottom sheet stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = sheet_content(&ctx);
    let sheet_layer = ctx.sheet.view(content, Message::Sheet);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_home(&ctx))
        .push(sheet_layer)
        .into()
}

fn view_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("home-tagline")).size(typography::BODY));

    // Touch form factors open the sheet with the swipe-up gesture; the
    // desktop gets an explicit button instead.
    if ctx.sheet.form_factor() == FormFactor::Desktop {
        column = column.push(
            button(Text::new(ctx.i18n.tr("home-open-button")))
                .on_press(Message::Sheet(sheet::Message::HandleTapped))
                .padding([spacing::XS, spacing::MD]),
        );
    }

    for key in ctx.warnings {
        column = column.push(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn sheet_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tab_bar = ctx
        .tabs
        .view(tabs::ViewContext { i18n: ctx.i18n })
        .map(Message::Tabs);

    let today = Local::now().date_naive();
    let pane: Element<'a, Message> = match ctx.tabs.active() {
        TabId::Achievements => achievements::view(&achievements::ViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
            today,
        }),
        TabId::Journal => ctx
            .journal_pane
            .view(journal::ViewContext {
                i18n: ctx.i18n,
                store: ctx.store,
            })
            .map(Message::Journal),
        TabId::Calendar => ctx
            .calendar_pane
            .view(calendar::ViewContext {
                i18n: ctx.i18n,
                store: ctx.store,
                today,
            })
            .map(Message::Calendar),
        TabId::Settings => settings::view(settings::ViewContext {
            i18n: ctx.i18n,
            config: ctx.config,
        })
        .map(Message::Settings),
    };

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0.0, spacing::XS])
        .push(tab_bar)
        .push(pane)
        .into()
}
