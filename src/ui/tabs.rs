// SPDX-License-Identifier: MPL-2.0
//! Tab bar for the content panes hosted inside the bottom sheet.
//!
//! Four fixed tabs: achievements, journal history, calendar, and
//! settings. Selection is the only state; the panes themselves live in
//! [`crate::ui::panes`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Identifier of one content tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabId {
    #[default]
    Achievements,
    Journal,
    Calendar,
    Settings,
}

impl TabId {
    /// All tabs in display order.
    pub const ALL: [TabId; 4] = [
        TabId::Achievements,
        TabId::Journal,
        TabId::Calendar,
        TabId::Settings,
    ];

    /// Fluent key for the tab label.
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            TabId::Achievements => "tab-achievements",
            TabId::Journal => "tab-journal",
            TabId::Calendar => "tab-calendar",
            TabId::Settings => "tab-settings",
        }
    }

    /// Glyph shown above the label.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            TabId::Achievements => "🏆",
            TabId::Journal => "📖",
            TabId::Calendar => "📅",
            TabId::Settings => "⚙",
        }
    }
}

/// Tab bar state: which tab is active.
#[derive(Debug, Default)]
pub struct State {
    active: TabId,
}

/// Messages emitted by the tab bar.
#[derive(Debug, Clone)]
pub enum Message {
    Selected(TabId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Selected(TabId),
}

/// Contextual data needed to render the tab bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    #[must_use]
    pub fn active(&self) -> TabId {
        self.active
    }

    /// Process a tab bar message. Re-selecting the active tab is a
    /// no-op so the parent does not rebuild the pane for nothing.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Selected(tab) => {
                if tab == self.active {
                    Event::None
                } else {
                    self.active = tab;
                    Event::Selected(tab)
                }
            }
        }
    }

    /// Render the tab bar row.
    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let mut row = Row::new().width(Length::Fill).align_y(Vertical::Center);

        for tab in TabId::ALL {
            let selected = tab == self.active;

            let label = Column::new()
                .align_x(Horizontal::Center)
                .spacing(spacing::XXS)
                .push(Text::new(tab.glyph()).size(typography::TITLE_SM))
                .push(Text::new(ctx.i18n.tr(tab.label_key())).size(typography::CAPTION));

            row = row.push(
                button(
                    Container::new(label)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .on_press(Message::Selected(tab))
                .padding(spacing::XS)
                .width(Length::FillPortion(1))
                .style(styles::panes::tab_button(selected)),
            );
        }

        Container::new(row)
            .width(Length::Fill)
            .height(sizing::TAB_BAR_HEIGHT)
            .style(styles::panes::tab_bar)
            .into()
    }
}
