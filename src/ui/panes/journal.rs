// SPDX-License-Identifier: MPL-2.0
//! Journal pane: chronological entry list with a mood filter.

use crate::i18n::fluent::I18n;
use crate::journal::{Entry, Mood, Store};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::Local;
use iced::alignment::Vertical;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Element, Length};

/// Journal pane state: which mood the list is filtered to, if any.
#[derive(Debug, Default)]
pub struct State {
    filter: Option<Mood>,
}

/// Messages emitted by the journal pane.
#[derive(Debug, Clone)]
pub enum Message {
    /// `None` selects the "all moods" chip.
    FilterSelected(Option<Mood>),
}

/// Contextual data needed to render the journal pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a Store,
}

impl State {
    #[must_use]
    pub fn filter(&self) -> Option<Mood> {
        self.filter
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::FilterSelected(mood) => self.filter = mood,
        }
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .width(Length::Fill);

        content = content.push(self.filter_chips(ctx.i18n));

        let entries: Vec<&Entry> = ctx
            .store
            .entries()
            .iter()
            .rev()
            .filter(|entry| self.filter.is_none() || self.filter == Some(entry.mood))
            .collect();

        if entries.is_empty() {
            content = content.push(
                Text::new(ctx.i18n.tr("journal-empty")).size(typography::BODY),
            );
        } else {
            let mut list = Column::new().spacing(spacing::XS).width(Length::Fill);
            for entry in entries {
                list = list.push(entry_card(entry, ctx.i18n));
            }
            content = content.push(scrollable(list).height(Length::Fill));
        }

        content.into()
    }

    fn filter_chips<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let mut chips = Row::new().spacing(spacing::XXS);

        chips = chips.push(
            button(Text::new(i18n.tr("journal-filter-all")).size(typography::BODY_SM))
                .on_press(Message::FilterSelected(None))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::panes::tab_button(self.filter.is_none())),
        );

        for mood in Mood::ALL {
            chips = chips.push(
                button(Text::new(mood.glyph()).size(typography::BODY_SM))
                    .on_press(Message::FilterSelected(Some(mood)))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::panes::tab_button(self.filter == Some(mood))),
            );
        }

        chips.into()
    }
}

fn entry_card<'a>(entry: &Entry, i18n: &I18n) -> Element<'a, Message> {
    let timestamp = entry
        .recorded_at
        .with_timezone(&Local)
        .format("%H:%M · %d %b %Y")
        .to_string();

    let header = format!("{} · {}", i18n.tr(entry.mood.i18n_key()), timestamp);

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(header).size(typography::CAPTION))
        .push(Text::new(entry.summary.clone()).size(typography::BODY));

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(entry.mood.glyph()).size(typography::TITLE_SM))
        .push(details);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::panes::card)
        .into()
}
