// SPDX-License-Identifier: MPL-2.0
//! Achievements pane: a grid of progress cards.
//!
//! The pane is stateless; progress is re-evaluated from the store on
//! every render and the cards emit no messages.

use crate::i18n::fluent::I18n;
use crate::journal::achievements::{self, Progress};
use crate::journal::Store;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::alignment::Horizontal;
use iced::widget::{progress_bar, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the achievements pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a Store,
    /// Anchors the streak computation.
    pub today: NaiveDate,
}

/// Render the achievements grid, two cards per row.
pub fn view<'a, M: 'a>(ctx: &ViewContext<'a>) -> Element<'a, M> {
    let progress = achievements::evaluate(ctx.store, ctx.today);

    let mut grid = Column::new().spacing(spacing::SM).width(Length::Fill);
    for pair in progress.chunks(2) {
        let mut row = Row::new().spacing(spacing::SM).width(Length::Fill);
        for item in pair {
            row = row.push(card(ctx.i18n, item));
        }
        grid = grid.push(row);
    }

    Container::new(grid).padding(spacing::MD).into()
}

fn card<'a, M: 'a>(i18n: &I18n, progress: &Progress) -> Element<'a, M> {
    let achievement = progress.achievement;

    let status: Element<'a, M> = if progress.unlocked {
        Text::new(i18n.tr("achievement-unlocked"))
            .size(typography::CAPTION)
            .into()
    } else {
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(progress_bar(
                0.0..=achievement.goal as f32,
                progress.current as f32,
            ))
            .push(
                Text::new(format!("{}/{}", progress.current, achievement.goal))
                    .size(typography::CAPTION),
            )
            .into()
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(achievement.icon).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr(achievement.title_key)).size(typography::BODY))
        .push(Text::new(i18n.tr(achievement.description_key)).size(typography::CAPTION))
        .push(status);

    Container::new(content)
        .width(Length::Fixed(sizing::ACHIEVEMENT_CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::panes::card)
        .into()
}
