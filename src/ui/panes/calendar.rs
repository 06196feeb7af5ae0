// SPDX-License-Identifier: MPL-2.0
//! Calendar pane: month grid with per-day mood accents.
//!
//! The grid layout is computed by the pure [`month_grid`] function;
//! the state only tracks which month is displayed and which day is
//! selected.

use crate::i18n::fluent::I18n;
use crate::journal::Store;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::{Datelike, Local, NaiveDate};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Monday-first weeks of a month; `None` pads days outside the month.
/// An invalid month yields an empty grid.
#[must_use]
pub fn month_grid(year: i32, month: u32) -> Vec<[Option<u32>; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let Some(last_day) = days_in_month(year, month) else {
        return Vec::new();
    };

    let mut weeks = Vec::with_capacity(6);
    let mut week = [None; 7];
    let mut slot = first.weekday().num_days_from_monday() as usize;

    for day in 1..=last_day {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
}

/// Calendar pane state: displayed month and selected day.
#[derive(Debug)]
pub struct State {
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
}

/// Messages emitted by the calendar pane.
#[derive(Debug, Clone)]
pub enum Message {
    PreviousMonth,
    NextMonth,
    DaySelected(u32),
}

/// Contextual data needed to render the calendar pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a Store,
    pub today: NaiveDate,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl State {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
            selected: None,
        }
    }

    #[must_use]
    pub fn displayed_month(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    #[must_use]
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::PreviousMonth => {
                if self.month == 1 {
                    self.year -= 1;
                    self.month = 12;
                } else {
                    self.month -= 1;
                }
            }
            Message::NextMonth => {
                if self.month == 12 {
                    self.year += 1;
                    self.month = 1;
                } else {
                    self.month += 1;
                }
            }
            Message::DaySelected(day) => {
                // Selecting the selected day again clears the selection.
                let date = NaiveDate::from_ymd_opt(self.year, self.month, day);
                self.selected = if self.selected == date { None } else { date };
            }
        }
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let summaries = ctx.store.month_summaries(self.year, self.month);

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                button(Text::new("‹").size(typography::TITLE_MD))
                    .on_press(Message::PreviousMonth)
                    .style(styles::panes::day_button),
            )
            .push(
                Container::new(
                    Text::new(format!(
                        "{} {}",
                        ctx.i18n.tr(&format!("month-{}", self.month)),
                        self.year
                    ))
                    .size(typography::TITLE_SM),
                )
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            )
            .push(
                button(Text::new("›").size(typography::TITLE_MD))
                    .on_press(Message::NextMonth)
                    .style(styles::panes::day_button),
            );

        let mut weekday_row = Row::new().spacing(spacing::XXS);
        for key in [
            "weekday-mon",
            "weekday-tue",
            "weekday-wed",
            "weekday-thu",
            "weekday-fri",
            "weekday-sat",
            "weekday-sun",
        ] {
            weekday_row = weekday_row.push(
                Container::new(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
                    .width(Length::Fixed(sizing::CALENDAR_CELL))
                    .align_x(Horizontal::Center),
            );
        }

        let mut grid = Column::new().spacing(spacing::XXS);
        for week in month_grid(self.year, self.month) {
            let mut row = Row::new().spacing(spacing::XXS);
            for cell in week {
                row = row.push(self.day_cell(cell, &summaries, ctx.today));
            }
            grid = grid.push(row);
        }

        let mut content = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .push(header)
            .push(weekday_row)
            .push(grid);

        if let Some(details) = self.selected_day_details(&ctx) {
            content = content.push(details);
        }

        content.into()
    }

    fn day_cell<'a>(
        &self,
        cell: Option<u32>,
        summaries: &std::collections::HashMap<u32, crate::journal::DaySummary>,
        today: NaiveDate,
    ) -> Element<'a, Message> {
        let Some(day) = cell else {
            return Container::new(Text::new(""))
                .width(Length::Fixed(sizing::CALENDAR_CELL))
                .height(Length::Fixed(sizing::CALENDAR_CELL))
                .into();
        };

        let date = NaiveDate::from_ymd_opt(self.year, self.month, day);
        let accent = summaries.get(&day).map(|s| super::mood_color(s.mood));
        let is_today = date == Some(today);
        let is_selected = date.is_some() && date == self.selected;

        let cell = Container::new(Text::new(day.to_string()).size(typography::BODY_SM))
            .width(Length::Fixed(sizing::CALENDAR_CELL))
            .height(Length::Fixed(sizing::CALENDAR_CELL))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::panes::day_cell(accent, is_today, is_selected));

        button(cell)
            .on_press(Message::DaySelected(day))
            .padding(0.0)
            .style(styles::panes::day_button)
            .into()
    }

    fn selected_day_details<'a>(&self, ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
        let selected = self.selected?;
        if (selected.year(), selected.month()) != (self.year, self.month) {
            return None;
        }

        let mut list = Column::new().spacing(spacing::XS).width(Length::Fill);
        let mut empty = true;
        for entry in ctx.store.day_entries(selected) {
            empty = false;
            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(Text::new(entry.mood.glyph()).size(typography::TITLE_SM))
                .push(
                    Text::new(entry.summary.clone()).size(typography::BODY),
                );
            list = list.push(
                Container::new(row)
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::panes::card),
            );
        }

        if empty {
            list = list.push(Text::new(ctx.i18n.tr("calendar-no-entries")).size(typography::BODY));
        }
        Some(list.into())
    }
}
