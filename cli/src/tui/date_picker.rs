// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use chrono::{Datelike, Days, Months, NaiveDate};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::agenda_store::AgendaStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::Popup;
use crate::tui::dispatcher::{Action, Dispatcher};

/// Formats a picked date as `YYYY-MM-DD`, with month in 1..=12.
pub fn format_picked_date(year: i32, month: u32, day: u32) -> String {
    format!("{year}-{month:02}-{day:02}")
}

/// A signed move of the picker selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStep {
    Days(i32),
    Months(i32),
    Years(i32),
}

/// Selection state of an open date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePicker {
    date: NaiveDate,
}

impl DatePicker {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Opens at the date already in the field when it reads as `YYYY-MM-DD`, else at `today`.
    pub fn seeded(field: &str, today: NaiveDate) -> Self {
        let date = NaiveDate::parse_from_str(field.trim(), "%Y-%m-%d").unwrap_or(today);
        Self::new(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Moves the selection. Month and year moves clamp to the end of the month,
    /// and a move past the supported range leaves the selection unchanged.
    pub fn step(&mut self, step: DateStep) {
        let moved = match step {
            DateStep::Days(n) => add_days(self.date, n),
            DateStep::Months(n) => add_months(self.date, n),
            DateStep::Years(n) => n.checked_mul(12).and_then(|m| add_months(self.date, m)),
        };
        match moved {
            Some(date) => self.date = date,
            None => tracing::debug!(?step, date = %self.date, "date out of range"),
        }
    }

    /// The selection as written into the date field.
    pub fn formatted(&self) -> String {
        format_picked_date(self.date.year(), self.date.month(), self.date.day())
    }
}

fn add_days(date: NaiveDate, n: i32) -> Option<NaiveDate> {
    let days = Days::new(n.unsigned_abs().into());
    match n >= 0 {
        true => date.checked_add_days(days),
        false => date.checked_sub_days(days),
    }
}

fn add_months(date: NaiveDate, n: i32) -> Option<NaiveDate> {
    let months = Months::new(n.unsigned_abs());
    match n >= 0 {
        true => date.checked_add_months(months),
        false => date.checked_sub_months(months),
    }
}

pub type DatePickerPopup = Popup<AgendaStore, DatePickerContent>;

pub fn new_date_picker_popup() -> DatePickerPopup {
    Popup::new("Pick a date", instructions(), (40, 7), DatePickerContent)
}

pub struct DatePickerContent;

impl Component<AgendaStore> for DatePickerContent {
    fn render(&self, store: &RefCell<AgendaStore>, area: Rect, buf: &mut Buffer) {
        let Some(picker) = store.borrow().date_picker else {
            return;
        };

        let date = picker.date();
        let lines = vec![
            Line::default(),
            Line::from(vec![
                "◀ ".dark_gray(),
                format!("{}", date.year()).bold(),
                " - ".into(),
                format!("{:02}", date.month()).bold(),
                " - ".into(),
                format!("{:02}", date.day()).bold().blue(),
                " ▶".dark_gray(),
            ]),
            Line::from(date.format("%A, %B %-d").to_string().gray()),
        ];
        Paragraph::new(lines).centered().render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<AgendaStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let action = match event.code {
            KeyCode::Left | KeyCode::Char('h') => Action::MoveDatePicker(DateStep::Days(-1)),
            KeyCode::Right | KeyCode::Char('l') => Action::MoveDatePicker(DateStep::Days(1)),
            KeyCode::Up | KeyCode::Char('k') => Action::MoveDatePicker(DateStep::Months(-1)),
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDatePicker(DateStep::Months(1)),
            KeyCode::PageUp => Action::MoveDatePicker(DateStep::Years(-1)),
            KeyCode::PageDown => Action::MoveDatePicker(DateStep::Years(1)),
            KeyCode::Enter => Action::ConfirmDatePicker,
            KeyCode::Esc => Action::CancelDatePicker,
            _ => return Some(Message::Handled), // modal, swallow everything else
        };
        dispatcher.dispatch(action);
        Some(Message::Handled)
    }
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " Day ".into(),
        "<←→>".blue().bold(),
        " Month ".into(),
        "<↑↓>".blue().bold(),
        " Year ".into(),
        "<PgUp/PgDn>".blue().bold(),
        " ".into(),
    ])
}
