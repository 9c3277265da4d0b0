// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use agenda_core::{SortKey, SortOrder};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::agenda_store::AgendaStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::Popup;
use crate::tui::dispatcher::{Action, Dispatcher};

/// Two-step choice of sort criterion, then direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortDialog {
    #[default]
    Closed,
    ChoosingKey {
        selected: SortKey,
    },
    ChoosingOrder {
        key: SortKey,
        selected: SortOrder,
    },
}

impl SortDialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, SortDialog::Closed)
    }

    /// Starts over at the criterion step.
    pub fn open(&mut self) {
        *self = SortDialog::ChoosingKey {
            selected: SortKey::default(),
        };
    }

    pub fn select_next(&mut self) {
        self.select_by(1);
    }

    pub fn select_prev(&mut self) {
        self.select_by(-1);
    }

    fn select_by(&mut self, offset: isize) {
        match self {
            SortDialog::Closed => {}
            SortDialog::ChoosingKey { selected } => {
                *selected = cycle(&SortKey::ALL, *selected, offset)
            }
            SortDialog::ChoosingOrder { selected, .. } => {
                *selected = cycle(&SortOrder::ALL, *selected, offset)
            }
        }
    }

    /// Accepts the current selection.
    ///
    /// Moves from the criterion step to the direction step, and returns the
    /// full choice when leaving the direction step.
    pub fn confirm(&mut self) -> Option<(SortKey, SortOrder)> {
        match *self {
            SortDialog::Closed => None,
            SortDialog::ChoosingKey { selected } => {
                *self = SortDialog::ChoosingOrder {
                    key: selected,
                    selected: SortOrder::default(),
                };
                None
            }
            SortDialog::ChoosingOrder { key, selected } => {
                *self = SortDialog::Closed;
                Some((key, selected))
            }
        }
    }

    pub fn cancel(&mut self) {
        *self = SortDialog::Closed;
    }

    /// The prompt, the option labels and the selected index of the current step.
    fn options(&self) -> Option<(&'static str, Vec<String>, usize)> {
        match *self {
            SortDialog::Closed => None,
            SortDialog::ChoosingKey { selected } => Some((
                "Sort by",
                SortKey::ALL.iter().map(ToString::to_string).collect(),
                index_of(&SortKey::ALL, selected),
            )),
            SortDialog::ChoosingOrder { key, selected } => Some((
                match key {
                    SortKey::Date => "Date order",
                    SortKey::Title => "Title order",
                },
                SortOrder::ALL.iter().map(ToString::to_string).collect(),
                index_of(&SortOrder::ALL, selected),
            )),
        }
    }
}

fn index_of<T: PartialEq>(values: &[T], value: T) -> usize {
    values.iter().position(|v| *v == value).unwrap_or(0)
}

fn cycle<T: PartialEq + Copy>(values: &[T], current: T, offset: isize) -> T {
    let len = values.len() as isize;
    let index = (index_of(values, current) as isize + offset).rem_euclid(len);
    values[index as usize]
}

pub type SortDialogPopup = Popup<AgendaStore, SortDialogContent>;

pub fn new_sort_dialog_popup() -> SortDialogPopup {
    Popup::new("Sort events", instructions(), (32, 6), SortDialogContent)
}

pub struct SortDialogContent;

impl Component<AgendaStore> for SortDialogContent {
    fn render(&self, store: &RefCell<AgendaStore>, area: Rect, buf: &mut Buffer) {
        let Some((prompt, options, selected)) = store.borrow().sort_dialog.options() else {
            return;
        };

        let mut lines = vec![Line::from(prompt.bold())];
        for (i, option) in options.into_iter().enumerate() {
            let line = match i == selected {
                true => Line::from(vec!["› ".blue().bold(), option.blue().bold()]),
                false => Line::from(vec!["  ".into(), option.into()]),
            };
            lines.push(line);
        }
        Paragraph::new(lines).render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<AgendaStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let action = match event.code {
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => Action::SelectPrevSortOption,
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => Action::SelectNextSortOption,
            KeyCode::Enter => Action::ConfirmSortOption,
            KeyCode::Esc => Action::CancelSortDialog,
            _ => return Some(Message::Handled), // modal, swallow everything else
        };
        dispatcher.dispatch(action);
        Some(Message::Handled)
    }
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " Select ".into(),
        "<↑↓>".blue().bold(),
        " OK ".into(),
        "<Enter>".blue().bold(),
        " ".into(),
    ])
}
