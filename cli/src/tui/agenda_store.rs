// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use agenda_core::{Event, EventDraft, EventStore};
use chrono::NaiveDate;

use crate::event_formatter::EventFormatter;
use crate::tui::date_picker::DatePicker;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::sort_dialog::SortDialog;

/// State behind the agenda screen: the events, the form and what the output pane shows.
#[derive(Debug)]
pub struct AgendaStore {
    pub events: EventStore,
    pub form: FormData,
    pub view: DisplayedEvents,
    pub date_picker: Option<DatePicker>,
    pub sort_dialog: SortDialog,

    /// Local date the date picker opens at when the field holds no date
    pub today: NaiveDate,

    /// Whether the user asked to leave
    pub exit: bool,
}

impl AgendaStore {
    pub fn new(events: EventStore, today: NaiveDate) -> Self {
        Self {
            events,
            form: FormData::default(),
            view: DisplayedEvents::All,
            date_picker: None,
            sort_dialog: SortDialog::default(),
            today,
            exit: false,
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            that.borrow_mut().apply(action);
        }));
        dispatcher.register(callback);
    }

    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::UpdateTitle(v) => self.form.title = v.clone(),
            Action::UpdateDate(v) => self.form.date = v.clone(),
            Action::UpdateDescription(v) => self.form.description = v.clone(),
            Action::UpdateFilter(v) => self.form.filter = v.clone(),

            Action::OpenDatePicker => {
                self.date_picker = Some(DatePicker::seeded(&self.form.date, self.today));
            }
            Action::MoveDatePicker(step) => {
                if let Some(picker) = &mut self.date_picker {
                    picker.step(*step);
                }
            }
            Action::ConfirmDatePicker => {
                if let Some(picker) = self.date_picker.take() {
                    self.form.date = picker.formatted();
                }
            }
            Action::CancelDatePicker => self.date_picker = None,

            Action::OpenSortDialog => self.sort_dialog.open(),
            Action::SelectNextSortOption => self.sort_dialog.select_next(),
            Action::SelectPrevSortOption => self.sort_dialog.select_prev(),
            Action::ConfirmSortOption => {
                if let Some((key, order)) = self.sort_dialog.confirm() {
                    tracing::debug!(%key, %order, "sorting events");
                    self.view = DisplayedEvents::Derived(self.events.sort(key, order));
                }
            }
            Action::CancelSortDialog => self.sort_dialog.cancel(),

            Action::SaveEvent => self.save(),
            Action::ApplyFilter => {
                tracing::debug!(pattern = %self.form.filter, "filtering events");
                self.view = DisplayedEvents::Derived(self.events.filter(&self.form.filter));
            }
            Action::ClearFilter => {
                self.form.filter.clear();
                self.view = DisplayedEvents::All;
            }
            Action::Exit => self.exit = true,
        }
    }

    fn save(&mut self) {
        let draft = EventDraft::new(
            self.form.title.clone(),
            self.form.date.clone(),
            self.form.description.clone(),
        );
        match self.events.create(draft) {
            Ok(event) => {
                tracing::debug!(id = event.id(), "event saved");
                self.form.title.clear();
                self.form.date.clear();
                self.form.description.clear();
                self.view = DisplayedEvents::All;
            }
            Err(e) => tracing::debug!(error = %e, "event not saved"),
        }
    }

    /// Whether a popup currently owns the keyboard.
    pub fn modal_open(&self) -> bool {
        self.date_picker.is_some() || self.sort_dialog.is_open()
    }

    /// Events shown in the output pane, in display order.
    pub fn displayed(&self) -> &[Event] {
        match &self.view {
            DisplayedEvents::All => self.events.events(),
            DisplayedEvents::Derived(events) => events,
        }
    }

    /// Text of the output pane.
    pub fn rendered_text(&self) -> String {
        EventFormatter::new().format(self.displayed()).to_string()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormData {
    pub title: String,
    pub date: String,
    pub description: String,
    pub filter: String,
}

/// What the output pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayedEvents {
    /// The whole store in insertion order, tracking new events.
    All,

    /// A filtered or sorted snapshot of the store.
    Derived(Vec<Event>),
}
