// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::agenda_store::AgendaStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, ButtonRow, Form, FormItem, Input};
use crate::tui::component_page::SinglePage;
use crate::tui::date_picker::{DatePickerPopup, new_date_picker_popup};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::sort_dialog::{SortDialogPopup, new_sort_dialog_popup};

/// The agenda screen, with its popups drawn on top while open.
pub struct AgendaView {
    page: SinglePage<AgendaStore, AgendaBody>,
    date_picker: DatePickerPopup,
    sort_dialog: SortDialogPopup,
}

impl AgendaView {
    pub fn new() -> Self {
        Self {
            page: SinglePage::new("Agenda", instructions(), AgendaBody::new()),
            date_picker: new_date_picker_popup(),
            sort_dialog: new_sort_dialog_popup(),
        }
    }

    fn shortcut(event: KeyEvent) -> Option<Action> {
        if !event.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }

        match event.code {
            KeyCode::Char('s') => Some(Action::SaveEvent),
            KeyCode::Char('f') => Some(Action::ApplyFilter),
            KeyCode::Char('o') => Some(Action::OpenSortDialog),
            KeyCode::Char('l') => Some(Action::ClearFilter),
            KeyCode::Char('c') => Some(Action::Exit),
            _ => None,
        }
    }
}

impl Component<AgendaStore> for AgendaView {
    fn render(&self, store: &RefCell<AgendaStore>, area: Rect, buf: &mut Buffer) {
        self.page.render(store, area, buf);

        if store.borrow().date_picker.is_some() {
            self.date_picker.render(store, area, buf);
        }
        if store.borrow().sort_dialog.is_open() {
            self.sort_dialog.render(store, area, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<AgendaStore>, area: Rect) -> Option<(u16, u16)> {
        if store.borrow().modal_open() {
            return None;
        }
        self.page.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let (picking, sorting) = {
            let store = store.borrow();
            (store.date_picker.is_some(), store.sort_dialog.is_open())
        };

        let msg = if picking {
            self.date_picker.on_key(dispatcher, store, area, event)
        } else if sorting {
            self.sort_dialog.on_key(dispatcher, store, area, event)
        } else if let Some(action) = Self::shortcut(event) {
            dispatcher.dispatch(action);
            Some(Message::CursorUpdated)
        } else {
            self.page.on_key(dispatcher, store, area, event)
        };

        match store.borrow().exit {
            true => Some(Message::Exit),
            false => msg,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AgendaStore>) {
        self.page.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AgendaStore>) {
        self.page.deactivate(dispatcher, store);
    }
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " Save ".into(),
        "<^S>".blue().bold(),
        " Filter ".into(),
        "<^F>".blue().bold(),
        " Sort ".into(),
        "<^O>".blue().bold(),
        " Clear ".into(),
        "<^L>".blue().bold(),
        " Scroll ".into(),
        "<PgUp/PgDn>".blue().bold(),
        " Quit ".into(),
        "<Esc>".blue().bold(),
        " ".into(),
    ])
}

/// Form on the left, rendered events on the right.
struct AgendaBody {
    form: Form<AgendaStore, Box<dyn FormItem<AgendaStore>>>,
    output: OutputPane,
}

impl AgendaBody {
    fn new() -> Self {
        Self {
            form: new_agenda_form(),
            output: OutputPane::default(),
        }
    }

    fn layout(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .spacing(1)
            .areas(area)
    }
}

impl Component<AgendaStore> for AgendaBody {
    fn render(&self, store: &RefCell<AgendaStore>, area: Rect, buf: &mut Buffer) {
        let [form_area, output_area] = Self::layout(area);
        self.form.render(store, form_area, buf);
        self.output.render(store, output_area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<AgendaStore>, area: Rect) -> Option<(u16, u16)> {
        let [form_area, _] = Self::layout(area);
        self.form.get_cursor_position(store, form_area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let [form_area, output_area] = Self::layout(area);
        if let Some(msg) = self.output.on_key(dispatcher, store, output_area, event) {
            return Some(msg);
        }
        self.form.on_key(dispatcher, store, form_area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AgendaStore>) {
        self.form.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AgendaStore>) {
        self.form.deactivate(dispatcher, store);
    }
}

fn new_agenda_form() -> Form<AgendaStore, Box<dyn FormItem<AgendaStore>>> {
    let buttons = [
        ("Save", Action::SaveEvent),
        ("Filter", Action::ApplyFilter),
        ("Sort", Action::OpenSortDialog),
        ("Clear", Action::ClearFilter),
        ("Exit", Action::Exit),
    ];

    let items: Vec<Box<dyn FormItem<AgendaStore>>> = vec![
        Box::new(Input::<AgendaStore, TitleAccess>::new("Title")),
        Box::new(
            Input::<AgendaStore, DateAccess>::new("Date (Enter to pick)")
                .on_enter(Action::OpenDatePicker),
        ),
        Box::new(Input::<AgendaStore, DescriptionAccess>::new("Description")),
        Box::new(
            Input::<AgendaStore, FilterAccess>::new("Filter (Enter to apply)")
                .on_enter(Action::ApplyFilter),
        ),
        Box::new(ButtonRow::<AgendaStore>::new(
            "Actions",
            buttons
                .into_iter()
                .map(|(label, action)| (label.to_owned(), action))
                .collect(),
        )),
    ];
    Form::new(items)
}

macro_rules! field_access {
    ($acc: ident, $field: ident, $action: ident) => {
        struct $acc;

        impl Access<AgendaStore, String> for $acc {
            fn get(store: &RefCell<AgendaStore>) -> String {
                store.borrow().form.$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::$action(value));
                true
            }
        }
    };
}

field_access!(TitleAccess, title, UpdateTitle);
field_access!(DateAccess, date, UpdateDate);
field_access!(DescriptionAccess, description, UpdateDescription);
field_access!(FilterAccess, filter, UpdateFilter);

/// Read-only pane with the rendered events, scrolled by page keys.
#[derive(Debug, Default)]
struct OutputPane {
    scroll: u16,
}

impl OutputPane {
    fn block() -> Block<'static> {
        Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(" Events ".bold()))
            .gray()
    }

    fn paragraph(text: String) -> Paragraph<'static> {
        Paragraph::new(text).wrap(Wrap { trim: false })
    }

    /// Scroll offset limited so the last wrapped row stays at the bottom of `inner`.
    fn clamped(&self, text: &str, inner: Rect) -> u16 {
        let rows = Self::paragraph(text.to_owned()).line_count(inner.width);
        let max = rows.saturating_sub(usize::from(inner.height));
        self.scroll.min(u16::try_from(max).unwrap_or(u16::MAX))
    }
}

impl Component<AgendaStore> for OutputPane {
    fn render(&self, store: &RefCell<AgendaStore>, area: Rect, buf: &mut Buffer) {
        let text = store.borrow().rendered_text();
        let block = Self::block();
        let inner = block.inner(area);
        let scroll = self.clamped(&text, inner);
        block.render(area, buf);
        Self::paragraph(text).scroll((scroll, 0)).render(inner, buf);
    }

    fn on_key(
        &mut self,
        _dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let inner = Self::block().inner(area);
        let page = inner.height.max(1);
        let scroll = match event.code {
            KeyCode::PageUp => self.scroll.saturating_sub(page),
            KeyCode::PageDown => self.scroll.saturating_add(page),
            _ => return None,
        };

        self.scroll = scroll;
        self.scroll = self.clamped(&store.borrow().rendered_text(), inner);
        Some(Message::Handled)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use agenda_core::{EventStore, SequentialGenerator};
    use chrono::NaiveDate;

    use super::*;

    fn setup() -> (Rc<RefCell<AgendaStore>>, Dispatcher, AgendaView) {
        let events = EventStore::new(Box::new(SequentialGenerator::new()));
        let today = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap();
        let store = Rc::new(RefCell::new(AgendaStore::new(events, today)));
        let mut dispatcher = Dispatcher::new();
        AgendaStore::register_to(store.clone(), &mut dispatcher);

        let mut view = AgendaView::new();
        view.activate(&mut dispatcher, &store);
        (store, dispatcher, view)
    }

    const AREA: Rect = Rect::new(0, 0, 100, 30);

    fn press(
        view: &mut AgendaView,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        code: KeyCode,
    ) -> Option<Message> {
        view.on_key(dispatcher, store, AREA, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(
        view: &mut AgendaView,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        c: char,
    ) -> Option<Message> {
        let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        view.on_key(dispatcher, store, AREA, event)
    }

    fn type_text(
        view: &mut AgendaView,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        text: &str,
    ) {
        for c in text.chars() {
            press(view, dispatcher, store, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_type_pick_date_and_save() {
        let (store, mut dispatcher, mut view) = setup();
        type_text(&mut view, &mut dispatcher, &store, "standup");
        press(&mut view, &mut dispatcher, &store, KeyCode::Tab);

        press(&mut view, &mut dispatcher, &store, KeyCode::Enter);
        assert!(store.borrow().date_picker.is_some());
        assert_eq!(view.get_cursor_position(&store, AREA), None);

        press(&mut view, &mut dispatcher, &store, KeyCode::Right);
        press(&mut view, &mut dispatcher, &store, KeyCode::Enter);
        assert_eq!(store.borrow().form.date, "2025-03-07");

        ctrl(&mut view, &mut dispatcher, &store, 's');
        let store = store.borrow();
        assert_eq!(store.events.len(), 1);
        assert_eq!(
            store.rendered_text(),
            "Title: Standup\nDate: 2025-03-07\nDescription: No description"
        );
    }

    #[test]
    fn test_popup_takes_keys_first() {
        let (store, mut dispatcher, mut view) = setup();
        ctrl(&mut view, &mut dispatcher, &store, 'o');
        assert!(store.borrow().sort_dialog.is_open());

        // Esc closes the dialog instead of leaving
        assert_eq!(
            press(&mut view, &mut dispatcher, &store, KeyCode::Esc),
            Some(Message::Handled)
        );
        assert!(!store.borrow().sort_dialog.is_open());
        assert!(!store.borrow().exit);

        press(&mut view, &mut dispatcher, &store, KeyCode::Char('x'));
        assert_eq!(store.borrow().form.title, "x");
    }

    #[test]
    fn test_exit_paths() {
        let (store, mut dispatcher, mut view) = setup();
        assert_eq!(
            press(&mut view, &mut dispatcher, &store, KeyCode::Esc),
            Some(Message::Exit)
        );

        let (store, mut dispatcher, mut view) = setup();
        assert_eq!(
            ctrl(&mut view, &mut dispatcher, &store, 'c'),
            Some(Message::Exit)
        );

        let (store, mut dispatcher, mut view) = setup();
        for _ in 0..4 {
            press(&mut view, &mut dispatcher, &store, KeyCode::Tab);
        }
        press(&mut view, &mut dispatcher, &store, KeyCode::Left); // Exit button
        assert_eq!(
            press(&mut view, &mut dispatcher, &store, KeyCode::Enter),
            Some(Message::Exit)
        );
    }

    #[test]
    fn test_filter_field_applies_on_enter() {
        let (store, mut dispatcher, mut view) = setup();
        type_text(&mut view, &mut dispatcher, &store, "alpha");
        press(&mut view, &mut dispatcher, &store, KeyCode::Tab);
        type_text(&mut view, &mut dispatcher, &store, "2025-01-01");
        ctrl(&mut view, &mut dispatcher, &store, 's');

        press(&mut view, &mut dispatcher, &store, KeyCode::Up); // back to title
        for _ in 0..3 {
            press(&mut view, &mut dispatcher, &store, KeyCode::Tab);
        }
        type_text(&mut view, &mut dispatcher, &store, "zzz");
        press(&mut view, &mut dispatcher, &store, KeyCode::Enter);
        assert_eq!(store.borrow().rendered_text(), "No matching events.");

        ctrl(&mut view, &mut dispatcher, &store, 'l');
        assert_eq!(store.borrow().form.filter, "");
        assert_eq!(store.borrow().displayed().len(), 1);
    }

    #[test]
    fn test_output_scroll_is_clamped() {
        let (store, mut dispatcher, _) = setup();
        let area = Rect::new(0, 0, 40, 5); // 3 text rows inside the border
        let mut pane = OutputPane::default();
        let page_down = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        let page_up = KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE);

        pane.on_key(&mut dispatcher, &store, area, page_down);
        assert_eq!(pane.scroll, 0);

        for title in ["a", "b", "c"] {
            dispatcher.dispatch(Action::UpdateTitle(title.to_owned()));
            dispatcher.dispatch(Action::UpdateDate("2025-01-01".to_owned()));
            dispatcher.dispatch(Action::SaveEvent);
        }
        // 3 blocks of 3 lines with 2 separators: 11 rows, the last 3 shown at offset 8
        pane.on_key(&mut dispatcher, &store, area, page_down);
        assert_eq!(pane.scroll, 3);
        for _ in 0..5 {
            pane.on_key(&mut dispatcher, &store, area, page_down);
        }
        assert_eq!(pane.scroll, 8);
        pane.on_key(&mut dispatcher, &store, area, page_up);
        assert_eq!(pane.scroll, 5);
    }

    fn shown_text(pane: &OutputPane, store: &RefCell<AgendaStore>, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        pane.render(store, area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_output_scroll_reaches_last_event_past_wrapped_lines() {
        let (store, mut dispatcher, _) = setup();
        let area = Rect::new(0, 0, 20, 6); // 18 columns, 4 rows inside the border
        let mut pane = OutputPane::default();

        dispatcher.dispatch(Action::UpdateTitle("a".to_owned()));
        dispatcher.dispatch(Action::UpdateDate("2025-01-01".to_owned()));
        dispatcher.dispatch(Action::UpdateDescription("x".repeat(100)));
        dispatcher.dispatch(Action::SaveEvent);
        dispatcher.dispatch(Action::UpdateTitle("zed".to_owned()));
        dispatcher.dispatch(Action::UpdateDate("2025-09-09".to_owned()));
        dispatcher.dispatch(Action::SaveEvent);
        assert!(!shown_text(&pane, &store, area).contains("Zed"));

        let page_down = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        for _ in 0..50 {
            pane.on_key(&mut dispatcher, &store, area, page_down);
        }
        let shown = shown_text(&pane, &store, area);
        assert!(shown.contains("Zed"), "last event not reachable: {shown}");
        assert!(shown.contains("2025-09-09"));
        assert!(shown.contains("description"));
    }

    #[test]
    fn test_renders_without_panic() {
        let (store, mut dispatcher, mut view) = setup();
        ctrl(&mut view, &mut dispatcher, &store, 'o');
        let mut buf = Buffer::empty(AREA);
        view.render(&store, AREA, &mut buf);

        let small = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(small);
        view.render(&store, small, &mut buf);
    }
}
