// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::{
    byte_offset_of_grapheme, byte_range_of_grapheme, grapheme_count, width_of_graphemes,
};

pub struct Form<S, C: FormItem<S>> {
    items: Vec<C>,
    item_index: usize,
    _phantom: std::marker::PhantomData<S>,
}

impl<S, C: FormItem<S>> Form<S, C> {
    pub fn new(items: Vec<C>) -> Self {
        Self {
            items,
            item_index: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    fn layout(&self) -> Layout {
        Layout::vertical(self.items.iter().map(|_| Constraint::Length(3)))
    }

    fn navigate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, offset: isize) {
        if let Some(a) = self.items.get_mut(self.item_index) {
            a.deactivate(dispatcher, store);
        }

        let len = self.items.len() as isize;
        self.item_index = (self.item_index as isize + offset).rem_euclid(len) as usize;

        if let Some(a) = self.items.get_mut(self.item_index) {
            a.activate(dispatcher, store);
        }
    }
}

impl<S, C: FormItem<S>> Component<S> for Form<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let areas = self.layout().split(area);
        let last = self.items.len().saturating_sub(1);
        for (i, (item, area)) in self.items.iter().zip(areas.iter()).enumerate() {
            item_render(i == last, item, *area, buf);
            item.render(store, item_inner(*area), buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let areas = self.layout().split(area);
        let item = self.items.get(self.item_index)?;
        let area = areas.get(self.item_index)?;
        item.get_cursor_position(store, *area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let areas = self.layout().split(area);
        if let (Some(item), Some(subarea)) =
            (self.items.get_mut(self.item_index), areas.get(self.item_index))
        {
            if let Some(msg) = item.on_key(dispatcher, store, *subarea, event) {
                return Some(msg);
            }
        }

        match event.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.navigate(dispatcher, store, -1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Down | KeyCode::Tab | KeyCode::Enter => {
                self.navigate(dispatcher, store, 1);
                Some(Message::CursorUpdated)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, store);
        }
    }
}

pub trait FormItem<S>: Component<S> {
    fn item_title(&self) -> &str;
    fn item_state(&self) -> FormItemState;
}

impl<S> Component<S> for Box<dyn FormItem<S>> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        (**self).render(store, area, buf)
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        (**self).get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        (**self).on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        (**self).activate(dispatcher, store)
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        (**self).deactivate(dispatcher, store)
    }
}

impl<S> FormItem<S> for Box<dyn FormItem<S>> {
    fn item_title(&self) -> &str {
        (**self).item_title()
    }

    fn item_state(&self) -> FormItemState {
        (**self).item_state()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItemState {
    // The item has focus.
    Active,

    // The item does not have focus.
    Inactive,
}

pub trait Access<S, T: ToOwned> {
    fn get(store: &RefCell<S>) -> T;
    fn set(dispatcher: &mut Dispatcher, value: T) -> bool;
}

/// Single-line text input. The cursor counts grapheme clusters.
#[derive(Debug)]
pub struct Input<S, A: Access<S, String>> {
    title: String,
    active: bool,
    cursor: usize,
    on_enter: Option<Action>,
    _phantom_s: std::marker::PhantomData<S>,
    _phantom_a: std::marker::PhantomData<A>,
}

impl<S, A: Access<S, String>> Input<S, A> {
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            active: false,
            cursor: 0,
            on_enter: None,
            _phantom_a: std::marker::PhantomData,
            _phantom_s: std::marker::PhantomData,
        }
    }

    /// Dispatches `action` on `Enter` instead of moving to the next item.
    pub fn on_enter(mut self, action: Action) -> Self {
        self.on_enter = Some(action);
        self
    }

    /// Cursor clamped to the current value, which may have been changed elsewhere.
    fn cursor(&self, value: &str) -> usize {
        self.cursor.min(grapheme_count(value))
    }
}

impl<S, A: Access<S, String>> Component<S> for Input<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let v = A::get(store);
        Paragraph::new(v.as_str()).render(area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.active {
            return None; // No cursor position when not active
        }

        let v = A::get(store);
        let width = width_of_graphemes(&v, self.cursor(&v));
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(width).saturating_add(2); // marker 1 + padding 1
        let y = area.y.saturating_add(1); // title line: 1
        Some((x, y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        if !self.active {
            return None;
        }
        if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None; // leave shortcuts to the enclosing view
        }

        let mut v = A::get(store);
        self.cursor = self.cursor(&v);
        match event.code {
            Enter => {
                let action = self.on_enter.clone()?;
                dispatcher.dispatch(action);
                return Some(Message::Handled);
            }
            Left => self.cursor = self.cursor.saturating_sub(1),
            Right => self.cursor = (self.cursor + 1).min(grapheme_count(&v)),
            Home => self.cursor = 0,
            End => self.cursor = grapheme_count(&v),
            Backspace if self.cursor > 0 => {
                if let Some(range) = byte_range_of_grapheme(&v, self.cursor - 1) {
                    v.replace_range(range, "");
                    if A::set(dispatcher, v) {
                        self.cursor -= 1;
                    }
                }
            }
            Delete => {
                if let Some(range) = byte_range_of_grapheme(&v, self.cursor) {
                    v.replace_range(range, "");
                    A::set(dispatcher, v);
                }
            }
            Char(c) => {
                let before = grapheme_count(&v);
                v.insert(byte_offset_of_grapheme(&v, self.cursor), c);
                let grown = grapheme_count(&v) > before;
                if A::set(dispatcher, v) && grown {
                    self.cursor += 1;
                }
            }
            Backspace => {}
            _ => return None,
        };

        // Always update the cursor position for simplicity
        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.active = true;
        self.cursor = grapheme_count(&A::get(store)); // continue typing at the end
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
        self.cursor = 0;
    }
}

impl<S, A: Access<S, String>> FormItem<S> for Input<S, A> {
    fn item_title(&self) -> &str {
        &self.title
    }

    fn item_state(&self) -> FormItemState {
        if self.active {
            FormItemState::Active
        } else {
            FormItemState::Inactive
        }
    }
}

/// A row of buttons; `Left`/`Right` choose, `Enter` or `Space` presses.
#[derive(Debug)]
pub struct ButtonRow<S> {
    title: String,
    buttons: Vec<(String, Action)>,
    selected: usize,
    active: bool,
    _phantom_s: std::marker::PhantomData<S>,
}

impl<S> ButtonRow<S> {
    pub fn new(title: impl ToString, buttons: Vec<(String, Action)>) -> Self {
        Self {
            title: title.to_string(),
            buttons,
            selected: 0,
            active: false,
            _phantom_s: std::marker::PhantomData,
        }
    }

    fn layout(&self) -> Layout {
        let constraints = self
            .buttons
            .iter()
            // 4 = brackets [ ] (2) + padding (2)
            .map(|(label, _)| Constraint::Length(4 + label.width() as u16));

        Layout::horizontal(constraints)
    }
}

impl<S> Component<S> for ButtonRow<S> {
    fn render(&self, _store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let areas = self.layout().split(area);
        for (i, ((label, _), area)) in self.buttons.iter().zip(areas.iter()).enumerate() {
            let text = format!("[ {label} ]");
            let span = match self.active && i == self.selected {
                true => text.black().on_blue().bold(),
                false => text.into(),
            };
            Paragraph::new(span).render(*area, buf);
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if !self.active || self.buttons.is_empty() {
            return None; // Only handle keys when the row is active
        }

        let len = self.buttons.len();
        match event.code {
            KeyCode::Left => {
                self.selected = (self.selected + len - 1) % len;
                Some(Message::Handled)
            }
            KeyCode::Right => {
                self.selected = (self.selected + 1) % len;
                Some(Message::Handled)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (_, action) = &self.buttons[self.selected];
                dispatcher.dispatch(action.clone());
                Some(Message::Handled)
            }
            _ => None,
        }
    }

    fn activate(&mut self, _: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = true;
    }

    fn deactivate(&mut self, _: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
    }
}

impl<S> FormItem<S> for ButtonRow<S> {
    fn item_title(&self) -> &str {
        &self.title
    }

    fn item_state(&self) -> FormItemState {
        if self.active {
            FormItemState::Active
        } else {
            FormItemState::Inactive
        }
    }
}

const S_STEP_ACTIVE: &str = "◆";
const S_STEP_INACTIVE: &str = "◇";

const S_SIDER_CONNECTOR: &str = "│";
const S_SIDER_BOTTOM: &str = "└";

fn item_render<S>(is_last: bool, item: &impl FormItem<S>, area: Rect, buf: &mut Buffer) {
    let (color, symbol) = match item.item_state() {
        FormItemState::Active => (Color::Blue, S_STEP_ACTIVE),
        FormItemState::Inactive => (Color::Gray, S_STEP_INACTIVE),
    };

    let area_title =
        Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1).intersection(area);
    Clear.render(area_title, buf);
    Paragraph::new(item.item_title())
        .bold()
        .fg(color)
        .render(area_title, buf);

    if let Some(c) = buf.cell_mut((area.x, area.y)) {
        c.set_symbol(symbol);
        c.set_fg(color);
    }

    for y in 1..area.height.saturating_sub(1) {
        if let Some(c) = buf.cell_mut((area.x, area.y + y)) {
            c.set_symbol(S_SIDER_CONNECTOR);
            c.set_fg(color);
        }
    }

    if let Some(c) = buf.cell_mut((area.x, area.y + area.height.saturating_sub(1))) {
        let symbol = if is_last {
            S_SIDER_BOTTOM
        } else {
            S_SIDER_CONNECTOR
        };
        c.set_symbol(symbol);
        c.set_fg(color);
    }
}

fn item_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
