// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

/// A full-screen bordered page. `Esc` exits unless the inner component handles it.
pub struct SinglePage<S, C: Component<S>> {
    title: String,
    instructions: Line<'static>,
    inner: C,
    _phantom: std::marker::PhantomData<S>,
}

impl<S, C: Component<S>> SinglePage<S, C> {
    pub fn new(title: impl ToString, instructions: Line<'static>, inner: C) -> Self {
        Self {
            title: title.to_string(),
            instructions,
            inner,
            _phantom: std::marker::PhantomData,
        }
    }

    fn block(&self) -> Block<'_> {
        let title = Line::from(format!(" {} ", self.title).bold());
        Block::bordered()
            .border_set(border::ROUNDED)
            .title(title.centered())
            .title_bottom(self.instructions.clone().centered())
            .white()
    }
}

impl<S, C: Component<S>> Component<S> for SinglePage<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner_area = block.inner(area);
        block.render(area, buf);
        self.inner.render(store, inner_area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let inner_area = self.block().inner(area);
        self.inner.get_cursor_position(store, inner_area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let inner_area = self.block().inner(area);
        if let Some(msg) = self.inner.on_key(dispatcher, store, inner_area, event) {
            return Some(msg);
        }

        match event.code {
            KeyCode::Esc => Some(Message::Exit),
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.deactivate(dispatcher, store);
    }
}

/// A bordered box drawn centered over whatever is already rendered.
pub struct Popup<S, C: Component<S>> {
    title: String,
    instructions: Line<'static>,
    width: u16,
    height: u16,
    inner: C,
    _phantom: std::marker::PhantomData<S>,
}

impl<S, C: Component<S>> Popup<S, C> {
    pub fn new(
        title: impl ToString,
        instructions: Line<'static>,
        (width, height): (u16, u16),
        inner: C,
    ) -> Self {
        Self {
            title: title.to_string(),
            instructions,
            width,
            height,
            inner,
            _phantom: std::marker::PhantomData,
        }
    }

    fn block(&self) -> Block<'_> {
        let title = Line::from(format!(" {} ", self.title).bold());
        Block::bordered()
            .border_set(border::ROUNDED)
            .title(title.centered())
            .title_bottom(self.instructions.clone().centered())
            .blue()
    }

    fn inner_area(&self, area: Rect) -> Rect {
        self.block().inner(centered(area, self.width, self.height))
    }
}

impl<S, C: Component<S>> Component<S> for Popup<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let popup_area = centered(area, self.width, self.height);
        Clear.render(popup_area, buf);
        let block = self.block();
        let inner_area = block.inner(popup_area);
        block.render(popup_area, buf);
        self.inner.render(store, inner_area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        self.inner.get_cursor_position(store, self.inner_area(area))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let inner_area = self.inner_area(area);
        self.inner.on_key(dispatcher, store, inner_area, event)
    }
}

/// A rect of at most `width` x `height`, centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
