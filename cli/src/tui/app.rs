// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use agenda_core::EventStore;
use chrono::NaiveDate;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::{DefaultTerminal, Frame, layout::Rect};

use crate::tui::agenda_store::AgendaStore;
use crate::tui::agenda_view::AgendaView;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

/// Runs the agenda screen until the user exits, returning the number of recorded events.
pub fn run_agenda(events: EventStore, today: NaiveDate) -> Result<usize, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(AgendaStore::new(events, today)));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        AgendaStore::register_to(store.clone(), &mut dispatcher);
        let mut app = App::new(dispatcher, &store);

        loop {
            if let Err(e) = app.draw(&store, &mut terminal) {
                break Err(e);
            }

            match app.read_event(&store) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // Continue the loop to render the next frame
            }
        }
    }; // release dispatcher and view here to avoid borrow conflicts
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store.events.len())
}

struct App {
    dispatcher: Dispatcher,
    view: AgendaView,
    area: Rect,
}

impl App {
    fn new(mut dispatcher: Dispatcher, store: &RefCell<AgendaStore>) -> Self {
        let mut view = AgendaView::new();
        view.activate(&mut dispatcher, store);
        Self {
            dispatcher,
            view,
            area: Rect::default(),
        }
    }

    fn draw(
        &mut self,
        store: &RefCell<AgendaStore>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        let completed = terminal.draw(|frame| self.render(store, frame))?;
        self.area = completed.area;
        Ok(())
    }

    fn render(&self, store: &RefCell<AgendaStore>, frame: &mut Frame) {
        let area = frame.area();
        self.view.render(store, area, frame.buffer_mut());

        if let Some(pos) = self.view.get_cursor_position(store, area) {
            frame.set_cursor_position(pos);
        }
    }

    fn read_event(
        &mut self,
        store: &RefCell<AgendaStore>,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let msg = self.view.on_key(&mut self.dispatcher, store, self.area, key);
                Ok(msg)
            }
            _ => Ok(None),
        }
    }
}
