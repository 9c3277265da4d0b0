// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod agenda_store;
mod agenda_view;
mod app;
mod component;
mod component_form;
mod component_page;
mod date_picker;
mod dispatcher;
mod sort_dialog;

pub use app::run_agenda;
