// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Stores built from configuration.

use agenda_core::{Config, EventStore, IdGeneratorKind};

use crate::common::draft;

#[test]
fn sequential_config_yields_counting_ids() {
    let config: Config = toml::from_str(r#"id_generator = "sequential""#).unwrap();
    let mut store = EventStore::from_config(&config);

    assert_eq!(store.create(draft("a", "2025-01-01")).unwrap().id(), "1");
    assert_eq!(store.create(draft("b", "2025-01-01")).unwrap().id(), "2");
}

#[test]
fn default_config_yields_uuid_ids() {
    let config = Config::default();
    assert_eq!(config.id_generator, IdGeneratorKind::Uuid);

    let mut store = EventStore::from_config(&config);
    let id = store.create(draft("a", "2025-01-01")).unwrap().id().to_owned();
    assert_eq!(id.len(), 36);
    assert_eq!(id.matches('-').count(), 4);
}
