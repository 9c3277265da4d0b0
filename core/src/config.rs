// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::IdGeneratorKind;

/// The name of the application.
pub const APP_NAME: &str = "agenda";

/// Core configuration.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which id generator new events get their ids from.
    #[serde(default)]
    pub id_generator: IdGeneratorKind,
}
