// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use uuid::Uuid;

/// Source of event identifiers.
///
/// Every value returned must be unique among all values previously returned by
/// the same generator. No ordering or format is implied.
pub trait IdGenerator: fmt::Debug {
    /// Returns a fresh identifier.
    fn generate_id(&mut self) -> String;
}

/// Generates random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Generates `"1"`, `"2"`, `"3"`, ... in order.
#[derive(Debug, Default, Clone)]
pub struct SequentialGenerator {
    last: u64,
}

impl SequentialGenerator {
    /// Creates a generator whose first id is `"1"`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialGenerator {
    fn generate_id(&mut self) -> String {
        self.last += 1;
        self.last.to_string()
    }
}

/// The kind of id generator to use, selectable from configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdGeneratorKind {
    /// Random UUID v4.
    #[default]
    Uuid,

    /// Monotonic counter.
    Sequential,
}

impl IdGeneratorKind {
    /// Builds a generator of this kind.
    pub fn build(self) -> Box<dyn IdGenerator> {
        match self {
            IdGeneratorKind::Uuid => Box::new(UuidGenerator),
            IdGeneratorKind::Sequential => Box::new(SequentialGenerator::new()),
        }
    }
}
