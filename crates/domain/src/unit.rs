// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::UnitId;

/// A unit of measure, e.g. "Liter" / "L".
///
/// Name and symbol are free-form and may be empty, e.g. a blank symbol
/// for counted items. Units are compared by identity when cooking; two
/// units with the same symbol but different ids are different units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    id: UnitId,
    name: String,
    symbol: String,
}

impl Unit {
    /// Creates a unit with a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::with_id(UnitId::new(), name, symbol)
    }

    #[must_use]
    pub fn with_id(id: UnitId, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> UnitId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}
