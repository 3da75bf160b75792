// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// A rule guarding a field value.
pub type Rule<T> = fn(&T) -> Result<(), DomainError>;

/// A field whose rule is enforced on construction and on every assignment.
///
/// A rejected assignment leaves the previous value in place.
#[derive(Clone, Copy)]
pub struct Validated<T> {
    value: T,
    rule: Rule<T>,
}

impl<T> Validated<T> {
    /// Wraps `value` after checking it against `rule`.
    ///
    /// # Errors
    ///
    /// Returns the rule's error if `value` is rejected.
    pub fn new(value: T, rule: Rule<T>) -> Result<Self, DomainError> {
        rule(&value)?;
        Ok(Self { value, rule })
    }

    /// Borrows the current value.
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value if it passes the rule.
    ///
    /// # Errors
    ///
    /// Returns the rule's error if `value` is rejected.
    pub fn set(&mut self, value: T) -> Result<(), DomainError> {
        (self.rule)(&value)?;
        self.value = value;
        Ok(())
    }

    /// Consumes the wrapper and returns the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Validated<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}

// Rules are attached per field, so only the values take part in equality.
impl<T: PartialEq> PartialEq for Validated<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
