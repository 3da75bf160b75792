// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use crate::error::DomainError;
use crate::ids::StepId;
use crate::validated::Validated;
use crate::validation::{
    validate_step_estimated_time, validate_step_instructions, validate_step_name,
};

/// One instruction of a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    id: StepId,
    name: Validated<String>,
    instructions: Validated<String>,
    estimated_time: Validated<Duration>,
}

impl Step {
    /// Creates a step with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or instructions are empty, or the
    /// estimated time is zero.
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        estimated_time: Duration,
    ) -> Result<Self, DomainError> {
        Self::with_id(StepId::new(), name, instructions, estimated_time)
    }

    /// Creates a step with an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or instructions are empty, or the
    /// estimated time is zero.
    pub fn with_id(
        id: StepId,
        name: impl Into<String>,
        instructions: impl Into<String>,
        estimated_time: Duration,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Validated::new(name.into(), validate_step_name)?,
            instructions: Validated::new(instructions.into(), validate_step_instructions)?,
            estimated_time: Validated::new(estimated_time, validate_step_estimated_time)?,
        })
    }

    #[must_use]
    pub const fn id(&self) -> StepId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.get()
    }

    #[must_use]
    pub fn instructions(&self) -> &str {
        self.instructions.get()
    }

    #[must_use]
    pub const fn estimated_time(&self) -> Duration {
        *self.estimated_time.get()
    }

    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        self.name.set(name.into())
    }

    /// # Errors
    ///
    /// Returns an error if the instructions are empty.
    pub fn set_instructions(&mut self, instructions: impl Into<String>) -> Result<(), DomainError> {
        self.instructions.set(instructions.into())
    }

    /// # Errors
    ///
    /// Returns an error if the duration is zero.
    pub fn set_estimated_time(&mut self, estimated_time: Duration) -> Result<(), DomainError> {
        self.estimated_time.set(estimated_time)
    }
}
