// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use crate::error::DomainError;
use crate::ids::{ImageId, RecipeId};
use crate::ingredient::Ingredient;
use crate::step::Step;
use crate::validated::Validated;
use crate::validation::{validate_recipe_difficulty, validate_recipe_name};

/// A recipe: ordered steps plus the ingredients they need.
///
/// The recipe owns its steps and ingredients. Name and difficulty are
/// re-checked on every assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    id: RecipeId,
    name: Validated<String>,
    difficulty: Validated<u8>,
    steps: Vec<Step>,
    ingredients: Vec<Ingredient>,
    image_id: ImageId,
}

impl Recipe {
    /// Creates a recipe with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the difficulty is above 5.
    pub fn new(
        name: impl Into<String>,
        difficulty: u8,
        steps: Vec<Step>,
        ingredients: Vec<Ingredient>,
        image_id: ImageId,
    ) -> Result<Self, DomainError> {
        Self::with_id(
            RecipeId::new(),
            name,
            difficulty,
            steps,
            ingredients,
            image_id,
        )
    }

    /// Creates a recipe with an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the difficulty is above 5.
    pub fn with_id(
        id: RecipeId,
        name: impl Into<String>,
        difficulty: u8,
        steps: Vec<Step>,
        ingredients: Vec<Ingredient>,
        image_id: ImageId,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Validated::new(name.into(), validate_recipe_name)?,
            difficulty: Validated::new(difficulty, validate_recipe_difficulty)?,
            steps,
            ingredients,
            image_id,
        })
    }

    #[must_use]
    pub const fn id(&self) -> RecipeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.get()
    }

    #[must_use]
    pub const fn difficulty(&self) -> u8 {
        *self.difficulty.get()
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub const fn steps_mut(&mut self) -> &mut Vec<Step> {
        &mut self.steps
    }

    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub const fn ingredients_mut(&mut self) -> &mut Vec<Ingredient> {
        &mut self.ingredients
    }

    #[must_use]
    pub const fn image_id(&self) -> ImageId {
        self.image_id
    }

    /// Sum of every step's estimated time.
    ///
    /// Derived on each call from the current steps. The sum saturates at
    /// [`Duration::MAX`] instead of overflowing.
    #[must_use]
    pub fn total_estimated_time(&self) -> Duration {
        self.steps.iter().fold(Duration::ZERO, |total, step| {
            total.saturating_add(step.estimated_time())
        })
    }

    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        self.name.set(name.into())
    }

    /// # Errors
    ///
    /// Returns an error if the difficulty is above 5.
    pub fn set_difficulty(&mut self, difficulty: u8) -> Result<(), DomainError> {
        self.difficulty.set(difficulty)
    }

    pub const fn set_image_id(&mut self, image_id: ImageId) {
        self.image_id = image_id;
    }
}
