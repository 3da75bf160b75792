// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod ids;
mod ingredient;
mod kitchen;
mod product;
mod recipe;
mod step;
mod stock;
mod unit;
mod validated;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use ids::{ImageId, ProductId, ProductTypeId, RecipeId, StepId, StockId, UnitId, UserId};
pub use ingredient::Ingredient;
pub use kitchen::{cook_recipe_from_stock, required_product_ids};
pub use product::{Product, ProductType};
pub use recipe::Recipe;
pub use step::Step;
pub use stock::{DEPLETION_TOLERANCE, Stock};
pub use unit::Unit;
pub use validated::{Rule, Validated};
pub use validation::{
    MAX_RECIPE_DIFFICULTY, validate_ingredient_quantity, validate_product_id,
    validate_product_image_id, validate_product_name, validate_product_type_name,
    validate_recipe_difficulty, validate_recipe_name, validate_step_estimated_time,
    validate_step_instructions, validate_step_name, validate_stock_quantity,
};
