// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field rules shared by the value objects.
//!
//! Each rule is a plain function usable as a [`crate::Rule`], so the same
//! check runs at construction and on every later assignment.

// Rules take `&T` so they coerce to `Rule<T>`.
#![allow(clippy::ptr_arg, clippy::trivially_copy_pass_by_ref)]

use std::time::Duration;

use crate::error::DomainError;
use crate::ids::{ImageId, ProductId};

/// Highest difficulty a recipe may be rated with.
pub const MAX_RECIPE_DIFFICULTY: u8 = 5;

fn require_text(value: &str, field: &'static str, message: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::invalid(field, message));
    }
    Ok(())
}

fn require_positive(value: f64, field: &'static str, message: &str) -> Result<(), DomainError> {
    // NaN fails this comparison too
    if value > 0.0 {
        return Ok(());
    }
    Err(DomainError::invalid(field, message))
}

/// Rule: a product id must not be the nil UUID.
///
/// # Errors
///
/// Returns `InvalidArgument` if the id is nil.
pub fn validate_product_id(id: &ProductId) -> Result<(), DomainError> {
    if id.is_nil() {
        return Err(DomainError::invalid(
            "Product.Id",
            "Product Id should not be empty",
        ));
    }
    Ok(())
}

/// Rule: a product name must not be empty.
///
/// # Errors
///
/// Returns `InvalidArgument` if the name is empty.
pub fn validate_product_name(name: &String) -> Result<(), DomainError> {
    require_text(
        name,
        "Product.Name",
        "Product Name should not be null nor empty",
    )
}

/// Rule: a product image id must not be the nil UUID.
///
/// # Errors
///
/// Returns `InvalidArgument` if the id is nil.
pub fn validate_product_image_id(id: &ImageId) -> Result<(), DomainError> {
    if id.is_nil() {
        return Err(DomainError::invalid(
            "Product.ImageId",
            "Product Image Id should not be empty",
        ));
    }
    Ok(())
}

/// Rule: a product type name must not be empty.
///
/// # Errors
///
/// Returns `InvalidArgument` if the name is empty.
pub fn validate_product_type_name(name: &String) -> Result<(), DomainError> {
    require_text(
        name,
        "ProductType.Name",
        "Product Type Name should not be null nor empty",
    )
}

/// Rule: a step name must not be empty.
///
/// # Errors
///
/// Returns `InvalidArgument` if the name is empty.
pub fn validate_step_name(name: &String) -> Result<(), DomainError> {
    require_text(name, "Step.Name", "Step Name should not be null nor empty")
}

/// Rule: step instructions must not be empty.
///
/// # Errors
///
/// Returns `InvalidArgument` if the instructions are empty.
pub fn validate_step_instructions(instructions: &String) -> Result<(), DomainError> {
    require_text(
        instructions,
        "Step.Instructions",
        "Step Instructions should not be null nor empty",
    )
}

/// Rule: a step must take some time.
///
/// # Errors
///
/// Returns `InvalidArgument` if the duration is zero.
pub fn validate_step_estimated_time(estimated_time: &Duration) -> Result<(), DomainError> {
    if estimated_time.is_zero() {
        return Err(DomainError::invalid(
            "Step.EstimatedTime",
            "Step EstimatedTime should not be 0",
        ));
    }
    Ok(())
}

/// Rule: an ingredient quantity must be strictly positive.
///
/// # Errors
///
/// Returns `InvalidArgument` if the quantity is zero, negative or NaN.
pub fn validate_ingredient_quantity(quantity: &f64) -> Result<(), DomainError> {
    require_positive(
        *quantity,
        "Ingredient.Quantity",
        "Ingredient Quantity should be positive",
    )
}

/// Rule: a recipe name must not be empty.
///
/// # Errors
///
/// Returns `InvalidArgument` if the name is empty.
pub fn validate_recipe_name(name: &String) -> Result<(), DomainError> {
    require_text(name, "Recipe.Name", "Invalid recipe name (null or empty)")
}

/// Rule: recipe difficulty is rated from 0 to 5 inclusive.
///
/// # Errors
///
/// Returns `InvalidArgument` if the difficulty is above 5.
pub fn validate_recipe_difficulty(difficulty: &u8) -> Result<(), DomainError> {
    if *difficulty > MAX_RECIPE_DIFFICULTY {
        return Err(DomainError::invalid(
            "Recipe.Difficulty",
            "Recipe difficulty should be between 0 and 5",
        ));
    }
    Ok(())
}

/// Rule: a stock quantity must be strictly positive when set.
///
/// # Errors
///
/// Returns `InvalidArgument` if the quantity is zero, negative or NaN.
pub fn validate_stock_quantity(quantity: &f64) -> Result<(), DomainError> {
    require_positive(
        *quantity,
        "Stock.Quantity",
        "Stock Quantity should be positive",
    )
}
