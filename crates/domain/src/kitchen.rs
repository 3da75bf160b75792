// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::ProductId;
use crate::recipe::Recipe;
use crate::stock::Stock;

/// Cooks a recipe by taking its ingredients out of the given stocks.
///
/// Ingredients are processed in recipe order. For each one, the first stock
/// holding the same product (by id) is located, its unit must be the same
/// unit (by id) as the ingredient's, and the ingredient quantity is
/// subtracted from it in place. No unit conversion is attempted.
///
/// Stocks for products the recipe does not use are left untouched.
///
/// This function mutates `stocks`. On failure, deductions already applied
/// for earlier ingredients remain applied; callers that need all-or-nothing
/// behaviour must work on a copy or inside a transaction.
///
/// # Arguments
///
/// * `recipe` - The recipe to cook
/// * `stocks` - Stocks covering every product the recipe uses
///
/// # Errors
///
/// Returns an error if:
/// - An ingredient has no stock for its product (`StockNotFound`)
/// - The matching stock is held in a different unit (`InvalidArgument`)
pub fn cook_recipe_from_stock(recipe: &Recipe, stocks: &mut [Stock]) -> Result<(), DomainError> {
    for ingredient in recipe.ingredients() {
        let product_id: ProductId = ingredient.product().id();

        let stock: &mut Stock = stocks
            .iter_mut()
            .find(|stock| stock.product().id() == product_id)
            .ok_or_else(|| DomainError::StockNotFound {
                product_id,
                product_name: ingredient.product().name().to_string(),
            })?;

        if stock.unit().id() != ingredient.unit().id() {
            return Err(DomainError::invalid(
                "Ingredient.Unit",
                format!(
                    "Ingredient {ingredient} does not use the same unit as its stock ({})",
                    stock.unit()
                ),
            ));
        }

        stock.consume(ingredient.quantity());
    }

    Ok(())
}

/// Returns the distinct products a recipe needs, in first-use order.
#[must_use]
pub fn required_product_ids(recipe: &Recipe) -> Vec<ProductId> {
    let mut product_ids: Vec<ProductId> = Vec::with_capacity(recipe.ingredients().len());
    for ingredient in recipe.ingredients() {
        let product_id: ProductId = ingredient.product().id();
        if !product_ids.contains(&product_id) {
            product_ids.push(product_id);
        }
    }
    product_ids
}
