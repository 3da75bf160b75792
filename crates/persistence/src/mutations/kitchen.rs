// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cooking a stored recipe against stored stock.

use diesel::Connection;
use diesel::SqliteConnection;
use tracing::{info, warn};

use larder_domain::{
    ProductId, Recipe, RecipeId, Stock, StockId, cook_recipe_from_stock, required_product_ids,
};

use crate::data_models::CookOutcome;
use crate::error::PersistenceError;
use crate::mutations::stocks::{delete_stock, save_stock};
use crate::queries::recipes::get_recipe;
use crate::queries::stocks::list_stocks_for_products;

/// Cooks a recipe, deducting its ingredients from persisted stock.
///
/// Everything runs in one transaction: the recipe and the stocks for its
/// products are loaded, the ingredients are deducted, stocks that still hold
/// a positive quantity are written back and used-up stocks are deleted. If
/// any ingredient cannot be served the transaction is rolled back and
/// persisted stock is left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The recipe does not exist (`NotFound`)
/// - An ingredient has no stock, or a stock uses another unit (`Domain`)
/// - The database operation fails
pub fn cook_recipe(
    conn: &mut SqliteConnection,
    recipe_id: RecipeId,
) -> Result<CookOutcome, PersistenceError> {
    info!(%recipe_id, "Cooking recipe from stock");

    let result: Result<CookOutcome, PersistenceError> =
        conn.transaction::<_, PersistenceError, _>(|conn| {
            let recipe: Recipe = get_recipe(conn, recipe_id)?;
            let product_ids: Vec<ProductId> = required_product_ids(&recipe);
            let mut stocks: Vec<Stock> = list_stocks_for_products(conn, &product_ids)?;

            cook_recipe_from_stock(&recipe, &mut stocks)?;

            let mut remaining: Vec<Stock> = Vec::with_capacity(stocks.len());
            let mut removed: Vec<StockId> = Vec::new();
            for stock in stocks {
                if stock.is_depleted() {
                    delete_stock(conn, stock.id())?;
                    removed.push(stock.id());
                } else {
                    save_stock(conn, &stock)?;
                    remaining.push(stock);
                }
            }

            Ok(CookOutcome { remaining, removed })
        });

    match &result {
        Ok(outcome) => info!(
            %recipe_id,
            remaining = outcome.remaining.len(),
            removed = outcome.removed.len(),
            "Recipe cooked"
        ),
        Err(e) => warn!(%recipe_id, error = %e, "Cooking failed; stock unchanged"),
    }

    result
}
