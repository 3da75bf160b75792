// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recipe and like queries.
//!
//! A recipe is stored across `recipes`, `recipe_steps` and
//! `recipe_ingredients`; steps and ingredients are read back in
//! `position` order.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use larder_domain::{ImageId, Ingredient, Product, Recipe, RecipeId, Step, Unit, UserId};

use crate::data_models::{IngredientRow, RecipeRow, StepRow, parse_id};
use crate::diesel_schema::{recipe_ingredients, recipe_likes, recipe_steps, recipes};
use crate::error::PersistenceError;
use crate::queries::catalog::{load_products, load_units};

fn hydrate_recipe(conn: &mut SqliteConnection, row: RecipeRow) -> Result<Recipe, PersistenceError> {
    let id: RecipeId = parse_id(&row.recipe_id, "recipes.recipe_id")?;
    let image_id: ImageId = parse_id(&row.image_id, "recipes.image_id")?;
    let difficulty: u8 = u8::try_from(row.difficulty).map_err(|_| {
        PersistenceError::CorruptRow(format!("recipes.difficulty holds {}", row.difficulty))
    })?;

    let step_rows: Vec<StepRow> = recipe_steps::table
        .filter(recipe_steps::recipe_id.eq(&row.recipe_id))
        .order(recipe_steps::position.asc())
        .select(StepRow::as_select())
        .load(conn)?;
    let steps: Vec<Step> = step_rows
        .into_iter()
        .map(StepRow::into_domain)
        .collect::<Result<_, _>>()?;

    let ingredient_rows: Vec<IngredientRow> = recipe_ingredients::table
        .filter(recipe_ingredients::recipe_id.eq(&row.recipe_id))
        .order(recipe_ingredients::position.asc())
        .select(IngredientRow::as_select())
        .load(conn)?;

    let product_ids: Vec<String> = ingredient_rows
        .iter()
        .map(|ingredient| ingredient.product_id.clone())
        .collect();
    let unit_ids: Vec<String> = ingredient_rows
        .iter()
        .map(|ingredient| ingredient.unit_id.clone())
        .collect();
    let products: HashMap<String, Product> = load_products(conn, &product_ids)?;
    let units: HashMap<String, Unit> = load_units(conn, &unit_ids)?;

    let ingredients: Vec<Ingredient> = ingredient_rows
        .into_iter()
        .map(|ingredient| {
            Ingredient::from_parts(
                products.get(&ingredient.product_id).cloned(),
                ingredient.quantity,
                units.get(&ingredient.unit_id).cloned(),
            )
            .map_err(PersistenceError::from)
        })
        .collect::<Result<_, _>>()?;

    Ok(Recipe::with_id(
        id,
        row.name,
        difficulty,
        steps,
        ingredients,
        image_id,
    )?)
}

/// Retrieves a fully hydrated recipe by ID.
///
/// # Errors
///
/// Returns `NotFound` if no such recipe exists.
pub fn get_recipe(
    conn: &mut SqliteConnection,
    recipe_id: RecipeId,
) -> Result<Recipe, PersistenceError> {
    debug!(%recipe_id, "Looking up recipe");

    let row: Option<RecipeRow> = recipes::table
        .filter(recipes::recipe_id.eq(recipe_id.to_string()))
        .select(RecipeRow::as_select())
        .first(conn)
        .optional()?;

    let row: RecipeRow =
        row.ok_or_else(|| PersistenceError::NotFound(format!("Recipe {recipe_id} not found")))?;

    hydrate_recipe(conn, row)
}

/// Lists all recipes ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn list_recipes(conn: &mut SqliteConnection) -> Result<Vec<Recipe>, PersistenceError> {
    let rows: Vec<RecipeRow> = recipes::table
        .order((recipes::name.asc(), recipes::recipe_id.asc()))
        .select(RecipeRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(|row| hydrate_recipe(conn, row))
        .collect()
}

/// Returns whether a recipe row exists.
pub(crate) fn recipe_exists(
    conn: &mut SqliteConnection,
    recipe_id: RecipeId,
) -> Result<bool, PersistenceError> {
    let count: i64 = recipes::table
        .filter(recipes::recipe_id.eq(recipe_id.to_string()))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Counts the users who like a recipe.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_likes(
    conn: &mut SqliteConnection,
    recipe_id: RecipeId,
) -> Result<i64, PersistenceError> {
    let count: i64 = recipe_likes::table
        .filter(recipe_likes::recipe_id.eq(recipe_id.to_string()))
        .count()
        .get_result(conn)?;
    Ok(count)
}

/// Returns whether a user likes a recipe.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn has_liked(
    conn: &mut SqliteConnection,
    recipe_id: RecipeId,
    user_id: UserId,
) -> Result<bool, PersistenceError> {
    let count: i64 = recipe_likes::table
        .filter(recipe_likes::recipe_id.eq(recipe_id.to_string()))
        .filter(recipe_likes::user_id.eq(user_id.to_string()))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}
