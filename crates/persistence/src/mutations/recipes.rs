// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recipe and like mutations.
//!
//! Steps and ingredients are written with their list index as `position`.
//! Updates replace both lists wholesale inside one transaction.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use larder_domain::{Recipe, RecipeId, UserId};

use crate::data_models::{IngredientRow, RecipeRow, StepRow};
use crate::diesel_schema::{recipe_ingredients, recipe_likes, recipe_steps, recipes};
use crate::error::PersistenceError;
use crate::mutations::catalog::require_affected;
use crate::queries::recipes::recipe_exists;

fn recipe_row(recipe: &Recipe) -> RecipeRow {
    RecipeRow {
        recipe_id: recipe.id().to_string(),
        name: recipe.name().to_string(),
        difficulty: i32::from(recipe.difficulty()),
        image_id: recipe.image_id().to_string(),
    }
}

fn position(index: usize) -> Result<i32, PersistenceError> {
    i32::try_from(index).map_err(|_| PersistenceError::Other(format!("Position {index} overflows")))
}

fn insert_children(conn: &mut SqliteConnection, recipe: &Recipe) -> Result<(), PersistenceError> {
    let recipe_id: String = recipe.id().to_string();

    let steps: Vec<StepRow> = recipe
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| StepRow::from_domain(step, &recipe_id, position(index)?))
        .collect::<Result<_, _>>()?;
    let ingredients: Vec<IngredientRow> = recipe
        .ingredients()
        .iter()
        .enumerate()
        .map(|(index, ingredient)| {
            Ok(IngredientRow::from_domain(ingredient, &recipe_id, position(index)?))
        })
        .collect::<Result<_, PersistenceError>>()?;

    debug!(
        recipe_id = %recipe_id,
        steps = steps.len(),
        ingredients = ingredients.len(),
        "Writing recipe steps and ingredients"
    );

    for step in &steps {
        diesel::insert_into(recipe_steps::table)
            .values(step)
            .execute(conn)?;
    }
    for ingredient in &ingredients {
        diesel::insert_into(recipe_ingredients::table)
            .values(ingredient)
            .execute(conn)?;
    }

    Ok(())
}

/// Inserts a recipe with its ordered steps and ingredients.
///
/// # Errors
///
/// Returns `Conflict` if an ingredient references a product or unit that is
/// not stored, or if a step id is already in use.
pub fn create_recipe(conn: &mut SqliteConnection, recipe: &Recipe) -> Result<(), PersistenceError> {
    info!(recipe_id = %recipe.id(), name = recipe.name(), "Creating recipe");

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(recipes::table)
            .values(recipe_row(recipe))
            .execute(conn)?;
        insert_children(conn, recipe)
    })
}

/// Overwrites a recipe, replacing all of its steps and ingredients.
///
/// # Errors
///
/// Returns `NotFound` if no such recipe exists.
pub fn update_recipe(conn: &mut SqliteConnection, recipe: &Recipe) -> Result<(), PersistenceError> {
    let recipe_id: RecipeId = recipe.id();
    info!(%recipe_id, "Updating recipe");

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let row: RecipeRow = recipe_row(recipe);
        let rows_affected: usize = diesel::update(recipes::table)
            .filter(recipes::recipe_id.eq(&row.recipe_id))
            .set((
                recipes::name.eq(&row.name),
                recipes::difficulty.eq(row.difficulty),
                recipes::image_id.eq(&row.image_id),
            ))
            .execute(conn)?;
        require_affected(rows_affected, || format!("Recipe {recipe_id} not found"))?;

        diesel::delete(recipe_steps::table)
            .filter(recipe_steps::recipe_id.eq(&row.recipe_id))
            .execute(conn)?;
        diesel::delete(recipe_ingredients::table)
            .filter(recipe_ingredients::recipe_id.eq(&row.recipe_id))
            .execute(conn)?;

        insert_children(conn, recipe)
    })
}

/// Deletes a recipe along with its steps, ingredients and likes.
///
/// # Errors
///
/// Returns `NotFound` if no such recipe exists.
pub fn delete_recipe(
    conn: &mut SqliteConnection,
    recipe_id: RecipeId,
) -> Result<(), PersistenceError> {
    info!(%recipe_id, "Deleting recipe");

    let rows_affected: usize = diesel::delete(recipes::table)
        .filter(recipes::recipe_id.eq(recipe_id.to_string()))
        .execute(conn)?;

    require_affected(rows_affected, || format!("Recipe {recipe_id} not found"))
}

/// Records that a user likes a recipe. Liking twice is a no-op.
///
/// # Errors
///
/// Returns `NotFound` if no such recipe exists.
pub fn like_recipe(
    conn: &mut SqliteConnection,
    recipe_id: RecipeId,
    user_id: UserId,
) -> Result<(), PersistenceError> {
    if !recipe_exists(conn, recipe_id)? {
        return Err(PersistenceError::NotFound(format!(
            "Recipe {recipe_id} not found"
        )));
    }

    let inserted: usize = diesel::insert_into(recipe_likes::table)
        .values((
            recipe_likes::recipe_id.eq(recipe_id.to_string()),
            recipe_likes::user_id.eq(user_id.to_string()),
        ))
        .on_conflict_do_nothing()
        .execute(conn)?;

    debug!(%recipe_id, %user_id, inserted, "Recipe liked");
    Ok(())
}

/// Removes a user's like from a recipe. Removing a missing like is a no-op.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn unlike_recipe(
    conn: &mut SqliteConnection,
    recipe_id: RecipeId,
    user_id: UserId,
) -> Result<(), PersistenceError> {
    let removed: usize = diesel::delete(recipe_likes::table)
        .filter(recipe_likes::recipe_id.eq(recipe_id.to_string()))
        .filter(recipe_likes::user_id.eq(user_id.to_string()))
        .execute(conn)?;

    debug!(%recipe_id, %user_id, removed, "Recipe unliked");
    Ok(())
}
