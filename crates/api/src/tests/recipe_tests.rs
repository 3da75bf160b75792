// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for recipe and like handlers.

use larder_domain::ProductId;
use larder_persistence::Persistence;

use super::helpers::{Kitchen, create_test_user, ingredient, recipe_request};
use crate::{
    ApiError, IngredientRequest, StepRequest, create_recipe, delete_recipe, get_recipe,
    like_recipe, list_recipes, unlike_recipe, update_recipe,
};

#[test]
fn test_created_recipe_is_fully_described() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let kitchen = Kitchen::stocked(&mut persistence);

    let recipe = get_recipe(&mut persistence, &kitchen.pancakes.recipe_id, &kitchen.user).unwrap();

    assert_eq!(recipe, kitchen.pancakes);
    assert_eq!(recipe.total_estimated_seconds, 900);
    let descriptions: Vec<&str> = recipe
        .ingredients
        .iter()
        .map(|i| i.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["0.5 L of Milk", "250 g of Flour", "3 pc of Eggs"]);
    assert_eq!(recipe.likes, 0);
    assert!(!recipe.liked_by_me);
}

#[test]
fn test_unknown_ingredient_product_reports_missing_product() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let kitchen = Kitchen::stocked(&mut persistence);

    let request = recipe_request(
        "Mystery",
        vec![IngredientRequest {
            product_id: ProductId::new().to_string(),
            quantity: 1.0,
            unit_id: kitchen.gram.unit_id.clone(),
        }],
    );

    let result = create_recipe(&mut persistence, &request, &kitchen.user);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { message, .. })
            if message == "Ingredient Product should not be null"
    ));
}

#[test]
fn test_unknown_ingredient_unit_reports_missing_unit() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let kitchen = Kitchen::stocked(&mut persistence);

    let request = recipe_request(
        "Mystery",
        vec![IngredientRequest {
            product_id: kitchen.flour.product_id.clone(),
            quantity: 1.0,
            unit_id: String::from("cup"),
        }],
    );

    let result = create_recipe(&mut persistence, &request, &kitchen.user);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { message, .. })
            if message == "Ingredient Unit should not be null"
    ));
}

#[test]
fn test_difficulty_above_five_is_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let kitchen = Kitchen::stocked(&mut persistence);

    let mut request = recipe_request("Souffle", Vec::new());
    request.difficulty = 6;

    let result = create_recipe(&mut persistence, &request, &kitchen.user);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "Recipe.Difficulty"
    ));
}

#[test]
fn test_zero_step_time_is_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let kitchen = Kitchen::stocked(&mut persistence);

    let mut request = recipe_request("Instant", Vec::new());
    request.steps = vec![StepRequest {
        name: String::from("Wait"),
        instructions: String::from("Do nothing"),
        estimated_seconds: 0,
    }];

    let result = create_recipe(&mut persistence, &request, &kitchen.user);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    assert_eq!(list_recipes(&mut persistence, &kitchen.user).unwrap().recipes.len(), 1);
}

#[test]
fn test_enormous_step_times_do_not_break_reads() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let kitchen = Kitchen::stocked(&mut persistence);

    let mut request = recipe_request("Sourdough", Vec::new());
    request.steps = (0..3)
        .map(|_| StepRequest {
            name: String::from("Proof"),
            instructions: String::from("Leave it alone"),
            estimated_seconds: i64::MAX.unsigned_abs(),
        })
        .collect();

    let created = create_recipe(&mut persistence, &request, &kitchen.user).unwrap();
    assert_eq!(created.total_estimated_seconds, u64::MAX);

    let fetched = get_recipe(&mut persistence, &created.recipe_id, &kitchen.user).unwrap();
    assert_eq!(fetched.total_estimated_seconds, u64::MAX);
    assert_eq!(list_recipes(&mut persistence, &kitchen.user).unwrap().recipes.len(), 2);
}

#[test]
fn test_update_recipe_replaces_ingredients() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let kitchen = Kitchen::stocked(&mut persistence);

    let request = recipe_request(
        "Flatbread",
        vec![ingredient(&kitchen.flour, 300.0, &kitchen.gram)],
    );
    let updated = update_recipe(
        &mut persistence,
        &kitchen.pancakes.recipe_id,
        &request,
        &kitchen.user,
    )
    .unwrap();

    assert_eq!(updated.recipe_id, kitchen.pancakes.recipe_id);
    assert_eq!(updated.name, "Flatbread");
    assert_eq!(updated.ingredients.len(), 1);
    assert_eq!(
        get_recipe(&mut persistence, &kitchen.pancakes.recipe_id, &kitchen.user).unwrap(),
        updated
    );
}

#[test]
fn test_delete_recipe() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let kitchen = Kitchen::stocked(&mut persistence);

    delete_recipe(&mut persistence, &kitchen.pancakes.recipe_id).unwrap();

    let result = get_recipe(&mut persistence, &kitchen.pancakes.recipe_id, &kitchen.user);
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Recipe"
    ));
}

#[test]
fn test_likes_are_counted_per_user() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let kitchen = Kitchen::stocked(&mut persistence);
    let bob = create_test_user(&mut persistence, "bob");
    let recipe_id = kitchen.pancakes.recipe_id.clone();

    like_recipe(&mut persistence, &recipe_id, &kitchen.user).unwrap();
    let status = like_recipe(&mut persistence, &recipe_id, &kitchen.user).unwrap();
    assert_eq!(status.likes, 1);
    assert!(status.liked_by_me);

    let status = like_recipe(&mut persistence, &recipe_id, &bob).unwrap();
    assert_eq!(status.likes, 2);

    let status = unlike_recipe(&mut persistence, &recipe_id, &kitchen.user).unwrap();
    assert_eq!(status.likes, 1);
    assert!(!status.liked_by_me);

    let seen_by_bob = get_recipe(&mut persistence, &recipe_id, &bob).unwrap();
    assert!(seen_by_bob.liked_by_me);
}

#[test]
fn test_malformed_recipe_id_is_invalid_input() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let kitchen = Kitchen::stocked(&mut persistence);

    let result = like_recipe(&mut persistence, "pancakes", &kitchen.user);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "recipe_id"
    ));
}
