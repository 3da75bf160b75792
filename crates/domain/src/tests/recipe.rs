// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use super::create_test_product;
use crate::{ImageId, Ingredient, Recipe, RecipeId, Step, Unit};

fn create_test_steps() -> Vec<Step> {
    vec![
        Step::new("Mix", "Mix flour and milk", Duration::from_secs(90)).unwrap(),
        Step::new("Rest", "Let the batter rest", Duration::from_secs(60)).unwrap(),
        Step::new("Cook", "Cook in a hot pan", Duration::from_secs(180)).unwrap(),
    ]
}

fn create_test_recipe(difficulty: u8) -> Recipe {
    Recipe::new("Pancakes", difficulty, create_test_steps(), Vec::new(), ImageId::new()).unwrap()
}

#[test]
fn test_recipe_round_trips_fields() {
    let id: RecipeId = RecipeId::new();
    let image_id: ImageId = ImageId::new();
    let gram: Unit = Unit::new("Gram", "g");
    let ingredients: Vec<Ingredient> =
        vec![Ingredient::new(create_test_product("Flour"), 250.0, gram).unwrap()];

    let recipe: Recipe = Recipe::with_id(
        id,
        "Pancakes",
        2,
        create_test_steps(),
        ingredients.clone(),
        image_id,
    )
    .unwrap();

    assert_eq!(recipe.id(), id);
    assert_eq!(recipe.name(), "Pancakes");
    assert_eq!(recipe.difficulty(), 2);
    assert_eq!(recipe.steps(), create_test_steps().as_slice());
    assert_eq!(recipe.ingredients(), ingredients.as_slice());
    assert_eq!(recipe.image_id(), image_id);
}

#[test]
fn test_recipe_new_generates_id() {
    assert!(!create_test_recipe(1).id().is_nil());
}

#[test]
fn test_recipe_rejects_empty_name() {
    let result = Recipe::new("", 1, Vec::new(), Vec::new(), ImageId::new());
    assert_eq!(
        result.unwrap_err().to_string(),
        "Invalid recipe name (null or empty)"
    );
}

#[test]
fn test_recipe_accepts_difficulty_zero_through_five() {
    let mut recipe: Recipe = create_test_recipe(0);
    for difficulty in 0..=5 {
        recipe.set_difficulty(difficulty).unwrap();
        assert_eq!(recipe.difficulty(), difficulty);
    }
}

#[test]
fn test_recipe_rejects_difficulty_above_five() {
    let mut recipe: Recipe = create_test_recipe(4);
    for difficulty in [6, 10, u8::MAX] {
        let err = recipe.set_difficulty(difficulty).unwrap_err();
        assert_eq!(err.to_string(), "Recipe difficulty should be between 0 and 5");
        assert_eq!(recipe.difficulty(), 4);
    }

    let result = Recipe::new("Pancakes", 6, Vec::new(), Vec::new(), ImageId::new());
    assert!(result.is_err());
}

#[test]
fn test_recipe_set_name_revalidates() {
    let mut recipe: Recipe = create_test_recipe(1);
    assert!(recipe.set_name("").is_err());
    assert_eq!(recipe.name(), "Pancakes");
}

#[test]
fn test_total_estimated_time_sums_steps() {
    let recipe: Recipe = create_test_recipe(1);
    assert_eq!(recipe.total_estimated_time(), Duration::from_secs(330));
}

#[test]
fn test_total_estimated_time_is_zero_without_steps() {
    let recipe: Recipe =
        Recipe::new("Water", 0, Vec::new(), Vec::new(), ImageId::new()).unwrap();
    assert_eq!(recipe.total_estimated_time(), Duration::ZERO);
}

#[test]
fn test_total_estimated_time_follows_step_changes() {
    let mut recipe: Recipe = create_test_recipe(1);
    assert_eq!(recipe.total_estimated_time(), Duration::from_secs(330));

    recipe
        .steps_mut()
        .push(Step::new("Serve", "Plate up", Duration::from_secs(30)).unwrap());
    assert_eq!(recipe.total_estimated_time(), Duration::from_secs(360));

    recipe.steps_mut()[0]
        .set_estimated_time(Duration::from_secs(30))
        .unwrap();
    assert_eq!(recipe.total_estimated_time(), Duration::from_secs(300));

    recipe.steps_mut().clear();
    assert_eq!(recipe.total_estimated_time(), Duration::ZERO);
}

#[test]
fn test_total_estimated_time_saturates_on_overflow() {
    let huge: Duration = Duration::from_secs(i64::MAX.unsigned_abs());
    let steps: Vec<Step> = (0..3)
        .map(|_| Step::new("Wait", "Wait a very long time", huge).unwrap())
        .collect();
    let recipe: Recipe = Recipe::new("Patience", 1, steps, Vec::new(), ImageId::new()).unwrap();

    assert_eq!(recipe.total_estimated_time(), Duration::MAX);
}
