// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use larder_domain::ImageId;
use larder_persistence::Persistence;

use crate::{
    AuthenticatedUser, AuthenticationService, IngredientRequest, LoginRequest, ProductInfo,
    ProductRequest, RecipeInfo, RecipeRequest, RegisterRequest, StepRequest, StockInfo,
    StockRequest, UnitInfo, UnitRequest, create_product, create_recipe, create_stock,
    create_unit, login, register,
};

pub const TEST_PASSWORD: &str = "Pancakes42";

pub fn create_register_request(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        password: TEST_PASSWORD.to_string(),
        password_confirmation: TEST_PASSWORD.to_string(),
    }
}

/// Registers and logs in a user, returning the resolved session user.
pub fn create_test_user(persistence: &mut Persistence, username: &str) -> AuthenticatedUser {
    register(persistence, &create_register_request(username)).unwrap();
    let response = login(
        persistence,
        &LoginRequest {
            username: username.to_string(),
            password: TEST_PASSWORD.to_string(),
        },
    )
    .unwrap();
    AuthenticationService::validate_session(persistence, &response.session_token).unwrap()
}

pub fn create_test_unit(persistence: &mut Persistence, name: &str, symbol: &str) -> UnitInfo {
    create_unit(
        persistence,
        &UnitRequest {
            name: name.to_string(),
            symbol: symbol.to_string(),
        },
    )
    .unwrap()
}

pub fn create_test_product(persistence: &mut Persistence, name: &str) -> ProductInfo {
    create_product(
        persistence,
        &ProductRequest {
            name: name.to_string(),
            image_id: ImageId::new().to_string(),
            product_type_id: None,
        },
    )
    .unwrap()
}

pub fn create_test_stock(
    persistence: &mut Persistence,
    product: &ProductInfo,
    unit: &UnitInfo,
    quantity: f64,
) -> StockInfo {
    create_stock(
        persistence,
        &StockRequest {
            product_id: product.product_id.clone(),
            unit_id: unit.unit_id.clone(),
            quantity,
            best_before_date: String::from("2099-12-31"),
            purchase_date: String::from("2026-03-01"),
        },
    )
    .unwrap()
}

pub fn ingredient(product: &ProductInfo, quantity: f64, unit: &UnitInfo) -> IngredientRequest {
    IngredientRequest {
        product_id: product.product_id.clone(),
        quantity,
        unit_id: unit.unit_id.clone(),
    }
}

pub fn recipe_request(name: &str, ingredients: Vec<IngredientRequest>) -> RecipeRequest {
    RecipeRequest {
        name: name.to_string(),
        difficulty: 2,
        image_id: ImageId::new().to_string(),
        steps: vec![
            StepRequest {
                name: String::from("Mix"),
                instructions: String::from("Whisk everything together"),
                estimated_seconds: 300,
            },
            StepRequest {
                name: String::from("Fry"),
                instructions: String::from("Fry in a hot pan"),
                estimated_seconds: 600,
            },
        ],
        ingredients,
    }
}

/// Milk 1 L, flour 1000 g and 6 eggs in stock, plus a pancake recipe using
/// 0.5 L milk, 250 g flour and 3 eggs.
pub struct Kitchen {
    pub user: AuthenticatedUser,
    pub litre: UnitInfo,
    pub gram: UnitInfo,
    pub piece: UnitInfo,
    pub milk: ProductInfo,
    pub flour: ProductInfo,
    pub eggs: ProductInfo,
    pub milk_stock: StockInfo,
    pub flour_stock: StockInfo,
    pub egg_stock: StockInfo,
    pub pancakes: RecipeInfo,
}

impl Kitchen {
    pub fn stocked(persistence: &mut Persistence) -> Self {
        let user = create_test_user(persistence, "alice");
        let litre = create_test_unit(persistence, "Litre", "L");
        let gram = create_test_unit(persistence, "Gram", "g");
        let piece = create_test_unit(persistence, "Piece", "pc");
        let milk = create_test_product(persistence, "Milk");
        let flour = create_test_product(persistence, "Flour");
        let eggs = create_test_product(persistence, "Eggs");
        let milk_stock = create_test_stock(persistence, &milk, &litre, 1.0);
        let flour_stock = create_test_stock(persistence, &flour, &gram, 1000.0);
        let egg_stock = create_test_stock(persistence, &eggs, &piece, 6.0);
        let pancakes = create_recipe(
            persistence,
            &recipe_request(
                "Pancakes",
                vec![
                    ingredient(&milk, 0.5, &litre),
                    ingredient(&flour, 250.0, &gram),
                    ingredient(&eggs, 3.0, &piece),
                ],
            ),
            &user,
        )
        .unwrap();

        Self {
            user,
            litre,
            gram,
            piece,
            milk,
            flour,
            eggs,
            milk_stock,
            flour_stock,
            egg_stock,
            pancakes,
        }
    }
}
