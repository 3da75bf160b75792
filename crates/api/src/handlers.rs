// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Each handler takes the persistence layer plus a request DTO or path
//! identifier, hydrates domain objects, performs the operation and returns a
//! response DTO. Authentication is resolved by the caller; handlers that
//! depend on who is asking take an `AuthenticatedUser`.

use std::str::FromStr;
use std::time::Duration;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::info;

use larder_domain::{
    DomainError, ImageId, Ingredient, Product, ProductId, ProductType, ProductTypeId, Recipe,
    RecipeId, Step, Stock, StockId, Unit, UnitId, UserId,
};
use larder_persistence::{CookOutcome, Persistence, PersistenceError};

use crate::auth::{AuthenticatedUser, AuthenticationService, IssuedSession};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    CookResponse, CreateProductTypeRequest, IngredientInfo, IngredientRequest,
    ListProductTypesResponse, ListProductsResponse, ListRecipesResponse, ListStocksResponse,
    ListUnitsResponse, LikeResponse, LoginRequest, LoginResponse, ProductInfo, ProductRequest,
    ProductTypeInfo, RecipeInfo, RecipeRequest, RegisterRequest, RegisterResponse, StepInfo,
    StockInfo, StockRequest, UnitInfo, UnitRequest, WhoAmIResponse,
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

// ============================================================================
// Parsing & conversion helpers
// ============================================================================

/// Parses an identifier supplied by the client.
fn parse_id<T: FromStr<Err = DomainError>>(value: &str, field: &str) -> Result<T, ApiError> {
    T::from_str(value).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: e.to_string(),
    })
}

fn parse_date(value: &str, field: &str) -> Result<Date, ApiError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("Invalid date '{value}', expected YYYY-MM-DD: {e}"),
    })
}

fn format_date(date: Date) -> Result<String, ApiError> {
    date.format(DATE_FORMAT).map_err(|e| ApiError::Internal {
        message: format!("Failed to format date {date}: {e}"),
    })
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn product_type_info(product_type: &ProductType) -> ProductTypeInfo {
    ProductTypeInfo {
        product_type_id: product_type.id().to_string(),
        name: product_type.name().to_string(),
    }
}

fn unit_info(unit: &Unit) -> UnitInfo {
    UnitInfo {
        unit_id: unit.id().to_string(),
        name: unit.name().to_string(),
        symbol: unit.symbol().to_string(),
    }
}

fn product_info(product: &Product) -> ProductInfo {
    ProductInfo {
        product_id: product.id().to_string(),
        name: product.name().to_string(),
        image_id: product.image_id().to_string(),
        product_type: product.product_type().map(product_type_info),
    }
}

fn stock_info(stock: &Stock, today: Date) -> Result<StockInfo, ApiError> {
    Ok(StockInfo {
        stock_id: stock.id().to_string(),
        product: product_info(stock.product()),
        unit: unit_info(stock.unit()),
        quantity: stock.quantity(),
        best_before_date: format_date(stock.best_before_date())?,
        purchase_date: format_date(stock.purchase_date())?,
        expired: stock.is_expired(today),
    })
}

fn recipe_info(
    persistence: &mut Persistence,
    recipe: &Recipe,
    user: &AuthenticatedUser,
) -> Result<RecipeInfo, ApiError> {
    let likes: i64 = persistence
        .count_likes(recipe.id())
        .map_err(|e| translate_persistence_error(e, "Recipe"))?;
    let liked_by_me: bool = persistence
        .has_liked(recipe.id(), user.user_id)
        .map_err(|e| translate_persistence_error(e, "Recipe"))?;

    Ok(RecipeInfo {
        recipe_id: recipe.id().to_string(),
        name: recipe.name().to_string(),
        difficulty: recipe.difficulty(),
        image_id: recipe.image_id().to_string(),
        steps: recipe
            .steps()
            .iter()
            .map(|step| StepInfo {
                step_id: step.id().to_string(),
                name: step.name().to_string(),
                instructions: step.instructions().to_string(),
                estimated_seconds: step.estimated_time().as_secs(),
            })
            .collect(),
        ingredients: recipe
            .ingredients()
            .iter()
            .map(|ingredient| IngredientInfo {
                product: product_info(ingredient.product()),
                quantity: ingredient.quantity(),
                unit: unit_info(ingredient.unit()),
                description: ingredient.to_string(),
            })
            .collect(),
        total_estimated_seconds: recipe.total_estimated_time().as_secs(),
        likes,
        liked_by_me,
    })
}

/// Resolves an optional reference; unknown or malformed ids resolve to `None`.
fn resolve<T, I: FromStr>(
    value: &str,
    lookup: impl FnOnce(I) -> Result<T, PersistenceError>,
    resource_type: &str,
) -> Result<Option<T>, ApiError> {
    let Ok(id) = I::from_str(value) else {
        return Ok(None);
    };
    match lookup(id) {
        Ok(found) => Ok(Some(found)),
        Err(PersistenceError::NotFound(_)) => Ok(None),
        Err(e) => Err(translate_persistence_error(e, resource_type)),
    }
}

fn build_ingredient(
    persistence: &mut Persistence,
    request: &IngredientRequest,
) -> Result<Ingredient, ApiError> {
    let product: Option<Product> = resolve(
        &request.product_id,
        |id: ProductId| persistence.get_product(id),
        "Product",
    )?;
    let unit: Option<Unit> = resolve(
        &request.unit_id,
        |id: UnitId| persistence.get_unit(id),
        "Unit",
    )?;

    Ingredient::from_parts(product, request.quantity, unit).map_err(translate_domain_error)
}

fn build_recipe(
    persistence: &mut Persistence,
    recipe_id: RecipeId,
    request: &RecipeRequest,
) -> Result<Recipe, ApiError> {
    let image_id: ImageId = parse_id(&request.image_id, "image_id")?;

    let steps: Vec<Step> = request
        .steps
        .iter()
        .map(|step| {
            Step::new(
                step.name.clone(),
                step.instructions.clone(),
                Duration::from_secs(step.estimated_seconds),
            )
            .map_err(translate_domain_error)
        })
        .collect::<Result<_, _>>()?;

    let ingredients: Vec<Ingredient> = request
        .ingredients
        .iter()
        .map(|ingredient| build_ingredient(persistence, ingredient))
        .collect::<Result<_, _>>()?;

    Recipe::with_id(
        recipe_id,
        request.name.clone(),
        request.difficulty,
        steps,
        ingredients,
        image_id,
    )
    .map_err(translate_domain_error)
}

fn build_stock(
    persistence: &mut Persistence,
    stock_id: StockId,
    request: &StockRequest,
) -> Result<Stock, ApiError> {
    let product_id: ProductId = parse_id(&request.product_id, "product_id")?;
    let unit_id: UnitId = parse_id(&request.unit_id, "unit_id")?;
    let best_before_date: Date = parse_date(&request.best_before_date, "best_before_date")?;
    let purchase_date: Date = parse_date(&request.purchase_date, "purchase_date")?;

    let product: Product = persistence
        .get_product(product_id)
        .map_err(|e| translate_persistence_error(e, "Product"))?;
    let unit: Unit = persistence
        .get_unit(unit_id)
        .map_err(|e| translate_persistence_error(e, "Unit"))?;

    Stock::with_id(
        stock_id,
        product,
        unit,
        request.quantity,
        best_before_date,
        purchase_date,
    )
    .map_err(translate_domain_error)
}

fn build_product(
    persistence: &mut Persistence,
    product_id: ProductId,
    request: &ProductRequest,
) -> Result<Product, ApiError> {
    let image_id: ImageId = parse_id(&request.image_id, "image_id")?;
    let product_type: Option<ProductType> = match request.product_type_id.as_deref() {
        Some(type_id) => {
            let type_id: ProductTypeId = parse_id(type_id, "product_type_id")?;
            Some(
                persistence
                    .get_product_type(type_id)
                    .map_err(|e| translate_persistence_error(e, "Product type"))?,
            )
        }
        None => None,
    };

    Product::with_id(product_id, request.name.clone(), image_id, product_type)
        .map_err(translate_domain_error)
}

// ============================================================================
// Authentication
// ============================================================================

/// Registers a new user.
///
/// # Errors
///
/// Returns an error if:
/// - The username is blank
/// - The password violates the password policy
/// - The username is taken
pub fn register(
    persistence: &mut Persistence,
    request: &RegisterRequest,
) -> Result<RegisterResponse, ApiError> {
    let username: &str = request.username.trim();
    if username.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("username"),
            message: String::from("Username should not be null nor empty"),
        });
    }

    PasswordPolicy::default().validate(
        &request.password,
        &request.password_confirmation,
        username,
    )?;

    let user_id: UserId = persistence
        .create_user(username, &request.password)
        .map_err(|e| match e {
            PersistenceError::Conflict(_) => ApiError::Conflict {
                message: format!("Username '{username}' is already taken"),
            },
            other => translate_persistence_error(other, "User"),
        })?;

    info!(%user_id, username, "User registered");

    Ok(RegisterResponse {
        user_id: user_id.to_string(),
        username: username.to_string(),
    })
}

/// Logs in and issues a session token.
///
/// # Errors
///
/// Returns an error if the credentials are wrong or a database operation
/// fails.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let session: IssuedSession =
        AuthenticationService::login(persistence, &request.username, &request.password)?;

    Ok(LoginResponse {
        session_token: session.session_token,
        username: session.user.username,
        expires_at: session.expires_at,
    })
}

/// Logs out by deleting the session.
///
/// # Errors
///
/// Returns an error if the logout fails.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Describes the current user.
#[must_use]
pub fn whoami(user: &AuthenticatedUser) -> WhoAmIResponse {
    WhoAmIResponse {
        user_id: user.user_id.to_string(),
        username: user.username.clone(),
    }
}

// ============================================================================
// Product types
// ============================================================================

/// Creates a product type.
///
/// # Errors
///
/// Returns an error if the name is blank or already used.
pub fn create_product_type(
    persistence: &mut Persistence,
    request: &CreateProductTypeRequest,
) -> Result<ProductTypeInfo, ApiError> {
    let product_type: ProductType =
        ProductType::new(request.name.clone()).map_err(translate_domain_error)?;
    persistence
        .create_product_type(&product_type)
        .map_err(|e| translate_persistence_error(e, "Product type"))?;
    Ok(product_type_info(&product_type))
}

/// Lists all product types.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_product_types(
    persistence: &mut Persistence,
) -> Result<ListProductTypesResponse, ApiError> {
    let product_types: Vec<ProductType> = persistence
        .list_product_types()
        .map_err(|e| translate_persistence_error(e, "Product type"))?;
    Ok(ListProductTypesResponse {
        product_types: product_types.iter().map(product_type_info).collect(),
    })
}

/// Deletes a product type.
///
/// # Errors
///
/// Returns an error if the id is malformed or unknown.
pub fn delete_product_type(
    persistence: &mut Persistence,
    product_type_id: &str,
) -> Result<(), ApiError> {
    let product_type_id: ProductTypeId = parse_id(product_type_id, "product_type_id")?;
    persistence
        .delete_product_type(product_type_id)
        .map_err(|e| translate_persistence_error(e, "Product type"))
}

// ============================================================================
// Units
// ============================================================================

/// Creates a unit.
///
/// # Errors
///
/// Returns an error if the unit cannot be stored.
pub fn create_unit(
    persistence: &mut Persistence,
    request: &UnitRequest,
) -> Result<UnitInfo, ApiError> {
    let unit: Unit = Unit::new(request.name.clone(), request.symbol.clone());
    persistence
        .create_unit(&unit)
        .map_err(|e| translate_persistence_error(e, "Unit"))?;
    Ok(unit_info(&unit))
}

/// Lists all units.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_units(persistence: &mut Persistence) -> Result<ListUnitsResponse, ApiError> {
    let units: Vec<Unit> = persistence
        .list_units()
        .map_err(|e| translate_persistence_error(e, "Unit"))?;
    Ok(ListUnitsResponse {
        units: units.iter().map(unit_info).collect(),
    })
}

/// Retrieves a unit.
///
/// # Errors
///
/// Returns an error if the id is malformed or unknown.
pub fn get_unit(persistence: &mut Persistence, unit_id: &str) -> Result<UnitInfo, ApiError> {
    let unit_id: UnitId = parse_id(unit_id, "unit_id")?;
    let unit: Unit = persistence
        .get_unit(unit_id)
        .map_err(|e| translate_persistence_error(e, "Unit"))?;
    Ok(unit_info(&unit))
}

/// Renames a unit.
///
/// # Errors
///
/// Returns an error if the id is malformed or unknown.
pub fn update_unit(
    persistence: &mut Persistence,
    unit_id: &str,
    request: &UnitRequest,
) -> Result<UnitInfo, ApiError> {
    let unit_id: UnitId = parse_id(unit_id, "unit_id")?;
    let mut unit: Unit = persistence
        .get_unit(unit_id)
        .map_err(|e| translate_persistence_error(e, "Unit"))?;

    unit.set_name(request.name.clone());
    unit.set_symbol(request.symbol.clone());

    persistence
        .update_unit(&unit)
        .map_err(|e| translate_persistence_error(e, "Unit"))?;
    Ok(unit_info(&unit))
}

/// Deletes a unit that no stock or recipe uses.
///
/// # Errors
///
/// Returns an error if the id is unknown or the unit is in use.
pub fn delete_unit(persistence: &mut Persistence, unit_id: &str) -> Result<(), ApiError> {
    let unit_id: UnitId = parse_id(unit_id, "unit_id")?;
    persistence
        .delete_unit(unit_id)
        .map_err(|e| translate_persistence_error(e, "Unit"))
}

// ============================================================================
// Products
// ============================================================================

/// Creates a product.
///
/// # Errors
///
/// Returns an error if a field is invalid or the product type is unknown.
pub fn create_product(
    persistence: &mut Persistence,
    request: &ProductRequest,
) -> Result<ProductInfo, ApiError> {
    let product: Product = build_product(persistence, ProductId::new(), request)?;
    persistence
        .create_product(&product)
        .map_err(|e| translate_persistence_error(e, "Product"))?;
    info!(product_id = %product.id(), name = product.name(), "Product created");
    Ok(product_info(&product))
}

/// Lists all products.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_products(persistence: &mut Persistence) -> Result<ListProductsResponse, ApiError> {
    let products: Vec<Product> = persistence
        .list_products()
        .map_err(|e| translate_persistence_error(e, "Product"))?;
    Ok(ListProductsResponse {
        products: products.iter().map(product_info).collect(),
    })
}

/// Retrieves a product.
///
/// # Errors
///
/// Returns an error if the id is malformed or unknown.
pub fn get_product(
    persistence: &mut Persistence,
    product_id: &str,
) -> Result<ProductInfo, ApiError> {
    let product_id: ProductId = parse_id(product_id, "product_id")?;
    let product: Product = persistence
        .get_product(product_id)
        .map_err(|e| translate_persistence_error(e, "Product"))?;
    Ok(product_info(&product))
}

/// Overwrites a product.
///
/// # Errors
///
/// Returns an error if the product is unknown or a field is invalid.
pub fn update_product(
    persistence: &mut Persistence,
    product_id: &str,
    request: &ProductRequest,
) -> Result<ProductInfo, ApiError> {
    let product_id: ProductId = parse_id(product_id, "product_id")?;
    let product: Product = build_product(persistence, product_id, request)?;
    persistence
        .update_product(&product)
        .map_err(|e| translate_persistence_error(e, "Product"))?;
    Ok(product_info(&product))
}

/// Deletes a product and its stock.
///
/// # Errors
///
/// Returns an error if the id is unknown or a recipe uses the product.
pub fn delete_product(persistence: &mut Persistence, product_id: &str) -> Result<(), ApiError> {
    let product_id: ProductId = parse_id(product_id, "product_id")?;
    persistence
        .delete_product(product_id)
        .map_err(|e| translate_persistence_error(e, "Product"))
}

// ============================================================================
// Stock
// ============================================================================

/// Creates a stock entry.
///
/// # Errors
///
/// Returns an error if:
/// - The product or unit is unknown
/// - The quantity is not positive or a date is malformed
/// - The product already has stock in that unit
pub fn create_stock(
    persistence: &mut Persistence,
    request: &StockRequest,
) -> Result<StockInfo, ApiError> {
    let stock: Stock = build_stock(persistence, StockId::new(), request)?;
    persistence
        .create_stock(&stock)
        .map_err(|e| translate_persistence_error(e, "Stock"))?;
    stock_info(&stock, today())
}

/// Lists all stock entries, soonest best-before date first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_stocks(persistence: &mut Persistence) -> Result<ListStocksResponse, ApiError> {
    let today: Date = today();
    let stocks: Vec<Stock> = persistence
        .list_stocks()
        .map_err(|e| translate_persistence_error(e, "Stock"))?;
    Ok(ListStocksResponse {
        stocks: stocks
            .iter()
            .map(|stock| stock_info(stock, today))
            .collect::<Result<_, _>>()?,
    })
}

/// Retrieves a stock entry.
///
/// # Errors
///
/// Returns an error if the id is malformed or unknown.
pub fn get_stock(persistence: &mut Persistence, stock_id: &str) -> Result<StockInfo, ApiError> {
    let stock_id: StockId = parse_id(stock_id, "stock_id")?;
    let stock: Stock = persistence
        .get_stock(stock_id)
        .map_err(|e| translate_persistence_error(e, "Stock"))?;
    stock_info(&stock, today())
}

/// Overwrites a stock entry.
///
/// # Errors
///
/// Returns an error if the stock, product or unit is unknown or a field is
/// invalid.
pub fn update_stock(
    persistence: &mut Persistence,
    stock_id: &str,
    request: &StockRequest,
) -> Result<StockInfo, ApiError> {
    let stock_id: StockId = parse_id(stock_id, "stock_id")?;
    let stock: Stock = build_stock(persistence, stock_id, request)?;
    persistence
        .save_stock(&stock)
        .map_err(|e| translate_persistence_error(e, "Stock"))?;
    stock_info(&stock, today())
}

/// Deletes a stock entry.
///
/// # Errors
///
/// Returns an error if the id is malformed or unknown.
pub fn delete_stock(persistence: &mut Persistence, stock_id: &str) -> Result<(), ApiError> {
    let stock_id: StockId = parse_id(stock_id, "stock_id")?;
    persistence
        .delete_stock(stock_id)
        .map_err(|e| translate_persistence_error(e, "Stock"))
}

// ============================================================================
// Recipes
// ============================================================================

/// Creates a recipe.
///
/// Ingredient product and unit ids that do not resolve are reported as
/// missing product or unit.
///
/// # Errors
///
/// Returns an error if any field, step or ingredient is invalid.
pub fn create_recipe(
    persistence: &mut Persistence,
    request: &RecipeRequest,
    user: &AuthenticatedUser,
) -> Result<RecipeInfo, ApiError> {
    let recipe: Recipe = build_recipe(persistence, RecipeId::new(), request)?;
    persistence
        .create_recipe(&recipe)
        .map_err(|e| translate_persistence_error(e, "Recipe"))?;
    info!(
        recipe_id = %recipe.id(),
        name = recipe.name(),
        username = %user.username,
        "Recipe created"
    );
    recipe_info(persistence, &recipe, user)
}

/// Lists all recipes.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_recipes(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
) -> Result<ListRecipesResponse, ApiError> {
    let recipes: Vec<Recipe> = persistence
        .list_recipes()
        .map_err(|e| translate_persistence_error(e, "Recipe"))?;
    Ok(ListRecipesResponse {
        recipes: recipes
            .iter()
            .map(|recipe| recipe_info(persistence, recipe, user))
            .collect::<Result<_, _>>()?,
    })
}

/// Retrieves a recipe.
///
/// # Errors
///
/// Returns an error if the id is malformed or unknown.
pub fn get_recipe(
    persistence: &mut Persistence,
    recipe_id: &str,
    user: &AuthenticatedUser,
) -> Result<RecipeInfo, ApiError> {
    let recipe_id: RecipeId = parse_id(recipe_id, "recipe_id")?;
    let recipe: Recipe = persistence
        .get_recipe(recipe_id)
        .map_err(|e| translate_persistence_error(e, "Recipe"))?;
    recipe_info(persistence, &recipe, user)
}

/// Overwrites a recipe, replacing its steps and ingredients.
///
/// # Errors
///
/// Returns an error if the recipe is unknown or any field is invalid.
pub fn update_recipe(
    persistence: &mut Persistence,
    recipe_id: &str,
    request: &RecipeRequest,
    user: &AuthenticatedUser,
) -> Result<RecipeInfo, ApiError> {
    let recipe_id: RecipeId = parse_id(recipe_id, "recipe_id")?;
    let recipe: Recipe = build_recipe(persistence, recipe_id, request)?;
    persistence
        .update_recipe(&recipe)
        .map_err(|e| translate_persistence_error(e, "Recipe"))?;
    recipe_info(persistence, &recipe, user)
}

/// Deletes a recipe.
///
/// # Errors
///
/// Returns an error if the id is malformed or unknown.
pub fn delete_recipe(persistence: &mut Persistence, recipe_id: &str) -> Result<(), ApiError> {
    let recipe_id: RecipeId = parse_id(recipe_id, "recipe_id")?;
    persistence
        .delete_recipe(recipe_id)
        .map_err(|e| translate_persistence_error(e, "Recipe"))
}

fn like_status(
    persistence: &mut Persistence,
    recipe_id: RecipeId,
    user: &AuthenticatedUser,
) -> Result<LikeResponse, ApiError> {
    Ok(LikeResponse {
        recipe_id: recipe_id.to_string(),
        likes: persistence
            .count_likes(recipe_id)
            .map_err(|e| translate_persistence_error(e, "Recipe"))?,
        liked_by_me: persistence
            .has_liked(recipe_id, user.user_id)
            .map_err(|e| translate_persistence_error(e, "Recipe"))?,
    })
}

/// Likes a recipe on behalf of the current user. Idempotent.
///
/// # Errors
///
/// Returns an error if the id is malformed or unknown.
pub fn like_recipe(
    persistence: &mut Persistence,
    recipe_id: &str,
    user: &AuthenticatedUser,
) -> Result<LikeResponse, ApiError> {
    let recipe_id: RecipeId = parse_id(recipe_id, "recipe_id")?;
    persistence
        .like_recipe(recipe_id, user.user_id)
        .map_err(|e| translate_persistence_error(e, "Recipe"))?;
    like_status(persistence, recipe_id, user)
}

/// Withdraws the current user's like. Idempotent.
///
/// # Errors
///
/// Returns an error if the id is malformed or the database update fails.
pub fn unlike_recipe(
    persistence: &mut Persistence,
    recipe_id: &str,
    user: &AuthenticatedUser,
) -> Result<LikeResponse, ApiError> {
    let recipe_id: RecipeId = parse_id(recipe_id, "recipe_id")?;
    persistence
        .unlike_recipe(recipe_id, user.user_id)
        .map_err(|e| translate_persistence_error(e, "Recipe"))?;
    like_status(persistence, recipe_id, user)
}

// ============================================================================
// Kitchen
// ============================================================================

/// Cooks a recipe, deducting its ingredients from stock.
///
/// Either every ingredient is deducted or none is.
///
/// # Errors
///
/// Returns an error if:
/// - The recipe is unknown
/// - An ingredient's product has no stock
/// - An ingredient's unit differs from its stock's unit
pub fn cook_recipe(
    persistence: &mut Persistence,
    recipe_id: &str,
    user: &AuthenticatedUser,
) -> Result<CookResponse, ApiError> {
    let recipe_id: RecipeId = parse_id(recipe_id, "recipe_id")?;
    let outcome: CookOutcome = persistence
        .cook_recipe(recipe_id)
        .map_err(|e| translate_persistence_error(e, "Recipe"))?;

    info!(%recipe_id, username = %user.username, removed = outcome.removed.len(), "Recipe cooked");

    let today: Date = today();
    Ok(CookResponse {
        recipe_id: recipe_id.to_string(),
        remaining: outcome
            .remaining
            .iter()
            .map(|stock| stock_info(stock, today))
            .collect::<Result<_, _>>()?,
        removed_stock_ids: outcome.removed.iter().map(ToString::to_string).collect(),
    })
}
