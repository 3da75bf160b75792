// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Identifiers travel as hyphenated UUID strings and dates as `YYYY-MM-DD`
//! strings; handlers parse them into domain types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Authentication
// ============================================================================

/// API request to register a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// The desired username.
    pub username: String,
    /// The password.
    pub password: String,
    /// The password, typed again.
    pub password_confirmation: String,
}

/// API response for a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// The new user's identifier.
    pub user_id: String,
    /// The username.
    pub username: String,
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The username.
    pub username: String,
    /// The password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The bearer token for subsequent requests.
    pub session_token: String,
    /// The logged-in username.
    pub username: String,
    /// When the token expires (RFC 3339).
    pub expires_at: String,
}

/// API response describing the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    /// The user's identifier.
    pub user_id: String,
    /// The username.
    pub username: String,
}

// ============================================================================
// Catalog
// ============================================================================

/// API request to create a product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProductTypeRequest {
    /// The product type name.
    pub name: String,
}

/// A product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTypeInfo {
    pub product_type_id: String,
    pub name: String,
}

/// API response listing product types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProductTypesResponse {
    pub product_types: Vec<ProductTypeInfo>,
}

/// API request to create or overwrite a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRequest {
    /// The unit name, e.g. "Litre".
    pub name: String,
    /// The unit symbol, e.g. "L".
    pub symbol: String,
}

/// A unit of measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInfo {
    pub unit_id: String,
    pub name: String,
    pub symbol: String,
}

/// API response listing units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUnitsResponse {
    pub units: Vec<UnitInfo>,
}

/// API request to create or overwrite a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRequest {
    /// The product name.
    pub name: String,
    /// The product's image identifier.
    pub image_id: String,
    /// The product type, if any.
    #[serde(default)]
    pub product_type_id: Option<String>,
}

/// A product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub product_id: String,
    pub name: String,
    pub image_id: String,
    pub product_type: Option<ProductTypeInfo>,
}

/// API response listing products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProductsResponse {
    pub products: Vec<ProductInfo>,
}

// ============================================================================
// Stock
// ============================================================================

/// API request to create or overwrite a stock entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRequest {
    /// The stocked product.
    pub product_id: String,
    /// The unit the quantity is held in.
    pub unit_id: String,
    /// The quantity on hand; must be positive.
    pub quantity: f64,
    /// Best-before date (`YYYY-MM-DD`).
    pub best_before_date: String,
    /// Purchase date (`YYYY-MM-DD`).
    pub purchase_date: String,
}

/// A stock entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInfo {
    pub stock_id: String,
    pub product: ProductInfo,
    pub unit: UnitInfo,
    pub quantity: f64,
    pub best_before_date: String,
    pub purchase_date: String,
    /// Whether the best-before date has passed.
    pub expired: bool,
}

/// API response listing stock entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListStocksResponse {
    pub stocks: Vec<StockInfo>,
}

// ============================================================================
// Recipes
// ============================================================================

/// A step within a recipe request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRequest {
    pub name: String,
    pub instructions: String,
    /// Estimated time in seconds; must be positive.
    pub estimated_seconds: u64,
}

/// An ingredient within a recipe request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRequest {
    pub product_id: String,
    pub quantity: f64,
    pub unit_id: String,
}

/// API request to create or overwrite a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub name: String,
    /// Difficulty from 0 to 5.
    pub difficulty: u8,
    pub image_id: String,
    /// Steps in cooking order.
    #[serde(default)]
    pub steps: Vec<StepRequest>,
    #[serde(default)]
    pub ingredients: Vec<IngredientRequest>,
}

/// A recipe step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    pub step_id: String,
    pub name: String,
    pub instructions: String,
    pub estimated_seconds: u64,
}

/// A recipe ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientInfo {
    pub product: ProductInfo,
    pub quantity: f64,
    pub unit: UnitInfo,
    /// Human-readable form, e.g. "0.5 L of Milk".
    pub description: String,
}

/// A recipe with its steps, ingredients and like status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeInfo {
    pub recipe_id: String,
    pub name: String,
    pub difficulty: u8,
    pub image_id: String,
    pub steps: Vec<StepInfo>,
    pub ingredients: Vec<IngredientInfo>,
    /// Sum of all step estimates, in seconds.
    pub total_estimated_seconds: u64,
    pub likes: i64,
    /// Whether the requesting user likes this recipe.
    pub liked_by_me: bool,
}

/// API response listing recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeInfo>,
}

/// API response after liking or unliking a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub recipe_id: String,
    pub likes: i64,
    pub liked_by_me: bool,
}

/// API response after cooking a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookResponse {
    pub recipe_id: String,
    /// Stock entries touched by the recipe that still hold a quantity.
    pub remaining: Vec<StockInfo>,
    /// Stock entries that were used up and removed.
    pub removed_stock_ids: Vec<String>,
}
