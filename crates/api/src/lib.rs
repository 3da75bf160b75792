// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the larder kitchen inventory.
//!
//! Request DTOs are validated and hydrated into domain objects here, the
//! persistence layer is driven, and results are returned as response DTOs.
//! Domain and persistence errors are translated into `ApiError` explicitly.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedUser, AuthenticationService, IssuedSession, format_timestamp};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    cook_recipe, create_product, create_product_type, create_recipe, create_stock, create_unit,
    delete_product, delete_product_type, delete_recipe, delete_stock, delete_unit, get_product,
    get_recipe, get_stock, get_unit, like_recipe, list_product_types, list_products, list_recipes,
    list_stocks, list_units, login, logout, register, unlike_recipe, update_product,
    update_recipe, update_stock, update_unit, whoami,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    CookResponse, CreateProductTypeRequest, IngredientInfo, IngredientRequest,
    ListProductTypesResponse, ListProductsResponse, ListRecipesResponse, ListStocksResponse,
    ListUnitsResponse, LikeResponse, LoginRequest, LoginResponse, ProductInfo, ProductRequest,
    ProductTypeInfo, RecipeInfo, RecipeRequest, RegisterRequest, RegisterResponse, StepInfo,
    StepRequest, StockInfo, StockRequest, UnitInfo, UnitRequest, WhoAmIResponse,
};
