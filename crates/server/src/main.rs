// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use larder_api::{
    ApiError, CookResponse, CreateProductTypeRequest, LikeResponse, ListProductTypesResponse,
    ListProductsResponse, ListRecipesResponse, ListStocksResponse, ListUnitsResponse,
    LoginRequest, LoginResponse, ProductInfo, ProductRequest, ProductTypeInfo, RecipeInfo,
    RecipeRequest, RegisterRequest, RegisterResponse, StockInfo, StockRequest, UnitInfo,
    UnitRequest, WhoAmIResponse,
};
use larder_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::session::SessionUser;

/// Larder Server - HTTP server for recipes and kitchen stock
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

/// Application state shared across handlers.
///
/// The single mutex also serialises cooking, so two requests can never
/// consume the same stock concurrently.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Authentication
// ============================================================================

async fn handle_register(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, HttpError> {
    info!(username = %req.username, "Handling register request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterResponse = larder_api::register(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(username = %req.username, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = larder_api::login(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, token): SessionUser,
) -> Result<StatusCode, HttpError> {
    info!(username = %user.username, "Handling logout request");

    let mut persistence = app_state.persistence.lock().await;
    larder_api::logout(&mut persistence, &token)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

async fn handle_whoami(SessionUser(user, _): SessionUser) -> Json<WhoAmIResponse> {
    Json(larder_api::whoami(&user))
}

// ============================================================================
// Product types
// ============================================================================

async fn handle_create_product_type(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Json(req): Json<CreateProductTypeRequest>,
) -> Result<(StatusCode, Json<ProductTypeInfo>), HttpError> {
    info!(username = %user.username, name = %req.name, "Handling create_product_type request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ProductTypeInfo = larder_api::create_product_type(&mut persistence, &req)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_list_product_types(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(_, _): SessionUser,
) -> Result<Json<ListProductTypesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListProductTypesResponse = larder_api::list_product_types(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_delete_product_type(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(product_type_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    info!(username = %user.username, %product_type_id, "Handling delete_product_type request");

    let mut persistence = app_state.persistence.lock().await;
    larder_api::delete_product_type(&mut persistence, &product_type_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Units
// ============================================================================

async fn handle_create_unit(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Json(req): Json<UnitRequest>,
) -> Result<(StatusCode, Json<UnitInfo>), HttpError> {
    info!(username = %user.username, name = %req.name, "Handling create_unit request");

    let mut persistence = app_state.persistence.lock().await;
    let response: UnitInfo = larder_api::create_unit(&mut persistence, &req)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_list_units(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(_, _): SessionUser,
) -> Result<Json<ListUnitsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListUnitsResponse = larder_api::list_units(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_get_unit(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(_, _): SessionUser,
    Path(unit_id): Path<String>,
) -> Result<Json<UnitInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: UnitInfo = larder_api::get_unit(&mut persistence, &unit_id)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_update_unit(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(unit_id): Path<String>,
    Json(req): Json<UnitRequest>,
) -> Result<Json<UnitInfo>, HttpError> {
    info!(username = %user.username, %unit_id, "Handling update_unit request");

    let mut persistence = app_state.persistence.lock().await;
    let response: UnitInfo = larder_api::update_unit(&mut persistence, &unit_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_delete_unit(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(unit_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    info!(username = %user.username, %unit_id, "Handling delete_unit request");

    let mut persistence = app_state.persistence.lock().await;
    larder_api::delete_unit(&mut persistence, &unit_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Products
// ============================================================================

async fn handle_create_product(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductInfo>), HttpError> {
    info!(username = %user.username, name = %req.name, "Handling create_product request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ProductInfo = larder_api::create_product(&mut persistence, &req)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_list_products(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(_, _): SessionUser,
) -> Result<Json<ListProductsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListProductsResponse = larder_api::list_products(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_get_product(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(_, _): SessionUser,
    Path(product_id): Path<String>,
) -> Result<Json<ProductInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ProductInfo = larder_api::get_product(&mut persistence, &product_id)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_update_product(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(product_id): Path<String>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<ProductInfo>, HttpError> {
    info!(username = %user.username, %product_id, "Handling update_product request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ProductInfo = larder_api::update_product(&mut persistence, &product_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_delete_product(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(product_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    info!(username = %user.username, %product_id, "Handling delete_product request");

    let mut persistence = app_state.persistence.lock().await;
    larder_api::delete_product(&mut persistence, &product_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Stocks
// ============================================================================

async fn handle_create_stock(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Json(req): Json<StockRequest>,
) -> Result<(StatusCode, Json<StockInfo>), HttpError> {
    info!(username = %user.username, product_id = %req.product_id, "Handling create_stock request");

    let mut persistence = app_state.persistence.lock().await;
    let response: StockInfo = larder_api::create_stock(&mut persistence, &req)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_list_stocks(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(_, _): SessionUser,
) -> Result<Json<ListStocksResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListStocksResponse = larder_api::list_stocks(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_get_stock(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(_, _): SessionUser,
    Path(stock_id): Path<String>,
) -> Result<Json<StockInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: StockInfo = larder_api::get_stock(&mut persistence, &stock_id)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_update_stock(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(stock_id): Path<String>,
    Json(req): Json<StockRequest>,
) -> Result<Json<StockInfo>, HttpError> {
    info!(username = %user.username, %stock_id, "Handling update_stock request");

    let mut persistence = app_state.persistence.lock().await;
    let response: StockInfo = larder_api::update_stock(&mut persistence, &stock_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_delete_stock(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(stock_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    info!(username = %user.username, %stock_id, "Handling delete_stock request");

    let mut persistence = app_state.persistence.lock().await;
    larder_api::delete_stock(&mut persistence, &stock_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Recipes
// ============================================================================

async fn handle_create_recipe(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Json(req): Json<RecipeRequest>,
) -> Result<(StatusCode, Json<RecipeInfo>), HttpError> {
    info!(username = %user.username, name = %req.name, "Handling create_recipe request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RecipeInfo = larder_api::create_recipe(&mut persistence, &req, &user)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_list_recipes(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
) -> Result<Json<ListRecipesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListRecipesResponse = larder_api::list_recipes(&mut persistence, &user)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_get_recipe(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(recipe_id): Path<String>,
) -> Result<Json<RecipeInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: RecipeInfo = larder_api::get_recipe(&mut persistence, &recipe_id, &user)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_update_recipe(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(recipe_id): Path<String>,
    Json(req): Json<RecipeRequest>,
) -> Result<Json<RecipeInfo>, HttpError> {
    info!(username = %user.username, %recipe_id, "Handling update_recipe request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RecipeInfo =
        larder_api::update_recipe(&mut persistence, &recipe_id, &req, &user)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_delete_recipe(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(recipe_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    info!(username = %user.username, %recipe_id, "Handling delete_recipe request");

    let mut persistence = app_state.persistence.lock().await;
    larder_api::delete_recipe(&mut persistence, &recipe_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

async fn handle_like_recipe(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(recipe_id): Path<String>,
) -> Result<Json<LikeResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: LikeResponse = larder_api::like_recipe(&mut persistence, &recipe_id, &user)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_unlike_recipe(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(recipe_id): Path<String>,
) -> Result<Json<LikeResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: LikeResponse = larder_api::unlike_recipe(&mut persistence, &recipe_id, &user)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/recipes/{id}/cook`.
///
/// Consumes the recipe's ingredients from stock. Either every ingredient
/// is deducted or the stock is left untouched.
async fn handle_cook_recipe(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, _): SessionUser,
    Path(recipe_id): Path<String>,
) -> Result<Json<CookResponse>, HttpError> {
    info!(username = %user.username, %recipe_id, "Handling cook_recipe request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CookResponse = larder_api::cook_recipe(&mut persistence, &recipe_id, &user)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/register", post(handle_register))
        .route("/auth/login", post(handle_login))
        .route("/auth/logout", post(handle_logout))
        .route("/auth/whoami", get(handle_whoami))
        .route(
            "/product_types",
            get(handle_list_product_types).post(handle_create_product_type),
        )
        .route(
            "/product_types/{id}",
            axum::routing::delete(handle_delete_product_type),
        )
        .route("/units", get(handle_list_units).post(handle_create_unit))
        .route(
            "/units/{id}",
            get(handle_get_unit)
                .put(handle_update_unit)
                .delete(handle_delete_unit),
        )
        .route(
            "/products",
            get(handle_list_products).post(handle_create_product),
        )
        .route(
            "/products/{id}",
            get(handle_get_product)
                .put(handle_update_product)
                .delete(handle_delete_product),
        )
        .route("/stocks", get(handle_list_stocks).post(handle_create_stock))
        .route(
            "/stocks/{id}",
            get(handle_get_stock)
                .put(handle_update_stock)
                .delete(handle_delete_stock),
        )
        .route(
            "/recipes",
            get(handle_list_recipes).post(handle_create_recipe),
        )
        .route(
            "/recipes/{id}",
            get(handle_get_recipe)
                .put(handle_update_recipe)
                .delete(handle_delete_recipe),
        )
        .route(
            "/recipes/{id}/like",
            post(handle_like_recipe).delete(handle_unlike_recipe),
        )
        .route("/recipes/{id}/cook", post(handle_cook_recipe))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Larder Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
