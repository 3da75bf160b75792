// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the larder kitchen inventory.
//!
//! This crate stores the catalog (product types, units, products), stock
//! entries, recipes with their steps and ingredients, recipe likes, and
//! users with their login sessions. It is built on Diesel over `SQLite`.
//!
//! ## Databases
//!
//! - In-memory (`new_in_memory`) — one isolated shared-cache database per
//!   call, used by tests and by the server when no file is given
//! - File-based (`new_with_file`) — WAL journaling enabled
//!
//! Migrations are embedded and run on open. Foreign key enforcement is
//! verified at startup; cascading deletes depend on it.
//!
//! ## Cooking
//!
//! `Persistence::cook_recipe` wraps the domain cooking algorithm in a single
//! transaction so that a failed cook never leaves stock half-deducted.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use larder_domain::{
    Product, ProductId, ProductType, ProductTypeId, Recipe, RecipeId, Stock, StockId, Unit,
    UnitId, UserId,
};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{CookOutcome, SessionData, UserData};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:larder_memdb_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Users & Sessions
    // ========================================================================

    /// Creates a new user with a bcrypt-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the username is taken.
    pub fn create_user(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<UserId, PersistenceError> {
        mutations::users::create_user(&mut self.conn, username, password)
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_username(&mut self.conn, username)
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user_by_id(
        &mut self,
        user_id: UserId,
    ) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_id(&mut self.conn, user_id)
    }

    /// Verifies a password against a stored user's hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored hash cannot be parsed.
    pub fn verify_password(
        &self,
        user: &UserData,
        password: &str,
    ) -> Result<bool, PersistenceError> {
        queries::users::verify_password(password, &user.password_hash)
    }

    /// Updates the last login timestamp for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn update_last_login(&mut self, user_id: UserId) -> Result<(), PersistenceError> {
        mutations::users::update_last_login(&mut self.conn, user_id)
    }

    /// Creates a new session.
    ///
    /// # Arguments
    ///
    /// * `session_token` - The unique session token
    /// * `user_id` - The owning user
    /// * `expires_at` - The expiration timestamp (RFC 3339, UTC)
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_session(
        &mut self,
        session_token: &str,
        user_id: UserId,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::users::create_session(&mut self.conn, session_token, user_id, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::users::get_session_by_token(&mut self.conn, session_token)
    }

    /// Updates the last activity timestamp for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn update_session_activity(&mut self, session_id: i64) -> Result<(), PersistenceError> {
        mutations::users::update_session_activity(&mut self.conn, session_id)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::users::delete_session(&mut self.conn, session_token)
    }

    /// Deletes all sessions that expired before `now` (RFC 3339, UTC).
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_expired_sessions(&mut self, now: &str) -> Result<usize, PersistenceError> {
        mutations::users::delete_expired_sessions(&mut self.conn, now)
    }

    // ========================================================================
    // Product Types
    // ========================================================================

    /// Stores a new product type.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the name is taken.
    pub fn create_product_type(
        &mut self,
        product_type: &ProductType,
    ) -> Result<(), PersistenceError> {
        mutations::catalog::create_product_type(&mut self.conn, product_type)
    }

    /// Retrieves a product type.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn get_product_type(
        &mut self,
        product_type_id: ProductTypeId,
    ) -> Result<ProductType, PersistenceError> {
        queries::catalog::get_product_type(&mut self.conn, product_type_id)
    }

    /// Lists all product types.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_product_types(&mut self) -> Result<Vec<ProductType>, PersistenceError> {
        queries::catalog::list_product_types(&mut self.conn)
    }

    /// Deletes a product type.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn delete_product_type(
        &mut self,
        product_type_id: ProductTypeId,
    ) -> Result<(), PersistenceError> {
        mutations::catalog::delete_product_type(&mut self.conn, product_type_id)
    }

    // ========================================================================
    // Units
    // ========================================================================

    /// Stores a new unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_unit(&mut self, unit: &Unit) -> Result<(), PersistenceError> {
        mutations::catalog::create_unit(&mut self.conn, unit)
    }

    /// Retrieves a unit.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn get_unit(&mut self, unit_id: UnitId) -> Result<Unit, PersistenceError> {
        queries::catalog::get_unit(&mut self.conn, unit_id)
    }

    /// Lists all units.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_units(&mut self) -> Result<Vec<Unit>, PersistenceError> {
        queries::catalog::list_units(&mut self.conn)
    }

    /// Overwrites a stored unit.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn update_unit(&mut self, unit: &Unit) -> Result<(), PersistenceError> {
        mutations::catalog::update_unit(&mut self.conn, unit)
    }

    /// Deletes a unit.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist, `Conflict` while in use.
    pub fn delete_unit(&mut self, unit_id: UnitId) -> Result<(), PersistenceError> {
        mutations::catalog::delete_unit(&mut self.conn, unit_id)
    }

    // ========================================================================
    // Products
    // ========================================================================

    /// Stores a new product.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if its product type is not stored.
    pub fn create_product(&mut self, product: &Product) -> Result<(), PersistenceError> {
        mutations::catalog::create_product(&mut self.conn, product)
    }

    /// Retrieves a product with its product type.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn get_product(&mut self, product_id: ProductId) -> Result<Product, PersistenceError> {
        queries::catalog::get_product(&mut self.conn, product_id)
    }

    /// Lists all products.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_products(&mut self) -> Result<Vec<Product>, PersistenceError> {
        queries::catalog::list_products(&mut self.conn)
    }

    /// Overwrites a stored product.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn update_product(&mut self, product: &Product) -> Result<(), PersistenceError> {
        mutations::catalog::update_product(&mut self.conn, product)
    }

    /// Deletes a product and its stock.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist, `Conflict` while a recipe
    /// uses it.
    pub fn delete_product(&mut self, product_id: ProductId) -> Result<(), PersistenceError> {
        mutations::catalog::delete_product(&mut self.conn, product_id)
    }

    // ========================================================================
    // Stocks
    // ========================================================================

    /// Stores a new stock entry.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the product already has stock in that unit.
    pub fn create_stock(&mut self, stock: &Stock) -> Result<(), PersistenceError> {
        mutations::stocks::create_stock(&mut self.conn, stock)
    }

    /// Retrieves a stock entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn get_stock(&mut self, stock_id: StockId) -> Result<Stock, PersistenceError> {
        queries::stocks::get_stock(&mut self.conn, stock_id)
    }

    /// Lists all stock entries, soonest best-before date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_stocks(&mut self) -> Result<Vec<Stock>, PersistenceError> {
        queries::stocks::list_stocks(&mut self.conn)
    }

    /// Lists the stock entries for the given products.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_stocks_for_products(
        &mut self,
        product_ids: &[ProductId],
    ) -> Result<Vec<Stock>, PersistenceError> {
        queries::stocks::list_stocks_for_products(&mut self.conn, product_ids)
    }

    /// Writes a stock entry back.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn save_stock(&mut self, stock: &Stock) -> Result<(), PersistenceError> {
        mutations::stocks::save_stock(&mut self.conn, stock)
    }

    /// Deletes a stock entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn delete_stock(&mut self, stock_id: StockId) -> Result<(), PersistenceError> {
        mutations::stocks::delete_stock(&mut self.conn, stock_id)
    }

    // ========================================================================
    // Recipes & Likes
    // ========================================================================

    /// Stores a new recipe with its steps and ingredients.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if an ingredient's product or unit is not stored.
    pub fn create_recipe(&mut self, recipe: &Recipe) -> Result<(), PersistenceError> {
        mutations::recipes::create_recipe(&mut self.conn, recipe)
    }

    /// Retrieves a fully hydrated recipe.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn get_recipe(&mut self, recipe_id: RecipeId) -> Result<Recipe, PersistenceError> {
        queries::recipes::get_recipe(&mut self.conn, recipe_id)
    }

    /// Lists all recipes.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_recipes(&mut self) -> Result<Vec<Recipe>, PersistenceError> {
        queries::recipes::list_recipes(&mut self.conn)
    }

    /// Overwrites a stored recipe, replacing its steps and ingredients.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn update_recipe(&mut self, recipe: &Recipe) -> Result<(), PersistenceError> {
        mutations::recipes::update_recipe(&mut self.conn, recipe)
    }

    /// Deletes a recipe.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn delete_recipe(&mut self, recipe_id: RecipeId) -> Result<(), PersistenceError> {
        mutations::recipes::delete_recipe(&mut self.conn, recipe_id)
    }

    /// Records a like. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the recipe does not exist.
    pub fn like_recipe(
        &mut self,
        recipe_id: RecipeId,
        user_id: UserId,
    ) -> Result<(), PersistenceError> {
        mutations::recipes::like_recipe(&mut self.conn, recipe_id, user_id)
    }

    /// Removes a like. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn unlike_recipe(
        &mut self,
        recipe_id: RecipeId,
        user_id: UserId,
    ) -> Result<(), PersistenceError> {
        mutations::recipes::unlike_recipe(&mut self.conn, recipe_id, user_id)
    }

    /// Counts a recipe's likes.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_likes(&mut self, recipe_id: RecipeId) -> Result<i64, PersistenceError> {
        queries::recipes::count_likes(&mut self.conn, recipe_id)
    }

    /// Whether a user likes a recipe.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn has_liked(
        &mut self,
        recipe_id: RecipeId,
        user_id: UserId,
    ) -> Result<bool, PersistenceError> {
        queries::recipes::has_liked(&mut self.conn, recipe_id, user_id)
    }

    // ========================================================================
    // Kitchen
    // ========================================================================

    /// Cooks a stored recipe from stored stock in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown recipe and `Domain` when an
    /// ingredient cannot be served; stock is unchanged in both cases.
    pub fn cook_recipe(&mut self, recipe_id: RecipeId) -> Result<CookOutcome, PersistenceError> {
        mutations::kitchen::cook_recipe(&mut self.conn, recipe_id)
    }
}
