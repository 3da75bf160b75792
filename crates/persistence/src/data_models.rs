// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversions to and from domain values.
//!
//! Identifiers are stored as hyphenated UUID text, dates as ISO 8601
//! (`YYYY-MM-DD`) text and step durations as whole seconds.

use std::str::FromStr;
use std::time::Duration;

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use larder_domain::{
    ImageId, Ingredient, Product, ProductId, ProductType, ProductTypeId, Step, StepId, Stock,
    StockId, Unit, UnitId, UserId,
};

use crate::diesel_schema::{
    product_types, products, recipe_ingredients, recipe_steps, recipes, sessions, stocks, units,
    users,
};
use crate::error::PersistenceError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a stored identifier column.
pub(crate) fn parse_id<T: FromStr>(value: &str, column: &str) -> Result<T, PersistenceError> {
    T::from_str(value)
        .map_err(|_| PersistenceError::CorruptRow(format!("{column} holds '{value}'")))
}

/// Formats a date for storage.
pub(crate) fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|e| PersistenceError::Other(format!("Failed to format date {date}: {e}")))
}

/// Parses a stored date column.
pub(crate) fn parse_date(value: &str, column: &str) -> Result<Date, PersistenceError> {
    Date::parse(value, DATE_FORMAT)
        .map_err(|e| PersistenceError::CorruptRow(format!("{column} holds '{value}': {e}")))
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = product_types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ProductTypeRow {
    pub product_type_id: String,
    pub name: String,
}

impl ProductTypeRow {
    pub fn from_domain(product_type: &ProductType) -> Self {
        Self {
            product_type_id: product_type.id().to_string(),
            name: product_type.name().to_string(),
        }
    }

    pub fn into_domain(self) -> Result<ProductType, PersistenceError> {
        let id: ProductTypeId = parse_id(&self.product_type_id, "product_types.product_type_id")?;
        Ok(ProductType::with_id(id, self.name)?)
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ProductRow {
    pub product_id: String,
    pub name: String,
    pub image_id: String,
    pub product_type_id: Option<String>,
}

impl ProductRow {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            product_id: product.id().to_string(),
            name: product.name().to_string(),
            image_id: product.image_id().to_string(),
            product_type_id: product.product_type().map(|t| t.id().to_string()),
        }
    }

    pub fn into_domain(
        self,
        product_type: Option<ProductType>,
    ) -> Result<Product, PersistenceError> {
        let id: ProductId = parse_id(&self.product_id, "products.product_id")?;
        let image_id: ImageId = parse_id(&self.image_id, "products.image_id")?;
        Ok(Product::with_id(id, self.name, image_id, product_type)?)
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = units)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UnitRow {
    pub unit_id: String,
    pub name: String,
    pub symbol: String,
}

impl UnitRow {
    pub fn from_domain(unit: &Unit) -> Self {
        Self {
            unit_id: unit.id().to_string(),
            name: unit.name().to_string(),
            symbol: unit.symbol().to_string(),
        }
    }

    pub fn into_domain(self) -> Result<Unit, PersistenceError> {
        let id: UnitId = parse_id(&self.unit_id, "units.unit_id")?;
        Ok(Unit::with_id(id, self.name, self.symbol))
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = stocks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct StockRow {
    pub stock_id: String,
    pub product_id: String,
    pub unit_id: String,
    pub quantity: f64,
    pub best_before_date: String,
    pub purchase_date: String,
}

impl StockRow {
    pub fn from_domain(stock: &Stock) -> Result<Self, PersistenceError> {
        Ok(Self {
            stock_id: stock.id().to_string(),
            product_id: stock.product().id().to_string(),
            unit_id: stock.unit().id().to_string(),
            quantity: stock.quantity(),
            best_before_date: format_date(stock.best_before_date())?,
            purchase_date: format_date(stock.purchase_date())?,
        })
    }

    pub fn into_domain(self, product: Product, unit: Unit) -> Result<Stock, PersistenceError> {
        let id: StockId = parse_id(&self.stock_id, "stocks.stock_id")?;
        Ok(Stock::with_id(
            id,
            product,
            unit,
            self.quantity,
            parse_date(&self.best_before_date, "stocks.best_before_date")?,
            parse_date(&self.purchase_date, "stocks.purchase_date")?,
        )?)
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct RecipeRow {
    pub recipe_id: String,
    pub name: String,
    pub difficulty: i32,
    pub image_id: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = recipe_steps)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct StepRow {
    pub step_id: String,
    pub recipe_id: String,
    pub position: i32,
    pub name: String,
    pub instructions: String,
    pub estimated_seconds: i64,
}

impl StepRow {
    pub fn from_domain(
        step: &Step,
        recipe_id: &str,
        position: i32,
    ) -> Result<Self, PersistenceError> {
        let estimated_seconds: i64 = i64::try_from(step.estimated_time().as_secs())
            .map_err(|_| PersistenceError::Other(String::from("Step duration is too long")))?;
        Ok(Self {
            step_id: step.id().to_string(),
            recipe_id: recipe_id.to_string(),
            position,
            name: step.name().to_string(),
            instructions: step.instructions().to_string(),
            estimated_seconds,
        })
    }

    pub fn into_domain(self) -> Result<Step, PersistenceError> {
        let id: StepId = parse_id(&self.step_id, "recipe_steps.step_id")?;
        let seconds: u64 = u64::try_from(self.estimated_seconds).map_err(|_| {
            PersistenceError::CorruptRow(format!(
                "recipe_steps.estimated_seconds holds {}",
                self.estimated_seconds
            ))
        })?;
        Ok(Step::with_id(
            id,
            self.name,
            self.instructions,
            Duration::from_secs(seconds),
        )?)
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = recipe_ingredients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct IngredientRow {
    pub recipe_id: String,
    pub position: i32,
    pub product_id: String,
    pub unit_id: String,
    pub quantity: f64,
}

impl IngredientRow {
    pub fn from_domain(ingredient: &Ingredient, recipe_id: &str, position: i32) -> Self {
        Self {
            recipe_id: recipe_id.to_string(),
            position,
            product_id: ingredient.product().id().to_string(),
            unit_id: ingredient.unit().id().to_string(),
            quantity: ingredient.quantity(),
        }
    }
}

/// Stored user account.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserData {
    pub user_id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

impl UserData {
    /// Parses the stored user id.
    ///
    /// # Errors
    ///
    /// Returns an error if the column does not hold a UUID.
    pub fn id(&self) -> Result<UserId, PersistenceError> {
        parse_id(&self.user_id, "users.user_id")
    }
}

/// Stored login session.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub user_id: String,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// Result of cooking a recipe against persisted stock.
#[derive(Debug, Clone, PartialEq)]
pub struct CookOutcome {
    /// Stocks that still hold a positive quantity after cooking.
    pub remaining: Vec<Stock>,
    /// Stocks that were used up and deleted.
    pub removed: Vec<StockId>,
}
