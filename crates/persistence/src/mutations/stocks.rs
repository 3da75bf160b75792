// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stock mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use larder_domain::{Stock, StockId};

use crate::data_models::StockRow;
use crate::diesel_schema::stocks;
use crate::error::PersistenceError;
use crate::mutations::catalog::require_affected;

/// Inserts a stock entry.
///
/// # Errors
///
/// Returns `Conflict` if the product already has stock in that unit, or if
/// the product or unit is not stored.
pub fn create_stock(conn: &mut SqliteConnection, stock: &Stock) -> Result<(), PersistenceError> {
    info!(
        stock_id = %stock.id(),
        product_id = %stock.product().id(),
        quantity = stock.quantity(),
        "Creating stock"
    );

    diesel::insert_into(stocks::table)
        .values(StockRow::from_domain(stock)?)
        .execute(conn)?;

    Ok(())
}

/// Writes a stock entry's current state back to the database.
///
/// # Errors
///
/// Returns `NotFound` if no such stock exists.
pub fn save_stock(conn: &mut SqliteConnection, stock: &Stock) -> Result<(), PersistenceError> {
    let stock_id: StockId = stock.id();
    debug!(%stock_id, quantity = stock.quantity(), "Saving stock");

    let row: StockRow = StockRow::from_domain(stock)?;
    let rows_affected: usize = diesel::update(stocks::table)
        .filter(stocks::stock_id.eq(&row.stock_id))
        .set((
            stocks::product_id.eq(&row.product_id),
            stocks::unit_id.eq(&row.unit_id),
            stocks::quantity.eq(row.quantity),
            stocks::best_before_date.eq(&row.best_before_date),
            stocks::purchase_date.eq(&row.purchase_date),
        ))
        .execute(conn)?;

    require_affected(rows_affected, || format!("Stock {stock_id} not found"))
}

/// Deletes a stock entry.
///
/// # Errors
///
/// Returns `NotFound` if no such stock exists.
pub fn delete_stock(
    conn: &mut SqliteConnection,
    stock_id: StockId,
) -> Result<(), PersistenceError> {
    info!(%stock_id, "Deleting stock");

    let rows_affected: usize = diesel::delete(stocks::table)
        .filter(stocks::stock_id.eq(stock_id.to_string()))
        .execute(conn)?;

    require_affected(rows_affected, || format!("Stock {stock_id} not found"))
}
