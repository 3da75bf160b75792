// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stock queries.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use larder_domain::{Product, ProductId, Stock, StockId, Unit};

use crate::data_models::StockRow;
use crate::diesel_schema::stocks;
use crate::error::PersistenceError;
use crate::queries::catalog::{load_products, load_units};

/// Turns stock rows into domain stocks, loading products and units in bulk.
fn hydrate_stocks(
    conn: &mut SqliteConnection,
    rows: Vec<StockRow>,
) -> Result<Vec<Stock>, PersistenceError> {
    let product_ids: Vec<String> = rows.iter().map(|row| row.product_id.clone()).collect();
    let unit_ids: Vec<String> = rows.iter().map(|row| row.unit_id.clone()).collect();
    let products: HashMap<String, Product> = load_products(conn, &product_ids)?;
    let units: HashMap<String, Unit> = load_units(conn, &unit_ids)?;

    rows.into_iter()
        .map(|row| {
            let product: Product = products.get(&row.product_id).cloned().ok_or_else(|| {
                PersistenceError::CorruptRow(format!(
                    "stocks.product_id references missing product '{}'",
                    row.product_id
                ))
            })?;
            let unit: Unit = units.get(&row.unit_id).cloned().ok_or_else(|| {
                PersistenceError::CorruptRow(format!(
                    "stocks.unit_id references missing unit '{}'",
                    row.unit_id
                ))
            })?;
            row.into_domain(product, unit)
        })
        .collect()
}

/// Retrieves a stock entry by ID.
///
/// # Errors
///
/// Returns `NotFound` if no such stock exists.
pub fn get_stock(
    conn: &mut SqliteConnection,
    stock_id: StockId,
) -> Result<Stock, PersistenceError> {
    debug!(%stock_id, "Looking up stock");

    let row: Option<StockRow> = stocks::table
        .filter(stocks::stock_id.eq(stock_id.to_string()))
        .select(StockRow::as_select())
        .first(conn)
        .optional()?;

    let row: StockRow =
        row.ok_or_else(|| PersistenceError::NotFound(format!("Stock {stock_id} not found")))?;

    hydrate_stocks(conn, vec![row])?
        .pop()
        .ok_or_else(|| PersistenceError::NotFound(format!("Stock {stock_id} not found")))
}

/// Lists all stock entries ordered by best-before date, soonest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn list_stocks(conn: &mut SqliteConnection) -> Result<Vec<Stock>, PersistenceError> {
    let rows: Vec<StockRow> = stocks::table
        .order((stocks::best_before_date.asc(), stocks::stock_id.asc()))
        .select(StockRow::as_select())
        .load(conn)?;

    hydrate_stocks(conn, rows)
}

/// Lists the stock entries held for any of the given products.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn list_stocks_for_products(
    conn: &mut SqliteConnection,
    product_ids: &[ProductId],
) -> Result<Vec<Stock>, PersistenceError> {
    let keys: Vec<String> = product_ids.iter().map(ToString::to_string).collect();

    debug!(products = keys.len(), "Loading stocks for products");

    let rows: Vec<StockRow> = stocks::table
        .filter(stocks::product_id.eq_any(&keys))
        .order((stocks::best_before_date.asc(), stocks::stock_id.asc()))
        .select(StockRow::as_select())
        .load(conn)?;

    hydrate_stocks(conn, rows)
}
