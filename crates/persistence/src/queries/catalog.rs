// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Product type, unit and product queries.
//!
//! Products are hydrated together with their optional product type. The
//! `load_*` helpers return maps keyed by the stored id text so that stock
//! and recipe queries can hydrate many rows with one lookup per table.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use larder_domain::{Product, ProductId, ProductType, ProductTypeId, Unit, UnitId};

use crate::data_models::{ProductRow, ProductTypeRow, UnitRow};
use crate::diesel_schema::{product_types, products, units};
use crate::error::PersistenceError;

/// Retrieves a product type by ID.
///
/// # Errors
///
/// Returns `NotFound` if no such product type exists.
pub fn get_product_type(
    conn: &mut SqliteConnection,
    product_type_id: ProductTypeId,
) -> Result<ProductType, PersistenceError> {
    debug!(%product_type_id, "Looking up product type");

    let row: Option<ProductTypeRow> = product_types::table
        .filter(product_types::product_type_id.eq(product_type_id.to_string()))
        .select(ProductTypeRow::as_select())
        .first(conn)
        .optional()?;

    row.ok_or_else(|| {
        PersistenceError::NotFound(format!("Product type {product_type_id} not found"))
    })?
    .into_domain()
}

/// Lists all product types ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn list_product_types(
    conn: &mut SqliteConnection,
) -> Result<Vec<ProductType>, PersistenceError> {
    let rows: Vec<ProductTypeRow> = product_types::table
        .order(product_types::name.asc())
        .select(ProductTypeRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ProductTypeRow::into_domain).collect()
}

/// Retrieves a unit by ID.
///
/// # Errors
///
/// Returns `NotFound` if no such unit exists.
pub fn get_unit(conn: &mut SqliteConnection, unit_id: UnitId) -> Result<Unit, PersistenceError> {
    debug!(%unit_id, "Looking up unit");

    let row: Option<UnitRow> = units::table
        .filter(units::unit_id.eq(unit_id.to_string()))
        .select(UnitRow::as_select())
        .first(conn)
        .optional()?;

    row.ok_or_else(|| PersistenceError::NotFound(format!("Unit {unit_id} not found")))?
        .into_domain()
}

/// Lists all units ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn list_units(conn: &mut SqliteConnection) -> Result<Vec<Unit>, PersistenceError> {
    let rows: Vec<UnitRow> = units::table
        .order(units::name.asc())
        .select(UnitRow::as_select())
        .load(conn)?;

    rows.into_iter().map(UnitRow::into_domain).collect()
}

/// Loads the given units keyed by stored id.
pub(crate) fn load_units(
    conn: &mut SqliteConnection,
    unit_ids: &[String],
) -> Result<HashMap<String, Unit>, PersistenceError> {
    let rows: Vec<UnitRow> = units::table
        .filter(units::unit_id.eq_any(unit_ids))
        .select(UnitRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            let key: String = row.unit_id.clone();
            row.into_domain().map(|unit| (key, unit))
        })
        .collect()
}

fn load_product_types(
    conn: &mut SqliteConnection,
    product_type_ids: &[String],
) -> Result<HashMap<String, ProductType>, PersistenceError> {
    let rows: Vec<ProductTypeRow> = product_types::table
        .filter(product_types::product_type_id.eq_any(product_type_ids))
        .select(ProductTypeRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            let key: String = row.product_type_id.clone();
            row.into_domain().map(|product_type| (key, product_type))
        })
        .collect()
}

fn hydrate_products(
    conn: &mut SqliteConnection,
    rows: Vec<ProductRow>,
) -> Result<Vec<Product>, PersistenceError> {
    let type_ids: Vec<String> = rows
        .iter()
        .filter_map(|row| row.product_type_id.clone())
        .collect();
    let types: HashMap<String, ProductType> = load_product_types(conn, &type_ids)?;

    rows.into_iter()
        .map(|row| {
            let product_type: Option<ProductType> = match row.product_type_id.as_deref() {
                Some(type_id) => Some(types.get(type_id).cloned().ok_or_else(|| {
                    PersistenceError::CorruptRow(format!(
                        "products.product_type_id references missing type '{type_id}'"
                    ))
                })?),
                None => None,
            };
            row.into_domain(product_type)
        })
        .collect()
}

/// Retrieves a product by ID, including its product type.
///
/// # Errors
///
/// Returns `NotFound` if no such product exists.
pub fn get_product(
    conn: &mut SqliteConnection,
    product_id: ProductId,
) -> Result<Product, PersistenceError> {
    debug!(%product_id, "Looking up product");

    let row: Option<ProductRow> = products::table
        .filter(products::product_id.eq(product_id.to_string()))
        .select(ProductRow::as_select())
        .first(conn)
        .optional()?;

    let row: ProductRow =
        row.ok_or_else(|| PersistenceError::NotFound(format!("Product {product_id} not found")))?;

    hydrate_products(conn, vec![row])?
        .pop()
        .ok_or_else(|| PersistenceError::NotFound(format!("Product {product_id} not found")))
}

/// Lists all products ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn list_products(conn: &mut SqliteConnection) -> Result<Vec<Product>, PersistenceError> {
    let rows: Vec<ProductRow> = products::table
        .order(products::name.asc())
        .select(ProductRow::as_select())
        .load(conn)?;

    hydrate_products(conn, rows)
}

/// Loads the given products keyed by stored id.
pub(crate) fn load_products(
    conn: &mut SqliteConnection,
    product_ids: &[String],
) -> Result<HashMap<String, Product>, PersistenceError> {
    let rows: Vec<ProductRow> = products::table
        .filter(products::product_id.eq_any(product_ids))
        .select(ProductRow::as_select())
        .load(conn)?;

    Ok(hydrate_products(conn, rows)?
        .into_iter()
        .map(|product| (product.id().to_string(), product))
        .collect())
}
