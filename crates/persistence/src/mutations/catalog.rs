// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Product type, unit and product mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use larder_domain::{Product, ProductId, ProductType, ProductTypeId, Unit, UnitId};

use crate::data_models::{ProductRow, ProductTypeRow, UnitRow};
use crate::diesel_schema::{product_types, products, units};
use crate::error::PersistenceError;

/// Maps an affected-row count of zero to `NotFound`.
pub(crate) fn require_affected(
    rows_affected: usize,
    what: impl FnOnce() -> String,
) -> Result<(), PersistenceError> {
    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(what()));
    }
    Ok(())
}

/// Inserts a product type.
///
/// # Errors
///
/// Returns `Conflict` if a product type with the same name exists.
pub fn create_product_type(
    conn: &mut SqliteConnection,
    product_type: &ProductType,
) -> Result<(), PersistenceError> {
    info!(
        product_type_id = %product_type.id(),
        name = product_type.name(),
        "Creating product type"
    );

    diesel::insert_into(product_types::table)
        .values(ProductTypeRow::from_domain(product_type))
        .execute(conn)?;

    Ok(())
}

/// Deletes a product type. Products of that type become untyped.
///
/// # Errors
///
/// Returns `NotFound` if no such product type exists.
pub fn delete_product_type(
    conn: &mut SqliteConnection,
    product_type_id: ProductTypeId,
) -> Result<(), PersistenceError> {
    info!(%product_type_id, "Deleting product type");

    let rows_affected: usize = diesel::delete(product_types::table)
        .filter(product_types::product_type_id.eq(product_type_id.to_string()))
        .execute(conn)?;

    require_affected(rows_affected, || {
        format!("Product type {product_type_id} not found")
    })
}

/// Inserts a unit.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_unit(conn: &mut SqliteConnection, unit: &Unit) -> Result<(), PersistenceError> {
    info!(unit_id = %unit.id(), symbol = unit.symbol(), "Creating unit");

    diesel::insert_into(units::table)
        .values(UnitRow::from_domain(unit))
        .execute(conn)?;

    Ok(())
}

/// Overwrites a unit's name and symbol.
///
/// # Errors
///
/// Returns `NotFound` if no such unit exists.
pub fn update_unit(conn: &mut SqliteConnection, unit: &Unit) -> Result<(), PersistenceError> {
    let unit_id: UnitId = unit.id();
    info!(%unit_id, "Updating unit");

    let rows_affected: usize = diesel::update(units::table)
        .filter(units::unit_id.eq(unit_id.to_string()))
        .set((units::name.eq(unit.name()), units::symbol.eq(unit.symbol())))
        .execute(conn)?;

    require_affected(rows_affected, || format!("Unit {unit_id} not found"))
}

/// Deletes a unit.
///
/// # Errors
///
/// Returns `NotFound` if no such unit exists, or `Conflict` while any
/// stock or recipe ingredient still uses it.
pub fn delete_unit(conn: &mut SqliteConnection, unit_id: UnitId) -> Result<(), PersistenceError> {
    info!(%unit_id, "Deleting unit");

    let rows_affected: usize = diesel::delete(units::table)
        .filter(units::unit_id.eq(unit_id.to_string()))
        .execute(conn)?;

    require_affected(rows_affected, || format!("Unit {unit_id} not found"))
}

/// Inserts a product.
///
/// # Errors
///
/// Returns `Conflict` if the product's type is not stored.
pub fn create_product(
    conn: &mut SqliteConnection,
    product: &Product,
) -> Result<(), PersistenceError> {
    info!(product_id = %product.id(), name = product.name(), "Creating product");

    diesel::insert_into(products::table)
        .values(ProductRow::from_domain(product))
        .execute(conn)?;

    Ok(())
}

/// Overwrites a product's name, image and type.
///
/// # Errors
///
/// Returns `NotFound` if no such product exists.
pub fn update_product(
    conn: &mut SqliteConnection,
    product: &Product,
) -> Result<(), PersistenceError> {
    let product_id: ProductId = product.id();
    info!(%product_id, "Updating product");

    let row: ProductRow = ProductRow::from_domain(product);
    let rows_affected: usize = diesel::update(products::table)
        .filter(products::product_id.eq(&row.product_id))
        .set((
            products::name.eq(&row.name),
            products::image_id.eq(&row.image_id),
            products::product_type_id.eq(row.product_type_id.as_deref()),
        ))
        .execute(conn)?;

    require_affected(rows_affected, || format!("Product {product_id} not found"))
}

/// Deletes a product together with its stock entries.
///
/// # Errors
///
/// Returns `NotFound` if no such product exists, or `Conflict` while any
/// recipe still uses it.
pub fn delete_product(
    conn: &mut SqliteConnection,
    product_id: ProductId,
) -> Result<(), PersistenceError> {
    info!(%product_id, "Deleting product");

    let rows_affected: usize = diesel::delete(products::table)
        .filter(products::product_id.eq(product_id.to_string()))
        .execute(conn)?;

    require_affected(rows_affected, || format!("Product {product_id} not found"))
}
