// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for product type, unit, product and stock handlers.

use larder_domain::{ImageId, ProductId};
use larder_persistence::Persistence;

use super::helpers::{Kitchen, create_test_product, create_test_unit};
use crate::{
    ApiError, CreateProductTypeRequest, ProductRequest, StockRequest, UnitRequest,
    create_product, create_product_type, create_stock, create_unit, delete_product_type,
    delete_unit, get_product, get_stock, get_unit, list_product_types, list_stocks, list_units,
    update_product, update_stock, update_unit,
};

#[test]
fn test_product_with_type_round_trips() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let dairy = create_product_type(
        &mut persistence,
        &CreateProductTypeRequest {
            name: String::from("Dairy"),
        },
    )
    .unwrap();

    let created = create_product(
        &mut persistence,
        &ProductRequest {
            name: String::from("Butter"),
            image_id: ImageId::new().to_string(),
            product_type_id: Some(dairy.product_type_id.clone()),
        },
    )
    .unwrap();

    let fetched = get_product(&mut persistence, &created.product_id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.product_type, Some(dairy));
}

#[test]
fn test_blank_product_type_name_is_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = create_product_type(
        &mut persistence,
        &CreateProductTypeRequest {
            name: String::new(),
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { message, .. })
            if message == "Product Type Name should not be null nor empty"
    ));
}

#[test]
fn test_deleted_product_type_disappears() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let spices = create_product_type(
        &mut persistence,
        &CreateProductTypeRequest {
            name: String::from("Spices"),
        },
    )
    .unwrap();

    delete_product_type(&mut persistence, &spices.product_type_id).unwrap();

    assert!(
        list_product_types(&mut persistence)
            .unwrap()
            .product_types
            .is_empty()
    );
}

#[test]
fn test_product_with_unknown_type_is_not_found() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = create_product(
        &mut persistence,
        &ProductRequest {
            name: String::from("Butter"),
            image_id: ImageId::new().to_string(),
            product_type_id: Some(ProductId::new().to_string()),
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Product type"
    ));
}

#[test]
fn test_product_with_malformed_image_id_is_invalid() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = create_product(
        &mut persistence,
        &ProductRequest {
            name: String::from("Butter"),
            image_id: String::from("not-a-uuid"),
            product_type_id: None,
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, message })
            if field == "image_id" && message == "Invalid identifier 'not-a-uuid'"
    ));
}

#[test]
fn test_product_with_nil_image_id_is_invalid() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = create_product(
        &mut persistence,
        &ProductRequest {
            name: String::from("Butter"),
            image_id: String::from("00000000-0000-0000-0000-000000000000"),
            product_type_id: None,
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { message, .. })
            if message == "Product Image Id should not be empty"
    ));
}

#[test]
fn test_update_product_renames() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let product = create_test_product(&mut persistence, "Flour");

    let updated = update_product(
        &mut persistence,
        &product.product_id,
        &ProductRequest {
            name: String::from("Rye Flour"),
            image_id: product.image_id.clone(),
            product_type_id: None,
        },
    )
    .unwrap();

    assert_eq!(updated.name, "Rye Flour");
    assert_eq!(
        get_product(&mut persistence, &product.product_id).unwrap().name,
        "Rye Flour"
    );
}

#[test]
fn test_unit_lifecycle() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let unit = create_test_unit(&mut persistence, "Kilo", "k");

    let updated = update_unit(
        &mut persistence,
        &unit.unit_id,
        &UnitRequest {
            name: String::from("Kilogram"),
            symbol: String::from("kg"),
        },
    )
    .unwrap();
    assert_eq!(updated.symbol, "kg");
    assert_eq!(list_units(&mut persistence).unwrap().units, vec![updated]);

    delete_unit(&mut persistence, &unit.unit_id).unwrap();
    assert!(list_units(&mut persistence).unwrap().units.is_empty());
}

#[test]
fn test_blank_unit_symbol_round_trips() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let created = create_unit(
        &mut persistence,
        &UnitRequest {
            name: String::from("Piece"),
            symbol: String::new(),
        },
    )
    .unwrap();

    let fetched = get_unit(&mut persistence, &created.unit_id).unwrap();
    assert_eq!(fetched.name, "Piece");
    assert_eq!(fetched.symbol, "");
}

#[test]
fn test_unit_in_use_conflicts() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let kitchen = Kitchen::stocked(&mut persistence);

    let result = delete_unit(&mut persistence, &kitchen.gram.unit_id);
    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_unknown_unit_id_is_not_found() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = delete_unit(&mut persistence, &ProductId::new().to_string());
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_stock_rejects_non_positive_quantity() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let product = create_test_product(&mut persistence, "Milk");
    let unit = create_test_unit(&mut persistence, "Litre", "L");

    let result = create_stock(
        &mut persistence,
        &StockRequest {
            product_id: product.product_id,
            unit_id: unit.unit_id,
            quantity: 0.0,
            best_before_date: String::from("2026-03-20"),
            purchase_date: String::from("2026-03-01"),
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { message, .. })
            if message == "Stock Quantity should be positive"
    ));
}

#[test]
fn test_stock_rejects_malformed_date() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let product = create_test_product(&mut persistence, "Milk");
    let unit = create_test_unit(&mut persistence, "Litre", "L");

    let result = create_stock(
        &mut persistence,
        &StockRequest {
            product_id: product.product_id,
            unit_id: unit.unit_id,
            quantity: 1.0,
            best_before_date: String::from("20/03/2026"),
            purchase_date: String::from("2026-03-01"),
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "best_before_date"
    ));
}

#[test]
fn test_expired_stock_is_flagged() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let product = create_test_product(&mut persistence, "Yoghurt");
    let unit = create_test_unit(&mut persistence, "Pot", "pot");

    let stock = create_stock(
        &mut persistence,
        &StockRequest {
            product_id: product.product_id,
            unit_id: unit.unit_id,
            quantity: 2.0,
            best_before_date: String::from("2020-01-01"),
            purchase_date: String::from("2019-12-20"),
        },
    )
    .unwrap();

    assert!(stock.expired);
    assert_eq!(stock.best_before_date, "2020-01-01");
}

#[test]
fn test_update_stock_overwrites_quantity() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let kitchen = Kitchen::stocked(&mut persistence);

    let updated = update_stock(
        &mut persistence,
        &kitchen.milk_stock.stock_id,
        &StockRequest {
            product_id: kitchen.milk.product_id.clone(),
            unit_id: kitchen.litre.unit_id.clone(),
            quantity: 2.5,
            best_before_date: String::from("2099-12-31"),
            purchase_date: String::from("2026-03-05"),
        },
    )
    .unwrap();

    assert_eq!(updated.quantity, 2.5);
    let fetched = get_stock(&mut persistence, &kitchen.milk_stock.stock_id).unwrap();
    assert_eq!(fetched, updated);
    assert_eq!(list_stocks(&mut persistence).unwrap().stocks.len(), 3);
}
