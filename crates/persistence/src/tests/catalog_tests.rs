// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for product type, unit and product persistence.

use larder_domain::{ImageId, Product, ProductType, Stock, Unit, UnitId};

use super::{Pantry, create_test_date};
use crate::{Persistence, PersistenceError};

#[test]
fn test_product_round_trips_with_product_type() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let pantry = Pantry::stored(&mut persistence);

    let milk = persistence.get_product(pantry.milk.id()).unwrap();
    assert_eq!(milk, pantry.milk);
    assert_eq!(milk.product_type().unwrap().name(), "Dairy");

    let flour = persistence.get_product(pantry.flour.id()).unwrap();
    assert!(flour.product_type().is_none());
}

#[test]
fn test_list_products_is_ordered_by_name() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    Pantry::stored(&mut persistence);

    let names: Vec<String> = persistence
        .list_products()
        .unwrap()
        .iter()
        .map(|product| product.name().to_string())
        .collect();
    assert_eq!(names, vec!["Eggs", "Flour", "Milk"]);
}

#[test]
fn test_duplicate_product_type_name_conflicts() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .create_product_type(&ProductType::new("Spices").unwrap())
        .unwrap();

    let result = persistence.create_product_type(&ProductType::new("Spices").unwrap());
    assert!(matches!(result, Err(PersistenceError::Conflict(_))));
}

#[test]
fn test_deleting_product_type_untypes_its_products() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let pantry = Pantry::stored(&mut persistence);

    persistence.delete_product_type(pantry.dairy.id()).unwrap();

    assert!(persistence.list_product_types().unwrap().is_empty());
    let milk = persistence.get_product(pantry.milk.id()).unwrap();
    assert!(milk.product_type().is_none());
}

#[test]
fn test_product_with_unstored_type_conflicts() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let loose_type = ProductType::new("Loose").unwrap();
    let product = Product::new("Rice", ImageId::new(), Some(loose_type)).unwrap();

    let result = persistence.create_product(&product);
    assert!(matches!(result, Err(PersistenceError::Conflict(_))));
}

#[test]
fn test_update_unit_overwrites_name_and_symbol() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let mut unit = Unit::new("Kilo", "k");
    persistence.create_unit(&unit).unwrap();

    unit.set_name("Kilogram");
    unit.set_symbol("kg");
    persistence.update_unit(&unit).unwrap();

    let stored = persistence.get_unit(unit.id()).unwrap();
    assert_eq!(stored.name(), "Kilogram");
    assert_eq!(stored.symbol(), "kg");
}

#[test]
fn test_unknown_unit_is_not_found() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    assert!(matches!(
        persistence.get_unit(UnitId::new()),
        Err(PersistenceError::NotFound(_))
    ));
    assert!(matches!(
        persistence.delete_unit(UnitId::new()),
        Err(PersistenceError::NotFound(_))
    ));
}

#[test]
fn test_unit_in_use_cannot_be_deleted() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let pantry = Pantry::stored(&mut persistence);

    let result = persistence.delete_unit(pantry.gram.id());
    assert!(matches!(result, Err(PersistenceError::Conflict(_))));
    assert!(persistence.get_unit(pantry.gram.id()).is_ok());
}

#[test]
fn test_update_product_changes_name_and_type() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let pantry = Pantry::stored(&mut persistence);

    let mut flour = pantry.flour.clone();
    flour.set_name("Wholemeal Flour").unwrap();
    flour.set_product_type(Some(pantry.dairy.clone()));
    persistence.update_product(&flour).unwrap();

    assert_eq!(persistence.get_product(flour.id()).unwrap(), flour);
}

#[test]
fn test_product_used_by_recipe_cannot_be_deleted() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let pantry = Pantry::stored(&mut persistence);

    let result = persistence.delete_product(pantry.eggs.id());
    assert!(matches!(result, Err(PersistenceError::Conflict(_))));
}

#[test]
fn test_deleting_product_removes_its_stock() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let pantry = Pantry::stored(&mut persistence);

    let sugar = Product::new("Sugar", ImageId::new(), None).unwrap();
    persistence.create_product(&sugar).unwrap();
    let sugar_stock = Stock::new(
        sugar.clone(),
        pantry.gram.clone(),
        500.0,
        create_test_date(31),
        create_test_date(3),
    )
    .unwrap();
    persistence.create_stock(&sugar_stock).unwrap();

    persistence.delete_product(sugar.id()).unwrap();

    assert!(matches!(
        persistence.get_stock(sugar_stock.id()),
        Err(PersistenceError::NotFound(_))
    ));
}
