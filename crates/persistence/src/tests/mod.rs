// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

mod catalog_tests;
mod user_tests;

use std::time::Duration;

use larder_domain::{ImageId, Ingredient, Product, ProductType, Recipe, Step, Stock, Unit};
use time::{Date, Month};

use crate::Persistence;

/// Creates a date in March 2026.
pub fn create_test_date(day: u8) -> Date {
    Date::from_calendar_date(2026, Month::March, day).expect("Valid test date")
}

/// A stored catalog, stock and one recipe using milk, flour and eggs.
pub struct Pantry {
    pub dairy: ProductType,
    pub litre: Unit,
    pub gram: Unit,
    pub piece: Unit,
    pub milk: Product,
    pub flour: Product,
    pub eggs: Product,
    pub milk_stock: Stock,
    pub flour_stock: Stock,
    pub egg_stock: Stock,
    pub pancakes: Recipe,
}

impl Pantry {
    /// Stores the pantry in `persistence`.
    ///
    /// Milk 1 L, flour 1000 g and 6 eggs are in stock; the pancake recipe
    /// needs 0.5 L milk, 250 g flour and 3 eggs.
    pub fn stored(persistence: &mut Persistence) -> Self {
        let dairy: ProductType = ProductType::new("Dairy").unwrap();
        let litre: Unit = Unit::new("Litre", "L");
        let gram: Unit = Unit::new("Gram", "g");
        let piece: Unit = Unit::new("Piece", "pc");
        let milk: Product = Product::new("Milk", ImageId::new(), Some(dairy.clone())).unwrap();
        let flour: Product = Product::new("Flour", ImageId::new(), None).unwrap();
        let eggs: Product = Product::new("Eggs", ImageId::new(), None).unwrap();

        persistence.create_product_type(&dairy).unwrap();
        for unit in [&litre, &gram, &piece] {
            persistence.create_unit(unit).unwrap();
        }
        for product in [&milk, &flour, &eggs] {
            persistence.create_product(product).unwrap();
        }

        let milk_stock: Stock = Stock::new(
            milk.clone(),
            litre.clone(),
            1.0,
            create_test_date(20),
            create_test_date(1),
        )
        .unwrap();
        let flour_stock: Stock = Stock::new(
            flour.clone(),
            gram.clone(),
            1000.0,
            create_test_date(30),
            create_test_date(1),
        )
        .unwrap();
        let egg_stock: Stock = Stock::new(
            eggs.clone(),
            piece.clone(),
            6.0,
            create_test_date(15),
            create_test_date(2),
        )
        .unwrap();
        for stock in [&milk_stock, &flour_stock, &egg_stock] {
            persistence.create_stock(stock).unwrap();
        }

        let pancakes: Recipe = Recipe::new(
            "Pancakes",
            2,
            vec![
                Step::new("Mix", "Whisk everything together", Duration::from_secs(300)).unwrap(),
                Step::new("Fry", "Fry in a hot pan", Duration::from_secs(600)).unwrap(),
            ],
            vec![
                Ingredient::new(milk.clone(), 0.5, litre.clone()).unwrap(),
                Ingredient::new(flour.clone(), 250.0, gram.clone()).unwrap(),
                Ingredient::new(eggs.clone(), 3.0, piece.clone()).unwrap(),
            ],
            ImageId::new(),
        )
        .unwrap();
        persistence.create_recipe(&pancakes).unwrap();

        Self {
            dairy,
            litre,
            gram,
            piece,
            milk,
            flour,
            eggs,
            milk_stock,
            flour_stock,
            egg_stock,
            pancakes,
        }
    }
}
