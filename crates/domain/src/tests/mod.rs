// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]

mod recipe;

use time::{Date, Month};

use crate::{ImageId, Product, Stock, Unit};

pub fn create_test_product(name: &str) -> Product {
    Product::new(name, ImageId::new(), None).unwrap()
}

pub fn create_test_date(day: u8) -> Date {
    Date::from_calendar_date(2026, Month::March, day).unwrap()
}

pub fn create_test_stock(product: &Product, unit: &Unit, quantity: f64) -> Stock {
    Stock::new(
        product.clone(),
        unit.clone(),
        quantity,
        create_test_date(30),
        create_test_date(1),
    )
    .unwrap()
}
