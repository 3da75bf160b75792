// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

use crate::error::DomainError;
use crate::ids::StockId;
use crate::product::Product;
use crate::unit::Unit;
use crate::validation::validate_stock_quantity;

/// Quantities at or below this count as used up.
///
/// Repeated floating-point deductions leave residue such as `2.7e-17`
/// after taking `0.9` and `0.1` from `1.0`.
pub const DEPLETION_TOLERANCE: f64 = 1e-9;

/// An on-hand quantity of one product, held in one unit.
///
/// Only one stock record exists per product and unit. The quantity must be
/// positive when set explicitly; cooking may take it to zero or below, at
/// which point the record is removed by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    id: StockId,
    quantity: f64,
    unit: Unit,
    product: Product,
    best_before_date: Date,
    purchase_date: Date,
}

impl Stock {
    /// Creates a stock record with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is not strictly positive.
    pub fn new(
        product: Product,
        unit: Unit,
        quantity: f64,
        best_before_date: Date,
        purchase_date: Date,
    ) -> Result<Self, DomainError> {
        Self::with_id(
            StockId::new(),
            product,
            unit,
            quantity,
            best_before_date,
            purchase_date,
        )
    }

    /// Creates a stock record with an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is not strictly positive.
    pub fn with_id(
        id: StockId,
        product: Product,
        unit: Unit,
        quantity: f64,
        best_before_date: Date,
        purchase_date: Date,
    ) -> Result<Self, DomainError> {
        validate_stock_quantity(&quantity)?;
        Ok(Self {
            id,
            quantity,
            unit,
            product,
            best_before_date,
            purchase_date,
        })
    }

    #[must_use]
    pub const fn id(&self) -> StockId {
        self.id
    }

    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub const fn best_before_date(&self) -> Date {
        self.best_before_date
    }

    #[must_use]
    pub const fn purchase_date(&self) -> Date {
        self.purchase_date
    }

    /// Whether the stock has been used up, within [`DEPLETION_TOLERANCE`].
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.quantity <= DEPLETION_TOLERANCE
    }

    /// Whether the best-before date lies before `today`.
    #[must_use]
    pub fn is_expired(&self, today: Date) -> bool {
        self.best_before_date < today
    }

    /// # Errors
    ///
    /// Returns an error if the quantity is not strictly positive.
    pub fn set_quantity(&mut self, quantity: f64) -> Result<(), DomainError> {
        validate_stock_quantity(&quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    pub const fn set_best_before_date(&mut self, best_before_date: Date) {
        self.best_before_date = best_before_date;
    }

    pub const fn set_purchase_date(&mut self, purchase_date: Date) {
        self.purchase_date = purchase_date;
    }

    /// Takes `amount` out of the stock without checking the result.
    pub(crate) fn consume(&mut self, amount: f64) {
        self.quantity -= amount;
    }
}
