// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::product::Product;
use crate::unit::Unit;
use crate::validated::Validated;
use crate::validation::validate_ingredient_quantity;

/// A quantity of a product, measured in a unit.
///
/// Used both as a recipe requirement and as the amount the kitchen takes
/// out of stock.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    product: Product,
    quantity: Validated<f64>,
    unit: Unit,
}

impl Ingredient {
    /// Creates an ingredient.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is not strictly positive.
    pub fn new(product: Product, quantity: f64, unit: Unit) -> Result<Self, DomainError> {
        Ok(Self {
            product,
            quantity: Validated::new(quantity, validate_ingredient_quantity)?,
            unit,
        })
    }

    /// Creates an ingredient from references that may not have resolved.
    ///
    /// Callers hydrating an ingredient from identifiers pass the lookup
    /// results directly; a missing product or unit is an invalid argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the product or unit is missing, or the quantity
    /// is not strictly positive.
    pub fn from_parts(
        product: Option<Product>,
        quantity: f64,
        unit: Option<Unit>,
    ) -> Result<Self, DomainError> {
        let product: Product = product.ok_or_else(|| {
            DomainError::invalid(
                "Ingredient.Product",
                "Ingredient Product should not be null",
            )
        })?;
        let unit: Unit = unit.ok_or_else(|| {
            DomainError::invalid("Ingredient.Unit", "Ingredient Unit should not be null")
        })?;
        Self::new(product, quantity, unit)
    }

    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub const fn quantity(&self) -> f64 {
        *self.quantity.get()
    }

    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn set_product(&mut self, product: Product) {
        self.product = product;
    }

    /// # Errors
    ///
    /// Returns an error if the quantity is not strictly positive.
    pub fn set_quantity(&mut self, quantity: f64) -> Result<(), DomainError> {
        self.quantity.set(quantity)
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} of {}",
            self.quantity(),
            self.unit.symbol(),
            self.product.name()
        )
    }
}
