// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{ImageId, ProductId, ProductTypeId};
use crate::validated::Validated;
use crate::validation::{
    validate_product_id, validate_product_image_id, validate_product_name,
    validate_product_type_name,
};

/// A category of products, e.g. "Dairy" or "Vegetables".
#[derive(Debug, Clone, PartialEq)]
pub struct ProductType {
    id: ProductTypeId,
    name: Validated<String>,
}

impl ProductType {
    /// Creates a product type with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        Self::with_id(ProductTypeId::new(), name)
    }

    /// Creates a product type with an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn with_id(id: ProductTypeId, name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Validated::new(name.into(), validate_product_type_name)?,
        })
    }

    #[must_use]
    pub const fn id(&self) -> ProductTypeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.get()
    }
}

/// Something that can be bought, stocked and cooked with.
///
/// `id`, `name` and `image_id` are checked on construction and on every
/// assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: Validated<ProductId>,
    name: Validated<String>,
    image_id: Validated<ImageId>,
    product_type: Option<ProductType>,
}

impl Product {
    /// Creates a product with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the image id is nil.
    pub fn new(
        name: impl Into<String>,
        image_id: ImageId,
        product_type: Option<ProductType>,
    ) -> Result<Self, DomainError> {
        Self::with_id(ProductId::new(), name, image_id, product_type)
    }

    /// Creates a product with an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is nil, the name is empty or the image id
    /// is nil.
    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        image_id: ImageId,
        product_type: Option<ProductType>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: Validated::new(id, validate_product_id)?,
            name: Validated::new(name.into(), validate_product_name)?,
            image_id: Validated::new(image_id, validate_product_image_id)?,
            product_type,
        })
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        *self.id.get()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.get()
    }

    #[must_use]
    pub const fn image_id(&self) -> ImageId {
        *self.image_id.get()
    }

    #[must_use]
    pub const fn product_type(&self) -> Option<&ProductType> {
        self.product_type.as_ref()
    }

    /// Reassigns the product identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is nil.
    pub fn set_id(&mut self, id: ProductId) -> Result<(), DomainError> {
        self.id.set(id)
    }

    /// Renames the product.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        self.name.set(name.into())
    }

    /// Points the product at a different image.
    ///
    /// # Errors
    ///
    /// Returns an error if the image id is nil.
    pub fn set_image_id(&mut self, image_id: ImageId) -> Result<(), DomainError> {
        self.image_id.set(image_id)
    }

    pub fn set_product_type(&mut self, product_type: Option<ProductType>) {
        self.product_type = product_type;
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
