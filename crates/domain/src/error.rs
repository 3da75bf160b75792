// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::ProductId;

/// Errors that can occur during domain validation and cooking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field was given a value that violates its rule.
    ///
    /// The message is the human-readable rule text and is displayed verbatim.
    InvalidArgument {
        /// Tag of the offending field, e.g. `"Recipe.Difficulty"`.
        field: &'static str,
        /// The violated rule.
        message: String,
    },
    /// A recipe ingredient has no stock entry for its product.
    StockNotFound {
        /// The product that could not be matched.
        product_id: ProductId,
        /// The product name, for display.
        product_name: String,
    },
}

impl DomainError {
    /// Builds an `InvalidArgument` error for the given field.
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    /// Returns the field tag for `InvalidArgument` errors.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(field),
            Self::StockNotFound { .. } => None,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { message, .. } => write!(f, "{message}"),
            Self::StockNotFound {
                product_id,
                product_name,
            } => {
                write!(
                    f,
                    "No stock found for product '{product_name}' ({product_id})"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
