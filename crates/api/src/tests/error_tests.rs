// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use larder_domain::{DomainError, ImageId, Recipe, validate_recipe_difficulty};
use larder_persistence::PersistenceError;

use crate::{ApiError, translate_domain_error, translate_persistence_error};

#[test]
fn test_domain_rule_text_survives_translation() {
    let err: DomainError = validate_recipe_difficulty(&9).unwrap_err();
    let message: String = err.to_string();

    let api_err: ApiError = translate_domain_error(err);

    assert!(api_err.to_string().contains(&message));
    assert!(matches!(api_err, ApiError::InvalidInput { .. }));
}

#[test]
fn test_persistence_errors_map_to_api_errors() {
    assert_eq!(
        translate_persistence_error(PersistenceError::NotFound(String::from("gone")), "Unit"),
        ApiError::ResourceNotFound {
            resource_type: String::from("Unit"),
            message: String::from("gone"),
        }
    );
    assert_eq!(
        translate_persistence_error(PersistenceError::Conflict(String::from("in use")), "Unit"),
        ApiError::Conflict {
            message: String::from("in use"),
        }
    );
    assert!(matches!(
        translate_persistence_error(PersistenceError::ForeignKeyEnforcementNotEnabled, "Unit"),
        ApiError::Internal { .. }
    ));
}

#[test]
fn test_wrapped_domain_error_is_unwrapped() {
    let domain: DomainError =
        Recipe::new("", 1, Vec::new(), Vec::new(), ImageId::new()).unwrap_err();

    let api_err: ApiError =
        translate_persistence_error(PersistenceError::Domain(domain), "Recipe");

    assert!(matches!(
        api_err,
        ApiError::InvalidInput { field, .. } if field == "Recipe.Name"
    ));
}
