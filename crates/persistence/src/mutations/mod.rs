// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! ## Module Organization
//!
//! - `catalog` — Product types, units and products
//! - `stocks` — Stock entries
//! - `recipes` — Recipes and likes
//! - `kitchen` — Cooking a recipe against stock
//! - `users` — Users and sessions

pub mod catalog;
pub mod kitchen;
pub mod recipes;
pub mod stocks;
pub mod users;
