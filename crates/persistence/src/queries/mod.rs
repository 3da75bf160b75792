// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `catalog` — Product types, units and products
//! - `stocks` — Stock entries
//! - `recipes` — Recipes with their steps and ingredients, and likes
//! - `users` — Users and sessions

pub mod catalog;
pub mod recipes;
pub mod stocks;
pub mod users;
