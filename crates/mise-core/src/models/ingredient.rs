// ABOUTME: Ingredient catalog models for pricing and unit bookkeeping
// ABOUTME: Ingredient record and NewIngredient creation input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchasable ingredient with its pricing unit.
///
/// Immutable once created: there is no update operation, and recipes
/// reference ingredients by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Unit of measure label (e.g. "cups", "grams", "pieces")
    pub unit: String,
    /// Estimated price per unit, non-negative
    pub price_per_unit: Decimal,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Ingredient {
    /// Create a new ingredient with a generated id and current timestamp
    #[must_use]
    pub fn new(name: String, unit: String, price_per_unit: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            unit,
            price_per_unit,
            created_at: Utc::now(),
        }
    }
}

/// Input for creating an ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIngredient {
    /// Display name
    pub name: String,
    /// Unit of measure label
    pub unit: String,
    /// Estimated price per unit, must be positive
    pub price_per_unit: Decimal,
}
