// ABOUTME: Derived grocery list models produced by consolidation
// ABOUTME: Per-ingredient aggregation of quantity and estimated cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One consolidated shopping list line.
///
/// Derived on demand from a plan's assignments, never persisted. Each
/// ingredient appears exactly once per list; quantity is summed across every
/// recipe-ingredient line occurrence the plan's assignments induce.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroceryListItem {
    /// Aggregated ingredient
    pub ingredient_id: Uuid,
    /// Ingredient display name
    pub ingredient_name: String,
    /// The ingredient's declared unit of measure
    pub unit: String,
    /// Sum of required quantities across all assignments
    pub total_quantity: Decimal,
    /// `total_quantity` x the ingredient's price per unit
    pub estimated_total_cost: Decimal,
}
