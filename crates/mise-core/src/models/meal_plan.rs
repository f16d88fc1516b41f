// ABOUTME: Meal plan models covering the 21-slot week and its assignments
// ABOUTME: MealType, MealPlan, MealAssignment records and the assembled view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DietaryPreference, GroceryListItem, Recipe};
use crate::errors::ModelError;

/// Type of meal occupying a plan slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
}

impl MealType {
    /// All meal types in the canonical slot enumeration order.
    ///
    /// The assembler walks each day in this order; changing it changes which
    /// candidate lands in which slot.
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Get string representation for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    /// Position of this meal type within a day's slot enumeration
    #[must_use]
    pub fn slot_index(&self) -> usize {
        match self {
            Self::Breakfast => 0,
            Self::Lunch => 1,
            Self::Dinner => 2,
        }
    }
}

impl FromStr for MealType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            _ => Err(ModelError::invalid_meal_type(s)),
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted weekly meal plan.
///
/// Owns exactly 21 [`MealAssignment`] rows once created; the plan and its
/// assignments are written as one atomic unit and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlan {
    /// Unique identifier
    pub id: Uuid,
    /// Opaque user key; identity semantics live outside the engine
    pub user_id: String,
    /// First day of the planned week (its slots are day_of_week 0)
    pub week_start_date: NaiveDate,
    /// Dietary preference every assigned recipe shares
    pub dietary_preference: DietaryPreference,
    /// Weekly budget the candidates were selected under, positive
    pub weekly_budget: Decimal,
    /// Stored total: sum of the 21 assigned recipes' flat estimated costs
    pub total_estimated_cost: Decimal,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl MealPlan {
    /// Create a new meal plan record with a generated id and current timestamp
    #[must_use]
    pub fn new(
        user_id: String,
        week_start_date: NaiveDate,
        dietary_preference: DietaryPreference,
        weekly_budget: Decimal,
        total_estimated_cost: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            week_start_date,
            dietary_preference,
            weekly_budget,
            total_estimated_cost,
            created_at: Utc::now(),
        }
    }
}

/// One persisted slot assignment of a meal plan.
///
/// A fully assembled plan covers every (day_of_week, meal_type) pair exactly
/// once: 7 days x 3 meal types = 21 distinct slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealAssignment {
    /// Unique identifier of the assignment row
    pub id: Uuid,
    /// Owning meal plan
    pub meal_plan_id: Uuid,
    /// Assigned recipe
    pub recipe_id: Uuid,
    /// Day of the week, 0..=6 relative to the plan's week start
    pub day_of_week: u8,
    /// Meal slot within the day
    pub meal_type: MealType,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl MealAssignment {
    /// Create a new assignment row with a generated id and current timestamp
    #[must_use]
    pub fn new(meal_plan_id: Uuid, recipe_id: Uuid, day_of_week: u8, meal_type: MealType) -> Self {
        Self {
            id: Uuid::new_v4(),
            meal_plan_id,
            recipe_id,
            day_of_week,
            meal_type,
            created_at: Utc::now(),
        }
    }
}

/// Input for creating a meal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMealPlan {
    /// Opaque user key
    pub user_id: String,
    /// First day of the planned week
    pub week_start_date: NaiveDate,
    /// Dietary preference to plan for
    pub dietary_preference: DietaryPreference,
    /// Weekly budget, must be positive
    pub weekly_budget: Decimal,
}

/// One slot of an assembled plan joined to its full recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedMeal {
    /// Day of the week, 0..=6
    pub day_of_week: u8,
    /// Meal slot within the day
    pub meal_type: MealType,
    /// The recipe assigned to this slot
    pub recipe: Recipe,
}

/// Fully assembled read model of a meal plan.
///
/// Returned both from plan creation and from reconstruction of a stored
/// plan; `total_estimated_cost` is always the plan's stored nominal total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlanView {
    /// The plan record
    pub meal_plan: MealPlan,
    /// All 21 slot assignments with their recipes
    pub meals: Vec<PlannedMeal>,
    /// Consolidated shopping list across every assignment
    pub grocery_list: Vec<GroceryListItem>,
    /// Sum of the assigned recipes' flat estimated costs
    pub total_estimated_cost: Decimal,
}
