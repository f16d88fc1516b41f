// ABOUTME: Recipe catalog models including per-recipe ingredient lines
// ABOUTME: Recipe record, RecipeIngredientLine join rows, and creation inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DietaryPreference;

/// A recipe in the catalog.
///
/// The flat `estimated_cost` is the recipe author's declared cost and is the
/// value the planner budgets against; it is independent of the sum of the
/// recipe's ingredient costs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Dietary preference this recipe satisfies
    pub dietary_preference: DietaryPreference,
    /// Declared flat cost, positive
    pub estimated_cost: Decimal,
    /// Number of servings produced, positive
    pub servings: u32,
    /// Preparation time in minutes, positive
    pub prep_time_minutes: u32,
    /// Preparation instructions
    pub instructions: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new recipe with a generated id and current timestamp
    #[must_use]
    pub fn new(
        name: String,
        description: Option<String>,
        dietary_preference: DietaryPreference,
        estimated_cost: Decimal,
        servings: u32,
        prep_time_minutes: u32,
        instructions: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            dietary_preference,
            estimated_cost,
            servings,
            prep_time_minutes,
            instructions,
            created_at: Utc::now(),
        }
    }
}

/// One ingredient requirement of a recipe.
///
/// Quantity is expressed in the referenced ingredient's declared unit. Lines
/// are fixed at recipe creation; order is irrelevant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeIngredientLine {
    /// Unique identifier of the join row
    pub id: Uuid,
    /// Owning recipe
    pub recipe_id: Uuid,
    /// Referenced ingredient; must exist when the recipe is created
    pub ingredient_id: Uuid,
    /// Required quantity in the ingredient's unit, positive
    pub quantity: Decimal,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl RecipeIngredientLine {
    /// Create a new ingredient line with a generated id and current timestamp
    #[must_use]
    pub fn new(recipe_id: Uuid, ingredient_id: Uuid, quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_id,
            ingredient_id,
            quantity,
            created_at: Utc::now(),
        }
    }
}

/// One ingredient reference inside a recipe creation input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecipeIngredient {
    /// Id of an existing ingredient
    pub ingredient_id: Uuid,
    /// Required quantity, must be positive
    pub quantity: Decimal,
}

/// Input for creating a recipe together with its ingredient lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecipe {
    /// Display name
    pub name: String,
    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Dietary preference this recipe satisfies
    pub dietary_preference: DietaryPreference,
    /// Declared flat cost, must be positive
    pub estimated_cost: Decimal,
    /// Number of servings produced, must be positive
    pub servings: u32,
    /// Preparation time in minutes, must be positive
    pub prep_time_minutes: u32,
    /// Preparation instructions
    pub instructions: String,
    /// Ingredient requirements; every referenced ingredient must exist
    pub ingredients: Vec<NewRecipeIngredient>,
}
