// ABOUTME: Core data models for the Mise meal planning engine
// ABOUTME: Re-exports Ingredient, Recipe, MealPlan and derived grocery types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

//! # Data Models
//!
//! Domain models shared by the storage layer, the planning algorithms, and
//! the service managers.
//!
//! ## Design Principles
//!
//! - **Decimal end-to-end**: money and quantities are `rust_decimal::Decimal`,
//!   never binary floats, so aggregation across many small contributions
//!   cannot drift
//! - **Create-once records**: ingredients, recipes, and meal plans carry no
//!   mutation API; rows are written once and only read afterwards
//! - **Serializable**: all models support JSON serialization for callers that
//!   sit on a transport

// Domain modules
mod diet;
mod grocery;
mod ingredient;
mod meal_plan;
mod recipe;

// Diet domain
pub use diet::DietaryPreference;

// Ingredient domain
pub use ingredient::{Ingredient, NewIngredient};

// Recipe domain
pub use recipe::{NewRecipe, NewRecipeIngredient, Recipe, RecipeIngredientLine};

// Meal plan domain
pub use meal_plan::{
    MealAssignment, MealPlan, MealPlanView, MealType, NewMealPlan, PlannedMeal,
};

// Derived grocery domain (never persisted)
pub use grocery::GroceryListItem;
