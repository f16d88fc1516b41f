// ABOUTME: Core data models and types for the Mise meal planning engine
// ABOUTME: Re-exports Ingredient, Recipe, MealPlan and derived grocery types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

//! # Data Models
//!
//! Convenience re-exports of the `mise-core` domain models so callers and
//! tests can reach everything through `mise_meal_planner::models`.

pub use mise_core::models::{
    DietaryPreference, GroceryListItem, Ingredient, MealAssignment, MealPlan, MealPlanView,
    MealType, NewIngredient, NewMealPlan, NewRecipe, NewRecipeIngredient, PlannedMeal, Recipe,
    RecipeIngredientLine,
};
