// ABOUTME: Storage abstraction layer for the meal planning engine
// ABOUTME: Provider trait consumed by service managers, with a SQLite backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use anyhow::Result;
use async_trait::async_trait;
use mise_core::models::{
    DietaryPreference, Ingredient, MealAssignment, MealPlan, Recipe, RecipeIngredientLine,
};
use uuid::Uuid;

pub mod factory;
pub mod sqlite;

/// Core storage abstraction trait.
///
/// All storage backends must implement this trait to provide a consistent
/// interface for the service managers. The engine only reads catalog data
/// through it and writes plans through the single atomic
/// [`create_meal_plan`](DatabaseProvider::create_meal_plan) operation.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Create a new database connection and run migrations
    async fn new(database_url: &str) -> Result<Self>
    where
        Self: Sized;

    /// Run database migrations to set up the schema
    async fn migrate(&self) -> Result<()>;

    // ================================
    // Ingredient Catalog
    // ================================

    /// Insert a new ingredient
    async fn create_ingredient(&self, ingredient: &Ingredient) -> Result<Uuid>;

    /// Get all ingredients
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>>;

    /// Get an ingredient by id
    async fn get_ingredient(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>>;

    // ================================
    // Recipe Catalog
    // ================================

    /// Insert a recipe and its ingredient lines atomically
    async fn create_recipe(
        &self,
        recipe: &Recipe,
        lines: &[RecipeIngredientLine],
    ) -> Result<Uuid>;

    /// Get recipes, optionally restricted to one dietary preference
    async fn get_recipes(&self, preference: Option<DietaryPreference>) -> Result<Vec<Recipe>>;

    /// Get a recipe by id
    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Option<Recipe>>;

    /// Get all ingredient lines of a recipe
    async fn get_recipe_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeIngredientLine>>;

    // ================================
    // Meal Plans
    // ================================

    /// Insert a meal plan and all of its slot assignments atomically
    async fn create_meal_plan(
        &self,
        plan: &MealPlan,
        assignments: &[MealAssignment],
    ) -> Result<Uuid>;

    /// Get a meal plan by id
    async fn get_meal_plan(&self, meal_plan_id: Uuid) -> Result<Option<MealPlan>>;

    /// Get all slot assignments of a meal plan
    async fn get_meal_plan_assignments(
        &self,
        meal_plan_id: Uuid,
    ) -> Result<Vec<MealAssignment>>;

    /// Get all meal plans of a user, newest first
    async fn get_user_meal_plans(&self, user_id: &str) -> Result<Vec<MealPlan>>;
}
