// ABOUTME: SQLite storage backend for the meal planning engine
// ABOUTME: Wraps the database module behind the DatabaseProvider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

//! SQLite database implementation
//!
//! This module wraps the SQLite database functionality to implement the
//! `DatabaseProvider` trait.

use anyhow::Result;
use async_trait::async_trait;
use mise_core::models::{
    DietaryPreference, Ingredient, MealAssignment, MealPlan, Recipe, RecipeIngredientLine,
};
use uuid::Uuid;

use super::DatabaseProvider;

/// SQLite database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    /// The underlying database instance
    inner: crate::database::Database,
}

impl SqliteDatabase {
    /// Get a reference to the inner database
    #[must_use]
    pub const fn inner(&self) -> &crate::database::Database {
        &self.inner
    }
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        let inner = crate::database::Database::new(database_url).await?;
        Ok(Self { inner })
    }

    async fn migrate(&self) -> Result<()> {
        self.inner.migrate().await
    }

    async fn create_ingredient(&self, ingredient: &Ingredient) -> Result<Uuid> {
        self.inner.create_ingredient(ingredient).await
    }

    async fn get_ingredients(&self) -> Result<Vec<Ingredient>> {
        self.inner.get_ingredients().await
    }

    async fn get_ingredient(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>> {
        self.inner.get_ingredient(ingredient_id).await
    }

    async fn create_recipe(
        &self,
        recipe: &Recipe,
        lines: &[RecipeIngredientLine],
    ) -> Result<Uuid> {
        self.inner.create_recipe(recipe, lines).await
    }

    async fn get_recipes(&self, preference: Option<DietaryPreference>) -> Result<Vec<Recipe>> {
        self.inner.get_recipes(preference).await
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Option<Recipe>> {
        self.inner.get_recipe(recipe_id).await
    }

    async fn get_recipe_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeIngredientLine>> {
        self.inner.get_recipe_ingredients(recipe_id).await
    }

    async fn create_meal_plan(
        &self,
        plan: &MealPlan,
        assignments: &[MealAssignment],
    ) -> Result<Uuid> {
        self.inner.create_meal_plan(plan, assignments).await
    }

    async fn get_meal_plan(&self, meal_plan_id: Uuid) -> Result<Option<MealPlan>> {
        self.inner.get_meal_plan(meal_plan_id).await
    }

    async fn get_meal_plan_assignments(
        &self,
        meal_plan_id: Uuid,
    ) -> Result<Vec<MealAssignment>> {
        self.inner.get_meal_plan_assignments(meal_plan_id).await
    }

    async fn get_user_meal_plans(&self, user_id: &str) -> Result<Vec<MealPlan>> {
        self.inner.get_user_meal_plans(user_id).await
    }
}
