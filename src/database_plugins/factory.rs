// ABOUTME: Database factory and provider dispatch for the storage layer
// ABOUTME: Detects the backend from the connection string and delegates calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

//! Database factory for creating storage providers
//!
//! This module provides automatic database type detection and creation
//! based on connection strings.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use mise_core::models::{
    DietaryPreference, Ingredient, MealAssignment, MealPlan, Recipe, RecipeIngredientLine,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::sqlite::SqliteDatabase;
use super::DatabaseProvider;

/// Supported database types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseType {
    SQLite,
}

/// Database instance wrapper that delegates to the appropriate implementation
#[derive(Clone)]
pub enum Database {
    SQLite(SqliteDatabase),
}

impl Database {
    /// Get a descriptive string for the current database backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite (Embedded)",
        }
    }

    /// Get the database type enum
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::SQLite(_) => DatabaseType::SQLite,
        }
    }

    /// Create a new database instance based on the connection string
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Database URL format is unsupported or invalid
    /// - Database connection fails
    /// - Database initialization or migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        debug!("Detecting database type from URL: {}", database_url);
        let db_type = detect_database_type(database_url)?;
        info!("Detected database type: {:?}", db_type);

        match db_type {
            DatabaseType::SQLite => {
                let db = SqliteDatabase::new(database_url).await?;
                info!("SQLite database initialized successfully");
                Ok(Self::SQLite(db))
            }
        }
    }
}

/// Automatically detect database type from connection string
///
/// # Errors
///
/// Returns an error if the URL scheme is not a supported backend
fn detect_database_type(database_url: &str) -> Result<DatabaseType> {
    if database_url.starts_with("sqlite:") {
        Ok(DatabaseType::SQLite)
    } else {
        Err(anyhow!(
            "Unsupported database URL format: {database_url}. Expected sqlite:"
        ))
    }
}

// Implement DatabaseProvider for the enum by delegating to the appropriate implementation
#[async_trait]
impl DatabaseProvider for Database {
    async fn new(database_url: &str) -> Result<Self> {
        Self::new(database_url).await
    }

    async fn migrate(&self) -> Result<()> {
        match self {
            Self::SQLite(db) => db.migrate().await,
        }
    }

    async fn create_ingredient(&self, ingredient: &Ingredient) -> Result<Uuid> {
        match self {
            Self::SQLite(db) => db.create_ingredient(ingredient).await,
        }
    }

    async fn get_ingredients(&self) -> Result<Vec<Ingredient>> {
        match self {
            Self::SQLite(db) => db.get_ingredients().await,
        }
    }

    async fn get_ingredient(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>> {
        match self {
            Self::SQLite(db) => db.get_ingredient(ingredient_id).await,
        }
    }

    async fn create_recipe(
        &self,
        recipe: &Recipe,
        lines: &[RecipeIngredientLine],
    ) -> Result<Uuid> {
        match self {
            Self::SQLite(db) => db.create_recipe(recipe, lines).await,
        }
    }

    async fn get_recipes(&self, preference: Option<DietaryPreference>) -> Result<Vec<Recipe>> {
        match self {
            Self::SQLite(db) => db.get_recipes(preference).await,
        }
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Option<Recipe>> {
        match self {
            Self::SQLite(db) => db.get_recipe(recipe_id).await,
        }
    }

    async fn get_recipe_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeIngredientLine>> {
        match self {
            Self::SQLite(db) => db.get_recipe_ingredients(recipe_id).await,
        }
    }

    async fn create_meal_plan(
        &self,
        plan: &MealPlan,
        assignments: &[MealAssignment],
    ) -> Result<Uuid> {
        match self {
            Self::SQLite(db) => db.create_meal_plan(plan, assignments).await,
        }
    }

    async fn get_meal_plan(&self, meal_plan_id: Uuid) -> Result<Option<MealPlan>> {
        match self {
            Self::SQLite(db) => db.get_meal_plan(meal_plan_id).await,
        }
    }

    async fn get_meal_plan_assignments(
        &self,
        meal_plan_id: Uuid,
    ) -> Result<Vec<MealAssignment>> {
        match self {
            Self::SQLite(db) => db.get_meal_plan_assignments(meal_plan_id).await,
        }
    }

    async fn get_user_meal_plans(&self, user_id: &str) -> Result<Vec<MealPlan>> {
        match self {
            Self::SQLite(db) => db.get_user_meal_plans(user_id).await,
        }
    }
}
