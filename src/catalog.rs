// ABOUTME: Catalog service manager for ingredient and recipe records
// ABOUTME: Create/read operations with referential integrity enforcement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

//! # Catalog Management
//!
//! Service manager for the ingredient and recipe catalog. Records are
//! created once and read many times; there are no update or delete paths.
//! Recipe creation enforces referential integrity: every ingredient line
//! must reference an existing ingredient, and a violation writes nothing.

use std::sync::Arc;

use mise_core::errors::CatalogError;
use mise_core::models::{
    DietaryPreference, Ingredient, NewIngredient, NewRecipe, Recipe, RecipeIngredientLine,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::database_plugins::factory::Database;
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};

/// Service manager for catalog records
#[derive(Clone)]
pub struct CatalogManager {
    database: Arc<Database>,
}

impl CatalogManager {
    /// Create a new catalog manager backed by the given storage
    #[must_use]
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Create a new ingredient
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the insert fails
    pub async fn create_ingredient(&self, request: NewIngredient) -> AppResult<Ingredient> {
        let ingredient = Ingredient::new(request.name, request.unit, request.price_per_unit);

        self.database
            .create_ingredient(&ingredient)
            .await
            .map_err(AppError::database)?;

        info!(
            ingredient_id = %ingredient.id,
            name = %ingredient.name,
            "ingredient created"
        );

        Ok(ingredient)
    }

    /// Get all ingredients
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the query fails
    pub async fn get_ingredients(&self) -> AppResult<Vec<Ingredient>> {
        self.database
            .get_ingredients()
            .await
            .map_err(AppError::database)
    }

    /// Create a recipe together with its ingredient lines.
    ///
    /// Every referenced ingredient is checked before anything is written;
    /// the recipe row and its lines then commit as one unit.
    ///
    /// # Errors
    ///
    /// - [`AppError::Catalog`] with [`CatalogError::UnknownIngredient`] when
    ///   a line references a nonexistent ingredient id; no rows are written
    /// - [`AppError::Database`] if a lookup or the insert fails
    pub async fn create_recipe(&self, request: NewRecipe) -> AppResult<Recipe> {
        for line in &request.ingredients {
            let exists = self
                .database
                .get_ingredient(line.ingredient_id)
                .await
                .map_err(AppError::database)?
                .is_some();
            if !exists {
                return Err(CatalogError::unknown_ingredient(line.ingredient_id).into());
            }
        }

        let recipe = Recipe::new(
            request.name,
            request.description,
            request.dietary_preference,
            request.estimated_cost,
            request.servings,
            request.prep_time_minutes,
            request.instructions,
        );

        let lines: Vec<RecipeIngredientLine> = request
            .ingredients
            .iter()
            .map(|line| RecipeIngredientLine::new(recipe.id, line.ingredient_id, line.quantity))
            .collect();

        self.database
            .create_recipe(&recipe, &lines)
            .await
            .map_err(AppError::database)?;

        info!(
            recipe_id = %recipe.id,
            name = %recipe.name,
            dietary_preference = %recipe.dietary_preference,
            ingredient_lines = lines.len(),
            "recipe created"
        );

        Ok(recipe)
    }

    /// Get recipes, optionally restricted to one dietary preference
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the query fails
    pub async fn get_recipes(
        &self,
        preference: Option<DietaryPreference>,
    ) -> AppResult<Vec<Recipe>> {
        debug!(preference = ?preference, "fetching recipes");
        self.database
            .get_recipes(preference)
            .await
            .map_err(AppError::database)
    }

    /// Get all ingredient lines of a recipe
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the query fails
    pub async fn get_recipe_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> AppResult<Vec<RecipeIngredientLine>> {
        self.database
            .get_recipe_ingredients(recipe_id)
            .await
            .map_err(AppError::database)
    }
}
