// ABOUTME: Recipe catalog database operations
// ABOUTME: Transactional recipe creation with ingredient lines and catalog reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use mise_core::models::{DietaryPreference, Recipe, RecipeIngredientLine};
use sqlx::Row;
use uuid::Uuid;

use super::{parse_decimal, parse_uuid, Database};

impl Database {
    /// Create recipe and recipe ingredient tables
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_recipes(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT,
                dietary_preference TEXT NOT NULL CHECK (dietary_preference IN ('vegan', 'vegetarian')),
                estimated_cost TEXT NOT NULL,
                servings INTEGER NOT NULL,
                prep_time_minutes INTEGER NOT NULL,
                instructions TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_recipes_dietary_preference ON recipes(dietary_preference)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipe_ingredients (
                id TEXT PRIMARY KEY,
                recipe_id TEXT NOT NULL REFERENCES recipes(id),
                ingredient_id TEXT NOT NULL REFERENCES ingredients(id),
                quantity TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_recipe_ingredients_recipe_id ON recipe_ingredients(recipe_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a recipe and its ingredient lines as one transaction.
    ///
    /// Either the recipe row and every line row are written, or none are.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; no partial rows remain
    pub async fn create_recipe(
        &self,
        recipe: &Recipe,
        lines: &[RecipeIngredientLine],
    ) -> Result<Uuid> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r"
            INSERT INTO recipes (
                id, name, description, dietary_preference, estimated_cost,
                servings, prep_time_minutes, instructions, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(recipe.id.to_string())
        .bind(&recipe.name)
        .bind(&recipe.description)
        .bind(recipe.dietary_preference.as_str())
        .bind(recipe.estimated_cost.to_string())
        .bind(i64::from(recipe.servings))
        .bind(i64::from(recipe.prep_time_minutes))
        .bind(&recipe.instructions)
        .bind(recipe.created_at)
        .execute(&mut *tx)
        .await?;

        for line in lines {
            sqlx::query(
                r"
                INSERT INTO recipe_ingredients (id, recipe_id, ingredient_id, quantity, created_at)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(line.id.to_string())
            .bind(line.recipe_id.to_string())
            .bind(line.ingredient_id.to_string())
            .bind(line.quantity.to_string())
            .bind(line.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(recipe.id)
    }

    /// Get recipes, optionally restricted to one dietary preference.
    ///
    /// Rows come back in insertion order; candidate selection relies on this
    /// as its stable tie-break order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn get_recipes(
        &self,
        preference: Option<DietaryPreference>,
    ) -> Result<Vec<Recipe>> {
        let rows = match preference {
            Some(preference) => {
                sqlx::query(
                    r"
                    SELECT id, name, description, dietary_preference, estimated_cost,
                           servings, prep_time_minutes, instructions, created_at
                    FROM recipes
                    WHERE dietary_preference = $1
                    ORDER BY created_at ASC
                    ",
                )
                .bind(preference.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r"
                    SELECT id, name, description, dietary_preference, estimated_cost,
                           servings, prep_time_minutes, instructions, created_at
                    FROM recipes
                    ORDER BY created_at ASC
                    ",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(recipe_from_row).collect()
    }

    /// Get a single recipe by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get_recipe(&self, recipe_id: Uuid) -> Result<Option<Recipe>> {
        let row = sqlx::query(
            r"
            SELECT id, name, description, dietary_preference, estimated_cost,
                   servings, prep_time_minutes, instructions, created_at
            FROM recipes
            WHERE id = $1
            ",
        )
        .bind(recipe_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(recipe_from_row).transpose()
    }

    /// Get all ingredient lines of a recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn get_recipe_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeIngredientLine>> {
        let rows = sqlx::query(
            r"
            SELECT id, recipe_id, ingredient_id, quantity, created_at
            FROM recipe_ingredients
            WHERE recipe_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(recipe_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(ingredient_line_from_row).collect()
    }
}

fn recipe_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Recipe> {
    let id: String = row.try_get("id")?;
    let preference: String = row.try_get("dietary_preference")?;
    let cost: String = row.try_get("estimated_cost")?;
    let servings: i64 = row.try_get("servings")?;
    let prep_time_minutes: i64 = row.try_get("prep_time_minutes")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(Recipe {
        id: parse_uuid(&id, "recipes.id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        dietary_preference: preference.parse()?,
        estimated_cost: parse_decimal(&cost, "recipes.estimated_cost")?,
        servings: u32::try_from(servings).context("recipes.servings out of range")?,
        prep_time_minutes: u32::try_from(prep_time_minutes)
            .context("recipes.prep_time_minutes out of range")?,
        instructions: row.try_get("instructions")?,
        created_at,
    })
}

fn ingredient_line_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<RecipeIngredientLine> {
    let id: String = row.try_get("id")?;
    let recipe_id: String = row.try_get("recipe_id")?;
    let ingredient_id: String = row.try_get("ingredient_id")?;
    let quantity: String = row.try_get("quantity")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(RecipeIngredientLine {
        id: parse_uuid(&id, "recipe_ingredients.id")?,
        recipe_id: parse_uuid(&recipe_id, "recipe_ingredients.recipe_id")?,
        ingredient_id: parse_uuid(&ingredient_id, "recipe_ingredients.ingredient_id")?,
        quantity: parse_decimal(&quantity, "recipe_ingredients.quantity")?,
        created_at,
    })
}
