// ABOUTME: Ingredient catalog database operations
// ABOUTME: Handles ingredient creation and price/unit lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use anyhow::Result;
use chrono::{DateTime, Utc};
use mise_core::models::Ingredient;
use sqlx::Row;
use uuid::Uuid;

use super::{parse_decimal, parse_uuid, Database};

impl Database {
    /// Create ingredient tables
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub(super) async fn migrate_ingredients(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ingredients (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                unit TEXT NOT NULL,
                price_per_unit TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a new ingredient
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_ingredient(&self, ingredient: &Ingredient) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO ingredients (id, name, unit, price_per_unit, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(ingredient.id.to_string())
        .bind(&ingredient.name)
        .bind(&ingredient.unit)
        .bind(ingredient.price_per_unit.to_string())
        .bind(ingredient.created_at)
        .execute(&self.pool)
        .await?;

        Ok(ingredient.id)
    }

    /// Get all ingredients in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn get_ingredients(&self) -> Result<Vec<Ingredient>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, unit, price_per_unit, created_at
            FROM ingredients
            ORDER BY created_at ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(ingredient_from_row).collect()
    }

    /// Get a single ingredient by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get_ingredient(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>> {
        let row = sqlx::query(
            r"
            SELECT id, name, unit, price_per_unit, created_at
            FROM ingredients
            WHERE id = $1
            ",
        )
        .bind(ingredient_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(ingredient_from_row).transpose()
    }
}

fn ingredient_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Ingredient> {
    let id: String = row.try_get("id")?;
    let price: String = row.try_get("price_per_unit")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(Ingredient {
        id: parse_uuid(&id, "ingredients.id")?,
        name: row.try_get("name")?,
        unit: row.try_get("unit")?,
        price_per_unit: parse_decimal(&price, "ingredients.price_per_unit")?,
        created_at,
    })
}
