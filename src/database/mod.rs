// ABOUTME: SQLite-backed storage for the meal planning catalog and plans
// ABOUTME: Connection management, migrations, and shared row decoding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

//! # Database Management
//!
//! This module provides storage for the Mise meal planning engine: the
//! ingredient/recipe catalog and persisted meal plans with their slot
//! assignments.
//!
//! Money and quantity columns are TEXT-encoded decimals; rows are decoded
//! manually and every numeric field goes through `rust_decimal` so
//! aggregation never touches binary floats.

use anyhow::{anyhow, Context, Result};
use mise_core::errors::ModelError;
use rust_decimal::Decimal;
use sqlx::{Pool, Sqlite, SqlitePool};
use uuid::Uuid;

mod ingredients;
mod meal_plans;
mod recipes;

/// Storage manager for the recipe catalog and meal plans
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_ingredients().await?;
        self.migrate_recipes().await?;
        self.migrate_meal_plans().await?;

        Ok(())
    }
}

/// Decode a TEXT-encoded decimal column
fn parse_decimal(raw: &str, column: &str) -> Result<Decimal> {
    raw.parse::<Decimal>()
        .map_err(|e| anyhow!("invalid decimal in column {column}: {raw} ({e})"))
}

/// Decode a TEXT-encoded UUID column
fn parse_uuid(raw: &str, column: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).with_context(|| format!("invalid uuid in column {column}: {raw}"))
}

/// Decode a stored day-of-week into the 0..=6 model range
fn parse_day_of_week(raw: i64) -> Result<u8> {
    let day = u8::try_from(raw).map_err(|_| ModelError::invalid_day_of_week(raw))?;
    if day > 6 {
        return Err(ModelError::invalid_day_of_week(raw).into());
    }
    Ok(day)
}
