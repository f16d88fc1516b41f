// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, manager, and catalog seeding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

#![allow(dead_code, clippy::unwrap_used)]

//! Shared test utilities for `mise_meal_planner`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::sync::{Arc, Once};

use anyhow::Result;
use mise_meal_planner::catalog::CatalogManager;
use mise_meal_planner::database_plugins::factory::Database;
use mise_meal_planner::models::{
    DietaryPreference, Ingredient, NewIngredient, NewRecipe, NewRecipeIngredient, Recipe,
};
use mise_meal_planner::planner::MealPlanManager;
use rust_decimal::Decimal;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database = Arc::new(Database::new("sqlite::memory:").await?);
    Ok(database)
}

/// Create a catalog manager over a fresh test database
pub async fn create_test_catalog() -> Result<(Arc<Database>, CatalogManager)> {
    let database = create_test_database().await?;
    let catalog = CatalogManager::new(database.clone());
    Ok((database, catalog))
}

/// Create both service managers over a fresh test database
pub async fn create_test_managers() -> Result<(Arc<Database>, CatalogManager, MealPlanManager)> {
    let database = create_test_database().await?;
    let catalog = CatalogManager::new(database.clone());
    let planner = MealPlanManager::new(database.clone());
    Ok((database, catalog, planner))
}

/// Parse a decimal literal in a test
pub fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

/// Seed one ingredient through the catalog manager
pub async fn seed_ingredient(
    catalog: &CatalogManager,
    name: &str,
    unit: &str,
    price_per_unit: &str,
) -> Result<Ingredient> {
    let ingredient = catalog
        .create_ingredient(NewIngredient {
            name: name.to_string(),
            unit: unit.to_string(),
            price_per_unit: dec(price_per_unit),
        })
        .await?;
    Ok(ingredient)
}

/// Seed one recipe without ingredient lines
pub async fn seed_recipe(
    catalog: &CatalogManager,
    name: &str,
    preference: DietaryPreference,
    estimated_cost: &str,
) -> Result<Recipe> {
    seed_recipe_with_lines(catalog, name, preference, estimated_cost, vec![]).await
}

/// Seed one recipe with the given (ingredient, quantity) lines
pub async fn seed_recipe_with_lines(
    catalog: &CatalogManager,
    name: &str,
    preference: DietaryPreference,
    estimated_cost: &str,
    lines: Vec<(&Ingredient, &str)>,
) -> Result<Recipe> {
    let recipe = catalog
        .create_recipe(NewRecipe {
            name: name.to_string(),
            description: None,
            dietary_preference: preference,
            estimated_cost: dec(estimated_cost),
            servings: 2,
            prep_time_minutes: 20,
            instructions: "Prepare and serve.".to_string(),
            ingredients: lines
                .into_iter()
                .map(|(ingredient, quantity)| NewRecipeIngredient {
                    ingredient_id: ingredient.id,
                    quantity: dec(quantity),
                })
                .collect(),
        })
        .await?;
    Ok(recipe)
}
