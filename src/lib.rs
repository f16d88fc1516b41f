// ABOUTME: Main library entry point for the Mise meal planning engine
// ABOUTME: Weekly meal plan assembly and grocery list consolidation over a recipe catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

#![deny(unsafe_code)]

//! # Mise Meal Planner
//!
//! An engine that assembles a week-long meal schedule from a recipe catalog
//! under a dietary-preference and budget constraint, then derives a
//! consolidated shopping list with aggregated quantities and costs.
//!
//! ## Architecture
//!
//! The engine follows a modular architecture:
//! - **Models** (`mise-core`): decimal-typed domain records shared everywhere
//! - **Storage**: SQLite-backed catalog and plan persistence behind the
//!   `DatabaseProvider` trait
//! - **Planning**: pure selection, assembly, and consolidation algorithms
//! - **Managers**: `CatalogManager` and `MealPlanManager`, the operations a
//!   transport layer would expose
//!
//! Transport, request validation, and presentation are external
//! collaborators; user identity is an opaque string key.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mise_meal_planner::config::ServerConfig;
//! use mise_meal_planner::database_plugins::factory::Database;
//! use mise_meal_planner::logging::LoggingConfig;
//! use mise_meal_planner::planner::MealPlanManager;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     LoggingConfig::from_env().init()?;
//!     let config = ServerConfig::from_env()?;
//!
//!     let database = Arc::new(Database::new(&config.database_url).await?);
//!     let planner = MealPlanManager::new(database);
//!
//!     // plans are created through planner.create_meal_plan(..)
//!     let absent = planner.get_meal_plan(uuid::Uuid::new_v4()).await?;
//!     assert!(absent.is_none());
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by integration tests (tests/) and by callers that
// put a transport in front of the engine. They must remain `pub`.

/// Catalog service manager for ingredient and recipe records
pub mod catalog;

/// Configuration management and environment settings
pub mod config;

/// SQLite storage for the catalog and persisted meal plans
pub mod database;

/// Storage abstraction layer with pluggable backends
pub mod database_plugins;

/// Unified error handling with distinguishable failure kinds
pub mod errors;

/// Logging configuration and structured logging setup
pub mod logging;

/// Meal plan service manager: creation, reconstruction, grocery lists
pub mod planner;

/// Pure planning algorithms: selection, assembly, consolidation
pub mod planning;

/// Core data models re-exported from `mise-core`
pub mod models;
