// ABOUTME: Unified error handling for the Mise meal planning engine
// ABOUTME: Wraps domain errors and storage failures behind one AppError type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

//! # Unified Error Handling
//!
//! Service managers return [`AppError`] so callers receive one error type
//! with distinguishable kinds: planning failures, catalog integrity
//! violations, and storage I/O failures. Storage failures are propagated
//! unmodified; the engine performs no retry or masking.

use mise_core::errors::{CatalogError, PlanError};

/// Result alias used across service managers
pub type AppResult<T> = Result<T, AppError>;

/// Unified application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Candidate selection failed while assembling a plan
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Catalog integrity violation on record creation
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Underlying storage I/O failure, propagated unmodified
    #[error("database operation failed")]
    Database {
        /// The storage layer's error
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Wrap a storage layer failure
    #[must_use]
    pub fn database(source: anyhow::Error) -> Self {
        Self::Database { source }
    }

    /// True when no recipe matched the requested dietary preference at all
    #[must_use]
    pub fn is_no_candidates(&self) -> bool {
        matches!(self, Self::Plan(PlanError::NoCandidates { .. }))
    }

    /// True when recipes exist for the preference but none fit the budget
    #[must_use]
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(self, Self::Plan(PlanError::BudgetExceeded { .. }))
    }

    /// True when a recipe creation referenced a nonexistent ingredient
    #[must_use]
    pub fn is_unknown_ingredient(&self) -> bool {
        matches!(self, Self::Catalog(CatalogError::UnknownIngredient { .. }))
    }
}
