// ABOUTME: Catalog integrity errors raised when creating recipes
// ABOUTME: Unknown ingredient references are hard errors, never silent skips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use uuid::Uuid;

/// Errors raised by catalog record creation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A recipe ingredient line references an ingredient id that does not exist
    #[error("ingredient {ingredient_id} does not exist")]
    UnknownIngredient {
        /// The missing ingredient id
        ingredient_id: Uuid,
    },
}

impl CatalogError {
    /// Create an "unknown ingredient" error
    #[must_use]
    pub const fn unknown_ingredient(ingredient_id: Uuid) -> Self {
        Self::UnknownIngredient { ingredient_id }
    }
}
