// ABOUTME: Candidate selection errors raised while assembling a meal plan
// ABOUTME: Distinguishes empty-preference catalogs from budget filter misses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use rust_decimal::Decimal;

use crate::models::DietaryPreference;

/// Errors raised by candidate selection.
///
/// The two variants are deliberately distinct: callers must be able to tell
/// "no recipes exist for this diet at all" apart from "recipes exist but
/// none fit the budget".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// No recipe in the catalog matches the requested dietary preference
    #[error("no recipes found for dietary preference: {preference}")]
    NoCandidates {
        /// The preference that matched nothing
        preference: DietaryPreference,
    },

    /// Recipes exist for the preference but none pass the budget slack filter
    #[error(
        "no recipes within budget: {candidate_count} {preference} recipe(s) exist \
         but none fit a weekly budget of {weekly_budget}"
    )]
    BudgetExceeded {
        /// The requested preference
        preference: DietaryPreference,
        /// The weekly budget the filter ran under
        weekly_budget: Decimal,
        /// How many recipes matched the preference before the budget filter
        candidate_count: usize,
    },
}

impl PlanError {
    /// Create a "no candidates" error
    #[must_use]
    pub const fn no_candidates(preference: DietaryPreference) -> Self {
        Self::NoCandidates { preference }
    }

    /// Create a "budget exceeded" error
    #[must_use]
    pub const fn budget_exceeded(
        preference: DietaryPreference,
        weekly_budget: Decimal,
        candidate_count: usize,
    ) -> Self {
        Self::BudgetExceeded {
            preference,
            weekly_budget,
            candidate_count,
        }
    }
}
