// ABOUTME: Candidate recipe selection under dietary preference and budget
// ABOUTME: Budget slack filter and stable cost ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use mise_core::constants::plan;
use mise_core::errors::PlanError;
use mise_core::models::{DietaryPreference, Recipe};
use rust_decimal::Decimal;

/// Filter and order recipes eligible for a weekly plan.
///
/// `recipes` must already be restricted to `preference` (the catalog query
/// filters); the preference is only needed here to label failures. The
/// caller guarantees `weekly_budget > 0`.
///
/// A recipe is admitted when its flat cost is at most twice the per-meal
/// budget (`weekly_budget / 21`). The slack factor deliberately admits
/// recipes above the per-meal average; it is not a hard per-meal cap, and
/// no later step re-checks the budget. Survivors are ordered by ascending
/// cost; equal costs keep their catalog order.
///
/// # Errors
///
/// - [`PlanError::NoCandidates`] when `recipes` is empty (nothing in the
///   catalog matches the preference at all)
/// - [`PlanError::BudgetExceeded`] when recipes exist but none pass the
///   slack filter; carries the pre-filter count so callers can report how
///   close the catalog came
pub fn select_candidates(
    recipes: Vec<Recipe>,
    preference: DietaryPreference,
    weekly_budget: Decimal,
) -> Result<Vec<Recipe>, PlanError> {
    if recipes.is_empty() {
        return Err(PlanError::no_candidates(preference));
    }

    let candidate_count = recipes.len();
    let budget_per_meal = weekly_budget / Decimal::from(plan::SLOTS_PER_WEEK);
    let admission_ceiling = budget_per_meal * Decimal::from(plan::BUDGET_SLACK_FACTOR);

    let mut suitable: Vec<Recipe> = recipes
        .into_iter()
        .filter(|recipe| recipe.estimated_cost <= admission_ceiling)
        .collect();

    if suitable.is_empty() {
        return Err(PlanError::budget_exceeded(
            preference,
            weekly_budget,
            candidate_count,
        ));
    }

    // Stable sort: equal costs keep catalog order
    suitable.sort_by(|a, b| a.estimated_cost.cmp(&b.estimated_cost));

    Ok(suitable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, cost: &str) -> Recipe {
        Recipe::new(
            name.to_string(),
            None,
            DietaryPreference::Vegan,
            cost.parse().unwrap(),
            2,
            15,
            "Combine and serve.".to_string(),
        )
    }

    #[test]
    fn test_empty_catalog_is_no_candidates() {
        let err = select_candidates(vec![], DietaryPreference::Vegan, Decimal::from(100))
            .unwrap_err();
        assert!(matches!(err, PlanError::NoCandidates { .. }));
    }

    #[test]
    fn test_all_over_budget_is_budget_exceeded() {
        // 2 * (10 / 21) < 1, so a $50 recipe can never pass
        let err = select_candidates(
            vec![recipe("Truffle Risotto", "50.00")],
            DietaryPreference::Vegan,
            Decimal::from(10),
        )
        .unwrap_err();

        match err {
            PlanError::BudgetExceeded {
                candidate_count, ..
            } => assert_eq!(candidate_count, 1),
            other => panic!("expected BudgetExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_cost_exactly_at_ceiling_is_admitted() {
        // weekly budget 42 -> per meal 2, ceiling 4
        let candidates = select_candidates(
            vec![recipe("Boundary Bowl", "4.00")],
            DietaryPreference::Vegan,
            Decimal::from(42),
        )
        .unwrap();
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_sorted_ascending_with_stable_ties() {
        let candidates = select_candidates(
            vec![
                recipe("Pricier", "3.00"),
                recipe("First Tie", "1.50"),
                recipe("Second Tie", "1.50"),
            ],
            DietaryPreference::Vegan,
            Decimal::from(63),
        )
        .unwrap();

        let names: Vec<&str> = candidates.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First Tie", "Second Tie", "Pricier"]);
    }

    #[test]
    fn test_filter_keeps_cheap_and_drops_expensive() {
        let candidates = select_candidates(
            vec![recipe("Affordable", "2.00"), recipe("Splurge", "40.00")],
            DietaryPreference::Vegan,
            Decimal::from(42),
        )
        .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Affordable");
    }
}
