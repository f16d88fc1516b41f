// ABOUTME: Rebuilds the full meal plan view from persisted assignments
// ABOUTME: Pure re-join of slots to recipes plus grocery re-consolidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use std::collections::HashMap;

use mise_core::models::{MealAssignment, MealPlan, MealPlanView, PlannedMeal, Recipe};
use tracing::warn;
use uuid::Uuid;

use super::grocery::{consolidate, ConsolidationIndex};

/// Rebuild the assembled view of a stored plan.
///
/// Re-joins the persisted assignments to their recipes for the per-slot
/// view and re-runs grocery consolidation over the same assignments. The
/// reported total is the plan's stored nominal total; the ingredient-derived
/// per-item costs remain visible on the grocery list. Pure and idempotent:
/// unchanged inputs always rebuild the identical view.
#[must_use]
pub fn rebuild_view(
    plan: MealPlan,
    assignments: &[MealAssignment],
    recipes_by_id: &HashMap<Uuid, Recipe>,
    index: &ConsolidationIndex,
) -> MealPlanView {
    let mut meals: Vec<PlannedMeal> = assignments
        .iter()
        .filter_map(|assignment| {
            let Some(recipe) = recipes_by_id.get(&assignment.recipe_id) else {
                // Inner-join semantics: an assignment whose recipe row is
                // gone cannot be rendered
                warn!(
                    meal_plan_id = %assignment.meal_plan_id,
                    recipe_id = %assignment.recipe_id,
                    "skipping slot: assigned recipe missing from catalog"
                );
                return None;
            };
            Some(PlannedMeal {
                day_of_week: assignment.day_of_week,
                meal_type: assignment.meal_type,
                recipe: recipe.clone(),
            })
        })
        .collect();

    meals.sort_by_key(|meal| (meal.day_of_week, meal.meal_type.slot_index()));

    let grocery_list = consolidate(assignments, index);
    let total_estimated_cost = plan.total_estimated_cost;

    MealPlanView {
        meal_plan: plan,
        meals,
        grocery_list,
        total_estimated_cost,
    }
}
