// ABOUTME: Round-robin assignment of candidate recipes to the 21 weekly slots
// ABOUTME: Computes the plan's nominal total cost alongside the assignments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use mise_core::constants::plan;
use mise_core::models::{MealType, PlannedMeal, Recipe};
use rust_decimal::Decimal;

/// Result of assembling one week from an ordered candidate list
#[derive(Debug, Clone)]
pub struct WeeklyAssembly {
    /// The 21 slot assignments in enumeration order (day 0 breakfast first)
    pub meals: Vec<PlannedMeal>,
    /// Sum of the assigned recipes' flat costs, counting repeats per slot
    pub nominal_total_cost: Decimal,
}

/// Fill the 21 weekly slots round-robin from an ordered candidate list.
///
/// Slots are enumerated day 0..=6, and within each day breakfast, lunch,
/// dinner; the k-th slot takes `candidates[k % candidates.len()]`. The
/// round-robin index is a local counter: the function is pure and identical
/// candidate lists always yield identical assignments. A recipe that passed
/// the budget filter is eligible for every slot; nothing re-checks the
/// budget per slot.
///
/// An empty candidate list yields an empty assembly; selection has already
/// rejected that case for the write path.
#[must_use]
pub fn assemble(candidates: &[Recipe]) -> WeeklyAssembly {
    if candidates.is_empty() {
        return WeeklyAssembly {
            meals: Vec::new(),
            nominal_total_cost: Decimal::ZERO,
        };
    }

    let mut meals = Vec::with_capacity(plan::SLOTS_PER_WEEK);
    let mut nominal_total_cost = Decimal::ZERO;
    let mut slot = 0_usize;

    for day_of_week in 0..plan::DAYS_PER_WEEK {
        for meal_type in MealType::ALL {
            let recipe = &candidates[slot % candidates.len()];
            nominal_total_cost += recipe.estimated_cost;
            meals.push(PlannedMeal {
                day_of_week,
                meal_type,
                recipe: recipe.clone(),
            });
            slot += 1;
        }
    }

    WeeklyAssembly {
        meals,
        nominal_total_cost,
    }
}
