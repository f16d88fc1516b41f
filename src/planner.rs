// ABOUTME: Meal plan service manager orchestrating selection, assembly, and reads
// ABOUTME: Atomic plan creation plus reconstruction of stored plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

//! # Meal Plan Management
//!
//! Service manager for weekly meal plans. The write path runs candidate
//! selection and slot assembly over the catalog, then persists the plan,
//! its 21 assignments, and the nominal total as one atomic unit. The read
//! paths rebuild the same view from stored assignments and are pure over
//! the stored data: repeated reads of an unchanged plan agree exactly.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use mise_core::models::{
    GroceryListItem, MealAssignment, MealPlan, MealPlanView, NewMealPlan, Recipe,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::database_plugins::factory::Database;
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use crate::planning::{assemble, consolidate, rebuild_view, select_candidates, ConsolidationIndex};

/// Service manager for weekly meal plans
#[derive(Clone)]
pub struct MealPlanManager {
    database: Arc<Database>,
}

impl MealPlanManager {
    /// Create a new meal plan manager backed by the given storage
    #[must_use]
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Assemble and persist a weekly meal plan.
    ///
    /// Fetches the preference-filtered catalog, selects and orders
    /// candidates under the budget slack filter, fills the 21 slots
    /// round-robin, and persists the plan atomically: either the plan row,
    /// all 21 assignment rows, and the stored total become visible together
    /// or none of them do. The returned view reports the nominal total (the
    /// sum of assigned recipes' flat costs) as both the stored and response
    /// total.
    ///
    /// # Errors
    ///
    /// - [`AppError::Plan`] when no recipe matches the preference
    ///   (`NoCandidates`) or none fits the budget (`BudgetExceeded`)
    /// - [`AppError::Database`] if any catalog read or the persist fails
    pub async fn create_meal_plan(&self, request: NewMealPlan) -> AppResult<MealPlanView> {
        let catalog = self
            .database
            .get_recipes(Some(request.dietary_preference))
            .await
            .map_err(AppError::database)?;

        let candidates =
            select_candidates(catalog, request.dietary_preference, request.weekly_budget)?;
        debug!(
            candidate_count = candidates.len(),
            dietary_preference = %request.dietary_preference,
            "candidates selected"
        );

        let assembly = assemble(&candidates);

        let plan = MealPlan::new(
            request.user_id,
            request.week_start_date,
            request.dietary_preference,
            request.weekly_budget,
            assembly.nominal_total_cost,
        );

        let assignments: Vec<MealAssignment> = assembly
            .meals
            .iter()
            .map(|meal| {
                MealAssignment::new(plan.id, meal.recipe.id, meal.day_of_week, meal.meal_type)
            })
            .collect();

        self.database
            .create_meal_plan(&plan, &assignments)
            .await
            .map_err(AppError::database)?;

        info!(
            meal_plan_id = %plan.id,
            user_id = %plan.user_id,
            total_estimated_cost = %plan.total_estimated_cost,
            "meal plan created"
        );

        let index = self.build_consolidation_index(&assignments).await?;
        let grocery_list = consolidate(&assignments, &index);
        let total_estimated_cost = assembly.nominal_total_cost;

        Ok(MealPlanView {
            meal_plan: plan,
            meals: assembly.meals,
            grocery_list,
            total_estimated_cost,
        })
    }

    /// Reconstruct the full view of a stored plan.
    ///
    /// Returns `Ok(None)` when no plan with this id exists; absence is a
    /// value, not an error. Read-only and idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if any read fails
    pub async fn get_meal_plan(&self, meal_plan_id: Uuid) -> AppResult<Option<MealPlanView>> {
        let Some(plan) = self
            .database
            .get_meal_plan(meal_plan_id)
            .await
            .map_err(AppError::database)?
        else {
            return Ok(None);
        };

        let assignments = self
            .database
            .get_meal_plan_assignments(meal_plan_id)
            .await
            .map_err(AppError::database)?;

        let recipes_by_id = self.fetch_assigned_recipes(&assignments).await?;
        let index = self.build_consolidation_index(&assignments).await?;

        Ok(Some(rebuild_view(
            plan,
            &assignments,
            &recipes_by_id,
            &index,
        )))
    }

    /// Get all meal plans of a user, newest first
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the query fails
    pub async fn get_user_meal_plans(&self, user_id: &str) -> AppResult<Vec<MealPlan>> {
        self.database
            .get_user_meal_plans(user_id)
            .await
            .map_err(AppError::database)
    }

    /// Consolidate the grocery list of a stored plan.
    ///
    /// Returns an empty list when the plan does not exist or has no
    /// assignments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if any read fails
    pub async fn generate_grocery_list(
        &self,
        meal_plan_id: Uuid,
    ) -> AppResult<Vec<GroceryListItem>> {
        let assignments = self
            .database
            .get_meal_plan_assignments(meal_plan_id)
            .await
            .map_err(AppError::database)?;

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let index = self.build_consolidation_index(&assignments).await?;
        Ok(consolidate(&assignments, &index))
    }

    /// Fetch the distinct recipes referenced by a set of assignments
    async fn fetch_assigned_recipes(
        &self,
        assignments: &[MealAssignment],
    ) -> AppResult<HashMap<Uuid, Recipe>> {
        let recipe_ids: HashSet<Uuid> = assignments
            .iter()
            .map(|assignment| assignment.recipe_id)
            .collect();

        let mut recipes_by_id = HashMap::with_capacity(recipe_ids.len());
        for recipe_id in recipe_ids {
            if let Some(recipe) = self
                .database
                .get_recipe(recipe_id)
                .await
                .map_err(AppError::database)?
            {
                recipes_by_id.insert(recipe_id, recipe);
            }
        }

        Ok(recipes_by_id)
    }

    /// Materialize the recipe/ingredient index for one consolidation pass.
    ///
    /// One bulk read per distinct recipe and per distinct ingredient;
    /// consolidation itself never goes back to storage.
    async fn build_consolidation_index(
        &self,
        assignments: &[MealAssignment],
    ) -> AppResult<ConsolidationIndex> {
        let recipe_ids: HashSet<Uuid> = assignments
            .iter()
            .map(|assignment| assignment.recipe_id)
            .collect();

        let mut lines = Vec::new();
        for recipe_id in recipe_ids {
            let recipe_lines = self
                .database
                .get_recipe_ingredients(recipe_id)
                .await
                .map_err(AppError::database)?;
            lines.extend(recipe_lines);
        }

        let ingredient_ids: HashSet<Uuid> =
            lines.iter().map(|line| line.ingredient_id).collect();

        let mut ingredients = Vec::with_capacity(ingredient_ids.len());
        for ingredient_id in ingredient_ids {
            if let Some(ingredient) = self
                .database
                .get_ingredient(ingredient_id)
                .await
                .map_err(AppError::database)?
            {
                ingredients.push(ingredient);
            }
        }

        Ok(ConsolidationIndex::new(lines, ingredients))
    }
}
