// ABOUTME: Meal plan database operations
// ABOUTME: Atomic plan-plus-assignments writes and read-side joins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use mise_core::models::{MealAssignment, MealPlan};
use sqlx::Row;
use uuid::Uuid;

use super::{parse_day_of_week, parse_decimal, parse_uuid, Database};

impl Database {
    /// Create meal plan tables
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_meal_plans(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meal_plans (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                week_start_date DATE NOT NULL,
                dietary_preference TEXT NOT NULL CHECK (dietary_preference IN ('vegan', 'vegetarian')),
                weekly_budget TEXT NOT NULL,
                total_estimated_cost TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_meal_plans_user_id ON meal_plans(user_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meal_plan_recipes (
                id TEXT PRIMARY KEY,
                meal_plan_id TEXT NOT NULL REFERENCES meal_plans(id),
                recipe_id TEXT NOT NULL REFERENCES recipes(id),
                day_of_week INTEGER NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
                meal_type TEXT NOT NULL CHECK (meal_type IN ('breakfast', 'lunch', 'dinner')),
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_meal_plan_recipes_meal_plan_id ON meal_plan_recipes(meal_plan_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a meal plan and all of its slot assignments as one transaction.
    ///
    /// The plan row carries its final total; either everything commits or
    /// nothing is visible to subsequent reads. A plan with fewer assignment
    /// rows than it was assembled with must never be observable.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; the transaction rolls back
    pub async fn create_meal_plan(
        &self,
        plan: &MealPlan,
        assignments: &[MealAssignment],
    ) -> Result<Uuid> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r"
            INSERT INTO meal_plans (
                id, user_id, week_start_date, dietary_preference,
                weekly_budget, total_estimated_cost, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(plan.id.to_string())
        .bind(&plan.user_id)
        .bind(plan.week_start_date)
        .bind(plan.dietary_preference.as_str())
        .bind(plan.weekly_budget.to_string())
        .bind(plan.total_estimated_cost.to_string())
        .bind(plan.created_at)
        .execute(&mut *tx)
        .await?;

        for assignment in assignments {
            sqlx::query(
                r"
                INSERT INTO meal_plan_recipes (
                    id, meal_plan_id, recipe_id, day_of_week, meal_type, created_at
                ) VALUES ($1, $2, $3, $4, $5, $6)
                ",
            )
            .bind(assignment.id.to_string())
            .bind(assignment.meal_plan_id.to_string())
            .bind(assignment.recipe_id.to_string())
            .bind(i64::from(assignment.day_of_week))
            .bind(assignment.meal_type.as_str())
            .bind(assignment.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(plan.id)
    }

    /// Get a meal plan by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get_meal_plan(&self, meal_plan_id: Uuid) -> Result<Option<MealPlan>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, week_start_date, dietary_preference,
                   weekly_budget, total_estimated_cost, created_at
            FROM meal_plans
            WHERE id = $1
            ",
        )
        .bind(meal_plan_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(meal_plan_from_row).transpose()
    }

    /// Get all slot assignments of a meal plan
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn get_meal_plan_assignments(
        &self,
        meal_plan_id: Uuid,
    ) -> Result<Vec<MealAssignment>> {
        let rows = sqlx::query(
            r"
            SELECT id, meal_plan_id, recipe_id, day_of_week, meal_type, created_at
            FROM meal_plan_recipes
            WHERE meal_plan_id = $1
            ORDER BY day_of_week ASC, created_at ASC
            ",
        )
        .bind(meal_plan_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(assignment_from_row).collect()
    }

    /// Get all meal plans of a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn get_user_meal_plans(&self, user_id: &str) -> Result<Vec<MealPlan>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, week_start_date, dietary_preference,
                   weekly_budget, total_estimated_cost, created_at
            FROM meal_plans
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(meal_plan_from_row).collect()
    }
}

fn meal_plan_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<MealPlan> {
    let id: String = row.try_get("id")?;
    let preference: String = row.try_get("dietary_preference")?;
    let weekly_budget: String = row.try_get("weekly_budget")?;
    let total_estimated_cost: String = row.try_get("total_estimated_cost")?;
    let week_start_date: NaiveDate = row.try_get("week_start_date")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(MealPlan {
        id: parse_uuid(&id, "meal_plans.id")?,
        user_id: row.try_get("user_id")?,
        week_start_date,
        dietary_preference: preference.parse()?,
        weekly_budget: parse_decimal(&weekly_budget, "meal_plans.weekly_budget")?,
        total_estimated_cost: parse_decimal(
            &total_estimated_cost,
            "meal_plans.total_estimated_cost",
        )?,
        created_at,
    })
}

fn assignment_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<MealAssignment> {
    let id: String = row.try_get("id")?;
    let meal_plan_id: String = row.try_get("meal_plan_id")?;
    let recipe_id: String = row.try_get("recipe_id")?;
    let day_of_week: i64 = row.try_get("day_of_week")?;
    let meal_type: String = row.try_get("meal_type")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(MealAssignment {
        id: parse_uuid(&id, "meal_plan_recipes.id")?,
        meal_plan_id: parse_uuid(&meal_plan_id, "meal_plan_recipes.meal_plan_id")?,
        recipe_id: parse_uuid(&recipe_id, "meal_plan_recipes.recipe_id")?,
        day_of_week: parse_day_of_week(day_of_week)?,
        meal_type: meal_type.parse()?,
        created_at,
    })
}
