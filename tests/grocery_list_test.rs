// ABOUTME: Integration tests for grocery list generation
// ABOUTME: Consolidation arithmetic over stored plans and edge cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use std::collections::HashMap;

use anyhow::Result;
use chrono::NaiveDate;
use common::{create_test_managers, dec, seed_ingredient, seed_recipe, seed_recipe_with_lines};
use mise_meal_planner::database_plugins::DatabaseProvider;
use mise_meal_planner::models::{
    DietaryPreference, GroceryListItem, MealAssignment, MealPlan, MealType, NewMealPlan,
};
use uuid::Uuid;

#[tokio::test]
async fn test_consolidation_arithmetic_over_a_stored_plan() -> Result<()> {
    let (database, catalog, planner) = create_test_managers().await?;

    let flour = seed_ingredient(&catalog, "Flour", "cups", "2.50").await?;
    let sugar = seed_ingredient(&catalog, "Sugar", "cups", "1.75").await?;
    let eggs = seed_ingredient(&catalog, "Eggs", "pieces", "0.25").await?;

    let pancakes = seed_recipe_with_lines(
        &catalog,
        "Pancakes",
        DietaryPreference::Vegetarian,
        "3.00",
        vec![(&flour, "2"), (&sugar, "0.25"), (&eggs, "2")],
    )
    .await?;
    let cookies = seed_recipe_with_lines(
        &catalog,
        "Cookies",
        DietaryPreference::Vegetarian,
        "2.00",
        vec![(&flour, "1.5"), (&sugar, "0.75")],
    )
    .await?;

    // Store a plan that assigns each recipe exactly once
    let plan = MealPlan::new(
        "user-7".to_string(),
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        DietaryPreference::Vegetarian,
        dec("30"),
        dec("5.00"),
    );
    let assignments = vec![
        MealAssignment::new(plan.id, pancakes.id, 0, MealType::Breakfast),
        MealAssignment::new(plan.id, cookies.id, 0, MealType::Lunch),
    ];
    database.create_meal_plan(&plan, &assignments).await?;

    let grocery_list = planner.generate_grocery_list(plan.id).await?;
    assert_eq!(grocery_list.len(), 3);

    let by_name: HashMap<&str, &GroceryListItem> = grocery_list
        .iter()
        .map(|item| (item.ingredient_name.as_str(), item))
        .collect();

    let flour_item = by_name["Flour"];
    assert_eq!(flour_item.total_quantity, dec("3.5"));
    assert_eq!(flour_item.estimated_total_cost, dec("8.75"));
    assert_eq!(flour_item.unit, "cups");

    let sugar_item = by_name["Sugar"];
    assert_eq!(sugar_item.total_quantity, dec("1.00"));
    assert_eq!(sugar_item.estimated_total_cost, dec("1.75"));

    let eggs_item = by_name["Eggs"];
    assert_eq!(eggs_item.total_quantity, dec("2"));
    assert_eq!(eggs_item.estimated_total_cost, dec("0.50"));

    Ok(())
}

#[tokio::test]
async fn test_full_week_aggregates_repeat_occurrences() -> Result<()> {
    let (_database, catalog, planner) = create_test_managers().await?;

    let rice = seed_ingredient(&catalog, "Rice", "cups", "0.80").await?;
    seed_recipe_with_lines(
        &catalog,
        "Rice Bowl",
        DietaryPreference::Vegan,
        "1.00",
        vec![(&rice, "0.5")],
    )
    .await?;

    // A single candidate occupies all 21 slots
    let view = planner
        .create_meal_plan(NewMealPlan {
            user_id: "user-7".to_string(),
            week_start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            dietary_preference: DietaryPreference::Vegan,
            weekly_budget: dec("42"),
        })
        .await?;

    assert_eq!(view.grocery_list.len(), 1);
    assert_eq!(view.grocery_list[0].total_quantity, dec("10.5"));
    assert_eq!(view.grocery_list[0].estimated_total_cost, dec("8.40"));

    // generate_grocery_list over the stored plan agrees with the creation view
    let regenerated = planner.generate_grocery_list(view.meal_plan.id).await?;
    assert_eq!(regenerated, view.grocery_list);

    Ok(())
}

#[tokio::test]
async fn test_no_duplicate_ingredients_in_grocery_list() -> Result<()> {
    let (_database, catalog, planner) = create_test_managers().await?;

    let beans = seed_ingredient(&catalog, "Beans", "grams", "0.02").await?;
    let rice = seed_ingredient(&catalog, "Rice", "cups", "0.80").await?;

    seed_recipe_with_lines(
        &catalog,
        "Beans and Rice",
        DietaryPreference::Vegan,
        "1.20",
        vec![(&beans, "100"), (&rice, "0.5")],
    )
    .await?;
    seed_recipe_with_lines(
        &catalog,
        "Bean Salad",
        DietaryPreference::Vegan,
        "1.40",
        vec![(&beans, "150")],
    )
    .await?;

    let view = planner
        .create_meal_plan(NewMealPlan {
            user_id: "user-9".to_string(),
            week_start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            dietary_preference: DietaryPreference::Vegan,
            weekly_budget: dec("63"),
        })
        .await?;

    let ids: Vec<Uuid> = view
        .grocery_list
        .iter()
        .map(|item| item.ingredient_id)
        .collect();
    let unique: std::collections::HashSet<Uuid> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());

    Ok(())
}

#[tokio::test]
async fn test_missing_plan_yields_empty_grocery_list() -> Result<()> {
    let (_database, _catalog, planner) = create_test_managers().await?;

    let grocery_list = planner.generate_grocery_list(Uuid::new_v4()).await?;
    assert!(grocery_list.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_recipes_without_lines_yield_empty_grocery_list() -> Result<()> {
    let (_database, catalog, planner) = create_test_managers().await?;

    seed_recipe(&catalog, "Mystery Meal", DietaryPreference::Vegan, "1.00").await?;

    let view = planner
        .create_meal_plan(NewMealPlan {
            user_id: "user-11".to_string(),
            week_start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            dietary_preference: DietaryPreference::Vegan,
            weekly_budget: dec("42"),
        })
        .await?;

    assert!(view.grocery_list.is_empty());
    let regenerated = planner.generate_grocery_list(view.meal_plan.id).await?;
    assert!(regenerated.is_empty());

    Ok(())
}
