// ABOUTME: Integration tests for the catalog manager
// ABOUTME: Ingredient/recipe creation, preference filtering, and integrity checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use anyhow::Result;
use common::{create_test_catalog, dec, seed_ingredient, seed_recipe, seed_recipe_with_lines};
use mise_meal_planner::models::{DietaryPreference, NewRecipe, NewRecipeIngredient};
use uuid::Uuid;

#[tokio::test]
async fn test_create_and_list_ingredients() -> Result<()> {
    let (_database, catalog) = create_test_catalog().await?;

    let flour = seed_ingredient(&catalog, "Flour", "cups", "2.50").await?;
    let eggs = seed_ingredient(&catalog, "Eggs", "pieces", "0.25").await?;

    let ingredients = catalog.get_ingredients().await?;
    assert_eq!(ingredients.len(), 2);

    let stored_flour = ingredients.iter().find(|i| i.id == flour.id).unwrap();
    assert_eq!(stored_flour.name, "Flour");
    assert_eq!(stored_flour.unit, "cups");
    // Decimal fidelity through TEXT storage
    assert_eq!(stored_flour.price_per_unit, dec("2.50"));

    let stored_eggs = ingredients.iter().find(|i| i.id == eggs.id).unwrap();
    assert_eq!(stored_eggs.price_per_unit, dec("0.25"));

    Ok(())
}

#[tokio::test]
async fn test_create_recipe_with_ingredient_lines() -> Result<()> {
    let (_database, catalog) = create_test_catalog().await?;

    let flour = seed_ingredient(&catalog, "Flour", "cups", "2.50").await?;
    let sugar = seed_ingredient(&catalog, "Sugar", "cups", "1.75").await?;

    let pancakes = seed_recipe_with_lines(
        &catalog,
        "Pancakes",
        DietaryPreference::Vegetarian,
        "3.00",
        vec![(&flour, "2"), (&sugar, "0.25")],
    )
    .await?;

    let lines = catalog.get_recipe_ingredients(pancakes.id).await?;
    assert_eq!(lines.len(), 2);
    assert!(lines
        .iter()
        .any(|l| l.ingredient_id == flour.id && l.quantity == dec("2")));
    assert!(lines
        .iter()
        .any(|l| l.ingredient_id == sugar.id && l.quantity == dec("0.25")));

    let recipes = catalog.get_recipes(None).await?;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].estimated_cost, dec("3.00"));

    Ok(())
}

#[tokio::test]
async fn test_get_recipes_filters_by_preference() -> Result<()> {
    let (_database, catalog) = create_test_catalog().await?;

    seed_recipe(&catalog, "Tofu Bowl", DietaryPreference::Vegan, "2.00").await?;
    seed_recipe(&catalog, "Cheese Toast", DietaryPreference::Vegetarian, "1.50").await?;

    let vegan = catalog
        .get_recipes(Some(DietaryPreference::Vegan))
        .await?;
    assert_eq!(vegan.len(), 1);
    assert_eq!(vegan[0].name, "Tofu Bowl");

    let all = catalog.get_recipes(None).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_unknown_ingredient_fails_and_writes_nothing() -> Result<()> {
    let (_database, catalog) = create_test_catalog().await?;

    let flour = seed_ingredient(&catalog, "Flour", "cups", "2.50").await?;
    let missing_id = Uuid::new_v4();

    let err = catalog
        .create_recipe(NewRecipe {
            name: "Phantom Cake".to_string(),
            description: None,
            dietary_preference: DietaryPreference::Vegan,
            estimated_cost: dec("4.00"),
            servings: 4,
            prep_time_minutes: 45,
            instructions: "Bake at 180C.".to_string(),
            ingredients: vec![
                NewRecipeIngredient {
                    ingredient_id: flour.id,
                    quantity: dec("1.5"),
                },
                NewRecipeIngredient {
                    ingredient_id: missing_id,
                    quantity: dec("3"),
                },
            ],
        })
        .await
        .unwrap_err();

    assert!(err.is_unknown_ingredient());

    // Hard error, not a partial write: no recipe and no line rows remain
    let recipes = catalog.get_recipes(None).await?;
    assert!(recipes.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_recipe_description_is_optional() -> Result<()> {
    let (_database, catalog) = create_test_catalog().await?;

    let recipe = catalog
        .create_recipe(NewRecipe {
            name: "Plain Oats".to_string(),
            description: Some("Weekday breakfast staple".to_string()),
            dietary_preference: DietaryPreference::Vegan,
            estimated_cost: dec("0.80"),
            servings: 1,
            prep_time_minutes: 5,
            instructions: "Soak overnight.".to_string(),
            ingredients: vec![],
        })
        .await?;

    let stored = catalog.get_recipes(None).await?;
    assert_eq!(stored[0].description.as_deref(), Some("Weekday breakfast staple"));
    assert_eq!(stored[0].id, recipe.id);

    Ok(())
}
