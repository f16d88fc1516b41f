// ABOUTME: Grocery list consolidation across a plan's slot assignments
// ABOUTME: Aggregates ingredient quantities and prices them per ingredient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use mise_core::models::{GroceryListItem, Ingredient, MealAssignment, RecipeIngredientLine};
use rust_decimal::Decimal;
use tracing::warn;
use uuid::Uuid;

/// Recipe/ingredient lookup index materialized once per consolidation pass.
///
/// Built from one bulk catalog read and then only read; consolidation never
/// goes back to storage per assignment.
#[derive(Debug, Default)]
pub struct ConsolidationIndex {
    lines_by_recipe: HashMap<Uuid, Vec<RecipeIngredientLine>>,
    ingredients_by_id: HashMap<Uuid, Ingredient>,
}

impl ConsolidationIndex {
    /// Build the index from ingredient lines and their referenced ingredients
    #[must_use]
    pub fn new(lines: Vec<RecipeIngredientLine>, ingredients: Vec<Ingredient>) -> Self {
        let mut lines_by_recipe: HashMap<Uuid, Vec<RecipeIngredientLine>> = HashMap::new();
        for line in lines {
            lines_by_recipe.entry(line.recipe_id).or_default().push(line);
        }

        let ingredients_by_id = ingredients
            .into_iter()
            .map(|ingredient| (ingredient.id, ingredient))
            .collect();

        Self {
            lines_by_recipe,
            ingredients_by_id,
        }
    }

    /// Ingredient lines of one recipe; empty when the recipe has none
    #[must_use]
    pub fn lines_for(&self, recipe_id: Uuid) -> &[RecipeIngredientLine] {
        self.lines_by_recipe
            .get(&recipe_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Look up an ingredient by id
    #[must_use]
    pub fn ingredient(&self, ingredient_id: Uuid) -> Option<&Ingredient> {
        self.ingredients_by_id.get(&ingredient_id)
    }
}

/// Consolidate a plan's assignments into a priced shopping list.
///
/// Every assignment expands into its recipe's ingredient lines; a recipe
/// occupying several slots contributes once per slot. Quantities are summed
/// per ingredient with decimal arithmetic, and each ingredient is priced
/// once: aggregated quantity x price per unit.
///
/// Each ingredient appears exactly once, in first-seen order. An empty
/// assignment list yields an empty grocery list.
#[must_use]
pub fn consolidate(
    assignments: &[MealAssignment],
    index: &ConsolidationIndex,
) -> Vec<GroceryListItem> {
    let mut seen_order: Vec<Uuid> = Vec::new();
    let mut totals: HashMap<Uuid, Decimal> = HashMap::new();

    for assignment in assignments {
        for line in index.lines_for(assignment.recipe_id) {
            match totals.entry(line.ingredient_id) {
                Entry::Occupied(mut entry) => *entry.get_mut() += line.quantity,
                Entry::Vacant(entry) => {
                    entry.insert(line.quantity);
                    seen_order.push(line.ingredient_id);
                }
            }
        }
    }

    seen_order
        .into_iter()
        .filter_map(|ingredient_id| {
            let Some(ingredient) = index.ingredient(ingredient_id) else {
                // A line referencing an ingredient the index does not carry
                // means the caller built the index from an incomplete read
                warn!(
                    ingredient_id = %ingredient_id,
                    "skipping grocery item: ingredient missing from consolidation index"
                );
                return None;
            };

            let total_quantity = totals[&ingredient_id];
            Some(GroceryListItem {
                ingredient_id,
                ingredient_name: ingredient.name.clone(),
                unit: ingredient.unit.clone(),
                total_quantity,
                estimated_total_cost: total_quantity * ingredient.price_per_unit,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mise_core::models::{DietaryPreference, MealType, Recipe};

    fn ingredient(name: &str, unit: &str, price: &str) -> Ingredient {
        Ingredient::new(name.to_string(), unit.to_string(), price.parse().unwrap())
    }

    fn recipe(name: &str) -> Recipe {
        Recipe::new(
            name.to_string(),
            None,
            DietaryPreference::Vegan,
            "3.00".parse().unwrap(),
            2,
            20,
            "Mix well.".to_string(),
        )
    }

    fn line(recipe: &Recipe, ingredient: &Ingredient, quantity: &str) -> RecipeIngredientLine {
        RecipeIngredientLine::new(recipe.id, ingredient.id, quantity.parse().unwrap())
    }

    fn assignment(plan_id: Uuid, recipe: &Recipe, day: u8, meal_type: MealType) -> MealAssignment {
        MealAssignment::new(plan_id, recipe.id, day, meal_type)
    }

    #[test]
    fn test_consolidates_across_recipes_with_exact_arithmetic() {
        let flour = ingredient("Flour", "cups", "2.50");
        let sugar = ingredient("Sugar", "cups", "1.75");
        let eggs = ingredient("Eggs", "pieces", "0.25");

        let pancakes = recipe("Pancakes");
        let cookies = recipe("Cookies");

        let lines = vec![
            line(&pancakes, &flour, "2"),
            line(&pancakes, &sugar, "0.25"),
            line(&pancakes, &eggs, "2"),
            line(&cookies, &flour, "1.5"),
            line(&cookies, &sugar, "0.75"),
        ];
        let index = ConsolidationIndex::new(
            lines,
            vec![flour.clone(), sugar.clone(), eggs.clone()],
        );

        let plan_id = Uuid::new_v4();
        let assignments = vec![
            assignment(plan_id, &pancakes, 0, MealType::Breakfast),
            assignment(plan_id, &cookies, 0, MealType::Lunch),
        ];

        let grocery_list = consolidate(&assignments, &index);
        assert_eq!(grocery_list.len(), 3);

        let by_name: HashMap<&str, &GroceryListItem> = grocery_list
            .iter()
            .map(|item| (item.ingredient_name.as_str(), item))
            .collect();

        let flour_item = by_name["Flour"];
        assert_eq!(flour_item.total_quantity, "3.5".parse::<Decimal>().unwrap());
        assert_eq!(
            flour_item.estimated_total_cost,
            "8.75".parse::<Decimal>().unwrap()
        );

        let sugar_item = by_name["Sugar"];
        assert_eq!(sugar_item.total_quantity, "1.00".parse::<Decimal>().unwrap());
        assert_eq!(
            sugar_item.estimated_total_cost,
            "1.75".parse::<Decimal>().unwrap()
        );

        let eggs_item = by_name["Eggs"];
        assert_eq!(eggs_item.total_quantity, "2".parse::<Decimal>().unwrap());
        assert_eq!(
            eggs_item.estimated_total_cost,
            "0.50".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_repeated_recipe_contributes_per_occurrence() {
        let rice = ingredient("Rice", "cups", "0.80");
        let bowl = recipe("Rice Bowl");
        let index = ConsolidationIndex::new(
            vec![line(&bowl, &rice, "0.5")],
            vec![rice.clone()],
        );

        let plan_id = Uuid::new_v4();
        let assignments = vec![
            assignment(plan_id, &bowl, 0, MealType::Breakfast),
            assignment(plan_id, &bowl, 0, MealType::Lunch),
            assignment(plan_id, &bowl, 1, MealType::Dinner),
        ];

        let grocery_list = consolidate(&assignments, &index);
        assert_eq!(grocery_list.len(), 1);
        assert_eq!(
            grocery_list[0].total_quantity,
            "1.5".parse::<Decimal>().unwrap()
        );
        assert_eq!(
            grocery_list[0].estimated_total_cost,
            "1.20".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_no_duplicate_ingredient_entries() {
        let salt = ingredient("Salt", "grams", "0.01");
        let soup = recipe("Soup");
        let stew = recipe("Stew");
        let index = ConsolidationIndex::new(
            vec![line(&soup, &salt, "5"), line(&stew, &salt, "3")],
            vec![salt.clone()],
        );

        let plan_id = Uuid::new_v4();
        let assignments = vec![
            assignment(plan_id, &soup, 2, MealType::Dinner),
            assignment(plan_id, &stew, 3, MealType::Dinner),
        ];

        let grocery_list = consolidate(&assignments, &index);
        let ids: Vec<Uuid> = grocery_list.iter().map(|i| i.ingredient_id).collect();
        let unique: std::collections::HashSet<Uuid> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(grocery_list.len(), 1);
    }

    #[test]
    fn test_empty_assignments_yield_empty_list() {
        let index = ConsolidationIndex::default();
        assert!(consolidate(&[], &index).is_empty());
    }
}
