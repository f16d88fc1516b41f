// ABOUTME: Plan-shape constants shared across the meal planning engine
// ABOUTME: Week geometry and candidate selection parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

/// Weekly plan geometry
pub mod plan {
    /// Days covered by a single meal plan (day_of_week 0..=6)
    pub const DAYS_PER_WEEK: u8 = 7;

    /// Meal slots per day (breakfast, lunch, dinner)
    pub const MEALS_PER_DAY: u8 = 3;

    /// Total meal slots in a weekly plan
    pub const SLOTS_PER_WEEK: usize = (DAYS_PER_WEEK as usize) * (MEALS_PER_DAY as usize);

    /// Multiplier applied to the per-meal budget when admitting candidate
    /// recipes. Not a hard per-meal ceiling: a recipe passing this filter is
    /// eligible for every slot.
    pub const BUDGET_SLACK_FACTOR: u8 = 2;
}
