// ABOUTME: Dietary preference enumeration attached to recipes and meal plans
// ABOUTME: Closed two-value set with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Dietary preference shared by recipes and meal plans.
///
/// A plan only admits recipes carrying the same value. The set is closed:
/// there is no catch-all variant, and parsing an unknown label is an error
/// rather than a silent fallback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    /// No animal products
    Vegan,
    /// No meat, animal by-products allowed
    Vegetarian,
}

impl DietaryPreference {
    /// Get string representation for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
        }
    }
}

impl FromStr for DietaryPreference {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vegan" => Ok(Self::Vegan),
            "vegetarian" => Ok(Self::Vegetarian),
            _ => Err(ModelError::invalid_dietary_preference(s)),
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
