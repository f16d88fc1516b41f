// ABOUTME: Errors for invalid stored representations of closed domain enums
// ABOUTME: Raised when database text does not parse into a model type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

/// Errors raised when a stored representation does not map back onto a
/// domain type. These indicate corrupt or foreign data, not caller mistakes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Stored dietary preference label is not part of the closed set
    #[error("invalid dietary preference: {value}")]
    InvalidDietaryPreference {
        /// The offending label
        value: String,
    },

    /// Stored meal type label is not part of the closed set
    #[error("invalid meal type: {value}")]
    InvalidMealType {
        /// The offending label
        value: String,
    },

    /// Stored day-of-week is outside 0..=6
    #[error("invalid day of week: {value}")]
    InvalidDayOfWeek {
        /// The offending value
        value: i64,
    },
}

impl ModelError {
    /// Create an "invalid dietary preference" error
    #[must_use]
    pub fn invalid_dietary_preference(value: impl Into<String>) -> Self {
        Self::InvalidDietaryPreference {
            value: value.into(),
        }
    }

    /// Create an "invalid meal type" error
    #[must_use]
    pub fn invalid_meal_type(value: impl Into<String>) -> Self {
        Self::InvalidMealType {
            value: value.into(),
        }
    }

    /// Create an "invalid day of week" error
    #[must_use]
    pub const fn invalid_day_of_week(value: i64) -> Self {
        Self::InvalidDayOfWeek { value }
    }
}
