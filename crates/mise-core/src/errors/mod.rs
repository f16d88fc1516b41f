// ABOUTME: Domain error types for the Mise meal planning engine
// ABOUTME: Re-exports PlanError, CatalogError, and ModelError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

//! # Error Types
//!
//! Domain-specific error types:
//! - [`PlanError`] - candidate selection failures during plan assembly
//! - [`CatalogError`] - catalog integrity violations on record creation
//! - [`ModelError`] - invalid stored representations of closed enums
//!
//! Every failure carries a distinguishable kind so callers can present a
//! specific message ("no vegan recipes exist" vs. "vegan recipes exist but
//! none fit your budget"). Lookups that find nothing are not errors; they
//! return absent values.

mod catalog;
mod model;
mod plan;

pub use catalog::CatalogError;
pub use model::ModelError;
pub use plan::PlanError;
