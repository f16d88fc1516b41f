// ABOUTME: Meal plan assembly algorithms: selection, assignment, consolidation
// ABOUTME: Pure decision logic over catalog data, no storage access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

//! # Planning Algorithms
//!
//! The decision core of the engine. Every function here is pure: it takes
//! catalog data already fetched by a service manager and returns derived
//! values, with no storage access and no shared mutable state. Identical
//! inputs always produce identical outputs.
//!
//! - [`selector`]: filters and orders recipes eligible for a
//!   preference/budget pair
//! - [`assembler`]: fills the 21 weekly slots round-robin from the ordered
//!   candidates
//! - [`grocery`]: consolidates assignments into a priced shopping list
//! - [`reconstruct`]: rebuilds the full plan view from persisted assignments

pub mod assembler;
pub mod grocery;
pub mod reconstruct;
pub mod selector;

pub use assembler::{assemble, WeeklyAssembly};
pub use grocery::{consolidate, ConsolidationIndex};
pub use reconstruct::rebuild_view;
pub use selector::select_candidates;
