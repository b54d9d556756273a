//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `availability` - Slot template, time reference and the open-slot resolution

pub mod availability;
pub mod foundation;
