//! Entry points used by the presentation layer.
//!
//! [`resolver`] finds the brand every call is scoped to, [`actions`] holds the
//! mutations (each returning an [`ActionResult`](brandkit_models::domain::prelude::ActionResult)),
//! and [`queries`] / [`dashboard`] hold the fail-soft reads.

pub mod actions;
pub mod dashboard;
pub mod queries;
pub mod resolver;

pub use resolver::BrandResolver;
