#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Temporal and categorical insight aggregation.
//!
//! Each statistic is an independent counting fold over the record set,
//! keyed by hour, weekday, month, category, or area. Nothing here depends
//! on record order except tie-breaking among equally ranked categories and
//! areas, which keeps first-seen order.

pub mod insights;

pub use insights::{PREDICTED_PEAK_HOURS, generate_insights, generate_insights_at};
