//! Domain models for the childcare companion.
//!
//! These carry typed dates and times (`chrono`) and are converted to the
//! string-based DTOs of the `shared` crate before reaching the UI.

pub mod attendance;
pub mod child;
pub mod homework;
pub mod leave_request;
pub mod mistake;
pub mod notice;
pub mod recipe;
pub mod review;
