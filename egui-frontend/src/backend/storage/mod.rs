//! # Storage Module
//!
//! Data access for the companion app. The domain layer depends only on the
//! traits in [`traits`]; [`memory`] provides the in-process mock store that
//! serves every screen.

pub mod memory;
pub mod traits;

pub use memory::{MemoryConnection, SeedData, SeedError};
pub use traits::*;
