//! Parent companion app for a childcare center: the active child's day,
//! learning records, meals and leave requests, over an in-memory store.

pub mod backend;
pub mod config;
pub mod ui;
