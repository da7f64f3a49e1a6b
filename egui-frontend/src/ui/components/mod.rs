//! # UI Components Module
//!
//! This module organizes all UI components for the childcare companion.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `data_loading` - Backend calls and the cached screen data
//! - `styling` - Global egui style and drawing helpers
//! - `theme` - Color palette and status tones
//! - `header` - Home header with the child picker
//! - `bottom_nav` - 首页 / 学情 / 我的 navigation bar
//! - `tab_manager` - Routes the central panel to the current view
//! - `screens` - One module per screen
//! - `modals` - Image preview and leave confirmation overlays
//! - `ui_components` - Reusable widgets (cards, chips, tabs, placeholders)

pub mod bottom_nav;
pub mod data_loading;
pub mod header;
pub mod modals;
pub mod screens;
pub mod styling;
pub mod tab_manager;
pub mod theme;
pub mod ui_components;

pub use bottom_nav::BOTTOM_NAV_HEIGHT;
pub use styling::{draw_card_container, draw_page_background, setup_companion_style};
pub use theme::*;
