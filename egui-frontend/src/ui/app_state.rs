//! # App State Module
//!
//! The central application struct and its initialization.
//!
//! ## Key Types:
//! - `CompanionApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize the app inside an eframe window
//! - `with_backend()` - Initialize without a window (tests, headless rendering)
//!
//! ## State Management:
//! State is split by concern into the `state` submodules. Components are
//! `impl CompanionApp` blocks that read and mutate these parts directly.

use log::info;
use shared::Child;

use crate::backend::Backend;
use crate::config::AppConfig;
use crate::ui::state::{
    CoreAppState, LeaveFormState, LearningTab, ModalState, UIState, ViewState,
};

/// Main application struct for the egui childcare companion
pub struct CompanionApp {
    pub core: CoreAppState,
    pub ui: UIState,
    pub view: ViewState,
    pub modal: ModalState,
    pub leave_form: LeaveFormState,
    pub learning_tab: LearningTab,
}

impl CompanionApp {
    /// Create the app for an eframe window
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        backend: Backend,
        config: AppConfig,
    ) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing CompanionApp");

        crate::ui::setup_custom_fonts(&cc.egui_ctx, config.cjk_font_path.as_deref());

        let mut app = Self::with_backend(backend, config);
        app.load_initial_data();
        Ok(app)
    }

    /// Create the app state without a window. Data is loaded on the first
    /// frame.
    pub fn with_backend(backend: Backend, config: AppConfig) -> Self {
        let core = CoreAppState::new(backend, config);
        let leave_form = LeaveFormState::new(core.today);

        Self {
            core,
            ui: UIState::new(),
            view: ViewState::new(),
            modal: ModalState::new(),
            leave_form,
            learning_tab: LearningTab::default(),
        }
    }

    pub fn backend(&self) -> &Backend {
        &self.core.backend
    }

    pub fn current_child(&self) -> &Option<Child> {
        &self.core.current_child
    }
}
