//! UI state, split by concern. `CompanionApp` owns one of each.

pub mod app_state;
pub mod form_state;
pub mod modal_state;
pub mod ui_state;
pub mod view_state;

pub use app_state::{CoreAppState, ScreenData};
pub use form_state::{LeaveFormState, LeaveTab, LearningTab, SUCCESS_OVERLAY_SECS};
pub use modal_state::{ImagePreviewState, ModalState};
pub use ui_state::UIState;
pub use view_state::{View, ViewState};
