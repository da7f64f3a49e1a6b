//! # Data Loading Module
//!
//! The bridge between the screens and the backend services.
//!
//! ## Key Functions:
//! - `load_initial_data()` - Children, active child and its data on startup
//! - `load_child_data()` - Refresh every screen's data for the active child
//! - `load_leave_requests()` - Refresh leave history after a submission
//! - `switch_child()` - Change the active child everywhere
//! - `submit_leave_request()` - Send the leave form to the backend
//!
//! ## Data Flow:
//! 1. UI triggers a load (startup, child switch, submission)
//! 2. The backend service answers with domain models
//! 3. Models are mapped to DTOs and stored in `core.data`
//! 4. Failures become the error line; the screens fall back to empty states

use log::{info, warn};

use crate::backend::domain::commands::child::SetActiveChildCommand;
use crate::backend::domain::commands::leave::SubmitLeaveRequestCommand;
use crate::backend::domain::models::leave_request::LeaveValidationError;
use crate::ui::app_state::CompanionApp;
use crate::ui::mappers::*;
use crate::ui::state::ScreenData;

impl CompanionApp {
    /// Load initial data
    pub fn load_initial_data(&mut self) {
        info!("📊 Loading initial data");

        match self.backend().child_service.list_children() {
            Ok(result) => {
                self.core.children = result.children.into_iter().map(to_dto).collect();
            }
            Err(e) => self.ui.set_error(format!("加载孩子列表失败: {}", e)),
        }

        match self.backend().child_service.get_active_child() {
            Ok(response) => {
                if let Some(child) = response.active_child.child {
                    self.view.set_active_child(&child.id);
                    self.core.current_child = Some(to_dto(child));
                }
            }
            Err(e) => self.ui.set_error(format!("加载当前孩子失败: {}", e)),
        }

        self.load_child_data();
        self.ui.loading = false;
    }

    /// Reload everything the screens show for the active child
    pub fn load_child_data(&mut self) {
        let today = self.core.today;
        let mut data = ScreenData::default();

        match self.backend().notice_service.list_notices() {
            Ok(notices) => data.notices = notices.into_iter().map(notice_to_dto).collect(),
            Err(e) => self.ui.set_error(format!("加载机构动态失败: {}", e)),
        }

        match self.backend().recipe_service.get_recipe_of_the_day(today) {
            Ok(recipe) => data.recipe = recipe.map(recipe_to_dto),
            Err(e) => self.ui.set_error(format!("加载食谱失败: {}", e)),
        }

        let Some(child_id) = self.view.active_child_id().map(str::to_string) else {
            warn!("⚠️ No active child, screens will show empty states");
            self.core.data = data;
            return;
        };

        info!("📊 Loading data for child {} on {}", child_id, today);

        let result = self.fetch_child_data(&child_id, today, &mut data);

        if let Err(e) = result {
            self.ui.set_error(format!("加载数据失败: {}", e));
        }
        self.core.data = data;
    }

    fn fetch_child_data(
        &self,
        child_id: &str,
        today: chrono::NaiveDate,
        data: &mut ScreenData,
    ) -> anyhow::Result<()> {
        let backend = self.backend();

        data.summary = Some(daily_summary_to_dto(
            backend.daily_summary_service.get_daily_summary(child_id, today)?,
        ));
        data.homeworks = backend
            .learning_service
            .list_homeworks(child_id)?
            .into_iter()
            .map(homework_to_dto)
            .collect();
        data.reviews = backend
            .learning_service
            .list_reviews(child_id)?
            .into_iter()
            .map(review_to_dto)
            .collect();
        data.mistakes = backend
            .learning_service
            .list_mistakes(child_id)?
            .into_iter()
            .map(mistake_to_dto)
            .collect();
        data.leave_requests = backend
            .leave_service
            .list_leave_requests(child_id)?
            .leave_requests
            .into_iter()
            .map(leave_request_to_dto)
            .collect();
        Ok(())
    }

    pub fn load_leave_requests(&mut self) {
        let Some(child_id) = self.view.active_child_id().map(str::to_string) else {
            return;
        };

        match self.backend().leave_service.list_leave_requests(&child_id) {
            Ok(result) => {
                self.core.data.leave_requests = result
                    .leave_requests
                    .into_iter()
                    .map(leave_request_to_dto)
                    .collect();
            }
            Err(e) => self.ui.set_error(format!("加载请假记录失败: {}", e)),
        }
    }

    /// Make `child_id` the active child for the backend and every screen.
    /// The visible screen stays where it is.
    pub fn switch_child(&mut self, child_id: &str) {
        if self.view.active_child_id() == Some(child_id) {
            return;
        }

        let command = SetActiveChildCommand {
            child_id: child_id.to_string(),
        };
        match self.backend().child_service.set_active_child(command) {
            Ok(result) => {
                self.view.set_active_child(&result.child.id);
                self.core.current_child = Some(to_dto(result.child));
                self.leave_form.error = None;
                self.ui.clear_messages();
                self.load_child_data();
            }
            Err(e) => self.ui.set_error(format!("切换孩子失败: {}", e)),
        }
    }

    /// Submit the leave form. `now` is the egui input time, used to time the
    /// confirmation overlay.
    pub fn submit_leave_request(&mut self, now: f64) {
        if !self.leave_form.can_submit() {
            return;
        }
        let Some(child_id) = self.view.active_child_id().map(str::to_string) else {
            self.leave_form.error = Some("请先选择孩子".to_string());
            return;
        };

        let command = SubmitLeaveRequestCommand {
            child_id,
            date: self.leave_form.date,
            leave_type: self.leave_form.leave_type,
            reason: self.leave_form.reason.clone(),
        };

        match self.backend().leave_service.submit_leave_request(command) {
            Ok(_) => {
                self.leave_form.show_success(now);
                self.load_leave_requests();
            }
            Err(e) => {
                let message = match e.downcast_ref::<LeaveValidationError>() {
                    Some(LeaveValidationError::EmptyReason) => "请填写请假原因".to_string(),
                    Some(LeaveValidationError::ReasonTooLong) => "请假原因过长".to_string(),
                    Some(LeaveValidationError::UnknownChild(_)) => "未找到该学生".to_string(),
                    None => format!("提交失败: {}", e),
                };
                warn!("❌ Leave request rejected: {}", e);
                self.leave_form.error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::Backend;
    use crate::config::AppConfig;
    use crate::ui::app_state::CompanionApp;
    use crate::ui::state::{LeaveTab, View};

    fn create_test_app() -> CompanionApp {
        let config = AppConfig::default();
        let backend = Backend::new(config.reference_date).unwrap();
        let mut app = CompanionApp::with_backend(backend, config);
        app.load_initial_data();
        app
    }

    #[test]
    fn test_initial_data_for_first_child() {
        let app = create_test_app();

        assert!(!app.ui.loading);
        assert_eq!(app.core.children.len(), 2);
        assert_eq!(app.current_child().as_ref().unwrap().name, "大宝");
        assert_eq!(app.core.data.homeworks.len(), 3);
        assert!(app.core.data.recipe.is_some());
        assert_eq!(app.core.data.notices.len(), 1);
        assert!(app.core.data.leave_requests.is_empty());
    }

    #[test]
    fn test_switch_child_keeps_screen_and_reloads() {
        let mut app = create_test_app();
        app.view.navigate(View::Learning);

        app.switch_child("c2");

        assert_eq!(app.view.current(), View::Learning);
        assert_eq!(app.view.active_child_id(), Some("c2"));
        assert_eq!(app.current_child().as_ref().unwrap().name, "小宝");
        assert!(app.core.data.homeworks.is_empty());
        assert_eq!(app.core.data.summary.as_ref().unwrap().homework_total, 0);
        // Shared for all children
        assert!(app.core.data.recipe.is_some());
    }

    #[test]
    fn test_switch_to_unknown_child_sets_error() {
        let mut app = create_test_app();
        app.switch_child("ghost");

        assert!(app.ui.error_message.is_some());
        assert_eq!(app.view.active_child_id(), Some("c1"));
    }

    #[test]
    fn test_submit_then_overlay_then_history() {
        let mut app = create_test_app();
        app.view.navigate(View::LeaveApply);
        app.leave_form.reason = "身体不适".to_string();

        app.submit_leave_request(3.0);

        assert!(app.leave_form.is_showing_success());
        assert_eq!(app.core.data.leave_requests.len(), 1);
        assert_eq!(app.core.data.leave_requests[0].reason, "身体不适");

        // A second click while the overlay is up does nothing
        app.submit_leave_request(3.1);
        assert_eq!(app.core.data.leave_requests.len(), 1);

        assert!(app.leave_form.tick(4.5));
        assert_eq!(app.leave_form.tab, LeaveTab::History);
        assert!(app.leave_form.reason.is_empty());
    }

    #[test]
    fn test_blank_reason_is_not_submitted() {
        let mut app = create_test_app();
        app.leave_form.reason = "  ".to_string();

        app.submit_leave_request(1.0);

        assert!(!app.leave_form.is_showing_success());
        assert!(app.core.data.leave_requests.is_empty());
    }

    #[test]
    fn test_leave_history_follows_child() {
        let mut app = create_test_app();
        app.leave_form.reason = "大宝请假".to_string();
        app.submit_leave_request(0.0);
        app.leave_form.tick(2.0);

        app.switch_child("c2");
        assert!(app.core.data.leave_requests.is_empty());

        app.switch_child("c1");
        assert_eq!(app.core.data.leave_requests.len(), 1);
    }
}
