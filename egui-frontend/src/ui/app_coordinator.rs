//! # App Coordinator Module
//!
//! The main update loop.
//!
//! ## Application Flow:
//! 1. Apply the companion style
//! 2. Handle global input (Escape closes overlays)
//! 3. Load data if needed
//! 4. Bottom navigation panel, then the routed screen in the central panel
//! 5. Overlays (child dropdown is drawn by the header, the rest here)
//!
//! `render_frame()` holds everything so it can run on a bare `egui::Context`.

use eframe::egui;

use crate::ui::app_state::CompanionApp;
use crate::ui::components::theme::colors;
use crate::ui::*;

impl eframe::App for CompanionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_frame(ctx);
    }
}

impl CompanionApp {
    pub fn render_frame(&mut self, ctx: &egui::Context) {
        setup_companion_style(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.modal.hide_all_modals();
        }

        if self.ui.loading {
            self.load_initial_data();
        }

        egui::TopBottomPanel::bottom("bottom_nav")
            .exact_height(BOTTOM_NAV_HEIGHT)
            .frame(
                egui::Frame::none()
                    .fill(colors::CARD_BACKGROUND)
                    .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                    .inner_margin(egui::Margin::symmetric(0.0, 4.0)),
            )
            .show(ctx, |ui| {
                self.render_bottom_nav(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(colors::PAGE_BACKGROUND))
            .show(ctx, |ui| {
                let full_rect = ui.available_rect_before_wrap();
                draw_page_background(ui, full_rect);

                if self.ui.loading {
                    self.render_loading_screen(ui);
                    return;
                }
                self.render_main_content(ui);
            });

        self.render_modals(ctx);
    }

    /// Render the loading screen
    pub fn render_loading_screen(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            ui.spinner();
            ui.label("加载中...");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Backend;
    use crate::config::AppConfig;
    use crate::ui::state::{LeaveTab, View};

    fn create_test_app() -> CompanionApp {
        let config = AppConfig::default();
        let backend = Backend::new(config.reference_date).unwrap();
        CompanionApp::with_backend(backend, config)
    }

    fn run_frame(ctx: &egui::Context, app: &mut CompanionApp, time: f64) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(420.0, 820.0),
            )),
            time: Some(time),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.render_frame(ctx));
    }

    #[test]
    fn test_first_frame_loads_data() {
        let ctx = egui::Context::default();
        let mut app = create_test_app();
        assert!(app.ui.loading);

        run_frame(&ctx, &mut app, 0.0);

        assert!(!app.ui.loading);
        assert!(app.current_child().is_some());
        assert!(app.core.data.summary.is_some());
    }

    #[test]
    fn test_every_view_renders() {
        let ctx = egui::Context::default();
        let mut app = create_test_app();

        let views = [
            View::Home,
            View::Learning,
            View::Mine,
            View::Recipe,
            View::LeaveApply,
            View::MistakeBook,
            View::Review,
        ];
        for (index, view) in views.into_iter().enumerate() {
            app.view.navigate(view);
            run_frame(&ctx, &mut app, index as f64);
            assert_eq!(app.view.current(), view);
        }

        app.leave_form.tab = LeaveTab::History;
        app.view.navigate(View::LeaveApply);
        run_frame(&ctx, &mut app, 10.0);
    }

    #[test]
    fn test_overlays_render() {
        let ctx = egui::Context::default();
        let mut app = create_test_app();
        run_frame(&ctx, &mut app, 0.0);

        app.modal.image_preview.open("mistake-1.png");
        app.modal.show_child_dropdown = true;
        run_frame(&ctx, &mut app, 0.1);

        assert!(app.modal.image_preview.is_open());
    }

    #[test]
    fn test_success_overlay_closes_after_delay() {
        let ctx = egui::Context::default();
        let mut app = create_test_app();
        run_frame(&ctx, &mut app, 0.0);

        app.view.navigate(View::LeaveApply);
        app.leave_form.reason = "发烧需要休息".to_string();
        app.submit_leave_request(1.0);
        assert!(app.leave_form.is_showing_success());
        assert_eq!(app.core.data.leave_requests.len(), 1);

        run_frame(&ctx, &mut app, 1.5);
        assert!(app.leave_form.is_showing_success());
        assert_eq!(app.leave_form.tab, LeaveTab::Apply);

        run_frame(&ctx, &mut app, 3.0);
        assert!(!app.leave_form.is_showing_success());
        assert_eq!(app.leave_form.tab, LeaveTab::History);
        assert!(app.leave_form.reason.is_empty());
        assert_eq!(app.view.current(), View::LeaveApply);
    }
}
