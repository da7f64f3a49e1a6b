//! # Learning Screen
//!
//! Homework, the teacher's review and new mistakes for the active child.
//! The 今日学情 tab shows records dated today; 历史记录 shows all of them.

use eframe::egui;
use shared::{Homework, HomeworkStatus, Mistake, Review};

use super::{subject_tone, MISSING_RATING};
use crate::ui::app_state::CompanionApp;
use crate::ui::components::theme::{colors, Tone};
use crate::ui::components::ui_components::{
    card, chip, empty_state, image_placeholder, muted, section_title, tab_switcher,
};
use crate::ui::state::LearningTab;

/// Records the Learning screen shows for one tab
#[derive(Debug, Default)]
pub struct LearningView<'a> {
    pub homeworks: Vec<&'a Homework>,
    /// The review shown in the review card (latest in range)
    pub review: Option<&'a Review>,
    pub mistakes: Vec<&'a Mistake>,
}

/// Filter the loaded records down to what a tab shows
pub fn learning_view<'a>(
    tab: LearningTab,
    today: &str,
    homeworks: &'a [Homework],
    reviews: &'a [Review],
    mistakes: &'a [Mistake],
) -> LearningView<'a> {
    let in_range = |date: &str| tab == LearningTab::History || date == today;
    LearningView {
        homeworks: homeworks.iter().filter(|h| in_range(&h.date)).collect(),
        review: reviews.iter().find(|r| in_range(&r.date)),
        mistakes: mistakes.iter().filter(|m| in_range(&m.date)).collect(),
    }
}

impl CompanionApp {
    pub fn render_learning_screen(&mut self, ui: &mut egui::Ui) {
        let today = self.core.today_string();
        let mut preview: Option<String> = None;

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(14.0, 10.0))
            .show(ui, |ui| {
                tab_switcher(
                    ui,
                    &mut self.learning_tab,
                    &[
                        (LearningTab::Today, LearningTab::Today.label()),
                        (LearningTab::History, LearningTab::History.label()),
                    ],
                );
            });

        let data = &self.core.data;
        let view = learning_view(
            self.learning_tab,
            &today,
            &data.homeworks,
            &data.reviews,
            &data.mistakes,
        );
        let show_dates = self.learning_tab == LearningTab::History;

        egui::ScrollArea::vertical()
            .id_source("learning_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(14.0, 0.0))
                    .show(ui, |ui| {
                        card(ui, |ui| {
                            section_title(ui, "作业完成情况", None);
                            if view.homeworks.is_empty() {
                                empty_state(ui, "📚", "暂无作业记录");
                            }
                            for homework in &view.homeworks {
                                if let Some(image) = render_homework(ui, homework, show_dates) {
                                    preview = Some(image);
                                }
                                ui.separator();
                            }
                        });

                        ui.add_space(12.0);
                        card(ui, |ui| {
                            section_title(ui, "今日表现点评", None);
                            if let Some(image) = render_review_summary(ui, view.review) {
                                preview = Some(image);
                            }
                        });

                        ui.add_space(12.0);
                        card(ui, |ui| {
                            section_title(ui, "新增错题记录", None);
                            if view.mistakes.is_empty() {
                                empty_state(ui, "📕", "暂无错题记录");
                            }
                            for mistake in &view.mistakes {
                                ui.horizontal(|ui| {
                                    chip(ui, &mistake.subject, subject_tone(&mistake.subject));
                                    ui.label(
                                        egui::RichText::new(&mistake.knowledge_point)
                                            .strong()
                                            .color(colors::TEXT_PRIMARY),
                                    );
                                });
                                muted(ui, format!("原因: {}", mistake.reason));
                                ui.separator();
                            }
                        });
                        ui.add_space(12.0);
                    });
            });

        if let Some(image) = preview {
            self.modal.image_preview.open(image);
        }
    }
}

/// Returns the photo to preview when "查看作业照片" is clicked
fn render_homework(ui: &mut egui::Ui, homework: &Homework, show_date: bool) -> Option<String> {
    let mut preview = None;

    ui.horizontal(|ui| {
        chip(ui, &homework.subject, subject_tone(&homework.subject));
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 2.0;
            ui.label(
                egui::RichText::new(&homework.title)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            let submitted = homework.submit_time.as_deref().unwrap_or("尚未提交");
            if show_date {
                muted(ui, format!("{} · {}", homework.date, submitted));
            } else {
                muted(ui, submitted);
            }
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match &homework.rating {
                Some(rating) => {
                    chip(ui, rating, Tone::Success);
                }
                None => {
                    let tone = if homework.status == HomeworkStatus::Pending {
                        Tone::Neutral
                    } else {
                        Tone::Info
                    };
                    chip(ui, homework.status.label(), tone);
                }
            }
        });
    });

    if let Some(feedback) = &homework.feedback {
        ui.label(
            egui::RichText::new(format!("老师评语: {}", feedback))
                .size(12.0)
                .color(colors::TEXT_SECONDARY),
        );
    }

    if homework.status == HomeworkStatus::Completed {
        if let Some(first) = homework.images.first() {
            if ui
                .add(
                    egui::Label::new(
                        egui::RichText::new("🖼 查看作业照片")
                            .size(12.0)
                            .color(colors::ACTIVE_BACKGROUND),
                    )
                    .sense(egui::Sense::click())
                    .selectable(false),
                )
                .clicked()
            {
                preview = Some(first.clone());
            }
        }
    }

    preview
}

/// Rating chip, date, tags, content and images of a review
pub fn render_review_summary(ui: &mut egui::Ui, review: Option<&Review>) -> Option<String> {
    let mut preview = None;

    ui.horizontal(|ui| {
        muted(ui, "综合评价:");
        match review {
            Some(review) => {
                chip(ui, review.overall_rating.label(), review.overall_rating.into());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    muted(ui, &review.date);
                });
            }
            None => {
                chip(ui, MISSING_RATING, Tone::Neutral);
            }
        }
    });

    if let Some(review) = review {
        if !review.tags.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for tag in &review.tags {
                    chip(ui, &format!("#{}", tag), Tone::Info);
                }
            });
        }
    }

    let content = review
        .map(|r| r.content.as_str())
        .filter(|c| !c.is_empty())
        .unwrap_or("暂无详细评价");
    ui.label(
        egui::RichText::new(format!("\u{201c}{}\u{201d}", content))
            .italics()
            .color(colors::TEXT_SECONDARY),
    );

    if let Some(review) = review {
        ui.horizontal_wrapped(|ui| {
            for (index, image) in review.images.iter().enumerate() {
                let label = format!("照片 {}", index + 1);
                if image_placeholder(ui, egui::vec2(72.0, 72.0), &label, image).clicked() {
                    preview = Some(image.clone());
                }
            }
        });
    }

    preview
}
