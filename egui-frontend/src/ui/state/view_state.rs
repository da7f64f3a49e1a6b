//! # View State Module
//!
//! The view router: which screen is visible and which child the screens are
//! showing. There is no history stack. Every secondary screen's back button
//! returns to Home, and switching child never changes the visible screen.

use log::info;

/// Screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Learning,
    Mine,
    Recipe,
    LeaveApply,
    MistakeBook,
    Review,
}

impl View {
    /// Destinations of the bottom navigation bar, left to right
    pub const BOTTOM_NAV: [View; 3] = [View::Home, View::Learning, View::Mine];

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "首页",
            View::Learning => "学情详情",
            View::Mine => "我的",
            View::Recipe => "今日食谱",
            View::LeaveApply => "请假申请",
            View::MistakeBook => "错题本",
            View::Review => "表现点评",
        }
    }

    /// Label under the bottom navigation icon
    pub fn nav_label(&self) -> &'static str {
        match self {
            View::Learning => "学情",
            other => other.title(),
        }
    }

    pub fn nav_icon(&self) -> &'static str {
        match self {
            View::Home => "🏠",
            View::Learning => "📖",
            View::Mine => "👤",
            View::Recipe => "🍱",
            View::LeaveApply => "📅",
            View::MistakeBook => "📕",
            View::Review => "⭐",
        }
    }

    /// Screens drawn with a back button instead of the app header
    pub fn has_back_button(&self) -> bool {
        !matches!(self, View::Home | View::Mine)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    current: View,
    active_child_id: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn navigate(&mut self, view: View) {
        if self.current != view {
            info!("🧭 Navigating {:?} -> {:?}", self.current, view);
        }
        self.current = view;
    }

    /// Back always lands on Home
    pub fn go_back(&mut self) {
        self.navigate(View::Home);
    }

    pub fn active_child_id(&self) -> Option<&str> {
        self.active_child_id.as_deref()
    }

    /// Record the child the screens show. Returns whether it changed.
    pub fn set_active_child(&mut self, child_id: &str) -> bool {
        if self.active_child_id.as_deref() == Some(child_id) {
            return false;
        }
        info!("👶 Router now showing child {}", child_id);
        self.active_child_id = Some(child_id.to_string());
        true
    }

    /// Whether a bottom navigation entry is highlighted
    pub fn is_nav_active(&self, view: View) -> bool {
        self.current == view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VIEWS: [View; 7] = [
        View::Home,
        View::Learning,
        View::Mine,
        View::Recipe,
        View::LeaveApply,
        View::MistakeBook,
        View::Review,
    ];

    #[test]
    fn test_starts_on_home() {
        let state = ViewState::new();
        assert_eq!(state.current(), View::Home);
        assert!(state.active_child_id().is_none());
    }

    #[test]
    fn test_go_back_always_lands_on_home() {
        for view in ALL_VIEWS {
            let mut state = ViewState::new();
            state.navigate(view);
            assert_eq!(state.current(), view);
            state.go_back();
            assert_eq!(state.current(), View::Home);
        }
    }

    #[test]
    fn test_switching_child_keeps_current_screen() {
        let mut state = ViewState::new();
        state.navigate(View::MistakeBook);

        assert!(state.set_active_child("c1"));
        assert!(state.set_active_child("c2"));
        assert!(!state.set_active_child("c2"));

        assert_eq!(state.current(), View::MistakeBook);
        assert_eq!(state.active_child_id(), Some("c2"));
    }

    #[test]
    fn test_bottom_nav_highlight() {
        let mut state = ViewState::new();
        state.navigate(View::Learning);

        let highlighted: Vec<_> = View::BOTTOM_NAV
            .iter()
            .filter(|v| state.is_nav_active(**v))
            .collect();
        assert_eq!(highlighted, vec![&View::Learning]);

        state.navigate(View::Recipe);
        assert!(View::BOTTOM_NAV.iter().all(|v| !state.is_nav_active(*v)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(View::Learning.nav_label(), "学情");
        assert_eq!(View::Home.nav_label(), "首页");
        assert!(!View::Home.has_back_button());
        assert!(View::Review.has_back_button());
    }
}
