//! # Modal State Module
//!
//! Visibility of the overlays that float above the screens: the full-size
//! image preview and the header's child picker dropdown.

/// Image preview overlay
#[derive(Debug, Clone, Default)]
pub struct ImagePreviewState {
    image: Option<String>,
}

impl ImagePreviewState {
    pub fn open(&mut self, image: impl Into<String>) {
        let image = image.into();
        log::info!("🖼️ Opening image preview: {}", image);
        self.image = Some(image);
    }

    pub fn close(&mut self) {
        self.image = None;
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }
}

#[derive(Debug, Default)]
pub struct ModalState {
    pub image_preview: ImagePreviewState,

    /// Whether the header's child dropdown is open
    pub show_child_dropdown: bool,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close everything (Escape)
    pub fn hide_all_modals(&mut self) {
        self.image_preview.close();
        self.show_child_dropdown = false;
    }
}
