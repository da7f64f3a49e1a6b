//! # Fonts
//!
//! egui's bundled fonts carry no CJK glyphs, so every label of this app would
//! render as boxes without help. At startup a CJK font is loaded from the
//! configured path, or from the first well-known system location that exists,
//! and appended as a fallback to both font families.

use eframe::egui;
use log::{info, warn};
use std::path::{Path, PathBuf};

const CJK_FONT_NAME: &str = "cjk";

/// Common install locations of a CJK-capable font, per platform
const SYSTEM_CJK_FONTS: &[&str] = &[
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    // Windows
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
];

fn candidates(configured: Option<&Path>) -> impl Iterator<Item = PathBuf> + '_ {
    configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_CJK_FONTS.iter().map(PathBuf::from))
}

/// Bytes of a font file that egui can parse
fn read_font(path: &Path) -> Option<Vec<u8>> {
    if !path.is_file() {
        return None;
    }
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("⚠️ Failed to read font {:?}: {}", path, e);
            return None;
        }
    };
    match ab_glyph::FontRef::try_from_slice(&bytes) {
        Ok(_) => Some(bytes),
        Err(e) => {
            warn!("⚠️ {:?} is not a usable TTF/OTF font: {}", path, e);
            None
        }
    }
}

/// First usable font: the configured file, then the system candidates.
/// Missing, unreadable and unparsable files are skipped.
pub fn find_cjk_font(configured: Option<&Path>) -> Option<(PathBuf, Vec<u8>)> {
    candidates(configured).find_map(|path| read_font(&path).map(|bytes| (path, bytes)))
}

/// Install the CJK fallback font. Returns whether one was installed.
pub fn setup_custom_fonts(ctx: &egui::Context, configured: Option<&Path>) -> bool {
    let Some((path, bytes)) = find_cjk_font(configured) else {
        warn!("⚠️ No CJK font found, Chinese text will not render. Set cjk_font_path in the config.");
        return false;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), egui::FontData::from_owned(bytes));

    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }

    ctx.set_fonts(fonts);
    info!("🔤 Loaded CJK font from {:?}", path);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// A real TTF taken from egui's bundled fonts
    fn bundled_font_bytes() -> Vec<u8> {
        let defaults = egui::FontDefinitions::default();
        let data = defaults
            .font_data
            .values()
            .next()
            .expect("egui ships default fonts");
        data.font.to_vec()
    }

    #[test]
    fn test_configured_font_wins_when_valid() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let font = temp_dir.path().join("font.ttf");
        std::fs::write(&font, bundled_font_bytes()).unwrap();

        let (path, _) = find_cjk_font(Some(&font)).unwrap();
        assert_eq!(path, font);
    }

    #[test]
    fn test_junk_font_file_is_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let junk = temp_dir.path().join("junk.ttf");
        std::fs::write(&junk, b"not really a font").unwrap();

        assert!(read_font(&junk).is_none());
        assert_ne!(find_cjk_font(Some(&junk)).map(|(path, _)| path), Some(junk.clone()));

        // Whatever gets installed, rendering a frame must not panic
        let ctx = egui::Context::default();
        setup_custom_fonts(&ctx, Some(&junk));
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| ui.label("今日动态"));
        });
    }

    #[test]
    fn test_missing_configured_font_falls_back_to_probe() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing.ttf");

        // Whatever the host has installed, the missing file is never chosen
        assert_ne!(find_cjk_font(Some(&missing)).map(|(path, _)| path), Some(missing));
    }
}
