use eframe::egui;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::theme::Theme;

/// Lazy path → GPU texture cache.
///
/// Decodes with the `image` crate on first use and uploads once. A path
/// that fails to read or decode is remembered as missing so the warning
/// fires a single time; callers then draw a placeholder.
pub struct ImageCache {
    base_path: PathBuf,
    cache: RefCell<HashMap<PathBuf, Option<egui::TextureHandle>>>,
}

impl ImageCache {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Resolve `path` against the showcase directory and return its
    /// texture, loading on the first request.
    pub fn get(&self, ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
        let mut cache = self.cache.borrow_mut();
        if let Some(entry) = cache.get(path) {
            return entry.clone();
        }
        let loaded = self.load(ctx, path);
        cache.insert(path.to_path_buf(), loaded.clone());
        loaded
    }

    fn load(&self, ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
        let full = self.base_path.join(path);
        let bytes = match std::fs::read(&full) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("could not read image {}: {e}", full.display());
                return None;
            }
        };
        let image = match image::load_from_memory(&bytes) {
            Ok(image) => image.into_rgba8(),
            Err(e) => {
                tracing::warn!("could not decode image {}: {e}", full.display());
                return None;
            }
        };
        let size = [image.width() as usize, image.height() as usize];
        let color = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
        Some(ctx.load_texture(full.display().to_string(), color, egui::TextureOptions::LINEAR))
    }
}

/// Draw a texture filling `rect` without distortion, cropping whatever
/// overflows (cover fit).
pub fn draw_cover(
    painter: &egui::Painter,
    texture: &egui::TextureHandle,
    rect: egui::Rect,
    tint: egui::Color32,
) {
    let uv = cover_uv(texture.size_vec2(), rect.size());
    painter.image(texture.id(), rect, uv, tint);
}

/// Flat stand-in for a missing image, with the item's title on it.
pub fn draw_placeholder(
    painter: &egui::Painter,
    rect: egui::Rect,
    label: &str,
    theme: &Theme,
    scale: f32,
) {
    painter.rect_filled(rect, 6.0 * scale, theme.card_background);
    let color = Theme::with_opacity(theme.foreground, 0.5);
    let galley = painter.layout_no_wrap(
        label.to_string(),
        egui::FontId::proportional(theme.small_size * scale),
        color,
    );
    let pos = egui::pos2(
        rect.center().x - galley.rect.width() / 2.0,
        rect.center().y - galley.rect.height() / 2.0,
    );
    painter.galley(pos, galley, color);
}

fn cover_uv(image: egui::Vec2, rect: egui::Vec2) -> egui::Rect {
    if image.x <= 0.0 || image.y <= 0.0 || rect.x <= 0.0 || rect.y <= 0.0 {
        return egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    }
    let scale = (rect.x / image.x).max(rect.y / image.y);
    let scaled = image * scale;
    let u = (1.0 - rect.x / scaled.x) / 2.0;
    let v = (1.0 - rect.y / scaled.y) / 2.0;
    egui::Rect::from_min_max(egui::pos2(u, v), egui::pos2(1.0 - u, 1.0 - v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    #[test]
    fn test_cover_uv_matching_aspect_uses_full_image() {
        let uv = cover_uv(vec2(1920.0, 1080.0), vec2(960.0, 540.0));
        assert_eq!(uv.min.x, 0.0);
        assert_eq!(uv.min.y, 0.0);
        assert_eq!(uv.max.x, 1.0);
        assert_eq!(uv.max.y, 1.0);
    }

    #[test]
    fn test_cover_uv_wide_image_crops_sides() {
        let uv = cover_uv(vec2(2000.0, 1000.0), vec2(500.0, 500.0));
        assert!(uv.min.x > 0.0 && uv.max.x < 1.0, "horizontal crop expected");
        assert_eq!(uv.min.y, 0.0);
        assert_eq!(uv.max.y, 1.0);
        assert!((uv.min.x - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_cover_uv_tall_image_crops_top_and_bottom() {
        let uv = cover_uv(vec2(1000.0, 2000.0), vec2(500.0, 500.0));
        assert_eq!(uv.min.x, 0.0);
        assert!(uv.min.y > 0.0 && uv.max.y < 1.0, "vertical crop expected");
    }

    #[test]
    fn test_cover_uv_degenerate_sizes() {
        let uv = cover_uv(vec2(0.0, 0.0), vec2(500.0, 500.0));
        assert_eq!(uv.max.x, 1.0);
        assert_eq!(uv.max.y, 1.0);
    }
}
