use eframe::egui;
use std::time::Instant;

use crate::content::GalleryItem;
use crate::render::image_cache::{self, ImageCache};
use crate::render::{chrome, compute_cells, GRID_GAP, GALLERY_CELL_H};
use crate::reveal::{RevealSet, REVEAL_RISE};
use crate::theme::Theme;

/// Draw the gallery grid. Items fade in and rise as they reveal.
///
/// Returns each item's resting rect so the caller can feed the reveal
/// set for the next frame.
pub fn render(
    ui: &egui::Ui,
    items: &[GalleryItem],
    reveal: &RevealSet,
    theme: &Theme,
    rect: egui::Rect,
    image_cache: &ImageCache,
    now: Instant,
    scale: f32,
) -> Vec<egui::Rect> {
    let content_top = chrome::section_title(ui, "Gallery", theme, rect, scale);
    let padding = 60.0 * scale;
    let width = rect.width() - padding * 2.0;
    let cells = compute_cells(items.len(), 3, width, GALLERY_CELL_H * scale, GRID_GAP * scale);

    let mut rects = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let Some(cell) = cells.get(i) else { break };
        let cell_rect = egui::Rect::from_min_size(
            egui::pos2(rect.left() + padding + cell.x, content_top + cell.y),
            egui::vec2(cell.w, cell.h),
        );
        rects.push(cell_rect);

        let progress = reveal.progress(i, now);
        if progress <= 0.0 {
            continue;
        }
        let rise = (1.0 - progress) * REVEAL_RISE * scale;
        let draw_rect = cell_rect.translate(egui::vec2(0.0, rise));
        let painter = ui.painter();

        match item.image.as_deref().and_then(|p| image_cache.get(ui.ctx(), p)) {
            Some(texture) => image_cache::draw_cover(
                painter,
                &texture,
                draw_rect,
                Theme::with_opacity(egui::Color32::WHITE, progress),
            ),
            None => {
                painter.rect_filled(
                    draw_rect,
                    6.0 * scale,
                    Theme::with_opacity(theme.card_background, progress),
                );
            }
        }

        // Title strip along the bottom edge.
        let strip = egui::Rect::from_min_max(
            egui::pos2(draw_rect.left(), draw_rect.bottom() - 44.0 * scale),
            draw_rect.max,
        );
        painter.rect_filled(
            strip,
            0.0,
            Theme::with_opacity(egui::Color32::BLACK, 0.45 * progress),
        );
        let text_color = Theme::with_opacity(egui::Color32::WHITE, 0.9 * progress);
        let galley = painter.layout_no_wrap(
            item.title.clone(),
            egui::FontId::proportional(theme.small_size * scale),
            text_color,
        );
        painter.galley(
            egui::pos2(
                strip.left() + 12.0 * scale,
                strip.center().y - galley.rect.height() / 2.0,
            ),
            galley,
            text_color,
        );
    }
    rects
}
