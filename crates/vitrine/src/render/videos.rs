use eframe::egui;
use std::time::Instant;

use crate::content::VideoClip;
use crate::render::image_cache::{self, ImageCache};
use crate::render::{chrome, compute_cells, PageInput, GRID_GAP, VIDEO_TILE_H};
use crate::theme::Theme;
use crate::video::VideoTile;

pub struct VideosResponse {
    /// Tile the user clicked this frame.
    pub toggled: Option<usize>,
    /// Per-tile pointer hover, in clip order.
    pub hovered: Vec<bool>,
}

/// Draw the video tiles: thumbnail, play overlay, progress bar.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    clips: &[VideoClip],
    tiles: &[VideoTile],
    theme: &Theme,
    rect: egui::Rect,
    image_cache: &ImageCache,
    input: &PageInput,
    now: Instant,
    scale: f32,
) -> VideosResponse {
    let mut response = VideosResponse {
        toggled: None,
        hovered: vec![false; clips.len()],
    };

    let content_top = chrome::section_title(ui, "Videos", theme, rect, scale);
    let padding = 60.0 * scale;
    let width = rect.width() - padding * 2.0;
    let cells = compute_cells(clips.len(), 2, width, VIDEO_TILE_H * scale, GRID_GAP * scale);

    for (i, clip) in clips.iter().enumerate() {
        let (Some(cell), Some(tile)) = (cells.get(i), tiles.get(i)) else {
            break;
        };
        let tile_rect = egui::Rect::from_min_size(
            egui::pos2(rect.left() + padding + cell.x, content_top + cell.y),
            egui::vec2(cell.w, cell.h),
        );
        let painter = ui.painter();

        match clip
            .thumbnail
            .as_deref()
            .and_then(|p| image_cache.get(ui.ctx(), p))
        {
            Some(texture) => {
                image_cache::draw_cover(painter, &texture, tile_rect, egui::Color32::WHITE)
            }
            None => image_cache::draw_placeholder(painter, tile_rect, &clip.title, theme, scale),
        }
        painter.rect_filled(
            tile_rect,
            0.0,
            Theme::with_opacity(egui::Color32::BLACK, 0.25),
        );

        let title_color = Theme::with_opacity(egui::Color32::WHITE, 0.95);
        let title = painter.layout_no_wrap(
            clip.title.clone(),
            egui::FontId::proportional(theme.body_size * 0.85 * scale),
            title_color,
        );
        painter.galley(
            egui::pos2(tile_rect.left() + 16.0 * scale, tile_rect.top() + 14.0 * scale),
            title,
            title_color,
        );

        if tile.overlay_visible() {
            let center = tile_rect.center();
            painter.circle_filled(
                center,
                34.0 * scale,
                Theme::with_opacity(egui::Color32::WHITE, 0.9),
            );
            let glyph_color = Theme::with_opacity(egui::Color32::BLACK, 0.8);
            let glyph = painter.layout_no_wrap(
                "\u{25B6}".to_string(),
                egui::FontId::proportional(26.0 * scale),
                glyph_color,
            );
            painter.galley(
                egui::pos2(
                    center.x - glyph.rect.width() / 2.0 + 2.0 * scale,
                    center.y - glyph.rect.height() / 2.0,
                ),
                glyph,
                glyph_color,
            );
        } else {
            // Progress bar along the bottom while playing.
            let track = egui::Rect::from_min_max(
                egui::pos2(tile_rect.left(), tile_rect.bottom() - 6.0 * scale),
                tile_rect.max,
            );
            painter.rect_filled(track, 0.0, Theme::with_opacity(egui::Color32::BLACK, 0.4));
            let fraction = if tile.duration() > 0.0 {
                (tile.position(now) / tile.duration()).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let fill = egui::Rect::from_min_max(
                track.min,
                egui::pos2(track.left() + track.width() * fraction, track.bottom()),
            );
            painter.rect_filled(fill, 0.0, theme.accent);
        }

        response.hovered[i] = input.hovers(tile_rect);
        if input.clicked_in(tile_rect) {
            response.toggled = Some(i);
        }
    }
    response
}
