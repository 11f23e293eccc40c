use eframe::egui;
use std::time::Instant;

use crate::content::Package;
use crate::render::{chrome, compute_cells, PageInput, GRID_GAP, PACKAGE_CARD_H};
use crate::reveal::{RevealSet, REVEAL_RISE};
use crate::theme::Theme;

pub struct PackagesResponse {
    /// Package whose "Book Now" control was clicked.
    pub book: Option<String>,
    /// Resting card rects, for the reveal set.
    pub card_rects: Vec<egui::Rect>,
}

/// Draw the package cards with their booking buttons.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    packages: &[Package],
    reveal: &RevealSet,
    theme: &Theme,
    rect: egui::Rect,
    input: &PageInput,
    now: Instant,
    scale: f32,
) -> PackagesResponse {
    let mut response = PackagesResponse {
        book: None,
        card_rects: Vec::with_capacity(packages.len()),
    };

    let content_top = chrome::section_title(ui, "Packages", theme, rect, scale);
    let padding = 60.0 * scale;
    let width = rect.width() - padding * 2.0;
    let cells = compute_cells(packages.len(), 3, width, PACKAGE_CARD_H * scale, GRID_GAP * scale);

    for (i, package) in packages.iter().enumerate() {
        let Some(cell) = cells.get(i) else { break };
        let card_rect = egui::Rect::from_min_size(
            egui::pos2(rect.left() + padding + cell.x, content_top + cell.y),
            egui::vec2(cell.w, cell.h),
        );
        response.card_rects.push(card_rect);

        let progress = reveal.progress(i, now);
        if progress <= 0.0 {
            continue;
        }
        let rise = (1.0 - progress) * REVEAL_RISE * scale;
        let draw_rect = card_rect.translate(egui::vec2(0.0, rise));
        let painter = ui.painter();

        painter.rect_filled(
            draw_rect,
            10.0 * scale,
            Theme::with_opacity(theme.card_background, progress),
        );

        let pad = 24.0 * scale;
        let mut y = draw_rect.top() + pad;
        let name_color = Theme::with_opacity(theme.heading_color, progress);
        let name_galley = painter.layout_no_wrap(
            package.name.clone(),
            egui::FontId::proportional(24.0 * scale),
            name_color,
        );
        painter.galley(egui::pos2(draw_rect.left() + pad, y), name_galley, name_color);
        y += 38.0 * scale;

        let price_color = Theme::with_opacity(theme.accent, progress);
        let price_galley = painter.layout_no_wrap(
            package.price.clone(),
            egui::FontId::proportional(32.0 * scale),
            price_color,
        );
        painter.galley(egui::pos2(draw_rect.left() + pad, y), price_galley, price_color);
        y += 46.0 * scale;

        if !package.duration.is_empty() {
            let dim = Theme::with_opacity(theme.foreground, 0.6 * progress);
            let galley = painter.layout_no_wrap(
                package.duration.clone(),
                egui::FontId::proportional(theme.small_size * scale),
                dim,
            );
            painter.galley(egui::pos2(draw_rect.left() + pad, y), galley, dim);
            y += 30.0 * scale;
        }

        y += 8.0 * scale;
        let body_color = Theme::with_opacity(theme.foreground, 0.85 * progress);
        for highlight in &package.highlights {
            let galley = painter.layout(
                format!("\u{2022} {highlight}"),
                egui::FontId::proportional(theme.body_size * 0.8 * scale),
                body_color,
                draw_rect.width() - pad * 2.0,
            );
            let height = galley.rect.height();
            painter.galley(egui::pos2(draw_rect.left() + pad, y), galley, body_color);
            y += height + 8.0 * scale;
        }

        // Book Now button pinned to the card bottom.
        let button_rect = egui::Rect::from_min_size(
            egui::pos2(draw_rect.left() + pad, draw_rect.bottom() - pad - 48.0 * scale),
            egui::vec2(draw_rect.width() - pad * 2.0, 48.0 * scale),
        );
        let hovered = input.hovers(button_rect);
        let fill_opacity = if hovered { 1.0 } else { 0.9 };
        painter.rect_filled(
            button_rect,
            8.0 * scale,
            Theme::with_opacity(theme.accent, fill_opacity * progress),
        );
        let label_color = Theme::with_opacity(egui::Color32::WHITE, progress);
        let label = painter.layout_no_wrap(
            "Book Now".to_string(),
            egui::FontId::proportional(theme.body_size * 0.9 * scale),
            label_color,
        );
        painter.galley(
            egui::pos2(
                button_rect.center().x - label.rect.width() / 2.0,
                button_rect.center().y - label.rect.height() / 2.0,
            ),
            label,
            label_color,
        );
        if input.clicked_in(button_rect) {
            response.book = Some(package.name.clone());
        }
    }
    response
}
