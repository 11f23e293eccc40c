use eframe::egui;

use crate::content::{Brand, NavLink, SectionId};
use crate::render::{PageInput, FOOTER_H, HEADER_HEIGHT, SECTION_PADDING, TITLE_BLOCK};
use crate::theme::Theme;

pub struct HeaderResponse {
    pub nav_to: Option<SectionId>,
    pub hamburger: bool,
}

/// Fixed header bar: transparent over the hero, solid once the page has
/// scrolled past the threshold. Brand on the left, inline links and the
/// drawer hamburger on the right.
pub fn draw_header(
    ui: &egui::Ui,
    brand: &Brand,
    links: &[NavLink],
    scrolled: bool,
    theme: &Theme,
    viewport: egui::Rect,
    input: &PageInput,
    scale: f32,
) -> HeaderResponse {
    let mut response = HeaderResponse {
        nav_to: None,
        hamburger: false,
    };
    let bar = egui::Rect::from_min_size(
        viewport.min,
        egui::vec2(viewport.width(), HEADER_HEIGHT * scale),
    );
    let painter = ui.painter();

    let text_color = if scrolled {
        painter.rect_filled(bar, 0.0, theme.header_background);
        painter.line_segment(
            [bar.left_bottom(), bar.right_bottom()],
            egui::Stroke::new(1.0, Theme::with_opacity(theme.foreground, 0.15)),
        );
        theme.heading_color
    } else {
        egui::Color32::WHITE
    };

    let pad = 28.0 * scale;
    let brand_galley = painter.layout_no_wrap(
        brand.name.clone(),
        egui::FontId::proportional(22.0 * scale),
        text_color,
    );
    painter.galley(
        egui::pos2(bar.left() + pad, bar.center().y - brand_galley.rect.height() / 2.0),
        brand_galley,
        text_color,
    );

    // Hamburger at the far right.
    let burger_size = 24.0 * scale;
    let burger_rect = egui::Rect::from_center_size(
        egui::pos2(bar.right() - pad - burger_size / 2.0, bar.center().y),
        egui::vec2(burger_size + 16.0 * scale, burger_size + 16.0 * scale),
    );
    let burger_color = if input.hovers(burger_rect) {
        theme.accent
    } else {
        text_color
    };
    for i in 0..3 {
        let y = bar.center().y + (i as f32 - 1.0) * 7.0 * scale;
        painter.line_segment(
            [
                egui::pos2(burger_rect.center().x - burger_size / 2.0, y),
                egui::pos2(burger_rect.center().x + burger_size / 2.0, y),
            ],
            egui::Stroke::new(2.0 * scale, burger_color),
        );
    }
    if input.clicked_in(burger_rect) {
        response.hamburger = true;
    }

    // Inline links walk leftward from the hamburger.
    let mut x = burger_rect.left() - 28.0 * scale;
    for link in links.iter().rev() {
        let galley = painter.layout_no_wrap(
            link.label.clone(),
            egui::FontId::proportional(theme.small_size * scale),
            text_color,
        );
        let link_rect = egui::Rect::from_min_size(
            egui::pos2(x - galley.rect.width(), bar.center().y - galley.rect.height() / 2.0),
            galley.rect.size(),
        );
        let color = if input.hovers(link_rect.expand(4.0 * scale)) {
            theme.accent
        } else {
            text_color
        };
        painter.galley(link_rect.min, galley, color);
        if input.clicked_in(link_rect.expand(4.0 * scale)) {
            response.nav_to = Some(link.section);
        }
        x = link_rect.left() - 28.0 * scale;
    }

    response
}

/// Big centered section heading with an accent underline. Returns the
/// y where section content starts.
pub fn section_title(
    ui: &egui::Ui,
    text: &str,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
) -> f32 {
    let painter = ui.painter();
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(theme.section_title_size * scale),
        theme.heading_color,
    );
    let top = rect.top() + SECTION_PADDING * scale;
    painter.galley(
        egui::pos2(rect.center().x - galley.rect.width() / 2.0, top),
        galley,
        theme.heading_color,
    );
    let underline = egui::Rect::from_center_size(
        egui::pos2(rect.center().x, top + 64.0 * scale),
        egui::vec2(60.0 * scale, 4.0 * scale),
    );
    painter.rect_filled(underline, 2.0 * scale, theme.accent);
    rect.top() + (SECTION_PADDING + TITLE_BLOCK) * scale
}

/// Footer band at the very bottom of the page.
pub fn draw_footer(ui: &egui::Ui, text: &str, theme: &Theme, rect: egui::Rect, scale: f32) {
    let band = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), FOOTER_H * scale));
    let painter = ui.painter();
    painter.rect_filled(band, 0.0, theme.card_background);
    let color = Theme::with_opacity(theme.foreground, 0.55);
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(theme.small_size * scale),
        color,
    );
    painter.galley(
        egui::pos2(
            band.center().x - galley.rect.width() / 2.0,
            band.center().y - galley.rect.height() / 2.0,
        ),
        galley,
        color,
    );
}
