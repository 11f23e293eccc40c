use eframe::egui;

use crate::content::{NavLink, SectionId};
use crate::theme::Theme;

pub struct DrawerResponse {
    /// Scrim or close control clicked.
    pub toggle: bool,
    /// Drawer link clicked; the caller toggles the drawer and scrolls.
    pub nav_to: Option<SectionId>,
}

/// Slide-in navigation drawer over a dimming scrim. `openness` animates
/// 0..=1; clicks are only delivered while the drawer is logically open.
pub fn draw_drawer(
    ui: &egui::Ui,
    links: &[NavLink],
    theme: &Theme,
    viewport: egui::Rect,
    openness: f32,
    pointer: Option<egui::Pos2>,
    clicked: bool,
    scale: f32,
) -> DrawerResponse {
    let mut response = DrawerResponse {
        toggle: false,
        nav_to: None,
    };
    let painter = ui.painter();

    painter.rect_filled(
        viewport,
        0.0,
        Theme::with_opacity(egui::Color32::BLACK, 0.55 * openness),
    );

    let width = 300.0 * scale;
    let panel = egui::Rect::from_min_size(
        egui::pos2(viewport.right() - width * openness, viewport.top()),
        egui::vec2(width, viewport.height()),
    );
    painter.rect_filled(panel, 0.0, theme.background);

    // Close control.
    let close_rect = egui::Rect::from_center_size(
        egui::pos2(panel.right() - 32.0 * scale, panel.top() + 32.0 * scale),
        egui::vec2(32.0 * scale, 32.0 * scale),
    );
    let hovers = |rect: egui::Rect| pointer.is_some_and(|p| rect.contains(p));
    let close_color = if hovers(close_rect) {
        theme.accent
    } else {
        Theme::with_opacity(theme.foreground, 0.7)
    };
    let glyph = painter.layout_no_wrap(
        "\u{2715}".to_string(),
        egui::FontId::proportional(20.0 * scale),
        close_color,
    );
    painter.galley(
        egui::pos2(
            close_rect.center().x - glyph.rect.width() / 2.0,
            close_rect.center().y - glyph.rect.height() / 2.0,
        ),
        glyph,
        close_color,
    );

    let mut y = panel.top() + 96.0 * scale;
    let mut link_hits = Vec::with_capacity(links.len());
    for link in links {
        let galley = painter.layout_no_wrap(
            link.label.clone(),
            egui::FontId::proportional(19.0 * scale),
            theme.foreground,
        );
        let link_rect = egui::Rect::from_min_size(
            egui::pos2(panel.left() + 32.0 * scale, y),
            egui::vec2(panel.width() - 64.0 * scale, galley.rect.height() + 12.0 * scale),
        );
        let color = if hovers(link_rect) {
            theme.accent
        } else {
            theme.foreground
        };
        painter.galley(egui::pos2(link_rect.left(), link_rect.top()), galley, color);
        link_hits.push((link_rect, link.section));
        y += 52.0 * scale;
    }

    if clicked {
        if hovers(close_rect) {
            response.toggle = true;
        } else if let Some((_, section)) = link_hits.iter().find(|(rect, _)| hovers(*rect)) {
            response.nav_to = Some(*section);
        } else if pointer.is_some_and(|p| !panel.contains(p)) {
            response.toggle = true;
        }
    }

    response
}

pub struct ModalResponse {
    pub close: bool,
    pub to_contact: bool,
}

/// Centered booking dialog for a package. Closed by the close control
/// or a click outside the panel.
pub fn draw_booking_modal(
    ui: &egui::Ui,
    package: &str,
    theme: &Theme,
    viewport: egui::Rect,
    pointer: Option<egui::Pos2>,
    clicked: bool,
    scale: f32,
) -> ModalResponse {
    let mut response = ModalResponse {
        close: false,
        to_contact: false,
    };
    let painter = ui.painter();

    painter.rect_filled(
        viewport,
        0.0,
        Theme::with_opacity(egui::Color32::BLACK, 0.55),
    );

    let panel = egui::Rect::from_center_size(
        viewport.center(),
        egui::vec2((viewport.width() * 0.9).min(480.0 * scale), 300.0 * scale),
    );
    painter.rect_filled(panel, 12.0 * scale, theme.background);

    let hovers = |rect: egui::Rect| pointer.is_some_and(|p| rect.contains(p));

    let close_rect = egui::Rect::from_center_size(
        egui::pos2(panel.right() - 28.0 * scale, panel.top() + 28.0 * scale),
        egui::vec2(28.0 * scale, 28.0 * scale),
    );
    let close_color = if hovers(close_rect) {
        theme.accent
    } else {
        Theme::with_opacity(theme.foreground, 0.6)
    };
    let glyph = painter.layout_no_wrap(
        "\u{2715}".to_string(),
        egui::FontId::proportional(18.0 * scale),
        close_color,
    );
    painter.galley(
        egui::pos2(
            close_rect.center().x - glyph.rect.width() / 2.0,
            close_rect.center().y - glyph.rect.height() / 2.0,
        ),
        glyph,
        close_color,
    );

    let title = painter.layout_no_wrap(
        "Book This Package".to_string(),
        egui::FontId::proportional(26.0 * scale),
        theme.heading_color,
    );
    painter.galley(
        egui::pos2(
            panel.center().x - title.rect.width() / 2.0,
            panel.top() + 40.0 * scale,
        ),
        title,
        theme.heading_color,
    );

    let name = painter.layout_no_wrap(
        package.to_string(),
        egui::FontId::proportional(21.0 * scale),
        theme.accent,
    );
    painter.galley(
        egui::pos2(
            panel.center().x - name.rect.width() / 2.0,
            panel.top() + 92.0 * scale,
        ),
        name,
        theme.accent,
    );

    let body_color = Theme::with_opacity(theme.foreground, 0.8);
    let body = painter.layout(
        "Tell us your dates and group size in the contact form and we \
         will confirm availability within a day."
            .to_string(),
        egui::FontId::proportional(theme.small_size * scale),
        body_color,
        panel.width() - 80.0 * scale,
    );
    painter.galley(
        egui::pos2(
            panel.center().x - body.rect.width() / 2.0,
            panel.top() + 136.0 * scale,
        ),
        body,
        body_color,
    );

    let button_rect = egui::Rect::from_center_size(
        egui::pos2(panel.center().x, panel.bottom() - 52.0 * scale),
        egui::vec2(panel.width() - 80.0 * scale, 48.0 * scale),
    );
    let fill = if hovers(button_rect) { 1.0 } else { 0.9 };
    painter.rect_filled(
        button_rect,
        8.0 * scale,
        Theme::with_opacity(theme.accent, fill),
    );
    let label = painter.layout_no_wrap(
        "Continue to Contact Form".to_string(),
        egui::FontId::proportional(theme.body_size * 0.85 * scale),
        egui::Color32::WHITE,
    );
    painter.galley(
        egui::pos2(
            button_rect.center().x - label.rect.width() / 2.0,
            button_rect.center().y - label.rect.height() / 2.0,
        ),
        label,
        egui::Color32::WHITE,
    );

    if clicked {
        if hovers(close_rect) {
            response.close = true;
        } else if hovers(button_rect) {
            response.to_contact = true;
        } else if pointer.is_some_and(|p| !panel.contains(p)) {
            response.close = true;
        }
    }

    response
}

/// Blocking alert with a single OK control. Returns true when
/// dismissed.
pub fn draw_alert(
    ui: &egui::Ui,
    message: &str,
    theme: &Theme,
    viewport: egui::Rect,
    pointer: Option<egui::Pos2>,
    clicked: bool,
    scale: f32,
) -> bool {
    let painter = ui.painter();
    painter.rect_filled(
        viewport,
        0.0,
        Theme::with_opacity(egui::Color32::BLACK, 0.6),
    );

    let panel = egui::Rect::from_center_size(
        viewport.center(),
        egui::vec2((viewport.width() * 0.9).min(420.0 * scale), 180.0 * scale),
    );
    painter.rect_filled(panel, 12.0 * scale, theme.background);

    let text = painter.layout(
        message.to_string(),
        egui::FontId::proportional(theme.body_size * 0.85 * scale),
        theme.foreground,
        panel.width() - 64.0 * scale,
    );
    painter.galley(
        egui::pos2(
            panel.center().x - text.rect.width() / 2.0,
            panel.top() + 36.0 * scale,
        ),
        text,
        theme.foreground,
    );

    let button_rect = egui::Rect::from_center_size(
        egui::pos2(panel.center().x, panel.bottom() - 44.0 * scale),
        egui::vec2(120.0 * scale, 40.0 * scale),
    );
    let hovered = pointer.is_some_and(|p| button_rect.contains(p));
    painter.rect_filled(
        button_rect,
        8.0 * scale,
        Theme::with_opacity(theme.accent, if hovered { 1.0 } else { 0.9 }),
    );
    let ok = painter.layout_no_wrap(
        "OK".to_string(),
        egui::FontId::proportional(theme.body_size * 0.85 * scale),
        egui::Color32::WHITE,
    );
    painter.galley(
        egui::pos2(
            button_rect.center().x - ok.rect.width() / 2.0,
            button_rect.center().y - ok.rect.height() / 2.0,
        ),
        ok,
        egui::Color32::WHITE,
    );

    clicked && hovered
}
