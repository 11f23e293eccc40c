use eframe::egui;
use std::time::{Duration, Instant};

use crate::carousel::{Carousel, Direction};
use crate::content::{Brand, HeroSlide};
use crate::render::image_cache::{self, ImageCache};
use crate::render::PageInput;
use crate::theme::Theme;

/// Crossfade length between hero slides.
pub const FADE_DURATION: Duration = Duration::from_millis(1000);

/// Follows the controller's index and fades index changes.
///
/// The controller itself switches instantly; this keeps just enough
/// state to draw the outgoing slide underneath the incoming one.
#[derive(Debug)]
pub struct HeroFade {
    current: usize,
    from: Option<(usize, Instant)>,
}

impl HeroFade {
    pub fn new(index: usize) -> Self {
        Self {
            current: index,
            from: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Track the controller's index; a change starts a crossfade from
    /// whatever was on screen.
    pub fn sync(&mut self, target: usize, now: Instant) {
        if target != self.current {
            self.from = Some((self.current, now));
            self.current = target;
        }
    }

    /// Opacity of the incoming slide, eased, in `0..=1`.
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.from {
            None => 1.0,
            Some((_, start)) => {
                let t = (now.saturating_duration_since(start).as_secs_f32()
                    / FADE_DURATION.as_secs_f32())
                .clamp(0.0, 1.0);
                ease_in_out(t)
            }
        }
    }

    /// The slide fading out, while the crossfade is still running.
    pub fn outgoing(&self, now: Instant) -> Option<usize> {
        match self.from {
            Some((from, _)) if self.opacity(now) < 1.0 => Some(from),
            _ => None,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.outgoing(now).is_some()
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

pub struct HeroResponse {
    pub advance: Option<Direction>,
    pub go_to: Option<usize>,
    pub hovered: bool,
}

/// Draw the hero: crossfading slides with a parallax shift, side
/// arrows, and one indicator dot per slide when there is more than one.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    brand: &Brand,
    slides: &[HeroSlide],
    carousel: &Carousel,
    fade: &HeroFade,
    theme: &Theme,
    rect: egui::Rect,
    parallax: f32,
    image_cache: &ImageCache,
    input: &PageInput,
    now: Instant,
    scale: f32,
) -> HeroResponse {
    let mut response = HeroResponse {
        advance: None,
        go_to: None,
        hovered: input.hovers(rect),
    };

    // Slide visuals shift down at half scroll speed; clip so the
    // overflow never bleeds into the next section.
    let painter = ui.painter().with_clip_rect(rect);
    let visual_rect = rect.translate(egui::vec2(0.0, parallax));

    if slides.is_empty() {
        painter.rect_filled(rect, 0.0, theme.card_background);
        draw_centered(
            &painter,
            &brand.name,
            egui::FontId::proportional(theme.hero_title_size * scale),
            Theme::with_opacity(theme.heading_color, 0.9),
            egui::pos2(rect.center().x, rect.center().y - 30.0 * scale),
        );
        if !brand.tagline.is_empty() {
            draw_centered(
                &painter,
                &brand.tagline,
                egui::FontId::proportional(theme.body_size * scale),
                Theme::with_opacity(theme.foreground, 0.8),
                egui::pos2(rect.center().x, rect.center().y + 40.0 * scale),
            );
        }
        return response;
    }

    let incoming = fade.opacity(now);
    if let Some(outgoing) = fade.outgoing(now) {
        if let Some(slide) = slides.get(outgoing) {
            draw_slide(
                &painter,
                ui.ctx(),
                slide,
                theme,
                visual_rect,
                1.0 - incoming,
                image_cache,
                scale,
            );
        }
    }
    if let Some(slide) = slides.get(fade.current()) {
        draw_slide(
            &painter,
            ui.ctx(),
            slide,
            theme,
            visual_rect,
            incoming,
            image_cache,
            scale,
        );
    }

    // Prev/next arrows.
    let arrow_r = 28.0 * scale;
    let arrows = [
        (Direction::Previous, "\u{2039}", rect.left() + 48.0 * scale),
        (Direction::Next, "\u{203A}", rect.right() - 48.0 * scale),
    ];
    for (direction, glyph, x) in arrows {
        let center = egui::pos2(x, rect.center().y);
        let hit = egui::Rect::from_center_size(center, egui::vec2(arrow_r * 2.0, arrow_r * 2.0));
        let bg_opacity = if input.hovers(hit) { 0.45 } else { 0.25 };
        ui.painter().circle_filled(
            center,
            arrow_r,
            Theme::with_opacity(egui::Color32::BLACK, bg_opacity),
        );
        draw_centered(
            ui.painter(),
            glyph,
            egui::FontId::proportional(34.0 * scale),
            egui::Color32::WHITE,
            egui::pos2(center.x, center.y - 3.0 * scale),
        );
        if input.clicked_in(hit) {
            response.advance = Some(direction);
        }
    }

    // Indicator dots, one per slide.
    if slides.len() > 1 {
        let dot_r = 6.0 * scale;
        let gap = 22.0 * scale;
        let total = (slides.len() - 1) as f32 * gap;
        let y = rect.bottom() - 36.0 * scale;
        for i in 0..slides.len() {
            let center = egui::pos2(rect.center().x - total / 2.0 + i as f32 * gap, y);
            let color = if carousel.is_active(i) {
                theme.accent
            } else {
                Theme::with_opacity(egui::Color32::WHITE, 0.5)
            };
            ui.painter().circle_filled(center, dot_r, color);
            let hit = egui::Rect::from_center_size(center, egui::vec2(20.0 * scale, 20.0 * scale));
            if input.clicked_in(hit) {
                response.go_to = Some(i);
            }
        }
    }

    response
}

#[allow(clippy::too_many_arguments)]
fn draw_slide(
    painter: &egui::Painter,
    ctx: &egui::Context,
    slide: &HeroSlide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    image_cache: &ImageCache,
    scale: f32,
) {
    if opacity <= 0.0 {
        return;
    }
    let tint = Theme::with_opacity(egui::Color32::WHITE, opacity);
    match slide.image.as_deref().and_then(|p| image_cache.get(ctx, p)) {
        Some(texture) => image_cache::draw_cover(painter, &texture, rect, tint),
        None => {
            painter.rect_filled(
                rect,
                0.0,
                Theme::with_opacity(theme.card_background, opacity),
            );
        }
    }
    // Darken for text contrast.
    painter.rect_filled(
        rect,
        0.0,
        Theme::with_opacity(egui::Color32::BLACK, 0.35 * opacity),
    );

    draw_centered(
        painter,
        &slide.title,
        egui::FontId::proportional(theme.hero_title_size * scale),
        Theme::with_opacity(egui::Color32::WHITE, opacity),
        egui::pos2(rect.center().x, rect.center().y - 30.0 * scale),
    );
    if !slide.caption.is_empty() {
        draw_centered(
            painter,
            &slide.caption,
            egui::FontId::proportional((theme.body_size + 4.0) * scale),
            Theme::with_opacity(egui::Color32::WHITE, 0.85 * opacity),
            egui::pos2(rect.center().x, rect.center().y + 50.0 * scale),
        );
    }
}

fn draw_centered(
    painter: &egui::Painter,
    text: &str,
    font: egui::FontId,
    color: egui::Color32,
    center: egui::Pos2,
) {
    let galley = painter.layout_no_wrap(text.to_string(), font, color);
    let pos = egui::pos2(
        center.x - galley.rect.width() / 2.0,
        center.y - galley.rect.height() / 2.0,
    );
    painter.galley(pos, galley, color);
}
