use eframe::egui;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::booking::BookingModal;
use crate::carousel::{Carousel, Direction, SwipeTracker, AUTO_ADVANCE_INTERVAL};
use crate::config::Config;
use crate::contact::{ContactForm, SENT_ALERT};
use crate::content::{SectionId, Showcase};
use crate::menu::MenuDrawer;
use crate::render::hero::HeroFade;
use crate::render::image_cache::ImageCache;
use crate::render::{
    chrome, contact_form, gallery, hero, overlay, packages, videos, PageInput, PageLayout,
};
use crate::reveal::{RevealSet, REVEAL_BOTTOM_MARGIN, REVEAL_THRESHOLD};
use crate::theme::Theme;
use crate::video::VideoTile;
use crate::watcher::ShowcaseWatcher;

/// Scroll depth past which the header switches to its solid look.
const HEADER_SCROLL_THRESHOLD: f32 = 100.0;

/// Hero visuals move at half scroll speed.
const PARALLAX_FACTOR: f32 = 0.5;

/// Whole-page fade after launch or a content reload.
const STARTUP_FADE: Duration = Duration::from_millis(800);

pub struct ShowcaseApp {
    showcase: Showcase,
    file_path: PathBuf,
    theme: Theme,
    fallback_theme: Option<String>,
    interval: Duration,

    carousel: Carousel,
    hero_fade: HeroFade,
    swipe: SwipeTracker,
    menu: MenuDrawer,
    booking: BookingModal,
    contact: ContactForm,
    gallery_reveal: RevealSet,
    package_reveal: RevealSet,
    videos: Vec<VideoTile>,
    alert: Option<String>,

    image_cache: ImageCache,
    watcher: Option<ShowcaseWatcher>,

    scroll_offset: f32,
    scroll_target: f32,
    drawer_openness: f32,
    // Screen rect the hero occupied last frame, for swipe capture.
    hero_screen_rect: egui::Rect,
    loaded_at: Instant,
}

impl ShowcaseApp {
    fn new(
        showcase: Showcase,
        file_path: PathBuf,
        fallback_theme: Option<String>,
        interval: Duration,
        watcher: Option<ShowcaseWatcher>,
    ) -> Self {
        let now = Instant::now();
        let theme = Theme::from_name(
            showcase
                .brand
                .theme
                .as_deref()
                .or(fallback_theme.as_deref())
                .unwrap_or("light"),
        );
        let base = file_path.parent().unwrap_or(Path::new(".")).to_path_buf();
        Self {
            carousel: Carousel::new(showcase.hero.len(), interval, now),
            hero_fade: HeroFade::new(0),
            swipe: SwipeTracker::default(),
            menu: MenuDrawer::new(showcase.nav.clone()),
            booking: BookingModal::default(),
            contact: ContactForm::new(&showcase.brand.name, &showcase.brand.whatsapp),
            gallery_reveal: RevealSet::new(
                showcase.gallery.len(),
                REVEAL_THRESHOLD,
                REVEAL_BOTTOM_MARGIN,
            ),
            package_reveal: RevealSet::new(
                showcase.packages.len(),
                REVEAL_THRESHOLD,
                REVEAL_BOTTOM_MARGIN,
            ),
            videos: showcase
                .videos
                .iter()
                .map(|c| VideoTile::new(c.duration_secs))
                .collect(),
            alert: None,
            image_cache: ImageCache::new(base),
            watcher,
            scroll_offset: 0.0,
            scroll_target: 0.0,
            drawer_openness: 0.0,
            hero_screen_rect: egui::Rect::NOTHING,
            loaded_at: now,
            theme,
            fallback_theme,
            interval,
            showcase,
            file_path,
        }
    }

    /// Rebuild every content-derived state. This is the kiosk analog of
    /// a page reload: scroll, overlays, and the load fade all reset.
    fn apply_showcase(&mut self, showcase: Showcase, now: Instant) {
        self.theme = Theme::from_name(
            showcase
                .brand
                .theme
                .as_deref()
                .or(self.fallback_theme.as_deref())
                .unwrap_or("light"),
        );
        self.carousel = Carousel::new(showcase.hero.len(), self.interval, now);
        self.hero_fade = HeroFade::new(0);
        self.swipe = SwipeTracker::default();
        self.menu = MenuDrawer::new(showcase.nav.clone());
        self.booking = BookingModal::default();
        self.contact = ContactForm::new(&showcase.brand.name, &showcase.brand.whatsapp);
        self.gallery_reveal = RevealSet::new(
            showcase.gallery.len(),
            REVEAL_THRESHOLD,
            REVEAL_BOTTOM_MARGIN,
        );
        self.package_reveal = RevealSet::new(
            showcase.packages.len(),
            REVEAL_THRESHOLD,
            REVEAL_BOTTOM_MARGIN,
        );
        self.videos = showcase
            .videos
            .iter()
            .map(|c| VideoTile::new(c.duration_secs))
            .collect();
        self.alert = None;
        let base = self.file_path.parent().unwrap_or(Path::new(".")).to_path_buf();
        self.image_cache = ImageCache::new(base);
        self.scroll_offset = 0.0;
        self.scroll_target = 0.0;
        self.drawer_openness = 0.0;
        self.hero_screen_rect = egui::Rect::NOTHING;
        self.loaded_at = now;
        self.showcase = showcase;
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        let ref_w = 1920.0;
        let ref_h = 1080.0;
        (rect.width() / ref_w).min(rect.height() / ref_h)
    }

    /// Remaining opacity of the startup cover, 0 once the fade is done.
    fn startup_cover(&self, now: Instant) -> f32 {
        let t = now.saturating_duration_since(self.loaded_at).as_secs_f32()
            / STARTUP_FADE.as_secs_f32();
        1.0 - t.clamp(0.0, 1.0)
    }

    fn visuals(&self) -> egui::Visuals {
        if self.theme.name == "dark" {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }

    fn reveals_animating(&self, now: Instant) -> bool {
        let running = |set: &RevealSet| {
            (0..set.len()).any(|i| set.is_revealed(i) && set.progress(i, now) < 1.0)
        };
        running(&self.gallery_reveal) || running(&self.package_reveal)
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Content hot reload; failures keep the previous showcase.
        if self.watcher.as_ref().is_some_and(|w| w.poll_changed()) {
            match Showcase::load(&self.file_path) {
                Ok(showcase) => {
                    tracing::info!(file = %self.file_path.display(), "showcase reloaded");
                    self.apply_showcase(showcase, now);
                    ctx.set_visuals(self.visuals());
                }
                Err(e) => tracing::error!("reload failed, keeping previous content: {e:#}"),
            }
        }

        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let locks_scroll =
            self.menu.locks_scroll() || self.booking.locks_scroll() || self.alert.is_some();

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
                return;
            }
            // Escape unwinds the overlay stack one layer at a time.
            if i.key_pressed(egui::Key::Escape) {
                if self.alert.take().is_some() {
                    return;
                }
                if self.booking.is_open() {
                    self.booking.close();
                    return;
                }
                if self.menu.is_open() {
                    self.menu.toggle();
                }
                return;
            }

            // Arrow keys reach the carousel even with an overlay up,
            // matching a document-level key listener.
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.carousel.advance(Direction::Previous, now);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.carousel.advance(Direction::Next, now);
            }

            let scroll = i.smooth_scroll_delta;
            if scroll.y != 0.0 && !locks_scroll {
                self.scroll_target -= scroll.y;
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        // Pointer state sampled once; swipes only ever start on the hero.
        let (pointer, clicked, pressed, released) = ctx.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.primary_clicked(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
            )
        });

        let overlay_up = self.alert.is_some() || self.booking.is_open() || self.menu.is_open();
        if let Some(pos) = pointer {
            if pressed && !overlay_up && self.hero_screen_rect.contains(pos) {
                self.swipe.begin(pos.x, pos.y);
            }
            if released {
                if let Some(direction) = self.swipe.release(pos.x, pos.y) {
                    self.carousel.advance(direction, now);
                }
            }
        }

        // Timers.
        self.carousel.tick(now);
        if let Some(url) = self.contact.tick(now) {
            if let Err(e) = open::that(url.as_str()) {
                tracing::error!("failed to open {url}: {e}");
            }
            self.alert = Some(SENT_ALERT.to_string());
        }
        for tile in &mut self.videos {
            tile.tick(now);
        }

        self.hero_fade.sync(self.carousel.current(), now);

        // Drawer slides toward its open state.
        let drawer_target = if self.menu.is_open() { 1.0 } else { 0.0 };
        let diff = drawer_target - self.drawer_openness;
        if diff.abs() < 0.01 {
            self.drawer_openness = drawer_target;
        } else {
            self.drawer_openness += diff * 0.15;
            ctx.request_repaint();
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                let scale = Self::compute_scale(rect);
                let layout = PageLayout::compute(&self.showcase, rect.height(), scale);

                // Animate scroll toward target
                self.scroll_target = self
                    .scroll_target
                    .clamp(0.0, layout.max_scroll(rect.height()));
                let diff = self.scroll_target - self.scroll_offset;
                if diff.abs() < 0.5 {
                    self.scroll_offset = self.scroll_target;
                } else {
                    // Smooth ease: move 15% of remaining distance each frame
                    self.scroll_offset += diff * 0.15;
                    ctx.request_repaint();
                }
                let scroll = self.scroll_offset;

                let interactive =
                    self.alert.is_none() && !self.booking.is_open() && !self.menu.is_open();
                let input = PageInput {
                    pointer,
                    clicked,
                    interactive,
                };

                let mut nav_to: Option<SectionId> = None;

                for (id, doc_rect) in layout.sections(rect.width()) {
                    let screen = egui::Rect::from_min_size(
                        egui::pos2(rect.left(), rect.top() + doc_rect.top() - scroll),
                        doc_rect.size(),
                    );
                    if id == SectionId::Home {
                        self.hero_screen_rect = screen;
                    }
                    if !screen.intersects(rect) {
                        if id == SectionId::Home {
                            // Scrolled fully past: the pointer has left it.
                            self.carousel.set_hovered(false, now);
                        }
                        continue;
                    }
                    match id {
                        SectionId::Home => {
                            let response = hero::render(
                                ui,
                                &self.showcase.brand,
                                &self.showcase.hero,
                                &self.carousel,
                                &self.hero_fade,
                                &self.theme,
                                screen,
                                scroll * PARALLAX_FACTOR,
                                &self.image_cache,
                                &input,
                                now,
                                scale,
                            );
                            self.carousel.set_hovered(response.hovered, now);
                            if let Some(direction) = response.advance {
                                self.carousel.advance(direction, now);
                            }
                            if let Some(index) = response.go_to {
                                self.carousel.go_to(index, now);
                            }
                        }
                        SectionId::Gallery => {
                            let rects = gallery::render(
                                ui,
                                &self.showcase.gallery,
                                &self.gallery_reveal,
                                &self.theme,
                                screen,
                                &self.image_cache,
                                now,
                                scale,
                            );
                            for (i, item_rect) in rects.iter().enumerate() {
                                self.gallery_reveal.observe(i, *item_rect, rect, now);
                            }
                        }
                        SectionId::Packages => {
                            let response = packages::render(
                                ui,
                                &self.showcase.packages,
                                &self.package_reveal,
                                &self.theme,
                                screen,
                                &input,
                                now,
                                scale,
                            );
                            for (i, card_rect) in response.card_rects.iter().enumerate() {
                                self.package_reveal.observe(i, *card_rect, rect, now);
                            }
                            if let Some(name) = response.book {
                                self.booking.open_for(&name);
                            }
                        }
                        SectionId::Videos => {
                            let response = videos::render(
                                ui,
                                &self.showcase.videos,
                                &self.videos,
                                &self.theme,
                                screen,
                                &self.image_cache,
                                &input,
                                now,
                                scale,
                            );
                            for (i, hovered) in response.hovered.iter().enumerate() {
                                if let Some(tile) = self.videos.get_mut(i) {
                                    tile.set_hovered(*hovered, now);
                                }
                            }
                            if let Some(i) = response.toggled {
                                if let Some(tile) = self.videos.get_mut(i) {
                                    tile.toggle(now);
                                }
                            }
                        }
                        SectionId::Contact => {
                            let intro = self
                                .showcase
                                .contact
                                .as_ref()
                                .map(|c| c.intro.as_str())
                                .unwrap_or("");
                            let package_names: Vec<String> = self
                                .showcase
                                .packages
                                .iter()
                                .map(|p| p.name.clone())
                                .collect();
                            let submitted = contact_form::render(
                                ui,
                                &mut self.contact,
                                intro,
                                &package_names,
                                &self.theme,
                                screen,
                                interactive,
                                scale,
                            );
                            if submitted {
                                if let Err(message) = self.contact.submit(now) {
                                    self.alert = Some(message.to_string());
                                }
                            }
                        }
                    }
                }

                // Footer.
                let footer_screen = egui::Rect::from_min_size(
                    egui::pos2(rect.left(), rect.top() + layout.footer_top() - scroll),
                    egui::vec2(rect.width(), layout.total_height() - layout.footer_top()),
                );
                if footer_screen.intersects(rect) {
                    let text = self.showcase.brand.footer.clone().unwrap_or_else(|| {
                        format!("© {}. All rights reserved.", self.showcase.brand.name)
                    });
                    chrome::draw_footer(ui, &text, &self.theme, footer_screen, scale);
                }

                // Fixed header over everything scrolled.
                let header = chrome::draw_header(
                    ui,
                    &self.showcase.brand,
                    &self.showcase.nav,
                    scroll > HEADER_SCROLL_THRESHOLD,
                    &self.theme,
                    rect,
                    &input,
                    scale,
                );
                if header.hamburger {
                    self.menu.toggle();
                }
                if let Some(id) = header.nav_to {
                    nav_to = Some(id);
                }

                // Overlay stack: drawer, then modal, then alert on top.
                if self.drawer_openness > 0.005 {
                    let drawer_clicks = clicked
                        && self.menu.is_open()
                        && !self.booking.is_open()
                        && self.alert.is_none();
                    let drawer = overlay::draw_drawer(
                        ui,
                        self.menu.links(),
                        &self.theme,
                        rect,
                        self.drawer_openness,
                        pointer,
                        drawer_clicks,
                        scale,
                    );
                    if drawer.toggle {
                        self.menu.toggle();
                    }
                    if let Some(id) = drawer.nav_to {
                        // Drawer links route through the same toggle as
                        // the hamburger.
                        self.menu.toggle();
                        nav_to = Some(id);
                    }
                }

                if let Some(package) = self.booking.package().map(str::to_string) {
                    let modal = overlay::draw_booking_modal(
                        ui,
                        &package,
                        &self.theme,
                        rect,
                        pointer,
                        clicked && self.alert.is_none(),
                        scale,
                    );
                    if modal.close {
                        self.booking.close();
                    }
                    if modal.to_contact {
                        self.booking.close();
                        self.contact.preselect_package(&package);
                        nav_to = Some(SectionId::Contact);
                    }
                }

                if let Some(message) = self.alert.clone() {
                    if overlay::draw_alert(ui, &message, &self.theme, rect, pointer, clicked, scale)
                    {
                        self.alert = None;
                    }
                }

                // Load fade covers the whole page, chrome included.
                let cover = self.startup_cover(now);
                if cover > 0.0 {
                    ui.painter()
                        .rect_filled(rect, 0.0, Theme::with_opacity(bg, cover));
                    ctx.request_repaint();
                }

                if let Some(id) = nav_to {
                    if let Some(top) = layout.top_of(id) {
                        self.scroll_target = top;
                    }
                }
            });

        // Animations started inside the panel (nav scroll, drawer
        // toggle) still need a next frame.
        let drawer_target = if self.menu.is_open() { 1.0 } else { 0.0 };
        if self.hero_fade.is_animating(now)
            || self.contact.is_sending()
            || self.videos.iter().any(|v| v.is_playing())
            || self.reveals_animating(now)
            || self.scroll_offset != self.scroll_target
            || self.drawer_openness != drawer_target
        {
            ctx.request_repaint();
        }
        if let Some(deadline) = self.carousel.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

pub fn run(file: PathBuf, windowed: bool, interval: Option<u64>) -> anyhow::Result<()> {
    let showcase = Showcase::load(&file)?;

    let config = Config::load_or_default();
    let defaults = config.defaults.as_ref();
    let fallback_theme = defaults.and_then(|d| d.theme.clone());
    let interval = interval
        .or_else(|| defaults.and_then(|d| d.interval))
        .map(Duration::from_secs)
        .unwrap_or(AUTO_ADVANCE_INTERVAL);

    let watcher = match ShowcaseWatcher::new(&file) {
        Ok(w) => Some(w),
        Err(e) => {
            tracing::warn!("hot reload disabled: {e:#}");
            None
        }
    };

    let title = showcase.brand.name.clone();
    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let app = ShowcaseApp::new(showcase, file, fallback_theme, interval, watcher);
            cc.egui_ctx.set_visuals(app.visuals());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
