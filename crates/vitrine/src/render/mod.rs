pub mod chrome;
pub mod contact_form;
pub mod gallery;
pub mod hero;
pub mod image_cache;
pub mod overlay;
pub mod packages;
pub mod videos;

use eframe::egui;

use crate::content::{SectionId, Showcase};

/// Header bar height in unscaled points.
pub const HEADER_HEIGHT: f32 = 64.0;

/// Vertical padding above and below each section, unscaled.
pub const SECTION_PADDING: f32 = 80.0;

pub(crate) const TITLE_BLOCK: f32 = 96.0;
pub(crate) const GALLERY_CELL_H: f32 = 240.0;
pub(crate) const PACKAGE_CARD_H: f32 = 460.0;
pub(crate) const VIDEO_TILE_H: f32 = 300.0;
pub(crate) const CONTACT_FORM_H: f32 = 560.0;
pub(crate) const FOOTER_H: f32 = 90.0;
pub(crate) const GRID_GAP: f32 = 20.0;

/// Pointer state handed to the section renderers.
///
/// `interactive` is false while an overlay (drawer, modal, alert) sits
/// on top of the page; hover and clicks then stop reaching page
/// content, the way an overlay element swallows them.
#[derive(Debug, Clone, Copy)]
pub struct PageInput {
    pub pointer: Option<egui::Pos2>,
    pub clicked: bool,
    pub interactive: bool,
}

impl PageInput {
    pub fn hovers(&self, rect: egui::Rect) -> bool {
        self.interactive && self.pointer.is_some_and(|p| rect.contains(p))
    }

    pub fn clicked_in(&self, rect: egui::Rect) -> bool {
        self.clicked && self.hovers(rect)
    }
}

/// Where each section starts in document coordinates (y = 0 at the top
/// of the hero, before scrolling).
#[derive(Debug)]
pub struct PageLayout {
    sections: Vec<(SectionId, f32, f32)>,
    footer_top: f32,
    total_height: f32,
}

impl PageLayout {
    pub fn compute(showcase: &Showcase, viewport_height: f32, scale: f32) -> Self {
        let mut sections = Vec::new();
        let mut y = 0.0;
        for id in showcase.sections() {
            let height = match id {
                SectionId::Home => viewport_height,
                SectionId::Gallery => {
                    grid_section_height(showcase.gallery.len(), 3, GALLERY_CELL_H, scale)
                }
                SectionId::Packages => {
                    grid_section_height(showcase.packages.len(), 3, PACKAGE_CARD_H, scale)
                }
                SectionId::Videos => {
                    grid_section_height(showcase.videos.len(), 2, VIDEO_TILE_H, scale)
                }
                SectionId::Contact => {
                    (SECTION_PADDING * 2.0 + TITLE_BLOCK + CONTACT_FORM_H) * scale
                }
            };
            sections.push((id, y, height));
            y += height;
        }
        Self {
            sections,
            footer_top: y,
            total_height: y + FOOTER_H * scale,
        }
    }

    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    pub fn footer_top(&self) -> f32 {
        self.footer_top
    }

    pub fn top_of(&self, id: SectionId) -> Option<f32> {
        self.sections
            .iter()
            .find(|(s, _, _)| *s == id)
            .map(|(_, top, _)| *top)
    }

    /// Sections with their document rects, for culling and drawing.
    pub fn sections(&self, width: f32) -> impl Iterator<Item = (SectionId, egui::Rect)> + '_ {
        self.sections.iter().map(move |(id, top, height)| {
            (
                *id,
                egui::Rect::from_min_size(egui::pos2(0.0, *top), egui::vec2(width, *height)),
            )
        })
    }

    /// Furthest the page can scroll.
    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.total_height - viewport_height).max(0.0)
    }
}

fn grid_section_height(count: usize, cols: usize, cell_h: f32, scale: f32) -> f32 {
    let rows = count.div_ceil(cols).max(1);
    (SECTION_PADDING * 2.0
        + TITLE_BLOCK
        + rows as f32 * cell_h
        + (rows as f32 - 1.0) * GRID_GAP)
        * scale
}

pub struct Cell {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Wrapping grid: rows of `cols`, a short last row centered.
pub fn compute_cells(count: usize, cols: usize, width: f32, cell_h: f32, gap: f32) -> Vec<Cell> {
    if count == 0 || cols == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(cols);
    let cell_w = (width - (cols - 1) as f32 * gap) / cols as f32;

    (0..count)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            let items_in_row = if row == rows - 1 {
                count - row * cols
            } else {
                cols
            };
            let row_width = items_in_row as f32 * cell_w + (items_in_row - 1) as f32 * gap;
            let row_offset = (width - row_width) / 2.0;

            Cell {
                x: row_offset + col as f32 * (cell_w + gap),
                y: row as f32 * (cell_h + gap),
                w: cell_w,
                h: cell_h,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Showcase;

    const SAMPLE: &str = include_str!("../../../../sample-showcases/archipelago.yaml");

    #[test]
    fn test_page_layout_is_contiguous() {
        let showcase = Showcase::parse(SAMPLE).expect("sample parses");
        let layout = PageLayout::compute(&showcase, 1080.0, 1.0);
        let sections: Vec<_> = layout.sections(1920.0).collect();
        assert_eq!(sections.first().map(|(id, _)| *id), Some(SectionId::Home));
        let mut expected_top = 0.0;
        for (_, rect) in &sections {
            assert_eq!(rect.top(), expected_top, "sections must stack gaplessly");
            expected_top = rect.bottom();
        }
        assert!(layout.total_height() > expected_top, "footer adds height");
    }

    #[test]
    fn test_hero_fills_the_viewport() {
        let showcase = Showcase::parse(SAMPLE).expect("sample parses");
        let layout = PageLayout::compute(&showcase, 900.0, 1.0);
        let (_, home) = layout
            .sections(1600.0)
            .next()
            .expect("home section present");
        assert_eq!(home.height(), 900.0);
    }

    #[test]
    fn test_top_of_known_and_missing_sections() {
        let showcase = Showcase::parse(SAMPLE).expect("sample parses");
        let layout = PageLayout::compute(&showcase, 1080.0, 1.0);
        assert_eq!(layout.top_of(SectionId::Home), Some(0.0));
        assert!(layout.top_of(SectionId::Contact).is_some());

        let minimal = Showcase::parse("brand:\n  name: T\n  whatsapp: \"1\"\n").expect("parses");
        let layout = PageLayout::compute(&minimal, 1080.0, 1.0);
        assert_eq!(layout.top_of(SectionId::Gallery), None);
    }

    #[test]
    fn test_max_scroll_never_negative() {
        let minimal = Showcase::parse("brand:\n  name: T\n  whatsapp: \"1\"\n").expect("parses");
        let layout = PageLayout::compute(&minimal, 2000.0, 1.0);
        assert_eq!(layout.max_scroll(10_000.0), 0.0);
        assert!(layout.max_scroll(500.0) > 0.0);
    }

    #[test]
    fn test_compute_cells_full_rows() {
        let cells = compute_cells(6, 3, 940.0, 200.0, 20.0);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0].x, 0.0);
        assert_eq!(cells[0].y, 0.0);
        assert_eq!(cells[3].y, 220.0, "second row sits below the first plus gap");
        let cell_w = (940.0 - 2.0 * 20.0) / 3.0;
        assert_eq!(cells[1].x, cell_w + 20.0);
    }

    #[test]
    fn test_compute_cells_centers_short_last_row() {
        let cells = compute_cells(4, 3, 940.0, 200.0, 20.0);
        let cell_w = (940.0 - 2.0 * 20.0) / 3.0;
        let expected_offset = (940.0 - cell_w) / 2.0;
        assert_eq!(cells[3].x, expected_offset, "lone item in last row centers");
    }

    #[test]
    fn test_compute_cells_empty() {
        assert!(compute_cells(0, 3, 940.0, 200.0, 20.0).is_empty());
    }

    #[test]
    fn test_page_input_respects_interactive() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let inside = egui::pos2(50.0, 50.0);
        let active = PageInput {
            pointer: Some(inside),
            clicked: true,
            interactive: true,
        };
        assert!(active.hovers(rect));
        assert!(active.clicked_in(rect));

        let blocked = PageInput {
            interactive: false,
            ..active
        };
        assert!(!blocked.hovers(rect), "overlays swallow hover");
        assert!(!blocked.clicked_in(rect), "overlays swallow clicks");
    }
}
