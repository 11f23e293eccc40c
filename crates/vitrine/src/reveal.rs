use eframe::egui::Rect;
use std::time::{Duration, Instant};

/// Length of the reveal fade/rise animation.
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// How far a revealing element rises, in points.
pub const REVEAL_RISE: f32 = 30.0;

/// Default visible fraction required before an element reveals.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Default dead zone above the viewport's bottom edge, in points.
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

/// One-way reveal latch for a list of scroll-in elements.
///
/// Replaces per-element visibility observers with a single set: each
/// frame the layout reports where an element landed, and once its
/// visible fraction (measured against the viewport minus the bottom
/// margin) meets the threshold it latches revealed and is no longer
/// watched. The latch timestamp drives the fade/rise animation.
#[derive(Debug)]
pub struct RevealSet {
    revealed: Vec<Option<Instant>>,
    threshold: f32,
    bottom_margin: f32,
}

impl RevealSet {
    pub fn new(count: usize, threshold: f32, bottom_margin: f32) -> Self {
        Self {
            revealed: vec![None; count],
            threshold,
            bottom_margin,
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Report where `index` landed this frame. Latches the element
    /// revealed when enough of it sits inside the effective viewport.
    pub fn observe(&mut self, index: usize, item: Rect, viewport: Rect, now: Instant) {
        let Some(slot) = self.revealed.get_mut(index) else {
            return;
        };
        if slot.is_some() {
            return;
        }
        let item_height = item.height();
        if item_height <= 0.0 {
            return;
        }
        let effective_bottom = viewport.max.y - self.bottom_margin;
        let visible = (item.max.y.min(effective_bottom) - item.min.y.max(viewport.min.y)).max(0.0);
        if visible / item_height >= self.threshold {
            *slot = Some(now);
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).is_some_and(|slot| slot.is_some())
    }

    /// Eased animation progress in `0..=1`. Unrevealed elements are 0.
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        let Some(Some(since)) = self.revealed.get(index) else {
            return 0.0;
        };
        let t = (now.saturating_duration_since(*since).as_secs_f32()
            / REVEAL_DURATION.as_secs_f32())
        .clamp(0.0, 1.0);
        ease_out(t)
    }
}

/// Cubic ease-out.
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
