use std::time::{Duration, Instant};

/// Default pause between automatic slide advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(6000);

/// Minimum drag distance, in logical points, for a swipe to register.
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Drives the hero slideshow: one active slide index plus at most one
/// pending auto-advance deadline.
///
/// The deadline is a plain `Option<Instant>`, so a duplicate timer
/// cannot exist: arming overwrites, cancelling clears. The frame loop
/// calls [`Carousel::tick`] every frame and schedules a repaint for
/// [`Carousel::next_deadline`].
#[derive(Debug)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    interval: Duration,
    auto_advance: Option<Instant>,
    hovered: bool,
}

impl Carousel {
    pub fn new(slide_count: usize, interval: Duration, now: Instant) -> Self {
        let mut carousel = Self {
            slide_count,
            current: 0,
            interval,
            auto_advance: None,
            hovered: false,
        };
        if slide_count == 0 {
            tracing::warn!("showcase has no hero slides, carousel disabled");
        } else {
            carousel.start_auto_advance(now);
        }
        carousel
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// True when `index` is the single active slide.
    pub fn is_active(&self, index: usize) -> bool {
        self.slide_count > 0 && index == self.current
    }

    pub fn is_inert(&self) -> bool {
        self.slide_count == 0
    }

    /// Deadline of the pending auto-advance, if one is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.auto_advance
    }

    /// Activate a slide by index. Out-of-range indices (and everything
    /// on an empty carousel) are silently dropped.
    fn display(&mut self, index: usize) {
        if index < self.slide_count {
            self.current = index;
        }
    }

    /// Step one slide in `direction`, wrapping at either end, and buy a
    /// fresh full auto-advance interval.
    pub fn advance(&mut self, direction: Direction, now: Instant) {
        if self.is_inert() {
            return;
        }
        self.cancel_auto_advance();
        let next = (self.current as isize + direction.step())
            .rem_euclid(self.slide_count as isize) as usize;
        self.display(next);
        self.start_auto_advance(now);
    }

    /// Jump straight to `index`. Does not wrap; out-of-range is a no-op
    /// that leaves the pending timer untouched.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if index >= self.slide_count {
            return;
        }
        self.cancel_auto_advance();
        self.display(index);
        self.start_auto_advance(now);
    }

    /// Arm the auto-advance deadline, replacing any pending one.
    pub fn start_auto_advance(&mut self, now: Instant) {
        if self.is_inert() {
            return;
        }
        self.auto_advance = Some(now + self.interval);
    }

    /// Clear the pending deadline. Safe when none is armed.
    pub fn cancel_auto_advance(&mut self) {
        self.auto_advance = None;
    }

    /// Fire the deadline if it is due: advance one slide forward and
    /// re-arm. At most one step per call, no matter how late the frame.
    pub fn tick(&mut self, now: Instant) {
        let Some(deadline) = self.auto_advance else {
            return;
        };
        if now < deadline {
            return;
        }
        let next = (self.current + 1) % self.slide_count;
        self.display(next);
        self.auto_advance = Some(now + self.interval);
    }

    /// Pointer entered/left the hero region. Entering pauses the
    /// auto-advance, leaving restarts it with a full interval.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.is_inert() || hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        if hovered {
            self.cancel_auto_advance();
        } else {
            self.start_auto_advance(now);
        }
    }
}

/// Accumulates a pointer drag over the hero and classifies it on
/// release. A drag counts as a swipe only when it moved more than
/// [`SWIPE_THRESHOLD`] points and was predominantly horizontal.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    pub fn release(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (start_x, start_y) = self.start.take()?;
        let diff_x = start_x - x;
        let diff_y = start_y - y;
        if diff_x.abs() > SWIPE_THRESHOLD && diff_x.abs() > diff_y.abs() {
            if diff_x > 0.0 {
                Some(Direction::Next)
            } else {
                Some(Direction::Previous)
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(slide_count: usize, now: Instant) -> Carousel {
        Carousel::new(slide_count, AUTO_ADVANCE_INTERVAL, now)
    }

    #[test]
    fn test_new_activates_first_slide_and_arms_timer() {
        let t0 = Instant::now();
        let c = carousel(5, t0);
        assert_eq!(c.current(), 0);
        assert!(c.is_active(0), "slide 0 should be active after init");
        assert!(!c.is_active(1));
        assert_eq!(c.next_deadline(), Some(t0 + AUTO_ADVANCE_INTERVAL));
    }

    #[test]
    fn test_exactly_one_active_slide() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        c.advance(Direction::Next, t0);
        c.go_to(3, t0);
        c.advance(Direction::Previous, t0);
        let active: Vec<usize> = (0..5).filter(|&i| c.is_active(i)).collect();
        assert_eq!(active, vec![2], "exactly one slide active at a time");
    }

    #[test]
    fn test_advance_wraps_forward() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        for expected in [1, 2, 3, 4] {
            c.advance(Direction::Next, t0);
            assert_eq!(c.current(), expected);
        }
        c.advance(Direction::Next, t0);
        assert_eq!(c.current(), 0, "advancing past the last slide wraps to 0");
    }

    #[test]
    fn test_advance_wraps_backward() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        c.advance(Direction::Previous, t0);
        assert_eq!(c.current(), 4, "backing up from 0 wraps to the last slide");
    }

    #[test]
    fn test_go_to_valid_index() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        c.go_to(3, t0);
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        c.go_to(2, t0);
        let deadline = c.next_deadline();
        c.go_to(5, t0 + Duration::from_secs(1));
        c.go_to(99, t0 + Duration::from_secs(1));
        assert_eq!(c.current(), 2, "out-of-range go_to must not move");
        assert_eq!(
            c.next_deadline(),
            deadline,
            "out-of-range go_to must not touch the timer"
        );
    }

    #[test]
    fn test_zero_slides_is_inert() {
        let t0 = Instant::now();
        let mut c = carousel(0, t0);
        assert!(c.is_inert());
        assert_eq!(c.next_deadline(), None, "inert carousel never arms");
        c.advance(Direction::Next, t0);
        c.go_to(0, t0);
        c.set_hovered(true, t0);
        c.set_hovered(false, t0);
        c.tick(t0 + Duration::from_secs(60));
        assert_eq!(c.current(), 0);
        assert_eq!(c.next_deadline(), None);
        assert!(!c.is_active(0));
    }

    #[test]
    fn test_manual_navigation_buys_fresh_interval() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        let t1 = t0 + Duration::from_secs(3);
        c.advance(Direction::Next, t1);
        assert_eq!(
            c.next_deadline(),
            Some(t1 + AUTO_ADVANCE_INTERVAL),
            "manual advance restarts the timer from now"
        );
    }

    #[test]
    fn test_rapid_navigation_keeps_single_timer() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        for i in 0..10 {
            c.advance(Direction::Next, t0 + Duration::from_millis(i * 50));
        }
        let armed = t0 + Duration::from_millis(450);
        assert_eq!(c.next_deadline(), Some(armed + AUTO_ADVANCE_INTERVAL));
        // Only the surviving deadline fires, exactly once.
        assert_eq!(c.current(), 0);
        c.tick(armed + AUTO_ADVANCE_INTERVAL);
        assert_eq!(c.current(), 1, "single pending advance fires one step");
        c.tick(armed + AUTO_ADVANCE_INTERVAL);
        assert_eq!(c.current(), 1, "already re-armed, nothing due yet");
    }

    #[test]
    fn test_tick_advances_and_rearms() {
        let t0 = Instant::now();
        let mut c = carousel(3, t0);
        c.tick(t0 + Duration::from_millis(5999));
        assert_eq!(c.current(), 0, "not due yet");
        let t1 = t0 + AUTO_ADVANCE_INTERVAL;
        c.tick(t1);
        assert_eq!(c.current(), 1);
        assert_eq!(c.next_deadline(), Some(t1 + AUTO_ADVANCE_INTERVAL));
        let t2 = t1 + AUTO_ADVANCE_INTERVAL;
        c.tick(t2);
        let t3 = t2 + AUTO_ADVANCE_INTERVAL;
        c.tick(t3);
        assert_eq!(c.current(), 0, "auto-advance wraps past the last slide");
    }

    #[test]
    fn test_hover_pauses_and_resumes_fresh() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        c.set_hovered(true, t0 + Duration::from_secs(2));
        assert_eq!(c.next_deadline(), None, "hover cancels the timer");
        c.set_hovered(true, t0 + Duration::from_secs(3));
        assert_eq!(c.next_deadline(), None, "repeated hover is edge-detected");
        let leave = t0 + Duration::from_secs(4);
        c.set_hovered(false, leave);
        assert_eq!(
            c.next_deadline(),
            Some(leave + AUTO_ADVANCE_INTERVAL),
            "leaving re-arms a full interval, not a resumed partial one"
        );
    }

    #[test]
    fn test_advance_while_hovered_still_arms() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        c.set_hovered(true, t0);
        c.advance(Direction::Next, t0);
        assert_eq!(c.current(), 1);
        assert_eq!(
            c.next_deadline(),
            Some(t0 + AUTO_ADVANCE_INTERVAL),
            "manual navigation restarts the timer even while hovered"
        );
    }

    #[test]
    fn test_five_slide_walkthrough() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        for _ in 0..4 {
            c.advance(Direction::Next, t0);
        }
        assert_eq!(c.current(), 4);
        c.advance(Direction::Next, t0);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_swipe_left_goes_next() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200.0, 100.0);
        assert_eq!(swipe.release(140.0, 110.0), Some(Direction::Next));
    }

    #[test]
    fn test_swipe_right_goes_previous() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.release(160.0, 95.0), Some(Direction::Previous));
    }

    #[test]
    fn test_swipe_below_threshold_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.release(70.0, 100.0), None, "30 points is not a swipe");
    }

    #[test]
    fn test_swipe_exactly_at_threshold_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.release(50.0, 100.0), None, "threshold is exclusive");
    }

    #[test]
    fn test_vertical_drag_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(100.0, 100.0);
        assert_eq!(
            swipe.release(40.0, 180.0),
            None,
            "vertically dominated drags must not navigate"
        );
    }

    #[test]
    fn test_release_without_begin() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.release(0.0, 0.0), None);
    }

    #[test]
    fn test_release_consumes_the_drag() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200.0, 100.0);
        assert_eq!(swipe.release(100.0, 100.0), Some(Direction::Next));
        assert_eq!(swipe.release(0.0, 100.0), None, "second release has no drag");
    }
}
