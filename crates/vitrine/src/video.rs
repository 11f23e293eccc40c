use std::time::{Duration, Instant};

/// How long a hover preview runs before it is paused again.
pub const PREVIEW_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Playback {
    /// At the clip start, overlay shown.
    Stopped,
    Playing { since: Instant, from: f32 },
    Paused { at: f32 },
}

/// Simulated playback state for one video tile.
///
/// Clicking the tile (or its overlay) toggles play/pause; the overlay
/// hides while playing and returns on pause or when the clip runs out.
/// Hovering a non-playing tile rewinds and plays a short preview; the
/// preview deadline pauses whatever is playing when it expires, even a
/// clip the user started by clicking inside the window.
#[derive(Debug)]
pub struct VideoTile {
    duration: f32,
    state: Playback,
    preview_deadline: Option<Instant>,
    hovered: bool,
}

impl VideoTile {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration: duration_secs.max(0.0),
            state: Playback::Stopped,
            preview_deadline: None,
            hovered: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, Playback::Playing { .. })
    }

    /// The play overlay shows whenever the clip is not playing.
    pub fn overlay_visible(&self) -> bool {
        !self.is_playing()
    }

    /// Current playhead in seconds.
    pub fn position(&self, now: Instant) -> f32 {
        match self.state {
            Playback::Stopped => 0.0,
            Playback::Paused { at } => at,
            Playback::Playing { since, from } => {
                (from + now.saturating_duration_since(since).as_secs_f32()).min(self.duration)
            }
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Click on the tile or its overlay.
    pub fn toggle(&mut self, now: Instant) {
        self.state = match self.state {
            Playback::Stopped => Playback::Playing {
                since: now,
                from: 0.0,
            },
            Playback::Paused { at } => Playback::Playing {
                since: now,
                from: at,
            },
            Playback::Playing { .. } => Playback::Paused {
                at: self.position(now),
            },
        };
    }

    /// Pointer entered/left the tile. Entering while not playing starts
    /// a rewound preview; leaving does nothing, the deadline handles it.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        if hovered && !self.is_playing() {
            self.state = Playback::Playing {
                since: now,
                from: 0.0,
            };
            self.preview_deadline = Some(now + PREVIEW_DURATION);
        }
    }

    /// Advance the simulation: end-of-clip detection and the preview
    /// deadline.
    pub fn tick(&mut self, now: Instant) {
        if let Playback::Playing { .. } = self.state {
            if self.position(now) >= self.duration {
                self.state = Playback::Stopped;
            }
        }
        if let Some(deadline) = self.preview_deadline {
            if now >= deadline {
                self.preview_deadline = None;
                if self.is_playing() {
                    self.state = Playback::Paused {
                        at: self.position(now),
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_stopped_with_overlay() {
        let tile = VideoTile::new(30.0);
        assert!(!tile.is_playing());
        assert!(tile.overlay_visible());
        assert_eq!(tile.position(Instant::now()), 0.0);
    }

    #[test]
    fn test_toggle_plays_and_pauses() {
        let t0 = Instant::now();
        let mut tile = VideoTile::new(30.0);
        tile.toggle(t0);
        assert!(tile.is_playing());
        assert!(!tile.overlay_visible(), "overlay hides during playback");
        let t1 = t0 + Duration::from_secs(5);
        tile.toggle(t1);
        assert!(!tile.is_playing());
        assert!(tile.overlay_visible());
        assert_eq!(tile.position(t1), 5.0, "pause keeps the playhead");
    }

    #[test]
    fn test_resume_continues_from_pause() {
        let t0 = Instant::now();
        let mut tile = VideoTile::new(30.0);
        tile.toggle(t0);
        tile.toggle(t0 + Duration::from_secs(5));
        let t2 = t0 + Duration::from_secs(20);
        tile.toggle(t2);
        assert_eq!(tile.position(t2 + Duration::from_secs(3)), 8.0);
    }

    #[test]
    fn test_clip_end_shows_overlay() {
        let t0 = Instant::now();
        let mut tile = VideoTile::new(10.0);
        tile.toggle(t0);
        tile.tick(t0 + Duration::from_secs(9));
        assert!(tile.is_playing());
        tile.tick(t0 + Duration::from_secs(10));
        assert!(!tile.is_playing(), "clip ended");
        assert!(tile.overlay_visible());
        assert_eq!(tile.position(t0 + Duration::from_secs(11)), 0.0);
    }

    #[test]
    fn test_hover_previews_from_start() {
        let t0 = Instant::now();
        let mut tile = VideoTile::new(30.0);
        tile.toggle(t0);
        tile.toggle(t0 + Duration::from_secs(8));
        let enter = t0 + Duration::from_secs(20);
        tile.set_hovered(true, enter);
        assert!(tile.is_playing());
        assert_eq!(tile.position(enter), 0.0, "preview rewinds to the start");
        tile.tick(enter + PREVIEW_DURATION);
        assert!(!tile.is_playing(), "preview pauses after two seconds");
        assert_eq!(tile.position(enter + PREVIEW_DURATION), 2.0);
    }

    #[test]
    fn test_hover_while_playing_does_nothing() {
        let t0 = Instant::now();
        let mut tile = VideoTile::new(30.0);
        tile.toggle(t0);
        let enter = t0 + Duration::from_secs(5);
        tile.set_hovered(true, enter);
        assert_eq!(tile.position(enter), 5.0, "no rewind while playing");
        tile.tick(enter + PREVIEW_DURATION);
        assert!(tile.is_playing(), "no preview deadline was armed");
    }

    #[test]
    fn test_preview_deadline_pauses_clicked_play() {
        let t0 = Instant::now();
        let mut tile = VideoTile::new(30.0);
        tile.set_hovered(true, t0);
        // User pauses and restarts inside the preview window.
        tile.toggle(t0 + Duration::from_millis(500));
        tile.toggle(t0 + Duration::from_millis(800));
        assert!(tile.is_playing());
        tile.tick(t0 + PREVIEW_DURATION);
        assert!(
            !tile.is_playing(),
            "the pending preview deadline pauses whatever is playing"
        );
    }

    #[test]
    fn test_preview_deadline_ignores_already_paused() {
        let t0 = Instant::now();
        let mut tile = VideoTile::new(30.0);
        tile.set_hovered(true, t0);
        tile.toggle(t0 + Duration::from_millis(500));
        assert!(!tile.is_playing());
        tile.tick(t0 + PREVIEW_DURATION);
        assert!(!tile.is_playing());
        assert_eq!(
            tile.position(t0 + PREVIEW_DURATION),
            0.5,
            "expired deadline must not move a paused playhead"
        );
    }

    #[test]
    fn test_hover_edge_detection() {
        let t0 = Instant::now();
        let mut tile = VideoTile::new(30.0);
        tile.set_hovered(true, t0);
        let later = t0 + Duration::from_secs(1);
        // Same-state reports must not re-arm the preview.
        tile.set_hovered(true, later);
        tile.tick(t0 + PREVIEW_DURATION);
        assert!(!tile.is_playing(), "original deadline still fires");
    }

    #[test]
    fn test_leave_does_not_stop_preview() {
        let t0 = Instant::now();
        let mut tile = VideoTile::new(30.0);
        tile.set_hovered(true, t0);
        tile.set_hovered(false, t0 + Duration::from_millis(500));
        assert!(tile.is_playing(), "leaving keeps the preview running");
        tile.tick(t0 + PREVIEW_DURATION);
        assert!(!tile.is_playing());
    }

    #[test]
    fn test_rehover_rearms_preview() {
        let t0 = Instant::now();
        let mut tile = VideoTile::new(30.0);
        tile.set_hovered(true, t0);
        tile.tick(t0 + PREVIEW_DURATION);
        tile.set_hovered(false, t0 + Duration::from_secs(3));
        let re_enter = t0 + Duration::from_secs(4);
        tile.set_hovered(true, re_enter);
        assert!(tile.is_playing());
        tile.tick(re_enter + PREVIEW_DURATION);
        assert!(!tile.is_playing(), "second preview pauses on its own deadline");
    }
}
