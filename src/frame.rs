use std::time::{Duration, Instant};

/// Fixed-interval frame scheduler owned by the event loop.
///
/// The loop asks for `timeout` to know how long it may wait for input, and
/// calls `advance` after each rendered frame. Frames that fall behind are
/// dropped rather than replayed in a burst.
#[derive(Debug)]
pub struct AnimationLoop {
    interval: Duration,
    next_frame: Instant,
    frames: u64,
    running: bool,
}

impl AnimationLoop {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_frame: now,
            frames: 0,
            running: true,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the loop; the caller exits on its next check
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Time left before the next frame is due
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next_frame.saturating_duration_since(now)
    }

    /// Schedule the frame after the one just rendered
    pub fn advance(&mut self, now: Instant) {
        self.frames += 1;
        self.next_frame += self.interval;
        if self.next_frame <= now {
            self.next_frame = now + self.interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_first_frame_is_due_immediately() {
        let start = Instant::now();
        let frames = AnimationLoop::new(FRAME, start);
        assert!(frames.is_due(start));
        assert_eq!(frames.timeout(start), Duration::ZERO);
        assert!(frames.is_running());
    }

    #[test]
    fn test_advance_schedules_next_interval() {
        let start = Instant::now();
        let mut frames = AnimationLoop::new(FRAME, start);
        frames.advance(start);

        assert_eq!(frames.frames(), 1);
        assert!(!frames.is_due(start + Duration::from_millis(10)));
        assert_eq!(frames.timeout(start + Duration::from_millis(10)), Duration::from_millis(6));
        assert!(frames.is_due(start + FRAME));
    }

    #[test]
    fn test_late_frame_resynchronizes() {
        let start = Instant::now();
        let mut frames = AnimationLoop::new(FRAME, start);
        frames.advance(start);

        // Render happens far too late; only one frame becomes due afterwards
        let late = start + Duration::from_millis(200);
        frames.advance(late);
        assert!(!frames.is_due(late));
        assert_eq!(frames.timeout(late), FRAME);
    }

    #[test]
    fn test_cancel_stops_loop() {
        let mut frames = AnimationLoop::new(FRAME, Instant::now());
        assert_eq!(frames.interval(), FRAME);
        frames.cancel();
        assert!(!frames.is_running());
    }
}
