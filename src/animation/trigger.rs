//! Scroll triggers

use smallvec::SmallVec;

use super::easing::Ease;

/// Boundary crossing reported by [`ScrollTrigger::crossings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollEvent {
    /// Scrolled forward past the start
    Enter,

    /// Scrolled forward past the end
    Leave,

    /// Scrolled backward past the end, back into the range
    EnterBack,

    /// Scrolled backward past the start
    LeaveBack,
}

/// Maps a scroll offset onto progress through a pinned section.
///
/// The section starts when its top meets the top of the viewport and ends
/// one viewport height later. Inside `[start, end)` it is pinned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    start: f64,
    end: f64,
}

impl ScrollTrigger {
    /// Trigger for a section whose top is at `container_top` in a viewport
    /// `viewport_height` tall.
    pub fn new(container_top: f64, viewport_height: f64) -> Self {
        let mut trigger = Self {
            start: 0.0,
            end: 0.0,
        };

        trigger.refresh(container_top, viewport_height);

        trigger
    }

    /// Recompute boundaries after layout changes.
    pub fn refresh(&mut self, container_top: f64, viewport_height: f64) {
        self.start = container_top;
        self.end = container_top + viewport_height.max(0.0);
    }

    /// Scroll offset where the range begins.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Scroll offset where the range ends.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Progress through the range at `scroll`, clamped to `0..=1`.
    pub fn progress(&self, scroll: f64) -> f64 {
        let length = self.end - self.start;

        if length <= 0.0 {
            return if scroll >= self.end { 1.0 } else { 0.0 };
        }

        ((scroll - self.start) / length).clamp(0.0, 1.0)
    }

    /// Whether `scroll` lies inside the pinned range.
    pub fn is_active(&self, scroll: f64) -> bool {
        (self.start..self.end).contains(&scroll)
    }

    /// How far the pinned section is held down at `scroll`.
    pub fn pin_offset(&self, scroll: f64) -> f64 {
        (scroll - self.start).clamp(0.0, (self.end - self.start).max(0.0))
    }

    /// Boundary crossings when scrolling from `previous` to `current`, in
    /// the order they happen.
    pub fn crossings(&self, previous: f64, current: f64) -> SmallVec<[ScrollEvent; 2]> {
        let mut events = SmallVec::new();

        if current > previous {
            if previous < self.start && current >= self.start {
                events.push(ScrollEvent::Enter);
            }

            if previous < self.end && current >= self.end {
                events.push(ScrollEvent::Leave);
            }
        } else if current < previous {
            if previous >= self.end && current < self.end {
                events.push(ScrollEvent::EnterBack);
            }

            if previous >= self.start && current < self.start {
                events.push(ScrollEvent::LeaveBack);
            }
        }

        events
    }
}

/// Smooths rendered progress towards the scroll position.
///
/// Each new target restarts a catch-up that takes `lag` seconds. A lag of
/// zero follows the target immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrub {
    lag: f64,
    from: f64,
    current: f64,
    target: f64,
    elapsed: f64,
}

impl Scrub {
    /// Scrub with the given catch-up time in seconds.
    pub fn new(lag: f64) -> Self {
        Self {
            lag: lag.max(0.0),
            from: 0.0,
            current: 0.0,
            target: 0.0,
            elapsed: 0.0,
        }
    }

    /// Set the progress to catch up with.
    pub fn set_target(&mut self, target: f64) {
        self.from = self.current;
        self.target = target;
        self.elapsed = 0.0;

        if self.lag <= 0.0 {
            self.current = target;
        }
    }

    /// Advance by `dt` seconds and return the rendered progress.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if self.lag <= 0.0 {
            self.current = self.target;

            return self.current;
        }

        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.lag);

        let eased = Ease::Power2Out.apply(self.elapsed / self.lag);

        self.current = self.from + (self.target - self.from) * eased;

        self.current
    }

    /// Rendered progress.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Progress being caught up with.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether rendered progress has reached the target.
    pub fn is_settled(&self) -> bool {
        (self.current - self.target).abs() < f64::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn range_is_one_viewport_from_container_top() {
        let trigger = ScrollTrigger::new(0.0, 800.0);

        assert!((trigger.end() - 800.0).abs() < f64::EPSILON);
        assert!((trigger.progress(400.0) - 0.5).abs() < f64::EPSILON);
        assert!((trigger.progress(1_600.0) - 1.0).abs() < f64::EPSILON);
        assert!(trigger.progress(-10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pin_offset_is_clamped_to_range() {
        let trigger = ScrollTrigger::new(100.0, 800.0);

        assert!(trigger.pin_offset(50.0).abs() < f64::EPSILON);
        assert!((trigger.pin_offset(500.0) - 400.0).abs() < f64::EPSILON);
        assert!((trigger.pin_offset(2_000.0) - 800.0).abs() < f64::EPSILON);
        assert!(trigger.is_active(500.0));
        assert!(!trigger.is_active(900.0));
    }

    #[test]
    fn crossings_follow_direction() {
        let trigger = ScrollTrigger::new(100.0, 800.0);

        assert_eq!(trigger.crossings(0.0, 200.0).as_slice(), [ScrollEvent::Enter]);
        assert_eq!(trigger.crossings(200.0, 950.0).as_slice(), [ScrollEvent::Leave]);
        assert_eq!(trigger.crossings(950.0, 500.0).as_slice(), [ScrollEvent::EnterBack]);
        assert_eq!(trigger.crossings(500.0, 20.0).as_slice(), [ScrollEvent::LeaveBack]);
        assert!(trigger.crossings(300.0, 400.0).is_empty());
    }

    #[test]
    fn jumps_report_both_crossings_in_order() {
        let trigger = ScrollTrigger::new(100.0, 800.0);

        let forward: SmallVec<[ScrollEvent; 2]> = smallvec![ScrollEvent::Enter, ScrollEvent::Leave];
        let backward: SmallVec<[ScrollEvent; 2]> =
            smallvec![ScrollEvent::EnterBack, ScrollEvent::LeaveBack];

        assert_eq!(trigger.crossings(0.0, 5_000.0), forward);
        assert_eq!(trigger.crossings(5_000.0, 0.0), backward);
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut trigger = ScrollTrigger::new(0.0, 800.0);

        trigger.refresh(0.0, 600.0);
        let once = trigger;
        trigger.refresh(0.0, 600.0);

        assert_eq!(trigger, once);
        assert!((trigger.end() - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scrub_catches_up_over_lag() {
        let mut scrub = Scrub::new(1.0);

        scrub.set_target(1.0);

        assert!((scrub.tick(0.5) - 0.875).abs() < 1e-9);
        assert!(!scrub.is_settled());
        assert!((scrub.tick(0.5) - 1.0).abs() < 1e-9);
        assert!(scrub.is_settled());
    }

    #[test]
    fn zero_lag_follows_immediately() {
        let mut scrub = Scrub::new(0.0);

        scrub.set_target(0.4);

        assert!((scrub.current() - 0.4).abs() < f64::EPSILON);
        assert!((scrub.tick(0.016) - 0.4).abs() < f64::EPSILON);
    }
}
