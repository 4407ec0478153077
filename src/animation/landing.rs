//! Landing page sequence
//!
//! Builds the entry and scroll timelines for the current breakpoint tier
//! and drives them from scroll, resize and frame events.

use std::fmt;

use smallvec::SmallVec;
use tracing::{debug, info};

use super::{
    easing::Ease,
    engine::{AnimationDriver, AnimationKey, Trigger},
    style::Element,
    timeline::{Timeline, TimelineError, Tween},
    trigger::{ScrollEvent, ScrollTrigger, Scrub},
    values::{Length, Property, Rgb},
};

/// Animation name of the entry timeline.
pub const ENTRY_ANIMATION: &str = "landing-entry";

/// Animation name of the scroll timeline.
pub const SCROLL_ANIMATION: &str = "landing-scroll";

/// Seconds the rendered scroll progress takes to catch up.
pub const SCRUB_LAG: f64 = 1.0;

const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
const BRAND_RED: Rgb = Rgb::new(0xa1, 0x00, 0x00);
const FADED: Rgb = Rgb::new(0xe5, 0xe5, 0xe5);

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width
    pub width: f64,

    /// Height
    pub height: f64,
}

impl Viewport {
    /// Viewport of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Layout tier selected by viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// Below 768px
    Narrow,

    /// 768px up to 1024px
    Medium,

    /// 1024px and wider
    Wide,
}

impl Breakpoint {
    /// Tier for a viewport `width` wide.
    pub fn from_width(width: f64) -> Self {
        if width < 768.0 {
            Breakpoint::Narrow
        } else if width < 1024.0 {
            Breakpoint::Medium
        } else {
            Breakpoint::Wide
        }
    }

    fn wordmark_rest_scale(self) -> f64 {
        match self {
            Breakpoint::Narrow => 1.5,
            Breakpoint::Medium | Breakpoint::Wide => 2.0,
        }
    }

    fn wordmark_scrolled_scale(self) -> f64 {
        match self {
            Breakpoint::Narrow => 3.0,
            Breakpoint::Medium => 3.5,
            Breakpoint::Wide => 4.0,
        }
    }

    fn hero_offset(self) -> (Length, Length) {
        match self {
            Breakpoint::Narrow => (Length::vw(20.0), Length::vh(15.0)),
            Breakpoint::Medium => (Length::vw(30.0), Length::vh(20.0)),
            Breakpoint::Wide => (Length::vw(35.0), Length::vh(20.0)),
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Breakpoint::Narrow => "narrow",
            Breakpoint::Medium => "medium",
            Breakpoint::Wide => "wide",
        })
    }
}

/// Time-based entry animation, in seconds.
///
/// Resets every element to its pre-entry state, then eases the hero image
/// down to rest and grows the wordmark into its brand color.
///
/// # Errors
///
/// Returns a [`TimelineError`] if the timeline fails validation.
pub fn entry_timeline(tier: Breakpoint) -> Result<Timeline, TimelineError> {
    Timeline::builder()
        .set(Element::Hero, Property::Scale, 1.2)
        .set(Element::Wordmark, Property::Scale, 0.8)
        .set(Element::Wordmark, Property::Color, BLACK)
        .set(Element::Nav, Property::Y, Length::px(-100.0))
        .set(Element::Nav, Property::Opacity, 0.0)
        .set(Element::LabBadge, Property::X, Length::px(-200.0))
        .set(Element::LabBadge, Property::Opacity, 0.0)
        .set(Element::NumberBadge, Property::Y, Length::px(100.0))
        .set(Element::NumberBadge, Property::Opacity, 0.0)
        .set(Element::PromoPanel, Property::X, Length::vw(100.0))
        .set(Element::PromoPanel, Property::Opacity, 0.0)
        .tween(
            Tween::new(Element::Hero, 0.0, 2.0)
                .change(Property::Scale, 1.2, 1.0)
                .ease(Ease::Power2Out),
        )
        .tween(
            Tween::new(Element::Wordmark, 0.0, 3.0)
                .change(Property::Scale, 0.8, tier.wordmark_rest_scale())
                .change(Property::Color, BLACK, BRAND_RED)
                .ease(Ease::Power2Out),
        )
        .build()
}

/// Scroll-coupled timeline over progress `0..=1`.
///
/// # Errors
///
/// Returns a [`TimelineError`] if the timeline fails validation, including
/// a stagger that is not strictly increasing.
pub fn scroll_timeline(tier: Breakpoint) -> Result<Timeline, TimelineError> {
    let (hero_x, hero_y) = tier.hero_offset();

    Timeline::builder()
        .tween(
            Tween::new(Element::Wordmark, 0.0, 1.0)
                .change(
                    Property::Scale,
                    tier.wordmark_rest_scale(),
                    tier.wordmark_scrolled_scale(),
                )
                .change(Property::Color, BRAND_RED, FADED),
        )
        .tween(
            Tween::new(Element::Hero, 0.0, 1.0)
                .change(Property::X, Length::vw(0.0), hero_x)
                .change(Property::Y, Length::vh(0.0), hero_y),
        )
        .tween(
            Tween::new(Element::Nav, 0.2, 0.3)
                .change(Property::Y, Length::px(-100.0), Length::px(0.0))
                .change(Property::Opacity, 0.0, 1.0),
        )
        .tween(
            Tween::new(Element::PromoPanel, 0.3, 0.5)
                .change(Property::X, Length::vw(100.0), Length::vw(0.0))
                .change(Property::Opacity, 0.0, 1.0),
        )
        .tween(
            Tween::new(Element::LabBadge, 0.4, 0.4)
                .change(Property::X, Length::px(-200.0), Length::px(0.0))
                .change(Property::Opacity, 0.0, 1.0),
        )
        .tween(
            Tween::new(Element::NumberBadge, 0.5, 0.3)
                .change(Property::Y, Length::px(100.0), Length::px(0.0))
                .change(Property::Opacity, 0.0, 1.0),
        )
        .stagger([
            Element::Nav,
            Element::PromoPanel,
            Element::LabBadge,
            Element::NumberBadge,
        ])
        .build()
}

/// Landing page animation state for one mounted page.
#[derive(Debug)]
pub struct LandingSequence<D: AnimationDriver> {
    driver: D,
    tier: Breakpoint,
    entry_timeline: Timeline,
    trigger: ScrollTrigger,
    scrub: Scrub,
    entry: Option<AnimationKey>,
    scroll: AnimationKey,
    last_scroll: f64,
}

impl<D: AnimationDriver> LandingSequence<D> {
    /// Mount the sequence: schedule the scroll timeline and play the entry
    /// animation once.
    ///
    /// # Errors
    ///
    /// Returns a [`TimelineError`] if either timeline fails validation.
    pub fn mount(mut driver: D, viewport: Viewport, container_top: f64) -> Result<Self, TimelineError> {
        let tier = Breakpoint::from_width(viewport.width);
        let entry_timeline = entry_timeline(tier)?;
        let scroll = driver.schedule(SCROLL_ANIMATION, scroll_timeline(tier)?, Trigger::Scroll);

        info!(%tier, width = viewport.width, height = viewport.height, "mounted landing sequence");

        let mut sequence = Self {
            driver,
            tier,
            entry_timeline,
            trigger: ScrollTrigger::new(container_top, viewport.height),
            scrub: Scrub::new(SCRUB_LAG),
            entry: None,
            scroll,
            last_scroll: container_top,
        };

        sequence.replay_entry();

        Ok(sequence)
    }

    /// Restart the entry animation, cancelling any running instance first.
    pub fn replay_entry(&mut self) {
        if let Some(running) = self.entry.take() {
            self.driver.cancel(running);
        }

        let key = self
            .driver
            .schedule(ENTRY_ANIMATION, self.entry_timeline.clone(), Trigger::Time);

        self.entry = Some(key);
    }

    /// Handle a scroll to offset `scroll`. Re-entering the section from
    /// below replays the entry animation.
    pub fn on_scroll(&mut self, scroll: f64) -> SmallVec<[ScrollEvent; 2]> {
        let events = self.trigger.crossings(self.last_scroll, scroll);

        for event in &events {
            debug!(?event, scroll, "scroll trigger crossed");

            if *event == ScrollEvent::EnterBack {
                self.replay_entry();
            }
        }

        self.last_scroll = scroll;
        self.scrub.set_target(self.trigger.progress(scroll));

        events
    }

    /// Handle a viewport resize. Trigger bounds are always recalculated;
    /// the scroll timeline is rebuilt only when the tier changes. Returns
    /// whether it was rebuilt.
    ///
    /// # Errors
    ///
    /// Returns a [`TimelineError`] if the new tier's timelines fail
    /// validation. The sequence keeps its previous timelines in that case.
    pub fn on_resize(&mut self, viewport: Viewport, container_top: f64) -> Result<bool, TimelineError> {
        self.trigger.refresh(container_top, viewport.height);
        self.scrub.set_target(self.trigger.progress(self.last_scroll));

        let tier = Breakpoint::from_width(viewport.width);

        if tier == self.tier {
            return Ok(false);
        }

        let entry_timeline = entry_timeline(tier)?;
        let scroll_timeline = scroll_timeline(tier)?;

        self.driver.cancel(self.scroll);
        self.scroll = self
            .driver
            .schedule(SCROLL_ANIMATION, scroll_timeline, Trigger::Scroll);
        self.driver.seek(self.scroll, self.scrub.current());
        self.entry_timeline = entry_timeline;

        info!(from = %self.tier, to = %tier, "rebuilt scroll timeline");

        self.tier = tier;

        Ok(true)
    }

    /// Advance one frame of `dt` seconds and return the rendered scroll
    /// progress.
    pub fn tick(&mut self, dt: f64) -> f64 {
        let progress = self.scrub.tick(dt);

        self.driver.seek(self.scroll, progress);
        self.driver.tick(dt);

        progress
    }

    /// Current tier.
    pub fn tier(&self) -> Breakpoint {
        self.tier
    }

    /// Scroll trigger bounds.
    pub fn trigger(&self) -> &ScrollTrigger {
        &self.trigger
    }

    /// Rendered scroll progress.
    pub fn progress(&self) -> f64 {
        self.scrub.current()
    }

    /// How far the section is pinned at the last scroll offset.
    pub fn pin_offset(&self) -> f64 {
        self.trigger.pin_offset(self.last_scroll)
    }

    /// Whether the entry animation is still playing.
    pub fn is_entry_playing(&self) -> bool {
        self.entry.is_some_and(|key| self.driver.is_active(key))
    }

    /// Handle of the scroll animation.
    pub fn scroll_handle(&self) -> AnimationKey {
        self.scroll
    }

    /// The driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::animation::{engine::PlaybackEngine, values::Value};

    const DESKTOP: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    fn number(
        sequence: &LandingSequence<PlaybackEngine>,
        element: Element,
        property: Property,
    ) -> Option<f64> {
        match sequence.driver().styles().value(element, property)? {
            Value::Number(number) => Some(number),
            Value::Length(length) => Some(length.value),
            Value::Color(_) => None,
        }
    }

    fn close(actual: Option<f64>, expected: f64) -> bool {
        actual.is_some_and(|actual| (actual - expected).abs() < 1e-9)
    }

    #[test]
    fn tiers_follow_breakpoints() {
        assert_eq!(Breakpoint::from_width(767.0), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(1023.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::Wide);
    }

    #[test]
    fn every_tier_builds() -> TestResult {
        for tier in [Breakpoint::Narrow, Breakpoint::Medium, Breakpoint::Wide] {
            let scroll = scroll_timeline(tier)?;
            let starts: Vec<f64> = scroll.tweens().iter().map(Tween::start).collect();

            assert_eq!(starts, vec![0.0, 0.0, 0.2, 0.3, 0.4, 0.5]);
            assert!((scroll.duration() - 1.0).abs() < 1e-9);
            assert!((entry_timeline(tier)?.duration() - 3.0).abs() < 1e-9);
        }

        Ok(())
    }

    #[test]
    fn mount_applies_initial_state_then_entry_settles() -> TestResult {
        let mut sequence = LandingSequence::mount(PlaybackEngine::new(), DESKTOP, 0.0)?;

        assert!(close(number(&sequence, Element::Hero, Property::Scale), 1.2));
        assert!(close(number(&sequence, Element::Wordmark, Property::Scale), 0.8));
        assert!(close(number(&sequence, Element::Nav, Property::Opacity), 0.0));
        assert!(close(number(&sequence, Element::PromoPanel, Property::X), 100.0));

        sequence.tick(3.0);

        assert!(!sequence.is_entry_playing());
        assert!(close(number(&sequence, Element::Hero, Property::Scale), 1.0));
        assert!(close(number(&sequence, Element::Wordmark, Property::Scale), 2.0));
        assert_eq!(
            sequence.driver().styles().value(Element::Wordmark, Property::Color),
            Some(Value::Color(BRAND_RED))
        );

        Ok(())
    }

    #[test]
    fn narrow_entry_grows_wordmark_less() -> TestResult {
        let mut sequence =
            LandingSequence::mount(PlaybackEngine::new(), Viewport::new(375.0, 700.0), 0.0)?;

        sequence.tick(3.0);

        assert_eq!(sequence.tier(), Breakpoint::Narrow);
        assert!(close(number(&sequence, Element::Wordmark, Property::Scale), 1.5));

        Ok(())
    }

    #[test]
    fn replaying_entry_keeps_one_instance() -> TestResult {
        let mut sequence = LandingSequence::mount(PlaybackEngine::new(), DESKTOP, 0.0)?;

        sequence.replay_entry();
        sequence.replay_entry();

        assert_eq!(sequence.driver().count_named(ENTRY_ANIMATION), 1);
        assert_eq!(sequence.driver().count_named(SCROLL_ANIMATION), 1);

        Ok(())
    }

    #[test]
    fn scrolling_drives_scroll_timeline_with_scrub() -> TestResult {
        let mut sequence = LandingSequence::mount(PlaybackEngine::new(), DESKTOP, 0.0)?;

        sequence.tick(3.0);
        sequence.on_scroll(400.0);

        assert!(sequence.progress().abs() < 1e-9);

        let progress = sequence.tick(1.0);

        assert!((progress - 0.5).abs() < 1e-9);
        assert!(close(number(&sequence, Element::Wordmark, Property::Scale), 3.0));
        assert!(close(number(&sequence, Element::Hero, Property::X), 17.5));
        assert!(close(number(&sequence, Element::Hero, Property::Y), 10.0));
        assert!(close(number(&sequence, Element::NumberBadge, Property::Opacity), 0.0));
        assert!((sequence.pin_offset() - 400.0).abs() < 1e-9);

        Ok(())
    }

    #[test]
    fn entering_back_replays_entry() -> TestResult {
        let mut sequence = LandingSequence::mount(PlaybackEngine::new(), DESKTOP, 0.0)?;

        sequence.tick(3.0);

        assert!(!sequence.is_entry_playing());
        assert_eq!(sequence.on_scroll(1_000.0).as_slice(), [ScrollEvent::Leave]);
        assert!(!sequence.is_entry_playing());
        assert_eq!(sequence.on_scroll(500.0).as_slice(), [ScrollEvent::EnterBack]);
        assert!(sequence.is_entry_playing());
        assert_eq!(sequence.driver().count_named(ENTRY_ANIMATION), 1);

        Ok(())
    }

    #[test]
    fn resize_is_idempotent_and_rebuilds_on_tier_change() -> TestResult {
        let mut sequence = LandingSequence::mount(PlaybackEngine::new(), DESKTOP, 0.0)?;
        let original = sequence.scroll_handle();

        assert!(!sequence.on_resize(Viewport::new(1100.0, 600.0), 0.0)?);

        let bounds = *sequence.trigger();

        assert!(!sequence.on_resize(Viewport::new(1100.0, 600.0), 0.0)?);
        assert_eq!(*sequence.trigger(), bounds);
        assert!((bounds.end() - 600.0).abs() < 1e-9);
        assert_eq!(sequence.scroll_handle(), original);

        assert!(sequence.on_resize(Viewport::new(800.0, 600.0), 0.0)?);
        assert_eq!(sequence.tier(), Breakpoint::Medium);
        assert_ne!(sequence.scroll_handle(), original);
        assert_eq!(sequence.driver().count_named(SCROLL_ANIMATION), 1);

        Ok(())
    }
}
