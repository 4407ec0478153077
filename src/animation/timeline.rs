//! Timelines
//!
//! A timeline is a set of immediate property writes followed by tweens
//! positioned on a shared time axis. Sampling at `t` yields every write in
//! order; the caller applies them last-write-wins.

use smallvec::SmallVec;
use thiserror::Error;

use super::{
    easing::Ease,
    style::Element,
    values::{Property, Value},
};

/// Errors raised while building a timeline.
#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
    /// Tween starts before zero or is not finite.
    #[error("{element} tween has invalid start {start}")]
    InvalidStart {
        /// Element being tweened
        element: Element,

        /// Offending start
        start: f64,
    },

    /// Tween duration is negative or not finite.
    #[error("{element} tween has invalid duration {duration}")]
    InvalidDuration {
        /// Element being tweened
        element: Element,

        /// Offending duration
        duration: f64,
    },

    /// Tween changes no properties.
    #[error("{element} tween changes no properties")]
    EmptyTween {
        /// Element being tweened
        element: Element,
    },

    /// Value kind does not fit the property, or keyframes cannot be
    /// interpolated.
    #[error("{element} {property} keyframes are incompatible")]
    IncompatibleValues {
        /// Element being tweened
        element: Element,

        /// Property being tweened
        property: Property,
    },

    /// A staggered element has no tween.
    #[error("staggered element {0} has no tween")]
    MissingStagger(Element),

    /// Staggered elements do not start in strictly increasing order.
    #[error("{later} starts at {later_start}, not after {earlier} at {earlier_start}")]
    StaggerOutOfOrder {
        /// Element expected to start first
        earlier: Element,

        /// Its start
        earlier_start: f64,

        /// Element expected to start later
        later: Element,

        /// Its start
        later_start: f64,
    },
}

/// One property moving between two keyframes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyChange {
    /// Property
    pub property: Property,

    /// Start keyframe
    pub from: Value,

    /// End keyframe
    pub to: Value,
}

/// Keyframe interpolation of one element over a time window.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    element: Element,
    start: f64,
    duration: f64,
    ease: Ease,
    changes: SmallVec<[PropertyChange; 2]>,
}

impl Tween {
    /// Tween `element` over `[start, start + duration]`, linear by default.
    pub fn new(element: Element, start: f64, duration: f64) -> Self {
        Self {
            element,
            start,
            duration,
            ease: Ease::None,
            changes: SmallVec::new(),
        }
    }

    /// Add a property change.
    #[must_use]
    pub fn change(
        mut self,
        property: Property,
        from: impl Into<Value>,
        to: impl Into<Value>,
    ) -> Self {
        self.changes.push(PropertyChange {
            property,
            from: from.into(),
            to: to.into(),
        });

        self
    }

    /// Set the easing curve.
    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;

        self
    }

    /// Element being tweened.
    pub fn element(&self) -> Element {
        self.element
    }

    /// Window start.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Window length.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Window end.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Property changes.
    pub fn changes(&self) -> &[PropertyChange] {
        &self.changes
    }

    /// Eased local progress at time `t`: 0 before the window, 1 after.
    pub fn progress_at(&self, t: f64) -> f64 {
        if self.duration <= 0.0 {
            return if t >= self.start { 1.0 } else { 0.0 };
        }

        self.ease.apply((t - self.start) / self.duration)
    }

    fn validate(&self) -> Result<(), TimelineError> {
        if !self.start.is_finite() || self.start < 0.0 {
            return Err(TimelineError::InvalidStart {
                element: self.element,
                start: self.start,
            });
        }

        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(TimelineError::InvalidDuration {
                element: self.element,
                duration: self.duration,
            });
        }

        if self.changes.is_empty() {
            return Err(TimelineError::EmptyTween {
                element: self.element,
            });
        }

        for change in &self.changes {
            let fits = change.property.accepts(&change.from)
                && change.property.accepts(&change.to)
                && change.from.compatible(&change.to);

            if !fits {
                return Err(TimelineError::IncompatibleValues {
                    element: self.element,
                    property: change.property,
                });
            }
        }

        Ok(())
    }
}

/// A property write produced by sampling a timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Element written
    pub element: Element,

    /// Property written
    pub property: Property,

    /// Value at the sampled time
    pub value: Value,
}

/// A validated timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    sets: Vec<Frame>,
    tweens: Vec<Tween>,
    duration: f64,
}

impl Timeline {
    /// Start building a timeline.
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::default()
    }

    /// End of the last tween.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Tweens in insertion order.
    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    /// Every property write at time `t`: immediate sets first, then each
    /// tween in insertion order.
    pub fn sample(&self, t: f64) -> Vec<Frame> {
        let tweened = self.tweens.iter().flat_map(|tween| {
            let progress = tween.progress_at(t);

            tween.changes.iter().map(move |change| Frame {
                element: tween.element,
                property: change.property,
                value: change.from.lerp(&change.to, progress),
            })
        });

        self.sets.iter().copied().chain(tweened).collect()
    }
}

/// Builder for [`Timeline`].
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    sets: Vec<Frame>,
    tweens: Vec<Tween>,
    stagger: Vec<Element>,
}

impl TimelineBuilder {
    /// Write `value` immediately whenever the timeline renders.
    #[must_use]
    pub fn set(mut self, element: Element, property: Property, value: impl Into<Value>) -> Self {
        self.sets.push(Frame {
            element,
            property,
            value: value.into(),
        });

        self
    }

    /// Append a tween.
    #[must_use]
    pub fn tween(mut self, tween: Tween) -> Self {
        self.tweens.push(tween);

        self
    }

    /// Require the first tween of each element to start strictly after
    /// the previous element's.
    #[must_use]
    pub fn stagger(mut self, order: impl IntoIterator<Item = Element>) -> Self {
        self.stagger = order.into_iter().collect();

        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// Returns a [`TimelineError`] for invalid windows, empty tweens,
    /// incompatible keyframes, or a stagger order that does not hold.
    pub fn build(self) -> Result<Timeline, TimelineError> {
        for tween in &self.tweens {
            tween.validate()?;
        }

        for set in &self.sets {
            if !set.property.accepts(&set.value) {
                return Err(TimelineError::IncompatibleValues {
                    element: set.element,
                    property: set.property,
                });
            }
        }

        self.validate_stagger()?;

        let duration = self.tweens.iter().map(Tween::end).fold(0.0, f64::max);

        Ok(Timeline {
            sets: self.sets,
            tweens: self.tweens,
            duration,
        })
    }

    fn validate_stagger(&self) -> Result<(), TimelineError> {
        let mut previous: Option<(Element, f64)> = None;

        for element in &self.stagger {
            let start = self
                .tweens
                .iter()
                .find(|tween| tween.element == *element)
                .map(Tween::start)
                .ok_or(TimelineError::MissingStagger(*element))?;

            if let Some((earlier, earlier_start)) = previous
                && start <= earlier_start
            {
                return Err(TimelineError::StaggerOutOfOrder {
                    earlier,
                    earlier_start,
                    later: *element,
                    later_start: start,
                });
            }

            previous = Some((*element, start));
        }

        Ok(())
    }
}
