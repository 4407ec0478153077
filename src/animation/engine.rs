//! Playback engine

use slotmap::{SlotMap, new_key_type};
use tracing::{debug, trace};

use super::{style::StyleSheet, timeline::Timeline};

new_key_type! {
    /// Handle to a scheduled animation.
    pub struct AnimationKey;
}

/// What advances a scheduled timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Wall time, via [`AnimationDriver::tick`]; retires when finished
    Time,

    /// Scroll progress, via [`AnimationDriver::seek`]; lives until cancelled
    Scroll,
}

/// Runs timelines and reports their output.
pub trait AnimationDriver {
    /// Start `timeline` under `name`.
    fn schedule(&mut self, name: &str, timeline: Timeline, trigger: Trigger) -> AnimationKey;

    /// Stop an animation. Unknown or finished handles are ignored.
    fn cancel(&mut self, handle: AnimationKey);

    /// Advance time-triggered animations by `dt` seconds.
    fn tick(&mut self, dt: f64);

    /// Move a scroll-triggered animation to `progress` (`0..=1`).
    fn seek(&mut self, handle: AnimationKey, progress: f64);

    /// Whether `handle` is still running.
    fn is_active(&self, handle: AnimationKey) -> bool;
}

#[derive(Debug)]
struct Instance {
    name: String,
    timeline: Timeline,
    trigger: Trigger,
    position: f64,
}

/// In-memory [`AnimationDriver`] that renders into a [`StyleSheet`].
#[derive(Debug, Default)]
pub struct PlaybackEngine {
    instances: SlotMap<AnimationKey, Instance>,
    styles: StyleSheet,
}

impl PlaybackEngine {
    /// Create an idle engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current styles.
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Number of running animations.
    pub fn active_count(&self) -> usize {
        self.instances.len()
    }

    /// Number of running animations scheduled under `name`.
    pub fn count_named(&self, name: &str) -> usize {
        self.instances
            .values()
            .filter(|instance| instance.name == name)
            .count()
    }

    /// Name `handle` was scheduled under.
    pub fn name(&self, handle: AnimationKey) -> Option<&str> {
        self.instances.get(handle).map(|instance| instance.name.as_str())
    }

    /// Current position of `handle` on its timeline.
    pub fn position(&self, handle: AnimationKey) -> Option<f64> {
        self.instances.get(handle).map(|instance| instance.position)
    }

    fn render(styles: &mut StyleSheet, instance: &Instance) {
        for frame in instance.timeline.sample(instance.position) {
            styles.apply(frame.element, frame.property, frame.value);
        }
    }
}

impl AnimationDriver for PlaybackEngine {
    fn schedule(&mut self, name: &str, timeline: Timeline, trigger: Trigger) -> AnimationKey {
        let instance = Instance {
            name: name.to_string(),
            timeline,
            trigger,
            position: 0.0,
        };

        if trigger == Trigger::Time {
            Self::render(&mut self.styles, &instance);
        }

        let key = self.instances.insert(instance);

        debug!(name, ?trigger, ?key, "scheduled animation");

        key
    }

    fn cancel(&mut self, handle: AnimationKey) {
        if let Some(instance) = self.instances.remove(handle) {
            debug!(name = %instance.name, ?handle, "cancelled animation");
        }
    }

    fn tick(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        let styles = &mut self.styles;

        self.instances.retain(|key, instance| {
            if instance.trigger != Trigger::Time {
                return true;
            }

            instance.position = (instance.position + dt).min(instance.timeline.duration());

            Self::render(styles, instance);

            let running = instance.position < instance.timeline.duration();

            if !running {
                debug!(name = %instance.name, ?key, "animation finished");
            }

            running
        });
    }

    fn seek(&mut self, handle: AnimationKey, progress: f64) {
        let Some(instance) = self.instances.get_mut(handle) else {
            return;
        };

        if instance.trigger != Trigger::Scroll {
            return;
        }

        instance.position = progress.clamp(0.0, 1.0) * instance.timeline.duration();

        trace!(name = %instance.name, progress, "seek");

        Self::render(&mut self.styles, instance);
    }

    fn is_active(&self, handle: AnimationKey) -> bool {
        self.instances.contains_key(handle)
    }
}
