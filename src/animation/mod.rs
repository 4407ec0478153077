//! Animation
//!
//! Keyframe timelines for the landing page, played by an
//! [`AnimationDriver`]. Time-based timelines advance with frame ticks;
//! scroll-based ones follow a [`ScrollTrigger`] through a [`Scrub`].

pub mod easing;
pub mod engine;
pub mod landing;
pub mod style;
pub mod timeline;
pub mod trigger;
pub mod values;

pub use easing::Ease;
pub use engine::{AnimationDriver, AnimationKey, PlaybackEngine, Trigger};
pub use landing::{Breakpoint, LandingSequence, Viewport};
pub use style::{Element, ElementStyle, StyleSheet};
pub use timeline::{Timeline, TimelineError, Tween};
pub use trigger::{ScrollEvent, ScrollTrigger, Scrub};
pub use values::{Length, LengthUnit, Property, Rgb, Value};
