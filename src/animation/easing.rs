//! Easing curves

/// Maps linear progress in `0..=1` onto eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    /// Linear
    #[default]
    None,

    /// Cubic ease-out, `1 - (1 - t)^3`
    Power2Out,
}

impl Ease {
    /// Eased progress for `t`, clamped to `0..=1`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Ease::None => t,
            Ease::Power2Out => {
                let inv = 1.0 - t;

                1.0 - inv * inv * inv
            }
        }
    }
}
