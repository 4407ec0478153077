//! Animatable values

use std::fmt;

/// CSS length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Pixels
    Px,

    /// Percent of viewport width
    Vw,

    /// Percent of viewport height
    Vh,
}

impl LengthUnit {
    fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
        }
    }
}

/// A length with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    /// Magnitude
    pub value: f64,

    /// Unit
    pub unit: LengthUnit,
}

impl Length {
    /// Pixels.
    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    /// Viewport-width units.
    pub fn vw(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Vw,
        }
    }

    /// Viewport-height units.
    pub fn vh(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Vh,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit.suffix())
    }
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red
    pub r: u8,

    /// Green
    pub g: u8,

    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn lerp(self, to: Rgb, t: f64) -> Rgb {
        Rgb {
            r: lerp_channel(self.r, to.r, t),
            g: lerp_channel(self.g, to.g, t),
            b: lerp_channel(self.b, to.b, t),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped to the u8 range first"
)]
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let value = lerp(f64::from(from), f64::from(to), t);

    value.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Visual property a tween can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Uniform scale
    Scale,

    /// Horizontal translation
    X,

    /// Vertical translation
    Y,

    /// Opacity
    Opacity,

    /// Text color
    Color,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Property::Scale => "scale",
            Property::X => "x",
            Property::Y => "y",
            Property::Opacity => "opacity",
            Property::Color => "color",
        })
    }
}

impl Property {
    /// Whether `value` has the kind this property takes.
    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Property::Scale | Property::Opacity, Value::Number(_))
                | (Property::X | Property::Y, Value::Length(_))
                | (Property::Color, Value::Color(_))
        )
    }
}

/// A property value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Unitless number (scale, opacity)
    Number(f64),

    /// Length (translation)
    Length(Length),

    /// Color
    Color(Rgb),
}

impl Value {
    /// Whether `self` and `other` can be interpolated.
    pub fn compatible(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(_), Value::Number(_)) | (Value::Color(_), Value::Color(_)) => true,
            (Value::Length(a), Value::Length(b)) => a.unit == b.unit,
            _ => false,
        }
    }

    /// Interpolate towards `to` at `t`. Incompatible pairs snap to `to`
    /// once `t` reaches 1.
    pub fn lerp(&self, to: &Value, t: f64) -> Value {
        match (self, to) {
            (Value::Number(a), Value::Number(b)) => Value::Number(lerp(*a, *b, t)),
            (Value::Length(a), Value::Length(b)) if a.unit == b.unit => Value::Length(Length {
                value: lerp(a.value, b.value, t),
                unit: a.unit,
            }),
            (Value::Color(a), Value::Color(b)) => Value::Color(a.lerp(*b, t)),
            _ if t >= 1.0 => *to,
            _ => *self,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<Length> for Value {
    fn from(value: Length) -> Self {
        Value::Length(value)
    }
}

impl From<Rgb> for Value {
    fn from(value: Rgb) -> Self {
        Value::Color(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => f.write_str(&format_number(*number)),
            Value::Length(length) => length.fmt(f),
            Value::Color(color) => color.fmt(f),
        }
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Format with at most four decimals and no trailing zeros.
pub(crate) fn format_number(value: f64) -> String {
    let formatted = format!("{value:.4}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
