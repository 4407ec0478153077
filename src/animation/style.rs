//! Rendered element styles

use std::fmt;

use rustc_hash::FxHashMap;

use super::values::{Length, Property, Rgb, Value, format_number};

/// Animated landing-page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    /// Brand wordmark
    Wordmark,

    /// Hero image
    Hero,

    /// Navigation bar
    Nav,

    /// Promotional panel
    PromoPanel,

    /// "lab." text badge
    LabBadge,

    /// "100" text badge
    NumberBadge,
}

impl Element {
    /// Every element, in paint order.
    pub const ALL: [Element; 6] = [
        Element::Hero,
        Element::Wordmark,
        Element::Nav,
        Element::PromoPanel,
        Element::LabBadge,
        Element::NumberBadge,
    ];

    /// DOM id of the element.
    pub fn dom_id(self) -> &'static str {
        match self {
            Element::Wordmark => "landing-wordmark",
            Element::Hero => "landing-hero",
            Element::Nav => "landing-nav",
            Element::PromoPanel => "landing-panel",
            Element::LabBadge => "landing-lab",
            Element::NumberBadge => "landing-100",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Element::Wordmark => "wordmark",
            Element::Hero => "hero",
            Element::Nav => "nav",
            Element::PromoPanel => "panel",
            Element::LabBadge => "lab.",
            Element::NumberBadge => "100",
        })
    }
}

/// Current animated properties of one element. Unset properties are left
/// to the stylesheet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementStyle {
    /// Uniform scale
    pub scale: Option<f64>,

    /// Horizontal translation
    pub x: Option<Length>,

    /// Vertical translation
    pub y: Option<Length>,

    /// Opacity
    pub opacity: Option<f64>,

    /// Text color
    pub color: Option<Rgb>,
}

impl ElementStyle {
    /// Write `value` to `property`. Values of the wrong kind are ignored.
    pub fn apply(&mut self, property: Property, value: Value) {
        match (property, value) {
            (Property::Scale, Value::Number(scale)) => self.scale = Some(scale),
            (Property::Opacity, Value::Number(opacity)) => self.opacity = Some(opacity),
            (Property::X, Value::Length(x)) => self.x = Some(x),
            (Property::Y, Value::Length(y)) => self.y = Some(y),
            (Property::Color, Value::Color(color)) => self.color = Some(color),
            _ => {}
        }
    }

    /// Current value of `property`.
    pub fn get(&self, property: Property) -> Option<Value> {
        match property {
            Property::Scale => self.scale.map(Value::Number),
            Property::X => self.x.map(Value::Length),
            Property::Y => self.y.map(Value::Length),
            Property::Opacity => self.opacity.map(Value::Number),
            Property::Color => self.color.map(Value::Color),
        }
    }

    /// CSS `transform` value, if any transform property is set.
    pub fn transform(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(2);

        if self.x.is_some() || self.y.is_some() {
            let x = self.x.unwrap_or(Length::px(0.0));
            let y = self.y.unwrap_or(Length::px(0.0));

            parts.push(format!("translate({x}, {y})"));
        }

        if let Some(scale) = self.scale {
            parts.push(format!("scale({})", format_number(scale)));
        }

        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// Inline CSS declarations for this style.
    pub fn to_css(&self) -> String {
        let mut declarations = Vec::with_capacity(3);

        if let Some(transform) = self.transform() {
            declarations.push(format!("transform: {transform}"));
        }

        if let Some(opacity) = self.opacity {
            declarations.push(format!("opacity: {}", format_number(opacity)));
        }

        if let Some(color) = self.color {
            declarations.push(format!("color: {color}"));
        }

        declarations.join("; ")
    }
}

/// Styles for every element written so far. Later writes replace earlier
/// ones.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: FxHashMap<Element, ElementStyle>,
}

impl StyleSheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one property.
    pub fn apply(&mut self, element: Element, property: Property, value: Value) {
        self.styles.entry(element).or_default().apply(property, value);
    }

    /// Style of `element`, if anything was written.
    pub fn get(&self, element: Element) -> Option<&ElementStyle> {
        self.styles.get(&element)
    }

    /// Current value of one property.
    pub fn value(&self, element: Element, property: Property) -> Option<Value> {
        self.get(element).and_then(|style| style.get(property))
    }

    /// Inline CSS for `element`; empty when nothing was written.
    pub fn css(&self, element: Element) -> String {
        self.get(element).map(ElementStyle::to_css).unwrap_or_default()
    }

    /// Styled elements in paint order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, &ElementStyle)> {
        Element::ALL
            .into_iter()
            .filter_map(|element| self.get(element).map(|style| (element, style)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_transform_opacity_and_color() {
        let mut sheet = StyleSheet::new();

        sheet.apply(Element::Hero, Property::X, Length::vw(20.0).into());
        sheet.apply(Element::Hero, Property::Y, Length::vh(15.0).into());
        sheet.apply(Element::Hero, Property::Scale, 1.0.into());
        sheet.apply(Element::Nav, Property::Opacity, 0.5.into());
        sheet.apply(Element::Wordmark, Property::Color, Rgb::new(0xa1, 0, 0).into());

        assert_eq!(
            sheet.css(Element::Hero),
            "transform: translate(20vw, 15vh) scale(1)"
        );
        assert_eq!(sheet.css(Element::Nav), "opacity: 0.5");
        assert_eq!(sheet.css(Element::Wordmark), "color: #a10000");
        assert_eq!(sheet.css(Element::LabBadge), "");
    }

    #[test]
    fn last_write_wins() {
        let mut sheet = StyleSheet::new();

        sheet.apply(Element::Nav, Property::Opacity, 0.0.into());
        sheet.apply(Element::Nav, Property::Opacity, 1.0.into());

        assert_eq!(
            sheet.value(Element::Nav, Property::Opacity),
            Some(Value::Number(1.0))
        );
    }

    #[test]
    fn mismatched_kinds_are_ignored() {
        let mut style = ElementStyle::default();

        style.apply(Property::Scale, Length::px(3.0).into());

        assert_eq!(style, ElementStyle::default());
    }

    #[test]
    fn iterates_in_paint_order() {
        let mut sheet = StyleSheet::new();

        sheet.apply(Element::NumberBadge, Property::Opacity, 1.0.into());
        sheet.apply(Element::Hero, Property::Scale, 1.0.into());

        let order: Vec<Element> = sheet.iter().map(|(element, _)| element).collect();

        assert_eq!(order, vec![Element::Hero, Element::NumberBadge]);
    }
}
