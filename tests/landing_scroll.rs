//! Integration tests for the landing page sequence

use testresult::TestResult;

use storefront::animation::{
    Element, LandingSequence, PlaybackEngine, Property, ScrollEvent, Value, Viewport,
    landing::{ENTRY_ANIMATION, SCROLL_ANIMATION},
};

fn opacity(sequence: &LandingSequence<PlaybackEngine>, element: Element) -> Option<f64> {
    match sequence.driver().styles().value(element, Property::Opacity)? {
        Value::Number(number) => Some(number),
        Value::Length(_) | Value::Color(_) => None,
    }
}

#[test]
fn full_scroll_reveals_every_element() -> TestResult {
    let viewport = Viewport::new(1440.0, 900.0);
    let mut sequence = LandingSequence::mount(PlaybackEngine::new(), viewport, 0.0)?;

    for _ in 0..200 {
        sequence.tick(1.0 / 60.0);
    }

    assert!(!sequence.is_entry_playing());

    let events = sequence.on_scroll(900.0);

    assert_eq!(events.as_slice(), [ScrollEvent::Leave]);

    for _ in 0..70 {
        sequence.tick(1.0 / 60.0);
    }

    assert!((sequence.progress() - 1.0).abs() < 1e-6);

    for element in [
        Element::Nav,
        Element::PromoPanel,
        Element::LabBadge,
        Element::NumberBadge,
    ] {
        let value = opacity(&sequence, element).ok_or("no opacity")?;

        assert!((value - 1.0).abs() < 1e-6, "{element} opacity was {value}");
    }

    assert_eq!(
        sequence.driver().styles().css(Element::Wordmark),
        "transform: scale(4); color: #e5e5e5"
    );

    Ok(())
}

#[test]
fn scrolling_back_and_forth_keeps_single_instances() -> TestResult {
    let mut sequence =
        LandingSequence::mount(PlaybackEngine::new(), Viewport::new(390.0, 844.0), 0.0)?;

    for scroll in [1_000.0, 400.0, 1_200.0, 100.0, 2_000.0, 0.0, 900.0, 10.0] {
        sequence.on_scroll(scroll);
        sequence.tick(0.1);
    }

    assert_eq!(sequence.driver().count_named(ENTRY_ANIMATION), 1);
    assert_eq!(sequence.driver().count_named(SCROLL_ANIMATION), 1);

    Ok(())
}
