//! Landing page
//!
//! Renders the animated hero section. On the browser the sequence is driven
//! by window scroll and resize events plus an animation frame loop; each
//! frame copies the engine's style sheet into a signal the elements read.

use leptos::{html, prelude::*};
use storefront::animation::{Element, StyleSheet};

#[cfg(target_arch = "wasm32")]
use leptos::ev;
#[cfg(target_arch = "wasm32")]
use storefront::animation::{LandingSequence, PlaybackEngine, Viewport};
#[cfg(target_arch = "wasm32")]
use tracing::warn;

/// Watercolor model in the middle of the stage.
const HERO_IMAGE: &str = "/—Pngtree—watercolor fashion female model_6523838.png";

/// Magazine cut-out inside the red panel.
const PROMO_IMAGE: &str = "/pngfind.com-magazine-png-895190.png";

/// Two viewports tall, so the stage stays pinned for one viewport of scroll.
const CONTAINER_STYLE: &str = "position: relative; height: 200vh";

const IMAGE_STYLE: &str = "height: 100%; width: auto; object-fit: contain";

/// Text or content of each animated element.
fn element_content(element: Element) -> &'static str {
    match element {
        Element::Wordmark => "X-LABS",
        Element::Hero | Element::PromoPanel => "",
        Element::Nav => "PRODUCTS",
        Element::LabBadge => "lab.",
        Element::NumberBadge => "100",
    }
}

/// Image source and alt text of elements that show a picture.
fn element_image(element: Element) -> Option<(&'static str, &'static str)> {
    match element {
        Element::Hero => Some((HERO_IMAGE, "Fashion model")),
        Element::PromoPanel => Some((PROMO_IMAGE, "Magazine")),
        Element::Wordmark | Element::Nav | Element::LabBadge | Element::NumberBadge => None,
    }
}

/// Resting placement of each element on the stage; the animation only adds
/// transforms, opacity and color on top.
fn element_layout(element: Element) -> &'static str {
    match element {
        Element::Hero => "position: relative; z-index: 10; height: 80vh",
        Element::Wordmark => {
            "position: absolute; z-index: 0; font-size: 10vw; font-weight: 800; letter-spacing: -0.025em"
        }
        Element::Nav => {
            "position: absolute; top: 0; left: 0; right: 0; z-index: 30; padding: 1.5rem 2rem; font-weight: 700"
        }
        Element::LabBadge => {
            "position: absolute; left: 8vw; top: 35vh; z-index: 20; font-size: 8vw; font-weight: 900; line-height: 1"
        }
        Element::NumberBadge => {
            "position: absolute; left: 8vw; bottom: 15vh; z-index: 20; font-size: 4vw; font-weight: 900"
        }
        Element::PromoPanel => {
            "position: absolute; right: 2vw; top: 60vh; z-index: 5; width: 50vw; height: 40vh; padding: 0.5rem 1rem; background: #dc2626"
        }
    }
}

/// Inline style of the pinned stage for a pin offset in pixels. The stage
/// fills the viewport and clips anything animated outside it.
fn stage_style(offset: f64) -> String {
    format!(
        "position: relative; width: 100vw; height: 100vh; overflow: hidden; \
         display: flex; align-items: center; justify-content: center; background: #fff; \
         transform: translateY({offset:.0}px)"
    )
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let styles = RwSignal::new(StyleSheet::new());
    let pin = RwSignal::new(0.0_f64);
    let container = NodeRef::<html::Div>::new();

    #[cfg(target_arch = "wasm32")]
    Effect::new(move |_| {
        if let Some(section) = container.get() {
            start(&section, styles, pin);
        }
    });

    view! {
        <div class="landing" style=CONTAINER_STYLE node_ref=container>
            <div class="landing-stage" style=move || stage_style(pin.get())>
                {Element::ALL
                    .into_iter()
                    .map(|element| {
                        view! {
                            <div
                                id=element.dom_id()
                                class="landing-element"
                                style=move || {
                                    styles
                                        .with(|sheet| {
                                            format!("{}; {}", element_layout(element), sheet.css(element))
                                        })
                                }
                            >
                                {element_content(element)}
                                {element_image(element)
                                    .map(|(src, alt)| view! { <img src=src alt=alt style=IMAGE_STYLE /> })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn window_viewport() -> Option<(Viewport, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    let scroll = window.scroll_y().ok()?;

    Some((Viewport::new(width, height), scroll))
}

#[cfg(target_arch = "wasm32")]
fn monotonic_now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
fn container_top(section: &web_sys::HtmlDivElement) -> f64 {
    f64::from(section.offset_top())
}

#[cfg(target_arch = "wasm32")]
fn start(section: &web_sys::HtmlDivElement, styles: RwSignal<StyleSheet>, pin: RwSignal<f64>) {
    let Some((viewport, scroll)) = window_viewport() else {
        warn!("window unavailable, landing animation disabled");
        return;
    };

    let sequence = match LandingSequence::mount(PlaybackEngine::new(), viewport, container_top(section)) {
        Ok(sequence) => StoredValue::new(sequence),
        Err(error) => {
            warn!(%error, "landing timelines rejected");
            return;
        }
    };

    sequence.update_value(|sequence| {
        sequence.on_scroll(scroll);
    });

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        if let Some((_, scroll)) = window_viewport() {
            sequence.update_value(|sequence| {
                sequence.on_scroll(scroll);
            });
        }
    });

    let resize_section = section.clone();
    let resize_handle = window_event_listener(ev::resize, move |_| {
        let Some((viewport, _)) = window_viewport() else {
            return;
        };

        let top = container_top(&resize_section);

        sequence.update_value(|sequence| {
            if let Err(error) = sequence.on_resize(viewport, top) {
                warn!(%error, "landing timelines rejected on resize");
            }
        });
    });

    on_cleanup(move || {
        scroll_handle.remove();
        resize_handle.remove();
    });

    run_frames(sequence, styles, pin, monotonic_now());
}

#[cfg(target_arch = "wasm32")]
fn run_frames(
    sequence: StoredValue<LandingSequence<PlaybackEngine>>,
    styles: RwSignal<StyleSheet>,
    pin: RwSignal<f64>,
    last: f64,
) {
    request_animation_frame(move || {
        let now = monotonic_now();
        let dt = ((now - last) / 1_000.0).max(0.0);

        let frame = sequence.try_update_value(|sequence| {
            sequence.tick(dt);

            (sequence.driver().styles().clone(), sequence.pin_offset())
        });

        // Sequence disposed with the page.
        let Some((sheet, offset)) = frame else {
            return;
        };

        styles.set(sheet);
        pin.set(offset);

        run_frames(sequence, styles, pin, now);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_show_their_labels() {
        assert_eq!(element_content(Element::Wordmark), "X-LABS");
        assert_eq!(element_content(Element::LabBadge), "lab.");
        assert_eq!(element_content(Element::NumberBadge), "100");
        assert_eq!(element_content(Element::Hero), "");
    }

    #[test]
    fn pin_offset_is_whole_pixels() {
        assert!(stage_style(0.0).ends_with("transform: translateY(0px)"));
        assert!(stage_style(412.6).ends_with("transform: translateY(413px)"));
    }

    #[test]
    fn page_scrolls_while_stage_fills_viewport() {
        let stage = stage_style(0.0);

        assert!(CONTAINER_STYLE.contains("height: 200vh"));
        assert!(stage.contains("height: 100vh"), "{stage}");
        assert!(stage.contains("overflow: hidden"), "{stage}");
    }

    #[test]
    fn hero_and_promo_show_images() {
        assert_eq!(element_image(Element::Hero).map(|(src, _)| src), Some(HERO_IMAGE));
        assert_eq!(
            element_image(Element::PromoPanel).map(|(src, _)| src),
            Some(PROMO_IMAGE)
        );
        assert_eq!(element_image(Element::Wordmark), None);
    }

    #[test]
    fn every_element_is_placed() {
        for element in Element::ALL {
            assert!(element_layout(element).starts_with("position:"), "{element:?}");
        }
    }
}
