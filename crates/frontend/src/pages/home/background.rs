//! Keeps the landing page's decorative background sized to the content
//! above the action boxes.
//!
//! The height lands in the `--home-bg-height` custom property on the page
//! root, where the stylesheet clips the background image to it.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Extra space below the boxes' top edge, in root-font-size units.
const EXTRA_FONT_SIZE_UNITS: f64 = 4.0;
const FONT_SIZE_FALLBACK_PX: f64 = 16.0;

/// Height for `--home-bg-height`: distance from the page top to the boxes'
/// top plus a fixed em-based margin, clamped at zero.
pub fn background_height_px(home_top: f64, boxes_top: f64, font_size_px: f64) -> f64 {
    let font_size = if font_size_px > 0.0 {
        font_size_px
    } else {
        FONT_SIZE_FALLBACK_PX
    };
    ((boxes_top - home_top) + font_size * EXTRA_FONT_SIZE_UNITS).max(0.0)
}

/// Parse a computed `font-size` value like "16px".
fn parse_font_size(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches("px")
        .parse()
        .unwrap_or(FONT_SIZE_FALLBACK_PX)
}

fn update_background_height(home_el: &HtmlElement, boxes_el: &HtmlElement) {
    let home_rect = home_el.get_bounding_client_rect();
    let boxes_rect = boxes_el.get_bounding_client_rect();
    let font_size = web_sys::window()
        .and_then(|w| w.get_computed_style(home_el).ok().flatten())
        .and_then(|style| style.get_property_value("font-size").ok())
        .map(|value| parse_font_size(&value))
        .unwrap_or(FONT_SIZE_FALLBACK_PX);

    let height = background_height_px(home_rect.top(), boxes_rect.top(), font_size);
    let _ = home_el
        .style()
        .set_property("--home-bg-height", &format!("{}px", height));
}

/// Subscriptions held for the lifetime of the page. Dropping the closures
/// after detaching them is what actually frees the listeners.
struct Subscriptions {
    on_resize: Closure<dyn FnMut()>,
    observer: Option<web_sys::ResizeObserver>,
    _on_observed: Closure<dyn FnMut()>,
}

/// Keep `--home-bg-height` in sync with the layout: measured once after
/// mount, again shortly after for late layout shifts, on every window
/// resize, and on observed size changes of either element. Everything is
/// detached on cleanup.
pub fn use_background_sizer(home_ref: NodeRef<html::Main>, boxes_ref: NodeRef<html::Div>) {
    // Closures and the observer are not Send; park them thread-locally.
    let subscriptions = StoredValue::new_local(None::<Subscriptions>);

    Effect::new(move |_| {
        if subscriptions.with_value(|subs| subs.is_some()) {
            return;
        }

        let update = Rc::new(move || {
            let Some(home_el) = home_ref.get_untracked() else {
                return;
            };
            let Some(boxes_el) = boxes_ref.get_untracked() else {
                return;
            };
            update_background_height(&home_el, &boxes_el);
        });

        update();

        // Fonts and the background image can land after first paint and
        // shift the boxes; measure once more shortly after mount.
        {
            let update = Rc::clone(&update);
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(100).await;
                update();
            });
        }

        let on_observed = Closure::wrap(Box::new({
            let update = Rc::clone(&update);
            move || update()
        }) as Box<dyn FnMut()>);

        let observer = web_sys::ResizeObserver::new(on_observed.as_ref().unchecked_ref()).ok();
        if let Some(observer) = &observer {
            if let Some(home_el) = home_ref.get_untracked() {
                observer.observe(&home_el);
            }
            if let Some(boxes_el) = boxes_ref.get_untracked() {
                observer.observe(&boxes_el);
            }
        }

        let on_resize = Closure::wrap(Box::new({
            let update = Rc::clone(&update);
            move || update()
        }) as Box<dyn FnMut()>);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }

        subscriptions.set_value(Some(Subscriptions {
            on_resize,
            observer,
            _on_observed: on_observed,
        }));
    });

    on_cleanup(move || {
        subscriptions.update_value(|subs| {
            if let Some(subs) = subs.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        subs.on_resize.as_ref().unchecked_ref(),
                    );
                }
                if let Some(observer) = subs.observer {
                    observer.disconnect();
                }
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_spans_from_page_top_to_boxes_top_plus_margin() {
        assert_eq!(background_height_px(10.0, 410.0, 16.0), 464.0);
    }

    #[test]
    fn height_clamps_at_zero_when_boxes_sit_above_the_page_top() {
        assert_eq!(background_height_px(500.0, 10.0, 16.0), 0.0);
    }

    #[test]
    fn zero_font_size_falls_back_to_sixteen() {
        assert_eq!(background_height_px(0.0, 100.0, 0.0), 164.0);
    }

    #[test]
    fn parses_computed_font_size() {
        assert_eq!(parse_font_size("16px"), 16.0);
        assert_eq!(parse_font_size("13.5px"), 13.5);
        assert_eq!(parse_font_size("garbage"), FONT_SIZE_FALLBACK_PX);
    }
}
