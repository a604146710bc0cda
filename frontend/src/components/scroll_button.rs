use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::hooks::scroll_window_to_top;

/// Fraction of the scrollable height already scrolled, in `0.0..=1.0`.
fn scroll_progress() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let total = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    let scrollable = total - viewport;
    if scrollable > 0.0 {
        (scroll_y / scrollable).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn scroll_window_to_bottom() {
    let Some(window) = window() else {
        return;
    };
    let bottom = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    let options = ScrollToOptions::new();
    options.set_top(bottom);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Floating button: jumps to the bottom while in the upper half of the page
/// and back to the top from the lower half.
#[function_component(ScrollButton)]
pub fn scroll_button() -> Html {
    let points_up = use_state(|| false);

    {
        let points_up = points_up.clone();
        use_effect_with((), move |_| {
            points_up.set(scroll_progress() > 0.5);
            let listener = window().map(|window| {
                let handler = {
                    let points_up = points_up.clone();
                    Closure::<dyn Fn()>::new(move || points_up.set(scroll_progress() > 0.5))
                };
                for event in ["scroll", "resize"] {
                    let _ = window
                        .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
                }
                (window, handler)
            });

            move || {
                if let Some((window, handler)) = listener {
                    for event in ["scroll", "resize"] {
                        let _ = window.remove_event_listener_with_callback(
                            event,
                            handler.as_ref().unchecked_ref(),
                        );
                    }
                }
            }
        });
    }

    let onclick = {
        let points_up = *points_up;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if points_up {
                scroll_window_to_top();
            } else {
                scroll_window_to_bottom();
            }
        })
    };
    let label = if *points_up { "Scroll to top" } else { "Scroll to bottom" };

    html! {
        <button
            type="button"
            class="fixed bottom-5 right-5 z-50 h-12 w-12 rounded-full bg-[var(--primary)] text-white shadow-lg transition-transform hover:scale-105"
            {onclick}
            aria-label={label}
            title={label}
        >
            <i class={classes!("fas", if *points_up { "fa-arrow-up" } else { "fa-arrow-down" })} aria-hidden="true"></i>
        </button>
    }
}
