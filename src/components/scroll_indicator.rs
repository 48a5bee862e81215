use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::scroll::{
    dash_offset, percent_label, scroll_ratio, LABEL_THRESHOLD_PX, PROGRESS_RING_CIRCUMFERENCE,
};

/// Fixed back-to-top control whose fill and ring arc track how far down the
/// page the viewport is. Derived state only; recomputed on every scroll
/// event and once at mount.
#[function_component(ScrollIndicator)]
pub fn scroll_indicator() -> Html {
    let ratio = use_state(|| 0.0_f64);
    let offset = use_state(|| 0.0_f64);

    {
        let ratio = ratio.clone();
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let recompute = move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    let viewport = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    let document_height = document
                        .body()
                        .map(|body| body.scroll_height() as f64)
                        .unwrap_or(0.0);
                    offset.set(scroll_y);
                    ratio.set(scroll_ratio(scroll_y, document_height, viewport));
                };

                recompute();
                let scroll_callback = Closure::wrap(Box::new(recompute) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let scroll_to_top = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <div class="scroll-indicator">
            <button class="scroll-indicator-button" onclick={scroll_to_top} title="Back to top">
                <div
                    class="scroll-indicator-fill"
                    style={format!("transform: scaleY({:.3});", *ratio)}
                ></div>
                <svg viewBox="0 0 100 100">
                    <circle cx="50" cy="50" r="46" fill="none" stroke="#e2e8f0" stroke-width="8" />
                    <circle
                        cx="50"
                        cy="50"
                        r="46"
                        fill="none"
                        stroke="#0d9488"
                        stroke-width="8"
                        stroke-linecap="round"
                        stroke-dasharray={PROGRESS_RING_CIRCUMFERENCE.to_string()}
                        stroke-dashoffset={format!("{:.2}", dash_offset(PROGRESS_RING_CIRCUMFERENCE, *ratio))}
                        transform="rotate(-90 50 50)"
                    />
                </svg>
                <span class="scroll-indicator-arrow">{"↑"}</span>
            </button>
            <div class={classes!(
                "scroll-indicator-label",
                (*offset > LABEL_THRESHOLD_PX).then(|| "visible")
            )}>
                { percent_label(*ratio) }
            </div>
            <style>
                {r#"
                .scroll-indicator {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                }

                .scroll-indicator-button {
                    position: relative;
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 50%;
                    background: #ffffff;
                    box-shadow: 0 8px 24px rgba(15, 23, 42, 0.2);
                    cursor: pointer;
                    overflow: hidden;
                }

                .scroll-indicator-fill {
                    position: absolute;
                    inset: 0;
                    background: #14b8a6;
                    opacity: 0.25;
                    transform-origin: bottom;
                    transition: transform 0.15s ease-out;
                }

                .scroll-indicator-button svg {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                }

                .scroll-indicator-arrow {
                    position: relative;
                    z-index: 1;
                    color: #0d9488;
                    font-size: 1.2rem;
                }

                .scroll-indicator-label {
                    position: absolute;
                    bottom: -1.7rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #ffffff;
                    color: #0d9488;
                    font-size: 0.75rem;
                    font-weight: 500;
                    padding: 0.15rem 0.5rem;
                    border-radius: 6px;
                    box-shadow: 0 2px 8px rgba(15, 23, 42, 0.15);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .scroll-indicator-label.visible {
                    opacity: 1;
                }
                "#}
            </style>
        </div>
    }
}
