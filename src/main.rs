use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod contact;
mod faq;
mod scroll;
mod sheets;
mod pages {
    pub mod home;
}
mod components {
    pub mod blog_list;
    pub mod contact_form;
    pub mod faq_section;
    pub mod scroll_indicator;
}

use config::Config;
use pages::home::Home;

const NAV_SECTIONS: [(&str, &str); 9] = [
    ("hero", "Home"),
    ("about-us", "About"),
    ("key-metrics", "Key Metrics"),
    ("features", "Features"),
    ("how-to-use", "How to Use"),
    ("testimonials", "Testimonials"),
    ("blog", "Blog"),
    ("faq", "FAQ's"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_section = use_state(|| "hero");

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 50.0);

                    // The active link is the last section whose top has
                    // passed under the fixed header.
                    let mut current = "hero";
                    for (id, _) in NAV_SECTIONS {
                        if let Some(section) = document.get_element_by_id(id) {
                            if section.get_bounding_client_rect().top() <= 160.0 {
                                current = id;
                            }
                        }
                    }
                    active_section.set(current);
                }) as Box<dyn FnMut()>);

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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">{"SigRid"}</a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for NAV_SECTIONS.iter().map(|(id, label)| {
                        let href = format!("#{id}");
                        html! {
                            <a
                                class={classes!("nav-link", (*active_section == *id).then(|| "active"))}
                                {href}
                                onclick={close_menu.clone()}
                            >
                                { *label }
                            </a>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 2px 8px rgba(15, 23, 42, 0.08);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 1.5rem;
                }

                .nav-logo {
                    font-size: 1.9rem;
                    font-weight: 700;
                    color: #0d9488;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    position: relative;
                    color: #334155;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #0d9488;
                }

                .nav-link.active {
                    color: #0d9488;
                }

                .nav-link.active::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: -0.35rem;
                    width: 100%;
                    height: 2px;
                    background: #14b8a6;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #334155;
                }

                @media (max-width: 900px) {
                    .burger-menu {
                        display: flex;
                        z-index: 102;
                    }

                    .nav-right {
                        position: fixed;
                        inset: 0;
                        flex-direction: column;
                        justify-content: center;
                        background: #ffffff;
                        transform: translateY(-100%);
                        transition: transform 0.3s ease;
                        z-index: 101;
                    }

                    .nav-right.mobile-menu-open {
                        transform: translateY(0);
                    }

                    .nav-link {
                        font-size: 1.2rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Config,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <>
            <Nav />
            <Home config={props.config} />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ConfigErrorProps {
    missing: Vec<&'static str>,
}

/// Rendered instead of the app when required deployment configuration is
/// absent, so a broken build cannot issue requests to malformed URLs.
#[function_component(ConfigErrorScreen)]
fn config_error_screen(props: &ConfigErrorProps) -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; font-family: sans-serif; color: #0f172a;">
            <h1>{"Site configuration incomplete"}</h1>
            <p>{"This build is missing required deployment settings:"}</p>
            <ul>
                { for props.missing.iter().map(|key| html! { <li><code>{ *key }</code></li> }) }
            </ul>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    match config::from_env() {
        Ok(config) => {
            info!("starting sigrid site");
            yew::Renderer::<App>::with_props(AppProps { config }).render();
        }
        Err(missing) => {
            for key in &missing {
                log::error!("missing required configuration: {key}");
            }
            yew::Renderer::<ConfigErrorScreen>::with_props(ConfigErrorProps { missing }).render();
        }
    }
}
