use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::Config;
use crate::sheets::{fetch_posts, BlogPost, FetchOutcome};

#[derive(Properties, PartialEq)]
pub struct BlogListProps {
    pub config: Config,
}

/// Blog section fed by the spreadsheet read API. Fetches once on mount; at
/// most one article panel is expanded at a time.
#[function_component(BlogList)]
pub fn blog_list(props: &BlogListProps) -> Html {
    let outcome = use_state(|| None::<FetchOutcome>);
    let expanded = use_state(|| None::<usize>);

    {
        let outcome = outcome.clone();
        let config = props.config;
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    outcome.set(Some(fetch_posts(&config).await));
                });
                || ()
            },
            (),
        );
    }

    let body = match &*outcome {
        None => html! {
            <div class="blog-status">
                <div class="blog-spinner"></div>
                <p>{"Loading blogs..."}</p>
            </div>
        },
        Some(FetchOutcome::Empty) => html! {
            <div class="blog-status">{"No blog data found."}</div>
        },
        Some(FetchOutcome::Failed) => html! {
            <div class="blog-status blog-status-error">{"Failed to load blog data."}</div>
        },
        Some(FetchOutcome::Posts(posts)) => html! {
            <div class="blog-entries">
                { for posts.iter().enumerate().map(|(index, post)| {
                    render_post(index, post, &expanded)
                }) }
            </div>
        },
    };

    html! {
        <section id="blog" class="blog-section">
            <div class="section-intro">
                <span class="section-tag">{"Latest Articles"}</span>
                <h2>{"Insights From Our "}<span class="accent">{"Blog"}</span></h2>
                <p>
                    {"Stay informed with the latest research, tips, and success stories \
                      from our smoking cessation experts."}
                </p>
            </div>
            { body }
            <style>
                {r#"
                .blog-section {
                    padding: 6rem 2rem;
                    max-width: 1000px;
                    margin: 0 auto;
                }

                .blog-status {
                    text-align: center;
                    padding: 3rem 1rem;
                    color: #475569;
                    font-size: 1.1rem;
                }

                .blog-status-error {
                    background: #fef2f2;
                    border: 1px solid #fecaca;
                    border-radius: 12px;
                    color: #b91c1c;
                }

                .blog-spinner {
                    width: 44px;
                    height: 44px;
                    margin: 0 auto 1rem;
                    border: 4px solid #ccfbf1;
                    border-top-color: #0d9488;
                    border-radius: 50%;
                    animation: blog-spin 0.9s linear infinite;
                }

                @keyframes blog-spin {
                    to { transform: rotate(360deg); }
                }

                .blog-entry {
                    border-radius: 16px;
                    overflow: hidden;
                    box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08);
                    margin-bottom: 2rem;
                    background: #ffffff;
                    transition: box-shadow 0.3s ease;
                }

                .blog-entry.open {
                    box-shadow: 0 12px 32px rgba(13, 148, 136, 0.25);
                }

                .blog-entry-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                }

                .blog-entry.even .blog-entry-header {
                    background: linear-gradient(to right, #f1f5f9, #e2e8f0);
                    color: #1e293b;
                }

                .blog-entry.odd .blog-entry-header {
                    background: linear-gradient(to right, #0d9488, #0f766e);
                    color: #ffffff;
                }

                .blog-entry-header h3 {
                    font-size: 1.4rem;
                    margin: 0;
                }

                .blog-toggle {
                    border: none;
                    border-radius: 8px;
                    padding: 0.6rem 1.2rem;
                    font-size: 0.95rem;
                    cursor: pointer;
                    white-space: nowrap;
                    background: #0d9488;
                    color: #ffffff;
                    transition: background 0.2s ease;
                }

                .blog-entry.odd .blog-toggle {
                    background: rgba(255, 255, 255, 0.2);
                }

                .blog-toggle:hover {
                    background: #0f766e;
                }

                .blog-embed {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease-in-out;
                }

                .blog-entry.open .blog-embed {
                    max-height: 650px;
                }

                .blog-embed iframe {
                    display: block;
                    width: 100%;
                    height: 600px;
                    border: none;
                    background: #ffffff;
                }

                .blog-entry-footer {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 1.5rem;
                    border-top: 1px solid #e2e8f0;
                    background: #f8fafc;
                }

                .blog-entry-footer span {
                    font-size: 0.9rem;
                    color: #64748b;
                }

                .blog-open-full {
                    border: 1px solid #99f6e4;
                    border-radius: 8px;
                    background: none;
                    color: #0d9488;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }

                .blog-open-full:hover {
                    background: #f0fdfa;
                }

                @media (max-width: 768px) {
                    .blog-section {
                        padding: 4rem 1rem;
                    }

                    .blog-entry-header {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </section>
    }
}

fn render_post(index: usize, post: &BlogPost, expanded: &UseStateHandle<Option<usize>>) -> Html {
    let is_open = **expanded == Some(index);
    let parity = if index % 2 == 0 { "even" } else { "odd" };

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| {
            expanded.set(if *expanded == Some(index) {
                None
            } else {
                Some(index)
            });
        })
    };

    let open_full = post.link.clone().map(|link| {
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&link, "_blank");
            }
        })
    });

    html! {
        <article class={classes!("blog-entry", parity, is_open.then(|| "open"))}>
            <div class="blog-entry-header">
                <h3>{ &post.title }</h3>
                {
                    // Rows without a link column render as title-only entries.
                    if post.link.is_some() {
                        html! {
                            <button class="blog-toggle" onclick={toggle}>
                                { if is_open { "Hide Content" } else { "Read Article" } }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            {
                if let Some(embed_url) = post.embed_url() {
                    html! {
                        <div class="blog-embed">
                            {
                                if is_open {
                                    html! {
                                        <iframe src={embed_url} title={post.title.clone()} />
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if is_open {
                    html! {
                        <div class="blog-entry-footer">
                            <span>{"Viewing article preview"}</span>
                            {
                                if let Some(open_full) = open_full {
                                    html! {
                                        <button class="blog-open-full" onclick={open_full}>
                                            {"Open Full Article"}
                                        </button>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </article>
    }
}
