use web_sys::MouseEvent;
use yew::prelude::*;

use crate::faq::{filtered, CATEGORIES};

/// FAQ accordion with category chips. One entry open at a time; switching
/// category closes the open entry because indices refer to the filtered
/// list.
#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let category = use_state(|| "all");
    let active = use_state(|| None::<usize>);

    let entries = filtered(*category);

    html! {
        <section id="faq" class="faq-section">
            <div class="section-intro">
                <span class="section-tag">{"Frequently Asked Questions"}</span>
                <h2>{"Common "}<span class="accent">{"Questions"}</span>{" About SigRid"}</h2>
                <p>
                    {"Find answers to the most common questions about our product and \
                      smoking cessation journey."}
                </p>
            </div>

            <div class="faq-chips">
                { for CATEGORIES.iter().map(|&chip| {
                    let selected = *category == chip;
                    let onclick = {
                        let category = category.clone();
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| {
                            category.set(chip);
                            active.set(None);
                        })
                    };
                    html! {
                        <button
                            class={classes!("faq-chip", selected.then(|| "selected"))}
                            {onclick}
                        >
                            { chip }
                        </button>
                    }
                }) }
            </div>

            <div class="faq-items">
                { for entries.iter().enumerate().map(|(index, entry)| {
                    let is_open = *active == Some(index);
                    let toggle = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| {
                            active.set(if *active == Some(index) {
                                None
                            } else {
                                Some(index)
                            });
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then(|| "open"))}>
                            <button class="faq-question" onclick={toggle}>
                                <span>{ entry.question }</span>
                                <span class="faq-toggle-icon">
                                    { if is_open { "−" } else { "+" } }
                                </span>
                            </button>
                            <div class="faq-answer">
                                <p>{ entry.answer }</p>
                            </div>
                        </div>
                    }
                }) }
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 6rem 2rem;
                    max-width: 900px;
                    margin: 0 auto;
                }

                .faq-chips {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2.5rem;
                }

                .faq-chip {
                    padding: 0.6rem 1.25rem;
                    border: none;
                    border-radius: 9999px;
                    background: #f1f5f9;
                    color: #334155;
                    font-size: 0.95rem;
                    font-weight: 500;
                    text-transform: capitalize;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .faq-chip:hover {
                    background: #e2e8f0;
                }

                .faq-chip.selected {
                    background: #0d9488;
                    color: #ffffff;
                    box-shadow: 0 4px 12px rgba(13, 148, 136, 0.3);
                }

                .faq-item {
                    background: linear-gradient(to right, #f0fdfa, #f8fafc);
                    border-radius: 16px;
                    box-shadow: 0 4px 14px rgba(15, 23, 42, 0.08);
                    margin-bottom: 1.25rem;
                    overflow: hidden;
                    transition: box-shadow 0.3s ease;
                }

                .faq-item.open {
                    box-shadow: 0 0 0 2px #5eead4, 0 8px 24px rgba(13, 148, 136, 0.2);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    border: none;
                    background: none;
                    font-size: 1.15rem;
                    font-weight: 600;
                    color: #1e293b;
                    text-align: left;
                    cursor: pointer;
                }

                .faq-toggle-icon {
                    flex-shrink: 0;
                    width: 2rem;
                    height: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #ffffff;
                    color: #0d9488;
                    font-size: 1.25rem;
                    box-shadow: 0 2px 6px rgba(15, 23, 42, 0.1);
                    transition: transform 0.3s ease;
                }

                .faq-item.open .faq-toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease-in-out;
                }

                .faq-item.open .faq-answer {
                    max-height: 24rem;
                }

                .faq-answer p {
                    margin: 0;
                    padding: 0 1.5rem 1.5rem;
                    color: #475569;
                    line-height: 1.7;
                }

                @media (max-width: 768px) {
                    .faq-section {
                        padding: 4rem 1rem;
                    }

                    .faq-question {
                        font-size: 1rem;
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
