use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::config::Config;
use crate::contact::{deliver, missing_required, SubmissionPayload};

const THANK_YOU: &str = "Thank you for contacting us! We'll reach out to you shortly!";
const FAILED: &str = "Failed to submit the form.";
const STATUS_HIDE_MS: u32 = 4_000;
const CLEAR_SETTLE_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub config: Config,
}

/// Four-field contact form. Submission is disabled while a send is in
/// flight so a double click cannot dispatch the webhook twice. Fields are
/// cleared only after every configured sink succeeded.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state(|| false);
    let status = use_state(|| None::<String>);

    let on_name = input_handler(name.clone());
    let on_email = input_handler(email.clone());
    let on_phone = input_handler(phone.clone());
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let sending = sending.clone();
        let status = status.clone();
        let config = props.config;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            let payload = SubmissionPayload::new(
                (*name).clone(),
                (*email).clone(),
                (*phone).clone(),
                (*message).clone(),
            )
            .stamped();

            let missing = missing_required(&payload, config.required);
            if !missing.is_empty() {
                status.set(Some(format!("Please fill in: {}.", missing.join(", "))));
                hide_later(status.clone());
                return;
            }

            sending.set(true);
            status.set(Some("Sending...".to_string()));

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let message = message.clone();
            let sending = sending.clone();
            let status = status.clone();
            spawn_local(async move {
                let report = deliver(&config, &payload).await;
                sending.set(false);

                if report.all_ok() {
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    message.set(String::new());

                    // Let the cleared fields render before swapping the
                    // status text.
                    let status = status.clone();
                    Timeout::new(CLEAR_SETTLE_MS, move || {
                        status.set(Some(THANK_YOU.to_string()));
                        hide_later(status.clone());
                    })
                    .forget();
                } else {
                    status.set(Some(FAILED.to_string()));
                    hide_later(status.clone());
                }
            });
        })
    };

    html! {
        <div class="contact-form-wrap">
            <form class="contact-form" {onsubmit}>
                <div class="contact-form-row">
                    <div class="contact-field">
                        <label for="name">{"Your Name"}</label>
                        <input
                            id="name"
                            type="text"
                            value={(*name).clone()}
                            oninput={on_name}
                            required=true
                        />
                    </div>
                    <div class="contact-field">
                        <label for="email">{"Your Email"}</label>
                        <input
                            id="email"
                            type="email"
                            value={(*email).clone()}
                            oninput={on_email}
                            required={props.config.required.email}
                        />
                    </div>
                </div>
                <div class="contact-field">
                    <label for="phone">{"Your Phone Number"}</label>
                    <input
                        id="phone"
                        type="text"
                        value={(*phone).clone()}
                        oninput={on_phone}
                        required={props.config.required.phone}
                    />
                </div>
                <div class="contact-field">
                    <label for="message">{"Your Query"}</label>
                    <textarea
                        id="message"
                        value={(*message).clone()}
                        oninput={on_message}
                        required=true
                    />
                </div>
                <div class="contact-submit-row">
                    <button type="submit" class="contact-submit" disabled={*sending}>
                        { if *sending { "Sending..." } else { "Send Message" } }
                    </button>
                </div>
            </form>
            <div class={classes!("contact-status", status.is_some().then(|| "visible"))}>
                { status.as_deref().unwrap_or("") }
            </div>
            <style>
                {r#"
                .contact-form-wrap {
                    width: 100%;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }

                .contact-form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                }

                .contact-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .contact-field label {
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #334155;
                }

                .contact-field input,
                .contact-field textarea {
                    padding: 0.85rem 1rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 10px;
                    background: rgba(248, 250, 252, 0.8);
                    font-size: 1rem;
                    font-family: inherit;
                }

                .contact-field textarea {
                    height: 150px;
                    resize: none;
                }

                .contact-field input:focus,
                .contact-field textarea:focus {
                    outline: none;
                    border-color: #14b8a6;
                    box-shadow: 0 0 0 2px rgba(20, 184, 166, 0.2);
                }

                .contact-submit-row {
                    text-align: center;
                    padding-top: 0.5rem;
                }

                .contact-submit {
                    border: none;
                    border-radius: 10px;
                    padding: 1rem 2rem;
                    font-size: 1rem;
                    color: #ffffff;
                    cursor: pointer;
                    background: linear-gradient(to right, #14b8a6, #059669);
                    box-shadow: 0 4px 12px rgba(13, 148, 136, 0.3);
                }

                .contact-submit:disabled {
                    opacity: 0.6;
                    cursor: default;
                }

                .contact-status {
                    margin-top: 1.5rem;
                    text-align: center;
                    color: #0d9488;
                    font-weight: 500;
                    opacity: 0;
                    transition: opacity 1s ease-in-out;
                }

                .contact-status.visible {
                    opacity: 1;
                }

                @media (max-width: 768px) {
                    .contact-form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

fn input_handler(state: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

fn hide_later(status: UseStateHandle<Option<String>>) {
    Timeout::new(STATUS_HIDE_MS, move || status.set(None)).forget();
}
