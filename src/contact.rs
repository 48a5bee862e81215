//! Contact form submission relay.
//!
//! Two delivery sinks: the script webhook (always) and the transactional
//! email API (when configured). The webhook is dispatched in no-cors mode,
//! so its only observable outcomes are "left without a transport error" and
//! "transport error"; delivery success is never inferred beyond that. The
//! email call's result is observable. `deliver` records the two outcomes
//! separately instead of folding them into one flag.

use chrono::Local;
use gloo_console::error;
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::json;
use web_sys::RequestMode;

use crate::config::{Config, EmailService, RequiredFields};

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(rename = "submittedAt", skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

impl SubmissionPayload {
    pub fn new(name: String, email: String, phone: String, message: String) -> Self {
        Self {
            name,
            email,
            phone,
            message,
            submitted_at: None,
        }
    }

    /// Stamp the payload with a formatted local timestamp.
    pub fn stamped(mut self) -> Self {
        self.submitted_at = Some(Local::now().format("%d/%m/%Y %H:%M:%S").to_string());
        self
    }
}

/// Field-level validation. Runs before any network call; a non-empty result
/// rejects the submit.
pub fn missing_required(payload: &SubmissionPayload, required: RequiredFields) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if payload.name.trim().is_empty() {
        missing.push("name");
    }
    if required.email && payload.email.trim().is_empty() {
        missing.push("email");
    }
    if required.phone && payload.phone.trim().is_empty() {
        missing.push("phone");
    }
    if payload.message.trim().is_empty() {
        missing.push("message");
    }
    missing
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SinkOutcome {
    Delivered,
    Failed,
}

/// Which sinks succeeded for one submission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeliveryReport {
    pub webhook: SinkOutcome,
    pub email: Option<SinkOutcome>,
}

impl DeliveryReport {
    pub fn all_ok(&self) -> bool {
        self.webhook == SinkOutcome::Delivered && self.email != Some(SinkOutcome::Failed)
    }
}

fn email_body(service: &EmailService, payload: &SubmissionPayload) -> serde_json::Value {
    json!({
        "service_id": service.service_id,
        "template_id": service.template_id,
        "user_id": service.public_key,
        "template_params": {
            "name": payload.name,
            "email": payload.email,
            "phone": payload.phone,
            "message": payload.message,
            "time": payload.submitted_at,
        },
    })
}

async fn dispatch_webhook(url: &str, payload: &SubmissionPayload) -> SinkOutcome {
    let request = match Request::post(url)
        .mode(RequestMode::NoCors)
        .json(payload)
    {
        Ok(request) => request,
        Err(err) => {
            error!(format!("webhook request could not be built: {err}"));
            return SinkOutcome::Failed;
        }
    };

    // The no-cors response is opaque; a returned Ok only means the request
    // left the browser.
    match request.send().await {
        Ok(_) => SinkOutcome::Delivered,
        Err(err) => {
            error!(format!("webhook dispatch failed: {err}"));
            SinkOutcome::Failed
        }
    }
}

async fn send_email(service: &EmailService, payload: &SubmissionPayload) -> SinkOutcome {
    let request = match Request::post(EMAILJS_SEND_URL).json(&email_body(service, payload)) {
        Ok(request) => request,
        Err(err) => {
            error!(format!("email request could not be built: {err}"));
            return SinkOutcome::Failed;
        }
    };

    match request.send().await {
        Ok(response) if response.ok() => SinkOutcome::Delivered,
        Ok(response) => {
            error!(format!("email send returned status {}", response.status()));
            SinkOutcome::Failed
        }
        Err(err) => {
            error!(format!("email send failed: {err}"));
            SinkOutcome::Failed
        }
    }
}

/// Best-effort delivery to every configured sink.
pub async fn deliver(config: &Config, payload: &SubmissionPayload) -> DeliveryReport {
    let webhook = dispatch_webhook(config.webhook_url, payload).await;
    let email = match &config.email {
        Some(service) => Some(send_email(service, payload).await),
        None => None,
    };
    DeliveryReport { webhook, email }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SubmissionPayload {
        SubmissionPayload::new(
            "Asha".into(),
            "asha@example.com".into(),
            "+911234567890".into(),
            "How long does one bottle last?".into(),
        )
    }

    const ALL_REQUIRED: RequiredFields = RequiredFields {
        email: true,
        phone: true,
    };

    #[test]
    fn complete_payload_passes_validation() {
        assert!(missing_required(&payload(), ALL_REQUIRED).is_empty());
    }

    #[test]
    fn name_and_message_are_always_required() {
        let mut p = payload();
        p.name = "   ".into();
        p.message = String::new();
        let relaxed = RequiredFields {
            email: false,
            phone: false,
        };
        assert_eq!(missing_required(&p, relaxed), vec!["name", "message"]);
    }

    #[test]
    fn email_and_phone_follow_the_deployment_policy() {
        let mut p = payload();
        p.email = String::new();
        p.phone = String::new();
        assert_eq!(missing_required(&p, ALL_REQUIRED), vec!["email", "phone"]);
        assert!(missing_required(
            &p,
            RequiredFields {
                email: false,
                phone: false
            }
        )
        .is_empty());
    }

    #[test]
    fn webhook_body_matches_the_field_values() {
        let body = serde_json::to_value(payload()).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Asha",
                "email": "asha@example.com",
                "phone": "+911234567890",
                "message": "How long does one bottle last?",
            })
        );
    }

    #[test]
    fn stamping_adds_the_timestamp_field() {
        let body = serde_json::to_value(payload().stamped()).unwrap();
        assert!(body.get("submittedAt").and_then(|v| v.as_str()).is_some());
    }

    #[test]
    fn email_body_carries_the_template_params() {
        let service = EmailService {
            service_id: "svc",
            template_id: "tpl",
            public_key: "pub",
        };
        let body = email_body(&service, &payload());
        assert_eq!(body["service_id"], "svc");
        assert_eq!(body["template_id"], "tpl");
        assert_eq!(body["user_id"], "pub");
        assert_eq!(body["template_params"]["name"], "Asha");
        assert_eq!(
            body["template_params"]["message"],
            "How long does one bottle last?"
        );
    }

    #[test]
    fn report_is_ok_only_when_every_configured_sink_succeeded() {
        let ok = DeliveryReport {
            webhook: SinkOutcome::Delivered,
            email: None,
        };
        assert!(ok.all_ok());

        let ok_with_email = DeliveryReport {
            webhook: SinkOutcome::Delivered,
            email: Some(SinkOutcome::Delivered),
        };
        assert!(ok_with_email.all_ok());

        let webhook_failed = DeliveryReport {
            webhook: SinkOutcome::Failed,
            email: Some(SinkOutcome::Delivered),
        };
        assert!(!webhook_failed.all_ok());

        let email_failed = DeliveryReport {
            webhook: SinkOutcome::Delivered,
            email: Some(SinkOutcome::Failed),
        };
        assert!(!email_failed.all_ok());
    }
}
