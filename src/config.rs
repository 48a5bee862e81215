//! Deployment configuration, baked in at build time.
//!
//! Every value comes from the environment of the build that produced the wasm
//! binary (`SIGRID_*` variables). Missing required keys are reported all at
//! once so a broken deployment fails on startup instead of issuing requests
//! to malformed URLs.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmailService {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

/// Per-deployment required-field policy for the contact form. Name and
/// message are always required; email and phone can be relaxed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RequiredFields {
    pub email: bool,
    pub phone: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub sheet_id: &'static str,
    pub sheet_range: &'static str,
    pub sheets_api_key: &'static str,
    pub webhook_url: &'static str,
    pub email: Option<EmailService>,
    pub required: RequiredFields,
}

#[derive(Default)]
struct RawConfig {
    sheet_id: Option<&'static str>,
    sheet_range: Option<&'static str>,
    sheets_api_key: Option<&'static str>,
    webhook_url: Option<&'static str>,
    emailjs_service_id: Option<&'static str>,
    emailjs_template_id: Option<&'static str>,
    emailjs_public_key: Option<&'static str>,
    email_optional: Option<&'static str>,
    phone_optional: Option<&'static str>,
}

impl RawConfig {
    fn from_env() -> Self {
        Self {
            sheet_id: option_env!("SIGRID_SHEET_ID"),
            sheet_range: option_env!("SIGRID_SHEET_RANGE"),
            sheets_api_key: option_env!("SIGRID_SHEETS_API_KEY"),
            webhook_url: option_env!("SIGRID_WEBHOOK_URL"),
            emailjs_service_id: option_env!("SIGRID_EMAILJS_SERVICE_ID"),
            emailjs_template_id: option_env!("SIGRID_EMAILJS_TEMPLATE_ID"),
            emailjs_public_key: option_env!("SIGRID_EMAILJS_PUBLIC_KEY"),
            email_optional: option_env!("SIGRID_EMAIL_OPTIONAL"),
            phone_optional: option_env!("SIGRID_PHONE_OPTIONAL"),
        }
    }
}

fn flag(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true"))
}

fn validate(raw: RawConfig) -> Result<Config, Vec<&'static str>> {
    let mut missing = Vec::new();
    let mut require = |value: Option<&'static str>, key: &'static str| -> &'static str {
        match value {
            Some(v) => v,
            None => {
                missing.push(key);
                ""
            }
        }
    };

    let sheet_id = require(raw.sheet_id, "SIGRID_SHEET_ID");
    let sheet_range = require(raw.sheet_range, "SIGRID_SHEET_RANGE");
    let sheets_api_key = require(raw.sheets_api_key, "SIGRID_SHEETS_API_KEY");
    let webhook_url = require(raw.webhook_url, "SIGRID_WEBHOOK_URL");

    // An entirely absent email triple disables the email sink. A partial
    // triple is a deployment mistake, not an intent to disable it.
    let email = match (
        raw.emailjs_service_id,
        raw.emailjs_template_id,
        raw.emailjs_public_key,
    ) {
        (None, None, None) => None,
        (service_id, template_id, public_key) => Some(EmailService {
            service_id: require(service_id, "SIGRID_EMAILJS_SERVICE_ID"),
            template_id: require(template_id, "SIGRID_EMAILJS_TEMPLATE_ID"),
            public_key: require(public_key, "SIGRID_EMAILJS_PUBLIC_KEY"),
        }),
    };

    if !missing.is_empty() {
        return Err(missing);
    }

    Ok(Config {
        sheet_id,
        sheet_range,
        sheets_api_key,
        webhook_url,
        email,
        required: RequiredFields {
            email: !flag(raw.email_optional),
            phone: !flag(raw.phone_optional),
        },
    })
}

pub fn from_env() -> Result<Config, Vec<&'static str>> {
    validate(RawConfig::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> RawConfig {
        RawConfig {
            sheet_id: Some("sheet"),
            sheet_range: Some("Blogs!A2:B"),
            sheets_api_key: Some("key"),
            webhook_url: Some("https://script.example/exec"),
            ..RawConfig::default()
        }
    }

    #[test]
    fn accepts_complete_config_without_email_service() {
        let config = validate(full()).unwrap();
        assert_eq!(config.sheet_id, "sheet");
        assert_eq!(config.email, None);
        assert!(config.required.email);
        assert!(config.required.phone);
    }

    #[test]
    fn reports_every_missing_required_key() {
        let raw = RawConfig {
            sheet_range: Some("Blogs!A2:B"),
            ..RawConfig::default()
        };
        let missing = validate(raw).unwrap_err();
        assert_eq!(
            missing,
            vec![
                "SIGRID_SHEET_ID",
                "SIGRID_SHEETS_API_KEY",
                "SIGRID_WEBHOOK_URL"
            ]
        );
    }

    #[test]
    fn complete_email_triple_enables_the_sink() {
        let raw = RawConfig {
            emailjs_service_id: Some("svc"),
            emailjs_template_id: Some("tpl"),
            emailjs_public_key: Some("pub"),
            ..full()
        };
        let config = validate(raw).unwrap();
        let email = config.email.unwrap();
        assert_eq!(email.service_id, "svc");
        assert_eq!(email.template_id, "tpl");
        assert_eq!(email.public_key, "pub");
    }

    #[test]
    fn partial_email_triple_is_a_config_error() {
        let raw = RawConfig {
            emailjs_service_id: Some("svc"),
            ..full()
        };
        let missing = validate(raw).unwrap_err();
        assert_eq!(
            missing,
            vec!["SIGRID_EMAILJS_TEMPLATE_ID", "SIGRID_EMAILJS_PUBLIC_KEY"]
        );
    }

    #[test]
    fn optional_field_flags_relax_the_required_policy() {
        let raw = RawConfig {
            email_optional: Some("1"),
            phone_optional: Some("true"),
            ..full()
        };
        let config = validate(raw).unwrap();
        assert!(!config.required.email);
        assert!(!config.required.phone);

        let raw = RawConfig {
            email_optional: Some("0"),
            ..full()
        };
        assert!(validate(raw).unwrap().required.email);
    }
}
