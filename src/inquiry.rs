//! Contact inquiry encoding
//!
//! Turns contact form values into a `mailto:` link. Nothing is stored or sent:
//! the browser hands the link to the visitor's mail client.

use serde::{Deserialize, Serialize};

/// Fixed recipient of every inquiry
pub const INQUIRY_RECIPIENT: &str = "hello@deborahgeorge.writes";

/// Subject fallback when no project is given
const DEFAULT_PROJECT: &str = "Writing";

/// Contact form submission
///
/// Unset fields deserialize to empty strings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub project: String,
    pub budget: String,
    pub timeline: String,
    /// Collected by the form but not part of the mail draft
    pub website: String,
    pub message: String,
}

/// Encoded mail draft
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MailtoLink {
    pub subject: String,
    pub body: String,
    #[serde(rename = "mailto")]
    pub uri: String,
}

impl Inquiry {
    /// Build `Project inquiry: <project>`
    pub fn subject(&self) -> String {
        let project = if self.project.is_empty() {
            DEFAULT_PROJECT
        } else {
            &self.project
        };
        format!("Project inquiry: {project}")
    }

    /// Build the labelled body, one field per line, message after `---`
    pub fn body(&self) -> String {
        [
            format!("Name: {}", self.name),
            format!("Email: {}", self.email),
            format!("Project: {}", self.project),
            format!("Budget: {}", self.budget),
            format!("Timeline: {}", self.timeline),
            "---".to_string(),
            self.message.clone(),
        ]
        .join("\n")
    }

    /// Encode the inquiry as a `mailto:` link to [`INQUIRY_RECIPIENT`]
    pub fn encode(&self) -> MailtoLink {
        let subject = self.subject();
        let body = self.body();
        let uri = format!(
            "mailto:{INQUIRY_RECIPIENT}?subject={}&body={}",
            urlencoding::encode(&subject),
            urlencoding::encode(&body),
        );
        MailtoLink { subject, body, uri }
    }

    /// Names of required fields that are blank
    ///
    /// The encoder accepts anything; this check is for the form handlers.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        missing
    }

    /// Parse an `application/x-www-form-urlencoded` body
    ///
    /// Unknown keys are ignored; later duplicates win. Pairs that fail to
    /// decode as UTF-8 are skipped.
    pub fn from_form(form: &str) -> Self {
        let mut inquiry = Self::default();
        for pair in form.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let Some(key) = decode_form_component(key) else {
                continue;
            };
            let Some(value) = decode_form_component(value) else {
                continue;
            };
            let slot = match key.as_str() {
                "name" => &mut inquiry.name,
                "email" => &mut inquiry.email,
                "project" => &mut inquiry.project,
                "budget" => &mut inquiry.budget,
                "timeline" => &mut inquiry.timeline,
                "website" => &mut inquiry.website,
                "message" => &mut inquiry.message,
                _ => continue,
            };
            *slot = value;
        }
        inquiry
    }
}

/// Decode one form component (`+` is a space)
fn decode_form_component(component: &str) -> Option<String> {
    urlencoding::decode(&component.replace('+', " "))
        .ok()
        .map(std::borrow::Cow::into_owned)
}
