//! Contact form delivery through the `EmailJS` REST API.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (missing key, network, non-2xx) comes back as an `Err`
//! string for the developer log; the form shows its own fixed message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use serde::Serialize;

use crate::config::EmailConfig;
use crate::state::contact::ContactDraft;

/// Template variables referenced by the `EmailJS` template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl From<ContactDraft> for TemplateParams {
    fn from(draft: ContactDraft) -> Self {
        Self { from_name: draft.name, from_email: draft.email, message: draft.message }
    }
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams,
}

/// Build the request body, or explain why the form cannot send.
///
/// # Errors
///
/// Returns an error when no public key was configured at build time.
pub fn build_request(config: &EmailConfig, draft: ContactDraft) -> Result<SendRequest<'_>, String> {
    if !config.is_configured() {
        return Err("email transport not configured: EMAILJS_PUBLIC_KEY is empty".to_owned());
    }
    Ok(SendRequest {
        service_id: config.service_id,
        template_id: config.template_id,
        user_id: config.public_key,
        template_params: draft.into(),
    })
}

#[cfg(any(test, feature = "csr"))]
fn send_failed_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("email send failed: {status}")
    } else {
        format!("email send failed: {status} {body}")
    }
}

/// Send the contact message.
///
/// # Errors
///
/// Returns an error string if the request cannot be built, cannot be sent,
/// or the service answers with a non-success status.
pub async fn send_message(config: &EmailConfig, draft: ContactDraft) -> Result<(), String> {
    let request = build_request(config, draft)?;
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(config.endpoint)
            .json(&request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(send_failed_message(resp.status(), &body));
        }
        log::info!("contact message sent ({})", resp.status());
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(format!("cannot send to {} outside the browser (service {})", config.endpoint, request.service_id))
    }
}
