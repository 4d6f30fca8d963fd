//! Site configuration baked in at build time.
//!
//! A static page has no runtime environment, so values come from
//! `option_env!` when the WASM bundle is compiled:
//!
//! - `PORTFOLIO_DATA_URL`: project document URL (default `projects.json`)
//! - `PORTFOLIO_OWNER_NAME`: name shown in the hero and footer
//! - `PORTFOLIO_CONTACT_EMAIL`: fallback address shown when sending fails
//! - `EMAILJS_ENDPOINT`: `EmailJS` REST endpoint
//! - `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`: `EmailJS` routing
//! - `EMAILJS_PUBLIC_KEY`: account key; empty means the contact form cannot send

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_DATA_URL: &str = "projects.json";
pub const DEFAULT_OWNER_NAME: &str = "Karim Essac";
pub const DEFAULT_CONTACT_EMAIL: &str = "karimessac@gmail.com";
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_EMAILJS_SERVICE_ID: &str = "service_3y3flil";
pub const DEFAULT_EMAILJS_TEMPLATE_ID: &str = "template_0wx3njk";

/// `EmailJS` delivery settings for the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailConfig {
    pub endpoint: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl EmailConfig {
    /// Whether a public key was supplied at build time.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.public_key.is_empty()
    }
}

/// Typed site configuration, provided to components through context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub data_url: &'static str,
    pub owner_name: &'static str,
    pub contact_email: &'static str,
    pub email: EmailConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    /// Build config from variables captured when the crate was compiled.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "PORTFOLIO_DATA_URL" => option_env!("PORTFOLIO_DATA_URL"),
            "PORTFOLIO_OWNER_NAME" => option_env!("PORTFOLIO_OWNER_NAME"),
            "PORTFOLIO_CONTACT_EMAIL" => option_env!("PORTFOLIO_CONTACT_EMAIL"),
            "EMAILJS_ENDPOINT" => option_env!("EMAILJS_ENDPOINT"),
            "EMAILJS_SERVICE_ID" => option_env!("EMAILJS_SERVICE_ID"),
            "EMAILJS_TEMPLATE_ID" => option_env!("EMAILJS_TEMPLATE_ID"),
            "EMAILJS_PUBLIC_KEY" => option_env!("EMAILJS_PUBLIC_KEY"),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<&'static str>) -> Self {
        let value = |key: &str, default: &'static str| non_blank(lookup(key)).unwrap_or(default);
        Self {
            data_url: value("PORTFOLIO_DATA_URL", DEFAULT_DATA_URL),
            owner_name: value("PORTFOLIO_OWNER_NAME", DEFAULT_OWNER_NAME),
            contact_email: value("PORTFOLIO_CONTACT_EMAIL", DEFAULT_CONTACT_EMAIL),
            email: EmailConfig {
                endpoint: value("EMAILJS_ENDPOINT", DEFAULT_EMAILJS_ENDPOINT).trim_end_matches('/'),
                service_id: value("EMAILJS_SERVICE_ID", DEFAULT_EMAILJS_SERVICE_ID),
                template_id: value("EMAILJS_TEMPLATE_ID", DEFAULT_EMAILJS_TEMPLATE_ID),
                public_key: value("EMAILJS_PUBLIC_KEY", ""),
            },
        }
    }
}

fn non_blank(raw: Option<&'static str>) -> Option<&'static str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
