use super::*;

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = SiteConfig::from_lookup(|_| None);
    assert_eq!(config.data_url, "projects.json");
    assert_eq!(config.contact_email, "karimessac@gmail.com");
    assert_eq!(config.email.endpoint, DEFAULT_EMAILJS_ENDPOINT);
    assert_eq!(config.email.service_id, "service_3y3flil");
    assert_eq!(config.email.template_id, "template_0wx3njk");
    assert!(!config.email.is_configured());
}

#[test]
fn default_impl_matches_empty_lookup() {
    assert_eq!(SiteConfig::default(), SiteConfig::from_lookup(|_| None));
}

#[test]
fn lookup_values_override_defaults() {
    let config = SiteConfig::from_lookup(|key| match key {
        "PORTFOLIO_DATA_URL" => Some("/data/projects.json"),
        "EMAILJS_PUBLIC_KEY" => Some("pk_123"),
        "PORTFOLIO_CONTACT_EMAIL" => Some("me@example.com"),
        _ => None,
    });
    assert_eq!(config.data_url, "/data/projects.json");
    assert_eq!(config.contact_email, "me@example.com");
    assert_eq!(config.email.public_key, "pk_123");
    assert!(config.email.is_configured());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = SiteConfig::from_lookup(|key| match key {
        "PORTFOLIO_DATA_URL" | "EMAILJS_PUBLIC_KEY" => Some("   "),
        _ => None,
    });
    assert_eq!(config.data_url, DEFAULT_DATA_URL);
    assert!(!config.email.is_configured());
}

#[test]
fn values_are_trimmed() {
    let config = SiteConfig::from_lookup(|key| (key == "PORTFOLIO_OWNER_NAME").then_some("  Ada  "));
    assert_eq!(config.owner_name, "Ada");
}

#[test]
fn endpoint_trailing_slash_is_stripped() {
    let config = SiteConfig::from_lookup(|key| (key == "EMAILJS_ENDPOINT").then_some("https://mail.example.com/send/"));
    assert_eq!(config.email.endpoint, "https://mail.example.com/send");
}

#[test]
fn build_env_config_has_usable_data_url() {
    assert!(!SiteConfig::from_build_env().data_url.is_empty());
}
