use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use twotable_core::config::SiteConfig;
use twotable_core::forms::{
    error_detail, parse_success_body, VenueApplication, WaitlistEntry, VENUE_DEFAULT_ERROR,
    WAITLIST_DEFAULT_ERROR,
};
use twotable_core::TwoTableError;

pub fn site_config() -> SiteConfig {
    SiteConfig::from_api_base(option_env!("TWOTABLE_API_BASE"))
}

// -- Shared POST helper --

/// POST `body` as JSON. Success yields the parsed response, or `None` when the
/// body is empty or not JSON. Failure carries the server's `detail` message.
async fn post_json<T: Serialize>(
    url: &str,
    body: &T,
    default_error: &str,
) -> Result<Option<Value>, TwoTableError> {
    debug!("Sending to {}", url);

    let response = Request::post(url)
        .json(body)
        .map_err(|e| TwoTableError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| TwoTableError::Request(e.to_string()))?;

    debug!("Response status {}", response.status());
    let text = response.text().await.unwrap_or_default();

    if !response.ok() {
        warn!("POST {} failed with {}: {}", url, response.status(), text);
        return Err(TwoTableError::Server(error_detail(&text, default_error)));
    }

    Ok(parse_success_body(&text))
}

// -- Typed submit helpers --

pub async fn join_waitlist(email: &str) -> Result<Option<Value>, String> {
    let entry = WaitlistEntry::new(email)?;
    let url = site_config().waitlist_url();
    Ok(post_json(&url, &entry, WAITLIST_DEFAULT_ERROR).await?)
}

pub async fn submit_venue_application(
    application: VenueApplication,
) -> Result<Option<Value>, String> {
    let application = application.checked()?;
    let url = site_config().venue_application_url();
    Ok(post_json(&url, &application, VENUE_DEFAULT_ERROR).await?)
}
