use serde::{Deserialize, Serialize};
use url::Url;

use crate::TwoTableError;

pub const WAITLIST_DEFAULT_ERROR: &str = "Failed to join waitlist";
pub const VENUE_DEFAULT_ERROR: &str = "Failed to submit venue application";

/// (value, label) pairs offered by the venue type select.
pub const VENUE_TYPES: &[(&str, &str)] = &[
    ("cocktail-bar", "Cocktail Bar"),
    ("wine-bar", "Wine Bar"),
    ("restaurant", "Restaurant"),
    ("fine-dining", "Fine Dining"),
    ("hotel-bar", "Hotel Bar"),
    ("cafe", "Cafe / Bistro"),
    ("other", "Other"),
];

pub const PAYOUT_RANGES: &[(&str, &str)] = &[
    ("10-20", "£10-20"),
    ("20-30", "£20-30"),
    ("30-40", "£30-40"),
    ("40-60", "£40-60"),
    ("60+", "£60+"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

fn collapse(errors: Vec<FieldError>) -> Result<(), TwoTableError> {
    if errors.is_empty() {
        return Ok(());
    }
    let joined = errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join("; ");
    Err(TwoTableError::Validation(joined))
}

/// Loose syntactic check: one `@`, non-empty local part, dotted domain, no spaces.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn is_web_address(web: &str) -> bool {
    Url::parse(web)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
        .unwrap_or(false)
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
}

impl WaitlistEntry {
    /// Trim the address and check it before it goes on the wire.
    pub fn new(email: &str) -> Result<Self, TwoTableError> {
        let email = email.trim().to_string();
        if !is_valid_email(&email) {
            return Err(TwoTableError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }
        Ok(Self { email })
    }
}

/// Partner application body for `/api/venue-application`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueApplication {
    pub venue: String,
    pub city: String,
    #[serde(rename = "type")]
    pub venue_type: String,
    pub web: Option<String>,
    pub contact: String,
    pub role: Option<String>,
    pub email: String,
    pub phone: String,
    pub nights: String,
    pub capacity: String,
    pub payout: String,
    pub notes: Option<String>,
}

impl VenueApplication {
    /// Trim every field, lowercase the email, and turn blank optionals into `None`.
    pub fn normalised(self) -> Self {
        Self {
            venue: self.venue.trim().to_string(),
            city: self.city.trim().to_string(),
            venue_type: self.venue_type.trim().to_string(),
            web: optional(self.web),
            contact: self.contact.trim().to_string(),
            role: optional(self.role),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
            nights: self.nights.trim().to_string(),
            capacity: self.capacity.trim().to_string(),
            payout: self.payout.trim().to_string(),
            notes: optional(self.notes),
        }
    }

    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut check = |ok: bool, field: &'static str, message: &'static str| {
            if !ok {
                errors.push(FieldError { field, message });
            }
        };

        check(self.venue.trim().chars().count() >= 2, "venue", "Venue name is required");
        check(self.city.trim().chars().count() >= 2, "city", "City is required");
        check(!self.venue_type.trim().is_empty(), "type", "Venue type is required");
        check(
            self.web.as_deref().map_or(true, |w| w.trim().is_empty() || is_web_address(w.trim())),
            "web",
            "Website must be a valid URL",
        );
        check(self.contact.trim().chars().count() >= 2, "contact", "Contact name is required");
        check(is_valid_email(&self.email), "email", "Valid email is required");
        check(self.phone.trim().chars().count() >= 10, "phone", "Valid phone number is required");
        check(!self.nights.trim().is_empty(), "nights", "Preferred nights required");
        check(!self.capacity.trim().is_empty(), "capacity", "Capacity information required");
        check(!self.payout.trim().is_empty(), "payout", "Payout preference required");

        errors
    }

    /// Normalise and validate in one step; the submit path only sends what this returns.
    pub fn checked(self) -> Result<Self, TwoTableError> {
        let normalised = self.normalised();
        collapse(normalised.field_errors())?;
        Ok(normalised)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Pull the `detail` message out of an error response body, or use `default`.
pub fn error_detail(body: &str, default: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| match d {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| default.to_string())
}

/// Successful response bodies are JSON when the backend sends any; otherwise `None`.
pub fn parse_success_body(body: &str) -> Option<serde_json::Value> {
    serde_json::from_str(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_application() -> VenueApplication {
        VenueApplication {
            venue: "  The Bistro ".to_string(),
            city: "Bristol".to_string(),
            venue_type: "restaurant".to_string(),
            web: Some("   ".to_string()),
            contact: "Jamie Hart".to_string(),
            role: Some(" GM ".to_string()),
            email: " Jamie@TheBistro.co.uk ".to_string(),
            phone: "+44 7700 900123".to_string(),
            nights: "Tue-Thu after 6pm".to_string(),
            capacity: "3-4 tables for two".to_string(),
            payout: "20-30".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_normalised_trims_and_nulls_blank_optionals() {
        let app = sample_application().normalised();
        assert_eq!(app.venue, "The Bistro");
        assert_eq!(app.email, "jamie@thebistro.co.uk");
        assert_eq!(app.web, None);
        assert_eq!(app.role.as_deref(), Some("GM"));
        assert_eq!(app.notes, None);
    }

    #[test]
    fn test_checked_accepts_valid_application() {
        assert!(sample_application().checked().is_ok());
    }

    #[test]
    fn test_field_errors_report_each_problem() {
        let app = VenueApplication {
            venue: "X".to_string(),
            phone: "123".to_string(),
            web: Some("not a url".to_string()),
            ..sample_application()
        };
        let fields: Vec<_> = app.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["venue", "web", "phone"]);
        assert!(matches!(app.checked(), Err(TwoTableError::Validation(_))));
    }

    #[test]
    fn test_serializes_type_field_and_nulls() {
        let json = serde_json::to_value(sample_application().normalised()).unwrap();
        assert_eq!(json["type"], "restaurant");
        assert!(json["web"].is_null());
        assert!(json.get("venue_type").is_none());
    }

    #[test]
    fn test_waitlist_entry_validation() {
        assert_eq!(WaitlistEntry::new(" sam@example.com ").unwrap().email, "sam@example.com");
        assert!(WaitlistEntry::new("sam@example").is_err());
        assert!(WaitlistEntry::new("sam example@x.com").is_err());
        assert!(WaitlistEntry::new("").is_err());
    }

    #[test]
    fn test_error_detail_extraction() {
        assert_eq!(
            error_detail(r#"{"detail":"Email already registered"}"#, WAITLIST_DEFAULT_ERROR),
            "Email already registered"
        );
        assert_eq!(error_detail("<html>502</html>", WAITLIST_DEFAULT_ERROR), WAITLIST_DEFAULT_ERROR);
        assert_eq!(error_detail(r#"{"detail":[{"loc":["email"]}]}"#, VENUE_DEFAULT_ERROR), VENUE_DEFAULT_ERROR);
        assert_eq!(error_detail("{}", VENUE_DEFAULT_ERROR), VENUE_DEFAULT_ERROR);
    }

    #[test]
    fn test_parse_success_body() {
        assert!(parse_success_body("").is_none());
        assert_eq!(parse_success_body(r#"{"id":7}"#).unwrap()["id"], 7);
    }
}
