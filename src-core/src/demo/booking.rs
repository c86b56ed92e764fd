use serde::Serialize;

/// Shown when nothing upstream has settled a restaurant (direct screen jumps).
pub const PLACEHOLDER_RESTAURANT: &str = "Bella Vita";
/// Shown when nothing upstream has settled a time.
pub const PLACEHOLDER_TIME: &str = "Saturday \u{b7} 20:30";
pub const PLACEHOLDER_PARTNER: &str = "your match";

/// Written only by restaurant confirmation and time lock-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub restaurant: Option<String>,
    pub time: Option<String>,
}

/// What the terminal screens render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    pub restaurant: String,
    pub time: String,
    pub partner: String,
    pub partner_image: Option<String>,
    /// Set when the time came from one-sided approval.
    pub approved_by: Option<String>,
}

/// Inputs the projection falls back on, all derived live by the controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fallbacks<'a> {
    pub effective_restaurant: Option<&'a str>,
    pub matched_slot_label: Option<&'a str>,
    pub partner: Option<&'a str>,
    pub partner_image: Option<&'a str>,
}

/// Booked value first, then the live derivation, then a fixed placeholder.
pub fn project(booking: &Booking, no_overlap: bool, fallbacks: Fallbacks<'_>) -> BookingSummary {
    let partner = fallbacks.partner.unwrap_or(PLACEHOLDER_PARTNER).to_string();

    BookingSummary {
        restaurant: booking
            .restaurant
            .as_deref()
            .or(fallbacks.effective_restaurant)
            .unwrap_or(PLACEHOLDER_RESTAURANT)
            .to_string(),
        time: booking
            .time
            .as_deref()
            .or(fallbacks.matched_slot_label)
            .unwrap_or(PLACEHOLDER_TIME)
            .to_string(),
        partner_image: fallbacks.partner_image.map(str::to_string),
        approved_by: no_overlap.then(|| partner.clone()),
        partner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booked_values_win() {
        let booking = Booking {
            restaurant: Some("Sakura House".to_string()),
            time: Some("Friday \u{b7} 20:30".to_string()),
        };
        let summary = project(
            &booking,
            false,
            Fallbacks {
                effective_restaurant: Some("Bella Vita"),
                matched_slot_label: Some("Sunday \u{b7} 19:30"),
                ..Fallbacks::default()
            },
        );
        assert_eq!(summary.restaurant, "Sakura House");
        assert_eq!(summary.time, "Friday \u{b7} 20:30");
        assert_eq!(summary.approved_by, None);
    }

    #[test]
    fn test_falls_back_to_derived_then_placeholder() {
        let derived = project(
            &Booking::default(),
            false,
            Fallbacks {
                effective_restaurant: Some("The Garden"),
                matched_slot_label: Some("Sunday \u{b7} 19:30"),
                ..Fallbacks::default()
            },
        );
        assert_eq!(derived.restaurant, "The Garden");
        assert_eq!(derived.time, "Sunday \u{b7} 19:30");

        let bare = project(&Booking::default(), false, Fallbacks::default());
        assert_eq!(bare.restaurant, PLACEHOLDER_RESTAURANT);
        assert_eq!(bare.time, PLACEHOLDER_TIME);
        assert_eq!(bare.partner, PLACEHOLDER_PARTNER);
    }

    #[test]
    fn test_no_overlap_names_approver() {
        let summary = project(
            &Booking::default(),
            true,
            Fallbacks {
                partner: Some("Marcus, 31"),
                ..Fallbacks::default()
            },
        );
        assert_eq!(summary.approved_by.as_deref(), Some("Marcus, 31"));
    }
}
