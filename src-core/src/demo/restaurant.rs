use serde::{Deserialize, Serialize};

use super::config::Restaurant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Agreement {
    #[default]
    None,
    PrimaryConfirmed,
    ProposedConfirmed,
}

/// The system pick versus the user's counter-proposal.
///
/// Once an agreement is reached it is final. Later proposals are ignored and
/// only the side already agreed can be confirmed again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantNegotiation {
    primary_id: String,
    proposed_id: Option<String>,
    agreement: Agreement,
}

impl RestaurantNegotiation {
    pub fn new(primary_id: impl Into<String>) -> Self {
        Self {
            primary_id: primary_id.into(),
            proposed_id: None,
            agreement: Agreement::None,
        }
    }

    /// Back to the default decision: system pick, no proposal, nothing agreed.
    pub fn reset(&mut self, primary_id: &str) {
        *self = Self::new(primary_id);
    }

    pub fn primary_id(&self) -> &str {
        &self.primary_id
    }

    pub fn proposed_id(&self) -> Option<&str> {
        self.proposed_id.as_deref()
    }

    pub fn agreement(&self) -> Agreement {
        self.agreement
    }

    pub fn is_settled(&self) -> bool {
        self.agreement != Agreement::None
    }

    /// Record a counter-proposal. Ids not in `options` are ignored, as is
    /// anything proposed after an agreement.
    pub fn propose(&mut self, id: &str, options: &[Restaurant]) -> bool {
        if self.is_settled() || options.iter().all(|r| r.id != id) {
            return false;
        }
        self.proposed_id = Some(id.to_string());
        true
    }

    /// Agree on the system pick. Returns the confirmed restaurant, or the
    /// same restaurant again if the pick was already agreed.
    pub fn confirm_primary<'a>(&mut self, options: &'a [Restaurant]) -> Option<&'a Restaurant> {
        match self.agreement {
            Agreement::PrimaryConfirmed => return find(options, &self.primary_id),
            Agreement::ProposedConfirmed => return None,
            Agreement::None => {}
        }
        let chosen = find(options, &self.primary_id)?;
        self.agreement = Agreement::PrimaryConfirmed;
        Some(chosen)
    }

    /// Agree on the counter-proposal. Rejected without side effects when
    /// nothing has been proposed or the system pick was already agreed.
    pub fn confirm_proposed<'a>(&mut self, options: &'a [Restaurant]) -> Option<&'a Restaurant> {
        match self.agreement {
            Agreement::ProposedConfirmed => return find(options, self.proposed_id.as_deref()?),
            Agreement::PrimaryConfirmed => return None,
            Agreement::None => {}
        }
        let chosen = find(options, self.proposed_id.as_deref()?)?;
        self.agreement = Agreement::ProposedConfirmed;
        Some(chosen)
    }

    /// Proposed restaurant if that was agreed, else the primary. Computed on
    /// every read so it tracks id changes made before confirmation.
    pub fn effective<'a>(&self, options: &'a [Restaurant]) -> Option<&'a Restaurant> {
        match (self.agreement, self.proposed_id.as_deref()) {
            (Agreement::ProposedConfirmed, Some(id)) => find(options, id),
            _ => find(options, &self.primary_id),
        }
    }
}

fn find<'a>(options: &'a [Restaurant], id: &str) -> Option<&'a Restaurant> {
    options.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::config::DemoConfig;

    fn options() -> Vec<Restaurant> {
        DemoConfig::default().restaurants
    }

    #[test]
    fn test_confirm_proposed_without_proposal_is_rejected() {
        let options = options();
        let mut n = RestaurantNegotiation::new("bella");
        assert!(n.confirm_proposed(&options).is_none());
        assert_eq!(n, RestaurantNegotiation::new("bella"));
    }

    #[test]
    fn test_effective_follows_agreement() {
        let options = options();
        let mut n = RestaurantNegotiation::new("bella");
        assert!(n.propose("sakura", &options));
        assert_eq!(n.effective(&options).unwrap().name, "Bella Vita");

        assert_eq!(n.confirm_proposed(&options).unwrap().name, "Sakura House");
        assert_eq!(n.agreement(), Agreement::ProposedConfirmed);
        assert_eq!(n.effective(&options).unwrap().name, "Sakura House");
    }

    #[test]
    fn test_primary_agreement_ignores_later_proposals() {
        let options = options();
        let mut n = RestaurantNegotiation::new("bella");
        n.confirm_primary(&options).unwrap();
        n.propose("garden", &options);
        assert_eq!(n.effective(&options).unwrap().id, "bella");
        assert!(n.confirm_proposed(&options).is_none());
        assert_eq!(n.agreement(), Agreement::PrimaryConfirmed);
    }

    #[test]
    fn test_reconfirm_returns_agreed_side_only() {
        let options = options();
        let mut n = RestaurantNegotiation::new("bella");
        n.propose("sakura", &options);
        n.confirm_proposed(&options).unwrap();
        let settled = n.clone();

        assert_eq!(n.confirm_proposed(&options).unwrap().id, "sakura");
        assert!(n.confirm_primary(&options).is_none());
        assert!(!n.propose("garden", &options));
        assert_eq!(n, settled);
        assert_eq!(n.effective(&options).unwrap().id, "sakura");
    }

    #[test]
    fn test_unknown_proposal_ignored() {
        let options = options();
        let mut n = RestaurantNegotiation::new("bella");
        assert!(!n.propose("nowhere", &options));
        assert_eq!(n.proposed_id(), None);
    }

    #[test]
    fn test_reset_clears_decision() {
        let options = options();
        let mut n = RestaurantNegotiation::new("bella");
        n.propose("garden", &options);
        n.confirm_proposed(&options);
        n.reset("bella");
        assert_eq!(n.agreement(), Agreement::None);
        assert_eq!(n.proposed_id(), None);
    }
}
