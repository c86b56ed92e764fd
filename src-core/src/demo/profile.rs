use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookingFor {
    #[default]
    #[serde(rename = "Long-term")]
    LongTerm,
    #[serde(rename = "Something casual")]
    SomethingCasual,
    #[serde(rename = "Open to either")]
    OpenToEither,
}

impl LookingFor {
    pub const ALL: [LookingFor; 3] = [
        LookingFor::LongTerm,
        LookingFor::SomethingCasual,
        LookingFor::OpenToEither,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LookingFor::LongTerm => "Long-term",
            LookingFor::SomethingCasual => "Something casual",
            LookingFor::OpenToEither => "Open to either",
        }
    }
}

/// Profile vibe tags and the "looking for" choice. Display only; nothing
/// downstream reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileStore {
    tags: BTreeSet<String>,
    looking_for: LookingFor,
}

impl ProfileStore {
    pub fn with_tags<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            looking_for: LookingFor::default(),
        }
    }

    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_string());
            true
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn looking_for(&self) -> LookingFor {
        self.looking_for
    }

    pub fn set_looking_for(&mut self, value: LookingFor) {
        self.looking_for = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut store = ProfileStore::with_tags(["Foodie", "Traveler"]);
        let before = store.tags().clone();

        assert!(store.toggle_tag("Books"));
        assert!(!store.toggle_tag("Books"));
        assert!(!store.toggle_tag("Foodie"));
        assert!(store.toggle_tag("Foodie"));

        assert_eq!(store.tags(), &before);
    }

    #[test]
    fn test_looking_for_labels_round_trip_through_serde() {
        for value in LookingFor::ALL {
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, format!("\"{}\"", value.label()));
        }
        let mut store = ProfileStore::default();
        store.set_looking_for(LookingFor::OpenToEither);
        assert_eq!(store.looking_for(), LookingFor::OpenToEither);
    }
}
