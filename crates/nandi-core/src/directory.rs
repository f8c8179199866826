//! Farmer roster for the admin panel.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FarmerStatus {
    Active,
    Inactive,
    Suspended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerRecord {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub registration_date: String,
    pub trust_score: u32,
    pub status: FarmerStatus,
    pub last_activity: String,
}

/// Search box plus status dropdown. `status: None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarmerFilter {
    pub search: String,
    pub status: Option<FarmerStatus>,
}

impl FarmerFilter {
    pub fn new(search: impl Into<String>, status: Option<FarmerStatus>) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// Name and location match case-insensitively; the phone number matches
    /// on the raw search text. An empty search matches everything.
    pub fn matches(&self, farmer: &FarmerRecord) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = farmer.name.to_lowercase().contains(&needle)
            || farmer.phone.contains(&self.search)
            || farmer.location.to_lowercase().contains(&needle);
        let matches_status = self.status.is_none_or(|status| farmer.status == status);
        matches_search && matches_status
    }
}

pub fn filter_farmers<'a>(
    farmers: &'a [FarmerRecord],
    filter: &FarmerFilter,
) -> Vec<&'a FarmerRecord> {
    farmers.iter().filter(|f| filter.matches(f)).collect()
}

/// Roster shown on the admin panel.
pub fn demo_farmers() -> Vec<FarmerRecord> {
    vec![
        farmer(
            "F001",
            "राम कुमार",
            "+91 98765 43210",
            "Ludhiana, Punjab",
            "2024-01-15",
            750,
            FarmerStatus::Active,
            "2 hours ago",
        ),
        farmer(
            "F002",
            "Priya Devi",
            "+91 87654 32109",
            "Amritsar, Punjab",
            "2024-01-20",
            680,
            FarmerStatus::Active,
            "1 day ago",
        ),
        farmer(
            "F003",
            "Suresh Patel",
            "+91 76543 21098",
            "Ahmedabad, Gujarat",
            "2024-02-01",
            820,
            FarmerStatus::Inactive,
            "5 days ago",
        ),
        farmer(
            "F004",
            "Lakshmi Reddy",
            "+91 65432 10987",
            "Hyderabad, Telangana",
            "2024-02-10",
            590,
            FarmerStatus::Suspended,
            "1 week ago",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn farmer(
    id: &str,
    name: &str,
    phone: &str,
    location: &str,
    registration_date: &str,
    trust_score: u32,
    status: FarmerStatus,
    last_activity: &str,
) -> FarmerRecord {
    FarmerRecord {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        location: location.to_string(),
        registration_date: registration_date.to_string(),
        trust_score,
        status,
        last_activity: last_activity.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(found: Vec<&FarmerRecord>) -> Vec<&str> {
        found.into_iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let farmers = demo_farmers();
        assert_eq!(filter_farmers(&farmers, &FarmerFilter::default()).len(), farmers.len());
    }

    #[test]
    fn test_search_location_case_insensitive() {
        let farmers = demo_farmers();
        let found = filter_farmers(&farmers, &FarmerFilter::new("PUNJAB", None));
        assert_eq!(ids(found), vec!["F001", "F002"]);
    }

    #[test]
    fn test_search_phone_and_status() {
        let farmers = demo_farmers();
        let found = filter_farmers(&farmers, &FarmerFilter::new("+91 7", None));
        assert_eq!(ids(found), vec!["F003"]);

        let found = filter_farmers(&farmers, &FarmerFilter::new("", Some(FarmerStatus::Active)));
        assert_eq!(ids(found), vec!["F001", "F002"]);

        let found = filter_farmers(&farmers, &FarmerFilter::new("punjab", Some(FarmerStatus::Inactive)));
        assert!(found.is_empty());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Suspended".parse::<FarmerStatus>().unwrap(), FarmerStatus::Suspended);
    }
}
