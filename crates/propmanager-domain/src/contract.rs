//! Contract Entity
//!
//! A rental agreement linking a tenant to a property for a date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::badge::{Badge, BadgeStyle};
use super::catalog::Currency;
use super::entity::Entity;

/// Expiry status carried by the sample data
///
/// The status is precomputed, never derived from comparing the end date with
/// today's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Active,
    Expiring,
    /// Catch-all: every unrecognized tag lands here
    #[serde(other)]
    Expired,
}

impl ContractStatus {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "active" => ContractStatus::Active,
            "expiring" => ContractStatus::Expiring,
            _ => ContractStatus::Expired,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Active => "active",
            ContractStatus::Expiring => "expiring",
            ContractStatus::Expired => "expired",
        }
    }

    pub fn badge(&self) -> Badge {
        match self {
            ContractStatus::Active => Badge::new(BadgeStyle::Success, "Active"),
            ContractStatus::Expiring => Badge::new(BadgeStyle::Warning, "Expiring soon"),
            ContractStatus::Expired => Badge::new(BadgeStyle::Danger, "Expired"),
        }
    }
}

/// Tenant identity embedded in a contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: u32,
    pub tenant: Tenant,
    /// Name of the rented property (a plain string, not a reference)
    pub property: String,
    pub rent: f64,
    pub currency: Currency,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ContractStatus,
}

impl Entity for Contract {
    const KIND: &'static str = "contract";

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.tenant.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badges() {
        let active = ContractStatus::from_tag("active").badge();
        assert_eq!(active.style, BadgeStyle::Success);
        assert_eq!(active.label, "Active");

        let expiring = ContractStatus::from_tag("expiring").badge();
        assert_eq!(expiring.style, BadgeStyle::Warning);
        assert_eq!(expiring.label, "Expiring soon");

        let cancelled = ContractStatus::from_tag("cancelled").badge();
        assert_eq!(cancelled.style, BadgeStyle::Danger);
        assert_eq!(cancelled.label, "Expired");
    }

    #[test]
    fn test_tag_round_trip() {
        for status in [ContractStatus::Active, ContractStatus::Expiring, ContractStatus::Expired] {
            assert_eq!(ContractStatus::from_tag(status.as_str()), status);
        }
    }

    #[test]
    fn test_unknown_tag_deserializes_as_expired() {
        let status: ContractStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, ContractStatus::Expired);
        let status: ContractStatus = serde_json::from_str("\"expiring\"").unwrap();
        assert_eq!(status, ContractStatus::Expiring);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert_eq!(ContractStatus::from_tag("Active"), ContractStatus::Expired);
    }
}
