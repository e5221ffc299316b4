//! Sample Data
//!
//! Hardcoded records each view mounts with. Every call builds a fresh copy,
//! so views never share a collection.

use chrono::NaiveDate;

use crate::catalog::Currency;
use crate::contract::{Contract, ContractStatus, Tenant};
use crate::property::Property;
use crate::stat::{ChangeDirection, DashboardStat, StatIcon};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn sample_properties() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            name: "Apartament Centru Cluj".to_string(),
            ownership_percent: 100,
            co_owners: vec![],
        },
        Property {
            id: 2,
            name: "Casa Ploiești".to_string(),
            ownership_percent: 50,
            co_owners: vec!["Ionescu Maria".to_string()],
        },
        Property {
            id: 3,
            name: "Studio București".to_string(),
            ownership_percent: 75,
            co_owners: vec!["Popescu Ion".to_string()],
        },
    ]
}

pub fn sample_contracts() -> Vec<Contract> {
    vec![
        Contract {
            id: 1,
            tenant: Tenant {
                name: "Popescu Ion".to_string(),
                phone: "0722123456".to_string(),
                email: "popescu@email.com".to_string(),
            },
            property: "Apartament Centru Cluj".to_string(),
            rent: 2500.0,
            currency: Currency::Ron,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 12, 31),
            status: ContractStatus::Active,
        },
        Contract {
            id: 2,
            tenant: Tenant {
                name: "Ionescu Maria".to_string(),
                phone: "0733987654".to_string(),
                email: "ionescu@email.com".to_string(),
            },
            property: "Casa Ploiești".to_string(),
            rent: 1500.0,
            currency: Currency::Ron,
            start_date: date(2024, 2, 1),
            end_date: date(2026, 2, 28),
            status: ContractStatus::Expiring,
        },
    ]
}

/// Property choices offered by the add-contract form, as (value, label)
pub fn contract_property_options() -> Vec<(u32, String)> {
    vec![
        (1, "Apartament Centru Cluj".to_string()),
        (2, "Casa Ploiești".to_string()),
    ]
}

pub fn dashboard_stats() -> Vec<DashboardStat> {
    vec![
        DashboardStat {
            id: 1,
            label: "Total Annual Income".to_string(),
            value: "48,000 RON".to_string(),
            change: "+12%".to_string(),
            direction: ChangeDirection::Increase,
            icon: StatIcon::Revenue,
        },
        DashboardStat {
            id: 2,
            label: "Active Contracts".to_string(),
            value: "12".to_string(),
            change: "+2".to_string(),
            direction: ChangeDirection::Increase,
            icon: StatIcon::Contracts,
        },
        DashboardStat {
            id: 3,
            label: "Rented Properties".to_string(),
            value: "8".to_string(),
            change: "0".to_string(),
            direction: ChangeDirection::Neutral,
            icon: StatIcon::Properties,
        },
        DashboardStat {
            id: 4,
            label: "Occupancy Rate".to_string(),
            value: "92%".to_string(),
            change: "+5%".to_string(),
            direction: ChangeDirection::Increase,
            icon: StatIcon::Occupancy,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::BadgeStyle;
    use crate::entity::Entity;

    #[test]
    fn test_full_ownership_has_no_co_owners() {
        for property in sample_properties() {
            if property.ownership_percent == 100 {
                assert!(property.co_owners.is_empty(), "{} lists co-owners", property.title());
            }
        }
    }

    #[test]
    fn test_sample_badges() {
        let badges: Vec<BadgeStyle> = sample_properties()
            .iter()
            .map(|p| p.ownership_badge().style)
            .collect();
        assert_eq!(badges, vec![BadgeStyle::Success, BadgeStyle::Warning, BadgeStyle::Warning]);

        let statuses: Vec<&str> = sample_contracts()
            .iter()
            .map(|c| c.status.as_str())
            .collect();
        assert_eq!(statuses, vec!["active", "expiring"]);
    }

    #[test]
    fn test_dates_are_real() {
        for contract in sample_contracts() {
            assert!(contract.start_date < contract.end_date);
            assert_ne!(contract.start_date, NaiveDate::default());
        }
    }

    #[test]
    fn test_four_dashboard_tiles() {
        let stats = dashboard_stats();
        assert_eq!(stats.len(), 4);
        let captions = stats.iter().filter(|s| s.change_caption().is_some()).count();
        assert_eq!(captions, 3);
    }

    #[test]
    fn test_form_options_name_sample_properties() {
        let names: Vec<String> = sample_properties().into_iter().map(|p| p.name).collect();
        for (_, label) in contract_property_options() {
            assert!(names.contains(&label));
        }
    }
}
