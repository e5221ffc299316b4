//! Option Catalogs
//!
//! Fixed option lists offered by the add-contract form.

use serde::{Deserialize, Serialize};

/// Currency a rent is quoted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Ron,
    Eur,
    Usd,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Ron, Currency::Eur, Currency::Usd];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ron => "RON",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }
}

/// How often rent is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    #[default]
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl PaymentFrequency {
    pub const ALL: [PaymentFrequency; 4] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::Quarterly,
        PaymentFrequency::Semiannual,
        PaymentFrequency::Annual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Quarterly => "quarterly",
            PaymentFrequency::Semiannual => "semiannual",
            PaymentFrequency::Annual => "annual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "Monthly",
            PaymentFrequency::Quarterly => "Quarterly",
            PaymentFrequency::Semiannual => "Every six months",
            PaymentFrequency::Annual => "Annual",
        }
    }
}

/// Legal form of the tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TenantKind {
    #[default]
    Individual,
    Company,
}

impl TenantKind {
    pub const ALL: [TenantKind; 2] = [TenantKind::Individual, TenantKind::Company];

    pub fn as_str(&self) -> &'static str {
        match self {
            TenantKind::Individual => "individual",
            TenantKind::Company => "company",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TenantKind::Individual => "Individual",
            TenantKind::Company => "Company",
        }
    }

    /// Name of the identification code this kind of tenant carries
    pub fn code_label(&self) -> &'static str {
        match self {
            TenantKind::Individual => "CNP",
            TenantKind::Company => "CUI",
        }
    }
}

/// Romanian counties offered for the tenant address
pub const COUNTIES: &[&str] = &[
    "Alba", "Arad", "Argeș", "Bacău", "Bihor", "Bistrița-Năsăud",
    "Botoșani", "Brașov", "Brăila", "București", "Buzău", "Caraș-Severin",
    "Călărași", "Cluj", "Constanța", "Covasna", "Dâmbovița", "Dolj",
    "Galați", "Giurgiu", "Gorj", "Harghita", "Hunedoara", "Ialomița",
    "Iași", "Ilfov", "Maramureș", "Mehedinți", "Mureș", "Neamț",
    "Olt", "Prahova", "Satu Mare", "Sălaj", "Sibiu", "Suceava",
    "Teleorman", "Timiș", "Tulcea", "Vaslui", "Vâlcea", "Vrancea",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes_match_serde() {
        for currency in Currency::ALL {
            let json = serde_json::to_string(&currency).unwrap();
            assert_eq!(json, format!("\"{}\"", currency.code()));
        }
    }

    #[test]
    fn test_defaults_are_first_options() {
        assert_eq!(Currency::default(), Currency::ALL[0]);
        assert_eq!(PaymentFrequency::default(), PaymentFrequency::ALL[0]);
        assert_eq!(TenantKind::default(), TenantKind::ALL[0]);
    }

    #[test]
    fn test_counties() {
        assert_eq!(COUNTIES.len(), 42);
        assert!(COUNTIES.contains(&"Cluj"));
    }
}
