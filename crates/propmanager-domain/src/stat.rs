//! Dashboard Stat
//!
//! One summary tile on the fiscal dashboard.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Increase,
    Decrease,
    Neutral,
}

/// Icon shown in the tile's corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatIcon {
    Revenue,
    Contracts,
    Properties,
    Occupancy,
}

impl StatIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            StatIcon::Revenue => "💰",
            StatIcon::Contracts => "📄",
            StatIcon::Properties => "📊",
            StatIcon::Occupancy => "📈",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub id: u32,
    pub label: String,
    /// Preformatted display value ("48,000 RON", "92%")
    pub value: String,
    pub change: String,
    pub direction: ChangeDirection,
    pub icon: StatIcon,
}

impl DashboardStat {
    /// Caption under the value; only increases are called out
    pub fn change_caption(&self) -> Option<String> {
        match self.direction {
            ChangeDirection::Increase => Some(format!("{} vs last month", self.change)),
            ChangeDirection::Decrease | ChangeDirection::Neutral => None,
        }
    }
}
