//! Property Entity
//!
//! A real-estate unit with an ownership share and optional co-owners.

use serde::{Deserialize, Serialize};

use super::badge::{Badge, BadgeStyle};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    pub name: String,
    /// Share owned, in percent. Not validated; values outside 0-100 are
    /// displayed as-is.
    pub ownership_percent: i32,
    pub co_owners: Vec<String>,
}

impl Property {
    pub fn ownership_badge(&self) -> Badge {
        ownership_badge(self.ownership_percent)
    }
}

impl Entity for Property {
    const KIND: &'static str = "property";

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }
}

/// Full ownership is a success badge, any other share is a warning
pub fn ownership_badge(percent: i32) -> Badge {
    let style = if percent == 100 { BadgeStyle::Success } else { BadgeStyle::Warning };
    Badge::new(style, format!("{}%", percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_ownership_badge() {
        assert_eq!(ownership_badge(100), Badge::new(BadgeStyle::Success, "100%"));
    }

    #[test]
    fn test_partial_ownership_badges() {
        for percent in [0, 50, 75, 99, 101, 150, -5] {
            let badge = ownership_badge(percent);
            assert_eq!(badge.style, BadgeStyle::Warning);
            assert_eq!(badge.label, format!("{}%", percent));
        }
    }
}
