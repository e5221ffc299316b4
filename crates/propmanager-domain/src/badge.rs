//! Badge
//!
//! A small categorical label rendered next to a record.

use serde::{Deserialize, Serialize};

/// Visual style of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Success,
    Warning,
    Danger,
}

impl BadgeStyle {
    /// CSS class rendered on the badge element
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeStyle::Success => "badge-success",
            BadgeStyle::Warning => "badge-warning",
            BadgeStyle::Danger => "badge-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub style: BadgeStyle,
    pub label: String,
}

impl Badge {
    pub fn new(style: BadgeStyle, label: impl Into<String>) -> Self {
        Self { style, label: label.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_classes() {
        assert_eq!(BadgeStyle::Success.css_class(), "badge-success");
        assert_eq!(BadgeStyle::Warning.css_class(), "badge-warning");
        assert_eq!(BadgeStyle::Danger.css_class(), "badge-danger");
    }
}
